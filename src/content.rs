use crate::constants::CONTENT_SCRIPT_ID;
use crate::core::Content;
use web_sys as web;

static BUILTIN_CONTENT: &str = include_str!("../content/portfolio.json");

/// Content from an inline `<script type="application/json">` override when
/// present and valid, the embedded payload otherwise.
pub fn load(document: &web::Document) -> anyhow::Result<Content> {
    if let Some(json) = document
        .get_element_by_id(CONTENT_SCRIPT_ID)
        .and_then(|el| el.text_content())
    {
        match Content::from_json(&json) {
            Ok(content) => {
                log::info!("[content] loaded override #{}", CONTENT_SCRIPT_ID);
                return Ok(content);
            }
            Err(e) => log::warn!("[content] override ignored: {}", e),
        }
    }
    let content = Content::from_json(BUILTIN_CONTENT)?;
    log::info!(
        "[content] skills={} projects={} contacts={}",
        content.skills.len(),
        content.projects.len(),
        content.contacts.len()
    );
    Ok(content)
}
