// Host-side tests for the page tree.

use portfolio_core::view::{self, Element, Node, GITHUB_ACTION, LIVE_ACTION};
use portfolio_core::{BackgroundStyle, Content, PointerPosition, Profile, Project};

fn project(live: Option<&str>, github: Option<&str>) -> Project {
    Project {
        title: "Demo".into(),
        description: "Something".into(),
        tags: vec!["Rust".into(), "WASM".into()],
        live_link: live.map(str::to_string),
        github_link: github.map(str::to_string),
    }
}

fn content_with(projects: Vec<Project>) -> Content {
    Content {
        profile: Profile {
            name: "Ada".into(),
            title: "Engineer".into(),
            bio: "Writes code.".into(),
        },
        skills: Vec::new(),
        projects,
        contacts: Vec::new(),
    }
}

fn action_labels(card: &Node) -> Vec<String> {
    card.find_all(&|el: &Element| el.has_class("project-action"))
        .into_iter()
        .map(|el| Node::Element(el.clone()).text_content())
        .collect()
}

#[test]
fn project_with_both_links_renders_both_actions() {
    let card = view::project_card(&project(Some("https://live"), Some("https://gh")));
    assert_eq!(action_labels(&card), vec![LIVE_ACTION, GITHUB_ACTION]);
}

#[test]
fn project_without_live_link_renders_only_github() {
    let card = view::project_card(&project(None, Some("https://gh")));
    assert_eq!(action_labels(&card), vec![GITHUB_ACTION]);
    let link = card.find_all(&|el: &Element| el.tag == "a")[0];
    assert_eq!(link.get_attr("href"), Some("https://gh"));
}

#[test]
fn project_without_github_link_renders_only_live() {
    let card = view::project_card(&project(Some("https://live"), None));
    assert_eq!(action_labels(&card), vec![LIVE_ACTION]);
}

#[test]
fn project_without_links_has_no_actions() {
    let p = project(None, None);
    assert!(view::project_actions(&p).is_none());
    let card = view::project_card(&p);
    assert!(card.find_all(&|el: &Element| el.has_class("project-actions")).is_empty());
    assert!(card.find_all(&|el: &Element| el.tag == "a").is_empty());
}

#[test]
fn external_links_open_isolated_in_new_tab() {
    let card = view::project_card(&project(Some("https://live"), Some("https://gh")));
    for a in card.find_all(&|el: &Element| el.tag == "a") {
        assert_eq!(a.get_attr("target"), Some("_blank"));
        assert_eq!(a.get_attr("rel"), Some("noopener noreferrer"));
    }
}

#[test]
fn tags_render_in_order() {
    let card = view::project_card(&project(None, None));
    let tags: Vec<String> = card
        .find_all(&|el: &Element| el.has_class("tag"))
        .into_iter()
        .map(|el| Node::Element(el.clone()).text_content())
        .collect();
    assert_eq!(tags, vec!["Rust", "WASM"]);
}

#[test]
fn page_has_all_sections_in_order() {
    let content = Content::from_json(include_str!("../../../content/portfolio.json")).unwrap();
    let page = view::compose(&content, &BackgroundStyle::default());
    let titles: Vec<String> = page
        .find_all(&|el: &Element| el.tag == "h2")
        .into_iter()
        .map(|el| Node::Element(el.clone()).text_content())
        .collect();
    assert_eq!(
        titles,
        vec![
            view::ABOUT_TITLE,
            view::SKILLS_TITLE,
            view::PROJECTS_TITLE,
            view::CONTACT_TITLE
        ]
    );
    assert!(page.find_by_id(view::SCENE_CANVAS_ID).is_some());
    assert_eq!(page.find_all(&|el: &Element| el.has_class("skill-tag")).len(), 11);
    assert_eq!(page.find_all(&|el: &Element| el.has_class("project-card")).len(), 2);
    assert_eq!(page.find_all(&|el: &Element| el.has_class("contact-link")).len(), 3);
}

#[test]
fn skills_fade_in_staggered() {
    let mut content = content_with(Vec::new());
    content.skills = serde_json::from_str(r#"["a", "b"]"#).unwrap();
    let page = view::compose(&content, &BackgroundStyle::default());
    let delays: Vec<&str> = page
        .find_all(&|el: &Element| el.has_class("skill-tag"))
        .into_iter()
        .filter_map(|el| el.get_attr("style"))
        .collect();
    assert_eq!(delays, vec!["animation-delay: 0s;", "animation-delay: 0.1s;"]);
}

#[test]
fn background_layer_reflects_pointer() {
    let bg = BackgroundStyle::for_pointer(PointerPosition::new(10.0, 20.0));
    let page = view::compose(&content_with(Vec::new()), &bg);
    let layer = page.find_by_id(view::BACKGROUND_LAYER_ID).expect("layer");
    assert_eq!(layer.get_attr("style"), Some(view::background_layer_style(&bg).as_str()));
    assert!(view::background_layer_style(&bg).contains("at 10px 20px"));
}

#[test]
fn composing_twice_is_identical() {
    let content = content_with(vec![project(Some("https://live"), None)]);
    let bg = BackgroundStyle::default();
    assert_eq!(view::compose(&content, &bg), view::compose(&content, &bg));
}
