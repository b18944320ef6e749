//! Static content rendered by the page.
//!
//! The payload is plain JSON so it can be embedded at build time or swapped
//! at runtime without touching the code. Everything here is read-only once
//! [`Content::from_json`] returns.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
}

/// A single skill tag. Serialised as a bare string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Skill {
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, alias = "liveLink")]
    pub live_link: Option<String>,
    #[serde(default, alias = "githubLink")]
    pub github_link: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Github,
    Linkedin,
    Email,
    Website,
}

impl ContactKind {
    pub fn default_label(self) -> &'static str {
        match self {
            ContactKind::Github => "GitHub",
            ContactKind::Linkedin => "LinkedIn",
            ContactKind::Email => "Email",
            ContactKind::Website => "Website",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub url: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl ContactLink {
    pub fn label(&self) -> &str {
        self.label
            .as_deref()
            .unwrap_or_else(|| self.kind.default_label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub contacts: Vec<ContactLink>,
}

impl Content {
    /// Parse, normalise and validate a JSON payload.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let mut content: Content = serde_json::from_str(json)?;
        content.normalize();
        content.validate()?;
        Ok(content)
    }

    // Blank links count as absent.
    fn normalize(&mut self) {
        for project in &mut self.projects {
            project.live_link = present(project.live_link.take());
            project.github_link = present(project.github_link.take());
        }
        self.contacts.retain(|c| !c.url.trim().is_empty());
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::Invalid("profile name is empty".into()));
        }
        if let Some(i) = self.projects.iter().position(|p| p.title.trim().is_empty()) {
            return Err(ContentError::Invalid(format!("project {i} has no title")));
        }
        Ok(())
    }
}

fn present(link: Option<String>) -> Option<String> {
    link.map(|l| l.trim().to_string()).filter(|l| !l.is_empty())
}
