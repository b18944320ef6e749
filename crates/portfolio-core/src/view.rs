//! Declarative page tree.
//!
//! [`compose`] is a pure function from content and the current background to
//! a [`Node`] tree; the web frontend materialises that tree into DOM nodes.
//! The only subtree that changes after mount is the background layer, which
//! is recomposed through [`background_layer_style`].

use crate::background::BackgroundStyle;
use crate::constants::SKILL_STAGGER_SEC;
use crate::content::{ContactLink, Content, Project, Skill};

pub const ROOT_CLASS: &str = "portfolio";
pub const BACKGROUND_LAYER_ID: &str = "background-layer";
pub const SCENE_CANVAS_ID: &str = "scene-canvas";

pub const ABOUT_TITLE: &str = "About Me";
pub const SKILLS_TITLE: &str = "Skills";
pub const PROJECTS_TITLE: &str = "Projects";
pub const CONTACT_TITLE: &str = "Get in Touch";

pub const LIVE_ACTION: &str = "Live";
pub const GITHUB_ACTION: &str = "GitHub";

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl Node {
    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Depth-first search over elements, self included.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut out = Vec::new();
        self.walk(&mut |el| {
            if pred(el) {
                out.push(el);
            }
        });
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find_all(&|el: &Element| el.get_attr("id") == Some(id))
            .into_iter()
            .next()
    }

    fn walk<'a>(&'a self, f: &mut dyn FnMut(&'a Element)) {
        if let Node::Element(el) = self {
            f(el);
            for c in &el.children {
                c.walk(f);
            }
        }
    }
}

fn external_link(href: &str, label: &str) -> Element {
    Element::new("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .text(label)
}

/// Inline style of the fixed background layer.
pub fn background_layer_style(background: &BackgroundStyle) -> String {
    format!("background: {};", background)
}

fn background_layer(background: &BackgroundStyle) -> Node {
    Element::new("div")
        .id(BACKGROUND_LAYER_ID)
        .class("background-layer")
        .attr("style", background_layer_style(background))
        .into()
}

fn hero(content: &Content) -> Node {
    Element::new("header")
        .class("hero")
        .child(
            Element::new("div").class("hero-scene").child(
                Element::new("canvas")
                    .id(SCENE_CANVAS_ID)
                    .attr("style", "touch-action: none;"),
            ),
        )
        .child(Element::new("h1").class("hero-name").text(&content.profile.name))
        .child(Element::new("p").class("hero-title").text(&content.profile.title))
        .into()
}

fn section(id: &str, title: &str, body: Element) -> Node {
    Element::new("section")
        .id(id)
        .class("section")
        .child(Element::new("h2").class("section-title").text(title))
        .child(body)
        .into()
}

fn skill_tag(index: usize, skill: &Skill) -> Node {
    Element::new("span")
        .class("skill-tag")
        .attr(
            "style",
            format!("animation-delay: {}s;", index as f32 * SKILL_STAGGER_SEC),
        )
        .text(&skill.label)
        .into()
}

/// Action links of a project card; `None` when the project has no links.
pub fn project_actions(project: &Project) -> Option<Node> {
    let mut actions: Vec<Node> = Vec::new();
    if let Some(live) = &project.live_link {
        actions.push(external_link(live, LIVE_ACTION).class("project-action").into());
    }
    if let Some(source) = &project.github_link {
        actions.push(
            external_link(source, GITHUB_ACTION)
                .class("project-action")
                .into(),
        );
    }
    if actions.is_empty() {
        return None;
    }
    Some(
        Element::new("div")
            .class("project-actions")
            .children(actions)
            .into(),
    )
}

pub fn project_card(project: &Project) -> Node {
    let tags = project
        .tags
        .iter()
        .map(|t| -> Node { Element::new("span").class("tag").text(t).into() });
    let mut card = Element::new("article")
        .class("project-card")
        .child(Element::new("h3").text(&project.title))
        .child(Element::new("p").class("project-description").text(&project.description))
        .child(Element::new("div").class("tag-list").children(tags));
    if let Some(actions) = project_actions(project) {
        card = card.child(actions);
    }
    card.into()
}

fn contact_link(link: &ContactLink) -> Node {
    external_link(&link.url, link.label())
        .class("contact-link")
        .attr("aria-label", link.label())
        .into()
}

/// Build the whole page for `content` with the background at `background`.
pub fn compose(content: &Content, background: &BackgroundStyle) -> Node {
    let about = Element::new("p").class("bio").text(&content.profile.bio);
    let skills = Element::new("div")
        .class("skill-list")
        .children(content.skills.iter().enumerate().map(|(i, s)| skill_tag(i, s)));
    let projects = Element::new("div")
        .class("project-grid")
        .children(content.projects.iter().map(project_card));
    let contacts = Element::new("div")
        .class("contact-links")
        .children(content.contacts.iter().map(contact_link));

    Element::new("div")
        .class(ROOT_CLASS)
        .child(background_layer(background))
        .child(
            Element::new("main")
                .class("content")
                .child(hero(content))
                .child(section("about", ABOUT_TITLE, about))
                .child(section("skills", SKILLS_TITLE, skills))
                .child(section("projects", PROJECTS_TITLE, projects))
                .child(section("contact", CONTACT_TITLE, contacts)),
        )
        .into()
}
