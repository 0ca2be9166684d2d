use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::style::Style;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Generate a unique element ID with the given prefix.
pub fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// The kind of node, mirroring the handful of HTML tags the widgets emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    #[default]
    Div,
    Span,
    Button,
    Img,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Span => "span",
            Self::Button => "button",
            Self::Img => "img",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,
    pub class: Option<String>,
    pub role: Option<String>,

    // Content
    pub content: Content,

    // Visual
    pub style: Style,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,
    /// Disabled elements are skipped by focus traversal and report
    /// `disabled` to the host.
    pub disabled: bool,
    /// Mirrors `aria-hidden`; the element stays in the tree.
    pub hidden: bool,

    // Plain attributes (type, src, alt, ...)
    pub attrs: BTreeMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            class: None,
            role: None,
            content: Content::None,
            style: Style::default(),
            focusable: false,
            clickable: false,
            disabled: false,
            hidden: false,
            attrs: BTreeMap::new(),
        }
    }
}

impl Element {
    pub fn div() -> Self {
        Self {
            id: generate_id("div"),
            ..Default::default()
        }
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self {
            id: generate_id("span"),
            tag: Tag::Span,
            content: Content::Text(text.into()),
            ..Default::default()
        }
    }

    /// An empty `span`, for wrapping inline children.
    pub fn inline() -> Self {
        Self {
            id: generate_id("span"),
            tag: Tag::Span,
            ..Default::default()
        }
    }

    /// A native button: focusable and clickable unless disabled later.
    pub fn button() -> Self {
        Self {
            id: generate_id("button"),
            tag: Tag::Button,
            focusable: true,
            clickable: true,
            ..Default::default()
        }
        .attr("type", "button")
    }

    pub fn img(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            id: generate_id("img"),
            tag: Tag::Img,
            ..Default::default()
        }
        .attr("src", src)
        .attr("alt", alt)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.class = if class.is_empty() { None } else { Some(class) };
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Text content, if this is a text node.
    pub fn text(&self) -> Option<&str> {
        self.content.text()
    }

    pub fn children_slice(&self) -> &[Element] {
        self.content.children()
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Append a child only when one is given.
    pub fn maybe_child(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }
}
