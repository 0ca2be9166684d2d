#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
}

impl Content {
    /// Text of a text node, if this is one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn children(&self) -> &[super::Element] {
        match self {
            Self::Children(children) => children,
            _ => &[],
        }
    }
}
