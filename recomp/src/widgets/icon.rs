use recomp_dom::Element;

/// An icon slot: either a named asset or any element the caller built.
#[derive(Debug, Clone, PartialEq)]
pub enum Icon {
    Named(String),
    Custom(Element),
}

impl Icon {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn custom(element: Element) -> Self {
        Self::Custom(element)
    }

    /// Build the icon element. Named icons become a square `img` of `size`
    /// pixels pointing at `icons/<name>.svg`.
    pub fn build(&self, size: u32) -> Element {
        match self {
            Self::Named(name) => Element::img(format!("icons/{name}.svg"), name.as_str())
                .class("icon")
                .attr("width", size.to_string())
                .attr("height", size.to_string()),
            Self::Custom(element) => element.clone(),
        }
    }
}

impl From<Element> for Icon {
    fn from(element: Element) -> Self {
        Self::Custom(element)
    }
}
