/// Inline style declarations, kept in insertion order.
///
/// Setting a property that already exists replaces its value in place, so
/// merging one style over another is last-write-wins per property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    decls: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Style::insert`].
    pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    /// Set `property` only when a value is given.
    pub fn set_opt(self, property: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.set(property, value),
            None => self,
        }
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.decls.iter_mut().find(|(p, _)| *p == property) {
            Some(decl) => decl.1 = value,
            None => self.decls.push((property, value)),
        }
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        let idx = self.decls.iter().position(|(p, _)| p == property)?;
        Some(self.decls.remove(idx).1)
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Apply every declaration of `other` on top of this style.
    pub fn merge(mut self, other: &Style) -> Self {
        for (property, value) in &other.decls {
            self.insert(property.clone(), value.clone());
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.decls.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Render as an inline CSS string (`a: b; c: d`).
    pub fn to_css(&self) -> String {
        self.decls
            .iter()
            .map(|(p, v)| format!("{p}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
