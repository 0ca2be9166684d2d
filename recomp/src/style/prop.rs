/// A widget property that is either left unset or given explicitly.
///
/// Resolution order is explicit value, then the preset's value, then the
/// widget's own default. Keeping "unset" separate from any real value means
/// a caller who passes the same colour as the default still wins over a
/// preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prop<T> {
    Unset,
    Explicit(T),
}

impl<T> Prop<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Explicit(value) => Some(value),
            Self::Unset => None,
        }
    }

    /// Explicit value, else `preset`, else `default`.
    pub fn resolve(&self, preset: Option<T>, default: T) -> T
    where
        T: Clone,
    {
        match self {
            Self::Explicit(value) => value.clone(),
            Self::Unset => preset.unwrap_or(default),
        }
    }

    /// Explicit value, else `preset`.
    pub fn or_preset(&self, preset: Option<T>) -> Option<T>
    where
        T: Clone,
    {
        self.as_ref().cloned().or(preset)
    }
}

impl<T> Default for Prop<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> From<T> for Prop<T> {
    fn from(value: T) -> Self {
        Self::Explicit(value)
    }
}
