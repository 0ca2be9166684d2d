//! Error types

/// Errors raised by misuse of the widget API.
///
/// Widget rendering and event handling never fail; these only surface from
/// calls that validate caller input up front.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A key combo was built from no tokens at all.
    #[error("key combo is empty")]
    EmptyCombo,

    /// A key combo named more than one non-modifier key. Chords such as
    /// "g then g" are not supported.
    #[error("key combo has more than one main key: {keys:?}")]
    MultipleMainKeys { keys: Vec<String> },

    /// `sync_open` was called on a dropdown that owns its own open state.
    #[error("dropdown '{id}' is uncontrolled; its open state cannot be set by the caller")]
    NotControlled { id: String },

    /// A colour string could not be parsed.
    #[error("invalid colour '{value}'")]
    InvalidColor { value: String },

    /// A theme or ticker JSON document could not be deserialized.
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new invalid colour error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
