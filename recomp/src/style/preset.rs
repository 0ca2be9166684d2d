//! Named presets shared by every widget.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Size preset: picks padding and font size from the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Colour variant: picks background, text colour and border from the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Default,
        Variant::Primary,
        Variant::Secondary,
        Variant::Outline,
        Variant::Ghost,
        Variant::Danger,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Danger => "danger",
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown variant '{s}'"))
    }
}

impl FromStr for SizePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            _ => Err(format!("unknown size '{s}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Thin,
    Normal,
    Medium,
    Semibold,
    Bold,
    #[serde(untagged)]
    Numeric(u16),
}

impl FontWeight {
    pub fn css_value(&self) -> u16 {
        match self {
            Self::Thin => 300,
            Self::Normal => 400,
            Self::Medium => 500,
            Self::Semibold => 600,
            Self::Bold => 700,
            Self::Numeric(weight) => *weight,
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css_value())
    }
}

/// Horizontal alignment of a widget's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    /// The flexbox `justify-content` value.
    pub fn justify(&self) -> &'static str {
        match self {
            Self::Left => "flex-start",
            Self::Center => "center",
            Self::Right => "flex-end",
        }
    }
}

/// Which side something sits on: icon position, toggle position, menu
/// anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Left,
    Right,
}
