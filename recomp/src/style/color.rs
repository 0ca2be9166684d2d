use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A CSS colour as the widgets emit it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Transparent,
    Rgb { r: u8, g: u8, b: u8 },
    /// A CSS colour keyword (`black`, `white`) or functional value
    /// (`rgb(...)`, `var(...)`), passed through untouched.
    Named(String),
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Parse `#rgb` / `#rrggbb`, `transparent`, a keyword or a functional
    /// value.
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("transparent") {
            return Ok(Self::Transparent);
        }

        if let Some(hex) = value.strip_prefix('#') {
            let rgb: Srgb<u8> = hex.parse().map_err(|_| Error::invalid_color(value))?;
            let (r, g, b) = rgb.into_components();
            return Ok(Self::Rgb { r, g, b });
        }

        if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic()) {
            return Ok(Self::Named(value.to_ascii_lowercase()));
        }

        if is_functional(value) {
            return Ok(Self::Named(value.to_string()));
        }

        Err(Error::invalid_color(value))
    }

    pub fn to_css(&self) -> String {
        match self {
            Self::Transparent => "transparent".into(),
            Self::Rgb { r, g, b } => format!("#{r:02x}{g:02x}{b:02x}"),
            Self::Named(name) => name.clone(),
        }
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self, Self::Transparent)
    }
}

fn is_functional(value: &str) -> bool {
    match value.split_once('(') {
        Some((name, rest)) => {
            !name.is_empty()
                && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
                && rest.ends_with(')')
        }
        None => false,
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

/// Builder convenience: unparseable strings are kept verbatim.
impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|err| {
            log::warn!("{err}; using it verbatim");
            Self::Named(value.to_string())
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse("#ED0A4F").unwrap(), Color::rgb(0xed, 0x0a, 0x4f));
        assert_eq!(Color::parse("#fff").unwrap(), Color::rgb(255, 255, 255));
        assert_eq!(Color::parse(" #3b82f6 ").unwrap().to_css(), "#3b82f6");
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Color::parse("transparent").unwrap(), Color::Transparent);
        assert_eq!(Color::parse("Black").unwrap(), Color::named("black"));
        assert_eq!(
            Color::parse("rgb(1, 2, 3)").unwrap(),
            Color::named("rgb(1, 2, 3)")
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            Color::parse("#12345z"),
            Err(Error::InvalidColor { .. })
        ));
        assert!(Color::parse("").is_err());
        assert!(Color::parse("not a colour").is_err());
    }

    #[test]
    fn test_lenient_from_str_slice() {
        assert_eq!(Color::from("#000000"), Color::rgb(0, 0, 0));
        assert_eq!(Color::from("12 px"), Color::named("12 px"));
    }

    #[test]
    fn test_serde_as_string() {
        let color: Color = serde_json::from_str("\"#0C8544\"").unwrap();
        assert_eq!(color, Color::rgb(0x0c, 0x85, 0x44));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#0c8544\"");
        assert!(serde_json::from_str::<Color>("\"#zz\"").is_err());
    }
}
