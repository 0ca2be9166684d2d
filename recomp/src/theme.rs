//! Preset tables and shared colours.
//!
//! `Theme::default()` carries the built-in presets. Hosts can load a JSON
//! document over it; any field left out keeps its default.
//!
//! ```json
//! { "variants": { "primary": { "background": "#2563eb", "text": "#ffffff" } } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::style::{Color, SizePreset, Variant};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeStyle {
    pub padding: String,
    pub font_size: String,
}

impl SizeStyle {
    fn new(padding: &str, font_size: &str) -> Self {
        Self {
            padding: padding.into(),
            font_size: font_size.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantStyle {
    pub background: Color,
    pub text: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
}

impl VariantStyle {
    fn new(background: Color, text: Color) -> Self {
        Self {
            background,
            text,
            border: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeTable {
    pub sm: SizeStyle,
    pub md: SizeStyle,
    pub lg: SizeStyle,
}

impl Default for SizeTable {
    fn default() -> Self {
        Self {
            sm: SizeStyle::new("6px 12px", "14px"),
            md: SizeStyle::new("10px 20px", "16px"),
            lg: SizeStyle::new("14px 28px", "18px"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantTable {
    pub default: VariantStyle,
    pub primary: VariantStyle,
    pub secondary: VariantStyle,
    pub outline: VariantStyle,
    pub ghost: VariantStyle,
    pub danger: VariantStyle,
}

impl Default for VariantTable {
    fn default() -> Self {
        let blue = Color::rgb(0x3b, 0x82, 0xf6);
        let white = Color::rgb(0xff, 0xff, 0xff);
        Self {
            default: VariantStyle::new(Color::rgb(0xdb, 0xeb, 0xff), Color::named("black")),
            primary: VariantStyle::new(blue.clone(), white.clone()),
            secondary: VariantStyle::new(Color::rgb(0x6b, 0x72, 0x80), white.clone()),
            outline: VariantStyle {
                background: Color::Transparent,
                text: blue.clone(),
                border: Some("2px solid #3b82f6".into()),
            },
            ghost: VariantStyle::new(Color::Transparent, blue),
            danger: VariantStyle::new(Color::rgb(0xed, 0x0a, 0x4f), white),
        }
    }
}

/// Price movement colours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerColors {
    pub up: Color,
    pub down: Color,
    pub neutral: Color,
}

impl Default for TickerColors {
    fn default() -> Self {
        Self {
            up: Color::rgb(0x0c, 0x85, 0x44),
            down: Color::rgb(0xed, 0x0a, 0x4f),
            neutral: Color::rgb(0x6b, 0x72, 0x80),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub sizes: SizeTable,
    pub variants: VariantTable,
    pub ticker: TickerColors,
    /// Text of disabled menu items.
    pub muted_text: Color,
    /// "Loading..." text in a dropdown menu.
    pub loading_text: Color,
    pub error_text: Color,
    pub disabled_opacity: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            sizes: SizeTable::default(),
            variants: VariantTable::default(),
            ticker: TickerColors::default(),
            muted_text: Color::rgb(0x9c, 0xa3, 0xaf),
            loading_text: Color::rgb(0x6b, 0x72, 0x80),
            error_text: Color::rgb(0xef, 0x44, 0x44),
            disabled_opacity: 0.6,
        }
    }
}

impl Theme {
    /// Load a theme from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let theme = serde_json::from_str(json)?;
        log::debug!("Theme loaded from JSON");
        Ok(theme)
    }

    pub fn size(&self, size: SizePreset) -> &SizeStyle {
        match size {
            SizePreset::Sm => &self.sizes.sm,
            SizePreset::Md => &self.sizes.md,
            SizePreset::Lg => &self.sizes.lg,
        }
    }

    pub fn variant(&self, variant: Variant) -> &VariantStyle {
        match variant {
            Variant::Default => &self.variants.default,
            Variant::Primary => &self.variants.primary,
            Variant::Secondary => &self.variants.secondary,
            Variant::Outline => &self.variants.outline,
            Variant::Ghost => &self.variants.ghost,
            Variant::Danger => &self.variants.danger,
        }
    }
}
