use recomp_dom::Style;

use super::{Color, Prop, SizePreset, Variant};
use crate::theme::Theme;

/// Turns a widget's props plus its render state into concrete style values.
///
/// Each value resolves as: the explicit prop, then the chosen preset (size or
/// variant), then the widget default. Hover colours replace the base colour
/// only while hovered and enabled.
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'a> {
    theme: &'a Theme,
    size: Option<SizePreset>,
    variant: Option<Variant>,
    hovered: bool,
    disabled: bool,
}

impl<'a> StyleResolver<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            size: None,
            variant: None,
            hovered: false,
            disabled: false,
        }
    }

    pub fn size(mut self, size: Option<SizePreset>) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: Option<Variant>) -> Self {
        self.variant = variant;
        self
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// Whether hover styling is in effect.
    pub fn hover_active(&self) -> bool {
        self.hovered && !self.disabled
    }

    fn with_hover<T: Clone>(&self, base: T, hover: &Prop<T>) -> T {
        match hover.as_ref() {
            Some(hover) if self.hover_active() => hover.clone(),
            _ => base,
        }
    }

    pub fn background(&self, explicit: &Prop<Color>, hover: &Prop<Color>, default: Color) -> Color {
        let preset = self
            .variant
            .map(|v| self.theme.variant(v).background.clone());
        self.with_hover(explicit.resolve(preset, default), hover)
    }

    pub fn text_color(&self, explicit: &Prop<Color>, hover: &Prop<Color>, default: Color) -> Color {
        let preset = self.variant.map(|v| self.theme.variant(v).text.clone());
        self.with_hover(explicit.resolve(preset, default), hover)
    }

    pub fn border(&self, explicit: &Prop<String>, default: Option<&str>) -> Option<String> {
        let preset = self.variant.and_then(|v| self.theme.variant(v).border.clone());
        explicit
            .or_preset(preset)
            .or_else(|| default.map(str::to_string))
    }

    pub fn padding(&self, explicit: &Prop<String>, default: &str) -> String {
        let preset = self.size.map(|s| self.theme.size(s).padding.clone());
        explicit.resolve(preset, default.to_string())
    }

    pub fn font_size(&self, explicit: &Prop<String>, default: &str) -> String {
        let preset = self.size.map(|s| self.theme.size(s).font_size.clone());
        explicit.resolve(preset, default.to_string())
    }

    /// Cursor and opacity for the current interaction state. `clickable`
    /// decides between `pointer` and the default cursor.
    pub fn interaction(&self, style: Style, clickable: bool) -> Style {
        if self.disabled {
            style
                .set("opacity", self.theme.disabled_opacity.to_string())
                .set("cursor", "not-allowed")
        } else if clickable {
            style.set("cursor", "pointer")
        } else {
            style
        }
    }
}
