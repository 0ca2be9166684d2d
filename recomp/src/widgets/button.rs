//! Button widget.

use std::sync::Arc;

use recomp_dom::{generate_id, Element, EventKind, Style};

use crate::handlers::{handler, Callback};
use crate::page::Page;
use crate::state::State;
use crate::style::{Alignment, Color, FontWeight, Prop, Side, SizePreset, StyleResolver, Variant};
use crate::widgets::Icon;

/// The `type` attribute of the rendered button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

/// A clickable button.
///
/// Build it once and call [`Button::build`] on every render; the hover flag
/// survives between renders.
///
/// # Example
///
/// ```ignore
/// let buy = Button::new("Buy")
///     .bg_color("#0C8544")
///     .hover_bg_color("green")
///     .font_size("12px")
///     .on_click(|| log::info!("bought"));
///
/// page.render(|page| buy.build(page));
/// ```
#[derive(Clone)]
pub struct Button {
    id: String,
    text: String,
    text_weight: FontWeight,
    text_color: Prop<Color>,
    font_size: Prop<String>,
    alignment: Alignment,

    bg_color: Prop<Color>,
    width: String,
    height: String,
    size: SizePreset,
    variant: Variant,

    border_radius: String,
    border: Prop<String>,
    padding: Prop<String>,
    margin: String,

    on_click: Option<Callback>,
    disabled: bool,
    button_type: ButtonType,

    hover_bg_color: Prop<Color>,
    hover_text_color: Prop<Color>,

    icon: Option<Icon>,
    icon_position: Side,
    trailing: Option<Element>,

    class: Option<String>,
    style: Style,

    hovered: State<bool>,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            id: generate_id("button"),
            text: String::new(),
            text_weight: FontWeight::Medium,
            text_color: Prop::Unset,
            font_size: Prop::Unset,
            alignment: Alignment::Center,
            bg_color: Prop::Unset,
            width: "88px".into(),
            height: "24px".into(),
            size: SizePreset::Md,
            variant: Variant::Primary,
            border_radius: "5px".into(),
            border: Prop::Unset,
            padding: Prop::Unset,
            margin: "0".into(),
            on_click: None,
            disabled: false,
            button_type: ButtonType::Button,
            hover_bg_color: Prop::Unset,
            hover_text_color: Prop::Unset,
            icon: None,
            icon_position: Side::Left,
            trailing: None,
            class: None,
            style: Style::new(),
            hovered: State::new(false),
        }
    }
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn text_weight(mut self, weight: FontWeight) -> Self {
        self.text_weight = weight;
        self
    }

    pub fn text_color(mut self, color: impl Into<Color>) -> Self {
        self.text_color = Prop::Explicit(color.into());
        self
    }

    pub fn font_size(mut self, size: impl Into<String>) -> Self {
        self.font_size = Prop::Explicit(size.into());
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn bg_color(mut self, color: impl Into<Color>) -> Self {
        self.bg_color = Prop::Explicit(color.into());
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }

    pub fn size(mut self, size: SizePreset) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn border_radius(mut self, radius: impl Into<String>) -> Self {
        self.border_radius = radius.into();
        self
    }

    pub fn border(mut self, border: impl Into<String>) -> Self {
        self.border = Prop::Explicit(border.into());
        self
    }

    pub fn padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = Prop::Explicit(padding.into());
        self
    }

    pub fn margin(mut self, margin: impl Into<String>) -> Self {
        self.margin = margin.into();
        self
    }

    pub fn on_click(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(f));
        self
    }

    /// Set or clear the click callback with an already shared closure.
    pub fn on_click_callback(mut self, callback: Option<Callback>) -> Self {
        self.on_click = callback;
        self
    }

    /// Disabled buttons are not focusable, not clickable and ignore hover.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = button_type;
        self
    }

    pub fn hover_bg_color(mut self, color: impl Into<Color>) -> Self {
        self.hover_bg_color = Prop::Explicit(color.into());
        self
    }

    pub fn hover_text_color(mut self, color: impl Into<Color>) -> Self {
        self.hover_text_color = Prop::Explicit(color.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn icon_position(mut self, position: Side) -> Self {
        self.icon_position = position;
        self
    }

    /// A node rendered after the text, e.g. a caret.
    pub fn trailing(mut self, trailing: Element) -> Self {
        self.trailing = Some(trailing);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Inline overrides applied after every computed property.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Share the hover flag with another owner, e.g. a composite widget
    /// that rebuilds this button on every render.
    pub fn hover_state(mut self, hovered: State<bool>) -> Self {
        self.hovered = hovered;
        self
    }

    // Props passed through from composite widgets, keeping unset props unset.

    pub(crate) fn text_color_prop(mut self, color: Prop<Color>) -> Self {
        self.text_color = color;
        self
    }

    pub(crate) fn bg_color_prop(mut self, color: Prop<Color>) -> Self {
        self.bg_color = color;
        self
    }

    pub(crate) fn hover_colors(mut self, bg: Prop<Color>, text: Prop<Color>) -> Self {
        self.hover_bg_color = bg;
        self.hover_text_color = text;
        self
    }

    pub(crate) fn box_props(mut self, font_size: Prop<String>, border: Prop<String>, padding: Prop<String>) -> Self {
        self.font_size = font_size;
        self.border = border;
        self.padding = padding;
        self
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered.get()
    }

    /// Compute the inline style for the current hover state.
    pub fn resolve_style(&self, page: &Page) -> Style {
        let resolver = StyleResolver::new(page.theme())
            .size(Some(self.size))
            .variant(Some(self.variant))
            .hovered(self.hovered.get())
            .disabled(self.disabled);

        let primary = page.theme().variant(Variant::Primary);
        let bg = resolver.background(&self.bg_color, &self.hover_bg_color, primary.background.clone());
        let color = resolver.text_color(&self.text_color, &self.hover_text_color, primary.text.clone());
        let has_extra = self.icon.is_some() || self.trailing.is_some();

        let style = Style::new()
            .set("background-color", bg.to_css())
            .set("color", color.to_css())
            .set("width", &self.width)
            .set("height", &self.height)
            .set("font-weight", self.text_weight.to_string())
            .set("font-size", resolver.font_size(&self.font_size, "16px"))
            .set("border-radius", &self.border_radius)
            .set_opt("border", resolver.border(&self.border, Some("none")))
            .set("padding", resolver.padding(&self.padding, "10px 20px"))
            .set("margin", &self.margin)
            .set("display", "inline-flex")
            .set("align-items", "center")
            .set("justify-content", self.alignment.justify())
            .set("gap", if has_extra { "8px" } else { "0" });

        resolver.interaction(style, true).merge(&self.style)
    }

    /// Build the button element and register its handlers on the page.
    pub fn build(&self, page: &Page) -> Element {
        log::debug!(
            "Button::build id={} disabled={} hovered={}",
            self.id,
            self.disabled,
            self.hovered.get()
        );

        let icon = self.icon.as_ref().map(|icon| Element::inline().child(icon.build(12)));
        let (leading, after) = match self.icon_position {
            Side::Left => (icon, None),
            Side::Right => (None, icon),
        };
        let trailing = self.trailing.as_ref().map(|node| {
            Element::inline()
                .style(
                    Style::new()
                        .set("display", "inline-flex")
                        .set("align-items", "center")
                        .set("margin-left", "8px"),
                )
                .child(node.clone())
        });

        let mut element = Element::button()
            .id(&self.id)
            .attr("type", self.button_type.as_str())
            .style(self.resolve_style(page))
            .focusable(!self.disabled)
            .clickable(!self.disabled)
            .disabled(self.disabled)
            .maybe_child(leading)
            .child(Element::span(&self.text))
            .maybe_child(after)
            .maybe_child(trailing);
        if let Some(class) = &self.class {
            element = element.class(class);
        }

        self.register_handlers(page);
        element
    }

    fn register_handlers(&self, page: &Page) {
        let registry = page.registry();

        if !self.disabled {
            if let Some(on_click) = &self.on_click {
                let on_click = Arc::clone(on_click);
                registry.register(&self.id, EventKind::Click, handler(move |_| on_click()));
            }
        }

        let hovered = self.hovered.clone();
        registry.register(
            &self.id,
            EventKind::PointerEnter,
            handler(move |_| {
                hovered.replace_if_changed(true);
            }),
        );
        let hovered = self.hovered.clone();
        registry.register(
            &self.id,
            EventKind::PointerLeave,
            handler(move |_| {
                hovered.replace_if_changed(false);
            }),
        );
    }
}
