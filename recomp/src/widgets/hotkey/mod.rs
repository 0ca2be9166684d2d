//! HotKey widget: a labelled action with a keyboard shortcut.

mod binding;
mod combo;

use std::sync::{Arc, Mutex};

use recomp_dom::{generate_id, Document, Element, EventKind, Style};

pub use binding::ShortcutBinding;
pub use combo::KeyCombo;

use crate::error::Result;
use crate::handlers::{handler, Callback};
use crate::page::Page;
use crate::state::State;
use crate::style::{Color, FontWeight, Prop, SizePreset, StyleResolver, Variant};
use crate::widgets::Icon;

/// A clickable row showing an action name and its shortcut, e.g.
/// "Time and sales" / "F2". Pressing the shortcut anywhere on the page runs
/// the same callback as clicking.
///
/// # Example
///
/// ```ignore
/// let sales = HotKey::new("Time and sales", "F2")
///     .keys(["F2"])
///     .on_activate(|| open_time_and_sales());
///
/// page.render(|page| sales.build(page));
/// ```
pub struct HotKey {
    id: String,
    primary_text: String,
    secondary_text: String,
    primary_text_weight: FontWeight,
    primary_text_color: Prop<Color>,
    primary_font_size: String,
    secondary_text_weight: FontWeight,
    secondary_text_color: Prop<Color>,
    secondary_font_size: String,

    bg_color: Prop<Color>,
    width: String,
    height: String,
    size: SizePreset,
    variant: Variant,

    border_radius: String,
    border: Prop<String>,
    padding: Prop<String>,
    margin: String,

    on_activate: Option<Callback>,
    disabled: bool,
    keys: Vec<String>,

    hover_bg_color: Prop<Color>,
    hover_primary_text_color: Prop<Color>,
    hover_secondary_text_color: Prop<Color>,

    icon: Option<Icon>,
    class: Option<String>,
    style: Style,

    hovered: State<bool>,
    binding: Mutex<ShortcutBinding>,
}

impl HotKey {
    pub fn new(primary_text: impl Into<String>, secondary_text: impl Into<String>) -> Self {
        Self {
            id: generate_id("hotkey"),
            primary_text: primary_text.into(),
            secondary_text: secondary_text.into(),
            primary_text_weight: FontWeight::Medium,
            primary_text_color: Prop::Unset,
            primary_font_size: "12px".into(),
            secondary_text_weight: FontWeight::Thin,
            secondary_text_color: Prop::Unset,
            secondary_font_size: "12px".into(),
            bg_color: Prop::Unset,
            width: "255px".into(),
            height: "36px".into(),
            size: SizePreset::Md,
            variant: Variant::Default,
            border_radius: "0px".into(),
            border: Prop::Unset,
            padding: Prop::Unset,
            margin: "0".into(),
            on_activate: None,
            disabled: false,
            keys: Vec::new(),
            hover_bg_color: Prop::Unset,
            hover_primary_text_color: Prop::Unset,
            hover_secondary_text_color: Prop::Unset,
            icon: None,
            class: None,
            style: Style::new(),
            hovered: State::new(false),
            binding: Mutex::new(ShortcutBinding::new()),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn primary_text_weight(mut self, weight: FontWeight) -> Self {
        self.primary_text_weight = weight;
        self
    }

    pub fn primary_text_color(mut self, color: impl Into<Color>) -> Self {
        self.primary_text_color = Prop::Explicit(color.into());
        self
    }

    pub fn primary_font_size(mut self, size: impl Into<String>) -> Self {
        self.primary_font_size = size.into();
        self
    }

    pub fn secondary_text_weight(mut self, weight: FontWeight) -> Self {
        self.secondary_text_weight = weight;
        self
    }

    pub fn secondary_text_color(mut self, color: impl Into<Color>) -> Self {
        self.secondary_text_color = Prop::Explicit(color.into());
        self
    }

    pub fn secondary_font_size(mut self, size: impl Into<String>) -> Self {
        self.secondary_font_size = size.into();
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

    /// The size preset only supplies the padding; both texts keep their own
    /// font sizes.
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

    pub fn on_activate(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_activate = Some(Arc::new(f));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Shortcut tokens, e.g. `["Ctrl", "Shift", "D"]` or `["F2"]`.
    pub fn keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn hover_bg_color(mut self, color: impl Into<Color>) -> Self {
        self.hover_bg_color = Prop::Explicit(color.into());
        self
    }

    pub fn hover_primary_text_color(mut self, color: impl Into<Color>) -> Self {
        self.hover_primary_text_color = Prop::Explicit(color.into());
        self
    }

    pub fn hover_secondary_text_color(mut self, color: impl Into<Color>) -> Self {
        self.hover_secondary_text_color = Prop::Explicit(color.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // -------------------------------------------------------------------------
    // Input changes between renders
    // -------------------------------------------------------------------------

    pub fn set_keys<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
    }

    pub fn set_on_activate(&mut self, callback: Option<Callback>) {
        self.on_activate = callback;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    // -------------------------------------------------------------------------
    // Shortcut lifecycle
    // -------------------------------------------------------------------------

    /// Install, keep or remove the keyboard listener to match the current
    /// inputs. Called by [`HotKey::build`].
    pub fn bind(&self, document: &Document) -> Result<()> {
        match self.binding.lock() {
            Ok(mut binding) => binding.sync(
                document,
                &self.keys,
                self.on_activate.as_ref(),
                !self.disabled,
            ),
            Err(_) => Ok(()),
        }
    }

    /// Remove the keyboard listener. Dropping the widget does the same.
    pub fn unmount(&self) {
        if let Ok(mut binding) = self.binding.lock() {
            binding.clear();
        }
    }

    /// Whether a keyboard listener is currently installed.
    pub fn is_bound(&self) -> bool {
        self.binding
            .lock()
            .map(|b| b.is_active())
            .unwrap_or(false)
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Build the element, register its handlers and sync the shortcut.
    pub fn build(&self, page: &Page) -> Element {
        // An unsupported combo only costs the shortcut; the widget still renders.
        if let Err(err) = self.bind(page.document()) {
            log::debug!("HotKey::build id={} shortcut not bound: {err}", self.id);
        }

        let hovered = self.hovered.get();
        let resolver = StyleResolver::new(page.theme())
            .size(Some(self.size))
            .variant(Some(self.variant))
            .hovered(hovered)
            .disabled(self.disabled);
        log::debug!(
            "HotKey::build id={} keys={:?} disabled={} hovered={}",
            self.id,
            self.keys,
            self.disabled,
            hovered
        );

        let default_text = Color::named("black");
        let bg = resolver.background(
            &self.bg_color,
            &self.hover_bg_color,
            page.theme().variant(Variant::Default).background.clone(),
        );
        let primary_color = resolver.text_color(
            &self.primary_text_color,
            &self.hover_primary_text_color,
            default_text.clone(),
        );
        let secondary_color = resolver.text_color(
            &self.secondary_text_color,
            &self.hover_secondary_text_color,
            default_text,
        );

        let style = Style::new()
            .set("background-color", bg.to_css())
            .set("width", &self.width)
            .set("height", &self.height)
            .set("border-radius", &self.border_radius)
            .set_opt("border", resolver.border(&self.border, Some("none")))
            .set("padding", resolver.padding(&self.padding, "10px 20px"))
            .set("margin", &self.margin)
            .set("display", "inline-flex")
            .set("align-items", "center")
            .set("justify-content", "space-between")
            .set("gap", if self.icon.is_some() { "8px" } else { "0" });
        let style = resolver.interaction(style, true).merge(&self.style);

        let icon = self.icon.as_ref().map(|icon| {
            Element::inline()
                .style(Style::new().set("display", "flex").set("align-items", "center"))
                .child(icon.build(12))
        });
        let primary = Element::span(&self.primary_text)
            .id(format!("{}-primary", self.id))
            .class("primary-text")
            .style(
                Style::new()
                    .set("color", primary_color.to_css())
                    .set("font-weight", self.primary_text_weight.to_string())
                    .set("font-size", &self.primary_font_size),
            );
        let secondary = Element::span(&self.secondary_text)
            .id(format!("{}-secondary", self.id))
            .class("secondary-text")
            .style(
                Style::new()
                    .set("color", secondary_color.to_css())
                    .set("font-weight", self.secondary_text_weight.to_string())
                    .set("font-size", &self.secondary_font_size)
                    .set("margin-left", "auto"),
            );

        let mut element = Element::div()
            .id(&self.id)
            .style(style)
            .clickable(!self.disabled)
            .disabled(self.disabled)
            .maybe_child(icon)
            .child(primary)
            .child(secondary);
        if let Some(class) = &self.class {
            element = element.class(class);
        }

        self.register_handlers(page);
        element
    }

    fn register_handlers(&self, page: &Page) {
        let registry = page.registry();

        if !self.disabled {
            if let Some(on_activate) = &self.on_activate {
                let on_activate = Arc::clone(on_activate);
                registry.register(&self.id, EventKind::Click, handler(move |_| on_activate()));
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
