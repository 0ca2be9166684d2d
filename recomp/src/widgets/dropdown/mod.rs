//! Dropdown widget: a trigger button and a menu of arbitrary items.
//!
//! Items are raw JSON values. [`ItemFields`] says where each record keeps
//! its key, label, disabled flag and background, and every render
//! re-normalizes the raw list (see [`normalize_all`]).
//!
//! The open flag is either owned by the dropdown or by the caller, fixed at
//! creation through [`OpenMode`]. Either way every requested transition is
//! reported through `on_open_change`; a controlled dropdown only changes
//! what it shows when the caller answers with [`Dropdown::sync_open`].
//!
//! Document listeners, held only while needed:
//! - pointer-down, while the menu is rendered open: a press outside the
//!   dropdown closes it
//! - resize, while the menu width follows the trigger: re-measures the
//!   trigger

mod items;
mod open_state;

use std::collections::HashSet;
use std::sync::{Arc, Mutex, RwLock, Weak};

use recomp_dom::{collect_ids, generate_id, Document, Element, EventKind, KeyEvent, ListenerGuard, Style};
use serde_json::Value;

pub use items::{normalize, normalize_all, ItemFields, NormalizedItem};
pub use open_state::{OpenMode, OpenState};

use crate::error::{Error, Result};
use crate::handlers::{handler, ItemRenderer, ValueCallback};
use crate::page::Page;
use crate::state::State;
use crate::style::{Alignment, Color, Prop, Side, SizePreset, Variant};
use crate::widgets::{Button, Icon};

const DEFAULT_WIDTH: &str = "120px";

// =============================================================================
// Menu body
// =============================================================================

/// Error shown in place of the items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// Shows "Error".
    Flag,
    Message(String),
}

/// What the menu shows, in precedence order.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuBody {
    Loading,
    Error(String),
    Empty,
    Items(Vec<NormalizedItem>),
}

impl MenuBody {
    /// The status text, for every body but `Items`.
    pub fn status_text(&self) -> Option<&str> {
        match self {
            Self::Loading => Some("Loading..."),
            Self::Error(message) => Some(message),
            Self::Empty => Some("No items"),
            Self::Items(_) => None,
        }
    }
}

// =============================================================================
// Shared state
// =============================================================================

#[derive(Default)]
struct Hooks {
    on_select: Option<ValueCallback<Value>>,
    on_open_change: Option<ValueCallback<bool>>,
}

/// Bookkeeping from the last build.
#[derive(Default)]
struct Mounted {
    /// Every element ID in the rendered dropdown, for inside/outside checks.
    ids: HashSet<String>,
    rendered_open: bool,
    pointer_guard: Option<ListenerGuard>,
    resize_guard: Option<ListenerGuard>,
}

/// State reachable from handlers and document listeners. They hold it
/// weakly, so dropping the `Dropdown` releases everything.
struct Shared {
    open: OpenState,
    hooks: RwLock<Hooks>,
    mounted: Mutex<Mounted>,
    /// Trigger width as last measured, for menus without an explicit width.
    measured_width: State<Option<String>>,
    hovered_item: State<Option<String>>,
}

impl Shared {
    fn new(mode: OpenMode) -> Self {
        Self {
            open: OpenState::new(mode),
            hooks: RwLock::new(Hooks::default()),
            mounted: Mutex::new(Mounted::default()),
            measured_width: State::new(None),
            hovered_item: State::new(None),
        }
    }

    fn is_open(&self) -> bool {
        self.open.is_open()
    }

    /// Request a transition: applied locally when uncontrolled, reported to
    /// `on_open_change` in both modes.
    fn set_open(&self, open: bool) {
        let changed = self.open.request(open);
        log::debug!(
            "Dropdown: open requested={open} controlled={} changed={changed}",
            self.open.is_controlled()
        );

        let callback = self
            .hooks
            .read()
            .ok()
            .and_then(|hooks| hooks.on_open_change.clone());
        if let Some(callback) = callback {
            callback(&open);
        }
    }

    fn toggle(&self) {
        self.set_open(!self.is_open());
    }

    fn select(&self, raw: &Value, disabled: bool) {
        if disabled {
            return;
        }

        let callback = self
            .hooks
            .read()
            .ok()
            .and_then(|hooks| hooks.on_select.clone());
        if let Some(callback) = callback {
            callback(raw);
        }
        self.set_open(false);
    }

    fn handle_key(&self, key: &KeyEvent) {
        match key.key.as_str() {
            "Escape" => self.set_open(false),
            "ArrowDown" => self.set_open(true),
            _ => {}
        }
    }

    fn contains(&self, id: &str) -> bool {
        self.mounted
            .lock()
            .map(|mounted| mounted.ids.contains(id))
            .unwrap_or(false)
    }

    fn measure(&self, document: &Document, trigger_id: &str) {
        let width = document
            .rect(trigger_id)
            .filter(|rect| rect.width > 0)
            .map(|rect| format!("{}px", rect.width));
        if self.measured_width.replace_if_changed(width.clone()) {
            log::debug!("Dropdown: trigger {trigger_id} measured at {width:?}");
        }
    }
}

// =============================================================================
// Dropdown
// =============================================================================

/// A dropdown menu.
///
/// # Example
///
/// ```ignore
/// let accounts = Dropdown::new(json!([
///     { "asif": "1", "zaman": "Time & Sales" },
///     { "asif": "2", "zaman": "Order book", "disabled": true },
/// ]))
/// .label("Windows")
/// .fields(ItemFields::default().key("asif").label("zaman"))
/// .on_select(|item| log::info!("selected {item}"));
///
/// page.render(|page| accounts.build(page));
/// ```
pub struct Dropdown {
    id: String,
    label: String,
    icon: Option<Icon>,
    items: Value,
    fields: ItemFields,
    render_item: Option<ItemRenderer>,

    bg_color: Prop<Color>,
    text_color: Prop<Color>,
    font_size: Prop<String>,
    width: Option<String>,
    height: String,
    border_radius: String,
    border: Prop<String>,
    padding: Prop<String>,
    hover_bg_color: Prop<Color>,
    hover_text_color: Prop<Color>,
    size: SizePreset,
    variant: Variant,
    alignment: Alignment,

    menu_align: Side,
    item_padding: String,
    item_text_color: Color,
    item_hover_bg: Color,
    item_bg: Color,

    loading: bool,
    error: Option<MenuError>,
    disabled: bool,

    show_toggle: bool,
    toggle_icon: Option<Icon>,
    toggle_position: Side,

    class: Option<String>,
    style: Style,

    trigger_hovered: State<bool>,
    shared: Arc<Shared>,
}

impl Dropdown {
    /// An uncontrolled dropdown, initially closed.
    pub fn new(items: Value) -> Self {
        Self {
            id: generate_id("dropdown"),
            label: String::new(),
            icon: None,
            items,
            fields: ItemFields::default(),
            render_item: None,
            bg_color: Prop::Unset,
            text_color: Prop::Unset,
            font_size: Prop::Unset,
            width: Some(DEFAULT_WIDTH.into()),
            height: "28px".into(),
            border_radius: "6px".into(),
            border: Prop::Unset,
            padding: Prop::Unset,
            hover_bg_color: Prop::Unset,
            hover_text_color: Prop::Unset,
            size: SizePreset::Md,
            variant: Variant::Primary,
            alignment: Alignment::Left,
            menu_align: Side::Right,
            item_padding: "8px 12px".into(),
            item_text_color: Color::rgb(0x11, 0x18, 0x27),
            item_hover_bg: Color::rgb(0xf3, 0xf4, 0xf6),
            item_bg: Color::Transparent,
            loading: false,
            error: None,
            disabled: false,
            show_toggle: true,
            toggle_icon: None,
            toggle_position: Side::Right,
            class: None,
            style: Style::new(),
            trigger_hovered: State::new(false),
            shared: Arc::new(Shared::new(OpenMode::default())),
        }
    }

    /// A dropdown whose open flag the caller owns.
    pub fn controlled(items: Value, open: bool) -> Self {
        Self::new(items).mode(OpenMode::Controlled(open))
    }

    /// Choose who owns the open flag. Only takes effect before the first
    /// build.
    pub fn mode(mut self, mode: OpenMode) -> Self {
        match Arc::get_mut(&mut self.shared) {
            Some(shared) => shared.open = OpenState::new(mode),
            None => log::warn!("Dropdown {}: mode can't change after build", self.id),
        }
        self
    }

    /// Initial open flag of an uncontrolled dropdown. Ignored on a
    /// controlled one.
    pub fn default_open(self, open: bool) -> Self {
        if self.is_controlled() {
            log::warn!("Dropdown {}: default_open ignored on a controlled dropdown", self.id);
            return self;
        }
        self.mode(OpenMode::Uncontrolled(open))
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn fields(mut self, fields: ItemFields) -> Self {
        self.fields = fields;
        self
    }

    pub fn on_select(self, f: impl Fn(&Value) + Send + Sync + 'static) -> Self {
        if let Ok(mut hooks) = self.shared.hooks.write() {
            hooks.on_select = Some(Arc::new(f));
        }
        self
    }

    pub fn on_open_change(self, f: impl Fn(bool) + Send + Sync + 'static) -> Self {
        if let Ok(mut hooks) = self.shared.hooks.write() {
            hooks.on_open_change = Some(Arc::new(move |open: &bool| f(*open)));
        }
        self
    }

    /// Render each item's label with a custom element built from the raw
    /// item.
    pub fn render_item(mut self, f: impl Fn(&Value) -> Element + Send + Sync + 'static) -> Self {
        self.render_item = Some(Arc::new(f));
        self
    }

    pub fn bg_color(mut self, color: impl Into<Color>) -> Self {
        self.bg_color = Prop::Explicit(color.into());
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

    /// Width of both the trigger and the menu.
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Let the menu follow the trigger's measured width instead.
    pub fn auto_width(mut self) -> Self {
        self.width = None;
        self
    }

    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
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

    pub fn hover_bg_color(mut self, color: impl Into<Color>) -> Self {
        self.hover_bg_color = Prop::Explicit(color.into());
        self
    }

    pub fn hover_text_color(mut self, color: impl Into<Color>) -> Self {
        self.hover_text_color = Prop::Explicit(color.into());
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

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Which edge of the dropdown the menu lines up with.
    pub fn menu_align(mut self, side: Side) -> Self {
        self.menu_align = side;
        self
    }

    pub fn item_padding(mut self, padding: impl Into<String>) -> Self {
        self.item_padding = padding.into();
        self
    }

    pub fn item_text_color(mut self, color: impl Into<Color>) -> Self {
        self.item_text_color = color.into();
        self
    }

    pub fn item_hover_bg(mut self, color: impl Into<Color>) -> Self {
        self.item_hover_bg = color.into();
        self
    }

    pub fn item_bg(mut self, color: impl Into<Color>) -> Self {
        self.item_bg = color.into();
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.error = error.then_some(MenuError::Flag);
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error = Some(MenuError::Message(message.into()));
        self
    }

    /// Disable the trigger.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn show_toggle(mut self, show: bool) -> Self {
        self.show_toggle = show;
        self
    }

    pub fn toggle_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.toggle_icon = Some(icon.into());
        self
    }

    pub fn toggle_position(mut self, side: Side) -> Self {
        self.toggle_position = side;
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

    pub fn set_items(&mut self, items: Value) {
        self.items = items;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<MenuError>) {
        self.error = error;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_width(&mut self, width: Option<String>) {
        self.width = width;
    }

    // -------------------------------------------------------------------------
    // Open state
    // -------------------------------------------------------------------------

    /// The open flag the dropdown renders with.
    pub fn is_open(&self) -> bool {
        self.shared.is_open()
    }

    pub fn is_controlled(&self) -> bool {
        self.shared.open.is_controlled()
    }

    /// Feed the caller's open flag to a controlled dropdown.
    pub fn sync_open(&self, open: bool) -> Result<()> {
        match self.shared.open.sync(open) {
            Some(_) => Ok(()),
            None => {
                log::warn!("Dropdown {}: sync_open on an uncontrolled dropdown", self.id);
                Err(Error::NotControlled {
                    id: self.id.clone(),
                })
            }
        }
    }

    /// Request the opposite of the current open flag, as a trigger click does.
    pub fn toggle(&self) {
        self.shared.toggle();
    }

    /// Request an open flag, as the menu's keyboard handling does.
    pub fn set_open(&self, open: bool) {
        self.shared.set_open(open);
    }

    /// Select an item: disabled items are ignored, otherwise `on_select`
    /// gets the raw item and the menu closes.
    pub fn select(&self, item: &NormalizedItem) {
        self.shared.select(&item.raw, item.disabled);
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    pub fn normalized_items(&self) -> Vec<NormalizedItem> {
        normalize_all(&self.items, &self.fields, &self.item_bg)
    }

    pub fn body(&self) -> MenuBody {
        if self.loading {
            return MenuBody::Loading;
        }
        match &self.error {
            Some(MenuError::Flag) => return MenuBody::Error("Error".into()),
            Some(MenuError::Message(message)) => return MenuBody::Error(message.clone()),
            None => {}
        }

        let items = self.normalized_items();
        if items.is_empty() {
            MenuBody::Empty
        } else {
            MenuBody::Items(items)
        }
    }

    /// The trigger width as last measured, when the menu follows it.
    pub fn measured_width(&self) -> Option<String> {
        self.shared.measured_width.get()
    }

    /// The CSS width the menu renders with.
    pub fn menu_width(&self, document: &Document) -> String {
        match &self.width {
            Some(width) => width.clone(),
            None => {
                if self.shared.measured_width.with(Option::is_none) {
                    self.shared.measure(document, &self.trigger_id());
                }
                self.shared
                    .measured_width
                    .get()
                    .unwrap_or_else(|| "auto".into())
            }
        }
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    /// The element wrapping the trigger button; its measured width is what
    /// the menu follows.
    pub fn trigger_id(&self) -> String {
        format!("{}-trigger", self.id)
    }

    pub fn button_id(&self) -> String {
        format!("{}-button", self.id)
    }

    pub fn menu_id(&self) -> String {
        format!("{}-menu", self.id)
    }

    pub fn item_id(&self, index: usize) -> String {
        format!("{}-item-{index}", self.id)
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Build the element tree, register handlers and bring the document
    /// listeners in line with the new state.
    pub fn build(&self, page: &Page) -> Element {
        let document = page.document();
        let open = self.shared.is_open();
        let body = self.body();
        log::debug!(
            "Dropdown::build id={} open={} controlled={} body={:?}",
            self.id,
            open,
            self.is_controlled(),
            body.status_text().unwrap_or("items")
        );

        let first_item = match &body {
            // Focus only ever goes to item 0; a disabled one leaves it where it was
            MenuBody::Items(items) => items
                .first()
                .filter(|item| !item.disabled)
                .map(|_| self.item_id(0)),
            _ => None,
        };

        let trigger = Element::div()
            .id(self.trigger_id())
            .style(
                Style::new()
                    .set("display", "inline-flex")
                    .set("align-items", "center")
                    .set("gap", "8px"),
            )
            .child(self.build_trigger(page, open));
        let menu = self.build_menu(page, open, body);

        let class = match &self.class {
            Some(class) => format!("dropdown-root {class}"),
            None => "dropdown-root".into(),
        };
        let root = Element::div()
            .id(&self.id)
            .class(class)
            .style(
                Style::new()
                    .set("position", "relative")
                    .set("display", "inline-block")
                    .merge(&self.style),
            )
            .child(trigger)
            .child(menu);

        self.mount(document, &root, open, first_item);
        root
    }

    fn build_trigger(&self, page: &Page, open: bool) -> Element {
        let toggle = self.show_toggle.then(|| {
            let icon = self
                .toggle_icon
                .clone()
                .unwrap_or_else(|| Icon::named("chevron_right"));
            Element::inline()
                .id(format!("{}-toggle", self.id))
                .style(
                    Style::new()
                        .set("display", "inline-flex")
                        .set("align-items", "center")
                        .set("transform", if open { "rotate(90deg)" } else { "rotate(0deg)" })
                        .set("transform-origin", "center")
                        .set("transition", "transform 0.18s"),
                )
                .child(icon.build(12))
        });

        let icon_position = if self.icon.is_some()
            || (self.show_toggle && self.toggle_position == Side::Left)
        {
            Side::Left
        } else {
            Side::Right
        };

        let weak = Arc::downgrade(&self.shared);
        let mut button = Button::new(&self.label)
            .id(self.button_id())
            .alignment(self.alignment)
            .bg_color_prop(self.bg_color.clone())
            .text_color_prop(self.text_color.clone())
            .box_props(self.font_size.clone(), self.border.clone(), self.padding.clone())
            .hover_colors(self.hover_bg_color.clone(), self.hover_text_color.clone())
            .width(self.width.as_deref().unwrap_or(DEFAULT_WIDTH))
            .height(&self.height)
            .border_radius(&self.border_radius)
            .size(self.size)
            .variant(self.variant)
            .disabled(self.disabled)
            .icon_position(icon_position)
            .hover_state(self.trigger_hovered.clone())
            .on_click(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.toggle();
                }
            });
        if let Some(icon) = &self.icon {
            button = button.icon(icon.clone());
        }
        match (toggle, self.toggle_position) {
            (Some(toggle), Side::Left) => button = button.icon(toggle),
            (Some(toggle), Side::Right) => button = button.trailing(toggle),
            (None, _) => {}
        }

        button.build(page)
    }

    fn build_menu(&self, page: &Page, open: bool, body: MenuBody) -> Element {
        let theme = page.theme();
        let edge = match self.menu_align {
            Side::Left => "left",
            Side::Right => "right",
        };
        let style = Style::new()
            .set("display", if open { "block" } else { "none" })
            .set("position", "absolute")
            .set("width", self.menu_width(page.document()))
            .set(edge, "0")
            .set("margin-top", "6px")
            .set("background", self.item_bg.to_css())
            .set("box-shadow", "0 6px 18px rgba(0,0,0,0.08)")
            .set("border-radius", "6px")
            .set("z-index", "40")
            .set("padding", "6px 0");

        let status = |text: &str, color: &Color| {
            Element::div().child(Element::span(text)).style(
                Style::new()
                    .set("padding", "12px")
                    .set("text-align", "center")
                    .set("color", color.to_css()),
            )
        };
        let children = match &body {
            MenuBody::Loading | MenuBody::Empty => {
                vec![status(body.status_text().unwrap_or_default(), &theme.loading_text)]
            }
            MenuBody::Error(message) => vec![status(message.as_str(), &theme.error_text)],
            MenuBody::Items(items) => self.build_items(page, items),
        };

        let menu_id = self.menu_id();
        let weak = Arc::downgrade(&self.shared);
        page.registry().register(
            &menu_id,
            EventKind::KeyDown,
            handler(move |hx| {
                if let (Some(shared), Some(key)) = (weak.upgrade(), hx.key()) {
                    shared.handle_key(key);
                }
            }),
        );

        Element::div()
            .id(menu_id)
            .role("menu")
            .attr("aria-hidden", (!open).to_string())
            .hidden(!open)
            .style(style)
            .children(children)
    }

    fn build_items(&self, page: &Page, items: &[NormalizedItem]) -> Vec<Element> {
        let theme = page.theme();
        let hovered = self.shared.hovered_item.get();
        let last = items.len().saturating_sub(1);

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let item_id = self.item_id(index);
                let is_hovered = !item.disabled && hovered.as_deref() == Some(item_id.as_str());
                let bg = if is_hovered {
                    &self.item_hover_bg
                } else {
                    &item.bg
                };
                let color = if item.disabled {
                    &theme.muted_text
                } else {
                    &self.item_text_color
                };

                let style = Style::new()
                    .set("display", "flex")
                    .set("align-items", "center")
                    .set("gap", "4px")
                    .set("width", "100%")
                    .set("background", bg.to_css())
                    .set("border", "none")
                    .set("padding", &self.item_padding)
                    .set("text-align", "left")
                    .set("cursor", if item.disabled { "not-allowed" } else { "pointer" })
                    .set("color", color.to_css())
                    .set(
                        "border-bottom",
                        if index == last {
                            "none"
                        } else {
                            "1px solid rgba(0,0,0,0.06)"
                        },
                    );

                let icon = item.raw.get("icon").and_then(Value::as_str).map(|name| {
                    Element::inline()
                        .style(Style::new().set("display", "inline-flex").set("align-items", "center"))
                        .child(Icon::named(name).build(12))
                });
                let label = match &self.render_item {
                    Some(render) => render(&item.raw),
                    None => Element::span(&item.label),
                };

                self.register_item_handlers(page, &item_id, item);

                Element::button()
                    .id(item_id)
                    .role("menuitem")
                    .attr("data-key", item.key_string())
                    .focusable(!item.disabled)
                    .clickable(!item.disabled)
                    .disabled(item.disabled)
                    .style(style)
                    .maybe_child(icon)
                    .child(Element::inline().style(Style::new().set("flex", "1")).child(label))
            })
            .collect()
    }

    fn register_item_handlers(&self, page: &Page, item_id: &str, item: &NormalizedItem) {
        if item.disabled {
            return;
        }
        let registry = page.registry();

        let weak = Arc::downgrade(&self.shared);
        let raw = item.raw.clone();
        registry.register(
            item_id,
            EventKind::Click,
            handler(move |_| {
                if let Some(shared) = weak.upgrade() {
                    shared.select(&raw, false);
                }
            }),
        );

        let hovered = self.shared.hovered_item.clone();
        let id = item_id.to_string();
        registry.register(
            item_id,
            EventKind::PointerEnter,
            handler(move |_| {
                hovered.replace_if_changed(Some(id.clone()));
            }),
        );

        let hovered = self.shared.hovered_item.clone();
        let id = item_id.to_string();
        registry.register(
            item_id,
            EventKind::PointerLeave,
            handler(move |_| {
                if hovered.with(|current| current.as_deref() == Some(id.as_str())) {
                    hovered.set(None);
                }
            }),
        );
    }

    // -------------------------------------------------------------------------
    // Document listeners
    // -------------------------------------------------------------------------

    fn mount(&self, document: &Document, root: &Element, open: bool, first_item: Option<String>) {
        let was_open = {
            let Ok(mut mounted) = self.shared.mounted.lock() else {
                return;
            };
            mounted.ids = collect_ids(root);

            if open {
                let attached = mounted
                    .pointer_guard
                    .as_ref()
                    .is_some_and(|guard| guard.is_attached_to(document));
                if !attached {
                    mounted.pointer_guard = Some(listen_pointer_down(document, Arc::downgrade(&self.shared)));
                }
            } else {
                mounted.pointer_guard = None;
            }

            if self.width.is_none() {
                let attached = mounted
                    .resize_guard
                    .as_ref()
                    .is_some_and(|guard| guard.is_attached_to(document));
                if !attached {
                    mounted.resize_guard = Some(listen_resize(
                        document,
                        Arc::downgrade(&self.shared),
                        self.trigger_id(),
                    ));
                }
            } else {
                mounted.resize_guard = None;
            }

            std::mem::replace(&mut mounted.rendered_open, open)
        };

        if open && !was_open {
            if let Some(first) = first_item {
                log::debug!("Dropdown {}: focusing {first} next tick", self.id);
                document.defer(move |doc| {
                    doc.focus(&first);
                });
            }
        }
    }

    /// Drop every document listener, as when the dropdown leaves the page.
    pub fn unmount(&self) {
        if let Ok(mut mounted) = self.shared.mounted.lock() {
            *mounted = Mounted::default();
        }
    }
}

fn listen_pointer_down(document: &Document, shared: Weak<Shared>) -> ListenerGuard {
    document.add_listener(EventKind::PointerDown, move |event| {
        let Some(shared) = shared.upgrade() else {
            return;
        };
        let inside = event.target().is_some_and(|target| shared.contains(target));
        if !inside {
            log::debug!("Dropdown: pointer down outside {:?}", event.target());
            shared.set_open(false);
        }
    })
}

fn listen_resize(document: &Document, shared: Weak<Shared>, trigger_id: String) -> ListenerGuard {
    let weak_document = document.downgrade();
    document.add_listener(EventKind::Resize, move |_| {
        if let (Some(shared), Some(document)) = (shared.upgrade(), weak_document.upgrade()) {
            shared.measure(&document, &trigger_id);
        }
    })
}
