//! recomp - presentational trading widgets on a DOM-style element tree.
//!
//! Widgets are built once with builder methods and rendered into a [`Page`]
//! on every frame:
//!
//! ```ignore
//! use recomp::prelude::*;
//!
//! let buy = Button::new("Buy").bg_color("#0C8544").on_click(|| log::info!("bought"));
//! let sales = HotKey::new("Time and sales", "F2").keys(["F2"]).on_activate(|| {});
//!
//! let mut page = Page::new();
//! page.render(|page| {
//!     Element::div()
//!         .child(buy.build(page))
//!         .child(sales.build(page))
//! });
//! page.dispatch(&Event::Key(KeyEvent::function(2)));
//! ```

pub mod error;
pub mod handlers;
pub mod page;
pub mod state;
pub mod style;
pub mod theme;
pub mod widgets;

pub use error::{Error, Result};
pub use handlers::{handler, Callback, Handler, HandlerContext, HandlerRegistry, ValueCallback};
pub use page::{DispatchResult, Page};
pub use state::State;
pub use theme::Theme;

pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::page::{DispatchResult, Page};
    pub use crate::state::State;
    pub use crate::style::{Alignment, Color, FontWeight, Prop, Side, SizePreset, Variant};
    pub use crate::theme::Theme;
    pub use crate::widgets::{
        Button, ButtonType, Dropdown, HotKey, Icon, ItemFields, KeyCombo, MarketTicker,
        MenuBody, MenuError, OpenMode, TickerDirection, TickerItem,
    };
    pub use recomp_dom::{Document, Element, Event, EventKind, KeyEvent, Modifiers, Rect, Style};
}
