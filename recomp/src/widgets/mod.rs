//! Widget library.

mod button;
pub mod dropdown;
pub mod hotkey;
mod icon;
pub mod market_ticker;

pub use button::{Button, ButtonType};
pub use dropdown::{Dropdown, ItemFields, MenuBody, MenuError, NormalizedItem, OpenMode};
pub use hotkey::{HotKey, KeyCombo, ShortcutBinding};
pub use icon::Icon;
pub use market_ticker::{MarketTicker, TickerDirection, TickerItem};
