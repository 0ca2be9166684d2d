pub mod document;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod outline;
pub mod style;
pub mod text;

pub use document::{Document, Listener, ListenerGuard, ListenerId, WeakDocument};
pub use element::{collect_ids, contains, find_element, generate_id, path_to, Content, Element, Tag};
pub use event::{Event, EventKind, KeyEvent, Modifiers, MouseButton, PointerEvent};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_any};
pub use layout::{LayoutResult, Rect};
pub use outline::outline;
pub use style::Style;
