//! Callback types and the per-render handler registry.
//!
//! This module provides:
//! - `Callback` / `ValueCallback<T>`: the caller-facing callback types widgets
//!   accept (`on_click`, `on_select`, `on_open_change`, ...)
//! - `Handler`: internal closure a widget attaches to one of its elements
//! - `HandlerRegistry`: stores those closures keyed by (element_id, event kind)
//!
//! Widgets register handlers while building their element tree; `Page`
//! clears the registry before every render so stale closures never fire.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use recomp_dom::{Document, Event, EventKind, KeyEvent};

// =============================================================================
// Callback Types
// =============================================================================

/// A caller-supplied callback with no arguments.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// A caller-supplied callback receiving a value.
pub type ValueCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Custom renderer for a dropdown item's label, receiving the raw item.
pub type ItemRenderer = Arc<dyn Fn(&serde_json::Value) -> recomp_dom::Element + Send + Sync>;

// =============================================================================
// Handler Type
// =============================================================================

/// A handler closure attached to an element.
pub type Handler = Arc<dyn Fn(&HandlerContext<'_>) + Send + Sync>;

/// Wrap a closure as a [`Handler`].
pub fn handler(f: impl Fn(&HandlerContext<'_>) + Send + Sync + 'static) -> Handler {
    Arc::new(f)
}

/// What a handler gets to see when it runs.
pub struct HandlerContext<'a> {
    document: &'a Document,
    event: &'a Event,
    /// The element the handler was registered on (differs from the event
    /// target when the event bubbled).
    current_target: &'a str,
}

impl<'a> HandlerContext<'a> {
    pub fn new(document: &'a Document, event: &'a Event, current_target: &'a str) -> Self {
        Self {
            document,
            event,
            current_target,
        }
    }

    pub fn document(&self) -> &Document {
        self.document
    }

    pub fn event(&self) -> &Event {
        self.event
    }

    pub fn current_target(&self) -> &str {
        self.current_target
    }

    /// The key event, for keydown handlers.
    pub fn key(&self) -> Option<&KeyEvent> {
        self.event.as_key()
    }
}

// =============================================================================
// HandlerRegistry
// =============================================================================

/// Registry for element event handlers.
///
/// Maps (element_id, event kind) to handler closures. Cleared at the start
/// of each render so handlers from previous renders don't persist.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, EventKind), Handler>>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event, replacing any previous one.
    pub fn register(&self, element_id: &str, kind: EventKind, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), kind), handler);
        }
    }

    pub fn get(&self, element_id: &str, kind: EventKind) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), kind))
            .cloned()
    }

    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.handlers
            .read()
            .map(|h| h.is_empty())
            .unwrap_or(true)
    }

    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &self.len())
            .finish()
    }
}
