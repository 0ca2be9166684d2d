//! A rendered page: the element tree, its handler registry and the document.
//!
//! Dispatch order for one event:
//! 1. Element handlers along the path from the target up to the root
//!    (deepest first). Pointer enter/leave only reach the target itself.
//! 2. Document listeners for the event's stream.

use std::sync::Arc;

use recomp_dom::{hit_test, hit_test_any, path_to, Document, Element, Event, EventKind, PointerEvent};

use crate::handlers::{Handler, HandlerContext, HandlerRegistry};
use crate::theme::Theme;

// =============================================================================
// DispatchResult
// =============================================================================

/// What an event reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchResult {
    /// Element handlers invoked.
    pub handlers: usize,
    /// Document listeners invoked.
    pub listeners: usize,
}

impl DispatchResult {
    pub fn is_handled(&self) -> bool {
        self.handlers > 0 || self.listeners > 0
    }
}

// =============================================================================
// Page
// =============================================================================

#[derive(Debug, Default)]
pub struct Page {
    document: Document,
    registry: HandlerRegistry,
    theme: Arc<Theme>,
    root: Option<Element>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page on an existing document, e.g. one shared with another page.
    pub fn with_document(document: Document) -> Self {
        Self {
            document,
            registry: HandlerRegistry::new(),
            theme: Arc::default(),
            root: None,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Arc::new(theme);
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The tree produced by the last render.
    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }

    /// Rebuild the tree. Handlers from the previous render are dropped
    /// before `build` runs, so only the new tree's handlers stay live.
    pub fn render(&mut self, build: impl FnOnce(&Page) -> Element) -> &Element {
        self.registry.clear();
        let root = build(self);
        log::debug!(
            "Page::render root={} handlers={}",
            root.id,
            self.registry.len()
        );
        self.root.insert(root)
    }

    /// Deliver an event to element handlers, then to document listeners.
    pub fn dispatch(&self, event: &Event) -> DispatchResult {
        let handlers = self.dispatch_to_elements(event);
        let listeners = self.document.dispatch(event);
        DispatchResult {
            handlers,
            listeners,
        }
    }

    /// Run tasks deferred to the next tick (focus moves and the like).
    pub fn tick(&self) -> usize {
        self.document.tick()
    }

    /// Click the focused element, as Enter or Space would on a real button.
    pub fn activate_focused(&self) -> DispatchResult {
        match self.document.focused() {
            Some(id) => self.dispatch(&Event::click(id)),
            None => DispatchResult::default(),
        }
    }

    /// Press the pointer at a position. The pointer-down lands on the deepest
    /// element there, whatever its kind; the click only on a clickable one.
    pub fn click_at(&self, x: u32, y: u32) -> DispatchResult {
        let layout = self.document.layout();
        let (pressed, clicked) = match &self.root {
            Some(root) => (
                hit_test_any(&layout, root, x, y),
                hit_test(&layout, root, x, y),
            ),
            None => (None, None),
        };
        let pointer = |target| PointerEvent {
            target,
            x,
            y,
            ..Default::default()
        };

        let down = self.dispatch(&Event::PointerDown(pointer(pressed)));
        let click = self.dispatch(&Event::Click(pointer(clicked)));
        DispatchResult {
            handlers: down.handlers + click.handlers,
            listeners: down.listeners + click.listeners,
        }
    }

    fn dispatch_to_elements(&self, event: &Event) -> usize {
        let Some(root) = &self.root else {
            return 0;
        };

        let kind = event.kind();
        let target = match event {
            Event::Key(key) => key.target.clone().or_else(|| self.document.focused()),
            _ => event.target().map(str::to_string),
        };
        let Some(target) = target else {
            return 0;
        };

        let chain: Vec<(String, Handler)> = match kind {
            EventKind::PointerEnter | EventKind::PointerLeave => self
                .registry
                .get(&target, kind)
                .map(|h| vec![(target.clone(), h)])
                .unwrap_or_default(),
            EventKind::Resize => Vec::new(),
            _ => path_to(root, &target)
                .unwrap_or_default()
                .into_iter()
                .rev()
                .filter_map(|el| {
                    self.registry
                        .get(&el.id, kind)
                        .map(|h| (el.id.clone(), h))
                })
                .collect(),
        };

        for (current, handler) in &chain {
            let hx = HandlerContext::new(&self.document, event, current);
            handler(&hx);
        }
        chain.len()
    }
}
