//! The document: the page-wide event target shared by every widget.
//!
//! Widgets subscribe to the global keyboard, pointer-down and resize streams
//! here instead of on individual elements. A subscription lives exactly as
//! long as the [`ListenerGuard`] returned for it.
//!
//! The document also owns the focused element, the measured layout the host
//! reports back after rendering, and a queue of tasks deferred to the next
//! UI tick.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

use crate::element::Element;
use crate::event::{Event, EventKind};
use crate::focus::FocusState;
use crate::layout::{LayoutResult, Rect};

/// A listener closure for one event stream.
pub type Listener = Arc<dyn Fn(&Event) + Send + Sync>;

type Task = Box<dyn FnOnce(&Document) + Send>;

/// Identifies a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct Registered {
    id: ListenerId,
    kind: EventKind,
    listener: Listener,
}

#[derive(Default)]
struct DocumentInner {
    listeners: RwLock<Vec<Registered>>,
    next_id: AtomicU64,
    deferred: Mutex<VecDeque<Task>>,
    focus: RwLock<FocusState>,
    layout: RwLock<LayoutResult>,
    viewport: RwLock<Rect>,
}

impl DocumentInner {
    fn remove(&self, id: ListenerId) -> bool {
        match self.listeners.write() {
            Ok(mut listeners) => {
                let before = listeners.len();
                listeners.retain(|r| r.id != id);
                listeners.len() != before
            }
            Err(_) => false,
        }
    }
}

/// Shared handle to a document. Cloning is cheap and every clone refers to
/// the same listeners, focus and layout.
#[derive(Clone, Default)]
pub struct Document {
    inner: Arc<DocumentInner>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether two handles refer to the same document.
    pub fn ptr_eq(&self, other: &Document) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// A handle that does not keep the document alive. Listeners that need
    /// the document back should capture this instead of a clone.
    pub fn downgrade(&self) -> WeakDocument {
        WeakDocument {
            inner: Arc::downgrade(&self.inner),
        }
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    /// Subscribe to an event stream. The listener stays registered until the
    /// returned guard is dropped.
    pub fn add_listener(
        &self,
        kind: EventKind,
        listener: impl Fn(&Event) + Send + Sync + 'static,
    ) -> ListenerGuard {
        let id = ListenerId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        if let Ok(mut listeners) = self.inner.listeners.write() {
            listeners.push(Registered {
                id,
                kind,
                listener: Arc::new(listener),
            });
        }
        log::debug!("Document: added {kind:?} listener {id:?}");

        ListenerGuard {
            id,
            document: Arc::downgrade(&self.inner),
        }
    }

    /// Remove a listener by ID. Returns true if it was registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let removed = self.inner.remove(id);
        if removed {
            log::debug!("Document: removed listener {id:?}");
        }
        removed
    }

    /// Number of listeners subscribed to `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.inner
            .listeners
            .read()
            .map(|listeners| listeners.iter().filter(|r| r.kind == kind).count())
            .unwrap_or(0)
    }

    /// Deliver an event to every listener of its stream, in subscription
    /// order. Returns the number of listeners invoked.
    ///
    /// The listener list is snapshotted first, so listeners may subscribe or
    /// unsubscribe while the event is being delivered; changes take effect
    /// from the next dispatch.
    pub fn dispatch(&self, event: &Event) -> usize {
        if let Event::Resize { width, height } = event {
            if let Ok(mut viewport) = self.inner.viewport.write() {
                *viewport = Rect::from_size(*width, *height);
            }
        }

        let kind = event.kind();
        let snapshot: Vec<Listener> = match self.inner.listeners.read() {
            Ok(listeners) => listeners
                .iter()
                .filter(|r| r.kind == kind)
                .map(|r| Arc::clone(&r.listener))
                .collect(),
            Err(_) => return 0,
        };

        for listener in &snapshot {
            listener(event);
        }
        snapshot.len()
    }

    // -------------------------------------------------------------------------
    // Deferred tasks
    // -------------------------------------------------------------------------

    /// Queue a task for the next UI tick.
    pub fn defer(&self, task: impl FnOnce(&Document) + Send + 'static) {
        if let Ok(mut deferred) = self.inner.deferred.lock() {
            deferred.push_back(Box::new(task));
        }
    }

    pub fn pending_tasks(&self) -> usize {
        self.inner.deferred.lock().map(|d| d.len()).unwrap_or(0)
    }

    /// Run the tasks queued before this call. Tasks deferred while running
    /// wait for the following tick. Returns the number of tasks run.
    pub fn tick(&self) -> usize {
        let tasks: Vec<Task> = match self.inner.deferred.lock() {
            Ok(mut deferred) => deferred.drain(..).collect(),
            Err(_) => return 0,
        };

        let count = tasks.len();
        for task in tasks {
            task(self);
        }
        count
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    pub fn focused(&self) -> Option<String> {
        self.inner
            .focus
            .read()
            .ok()
            .and_then(|f| f.focused().map(str::to_string))
    }

    /// Focus an element. Returns true if focus changed.
    pub fn focus(&self, id: &str) -> bool {
        self.inner
            .focus
            .write()
            .map(|mut f| f.focus(id))
            .unwrap_or(false)
    }

    pub fn blur(&self) -> bool {
        self.inner
            .focus
            .write()
            .map(|mut f| f.blur())
            .unwrap_or(false)
    }

    /// Move focus to the next (or previous) focusable element in `root`.
    pub fn focus_next(&self, root: &Element, backwards: bool) -> Option<String> {
        let mut focus = self.inner.focus.write().ok()?;
        if backwards {
            focus.focus_prev(root)
        } else {
            focus.focus_next(root)
        }
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    /// Replace the measured layout.
    pub fn set_layout(&self, layout: LayoutResult) {
        if let Ok(mut current) = self.inner.layout.write() {
            *current = layout;
        }
    }

    /// Record the measured box of a single element.
    pub fn set_rect(&self, id: impl Into<String>, rect: Rect) {
        if let Ok(mut layout) = self.inner.layout.write() {
            layout.insert(id.into(), rect);
        }
    }

    /// Measured box of an element, if the host has reported one.
    pub fn rect(&self, id: &str) -> Option<Rect> {
        self.inner.layout.read().ok()?.get(id).copied()
    }

    pub fn layout(&self) -> LayoutResult {
        self.inner
            .layout
            .read()
            .map(|l| l.clone())
            .unwrap_or_default()
    }

    /// Size of the viewport as of the last resize event.
    pub fn viewport(&self) -> Rect {
        self.inner.viewport.read().map(|v| *v).unwrap_or_default()
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listener_count = self.inner.listeners.read().map(|l| l.len()).unwrap_or(0);
        f.debug_struct("Document")
            .field("listener_count", &listener_count)
            .field("pending_tasks", &self.pending_tasks())
            .field("focused", &self.focused())
            .finish()
    }
}

/// Weak counterpart of [`Document`].
#[derive(Clone, Default)]
pub struct WeakDocument {
    inner: Weak<DocumentInner>,
}

impl WeakDocument {
    pub fn upgrade(&self) -> Option<Document> {
        self.inner.upgrade().map(|inner| Document { inner })
    }
}

/// Keeps a listener registered; dropping it unsubscribes.
///
/// The guard holds the document weakly, so it never keeps a document alive.
#[must_use = "dropping the guard removes the listener immediately"]
pub struct ListenerGuard {
    id: ListenerId,
    document: Weak<DocumentInner>,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Whether this guard's listener lives on `document`.
    pub fn is_attached_to(&self, document: &Document) -> bool {
        std::ptr::eq(self.document.as_ptr(), Arc::as_ptr(&document.inner))
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.document.upgrade() {
            if inner.remove(self.id) {
                log::debug!("Document: released listener {:?}", self.id);
            }
        }
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}
