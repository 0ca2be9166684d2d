use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Shared render state with interior mutability.
///
/// Widgets keep values that outlive a single render (hover flags, the
/// uncontrolled open flag) in a `State<T>`. Cloning shares the value, so a
/// clone captured by an event handler writes to the same slot the widget
/// reads on its next render. Every write marks the state dirty so the host
/// knows a re-render is due.
///
/// # Example
///
/// ```ignore
/// let hovered = State::new(false);
/// let handle = hovered.clone();
/// registry.register(&id, EventKind::PointerEnter, Arc::new(move |_| handle.set(true)));
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
}

impl<T> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Read the value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    pub fn set(&self, value: T) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = value;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the value only if it differs. Returns true if it changed.
    pub fn replace_if_changed(&self, value: T) -> bool
    where
        T: PartialEq,
    {
        match self.inner.write() {
            Ok(mut guard) if *guard != value => {
                *guard = value;
                self.dirty.store(true, Ordering::SeqCst);
                true
            }
            _ => false,
        }
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if the state has been written since the last `clear_dirty`
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
