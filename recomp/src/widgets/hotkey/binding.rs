use std::sync::Arc;

use recomp_dom::{Document, EventKind, ListenerGuard};

use super::KeyCombo;
use crate::error::Result;
use crate::handlers::Callback;

struct Installed {
    combo: KeyCombo,
    callback: Callback,
    guard: ListenerGuard,
}

/// Owns the document keyboard listener for one shortcut.
///
/// [`ShortcutBinding::sync`] is called with the current inputs on every
/// render. The listener is kept while the inputs stay the same, replaced when
/// the combo, callback or document changes, and removed when the binding is
/// disabled, cleared or dropped.
#[derive(Default)]
pub struct ShortcutBinding {
    installed: Option<Installed>,
}

impl ShortcutBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the listener in line with the inputs.
    ///
    /// Nothing is installed when `keys` is empty, `callback` is missing or
    /// `enabled` is false. Keys that name more than one main key are
    /// rejected with an error and leave no listener behind.
    pub fn sync(
        &mut self,
        document: &Document,
        keys: &[String],
        callback: Option<&Callback>,
        enabled: bool,
    ) -> Result<()> {
        let Some(callback) = callback.filter(|_| enabled && !keys.is_empty()) else {
            self.clear();
            return Ok(());
        };

        let combo = match KeyCombo::parse(keys) {
            Ok(combo) => combo,
            Err(err) => {
                log::warn!("HotKey: rejecting shortcut {keys:?}: {err}");
                self.clear();
                return Err(err);
            }
        };

        if let Some(installed) = &self.installed {
            if installed.combo == combo
                && Arc::ptr_eq(&installed.callback, callback)
                && installed.guard.is_attached_to(document)
            {
                return Ok(());
            }
        }

        let on_match = Arc::clone(callback);
        let matcher = combo.clone();
        let guard = document.add_listener(EventKind::KeyDown, move |event| {
            let Some(key) = event.as_key() else {
                return;
            };
            log::trace!("HotKey: {matcher} against key={:?} code={:?}", key.key, key.code);
            if matcher.matches(key) {
                key.prevent_default();
                on_match();
            }
        });
        log::debug!("HotKey: bound {combo}");

        self.installed = Some(Installed {
            combo,
            callback: Arc::clone(callback),
            guard,
        });
        Ok(())
    }

    /// Remove the listener, if any.
    pub fn clear(&mut self) {
        if let Some(installed) = self.installed.take() {
            log::debug!("HotKey: unbound {}", installed.combo);
        }
    }

    pub fn is_active(&self) -> bool {
        self.installed.is_some()
    }

    pub fn combo(&self) -> Option<&KeyCombo> {
        self.installed.as_ref().map(|i| &i.combo)
    }
}
