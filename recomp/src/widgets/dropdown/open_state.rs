use crate::state::State;

/// Who owns a dropdown's open flag. Fixed when the dropdown is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// The caller owns the flag and feeds it back with `sync_open`. The
    /// value is the initial flag.
    Controlled(bool),
    /// The dropdown owns the flag. The value is the initial flag.
    Uncontrolled(bool),
}

impl Default for OpenMode {
    fn default() -> Self {
        Self::Uncontrolled(false)
    }
}

/// The open flag plus who may write it.
#[derive(Debug, Clone)]
pub struct OpenState {
    controlled: bool,
    open: State<bool>,
}

impl OpenState {
    pub fn new(mode: OpenMode) -> Self {
        let (controlled, open) = match mode {
            OpenMode::Controlled(open) => (true, open),
            OpenMode::Uncontrolled(open) => (false, open),
        };
        Self {
            controlled,
            open: State::new(open),
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Apply a transition the dropdown itself asked for. Controlled state is
    /// left alone. Returns true if the flag changed.
    pub fn request(&self, open: bool) -> bool {
        if self.controlled {
            return false;
        }
        self.open.replace_if_changed(open)
    }

    /// Apply the caller's authoritative value. Only valid when controlled;
    /// returns None otherwise, else whether the flag changed.
    pub fn sync(&self, open: bool) -> Option<bool> {
        if !self.controlled {
            return None;
        }
        Some(self.open.replace_if_changed(open))
    }

    pub fn is_dirty(&self) -> bool {
        self.open.is_dirty()
    }

    pub fn clear_dirty(&self) {
        self.open.clear_dirty();
    }
}
