use crate::element::Element;

/// Tracks which element is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation), wrapping around.
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        self.step(root, 1)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        self.step(root, -1)
    }

    fn step(&mut self, root: &Element, delta: isize) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let len = focusable.len() as isize;
        let current = self
            .focused
            .as_ref()
            .and_then(|f| focusable.iter().position(|id| id == f));
        let next = match current {
            Some(i) => (i as isize + delta).rem_euclid(len) as usize,
            None if delta < 0 => focusable.len() - 1,
            None => 0,
        };

        let new_focus = focusable[next].clone();
        if self.focus(&new_focus) {
            Some(new_focus)
        } else {
            None
        }
    }
}

/// Collect IDs of all focusable, enabled, visible elements in document order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(root, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.hidden {
        return;
    }
    if element.focusable && !element.disabled {
        result.push(element.id.clone());
    }
    for child in element.children_slice() {
        collect_focusable_recursive(child, result);
    }
}
