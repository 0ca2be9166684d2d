//! Plain-text rendering of an element tree, one line per element.
//!
//! Used by terminal hosts and in tests to eyeball what a widget produced.

use std::fmt::Write;

use crate::element::Element;
use crate::text::truncate_to_width;

/// Render `root` as an indented outline, each line cut to `max_width`
/// columns. Hidden elements are listed with their subtree collapsed.
pub fn outline(root: &Element, max_width: usize) -> String {
    let mut out = String::new();
    write_element(root, 0, max_width, &mut out);
    out
}

fn write_element(element: &Element, depth: usize, max_width: usize, out: &mut String) {
    let mut line = format!("{}<{}#{}", "  ".repeat(depth), element.tag.as_str(), element.id);
    if let Some(role) = &element.role {
        let _ = write!(line, " role={role}");
    }
    if element.disabled {
        line.push_str(" disabled");
    }
    if element.hidden {
        line.push_str(" hidden");
    }
    line.push('>');
    if let Some(text) = element.text() {
        let _ = write!(line, " {text:?}");
    }
    if let Some(bg) = element.style.get("background-color") {
        let _ = write!(line, " [bg {bg}]");
    }

    out.push_str(&truncate_to_width(&line, max_width));
    out.push('\n');

    if element.hidden {
        return;
    }
    for child in element.children_slice() {
        write_element(child, depth + 1, max_width, out);
    }
}
