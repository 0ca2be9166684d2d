use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u32, y: u32) -> Option<String> {
    hit_test_element(layout, root, x, y, &|el| el.clickable && !el.disabled)
}

/// Find the deepest element (clickable or not) at the given coordinates.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u32, y: u32) -> Option<String> {
    hit_test_element(layout, root, x, y, &|_| true)
}

fn hit_test_element(
    layout: &LayoutResult,
    element: &Element,
    x: u32,
    y: u32,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    // Unmeasured or hidden elements are not hit, and neither are their children
    let rect = layout.get(&element.id)?;
    if element.hidden || !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    for child in element.children_slice().iter().rev() {
        if let Some(id) = hit_test_element(layout, child, x, y, accept) {
            return Some(id);
        }
    }

    if accept(element) {
        Some(element.id.clone())
    } else {
        None
    }
}
