mod content;
mod node;

use std::collections::HashSet;

pub use content::Content;
pub use node::{generate_id, Element, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Check whether `id` is `root` itself or one of its descendants.
pub fn contains(root: &Element, id: &str) -> bool {
    find_element(root, id).is_some()
}

/// Path from `root` down to the element with `id`, both ends included.
/// Returns None if the element is not in the tree.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id == id {
        return Some(vec![root]);
    }

    for child in root.content.children() {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root);
            return Some(path);
        }
    }

    None
}

/// Collect the IDs of `root` and every descendant.
pub fn collect_ids(root: &Element) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_ids_into(root, &mut ids);
    ids
}

fn collect_ids_into(element: &Element, ids: &mut HashSet<String>) {
    ids.insert(element.id.clone());
    for child in element.content.children() {
        collect_ids_into(child, ids);
    }
}
