use recomp_dom::text::{display_width, truncate_chars, truncate_to_width};
use recomp_dom::{
    collect_ids, contains, find_element, hit_test, hit_test_any, outline, path_to, Element,
    LayoutResult, Rect, Style,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

fn tree() -> Element {
    Element::div()
        .id("root")
        .child(
            Element::div()
                .id("row")
                .child(Element::button().id("ok").child(Element::span("OK").id("ok-label")))
                .child(Element::button().id("off").disabled(true)),
        )
        .child(Element::span("footer").id("footer"))
}

// ============================================================================
// Tree queries
// ============================================================================

#[test]
fn test_find_and_contains() {
    let root = tree();
    assert_eq!(find_element(&root, "ok-label").and_then(Element::text), Some("OK"));
    assert!(contains(&root, "footer"));
    assert!(!contains(&root, "missing"));
}

#[test]
fn test_path_to_runs_root_to_target() {
    let root = tree();
    let path: Vec<&str> = path_to(&root, "ok-label")
        .unwrap_or_default()
        .into_iter()
        .map(|el| el.id.as_str())
        .collect();
    assert_eq!(path, vec!["root", "row", "ok", "ok-label"]);
    assert!(path_to(&root, "missing").is_none());
}

#[test]
fn test_collect_ids() {
    let ids = collect_ids(&tree());
    assert_eq!(ids.len(), 6);
    assert!(ids.contains("off"));
}

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::div();
    let b = Element::div();
    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("div-"));
}

#[test]
fn test_button_defaults() {
    let button = Element::button();
    assert!(button.focusable);
    assert!(button.clickable);
    assert_eq!(button.get_attr("type"), Some("button"));
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_hit_test_deepest_clickable() {
    let root = tree();
    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 10)),
        ("row", Rect::new(0, 0, 100, 2)),
        ("ok", Rect::new(0, 0, 10, 1)),
        ("ok-label", Rect::new(2, 0, 2, 1)),
        ("off", Rect::new(20, 0, 10, 1)),
    ]);

    // The label itself is not clickable, its button is
    assert_eq!(hit_test(&layout, &root, 3, 0), Some("ok".to_string()));
    // Disabled buttons are not hit
    assert_eq!(hit_test(&layout, &root, 22, 0), None);
    assert_eq!(hit_test_any(&layout, &root, 22, 0), Some("off".to_string()));
    assert_eq!(hit_test(&layout, &root, 500, 500), None);
}

#[test]
fn test_hit_test_skips_hidden() {
    let root = Element::div()
        .id("root")
        .child(Element::button().id("menu-item"))
        .hidden(true);
    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 10, 10)),
        ("menu-item", Rect::new(0, 0, 10, 1)),
    ]);
    assert_eq!(hit_test_any(&layout, &root, 1, 0), None);
}

// ============================================================================
// Style
// ============================================================================

#[test]
fn test_style_merge_last_wins() {
    let base = Style::new().set("color", "red").set("width", "10px");
    let merged = base.merge(&Style::new().set("color", "blue"));
    assert_eq!(merged.get("color"), Some("blue"));
    assert_eq!(merged.get("width"), Some("10px"));
    assert_eq!(merged.len(), 2);
}

#[test]
fn test_style_to_css_keeps_order() {
    let style = Style::new()
        .set("width", "88px")
        .set("height", "24px")
        .set_opt("border", None::<String>);
    assert_eq!(style.to_css(), "width: 88px; height: 24px");
}

// ============================================================================
// Text and outline
// ============================================================================

#[test]
fn test_truncate_chars() {
    assert_eq!(truncate_chars("OGDCLPETROLEUM", 8, "..."), "OGDCLPET...");
    assert_eq!(truncate_chars("HBL", 8, "..."), "HBL");
    assert_eq!(truncate_chars("EXACTLY8", 8, "..."), "EXACTLY8");
}

#[test]
fn test_truncate_to_width() {
    assert_eq!(truncate_to_width("hello world", 6), "hello…");
    assert_eq!(truncate_to_width("hi", 6), "hi");
    assert_eq!(display_width("日本"), 4);
}

#[test]
fn test_outline_collapses_hidden() {
    let root = Element::div()
        .id("root")
        .child(Element::span("Buy").id("label"))
        .child(
            Element::div()
                .id("menu")
                .role("menu")
                .hidden(true)
                .child(Element::span("secret").id("item")),
        );
    let text = outline(&root, 80);

    assert!(text.contains("<div#root>"));
    assert!(text.contains("  <span#label> \"Buy\""));
    assert!(text.contains("<div#menu role=menu hidden>"));
    assert!(!text.contains("secret"));
}
