use std::sync::{Arc, Mutex};

use recomp::prelude::*;
use recomp_dom::find_element;
use serde_json::{json, Value};

fn windows() -> Value {
    json!([
        { "asif": "1", "zaman": "Time & Sales" },
        { "asif": "2", "zaman": "Order book", "disabled": true },
        { "asif": "3", "zaman": "News" },
    ])
}

fn fields() -> ItemFields {
    ItemFields::default().key("asif").label("zaman")
}

/// Records every value a callback receives.
fn recorder<T: Clone + Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(&T) + Send + Sync + 'static)
where
    T: Sync,
{
    let seen = Arc::new(Mutex::new(Vec::new()));
    let store = Arc::clone(&seen);
    (seen, move |value: &T| {
        store.lock().unwrap().push(value.clone());
    })
}

fn render(page: &mut Page, dropdown: &Dropdown) -> Element {
    page.render(|page| dropdown.build(page)).clone()
}

fn menu_style<'a>(root: &'a Element, dropdown: &Dropdown, property: &str) -> Option<&'a str> {
    find_element(root, &dropdown.menu_id()).and_then(|menu| menu.style.get(property))
}

// ============================================================================
// Open state
// ============================================================================

#[test]
fn test_uncontrolled_toggle_twice_closes() {
    let (changes, on_change) = recorder::<bool>();
    let dropdown = Dropdown::new(windows())
        .fields(fields())
        .on_open_change(move |open| on_change(&open));

    dropdown.toggle();
    assert!(dropdown.is_open());
    dropdown.toggle();
    assert!(!dropdown.is_open());
    assert_eq!(*changes.lock().unwrap(), vec![true, false]);
}

#[test]
fn test_trigger_click_toggles() {
    let dropdown = Dropdown::new(windows()).id("win").fields(fields());
    let mut page = Page::new();
    let root = render(&mut page, &dropdown);
    assert_eq!(menu_style(&root, &dropdown, "display"), Some("none"));

    assert!(page.dispatch(&Event::click(dropdown.button_id())).is_handled());
    assert!(dropdown.is_open());

    let root = render(&mut page, &dropdown);
    let menu = find_element(&root, &dropdown.menu_id()).unwrap();
    assert!(!menu.hidden);
    assert_eq!(menu.get_attr("aria-hidden"), Some("false"));
    assert_eq!(menu.style.get("display"), Some("block"));
}

#[test]
fn test_controlled_waits_for_caller() {
    let (changes, on_change) = recorder::<bool>();
    let dropdown = Dropdown::controlled(windows(), false)
        .fields(fields())
        .on_open_change(move |open| on_change(&open));
    assert!(dropdown.is_controlled());

    dropdown.toggle();
    dropdown.toggle();
    assert!(!dropdown.is_open());
    // Both requests ask to open, since the shown state never changed
    assert_eq!(*changes.lock().unwrap(), vec![true, true]);

    dropdown.sync_open(true).unwrap();
    assert!(dropdown.is_open());
    dropdown.toggle();
    assert!(dropdown.is_open());
    assert_eq!(changes.lock().unwrap().last(), Some(&false));
}

#[test]
fn test_sync_open_on_uncontrolled_is_an_error() {
    let dropdown = Dropdown::new(windows()).id("win");
    assert!(matches!(
        dropdown.sync_open(true),
        Err(Error::NotControlled { id }) if id == "win"
    ));
    assert!(!dropdown.is_open());
}

#[test]
fn test_default_open_and_mode() {
    let open = Dropdown::new(windows()).default_open(true);
    assert!(open.is_open());
    assert!(!open.is_controlled());

    let controlled = Dropdown::new(windows()).mode(OpenMode::Controlled(true));
    assert!(controlled.is_open());
    assert!(controlled.is_controlled());
}

#[test]
fn test_default_open_ignored_when_controlled() {
    let dropdown = Dropdown::controlled(windows(), false).default_open(true);
    assert!(dropdown.is_controlled());
    assert!(!dropdown.is_open());
}

#[test]
fn test_keyboard_on_menu() {
    let dropdown = Dropdown::new(windows()).fields(fields());
    let mut page = Page::new();
    render(&mut page, &dropdown);

    page.dispatch(&Event::Key(KeyEvent::named("ArrowDown").target(dropdown.menu_id())));
    assert!(dropdown.is_open());

    render(&mut page, &dropdown);
    // Escape on a focused item bubbles up to the menu
    page.dispatch(&Event::Key(KeyEvent::named("Escape").target(dropdown.item_id(0))));
    assert!(!dropdown.is_open());
}

// ============================================================================
// Items and selection
// ============================================================================

#[test]
fn test_field_mapping() {
    let dropdown = Dropdown::new(windows()).fields(fields());
    let items = dropdown.normalized_items();

    assert_eq!(items[0].key, json!("1"));
    assert_eq!(items[0].label, "Time & Sales");
    assert!(!items[0].disabled);
    assert!(items[1].disabled);
}

#[test]
fn test_select_passes_raw_item_and_closes() {
    let (selected, on_select) = recorder::<Value>();
    let dropdown = Dropdown::new(windows())
        .fields(fields())
        .default_open(true)
        .on_select(on_select);
    let mut page = Page::new();
    let root = render(&mut page, &dropdown);

    let item = find_element(&root, &dropdown.item_id(0)).unwrap();
    assert_eq!(item.role.as_deref(), Some("menuitem"));
    assert_eq!(item.get_attr("data-key"), Some("1"));

    page.dispatch(&Event::click(dropdown.item_id(0)));
    assert_eq!(
        *selected.lock().unwrap(),
        vec![json!({ "asif": "1", "zaman": "Time & Sales" })]
    );
    assert!(!dropdown.is_open());
}

#[test]
fn test_disabled_item_is_inert() {
    let (selected, on_select) = recorder::<Value>();
    let dropdown = Dropdown::new(windows())
        .fields(fields())
        .default_open(true)
        .on_select(on_select);
    let mut page = Page::new();
    let root = render(&mut page, &dropdown);

    let item = find_element(&root, &dropdown.item_id(1)).unwrap();
    assert!(item.disabled);
    assert!(!item.clickable);
    assert_eq!(item.style.get("color"), Some("#9ca3af"));
    assert_eq!(item.style.get("cursor"), Some("not-allowed"));

    page.dispatch(&Event::click(dropdown.item_id(1)));
    dropdown.select(&dropdown.normalized_items()[1]);
    assert!(selected.lock().unwrap().is_empty());
    assert!(dropdown.is_open());
}

#[test]
fn test_item_hover_background() {
    let dropdown = Dropdown::new(windows()).fields(fields()).default_open(true);
    let mut page = Page::new();
    render(&mut page, &dropdown);

    page.dispatch(&Event::PointerEnter {
        target: dropdown.item_id(0),
    });
    let root = render(&mut page, &dropdown);
    let item = find_element(&root, &dropdown.item_id(0)).unwrap();
    assert_eq!(item.style.get("background"), Some("#f3f4f6"));

    page.dispatch(&Event::PointerLeave {
        target: dropdown.item_id(0),
    });
    let root = render(&mut page, &dropdown);
    let item = find_element(&root, &dropdown.item_id(0)).unwrap();
    assert_eq!(item.style.get("background"), Some("transparent"));
}

#[test]
fn test_body_precedence() {
    let base = || Dropdown::new(windows()).fields(fields());

    assert_eq!(base().loading(true).error(true).body(), MenuBody::Loading);
    assert_eq!(base().error(true).body(), MenuBody::Error("Error".into()));
    assert_eq!(
        base().error_message("Feed down").body(),
        MenuBody::Error("Feed down".into())
    );
    assert_eq!(Dropdown::new(json!([])).body(), MenuBody::Empty);
    assert_eq!(Dropdown::new(Value::Null).body(), MenuBody::Empty);
    assert!(matches!(base().body(), MenuBody::Items(items) if items.len() == 3));

    assert_eq!(MenuBody::Loading.status_text(), Some("Loading..."));
    assert_eq!(MenuBody::Empty.status_text(), Some("No items"));
}

// ============================================================================
// Document listeners
// ============================================================================

#[test]
fn test_outside_pointer_down_closes() {
    let dropdown = Dropdown::new(windows()).fields(fields());
    let mut page = Page::new();
    render(&mut page, &dropdown);
    assert_eq!(page.document().listener_count(EventKind::PointerDown), 0);

    dropdown.toggle();
    render(&mut page, &dropdown);
    assert_eq!(page.document().listener_count(EventKind::PointerDown), 1);

    page.dispatch(&Event::pointer_down(dropdown.item_id(1)));
    page.dispatch(&Event::pointer_down(dropdown.button_id()));
    assert!(dropdown.is_open());

    page.dispatch(&Event::pointer_down("somewhere-else"));
    assert!(!dropdown.is_open());

    render(&mut page, &dropdown);
    assert_eq!(page.document().listener_count(EventKind::PointerDown), 0);
}

#[test]
fn test_unmount_removes_listeners() {
    let dropdown = Dropdown::new(windows()).auto_width().default_open(true);
    let mut page = Page::new();
    render(&mut page, &dropdown);
    assert_eq!(page.document().listener_count(EventKind::PointerDown), 1);
    assert_eq!(page.document().listener_count(EventKind::Resize), 1);

    dropdown.unmount();
    assert_eq!(page.document().listener_count(EventKind::PointerDown), 0);
    assert_eq!(page.document().listener_count(EventKind::Resize), 0);
}

#[test]
fn test_drop_removes_listeners() {
    let mut page = Page::new();
    {
        let dropdown = Dropdown::new(windows()).default_open(true);
        render(&mut page, &dropdown);
    }
    assert_eq!(page.document().listener_count(EventKind::PointerDown), 0);
}

#[test]
fn test_opening_focuses_first_item() {
    let dropdown = Dropdown::new(windows()).fields(fields());
    let mut page = Page::new();
    render(&mut page, &dropdown);

    dropdown.toggle();
    render(&mut page, &dropdown);
    assert_eq!(page.document().focused(), None);

    page.tick();
    assert_eq!(page.document().focused(), Some(dropdown.item_id(0)));

    // Staying open does not steal focus again
    page.document().focus("elsewhere");
    render(&mut page, &dropdown);
    page.tick();
    assert_eq!(page.document().focused().as_deref(), Some("elsewhere"));
}

#[test]
fn test_disabled_first_item_leaves_focus_alone() {
    let items = json!([
        { "asif": "0", "zaman": "Closed", "disabled": true },
        { "asif": "1", "zaman": "Time & Sales" },
    ]);
    let dropdown = Dropdown::new(items).fields(fields());
    let mut page = Page::new();
    render(&mut page, &dropdown);
    page.document().focus(&dropdown.button_id());

    dropdown.toggle();
    render(&mut page, &dropdown);
    page.tick();
    assert_eq!(page.document().focused(), Some(dropdown.button_id()));
}

#[test]
fn test_press_inside_open_menu_keeps_it_open() {
    let (selected, on_select) = recorder::<Value>();
    let dropdown = Dropdown::new(windows())
        .id("win")
        .fields(fields())
        .default_open(true)
        .on_select(on_select);
    let mut page = Page::new();
    let document = page.document();
    document.set_rect("win", Rect::new(0, 0, 40, 12));
    document.set_rect(dropdown.trigger_id(), Rect::new(0, 0, 20, 1));
    document.set_rect(dropdown.button_id(), Rect::new(0, 0, 20, 1));
    document.set_rect(dropdown.menu_id(), Rect::new(0, 2, 30, 9));
    document.set_rect(dropdown.item_id(0), Rect::new(0, 3, 30, 1));
    document.set_rect(dropdown.item_id(1), Rect::new(0, 4, 30, 1));
    document.set_rect(dropdown.item_id(2), Rect::new(0, 5, 30, 1));
    render(&mut page, &dropdown);

    // Disabled item
    page.click_at(2, 4);
    assert!(dropdown.is_open());

    // Menu padding below the last item
    page.click_at(2, 10);
    assert!(dropdown.is_open());
    assert!(selected.lock().unwrap().is_empty());

    page.click_at(100, 100);
    assert!(!dropdown.is_open());
}

// ============================================================================
// Width
// ============================================================================

#[test]
fn test_explicit_width() {
    let dropdown = Dropdown::new(windows()).width("200px");
    let mut page = Page::new();
    let root = render(&mut page, &dropdown);

    assert_eq!(menu_style(&root, &dropdown, "width"), Some("200px"));
    assert_eq!(page.document().listener_count(EventKind::Resize), 0);
}

#[test]
fn test_auto_width_follows_trigger() {
    let dropdown = Dropdown::new(windows()).auto_width();
    let mut page = Page::new();
    let root = render(&mut page, &dropdown);
    assert_eq!(menu_style(&root, &dropdown, "width"), Some("auto"));

    page.document().set_rect(dropdown.trigger_id(), Rect::new(0, 0, 150, 1));
    let root = render(&mut page, &dropdown);
    assert_eq!(menu_style(&root, &dropdown, "width"), Some("150px"));

    page.document().set_rect(dropdown.trigger_id(), Rect::new(0, 0, 180, 1));
    page.dispatch(&Event::Resize {
        width: 100,
        height: 40,
    });
    assert_eq!(dropdown.measured_width().as_deref(), Some("180px"));
    let root = render(&mut page, &dropdown);
    assert_eq!(menu_style(&root, &dropdown, "width"), Some("180px"));
}

#[test]
fn test_menu_alignment() {
    let dropdown = Dropdown::new(windows());
    let mut page = Page::new();
    let root = render(&mut page, &dropdown);
    assert_eq!(menu_style(&root, &dropdown, "right"), Some("0"));

    let dropdown = Dropdown::new(windows()).menu_align(Side::Left);
    let root = render(&mut page, &dropdown);
    assert_eq!(menu_style(&root, &dropdown, "left"), Some("0"));
    assert_eq!(menu_style(&root, &dropdown, "right"), None);
}

#[test]
fn test_toggle_rotates_when_open() {
    let dropdown = Dropdown::new(windows()).id("win");
    let mut page = Page::new();
    let root = render(&mut page, &dropdown);
    let toggle = find_element(&root, "win-toggle").unwrap();
    assert_eq!(toggle.style.get("transform"), Some("rotate(0deg)"));

    dropdown.toggle();
    let root = render(&mut page, &dropdown);
    let toggle = find_element(&root, "win-toggle").unwrap();
    assert_eq!(toggle.style.get("transform"), Some("rotate(90deg)"));
}
