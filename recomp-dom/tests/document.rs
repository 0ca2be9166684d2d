use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use recomp_dom::{Document, Element, Event, EventKind, KeyEvent, Rect};

fn counter() -> (Arc<AtomicUsize>, impl Fn(&Event) + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    (count, move |_: &Event| {
        c.fetch_add(1, Ordering::SeqCst);
    })
}

// ============================================================================
// Listeners
// ============================================================================

#[test]
fn test_listener_receives_its_stream_only() {
    let document = Document::new();
    let (count, listener) = counter();
    let _guard = document.add_listener(EventKind::KeyDown, listener);

    assert_eq!(document.dispatch(&Event::Key(KeyEvent::char('a'))), 1);
    assert_eq!(document.dispatch(&Event::pointer_down("x")), 0);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_dropping_guard_removes_listener() {
    let document = Document::new();
    let (count, listener) = counter();
    let guard = document.add_listener(EventKind::KeyDown, listener);
    assert_eq!(document.listener_count(EventKind::KeyDown), 1);

    drop(guard);
    assert_eq!(document.listener_count(EventKind::KeyDown), 0);
    document.dispatch(&Event::Key(KeyEvent::char('a')));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_remove_listener_by_id() {
    let document = Document::new();
    let guard = document.add_listener(EventKind::Resize, |_| {});

    assert!(document.remove_listener(guard.id()));
    assert!(!document.remove_listener(guard.id()));
    // Guard drop after manual removal is a no-op
    drop(guard);
    assert_eq!(document.listener_count(EventKind::Resize), 0);
}

#[test]
fn test_guard_outliving_document() {
    let document = Document::new();
    let guard = document.add_listener(EventKind::KeyDown, |_| {});
    drop(document);
    drop(guard);
}

#[test]
fn test_listener_added_during_dispatch_waits_for_next_event() {
    let document = Document::new();
    let added = Arc::new(Mutex::new(Vec::new()));
    let (count, late) = counter();
    let late = Arc::new(late);

    let weak = document.downgrade();
    let store = Arc::clone(&added);
    let _guard = document.add_listener(EventKind::KeyDown, move |_| {
        if let (Some(doc), Ok(mut guards)) = (weak.upgrade(), store.lock()) {
            if guards.is_empty() {
                let late = Arc::clone(&late);
                guards.push(doc.add_listener(EventKind::KeyDown, move |e| late(e)));
            }
        }
    });

    assert_eq!(document.dispatch(&Event::Key(KeyEvent::char('a'))), 1);
    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert_eq!(document.dispatch(&Event::Key(KeyEvent::char('a'))), 2);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_guard_attachment() {
    let first = Document::new();
    let second = Document::new();
    let guard = first.add_listener(EventKind::Click, |_| {});

    assert!(guard.is_attached_to(&first));
    assert!(guard.is_attached_to(&first.clone()));
    assert!(!guard.is_attached_to(&second));
    assert!(first.ptr_eq(&first.clone()));
    assert!(!first.ptr_eq(&second));
}

#[test]
fn test_weak_document_does_not_keep_alive() {
    let document = Document::new();
    let weak = document.downgrade();
    assert!(weak.upgrade().is_some());
    drop(document);
    assert!(weak.upgrade().is_none());
}

#[test]
fn test_prevent_default_visible_to_dispatcher() {
    let document = Document::new();
    let _guard = document.add_listener(EventKind::KeyDown, |event| {
        if let Some(key) = event.as_key() {
            key.prevent_default();
        }
    });

    let event = Event::Key(KeyEvent::function(2));
    document.dispatch(&event);
    assert!(event.as_key().is_some_and(KeyEvent::default_prevented));
}

// ============================================================================
// Deferred tasks
// ============================================================================

#[test]
fn test_tick_runs_deferred_tasks() {
    let document = Document::new();
    document.defer(|doc| {
        doc.focus("a");
    });
    assert_eq!(document.pending_tasks(), 1);
    assert_eq!(document.focused(), None);

    assert_eq!(document.tick(), 1);
    assert_eq!(document.focused().as_deref(), Some("a"));
    assert_eq!(document.tick(), 0);
}

#[test]
fn test_task_deferred_during_tick_waits() {
    let document = Document::new();
    document.defer(|doc| {
        doc.defer(|doc| {
            doc.focus("later");
        });
    });

    assert_eq!(document.tick(), 1);
    assert_eq!(document.focused(), None);
    assert_eq!(document.tick(), 1);
    assert_eq!(document.focused().as_deref(), Some("later"));
}

// ============================================================================
// Focus and layout
// ============================================================================

#[test]
fn test_focus_next_skips_disabled_and_hidden() {
    let root = Element::div()
        .id("root")
        .child(Element::button().id("a"))
        .child(Element::button().id("b").disabled(true))
        .child(Element::div().hidden(true).child(Element::button().id("c")))
        .child(Element::button().id("d"));
    let document = Document::new();

    assert_eq!(document.focus_next(&root, false).as_deref(), Some("a"));
    assert_eq!(document.focus_next(&root, false).as_deref(), Some("d"));
    assert_eq!(document.focus_next(&root, false).as_deref(), Some("a"));
    assert_eq!(document.focus_next(&root, true).as_deref(), Some("d"));
}

#[test]
fn test_blur() {
    let document = Document::new();
    assert!(document.focus("a"));
    assert!(!document.focus("a"));
    assert!(document.blur());
    assert!(!document.blur());
}

#[test]
fn test_resize_updates_viewport() {
    let document = Document::new();
    document.dispatch(&Event::Resize {
        width: 80,
        height: 24,
    });
    assert_eq!(document.viewport(), Rect::from_size(80, 24));
}

#[test]
fn test_layout_rects() {
    let document = Document::new();
    assert_eq!(document.rect("a"), None);

    document.set_rect("a", Rect::new(1, 2, 3, 4));
    assert_eq!(document.rect("a"), Some(Rect::new(1, 2, 3, 4)));

    document.set_layout(Default::default());
    assert!(document.layout().is_empty());
}
