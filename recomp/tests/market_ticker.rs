use std::sync::{Arc, Mutex};

use recomp::prelude::*;
use recomp::widgets::market_ticker::{format_price, truncate_name};
use recomp_dom::find_element;

fn tickers() -> Vec<TickerItem> {
    vec![
        TickerItem::new("KSE100", TickerDirection::Up, 78452.123),
        TickerItem::new("OGDCLPETROLEUM", TickerDirection::Down, -132.5),
        TickerItem::new("HBL", TickerDirection::Neutral, 101.0),
    ]
}

fn texts(item: &Element) -> Vec<&str> {
    item.children_slice().iter().filter_map(Element::text).collect()
}

#[test]
fn test_price_and_name_formatting() {
    assert_eq!(format_price(-132.5), "132.50");
    assert_eq!(format_price(78452.123), "78452.12");
    assert_eq!(format_price(0.0), "0.00");
    assert_eq!(truncate_name("OGDCLPETROLEUM"), "OGDCLPET...");
    assert_eq!(truncate_name("KSE100"), "KSE100");
}

#[test]
fn test_items_render_in_order() {
    let ticker = MarketTicker::new(tickers()).id("psx");
    let mut page = Page::new();
    let root = page.render(|page| ticker.build(page)).clone();

    assert_eq!(root.children_slice().len(), 3);
    let second = find_element(&root, "psx-item-1").unwrap();
    assert_eq!(texts(second), vec!["OGDCLPET...", "132.50"]);
    assert_eq!(second.get_attr("data-direction"), Some("down"));
    assert_eq!(second.style.get("width"), Some("129px"));
    assert_eq!(second.style.get("height"), Some("25px"));
    assert_eq!(second.style.get("cursor"), Some("default"));
}

#[test]
fn test_direction_colours() {
    let ticker = MarketTicker::new(tickers()).id("psx");
    let mut page = Page::new();
    let root = page.render(|page| ticker.build(page)).clone();

    let price_colour = |index: usize| {
        let item = find_element(&root, &format!("psx-item-{index}")).unwrap();
        item.children_slice()
            .last()
            .and_then(|price| price.style.get("color"))
            .map(str::to_string)
    };
    assert_eq!(price_colour(0).as_deref(), Some("#0c8544"));
    assert_eq!(price_colour(1).as_deref(), Some("#ed0a4f"));
    assert_eq!(price_colour(2).as_deref(), Some("#6b7280"));
}

#[test]
fn test_colour_overrides() {
    let page = Page::new();
    let ticker = MarketTicker::new(tickers()).up_color("blue");
    assert_eq!(ticker.price_color_for(&page, TickerDirection::Up), Color::named("blue"));
    assert_eq!(
        ticker.price_color_for(&page, TickerDirection::Down),
        Color::rgb(0xed, 0x0a, 0x4f)
    );

    let single = ticker.price_color("#111111");
    assert_eq!(
        single.price_color_for(&page, TickerDirection::Down),
        Color::rgb(0x11, 0x11, 0x11)
    );
}

#[test]
fn test_icons() {
    let ticker = MarketTicker::new(tickers()).id("psx");
    let mut page = Page::new();
    let root = page.render(|page| ticker.build(page)).clone();
    let first = find_element(&root, "psx-item-0").unwrap();
    let icon = &first.children_slice()[1];
    assert_eq!(icon.get_attr("src"), Some("icons/arrow_up.svg"));

    let plain = MarketTicker::new(tickers()).id("psx").show_icons(false);
    let root = page.render(|page| plain.build(page)).clone();
    let first = find_element(&root, "psx-item-0").unwrap();
    assert_eq!(first.children_slice().len(), 2);
}

#[test]
fn test_click_reports_item() {
    let clicked = Arc::new(Mutex::new(Vec::new()));
    let store = Arc::clone(&clicked);
    let ticker = MarketTicker::new(tickers())
        .id("psx")
        .on_click(move |item| store.lock().unwrap().push(item.name.clone()));
    let mut page = Page::new();
    let root = page.render(|page| ticker.build(page)).clone();

    let first = find_element(&root, "psx-item-0").unwrap();
    assert!(first.clickable);
    assert_eq!(first.style.get("cursor"), Some("pointer"));

    page.dispatch(&Event::click("psx-item-2"));
    assert_eq!(*clicked.lock().unwrap(), vec!["HBL".to_string()]);
}

#[test]
fn test_from_json() {
    let ticker = MarketTicker::from_json(
        r#"[{ "name": "LUCK", "direction": "up", "price": 710.25 }]"#,
    )
    .unwrap();
    assert_eq!(
        ticker.tickers(),
        &[TickerItem::new("LUCK", TickerDirection::Up, 710.25)]
    );

    assert!(MarketTicker::from_json(r#"[{ "name": "X", "direction": "sideways", "price": 1 }]"#).is_err());
}
