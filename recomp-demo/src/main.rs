use std::fs::File;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use recomp::prelude::*;
use recomp_dom::outline;
use serde_json::json;
use simplelog::{Config, LevelFilter, WriteLogger};

/// Lines shown under the widget outline, newest last.
const ACTIVITY_LINES: usize = 8;

#[derive(Clone, Default)]
struct Activity {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Activity {
    fn push(&self, line: impl Into<String>) {
        let line = line.into();
        log::info!("{line}");
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
            let excess = lines.len().saturating_sub(ACTIVITY_LINES);
            lines.drain(..excess);
        }
    }

    fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

struct Demo {
    buy: Button,
    sell: Button,
    reset: Button,
    time_and_sales: HotKey,
    blotter: HotKey,
    depth: HotKey,
    windows: Dropdown,
    ticker: MarketTicker,
}

impl Demo {
    fn new(activity: &Activity) -> Self {
        let log = |message: &'static str| {
            let activity = activity.clone();
            move || activity.push(message)
        };

        let buy = Button::new("Buy")
            .font_size("12px")
            .width("88px")
            .height("24px")
            .alignment(Alignment::Center)
            .border_radius("5px")
            .bg_color("#0C8544")
            .hover_bg_color("green")
            .on_click(log("Bought!"));
        let sell = Button::new("Sell")
            .font_size("12px")
            .width("88px")
            .height("24px")
            .alignment(Alignment::Center)
            .border_radius("5px")
            .bg_color("#ED0A4F")
            .hover_bg_color("red")
            .on_click(log("Sold!"));
        let reset = Button::new("Reset")
            .font_size("12px")
            .width("120px")
            .height("24px")
            .alignment(Alignment::Center)
            .border_radius("5px")
            .bg_color("#E4E4E4")
            .text_color("black")
            .on_click(log("Reset clicked!"));

        let time_and_sales = HotKey::new("Time and sales", "F2")
            .keys(["F2"])
            .on_activate(log("Time and sales opened"));
        let blotter = HotKey::new("Order blotter", "Alt+B")
            .keys(["Alt", "B"])
            .on_activate(log("Order blotter opened"));
        let depth = HotKey::new("Market depth", "Ctrl+Shift+D")
            .keys(["Ctrl", "Shift", "D"])
            .variant(Variant::Secondary)
            .on_activate(log("Market depth opened"));

        let selected = activity.clone();
        let opened = activity.clone();
        let windows = Dropdown::new(json!([
            { "asif": "1", "zaman": "Time & Sales" },
            { "asif": "2", "zaman": "Order book" },
            { "asif": "3", "zaman": "News", "disabled": true },
        ]))
        .id("windows")
        .label("Windows")
        .fields(ItemFields::default().key("asif").label("zaman"))
        .on_select(move |item| selected.push(format!("Selected {item}")))
        .on_open_change(move |open| opened.push(format!("Windows open={open}")));

        let clicked = activity.clone();
        let ticker = MarketTicker::new(vec![
            TickerItem::new("KSE100", TickerDirection::Up, 78_452.12),
            TickerItem::new("OGDCLPETROLEUM", TickerDirection::Down, -132.5),
            TickerItem::new("HBL", TickerDirection::Neutral, 101.0),
        ])
        .gap("8px")
        .on_click(move |item| clicked.push(format!("Ticker {}", item.name)));

        Self {
            buy,
            sell,
            reset,
            time_and_sales,
            blotter,
            depth,
            windows,
            ticker,
        }
    }

    fn build(&self, page: &Page) -> Element {
        Element::div()
            .id("home")
            .child(
                Element::div()
                    .id("buttons")
                    .child(self.buy.build(page))
                    .child(self.sell.build(page))
                    .child(self.reset.build(page)),
            )
            .child(
                Element::div()
                    .id("hotkeys")
                    .child(self.time_and_sales.build(page))
                    .child(self.blotter.build(page))
                    .child(self.depth.build(page)),
            )
            .child(self.windows.build(page))
            .child(self.ticker.build(page))
    }
}

fn draw(out: &mut impl Write, page: &Page, activity: &Activity, width: u16) -> io::Result<()> {
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let mut text = String::from("Tab: focus  Enter: activate  Ctrl+C: quit\r\n\r\n");
    if let Some(root) = page.root() {
        text.push_str(&outline(root, width as usize).replace('\n', "\r\n"));
    }
    if let Some(focused) = page.document().focused() {
        text.push_str(&format!("\r\nfocused: {focused}\r\n"));
    }
    text.push_str("\r\n-- activity --\r\n");
    for line in activity.lines() {
        text.push_str(&line);
        text.push_str("\r\n");
    }

    out.write_all(text.as_bytes())?;
    out.flush()
}

fn run(out: &mut impl Write) -> io::Result<()> {
    let activity = Activity::default();
    let demo = Demo::new(&activity);
    let mut page = Page::new();
    let (mut width, height) = terminal::size()?;
    page.dispatch(&Event::Resize {
        width: width as u32,
        height: height as u32,
    });

    loop {
        page.render(|page| demo.build(page));
        page.tick();
        draw(out, &page, &activity, width)?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    break;
                }
                match key.code {
                    KeyCode::Tab | KeyCode::BackTab => {
                        if let Some(root) = page.root() {
                            page.document()
                                .focus_next(root, key.code == KeyCode::BackTab);
                        }
                    }
                    KeyCode::Enter => {
                        page.activate_focused();
                    }
                    _ => {
                        let result = page.dispatch(&Event::Key(KeyEvent::from(key)));
                        log::debug!("key {:?} reached {result:?}", key.code);
                    }
                }
            }
            CrosstermEvent::Resize(w, h) => {
                width = w;
                page.dispatch(&Event::Resize {
                    width: w as u32,
                    height: h as u32,
                });
            }
            _ => {}
        }
    }

    Ok(())
}

fn main() -> io::Result<()> {
    let log_file = File::create("recomp-demo.log")?;
    if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
        eprintln!("Failed to initialize logger: {e}");
    }

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut stdout);

    let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    result
}
