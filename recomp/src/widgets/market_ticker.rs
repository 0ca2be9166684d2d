//! MarketTicker widget: a strip of instrument names with their last price.

use std::sync::Arc;

use recomp_dom::text::truncate_chars;
use recomp_dom::{generate_id, Element, EventKind, Style};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::handlers::{handler, ValueCallback};
use crate::page::Page;
use crate::style::{Color, FontWeight, Prop};
use crate::widgets::Icon;

/// Names longer than this many characters are cut and suffixed with `...`.
const NAME_LIMIT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickerDirection {
    Up,
    Down,
    Neutral,
}

impl TickerDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerItem {
    pub name: String,
    pub direction: TickerDirection,
    pub price: f64,
}

impl TickerItem {
    pub fn new(name: impl Into<String>, direction: TickerDirection, price: f64) -> Self {
        Self {
            name: name.into(),
            direction,
            price,
        }
    }
}

/// Absolute value, two decimals.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price.abs())
}

pub fn truncate_name(name: &str) -> String {
    truncate_chars(name, NAME_LIMIT, "...")
}

pub struct MarketTicker {
    id: String,
    tickers: Vec<TickerItem>,

    width: String,
    height: String,
    bg_color: Color,
    name_color: Color,
    price_color: Prop<Color>,
    font_size: String,
    name_weight: FontWeight,
    price_weight: FontWeight,

    border_radius: String,
    border: String,
    padding: String,
    margin: String,
    gap: String,

    up_color: Prop<Color>,
    down_color: Prop<Color>,
    neutral_color: Prop<Color>,

    up_icon: Option<Icon>,
    down_icon: Option<Icon>,
    neutral_icon: Option<Icon>,
    show_icons: bool,

    on_click: Option<ValueCallback<TickerItem>>,

    class: Option<String>,
    style: Style,
}

impl MarketTicker {
    pub fn new(tickers: Vec<TickerItem>) -> Self {
        Self {
            id: generate_id("ticker"),
            tickers,
            width: "129px".into(),
            height: "25px".into(),
            bg_color: Color::Transparent,
            name_color: Color::rgb(0, 0, 0),
            price_color: Prop::Unset,
            font_size: "12px".into(),
            name_weight: FontWeight::Medium,
            price_weight: FontWeight::Bold,
            border_radius: "0px".into(),
            border: "none".into(),
            padding: "0px".into(),
            margin: "0".into(),
            gap: "0px".into(),
            up_color: Prop::Unset,
            down_color: Prop::Unset,
            neutral_color: Prop::Unset,
            up_icon: None,
            down_icon: None,
            neutral_icon: None,
            show_icons: true,
            on_click: None,
            class: None,
            style: Style::new(),
        }
    }

    /// Tickers from a JSON array of `{ name, direction, price }`.
    pub fn from_json(json: &str) -> Result<Self> {
        let tickers: Vec<TickerItem> = serde_json::from_str(json)?;
        Ok(Self::new(tickers))
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }

    pub fn bg_color(mut self, color: impl Into<Color>) -> Self {
        self.bg_color = color.into();
        self
    }

    pub fn name_color(mut self, color: impl Into<Color>) -> Self {
        self.name_color = color.into();
        self
    }

    /// One price colour for every direction.
    pub fn price_color(mut self, color: impl Into<Color>) -> Self {
        self.price_color = Prop::Explicit(color.into());
        self
    }

    pub fn font_size(mut self, size: impl Into<String>) -> Self {
        self.font_size = size.into();
        self
    }

    pub fn name_weight(mut self, weight: FontWeight) -> Self {
        self.name_weight = weight;
        self
    }

    pub fn price_weight(mut self, weight: FontWeight) -> Self {
        self.price_weight = weight;
        self
    }

    pub fn border_radius(mut self, radius: impl Into<String>) -> Self {
        self.border_radius = radius.into();
        self
    }

    pub fn border(mut self, border: impl Into<String>) -> Self {
        self.border = border.into();
        self
    }

    pub fn padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn margin(mut self, margin: impl Into<String>) -> Self {
        self.margin = margin.into();
        self
    }

    pub fn gap(mut self, gap: impl Into<String>) -> Self {
        self.gap = gap.into();
        self
    }

    pub fn up_color(mut self, color: impl Into<Color>) -> Self {
        self.up_color = Prop::Explicit(color.into());
        self
    }

    pub fn down_color(mut self, color: impl Into<Color>) -> Self {
        self.down_color = Prop::Explicit(color.into());
        self
    }

    pub fn neutral_color(mut self, color: impl Into<Color>) -> Self {
        self.neutral_color = Prop::Explicit(color.into());
        self
    }

    pub fn up_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.up_icon = Some(icon.into());
        self
    }

    pub fn down_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.down_icon = Some(icon.into());
        self
    }

    pub fn neutral_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.neutral_icon = Some(icon.into());
        self
    }

    pub fn show_icons(mut self, show: bool) -> Self {
        self.show_icons = show;
        self
    }

    pub fn on_click(mut self, f: impl Fn(&TickerItem) + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(f));
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn set_tickers(&mut self, tickers: Vec<TickerItem>) {
        self.tickers = tickers;
    }

    pub fn tickers(&self) -> &[TickerItem] {
        &self.tickers
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn item_id(&self, index: usize) -> String {
        format!("{}-item-{index}", self.id)
    }

    /// The price colour for a direction: `price_color` if set, else the
    /// direction's colour.
    pub fn price_color_for(&self, page: &Page, direction: TickerDirection) -> Color {
        let colors = &page.theme().ticker;
        let by_direction = match direction {
            TickerDirection::Up => self.up_color.resolve(None, colors.up.clone()),
            TickerDirection::Down => self.down_color.resolve(None, colors.down.clone()),
            TickerDirection::Neutral => self.neutral_color.resolve(None, colors.neutral.clone()),
        };
        self.price_color.resolve(None, by_direction)
    }

    fn direction_icon(&self, direction: TickerDirection) -> Option<Element> {
        if !self.show_icons {
            return None;
        }
        let custom = match direction {
            TickerDirection::Up => &self.up_icon,
            TickerDirection::Down => &self.down_icon,
            TickerDirection::Neutral => &self.neutral_icon,
        };
        let icon = custom.clone().unwrap_or_else(|| match direction {
            TickerDirection::Up => Icon::named("arrow_up"),
            TickerDirection::Down => Icon::named("arrow_down"),
            TickerDirection::Neutral => Icon::named("neutral"),
        });
        Some(icon.build(12))
    }

    pub fn build(&self, page: &Page) -> Element {
        log::debug!(
            "MarketTicker::build id={} tickers={}",
            self.id,
            self.tickers.len()
        );

        let items = self
            .tickers
            .iter()
            .enumerate()
            .map(|(index, ticker)| self.build_item(page, index, ticker));

        let mut element = Element::div()
            .id(&self.id)
            .style(
                Style::new()
                    .set("display", "flex")
                    .set("gap", &self.gap)
                    .set("align-items", "center")
                    .set("flex-wrap", "wrap")
                    .merge(&self.style),
            )
            .children(items.collect::<Vec<_>>());
        if let Some(class) = &self.class {
            element = element.class(class);
        }
        element
    }

    fn build_item(&self, page: &Page, index: usize, ticker: &TickerItem) -> Element {
        let item_id = self.item_id(index);
        let style = Style::new()
            .set("display", "inline-flex")
            .set("align-items", "center")
            .set("justify-content", "center")
            .set("gap", "8px")
            .set("width", &self.width)
            .set("height", &self.height)
            .set("background-color", self.bg_color.to_css())
            .set("border-radius", &self.border_radius)
            .set("border", &self.border)
            .set("padding", &self.padding)
            .set("margin", &self.margin)
            .set(
                "cursor",
                if self.on_click.is_some() {
                    "pointer"
                } else {
                    "default"
                },
            );

        let name = Element::span(truncate_name(&ticker.name)).style(
            Style::new()
                .set("color", self.name_color.to_css())
                .set("font-size", &self.font_size)
                .set("font-weight", self.name_weight.to_string()),
        );
        let price = Element::span(format_price(ticker.price)).style(
            Style::new()
                .set("color", self.price_color_for(page, ticker.direction).to_css())
                .set("font-size", &self.font_size)
                .set("font-weight", self.price_weight.to_string()),
        );

        if let Some(on_click) = &self.on_click {
            let on_click = Arc::clone(on_click);
            let ticker = ticker.clone();
            page.registry().register(
                &item_id,
                EventKind::Click,
                handler(move |_| on_click(&ticker)),
            );
        }

        Element::div()
            .id(item_id)
            .attr("data-direction", ticker.direction.as_str())
            .clickable(self.on_click.is_some())
            .style(style)
            .child(name)
            .maybe_child(self.direction_icon(ticker.direction))
            .child(price)
    }
}
