use std::cell::Cell;

/// DOM-style events delivered to a page.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Key pressed. Targeted at the focused element when there is one.
    Key(KeyEvent),
    /// Pointer button pressed (fires before `Click`).
    PointerDown(PointerEvent),
    /// Pointer click on an element.
    Click(PointerEvent),
    /// Pointer entered an element. Does not bubble.
    PointerEnter { target: String },
    /// Pointer left an element. Does not bubble.
    PointerLeave { target: String },
    /// Viewport resized.
    Resize { width: u32, height: u32 },
}

/// Event stream an event belongs to, used to key listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    PointerDown,
    Click,
    PointerEnter,
    PointerLeave,
    Resize,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Key(_) => EventKind::KeyDown,
            Self::PointerDown(_) => EventKind::PointerDown,
            Self::Click(_) => EventKind::Click,
            Self::PointerEnter { .. } => EventKind::PointerEnter,
            Self::PointerLeave { .. } => EventKind::PointerLeave,
            Self::Resize { .. } => EventKind::Resize,
        }
    }

    /// The element the event is aimed at, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Key(key) => key.target.as_deref(),
            Self::PointerDown(p) | Self::Click(p) => p.target.as_deref(),
            Self::PointerEnter { target } | Self::PointerLeave { target } => Some(target),
            Self::Resize { .. } => None,
        }
    }

    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(key) => Some(key),
            _ => None,
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        Self::Click(PointerEvent::at_target(target))
    }

    pub fn pointer_down(target: impl Into<String>) -> Self {
        Self::PointerDown(PointerEvent::at_target(target))
    }
}

/// A keydown event using DOM naming: `key` is the produced value
/// (`"b"`, `"F2"`, `"Escape"`), `code` the physical key (`"KeyB"`, `"F2"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub code: String,
    pub modifiers: Modifiers,
    pub target: Option<String>,
    default_prevented: Cell<bool>,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            code: code.into(),
            modifiers: Modifiers::NONE,
            target: None,
            default_prevented: Cell::new(false),
        }
    }

    /// A character key; letters and digits get their physical code.
    pub fn char(c: char) -> Self {
        Self::new(c.to_string(), code_for_char(c))
    }

    /// Function key `F{n}`.
    pub fn function(n: u8) -> Self {
        let name = format!("F{n}");
        Self::new(name.clone(), name)
    }

    /// A named key whose key and code coincide (`"Escape"`, `"ArrowDown"`).
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(name.clone(), name)
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.modifiers.meta = true;
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Suppress the host's default action for this key press.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub fn none(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift && !self.meta
    }
}

/// Pointer event payload. `target` is the deepest element under the pointer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PointerEvent {
    pub target: Option<String>,
    pub x: u32,
    pub y: u32,
    pub button: MouseButton,
}

impl PointerEvent {
    pub fn at_target(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            ..Default::default()
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

fn code_for_char(c: char) -> String {
    match c {
        'a'..='z' | 'A'..='Z' => format!("Key{}", c.to_ascii_uppercase()),
        '0'..='9' => format!("Digit{c}"),
        ' ' => "Space".into(),
        '-' => "Minus".into(),
        '=' => "Equal".into(),
        ',' => "Comma".into(),
        '.' => "Period".into(),
        '/' => "Slash".into(),
        ';' => "Semicolon".into(),
        '\'' => "Quote".into(),
        '[' => "BracketLeft".into(),
        ']' => "BracketRight".into(),
        '\\' => "Backslash".into(),
        '`' => "Backquote".into(),
        _ => "Unidentified".into(),
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::KeyCode;

        let base = match event.code {
            KeyCode::Char(c) => KeyEvent::char(c),
            KeyCode::Enter => KeyEvent::named("Enter"),
            KeyCode::Backspace => KeyEvent::named("Backspace"),
            KeyCode::Delete => KeyEvent::named("Delete"),
            KeyCode::Tab | KeyCode::BackTab => KeyEvent::named("Tab"),
            KeyCode::Esc => KeyEvent::named("Escape"),
            KeyCode::Up => KeyEvent::named("ArrowUp"),
            KeyCode::Down => KeyEvent::named("ArrowDown"),
            KeyCode::Left => KeyEvent::named("ArrowLeft"),
            KeyCode::Right => KeyEvent::named("ArrowRight"),
            KeyCode::Home => KeyEvent::named("Home"),
            KeyCode::End => KeyEvent::named("End"),
            KeyCode::PageUp => KeyEvent::named("PageUp"),
            KeyCode::PageDown => KeyEvent::named("PageDown"),
            KeyCode::Insert => KeyEvent::named("Insert"),
            KeyCode::F(n) => KeyEvent::function(n),
            _ => KeyEvent::named("Unidentified"),
        };

        let mut modifiers = Modifiers::from(event.modifiers);
        if event.code == KeyCode::BackTab {
            modifiers.shift = true;
        }
        base.modifiers(modifiers)
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
            shift: mods.contains(KeyModifiers::SHIFT),
            meta: mods.intersects(KeyModifiers::SUPER | KeyModifiers::META),
        }
    }
}
