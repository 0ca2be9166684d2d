use std::fmt;

use recomp_dom::{KeyEvent, Modifiers};

use crate::error::{Error, Result};

/// A keyboard shortcut: an exact modifier set plus at most one main key.
///
/// Tokens are case-insensitive and their order does not matter, so
/// `["Ctrl", "Shift", "D"]` and `["d", "shift", "control"]` are the same
/// combo. A combo with only modifiers matches on the modifiers alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    modifiers: Modifiers,
    main: Option<String>,
}

impl KeyCombo {
    /// Parse a token list such as `["Alt", "B"]` or `["F2"]`.
    pub fn parse<S: AsRef<str>>(keys: &[S]) -> Result<Self> {
        let tokens: Vec<String> = keys
            .iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        if tokens.is_empty() {
            return Err(Error::EmptyCombo);
        }

        let mut modifiers = Modifiers::NONE;
        let mut main_keys = Vec::new();
        for token in tokens {
            match token.as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                "meta" | "cmd" | "win" => modifiers.meta = true,
                _ => {
                    if !main_keys.contains(&token) {
                        main_keys.push(token);
                    }
                }
            }
        }

        if main_keys.len() > 1 {
            return Err(Error::MultipleMainKeys { keys: main_keys });
        }

        Ok(Self {
            modifiers,
            main: main_keys.pop(),
        })
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// The lower-cased main key, if any.
    pub fn main_key(&self) -> Option<&str> {
        self.main.as_deref()
    }

    /// Whether a key press triggers this combo.
    ///
    /// All four modifier flags must equal the combo's exactly. The main key
    /// matches the event's `key` (`"b"`, `"F2"`) or its `code`, with or
    /// without the `Key` prefix (`"KeyB"`).
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if event.modifiers != self.modifiers {
            return false;
        }

        let Some(main) = &self.main else {
            return true;
        };

        let key = event.key.to_lowercase();
        let code = event.code.to_lowercase();
        key == *main || code == *main || code.strip_prefix("key") == Some(main.as_str())
    }
}

impl fmt::Display for KeyCombo {
    /// `Ctrl+Shift+D`, `Alt+B`, `F2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if self.modifiers.ctrl {
            parts.push("Ctrl".into());
        }
        if self.modifiers.alt {
            parts.push("Alt".into());
        }
        if self.modifiers.shift {
            parts.push("Shift".into());
        }
        if self.modifiers.meta {
            parts.push("Meta".into());
        }
        if let Some(main) = &self.main {
            parts.push(main.to_uppercase());
        }
        f.write_str(&parts.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_tokens() {
        let combo = KeyCombo::parse(&[" Ctrl ", "SHIFT", "d"]).unwrap();
        assert!(combo.modifiers().ctrl);
        assert!(combo.modifiers().shift);
        assert!(!combo.modifiers().alt);
        assert_eq!(combo.main_key(), Some("d"));
        assert_eq!(combo, KeyCombo::parse(&["d", "shift", "control"]).unwrap());
    }

    #[test]
    fn test_parse_aliases() {
        let combo = KeyCombo::parse(&["cmd", "k"]).unwrap();
        assert!(combo.modifiers().meta);
        assert_eq!(combo, KeyCombo::parse(&["win", "K"]).unwrap());
    }

    #[test]
    fn test_parse_empty() {
        let empty: [&str; 0] = [];
        assert!(matches!(KeyCombo::parse(&empty), Err(Error::EmptyCombo)));
        assert!(matches!(KeyCombo::parse(&["  "]), Err(Error::EmptyCombo)));
    }

    #[test]
    fn test_parse_multiple_main_keys() {
        let err = KeyCombo::parse(&["g", "g", "h"]).unwrap_err();
        match err {
            Error::MultipleMainKeys { keys } => assert_eq!(keys, vec!["g", "h"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_matches_code_without_prefix() {
        let combo = KeyCombo::parse(&["Alt", "B"]).unwrap();
        // Alt on some layouts turns `b` into another character; the code still matches.
        let event = KeyEvent::new("∫", "KeyB").alt();
        assert!(combo.matches(&event));
    }

    #[test]
    fn test_matches_digit_by_key() {
        let combo = KeyCombo::parse(&["ctrl", "1"]).unwrap();
        assert!(combo.matches(&KeyEvent::char('1').ctrl()));
    }

    #[test]
    fn test_display() {
        let combo = KeyCombo::parse(&["shift", "ctrl", "d"]).unwrap();
        assert_eq!(combo.to_string(), "Ctrl+Shift+D");
        assert_eq!(KeyCombo::parse(&["F2"]).unwrap().to_string(), "F2");
    }
}
