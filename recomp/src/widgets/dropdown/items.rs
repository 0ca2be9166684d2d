//! Normalizing arbitrary item records into something a menu can render.

use serde_json::Value;

use crate::style::Color;

/// Which fields of a raw item record carry the key, label, disabled flag
/// and background colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub key: String,
    pub label: String,
    pub disabled: String,
    pub bg: String,
}

impl Default for ItemFields {
    fn default() -> Self {
        Self {
            key: "value".into(),
            label: "label".into(),
            disabled: "disabled".into(),
            bg: "bg".into(),
        }
    }
}

impl ItemFields {
    pub fn key(mut self, field: impl Into<String>) -> Self {
        self.key = field.into();
        self
    }

    pub fn label(mut self, field: impl Into<String>) -> Self {
        self.label = field.into();
        self
    }

    pub fn disabled(mut self, field: impl Into<String>) -> Self {
        self.disabled = field.into();
        self
    }

    pub fn bg(mut self, field: impl Into<String>) -> Self {
        self.bg = field.into();
        self
    }
}

/// A raw item together with the values the menu needs from it.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedItem {
    pub raw: Value,
    pub key: Value,
    pub label: String,
    pub disabled: bool,
    pub bg: Color,
}

impl NormalizedItem {
    /// The key as text: strings as they are, anything else as JSON.
    pub fn key_string(&self) -> String {
        display_value(&self.key)
    }
}

/// Normalize one raw item.
///
/// - key: the mapped field, else `id`, else the raw value itself
/// - label: the mapped field, else `label`, else the raw value as text
/// - disabled: the mapped field, truthy
/// - bg: the mapped field, else `item_bg`
pub fn normalize(raw: &Value, fields: &ItemFields, item_bg: &Color) -> NormalizedItem {
    let key = field(raw, &fields.key)
        .or_else(|| field(raw, "id"))
        .unwrap_or(raw)
        .clone();
    let label = field(raw, &fields.label)
        .or_else(|| field(raw, "label"))
        .map(display_value)
        .unwrap_or_else(|| display_value(raw));
    let disabled = field(raw, &fields.disabled).is_some_and(is_truthy);
    let bg = field(raw, &fields.bg)
        .and_then(Value::as_str)
        .map(Color::from)
        .unwrap_or_else(|| item_bg.clone());

    NormalizedItem {
        raw: raw.clone(),
        key,
        label,
        disabled,
        bg,
    }
}

/// Normalize a whole item list. Anything other than an array is treated as
/// an empty list.
pub fn normalize_all(items: &Value, fields: &ItemFields, item_bg: &Color) -> Vec<NormalizedItem> {
    match items.as_array() {
        Some(items) => items
            .iter()
            .map(|raw| normalize(raw, fields, item_bg))
            .collect(),
        None => {
            if !items.is_null() {
                log::debug!("Dropdown: items is not an array, rendering none");
            }
            Vec::new()
        }
    }
}

/// A present, non-null field of an object.
fn field<'a>(raw: &'a Value, name: &str) -> Option<&'a Value> {
    raw.get(name).filter(|v| !v.is_null())
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JavaScript truthiness: `false`, `0`, `""` and `null` are false.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn fields() -> ItemFields {
        ItemFields::default()
    }

    #[test]
    fn test_key_precedence() {
        let bg = Color::Transparent;
        assert_eq!(normalize(&json!({"value": 1, "id": 2}), &fields(), &bg).key, json!(1));
        assert_eq!(normalize(&json!({"id": 2}), &fields(), &bg).key, json!(2));
        assert_eq!(normalize(&json!({"value": null, "id": 2}), &fields(), &bg).key, json!(2));
        assert_eq!(normalize(&json!("plain"), &fields(), &bg).key, json!("plain"));
    }

    #[test]
    fn test_label_precedence() {
        let bg = Color::Transparent;
        let custom = fields().label("name");
        assert_eq!(normalize(&json!({"name": "A", "label": "B"}), &custom, &bg).label, "A");
        assert_eq!(normalize(&json!({"label": "B"}), &custom, &bg).label, "B");
        assert_eq!(normalize(&json!("plain"), &custom, &bg).label, "plain");
        assert_eq!(normalize(&json!(42), &custom, &bg).label, "42");
    }

    #[test]
    fn test_disabled_is_truthy() {
        let bg = Color::Transparent;
        for (value, expected) in [
            (json!(true), true),
            (json!(1), true),
            (json!("yes"), true),
            (json!(false), false),
            (json!(0), false),
            (json!(""), false),
            (json!(null), false),
        ] {
            let item = normalize(&json!({ "disabled": value.clone() }), &fields(), &bg);
            assert_eq!(item.disabled, expected, "disabled = {value}");
        }
    }

    #[test]
    fn test_bg_falls_back_to_item_bg() {
        let fallback = Color::rgb(1, 2, 3);
        assert_eq!(normalize(&json!({}), &fields(), &fallback).bg, fallback);
        assert_eq!(
            normalize(&json!({"bg": "#ffffff"}), &fields(), &fallback).bg,
            Color::rgb(255, 255, 255)
        );
        let custom = fields().bg("shade");
        assert_eq!(
            normalize(&json!({"shade": "red"}), &custom, &fallback).bg,
            Color::named("red")
        );
    }

    #[test]
    fn test_non_array_is_empty() {
        let bg = Color::Transparent;
        assert!(normalize_all(&json!({"value": 1}), &fields(), &bg).is_empty());
        assert!(normalize_all(&Value::Null, &fields(), &bg).is_empty());
        assert_eq!(normalize_all(&json!([1, 2]), &fields(), &bg).len(), 2);
    }
}
