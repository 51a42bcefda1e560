//! Typed view of an element's open `options` mapping.

use serde::Serialize;
use serde_json::{Map, Value};
use ts_rs::TS;

/// One entry in an element's choice list.
///
/// A raw choice is either a bare string (the value doubles as the label)
/// or a `{value, label}` mapping with the label defaulting to the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../web/src/bindings/")]
pub struct Choice {
    /// Stored value submitted when this choice is picked.
    pub value: String,
    /// Display label shown by the rendering layer.
    pub label: String,
}

impl Choice {
    /// Create a choice whose label equals its value.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Parse a raw choice entry.
    ///
    /// Accepts a JSON string or a mapping with a string `value` and an
    /// optional string `label`. Anything else is rejected.
    pub fn from_value(raw: &Value) -> Option<Self> {
        match raw {
            Value::String(s) => Some(Self::new(s.clone())),
            Value::Object(map) => {
                let value = map.get("value")?.as_str()?;
                let label = match map.get("label") {
                    None => value.to_string(),
                    Some(Value::String(label)) => label.clone(),
                    Some(_) => return None,
                };
                Some(Self {
                    value: value.to_string(),
                    label,
                })
            }
            _ => None,
        }
    }
}

/// Configuration attached to a form element.
///
/// The recognized `choices` key is parsed into typed [`Choice`] records;
/// every other key is carried in `rest` untouched so that persisted
/// documents survive a validate/serialize round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../web/src/bindings/")]
pub struct ElementOptions {
    /// Choice list for select/radio/checkbox elements.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,

    /// Unrecognized configuration keys, preserved verbatim.
    #[serde(flatten)]
    #[ts(skip)]
    pub rest: Map<String, Value>,
}

impl ElementOptions {
    /// Create an empty options mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Attach an unrecognized configuration key.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.rest.insert(key.into(), value);
        self
    }

    /// Whether a non-empty choice list is present.
    pub fn has_choices(&self) -> bool {
        !self.choices.is_empty()
    }

    /// Get an unrecognized configuration value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.rest.get(key)
    }

    /// Get a string configuration value.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.rest.get(key).and_then(|v| v.as_str())
    }

    /// Get an integer configuration value.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.rest.get(key).and_then(|v| v.as_i64())
    }

    /// Get a boolean configuration value.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.rest.get(key).and_then(|v| v.as_bool())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn choice_from_bare_string() {
        let choice = Choice::from_value(&json!("red")).unwrap();
        assert_eq!(choice.value, "red");
        assert_eq!(choice.label, "red");
    }

    #[test]
    fn choice_from_mapping() {
        let choice = Choice::from_value(&json!({"value": "fr", "label": "French"})).unwrap();
        assert_eq!(choice.value, "fr");
        assert_eq!(choice.label, "French");
    }

    #[test]
    fn choice_label_defaults_to_value() {
        let choice = Choice::from_value(&json!({"value": "de"})).unwrap();
        assert_eq!(choice.label, "de");
    }

    #[test]
    fn choice_rejects_malformed_entries() {
        assert!(Choice::from_value(&json!(42)).is_none());
        assert!(Choice::from_value(&json!({"label": "no value"})).is_none());
        assert!(Choice::from_value(&json!({"value": 1})).is_none());
        assert!(Choice::from_value(&json!({"value": "ok", "label": 2})).is_none());
    }

    #[test]
    fn serialize_as_open_mapping() {
        let options = ElementOptions::new()
            .with_choice(Choice::new("a"))
            .with_extra("multiple", json!(true));

        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(
            value,
            json!({"choices": [{"value": "a", "label": "a"}], "multiple": true})
        );
    }

    #[test]
    fn empty_choices_are_omitted() {
        let options = ElementOptions::new().with_extra("rows", json!(4));
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value, json!({"rows": 4}));
    }

    #[test]
    fn typed_accessors() {
        let options = ElementOptions::new()
            .with_extra("rows", json!(4))
            .with_extra("multiple", json!(true))
            .with_extra("hint", json!("pick one"));

        assert_eq!(options.get_i64("rows"), Some(4));
        assert_eq!(options.get_bool("multiple"), Some(true));
        assert_eq!(options.get_string("hint"), Some("pick one"));
        assert!(options.get("missing").is_none());
        assert!(!options.has_choices());
    }
}
