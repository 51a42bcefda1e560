//! Element definition — one field within a form.

use serde::Serialize;
use ts_rs::TS;

use super::options::{Choice, ElementOptions};

/// Type of form element.
///
/// The closed set of input widgets the rendering layer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../web/src/bindings/")]
pub enum ElementType {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    Textarea,
    /// Date picker.
    Date,
    /// Drop-down selection.
    Select,
    /// Checkbox — a single boolean box, or a group when choices are given.
    Checkbox,
    /// Radio button group.
    Radio,
}

impl ElementType {
    /// Every known element type.
    pub const ALL: [ElementType; 6] = [
        Self::Text,
        Self::Textarea,
        Self::Date,
        Self::Select,
        Self::Checkbox,
        Self::Radio,
    ];

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Date => "date",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
        }
    }

    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "textarea" => Some(Self::Textarea),
            "date" => Some(Self::Date),
            "select" => Some(Self::Select),
            "checkbox" => Some(Self::Checkbox),
            "radio" => Some(Self::Radio),
            _ => None,
        }
    }

    /// Whether this type must carry a non-empty choice list.
    pub fn requires_choices(&self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }

    /// Whether this type may carry a choice list.
    pub fn accepts_choices(&self) -> bool {
        matches!(self, Self::Select | Self::Radio | Self::Checkbox)
    }

    /// Whether placeholder text is meaningful for this type.
    pub fn supports_placeholder(&self) -> bool {
        matches!(self, Self::Text | Self::Textarea | Self::Date)
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated form element.
///
/// Produced by the validator or the builder. `label` is always populated
/// (defaulted from `name`) and `width` is always positive.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../web/src/bindings/")]
pub struct FormElement {
    /// Unique identifier within the owning form.
    pub id: i64,

    /// Display position; ties resolve by original input order.
    pub order: i64,

    /// Stable machine-readable field key, unique within the form.
    pub name: String,

    /// Element type tag.
    #[serde(rename = "type")]
    pub element_type: ElementType,

    /// Human-readable caption, defaulted from `name`.
    pub label: String,

    /// Open configuration mapping; carries the choice list for choice types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ElementOptions>,

    /// Whether an empty value fails submission validation.
    pub required: bool,

    /// Hint text for text-like inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Layout weight in grid columns.
    pub width: u32,
}

fn default_width() -> u32 {
    12
}

impl FormElement {
    /// Create a new element with defaults: full width, optional, label
    /// mirroring the name.
    pub fn new(id: i64, name: impl Into<String>, element_type: ElementType) -> Self {
        let name = name.into();
        Self {
            id,
            order: 0,
            label: name.clone(),
            name,
            element_type,
            options: None,
            required: false,
            placeholder: None,
            width: default_width(),
        }
    }

    /// Set the display position.
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    /// Set the caption.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the hint text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the layout weight.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Attach an options mapping.
    pub fn with_options(mut self, options: ElementOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Mark the element as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Choices attached to this element, empty for non-choice elements.
    pub fn choices(&self) -> &[Choice] {
        self.options
            .as_ref()
            .map(|o| o.choices.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_round_trips_every_type() {
        for ty in ElementType::ALL {
            assert_eq!(ElementType::parse(ty.as_str()), Some(ty));
        }
        assert_eq!(ElementType::parse("dropdown"), None);
    }

    #[test]
    fn choice_predicates() {
        assert!(ElementType::Select.requires_choices());
        assert!(ElementType::Radio.requires_choices());
        assert!(!ElementType::Checkbox.requires_choices());
        assert!(ElementType::Checkbox.accepts_choices());
        assert!(!ElementType::Text.accepts_choices());
        assert!(ElementType::Date.supports_placeholder());
        assert!(!ElementType::Select.supports_placeholder());
    }

    #[test]
    fn element_builder() {
        let element = FormElement::new(1, "email", ElementType::Text)
            .with_order(3)
            .with_placeholder("you@example.com")
            .with_width(6)
            .required();

        assert_eq!(element.name, "email");
        assert_eq!(element.label, "email");
        assert_eq!(element.order, 3);
        assert_eq!(element.width, 6);
        assert!(element.required);
        assert!(element.choices().is_empty());
    }

    #[test]
    fn serialize_wire_shape() {
        let element = FormElement::new(7, "country", ElementType::Select)
            .with_label("Country")
            .with_options(ElementOptions::new().with_choice(Choice::new("fr")));

        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value["type"], json!("select"));
        assert_eq!(value["label"], json!("Country"));
        assert_eq!(value["options"]["choices"][0]["value"], json!("fr"));
        // absent placeholder is omitted, not null
        assert!(value.get("placeholder").is_none());
    }
}
