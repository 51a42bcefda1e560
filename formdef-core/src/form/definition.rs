//! Form definition — the canonical validated document.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use ts_rs::TS;

use super::element::{ElementType, FormElement};
use super::validation::{
    FormValidator, ValidationError, ValidationErrorKind, ValidationLimits, ValidationResult,
};
use crate::error::{FormError, Result};

/// A validated, canonical form definition.
///
/// This is the top-level structure handed to the rendering layer. It is
/// only produced by validation (or the builder): elements are sorted by
/// `order`, every label is populated, and uniqueness invariants hold.
///
/// # Example
///
/// ```json
/// {
///   "id": 1,
///   "name": "Contact",
///   "elements": [
///     {
///       "id": 2,
///       "order": 1,
///       "name": "subscribe",
///       "type": "checkbox",
///       "label": "subscribe",
///       "required": false,
///       "width": 2
///     },
///     {
///       "id": 1,
///       "order": 2,
///       "name": "email",
///       "type": "text",
///       "label": "Email address",
///       "placeholder": "you@example.com",
///       "required": true,
///       "width": 6
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../web/src/bindings/")]
pub struct Form {
    /// Unique identifier, assigned by the owning application.
    pub id: i64,

    /// Display name (non-empty).
    pub name: String,

    /// Elements in display order.
    pub elements: Vec<FormElement>,
}

impl Form {
    /// Create a new empty form.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            elements: Vec::new(),
        }
    }

    /// Add an element.
    pub fn with_element(mut self, element: FormElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Validate an arbitrary structured value and build the canonical form.
    ///
    /// All defects are accumulated and returned together; the input is
    /// never mutated.
    pub fn from_value(raw: &Value) -> ValidationResult {
        FormValidator::new().validate(raw)
    }

    /// Validate with custom limits.
    pub fn from_value_with_limits(raw: &Value, limits: &ValidationLimits) -> ValidationResult {
        FormValidator::with_limits(limits.clone()).validate(raw)
    }

    /// Parse and validate a form definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with_limits(json, &ValidationLimits::default())
    }

    /// Parse and validate a form definition from a JSON string with
    /// custom limits.
    ///
    /// Content size is checked before parsing and nesting depth after, so
    /// oversized or pathologically nested payloads never reach the
    /// semantic checks.
    pub fn from_json_with_limits(json: &str, limits: &ValidationLimits) -> Result<Self> {
        debug!(bytes = json.len(), "parsing JSON form definition");
        limits
            .validate_content_size(json)
            .map_err(|error| FormError::LimitExceeded { error })?;

        let value: Value = serde_json::from_str(json)?;
        Self::validate_parsed(&value, limits)
    }

    /// Parse and validate a form definition from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::from_yaml_with_limits(yaml, &ValidationLimits::default())
    }

    /// Parse and validate a form definition from a YAML string with
    /// custom limits.
    pub fn from_yaml_with_limits(yaml: &str, limits: &ValidationLimits) -> Result<Self> {
        debug!(bytes = yaml.len(), "parsing YAML form definition");
        limits
            .validate_content_size(yaml)
            .map_err(|error| FormError::LimitExceeded { error })?;

        let value: Value = serde_yaml::from_str(yaml)?;
        Self::validate_parsed(&value, limits)
    }

    /// Parse and validate a form definition file.
    ///
    /// `.yaml`/`.yml` files are parsed as YAML, everything else as JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_file_with_limits(path, &ValidationLimits::default())
    }

    /// Parse and validate a form definition file with custom limits.
    pub fn from_file_with_limits(path: &Path, limits: &ValidationLimits) -> Result<Self> {
        // Check file size before reading (early rejection)
        let metadata = std::fs::metadata(path).map_err(|e| FormError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        if metadata.len() as usize > limits.max_file_size {
            return Err(FormError::LimitExceeded {
                error: ValidationError::new(
                    ValidationErrorKind::LimitExceeded,
                    "form",
                    format!(
                        "file size ({} bytes) exceeds maximum allowed ({} bytes)",
                        metadata.len(),
                        limits.max_file_size
                    ),
                ),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| FormError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_with_limits(&content, limits),
            _ => Self::from_json_with_limits(&content, limits),
        }
    }

    fn validate_parsed(value: &Value, limits: &ValidationLimits) -> Result<Self> {
        limits
            .validate_nesting_depth(value)
            .map_err(|error| FormError::LimitExceeded { error })?;

        FormValidator::with_limits(limits.clone())
            .validate(value)
            .map_err(|errors| {
                warn!(defects = errors.len(), "rejected form definition");
                FormError::Validation { errors }
            })
    }

    /// Project the canonical form back to its raw structured value.
    ///
    /// Validating the result reproduces this form.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Get all element names.
    pub fn element_names(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(|e| e.name.as_str())
    }

    /// Get an element by name.
    pub fn get_element(&self, name: &str) -> Option<&FormElement> {
        self.elements.iter().find(|e| e.name == name)
    }

    /// Check if an element with the given name exists.
    pub fn has_element(&self, name: &str) -> bool {
        self.elements.iter().any(|e| e.name == name)
    }

    /// Get elements of a given type.
    pub fn elements_of_type(&self, ty: ElementType) -> impl Iterator<Item = &FormElement> {
        self.elements.iter().filter(move |e| e.element_type == ty)
    }

    /// Get elements that must be filled in.
    pub fn required_elements(&self) -> impl Iterator<Item = &FormElement> {
        self.elements.iter().filter(|e| e.required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::options::{Choice, ElementOptions};

    #[test]
    fn parse_complete_form() {
        let json = r#"
        {
            "id": 4,
            "name": "Signup",
            "elements": [
                {"id": 1, "name": "email", "type": "text", "label": "Email",
                 "placeholder": "you@example.com", "required": true, "width": 6},
                {"id": 2, "name": "plan", "type": "select", "width": 6,
                 "options": {"choices": [{"value": "free"}, {"value": "pro", "label": "Pro"}]}},
                {"id": 3, "name": "notes", "type": "textarea", "width": 12}
            ]
        }"#;

        let form = Form::from_json(json).unwrap();
        assert_eq!(form.id, 4);
        assert_eq!(form.name, "Signup");
        assert_eq!(form.elements.len(), 3);
        assert!(form.has_element("plan"));

        let plan = form.get_element("plan").unwrap();
        assert_eq!(plan.element_type, ElementType::Select);
        assert_eq!(plan.label, "plan");
        assert_eq!(plan.choices().len(), 2);
        assert_eq!(plan.choices()[1].label, "Pro");
    }

    #[test]
    fn parse_yaml_form() {
        let yaml = r#"
id: 2
name: Feedback
elements:
  - id: 1
    name: mood
    type: radio
    width: 4
    options:
      choices: [good, bad]
"#;
        let form = Form::from_yaml(yaml).unwrap();
        assert_eq!(form.name, "Feedback");
        assert_eq!(form.elements[0].choices()[0].value, "good");
    }

    #[test]
    fn form_builder() {
        let form = Form::new(1, "contact")
            .with_element(FormElement::new(1, "email", ElementType::Text).required())
            .with_element(
                FormElement::new(2, "country", ElementType::Select)
                    .with_options(ElementOptions::new().with_choice(Choice::new("fr"))),
            );

        assert_eq!(form.elements.len(), 2);
        assert_eq!(form.required_elements().count(), 1);
        assert_eq!(form.elements_of_type(ElementType::Select).count(), 1);
        assert_eq!(form.element_names().collect::<Vec<_>>(), ["email", "country"]);
    }

    #[test]
    fn validation_errors_are_reported_together() {
        let json = r#"{"id": 1, "elements": "none"}"#;
        let err = Form::from_json(json).unwrap_err();

        let errors = match err {
            FormError::Validation { errors } => errors,
            other => panic!("expected validation error, got {other}"),
        };
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn parse_error_is_not_validation() {
        let err = Form::from_json("{not json").unwrap_err();
        assert!(matches!(err, FormError::Json(_)));
    }

    #[test]
    fn to_json_round_trip() {
        let json = r#"
        {
            "id": 7,
            "name": "Booking",
            "elements": [
                {"id": 1, "name": "date", "type": "date", "width": 4, "order": 2},
                {"id": 2, "name": "guests", "type": "text", "width": 2, "order": 1}
            ]
        }"#;

        let form = Form::from_json(json).unwrap();
        let reparsed = Form::from_json(&form.to_json().unwrap()).unwrap();
        assert_eq!(form, reparsed);
        // normalization already applied on the first pass
        assert_eq!(reparsed.elements[0].name, "guests");
    }

    #[test]
    fn content_size_limit_rejects_before_parse() {
        let limits = ValidationLimits::default().with_max_file_size(10);
        // not even valid JSON; the size check must fire first
        let err = Form::from_json_with_limits("{oversized-and-broken}", &limits).unwrap_err();
        assert!(matches!(err, FormError::LimitExceeded { .. }));
    }

    #[test]
    fn nesting_depth_limit() {
        let limits = ValidationLimits::default().with_max_nesting_depth(3);
        let json = r#"{"id": 1, "name": "deep", "elements": [{"id": 1, "name": "a", "type": "text", "width": 1, "options": {"a": {"b": 1}}}]}"#;
        let err = Form::from_json_with_limits(json, &limits).unwrap_err();
        assert!(matches!(err, FormError::LimitExceeded { .. }));
    }
}
