//! Form validation and normalization logic.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::ValidationResult;
use super::error::{ValidationError, ValidationErrorKind};
use super::limits::ValidationLimits;
use crate::form::definition::Form;
use crate::form::element::{ElementType, FormElement};
use crate::form::options::{Choice, ElementOptions};

/// Validator for raw form definitions.
///
/// Walks an arbitrary JSON value, accumulating every defect instead of
/// stopping at the first, and builds the canonical [`Form`] when the
/// document is clean: elements stably sorted by `order`, with `label`,
/// `required`, and `order` defaults applied.
pub struct FormValidator {
    errors: Vec<ValidationError>,
    limits: ValidationLimits,
}

impl FormValidator {
    /// Create a new validator with default limits.
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            limits: ValidationLimits::default(),
        }
    }

    /// Create a validator with custom limits.
    pub fn with_limits(limits: ValidationLimits) -> Self {
        Self {
            errors: Vec::new(),
            limits,
        }
    }

    /// Validate a raw value and build the canonical form.
    ///
    /// The input is never mutated; on success a new canonical copy is
    /// returned. On failure every defect found is reported, in document
    /// order.
    pub fn validate(mut self, raw: &Value) -> ValidationResult {
        let Some(root) = raw.as_object() else {
            self.add_error(ValidationError::wrong_type(
                "form",
                "mapping",
                json_type_name(raw),
            ));
            return Err(self.errors);
        };

        let id = self.validate_id(root);
        let name = self.validate_name(root);
        let elements = self.validate_elements(root);

        if !self.errors.is_empty() {
            return Err(self.errors);
        }

        match (id, name, elements) {
            (Some(id), Some(name), Some(mut elements)) => {
                // Stable sort: equal orders keep their input positions.
                elements.sort_by_key(|e| e.order);
                Ok(Form { id, name, elements })
            }
            // A missing part always records an error first.
            _ => Err(self.errors),
        }
    }

    fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    fn validate_id(&mut self, root: &Map<String, Value>) -> Option<i64> {
        match root.get("id") {
            None => {
                self.add_error(ValidationError::missing_field("form", "id"));
                None
            }
            Some(value) => match value.as_i64() {
                Some(id) => Some(id),
                None => {
                    self.add_error(ValidationError::wrong_type(
                        "form.id",
                        "integer",
                        json_type_name(value),
                    ));
                    None
                }
            },
        }
    }

    fn validate_name(&mut self, root: &Map<String, Value>) -> Option<String> {
        match root.get("name") {
            None => {
                self.add_error(ValidationError::missing_field("form", "name"));
                None
            }
            Some(Value::String(name)) if !name.is_empty() => Some(name.clone()),
            Some(Value::String(_)) => {
                self.add_error(ValidationError::new(
                    ValidationErrorKind::MissingField,
                    "form.name",
                    "field 'name' must be a non-empty string",
                ));
                None
            }
            Some(value) => {
                self.add_error(ValidationError::wrong_type(
                    "form.name",
                    "string",
                    json_type_name(value),
                ));
                None
            }
        }
    }

    fn validate_elements(&mut self, root: &Map<String, Value>) -> Option<Vec<FormElement>> {
        let raw = match root.get("elements") {
            None => {
                self.add_error(ValidationError::missing_field("form", "elements"));
                return None;
            }
            Some(Value::Array(items)) => items,
            Some(value) => {
                self.add_error(ValidationError::wrong_type(
                    "form.elements",
                    "sequence",
                    json_type_name(value),
                ));
                return None;
            }
        };

        if raw.len() > self.limits.max_element_count {
            self.add_error(ValidationError::new(
                ValidationErrorKind::LimitExceeded,
                "elements",
                format!(
                    "element count ({}) exceeds maximum allowed ({})",
                    raw.len(),
                    self.limits.max_element_count
                ),
            ));
        }

        let mut seen_ids = HashSet::new();
        let mut seen_names = HashSet::new();
        let mut elements = Vec::with_capacity(raw.len());

        for (idx, item) in raw.iter().enumerate() {
            if let Some(element) = self.validate_element(idx, item, &mut seen_ids, &mut seen_names)
            {
                elements.push(element);
            }
        }

        Some(elements)
    }

    fn validate_element(
        &mut self,
        idx: usize,
        raw: &Value,
        seen_ids: &mut HashSet<i64>,
        seen_names: &mut HashSet<String>,
    ) -> Option<FormElement> {
        let location = format!("elements[{}]", idx);

        let Some(map) = raw.as_object() else {
            self.add_error(ValidationError::wrong_type(
                &location,
                "mapping",
                json_type_name(raw),
            ));
            return None;
        };

        let id = self.validate_element_id(map, &location);
        if let Some(id) = id {
            // Check for duplicate IDs; duplicates are reported, never dropped.
            if !seen_ids.insert(id) {
                self.add_error(ValidationError::duplicate_id(&location, id));
            }
        }

        let name = self.validate_element_name(map, &location);
        if let Some(name) = &name {
            if !seen_names.insert(name.clone()) {
                self.add_error(ValidationError::duplicate_name(&location, name));
            }
        }

        let element_type = self.validate_element_type(map, &location);
        let width = self.validate_width(map, &location);
        let required = self.validate_required(map, &location);

        // Order defaults to the element's position in the input sequence.
        let order = match map.get("order") {
            None => Some(idx as i64),
            Some(value) => match value.as_i64() {
                Some(order) => Some(order),
                None => {
                    self.add_error(ValidationError::wrong_type(
                        format!("{}.order", location),
                        "integer",
                        json_type_name(value),
                    ));
                    None
                }
            },
        };

        // Label defaults to the machine-readable name.
        let label = match map.get("label") {
            None => name.clone(),
            Some(Value::String(label)) => Some(label.clone()),
            Some(value) => {
                self.add_error(ValidationError::wrong_type(
                    format!("{}.label", location),
                    "string",
                    json_type_name(value),
                ));
                None
            }
        };

        let placeholder = match map.get("placeholder") {
            None => Some(None),
            Some(Value::String(placeholder)) => Some(Some(placeholder.clone())),
            Some(value) => {
                self.add_error(ValidationError::wrong_type(
                    format!("{}.placeholder", location),
                    "string",
                    json_type_name(value),
                ));
                None
            }
        };

        let options = self.validate_options(map, &location);

        if let (Some(ty), Some(options)) = (element_type, &options) {
            self.validate_choice_rule(ty, options.as_ref(), &location);
        }

        Some(FormElement {
            id: id?,
            order: order?,
            name: name?,
            element_type: element_type?,
            label: label?,
            options: options?,
            required: required?,
            placeholder: placeholder?,
            width: width?,
        })
    }

    fn validate_element_id(&mut self, map: &Map<String, Value>, location: &str) -> Option<i64> {
        match map.get("id") {
            None => {
                self.add_error(ValidationError::missing_field(location, "id"));
                None
            }
            Some(value) => match value.as_i64() {
                Some(id) => Some(id),
                None => {
                    self.add_error(ValidationError::wrong_type(
                        format!("{}.id", location),
                        "integer",
                        json_type_name(value),
                    ));
                    None
                }
            },
        }
    }

    fn validate_element_name(
        &mut self,
        map: &Map<String, Value>,
        location: &str,
    ) -> Option<String> {
        match map.get("name") {
            None => {
                self.add_error(ValidationError::missing_field(location, "name"));
                None
            }
            Some(Value::String(name)) if !name.is_empty() => Some(name.clone()),
            Some(Value::String(_)) => {
                self.add_error(ValidationError::new(
                    ValidationErrorKind::MissingField,
                    format!("{}.name", location),
                    "field 'name' must be a non-empty string",
                ));
                None
            }
            Some(value) => {
                self.add_error(ValidationError::wrong_type(
                    format!("{}.name", location),
                    "string",
                    json_type_name(value),
                ));
                None
            }
        }
    }

    fn validate_element_type(
        &mut self,
        map: &Map<String, Value>,
        location: &str,
    ) -> Option<ElementType> {
        match map.get("type") {
            None => {
                self.add_error(ValidationError::missing_field(location, "type"));
                None
            }
            Some(Value::String(raw)) => match ElementType::parse(raw) {
                Some(ty) => Some(ty),
                None => {
                    self.add_error(ValidationError::unknown_element_type(
                        format!("{}.type", location),
                        raw,
                    ));
                    None
                }
            },
            Some(value) => {
                self.add_error(ValidationError::wrong_type(
                    format!("{}.type", location),
                    "string",
                    json_type_name(value),
                ));
                None
            }
        }
    }

    fn validate_width(&mut self, map: &Map<String, Value>, location: &str) -> Option<u32> {
        let width_location = format!("{}.width", location);
        match map.get("width") {
            None => {
                self.add_error(ValidationError::missing_field(location, "width"));
                None
            }
            Some(value) => match value.as_i64() {
                Some(width) if width <= 0 => {
                    self.add_error(ValidationError::invalid_width(width_location, width));
                    None
                }
                Some(width) => match u32::try_from(width) {
                    Ok(width) => Some(width),
                    Err(_) => {
                        self.add_error(ValidationError::new(
                            ValidationErrorKind::InvalidWidth,
                            width_location,
                            format!(
                                "width ({}) exceeds maximum supported value ({})",
                                width,
                                u32::MAX
                            ),
                        ));
                        None
                    }
                },
                None => {
                    self.add_error(ValidationError::wrong_type(
                        width_location,
                        "integer",
                        json_type_name(value),
                    ));
                    None
                }
            },
        }
    }

    fn validate_required(&mut self, map: &Map<String, Value>, location: &str) -> Option<bool> {
        match map.get("required") {
            None => Some(false),
            Some(Value::Bool(required)) => Some(*required),
            Some(value) => {
                self.add_error(ValidationError::wrong_type(
                    format!("{}.required", location),
                    "boolean",
                    json_type_name(value),
                ));
                None
            }
        }
    }

    /// Parse the open options mapping, splitting the recognized `choices`
    /// key from the keys that are carried through verbatim.
    ///
    /// Returns `None` when the mapping itself is malformed, `Some(None)`
    /// when no options were supplied.
    fn validate_options(
        &mut self,
        map: &Map<String, Value>,
        location: &str,
    ) -> Option<Option<ElementOptions>> {
        let raw = match map.get("options") {
            None => return Some(None),
            Some(Value::Object(raw)) => raw,
            Some(value) => {
                self.add_error(ValidationError::wrong_type(
                    format!("{}.options", location),
                    "mapping",
                    json_type_name(value),
                ));
                return None;
            }
        };

        let mut options = ElementOptions::new();
        let mut malformed = false;

        for (key, value) in raw {
            if key == "choices" {
                match value {
                    Value::Array(entries) => {
                        for (choice_idx, entry) in entries.iter().enumerate() {
                            match Choice::from_value(entry) {
                                Some(choice) => options.choices.push(choice),
                                None => {
                                    self.add_error(ValidationError::new(
                                        ValidationErrorKind::WrongType,
                                        format!(
                                            "{}.options.choices[{}]",
                                            location, choice_idx
                                        ),
                                        "choice entries must be strings or {value, label} mappings",
                                    ));
                                    malformed = true;
                                }
                            }
                        }
                    }
                    value => {
                        self.add_error(ValidationError::wrong_type(
                            format!("{}.options.choices", location),
                            "sequence",
                            json_type_name(value),
                        ));
                        malformed = true;
                    }
                }
            } else {
                options.rest.insert(key.clone(), value.clone());
            }
        }

        if malformed { None } else { Some(Some(options)) }
    }

    /// Cross-field rule: select and radio elements must carry choices;
    /// a checkbox without them is a single boolean box, not a failure.
    fn validate_choice_rule(
        &mut self,
        element_type: ElementType,
        options: Option<&ElementOptions>,
        location: &str,
    ) {
        if !element_type.requires_choices() {
            return;
        }
        match options {
            None => {
                self.add_error(ValidationError::missing_options(
                    location,
                    element_type.as_str(),
                ));
            }
            Some(options) if !options.has_choices() => {
                self.add_error(ValidationError::missing_options(
                    format!("{}.options", location),
                    element_type.as_str(),
                ));
            }
            Some(_) => {}
        }
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Describe a JSON value's type for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
