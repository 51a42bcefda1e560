//! Validation error types.

/// A validation defect found in a raw form definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The kind of defect.
    pub kind: ValidationErrorKind,
    /// The location in the document (e.g., "elements[2].options.choices").
    pub location: String,
    /// Human-readable error message.
    pub message: String,
}

/// Kinds of validation defects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Required attribute absent (or present but empty where non-empty is
    /// required).
    MissingField,
    /// Attribute present but not convertible to its expected type.
    WrongType,
    /// Element identifier repeated within the form.
    DuplicateId,
    /// Element name repeated within the form.
    DuplicateName,
    /// Element type outside the closed set of known variants.
    UnknownElementType,
    /// Choice element lacking a non-empty choice list.
    MissingOptions,
    /// Width is not a positive integer in range.
    InvalidWidth,
    /// Validation limit exceeded (size, depth, count).
    LimitExceeded,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.location, self.message)
    }
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::MissingField => "MISSING_FIELD",
            Self::WrongType => "WRONG_TYPE",
            Self::DuplicateId => "DUPLICATE_ID",
            Self::DuplicateName => "DUPLICATE_NAME",
            Self::UnknownElementType => "UNKNOWN_ELEMENT_TYPE",
            Self::MissingOptions => "MISSING_OPTIONS",
            Self::InvalidWidth => "INVALID_WIDTH",
            Self::LimitExceeded => "LIMIT_EXCEEDED",
        };
        write!(f, "{}", s)
    }
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(
        kind: ValidationErrorKind,
        location: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create a missing field error.
    pub fn missing_field(location: impl Into<String>, field: &str) -> Self {
        Self::new(
            ValidationErrorKind::MissingField,
            location,
            format!("missing required field '{}'", field),
        )
    }

    /// Create a wrong type error.
    pub fn wrong_type(location: impl Into<String>, expected: &str, found: &str) -> Self {
        Self::new(
            ValidationErrorKind::WrongType,
            location,
            format!("expected {}, got {}", expected, found),
        )
    }

    /// Create a duplicate element ID error.
    pub fn duplicate_id(location: impl Into<String>, id: i64) -> Self {
        Self::new(
            ValidationErrorKind::DuplicateId,
            location,
            format!("duplicate element id {}", id),
        )
    }

    /// Create a duplicate element name error.
    pub fn duplicate_name(location: impl Into<String>, name: &str) -> Self {
        Self::new(
            ValidationErrorKind::DuplicateName,
            location,
            format!("duplicate element name '{}'", name),
        )
    }

    /// Create an unknown element type error.
    pub fn unknown_element_type(location: impl Into<String>, found: &str) -> Self {
        Self::new(
            ValidationErrorKind::UnknownElementType,
            location,
            format!("unknown element type '{}'", found),
        )
    }

    /// Create a missing options error.
    pub fn missing_options(location: impl Into<String>, element_type: &str) -> Self {
        Self::new(
            ValidationErrorKind::MissingOptions,
            location,
            format!(
                "element type '{}' requires a non-empty 'choices' list in options",
                element_type
            ),
        )
    }

    /// Create an invalid width error.
    pub fn invalid_width(location: impl Into<String>, width: i64) -> Self {
        Self::new(
            ValidationErrorKind::InvalidWidth,
            location,
            format!("width must be a positive integer, got {}", width),
        )
    }
}
