//! Form validation.
//!
//! This module provides validation and normalization for raw form
//! definitions, including:
//! - Structural validation (field presence, field types, element count)
//! - Semantic validation (uniqueness, known element types, choice rules)
//! - DoS protection (size limits, depth limits)
//!
//! Every defect in a document is reported; validation never stops at the
//! first failure.

mod error;
mod limits;
mod validator;

pub use error::{ValidationError, ValidationErrorKind};
pub use limits::ValidationLimits;
pub use validator::FormValidator;

/// Result of validating a raw form definition: the canonical form, or
/// every defect found.
pub type ValidationResult = Result<crate::form::Form, Vec<ValidationError>>;
