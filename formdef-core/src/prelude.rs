//! Prelude for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//!
//! ```ignore
//! use formdef_core::prelude::*;
//! ```

// Error handling
pub use crate::error::{FormError, Result};

// Form model and validation
pub use crate::form::{
    Choice, ElementOptions, ElementType, Form, FormElement, FormValidator, ValidationError,
    ValidationErrorKind, ValidationLimits, ValidationResult,
};
