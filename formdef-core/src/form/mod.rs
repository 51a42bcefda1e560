//! Form definition types and validation.
//!
//! This module provides the canonical form model and the validator that
//! produces it from raw, untrusted input:
//!
//! - [`Form`] - The top-level form document
//! - [`FormElement`] - Individual field configuration
//! - [`ElementType`] - The closed set of input widget types
//! - [`ElementOptions`] / [`Choice`] - Typed per-element configuration
//! - [`FormValidator`] - Accumulating validator and normalizer
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "id": 1,
//!   "name": "Contact",
//!   "elements": [
//!     {
//!       "id": 1,
//!       "name": "email",
//!       "type": "text",
//!       "required": true,
//!       "width": 6,
//!       "order": 2
//!     },
//!     {
//!       "id": 2,
//!       "name": "subscribe",
//!       "type": "checkbox",
//!       "width": 2,
//!       "order": 1
//!     }
//!   ]
//! }
//! ```

mod definition;
mod element;
mod options;
mod validation;

pub use definition::Form;
pub use element::{ElementType, FormElement};
pub use options::{Choice, ElementOptions};
pub use validation::{
    FormValidator, ValidationError, ValidationErrorKind, ValidationLimits, ValidationResult,
};
