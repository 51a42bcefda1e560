//! FORMDEF Core Library
//!
//! This crate provides validation and normalization for dynamically
//! configurable form definitions.
//!
//! # Overview
//!
//! A form definition arrives as a raw, loosely-typed document (from a web
//! client or a document store) and leaves as a canonical, strongly-typed
//! [`Form`]: elements sorted by display order, defaults applied, and every
//! invariant checked. Validation accumulates all defects instead of
//! stopping at the first, so a caller gets one complete report per
//! document.
//!
//! # Key Components
//!
//! - **Form**: the canonical document handed to the rendering layer
//! - **FormValidator**: accumulating validator and normalizer
//! - **ValidationLimits**: size/depth/count guards for untrusted input
//!
//! # Example
//!
//! ```
//! use formdef_core::prelude::*;
//!
//! let form = Form::from_json(
//!     r#"{
//!         "id": 1,
//!         "name": "Contact",
//!         "elements": [
//!             {"id": 1, "name": "email", "type": "text",
//!              "required": true, "width": 6}
//!         ]
//!     }"#,
//! )?;
//!
//! assert!(form.get_element("email").unwrap().required);
//! # Ok::<(), FormError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod form;
pub mod prelude;

// Re-export key types at crate root for convenience
pub use error::{FormError, Result};
pub use form::{
    Choice, ElementOptions, ElementType, Form, FormElement, FormValidator, ValidationError,
    ValidationErrorKind, ValidationLimits, ValidationResult,
};
