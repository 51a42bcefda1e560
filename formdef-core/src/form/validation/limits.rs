//! Validation limits for untrusted form documents.

use super::error::{ValidationError, ValidationErrorKind};

/// Limits applied to raw form documents before and during validation.
///
/// Form definitions arrive from untrusted sources; these bounds reject
/// oversized or pathologically nested payloads before they reach the
/// semantic checks.
#[derive(Debug, Clone)]
pub struct ValidationLimits {
    /// Maximum raw content size in bytes (default: 1MB).
    pub max_file_size: usize,
    /// Maximum nesting depth of the parsed document (default: 32).
    pub max_nesting_depth: usize,
    /// Maximum number of elements in a form (default: 500).
    pub max_element_count: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_file_size: 1024 * 1024, // 1MB
            max_nesting_depth: 32,
            max_element_count: 500,
        }
    }
}

impl ValidationLimits {
    /// Create new validation limits with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum content size.
    pub fn with_max_file_size(mut self, size: usize) -> Self {
        self.max_file_size = size;
        self
    }

    /// Set maximum nesting depth.
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// Set maximum element count.
    pub fn with_max_element_count(mut self, count: usize) -> Self {
        self.max_element_count = count;
        self
    }

    /// Validate raw content size before parsing.
    pub fn validate_content_size(&self, content: &str) -> Result<(), ValidationError> {
        if content.len() > self.max_file_size {
            return Err(ValidationError::new(
                ValidationErrorKind::LimitExceeded,
                "form",
                format!(
                    "content size ({} bytes) exceeds maximum allowed ({} bytes)",
                    content.len(),
                    self.max_file_size
                ),
            ));
        }
        Ok(())
    }

    /// Validate nesting depth of a parsed document.
    ///
    /// Uses a hard recursion cap slightly above `max_nesting_depth` so a
    /// maliciously nested payload is rejected before it can overflow the
    /// stack.
    pub fn validate_nesting_depth(&self, value: &serde_json::Value) -> Result<(), ValidationError> {
        let hard_limit = self.max_nesting_depth.saturating_add(10);

        match Self::measure_depth_limited(value, hard_limit) {
            Ok(depth) if depth > self.max_nesting_depth => Err(ValidationError::new(
                ValidationErrorKind::LimitExceeded,
                "form",
                format!(
                    "nesting depth ({}) exceeds maximum allowed ({})",
                    depth, self.max_nesting_depth
                ),
            )),
            Ok(_) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Measure the maximum nesting depth with a hard recursion limit.
    ///
    /// Returns `Err` if the recursion limit is exceeded.
    fn measure_depth_limited(
        value: &serde_json::Value,
        remaining: usize,
    ) -> Result<usize, ValidationError> {
        if remaining == 0 {
            return Err(ValidationError::new(
                ValidationErrorKind::LimitExceeded,
                "form",
                "recursion depth exceeded hard limit (possible attack)",
            ));
        }

        match value {
            serde_json::Value::Object(map) => {
                let mut max_child = 0;
                for child in map.values() {
                    let child_depth = Self::measure_depth_limited(child, remaining - 1)?;
                    max_child = max_child.max(child_depth);
                }
                Ok(1 + max_child)
            }
            serde_json::Value::Array(seq) => {
                let mut max_child = 0;
                for child in seq {
                    let child_depth = Self::measure_depth_limited(child, remaining - 1)?;
                    max_child = max_child.max(child_depth);
                }
                Ok(1 + max_child)
            }
            _ => Ok(1),
        }
    }

    /// Measure the maximum nesting depth of a parsed value.
    ///
    /// Simple version without the recursion cap, used only in tests.
    #[cfg(test)]
    pub(crate) fn measure_depth(value: &serde_json::Value) -> usize {
        match value {
            serde_json::Value::Object(map) => {
                1 + map.values().map(Self::measure_depth).max().unwrap_or(0)
            }
            serde_json::Value::Array(seq) => {
                1 + seq.iter().map(Self::measure_depth).max().unwrap_or(0)
            }
            _ => 1,
        }
    }
}
