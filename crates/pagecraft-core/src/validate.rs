//! Input hygiene for values headed into the transform math.
//!
//! The math in [`crate::transform`] assumes finite inputs and never checks.
//! Callers that accept numbers from users or storage run them through these
//! helpers first.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::TransformDescriptor;

/// Error types for transform validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A descriptor field is NaN or infinite.
    #[error("Transform field `{field}` must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

/// Bounds and fallback for [`sanitize_number`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberBounds {
    pub min: f64,
    pub max: f64,
    /// Returned for missing or non-finite input
    pub default: f64,
}

impl Default for NumberBounds {
    fn default() -> Self {
        Self {
            min: f64::MIN,
            max: f64::MAX,
            default: 0.0,
        }
    }
}

/// True if `value` is a usable number (not NaN, not infinite).
#[inline]
pub fn is_number(value: f64) -> bool {
    value.is_finite()
}

/// Turn an optional, possibly non-finite number into a value within bounds.
///
/// Missing or non-finite input yields `bounds.default` unchanged; anything
/// else is clamped into `[min, max]`.
pub fn sanitize_number(value: Option<f64>, bounds: &NumberBounds) -> f64 {
    match value {
        Some(v) if is_number(v) => v.max(bounds.min).min(bounds.max),
        _ => bounds.default,
    }
}

/// Check that every field of a descriptor is finite.
///
/// Reports the first offending field in declaration order.
pub fn validate_transform(t: &TransformDescriptor) -> Result<(), ValidationError> {
    let fields = [
        ("x", t.x),
        ("y", t.y),
        ("rotation", t.rotation),
        ("scaleX", t.scale_x),
        ("scaleY", t.scale_y),
    ];

    match fields.into_iter().find(|(_, value)| !is_number(*value)) {
        Some((field, value)) => Err(ValidationError::NonFinite { field, value }),
        None => Ok(()),
    }
}
