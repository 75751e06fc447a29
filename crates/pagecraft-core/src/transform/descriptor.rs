//! Editable transform state and its conversion to and from matrices.
//!
//! A [`TransformDescriptor`] is what the editor stores per overlay object:
//! translation, rotation in degrees and a signed scale per axis. Its matrix is
//!
//! ```text
//! translate(x, y) * rotate(rotation) * scale(scale_x, scale_y)
//! ```
//!
//! so scale and rotation happen in the object's local frame before it is
//! moved into place.
//!
//! # Decomposition
//!
//! [`TransformDescriptor::from_matrix`] has no shear term. It is exact only
//! for matrices built by [`TransformDescriptor::to_matrix`] with positive
//! scales. A sheared or reflected matrix decomposes into a descriptor whose
//! matrix differs from the original.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use super::matrix::{compose, Matrix};

/// Position, rotation and scale of an editable object.
///
/// Deserialising fills any missing field with its identity value, so
/// `{"x": 10}` becomes `x = 10, y = 0, rotation = 0, scaleX = 1, scaleY = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformDescriptor {
    /// Horizontal translation
    pub x: f64,
    /// Vertical translation
    pub y: f64,
    /// Rotation in degrees (not normalised to any range)
    pub rotation: f64,
    /// Horizontal scale, negative flips
    pub scale_x: f64,
    /// Vertical scale, negative flips
    pub scale_y: f64,
}

impl Default for TransformDescriptor {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl TransformDescriptor {
    pub fn new(x: f64, y: f64, rotation: f64, scale_x: f64, scale_y: f64) -> Self {
        Self {
            x,
            y,
            rotation,
            scale_x,
            scale_y,
        }
    }

    /// Build `translate(x, y) * rotate(rotation) * scale(scale_x, scale_y)`.
    pub fn to_matrix(&self) -> Matrix {
        compose([
            Matrix::translate(self.x, self.y),
            Matrix::rotate(self.rotation),
            Matrix::scale(self.scale_x, self.scale_y),
        ])
    }

    /// Decompose a matrix, assuming it has no shear.
    ///
    /// - `scale_x = |(a, b)|`, `scale_y = |(c, d)|`
    /// - `rotation = atan2(b, a)` in degrees, in `[-180, 180]`
    /// - `x = e`, `y = f`
    ///
    /// Scales come back non-negative, so a flipped axis turns into a rotation
    /// or is lost. See the module docs for when this round-trips.
    pub fn from_matrix(m: &Matrix) -> Self {
        Self {
            x: m.e,
            y: m.f,
            rotation: m.b.atan2(m.a).to_degrees(),
            scale_x: m.a.hypot(m.b),
            scale_y: m.c.hypot(m.d),
        }
    }
}

impl From<TransformDescriptor> for Matrix {
    fn from(t: TransformDescriptor) -> Matrix {
        t.to_matrix()
    }
}

impl From<&TransformDescriptor> for Matrix {
    fn from(t: &TransformDescriptor) -> Matrix {
        t.to_matrix()
    }
}

/// Partially specified transform, as received from loosely-typed input.
///
/// Deserialising never fails on a bad field: anything that is not a number
/// (a string, `null`, a nested object) is read as missing. Numbers are kept
/// as they are, including NaN and infinities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialTransform {
    #[serde(deserialize_with = "lenient_number")]
    pub x: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub y: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub rotation: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub scale_x: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub scale_y: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeNumber {
    Number(f64),
    Other(#[allow(dead_code)] IgnoredAny),
}

/// Read a field as `Some(number)`, or `None` for any non-numeric value.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match MaybeNumber::deserialize(deserializer)? {
        MaybeNumber::Number(n) => Some(n),
        MaybeNumber::Other(_) => None,
    })
}

impl From<PartialTransform> for TransformDescriptor {
    fn from(partial: PartialTransform) -> Self {
        normalize(&partial)
    }
}

/// Fill missing fields with identity values.
///
/// This is the single place the defaulting rule lives; everything downstream
/// works on complete [`TransformDescriptor`]s.
pub fn normalize(partial: &PartialTransform) -> TransformDescriptor {
    let defaults = TransformDescriptor::default();
    TransformDescriptor {
        x: partial.x.unwrap_or(defaults.x),
        y: partial.y.unwrap_or(defaults.y),
        rotation: partial.rotation.unwrap_or(defaults.rotation),
        scale_x: partial.scale_x.unwrap_or(defaults.scale_x),
        scale_y: partial.scale_y.unwrap_or(defaults.scale_y),
    }
}

/// Compose two descriptors: `b` is applied first, then `a`.
///
/// The product is decomposed back into a descriptor, so any shear created by
/// combining a rotation with a non-uniform scale is dropped.
pub fn merge(a: &TransformDescriptor, b: &TransformDescriptor) -> TransformDescriptor {
    TransformDescriptor::from_matrix(&(a.to_matrix() * b.to_matrix()))
}

/// Compose a chain of descriptors, outermost first, decomposing once at the end.
pub fn merge_all<I>(descriptors: I) -> TransformDescriptor
where
    I: IntoIterator<Item = TransformDescriptor>,
{
    TransformDescriptor::from_matrix(&compose(descriptors.into_iter().map(Matrix::from)))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for descriptors with strictly positive scales (the exact case).
    fn descriptor_strategy() -> impl Strategy<Value = TransformDescriptor> {
        (
            -1000.0f64..1000.0, // x
            -1000.0f64..1000.0, // y
            -720.0f64..720.0,   // rotation
            0.01f64..100.0,     // scale_x
            0.01f64..100.0,     // scale_y
        )
            .prop_map(|(x, y, rotation, scale_x, scale_y)| {
                TransformDescriptor::new(x, y, rotation, scale_x, scale_y)
            })
    }

    proptest! {
        /// Property: to_matrix then from_matrix reproduces the descriptor.
        #[test]
        fn prop_roundtrip_without_shear(t in descriptor_strategy()) {
            let back = TransformDescriptor::from_matrix(&t.to_matrix());

            prop_assert!((back.x - t.x).abs() < 1e-6);
            prop_assert!((back.y - t.y).abs() < 1e-6);
            prop_assert!((back.scale_x - t.scale_x).abs() < 1e-6);
            prop_assert!((back.scale_y - t.scale_y).abs() < 1e-6);

            let d = (back.rotation - t.rotation).rem_euclid(360.0);
            prop_assert!(d.min(360.0 - d) < 1e-6, "rotation {} vs {}", back.rotation, t.rotation);
        }

        /// Property: decomposed rotation is always in [-180, 180].
        #[test]
        fn prop_decomposed_rotation_in_range(t in descriptor_strategy()) {
            let back = TransformDescriptor::from_matrix(&t.to_matrix());
            prop_assert!(back.rotation >= -180.0 - 1e-9 && back.rotation <= 180.0 + 1e-9);
        }

        /// Property: normalize never changes fields that were provided.
        #[test]
        fn prop_normalize_preserves_given_fields(
            x in prop::option::of(-1000.0f64..1000.0),
            rotation in prop::option::of(-360.0f64..360.0),
            scale_y in prop::option::of(-10.0f64..10.0),
        ) {
            let partial = PartialTransform { x, rotation, scale_y, ..Default::default() };
            let t = normalize(&partial);

            prop_assert_eq!(t.x, x.unwrap_or(0.0));
            prop_assert_eq!(t.y, 0.0);
            prop_assert_eq!(t.rotation, rotation.unwrap_or(0.0));
            prop_assert_eq!(t.scale_x, 1.0);
            prop_assert_eq!(t.scale_y, scale_y.unwrap_or(1.0));
        }
    }
}
