//! Geometry helpers for interactive move/rotate/resize handles.
//!
//! The pivot operations work on points directly instead of building a
//! translate-rotate-translate matrix chain. For rotation by angle θ about a
//! pivot `c`:
//!
//! ```text
//! x' = (x - cx) * cos(θ) - (y - cy) * sin(θ) + cx
//! y' = (x - cx) * sin(θ) + (y - cy) * cos(θ) + cy
//! ```

use serde::{Deserialize, Serialize};

use super::matrix::{apply_to_point, Matrix};
use crate::{Point, Rect};

/// Default increment for [`snap_angle`], in degrees.
pub const DEFAULT_SNAP_STEP: f64 = 15.0;

/// Smallest snap increment; smaller steps are raised to this.
pub const MIN_SNAP_STEP: f64 = 1.0;

/// Allowed range for interactive scale factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleLimits {
    /// Smallest allowed scale factor
    pub min: f64,
    /// Largest allowed scale factor
    pub max: f64,
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self {
            min: 0.1,
            max: 10.0,
        }
    }
}

impl ScaleLimits {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into `[min, max]`.
    ///
    /// Unlike `f64::clamp` this never panics: with `min > max` the result
    /// is `max`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Apply a matrix, or anything convertible to one such as a
/// [`TransformDescriptor`](super::TransformDescriptor), to a point.
pub fn transform_point<M>(point: Point, transform: M) -> Point
where
    M: Into<Matrix>,
{
    apply_to_point(&transform.into(), point)
}

/// Axis-aligned bounding box of a transformed rectangle.
///
/// All four corners are mapped through `m` and the min/max over x and y is
/// taken. Rotation or shear inflates the box: the result answers "what
/// axis-aligned box contains the transformed shape", not "what is the
/// transformed outline".
pub fn transform_rect(rect: Rect, m: &Matrix) -> Rect {
    let [tl, tr, bl, br] = rect.corners().map(|p| apply_to_point(m, p));
    Rect::enclosing(tl, [tr, bl, br])
}

/// Center point of a rectangle.
pub fn center_of_rect(rect: Rect) -> Point {
    rect.center()
}

/// Rotate `point` about `pivot` by `angle_degrees`.
///
/// Same result as applying
/// `translate(pivot) * rotate(angle) * translate(-pivot)`.
pub fn rotate_around_point(point: Point, pivot: Point, angle_degrees: f64) -> Point {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let dx = point.x - pivot.x;
    let dy = point.y - pivot.y;

    Point {
        x: dx * cos - dy * sin + pivot.x,
        y: dx * sin + dy * cos + pivot.y,
    }
}

/// Scale `point` away from (or towards) `pivot`.
pub fn scale_around_point(point: Point, pivot: Point, sx: f64, sy: f64) -> Point {
    Point {
        x: (point.x - pivot.x) * sx + pivot.x,
        y: (point.y - pivot.y) * sy + pivot.y,
    }
}

/// Uniform form of [`scale_around_point`].
pub fn scale_around_point_uniform(point: Point, pivot: Point, s: f64) -> Point {
    scale_around_point(point, pivot, s, s)
}

/// Direction from `p1` to `p2` in degrees, in `[-180, 180]`.
///
/// Used to turn a rotation-handle drag into an angle. Both ends of the range
/// are reachable: a negative-zero `dy` pointing left gives `-180`.
pub fn angle_between_points(p1: Point, p2: Point) -> f64 {
    (p2.y - p1.y).atan2(p2.x - p1.x).to_degrees()
}

/// Round `degrees` to the nearest multiple of `step_degrees`.
///
/// Steps below [`MIN_SNAP_STEP`] (including zero, negative and NaN) are
/// raised to it. Halfway values round towards positive infinity, so
/// `snap_angle(-7.5, 15.0)` is `0.0`.
pub fn snap_angle(degrees: f64, step_degrees: f64) -> f64 {
    let step = step_degrees.max(MIN_SNAP_STEP);
    (degrees / step + 0.5).floor() * step
}

/// [`snap_angle`] with the default 15° step.
pub fn snap_angle_default(degrees: f64) -> f64 {
    snap_angle(degrees, DEFAULT_SNAP_STEP)
}

/// Clamp a scale factor into the default `[0.1, 10]` range.
pub fn clamp_scale(value: f64) -> f64 {
    ScaleLimits::default().clamp(value)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::transform::multiply;
    use proptest::prelude::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    /// Strategy for rectangles with non-negative size.
    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            -500.0f64..500.0,
            -500.0f64..500.0,
            0.0f64..500.0,
            0.0f64..500.0,
        )
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        /// Property: pivot rotation equals the translate-rotate-translate chain.
        #[test]
        fn prop_pivot_rotation_matches_chain(
            p in point_strategy(),
            pivot in point_strategy(),
            angle in -720.0f64..720.0,
        ) {
            let chain = multiply(
                &Matrix::translate(pivot.x, pivot.y),
                &multiply(&Matrix::rotate(angle), &Matrix::translate(-pivot.x, -pivot.y)),
            );
            let expected = chain.apply_to_point(p);
            let actual = rotate_around_point(p, pivot, angle);

            prop_assert!((actual.x - expected.x).abs() < 1e-9, "{:?} vs {:?}", actual, expected);
            prop_assert!((actual.y - expected.y).abs() < 1e-9, "{:?} vs {:?}", actual, expected);
        }

        /// Property: pivot scaling equals the translate-scale-translate chain.
        #[test]
        fn prop_pivot_scale_matches_chain(
            p in point_strategy(),
            pivot in point_strategy(),
            sx in -10.0f64..10.0,
            sy in -10.0f64..10.0,
        ) {
            let chain = multiply(
                &Matrix::translate(pivot.x, pivot.y),
                &multiply(&Matrix::scale(sx, sy), &Matrix::translate(-pivot.x, -pivot.y)),
            );
            let expected = chain.apply_to_point(p);
            let actual = scale_around_point(p, pivot, sx, sy);

            prop_assert!((actual.x - expected.x).abs() < 1e-9);
            prop_assert!((actual.y - expected.y).abs() < 1e-9);
        }

        /// Property: transformed corners all lie inside the bounding box.
        #[test]
        fn prop_bounding_box_contains_corners(
            rect in rect_strategy(),
            angle in -360.0f64..360.0,
            sx in 0.1f64..10.0,
            sy in 0.1f64..10.0,
        ) {
            let m = multiply(&Matrix::rotate(angle), &Matrix::scale(sx, sy));
            let bounds = transform_rect(rect, &m);

            prop_assert!(bounds.width >= 0.0 && bounds.height >= 0.0);
            for corner in rect.corners() {
                let q = m.apply_to_point(corner);
                prop_assert!(q.x >= bounds.x - 1e-9 && q.x <= bounds.x + bounds.width + 1e-9);
                prop_assert!(q.y >= bounds.y - 1e-9 && q.y <= bounds.y + bounds.height + 1e-9);
            }
        }

        /// Property: snapped angles are multiples of the step and within half a step.
        #[test]
        fn prop_snap_within_half_step(degrees in -1000.0f64..1000.0, step in 1.0f64..90.0) {
            let snapped = snap_angle(degrees, step);
            prop_assert!((snapped - degrees).abs() <= step / 2.0 + 1e-9);

            let multiple = snapped / step;
            prop_assert!((multiple - multiple.round()).abs() < 1e-9);
        }

        /// Property: clamped scale is always within the default limits.
        #[test]
        fn prop_clamp_scale_in_range(value in -1000.0f64..1000.0) {
            let clamped = clamp_scale(value);
            prop_assert!((0.1..=10.0).contains(&clamped));
        }
    }
}
