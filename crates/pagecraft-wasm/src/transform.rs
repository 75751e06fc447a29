//! WASM bindings for geometry operations.
//!
//! These back the interactive handles in the overlay editor: dragging a
//! rotation handle, resizing around an anchor, computing selection bounds.

use crate::types::{JsMatrix, JsPoint, JsRect};
use pagecraft_core::transform::{
    angle_between_points as core_angle, center_of_rect as core_center,
    rotate_around_point as core_rotate_around, scale_around_point as core_scale_around,
    snap_angle as core_snap, transform_point as core_transform_point,
    transform_rect as core_transform_rect, ScaleLimits, DEFAULT_SNAP_STEP,
};
use pagecraft_core::{Point, Rect};
use wasm_bindgen::prelude::*;

/// Apply a matrix to the point `(x, y)`.
#[wasm_bindgen]
pub fn transform_point(x: f64, y: f64, matrix: &JsMatrix) -> JsPoint {
    core_transform_point(Point::new(x, y), *matrix.as_core()).into()
}

/// Axis-aligned bounding box of a rectangle after transformation.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const m = JsMatrix.rotate(45);
/// const bounds = transform_rect(0, 0, 10, 10, m);
/// // bounds.width ≈ 14.142
/// ```
#[wasm_bindgen]
pub fn transform_rect(x: f64, y: f64, width: f64, height: f64, matrix: &JsMatrix) -> JsRect {
    core_transform_rect(Rect::new(x, y, width, height), matrix.as_core()).into()
}

/// Center of a rectangle.
#[wasm_bindgen]
pub fn center_of_rect(x: f64, y: f64, width: f64, height: f64) -> JsPoint {
    core_center(Rect::new(x, y, width, height)).into()
}

/// Rotate `(x, y)` about the pivot `(pivot_x, pivot_y)`.
#[wasm_bindgen]
pub fn rotate_around_point(
    x: f64,
    y: f64,
    pivot_x: f64,
    pivot_y: f64,
    angle_degrees: f64,
) -> JsPoint {
    core_rotate_around(Point::new(x, y), Point::new(pivot_x, pivot_y), angle_degrees).into()
}

/// Scale `(x, y)` about the pivot `(pivot_x, pivot_y)`. `sy` defaults to `sx`.
#[wasm_bindgen]
pub fn scale_around_point(
    x: f64,
    y: f64,
    pivot_x: f64,
    pivot_y: f64,
    sx: f64,
    sy: Option<f64>,
) -> JsPoint {
    core_scale_around(
        Point::new(x, y),
        Point::new(pivot_x, pivot_y),
        sx,
        sy.unwrap_or(sx),
    )
    .into()
}

/// Direction from `(x1, y1)` to `(x2, y2)` in degrees.
#[wasm_bindgen]
pub fn angle_between_points(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    core_angle(Point::new(x1, y1), Point::new(x2, y2))
}

/// Round to the nearest multiple of `step_degrees` (default 15, minimum 1).
#[wasm_bindgen]
pub fn snap_angle(degrees: f64, step_degrees: Option<f64>) -> f64 {
    core_snap(degrees, step_degrees.unwrap_or(DEFAULT_SNAP_STEP))
}

/// Clamp a scale factor into `[min, max]` (defaults 0.1 and 10).
#[wasm_bindgen]
pub fn clamp_scale(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let defaults = ScaleLimits::default();
    ScaleLimits::new(min.unwrap_or(defaults.min), max.unwrap_or(defaults.max)).clamp(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_transform_point() {
        let p = transform_point(2.0, 3.0, &JsMatrix::translate(1.0, 1.0));
        assert_eq!((p.x(), p.y()), (3.0, 4.0));
    }

    #[test]
    fn test_transform_rect_rotated() {
        let r = transform_rect(0.0, 0.0, 10.0, 10.0, &JsMatrix::rotate(45.0));
        assert!((r.width() - 200f64.sqrt()).abs() < EPS);
        assert!((r.height() - 200f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_center_of_rect() {
        let c = center_of_rect(0.0, 0.0, 100.0, 50.0);
        assert_eq!((c.x(), c.y()), (50.0, 25.0));
    }

    #[test]
    fn test_rotate_around_point() {
        let p = rotate_around_point(20.0, 10.0, 10.0, 10.0, 90.0);
        assert!((p.x() - 10.0).abs() < EPS);
        assert!((p.y() - 20.0).abs() < EPS);
    }

    #[test]
    fn test_scale_around_point_uniform_default() {
        let p = scale_around_point(4.0, 4.0, 2.0, 2.0, 3.0, None);
        assert_eq!((p.x(), p.y()), (8.0, 8.0));
    }

    #[test]
    fn test_scale_around_point_non_uniform() {
        let p = scale_around_point(4.0, 4.0, 2.0, 2.0, 3.0, Some(0.5));
        assert_eq!((p.x(), p.y()), (8.0, 3.0));
    }

    #[test]
    fn test_angle_between_points() {
        assert!((angle_between_points(0.0, 0.0, 0.0, 5.0) - 90.0).abs() < EPS);
    }

    #[test]
    fn test_snap_angle_defaults() {
        assert_eq!(snap_angle(37.0, None), 30.0);
        assert_eq!(snap_angle(38.0, None), 45.0);
        assert_eq!(snap_angle(10.0, Some(0.0)), 10.0);
        assert_eq!(snap_angle(44.0, Some(90.0)), 0.0);
    }

    #[test]
    fn test_clamp_scale_defaults() {
        assert_eq!(clamp_scale(0.01, None, None), 0.1);
        assert_eq!(clamp_scale(50.0, None, None), 10.0);
        assert_eq!(clamp_scale(3.0, None, None), 3.0);
    }

    #[test]
    fn test_clamp_scale_custom_bounds() {
        assert_eq!(clamp_scale(0.3, Some(0.5), None), 0.5);
        assert_eq!(clamp_scale(8.0, None, Some(4.0)), 4.0);
    }
}
