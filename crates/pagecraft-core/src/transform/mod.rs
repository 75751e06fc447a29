//! Affine transform operations for overlay placement.
//!
//! Three layers, each using only the one below it:
//! 1. [`Matrix`] - 2x3 affine matrices: constructors, composition, inversion
//! 2. [`TransformDescriptor`] - editable `{x, y, rotation, scaleX, scaleY}` state
//!    and its conversion to and from a matrix
//! 3. Geometry - applying transforms to points and rectangles, pivot-based
//!    rotate/scale, angle snapping and scale clamping
//!
//! # Coordinate System
//!
//! - A matrix `[a, b, c, d, e, f]` maps `(x, y)` to
//!   `(a*x + c*y + e, b*x + d*y + f)`
//! - Rotation angles are in degrees, positive = counter-clockwise in a
//!   y-up frame (clockwise on screen when y grows downwards)
//! - `multiply(m1, m2)` applies `m2` first, then `m1`

mod descriptor;
mod geometry;
mod matrix;

pub use descriptor::{merge, merge_all, normalize, PartialTransform, TransformDescriptor};
pub use geometry::{
    angle_between_points, center_of_rect, clamp_scale, rotate_around_point, scale_around_point,
    scale_around_point_uniform, snap_angle, snap_angle_default, transform_point, transform_rect,
    ScaleLimits, DEFAULT_SNAP_STEP, MIN_SNAP_STEP,
};
pub use matrix::{apply_to_point, compose, invert, multiply, Matrix};
