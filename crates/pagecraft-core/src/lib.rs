//! Pagecraft Core - 2D transform algebra for page overlays
//!
//! This crate provides the position/rotation/scale math behind editable
//! objects placed on a page canvas: affine matrices, human-editable
//! transform descriptors, and the geometry helpers used by interactive
//! move/rotate/resize handles.
//!
//! Everything here is a pure function over `Copy` value types. Input hygiene
//! (rejecting NaN or infinite values) lives in [`validate`] and is the
//! caller's responsibility.

use std::ops::{Add, Neg, Sub};

pub mod transform;
pub mod validate;

pub use transform::{
    angle_between_points, apply_to_point, center_of_rect, clamp_scale, compose, invert, merge,
    merge_all, multiply, normalize, rotate_around_point, scale_around_point,
    scale_around_point_uniform, snap_angle, snap_angle_default, transform_point, transform_rect,
    Matrix, PartialTransform, ScaleLimits, TransformDescriptor,
};
pub use validate::{is_number, sanitize_number, validate_transform, NumberBounds, ValidationError};

/// A point in page coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Axis-aligned rectangle.
///
/// `(x, y)` is the top-left corner. Width and height are expected to be
/// non-negative; they are not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Corners in order: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Point; 4] {
        let right = self.x + self.width;
        let bottom = self.y + self.height;
        [
            Point::new(self.x, self.y),
            Point::new(right, self.y),
            Point::new(self.x, bottom),
            Point::new(right, bottom),
        ]
    }

    /// Center of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Smallest axis-aligned rectangle containing every point.
    ///
    /// Returns `None` for an empty iterator.
    pub fn bounding<I>(points: I) -> Option<Rect>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(Rect::enclosing(first, points))
    }

    /// Smallest axis-aligned rectangle containing `first` and every point in `rest`.
    pub fn enclosing<I>(first: Point, rest: I) -> Rect
    where
        I: IntoIterator<Item = Point>,
    {
        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x, first.y);
        for p in rest {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}
