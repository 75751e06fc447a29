//! 2D affine matrices.
//!
//! A [`Matrix`] holds the six coefficients of an affine map with an implicit
//! third row `(0, 0, 1)`:
//!
//! ```text
//! | a c e |   | x |
//! | b d f | * | y |
//! | 0 0 1 |   | 1 |
//! ```
//!
//! All operations return new values; nothing mutates its inputs.

use std::ops::Mul;

use crate::Point;

/// A 2D affine transform `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// The identity transform `(1, 0, 0, 1, 0, 0)`.
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// Pure translation by `(tx, ty)`.
    pub fn translate(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Non-uniform scale about the origin. Negative factors flip the axis.
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Uniform scale about the origin.
    pub fn uniform_scale(s: f64) -> Self {
        Self::scale(s, s)
    }

    /// Rotation about the origin by `angle_degrees`.
    ///
    /// `rotate(90)` maps `(1, 0)` to `(0, 1)`.
    pub fn rotate(angle_degrees: f64) -> Self {
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Determinant of the linear part, `a*d - b*c`.
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// True unless the determinant is exactly zero.
    pub fn is_invertible(&self) -> bool {
        self.determinant() != 0.0
    }

    /// Coefficients in `[a, b, c, d, e, f]` order.
    pub fn to_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// Compose with `inner`: the result applies `inner` first, then `self`.
    pub fn multiply(&self, inner: &Matrix) -> Matrix {
        multiply(self, inner)
    }

    /// See [`invert`].
    pub fn invert(&self) -> Option<Matrix> {
        invert(self)
    }

    /// Evaluate the map at `p`.
    pub fn apply_to_point(&self, p: Point) -> Point {
        apply_to_point(self, p)
    }
}

impl From<[f64; 6]> for Matrix {
    fn from([a, b, c, d, e, f]: [f64; 6]) -> Self {
        Self::new(a, b, c, d, e, f)
    }
}

impl From<Matrix> for [f64; 6] {
    fn from(m: Matrix) -> Self {
        m.to_array()
    }
}

/// `outer * inner`: applies `inner` first, then `outer`.
impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, inner: Matrix) -> Matrix {
        multiply(&self, &inner)
    }
}

/// Compose two transforms so that the result applies `m2` first, then `m1`.
///
/// Callers depend on this order: `multiply(translate, rotate)` rotates the
/// point about the origin and then moves it.
pub fn multiply(m1: &Matrix, m2: &Matrix) -> Matrix {
    Matrix {
        a: m1.a * m2.a + m1.c * m2.b,
        b: m1.b * m2.a + m1.d * m2.b,
        c: m1.a * m2.c + m1.c * m2.d,
        d: m1.b * m2.c + m1.d * m2.d,
        e: m1.a * m2.e + m1.c * m2.f + m1.e,
        f: m1.b * m2.e + m1.d * m2.f + m1.f,
    }
}

/// Compute the inverse of an affine matrix.
///
/// Returns `None` when the determinant is exactly zero, e.g. a zero scale.
/// A singular matrix is an expected outcome, not an error.
pub fn invert(m: &Matrix) -> Option<Matrix> {
    let det = m.determinant();
    if det == 0.0 {
        return None;
    }

    let inv_det = 1.0 / det;
    Some(Matrix {
        a: m.d * inv_det,
        b: -m.b * inv_det,
        c: -m.c * inv_det,
        d: m.a * inv_det,
        e: (m.c * m.f - m.d * m.e) * inv_det,
        f: (m.b * m.e - m.a * m.f) * inv_det,
    })
}

/// Apply an affine transform to a point.
pub fn apply_to_point(m: &Matrix, p: Point) -> Point {
    Point {
        x: m.a * p.x + m.c * p.y + m.e,
        y: m.b * p.x + m.d * p.y + m.f,
    }
}

/// Compose a chain of transforms, outermost first.
///
/// `compose([a, b, c])` equals `multiply(a, multiply(b, c))`: `c` is applied
/// first. An empty chain yields the identity.
pub fn compose<I>(matrices: I) -> Matrix
where
    I: IntoIterator<Item = Matrix>,
{
    matrices
        .into_iter()
        .fold(Matrix::identity(), |acc, m| multiply(&acc, &m))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
