//! WASM-compatible wrapper types for transform values.
//!
//! These wrap the core `Matrix`, `Point` and `Rect` types so JavaScript can
//! hold them as classes with getters instead of plain objects.

use pagecraft_core::{Matrix, Point, Rect};
use wasm_bindgen::prelude::*;

/// A 2D affine matrix for JavaScript.
///
/// Coefficients follow the canvas `setTransform(a, b, c, d, e, f)` order:
/// `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsMatrix {
    inner: Matrix,
}

#[wasm_bindgen]
impl JsMatrix {
    /// Create a matrix from its six coefficients.
    #[wasm_bindgen(constructor)]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> JsMatrix {
        JsMatrix {
            inner: Matrix::new(a, b, c, d, e, f),
        }
    }

    /// The identity matrix.
    pub fn identity() -> JsMatrix {
        Matrix::identity().into()
    }

    /// Translation by `(tx, ty)`.
    pub fn translate(tx: f64, ty: f64) -> JsMatrix {
        Matrix::translate(tx, ty).into()
    }

    /// Scale about the origin. `sy` defaults to `sx`.
    pub fn scale(sx: f64, sy: Option<f64>) -> JsMatrix {
        Matrix::scale(sx, sy.unwrap_or(sx)).into()
    }

    /// Rotation about the origin, in degrees.
    pub fn rotate(angle_degrees: f64) -> JsMatrix {
        Matrix::rotate(angle_degrees).into()
    }

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> f64 {
        self.inner.a
    }

    #[wasm_bindgen(getter)]
    pub fn b(&self) -> f64 {
        self.inner.b
    }

    #[wasm_bindgen(getter)]
    pub fn c(&self) -> f64 {
        self.inner.c
    }

    #[wasm_bindgen(getter)]
    pub fn d(&self) -> f64 {
        self.inner.d
    }

    #[wasm_bindgen(getter)]
    pub fn e(&self) -> f64 {
        self.inner.e
    }

    #[wasm_bindgen(getter)]
    pub fn f(&self) -> f64 {
        self.inner.f
    }

    /// Compose with `inner`: the result applies `inner` first, then `this`.
    pub fn multiply(&self, inner: &JsMatrix) -> JsMatrix {
        self.inner.multiply(&inner.inner).into()
    }

    /// Inverse matrix, or `undefined` when the matrix is singular.
    pub fn invert(&self) -> Option<JsMatrix> {
        self.inner.invert().map(JsMatrix::from)
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> f64 {
        self.inner.determinant()
    }

    /// Apply this matrix to the point `(x, y)`.
    pub fn apply_to_point(&self, x: f64, y: f64) -> JsPoint {
        self.inner.apply_to_point(Point::new(x, y)).into()
    }

    /// Coefficients as a `Float64Array` in `[a, b, c, d, e, f]` order.
    pub fn coefficients(&self) -> Vec<f64> {
        self.inner.to_array().to_vec()
    }
}

impl JsMatrix {
    /// Borrow the core matrix.
    pub(crate) fn as_core(&self) -> &Matrix {
        &self.inner
    }
}

impl From<Matrix> for JsMatrix {
    fn from(inner: Matrix) -> Self {
        Self { inner }
    }
}

/// A point for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsPoint {
    x: f64,
    y: f64,
}

#[wasm_bindgen]
impl JsPoint {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64) -> JsPoint {
        JsPoint { x, y }
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl From<Point> for JsPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// An axis-aligned rectangle for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[wasm_bindgen]
impl JsRect {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> JsRect {
        JsRect {
            x,
            y,
            width,
            height,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl From<Rect> for JsRect {
    fn from(r: Rect) -> Self {
        Self {
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
        }
    }
}
