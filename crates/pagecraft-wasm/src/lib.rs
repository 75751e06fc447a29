//! Pagecraft WASM - WebAssembly bindings for Pagecraft
//!
//! This crate exposes the pagecraft-core transform math to the TypeScript
//! overlay editor.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrappers for matrices, points and rectangles
//! - `transform` - Geometry bindings (bounds, pivot rotate/scale, snapping)
//! - `descriptor` - Transform descriptor conversion, merging and validation
//!
//! # Usage
//!
//! ```typescript
//! import init, { matrix_from_descriptor, transform_rect } from '@pagecraft/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const m = matrix_from_descriptor({ x: 120, y: 80, rotation: 15 });
//! const bounds = transform_rect(0, 0, overlay.width, overlay.height, m);
//! console.log(`Selection: ${bounds.width}x${bounds.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod descriptor;
mod transform;
mod types;

// Re-export public types
pub use descriptor::{
    descriptor_from_matrix, matrix_from_descriptor, merge_descriptors, normalize_descriptor,
    validate_descriptor,
};
pub use transform::{
    angle_between_points, center_of_rect, clamp_scale, rotate_around_point, scale_around_point,
    snap_angle, transform_point, transform_rect,
};
pub use types::{JsMatrix, JsPoint, JsRect};

/// Start hook, run automatically when the module is instantiated.
///
/// Nothing needs setting up: every binding is a pure function.
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Report a failed descriptor check on the browser console.
///
/// Only reachable from `validate_descriptor`, so never called on non-wasm
/// targets.
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(&format!("[pagecraft] {}", message)));
}
