//! Transform descriptor WASM bindings.
//!
//! Descriptors cross the boundary as plain JavaScript objects
//! (`{ x, y, rotation, scaleX, scaleY }`) via serde_wasm_bindgen. Input is
//! never rejected: missing fields, non-numeric fields and non-object input all
//! take identity values, and NaN or Infinity flow through the math unchanged.
//! Callers that care run [`validate_descriptor`] first.

use crate::types::JsMatrix;
use crate::warn;
use pagecraft_core::transform::{
    merge as core_merge, normalize as core_normalize, PartialTransform, TransformDescriptor,
};
use pagecraft_core::validate_transform;
use wasm_bindgen::prelude::*;

/// Field names as they appear on the JavaScript object.
const FIELDS: [&str; 5] = ["x", "y", "rotation", "scaleX", "scaleY"];

/// Read a descriptor object, filling anything unusable with identity values.
fn parse_descriptor(value: JsValue) -> TransformDescriptor {
    if value.is_undefined() || value.is_null() {
        return TransformDescriptor::default();
    }
    let partial: PartialTransform = serde_wasm_bindgen::from_value(value).unwrap_or_default();
    core_normalize(&partial)
}

fn to_js(descriptor: &TransformDescriptor) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(descriptor).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Build the matrix for a descriptor object.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const m = matrix_from_descriptor({ x: 100, y: 50, rotation: 30 });
/// ctx.setTransform(m.a, m.b, m.c, m.d, m.e, m.f);
/// ```
#[wasm_bindgen]
pub fn matrix_from_descriptor(descriptor: JsValue) -> JsMatrix {
    parse_descriptor(descriptor).to_matrix().into()
}

/// Decompose a matrix into a descriptor object.
///
/// Exact only for matrices without shear or reflection.
#[wasm_bindgen]
pub fn descriptor_from_matrix(matrix: &JsMatrix) -> Result<JsValue, JsValue> {
    to_js(&TransformDescriptor::from_matrix(matrix.as_core()))
}

/// Fill in missing fields of a descriptor object.
#[wasm_bindgen]
pub fn normalize_descriptor(descriptor: JsValue) -> Result<JsValue, JsValue> {
    to_js(&parse_descriptor(descriptor))
}

/// Compose two descriptor objects: `inner` is applied first, then `outer`.
#[wasm_bindgen]
pub fn merge_descriptors(outer: JsValue, inner: JsValue) -> Result<JsValue, JsValue> {
    let outer = parse_descriptor(outer);
    let inner = parse_descriptor(inner);
    to_js(&core_merge(&outer, &inner))
}

/// Check that every field present on a descriptor object is a finite number.
///
/// `undefined` and `null` (for the whole object or a single field) count as
/// missing and pass. The first failure is reported on the console.
#[wasm_bindgen]
pub fn validate_descriptor(descriptor: JsValue) -> bool {
    match read_strict(&descriptor) {
        Ok(partial) => match validate_transform(&core_normalize(&partial)) {
            Ok(()) => true,
            Err(e) => {
                warn(&e.to_string());
                false
            }
        },
        Err(message) => {
            warn(&message);
            false
        }
    }
}

/// Read the descriptor fields, failing on any value that is present but not a number.
fn read_strict(descriptor: &JsValue) -> Result<PartialTransform, String> {
    let mut partial = PartialTransform::default();
    if descriptor.is_undefined() || descriptor.is_null() {
        return Ok(partial);
    }
    if !descriptor.is_object() {
        return Err("Transform must be an object".to_string());
    }

    let slots = [
        &mut partial.x,
        &mut partial.y,
        &mut partial.rotation,
        &mut partial.scale_x,
        &mut partial.scale_y,
    ];
    for (field, slot) in FIELDS.into_iter().zip(slots) {
        let value = js_sys::Reflect::get(descriptor, &JsValue::from_str(field))
            .map_err(|_| format!("Transform field `{}` could not be read", field))?;
        if value.is_undefined() || value.is_null() {
            continue;
        }
        *slot = Some(
            value
                .as_f64()
                .ok_or_else(|| format!("Transform field `{}` must be a number", field))?,
        );
    }

    Ok(partial)
}
