// WASM API bindings - JavaScript-callable functions

use wasm_bindgen::prelude::*;

use crate::util::sort::{compare_tag_names_sign, sort_tag_names};

/// Compare two tag names, returning -1, 0 or 1
///
/// Suitable for `Array.prototype.sort` directly.
#[wasm_bindgen(js_name = compareTagNames)]
pub fn compare_tag_names(a: &str, b: &str) -> i32 {
    compare_tag_names_sign(a, b)
}

/// Sort an array of tag names, returning a new array
///
/// # Errors
/// Returns a JsValue error if `names_js` is not an array of strings
#[wasm_bindgen(js_name = sortTagNames)]
pub fn sort_names(names_js: JsValue) -> Result<JsValue, JsValue> {
    let mut names: Vec<String> = serde_wasm_bindgen::from_value(names_js)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse names: {}", e)))?;

    sort_tag_names(&mut names);

    serde_wasm_bindgen::to_value(&names)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize names: {}", e)))
}
