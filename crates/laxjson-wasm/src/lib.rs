//! WASM bindings for laxjson.
//!
//! Exposes `normalize` and `toJson` as `#[wasm_bindgen]` functions that can be
//! called from JavaScript/TypeScript. Built with `wasm-bindgen-cli`:
//!
//! ```sh
//! cargo build -p laxjson-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/laxjson_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

/// Parse lenient input and return its canonical serialization.
///
/// Throws a JS error carrying the byte offset if the input does not parse.
#[wasm_bindgen]
pub fn normalize(input: &[u8]) -> std::result::Result<String, JsValue> {
    let value = laxjson::decode(input).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(laxjson::serialize_to_string(&value))
}

/// Parse lenient input and return it as strict, compact JSON.
#[wasm_bindgen(js_name = toJson)]
pub fn to_json(input: &[u8]) -> std::result::Result<String, JsValue> {
    let value = laxjson::decode(input).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(serde_json::Value::from(&value).to_string())
}
