//! WASM bindings for litexpr-core.
//!
//! Exposes `evaluate` and `generate` as `#[wasm_bindgen]` functions that can be
//! called from JavaScript/TypeScript. Built with `wasm-bindgen-cli`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p litexpr-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/litexpr-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/litexpr_wasm.wasm
//! ```
//!
//! A JS host turns `generate`'s output into a function with
//! `new Function(generate(src))`; string content is already escaped, so the
//! text cannot inject code.

use wasm_bindgen::prelude::*;

/// Compile and evaluate a literal expression.
///
/// Returns the value as compact JSON, or throws a JS error if compilation fails.
#[wasm_bindgen]
pub fn evaluate(source: &str) -> std::result::Result<String, JsValue> {
    evaluate_json(source).map_err(|e| JsValue::from_str(&e))
}

/// Compile a literal expression into a function body such as `return [1,"a"];`.
///
/// Throws a JS error if compilation fails.
#[wasm_bindgen]
pub fn generate(source: &str) -> std::result::Result<String, JsValue> {
    litexpr_core::compile(source)
        .map(|callable| callable.source().to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn evaluate_json(source: &str) -> std::result::Result<String, String> {
    let callable = litexpr_core::compile(source).map_err(|e| e.to_string())?;
    let value = serde_json::Value::from(callable.call());
    serde_json::to_string(&value).map_err(|e| e.to_string())
}
