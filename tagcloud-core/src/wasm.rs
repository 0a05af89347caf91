//! WASM bindings for the tagcloud-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.

use log::error;
use wasm_bindgen::prelude::*;

use crate::output::{build_cloud, CloudOutput};

/// Route `log` output and panics to the browser console.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Keeps the existing logger if the module is started twice.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Lay out a tag cloud.
///
/// Takes a JSON `CloudRequest` and returns a JSON `CloudOutput`. Invalid
/// requests come back as an output whose `error` field is set.
#[wasm_bindgen]
pub fn layout_cloud(request: &str) -> String {
    let output = build_cloud(request).unwrap_or_else(|e| {
        error!("Error laying out cloud: {}", e);
        CloudOutput::from_error(&e)
    });
    serde_json::to_string(&output)
        .unwrap_or_else(|e| format!(r#"{{"error":{{"message":"{}"}}}}"#, e))
}
