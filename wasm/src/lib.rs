//! WebAssembly module for AgriSense Morocco
//!
//! Provides client-side computation for:
//! - Crop and irrigation recommendations
//! - Chart confidence scores
//! - Offline reading validation

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&"AgriSense module initialized".into());
}

/// Recommend a crop family for a vegetation index
#[wasm_bindgen]
pub fn recommend_crop_label(ndvi: f64) -> String {
    recommend_crop(ndvi).to_string()
}

/// Recommend an irrigation level for a rainfall amount
#[wasm_bindgen]
pub fn recommend_irrigation_label(rainfall_mm: f64) -> String {
    recommend_irrigation(rainfall_mm).to_string()
}

/// Chart scores over the three crop classes as JSON
#[wasm_bindgen]
pub fn crop_confidence_json(ndvi: f64) -> Result<String, JsValue> {
    serde_json::to_string(&crop_confidence(ndvi))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Validate a reading before submitting it to the API
#[wasm_bindgen]
pub fn validate_reading(temperature_celsius: f64, rainfall_mm: f64, ndvi: f64) -> bool {
    validate_temperature(temperature_celsius).is_ok()
        && validate_rainfall(rainfall_mm).is_ok()
        && validate_ndvi(ndvi).is_ok()
}

/// Resolve a region name to its map coordinates as JSON, null when unknown
#[wasm_bindgen]
pub fn region_coordinates_json(name: &str) -> Option<String> {
    let region: Region = name.parse().ok()?;
    serde_json::to_string(&region.coordinates()).ok()
}
