//! WebAssembly bindings for mining share verification.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Verifying a one-off share request (`verifyShare`)
//! - Verifying many shares against one job (`ShareVerifier`)

use wasm_bindgen::prelude::*;

pub mod state;
pub mod verifier;

// Re-export main types for JS access
pub use verifier::{verify_share, ShareVerifier};

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
