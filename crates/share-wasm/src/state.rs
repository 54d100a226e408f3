//! Result types handed back to JavaScript.

use serde::{Deserialize, Serialize};
use share_core::{ShareError, ShareVerification};
use wasm_bindgen::prelude::*;

/// Outcome of verifying one share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationInfo {
    /// Leaf hash of the assembled coinbase.
    pub coinbase_hash: String,
    /// Reconstructed merkle root.
    pub merkle_root: String,
    /// Reconstructed block hash.
    pub block_hash: String,
    /// Block hash the miner claimed, if one was supplied.
    pub claimed_hash: Option<String>,
    /// Whether the claim matched. `None` when nothing was claimed.
    pub matches: Option<bool>,
}

impl VerificationInfo {
    /// Build the report, comparing against `claimed` when present.
    ///
    /// A mismatch is reported through `matches`, not as an error. A claim
    /// that is not a well-formed 32-byte hex hash is still an error.
    pub fn new(verification: &ShareVerification, claimed: Option<&str>) -> Result<Self, ShareError> {
        let matches = match claimed {
            Some(hash) => Some(verification.claim_matches(hash)?),
            None => None,
        };

        Ok(VerificationInfo {
            coinbase_hash: verification.coinbase_hash_hex(),
            merkle_root: verification.merkle_root_hex(),
            block_hash: verification.block_hash_hex(),
            claimed_hash: claimed.map(|h| h.to_ascii_lowercase()),
            matches,
        })
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

/// Render a share error for JavaScript callers.
pub fn error_message(err: &ShareError) -> String {
    format!("{} (field: {})", err, err.field())
}
