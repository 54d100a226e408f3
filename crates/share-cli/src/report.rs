//! Verification report rendering.

use serde::Serialize;
use share_core::{ShareError, ShareVerification};

/// What gets printed for a verified share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub coinbase_hash: String,
    pub merkle_root: String,
    pub block_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<bool>,
}

impl Report {
    /// Build a report, checking the claimed hash when there is one.
    ///
    /// A mismatch is recorded in `matches`; malformed claims are errors.
    pub fn new(verification: &ShareVerification, claimed: Option<&str>) -> Result<Self, ShareError> {
        let matches = claimed
            .map(|hash| verification.claim_matches(hash))
            .transpose()?;

        Ok(Report {
            coinbase_hash: verification.coinbase_hash_hex(),
            merkle_root: verification.merkle_root_hex(),
            block_hash: verification.block_hash_hex(),
            claimed_hash: claimed.map(|h| h.to_ascii_lowercase()),
            matches,
        })
    }

    pub fn to_text(&self) -> String {
        let mut out = format!(
            "Merkle Root:\n\t{}\nBlock Hash:\n\t{}\n",
            self.merkle_root, self.block_hash
        );
        if let (Some(claimed), Some(matches)) = (&self.claimed_hash, self.matches) {
            let verdict = if matches { "match" } else { "MISMATCH" };
            out.push_str(&format!("Claimed Hash:\n\t{} ({})\n", claimed, verdict));
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
