//! Share verification controller for the WASM build.

use share_core::{Job, JobParams, ShareError, ShareParams, ShareRequest, ShareVerification};
use wasm_bindgen::prelude::*;

use crate::state::{error_message, VerificationInfo};

fn js_error(err: ShareError) -> JsValue {
    JsValue::from_str(&error_message(&err))
}

/// Verifies shares against a single mining job.
///
/// The job is decoded once; each call to `verify` only decodes the
/// miner-chosen fields.
#[wasm_bindgen]
pub struct ShareVerifier {
    /// The decoded job.
    job: Job,
    /// Shares verified so far.
    shares_verified: u32,
    /// Shares whose claimed hash did not match.
    mismatches: u32,
}

#[wasm_bindgen]
impl ShareVerifier {
    /// Create a verifier from a job object.
    ///
    /// Expects `{ prevhash, coinb1, coinb2, extranonce1, merkle_branch, extranonce2_size? }`
    /// with hex string values.
    #[wasm_bindgen(constructor)]
    pub fn new(job: JsValue) -> Result<ShareVerifier, JsValue> {
        let params: JobParams = serde_wasm_bindgen::from_value(job)
            .map_err(|e| JsValue::from_str(&format!("Invalid job: {}", e)))?;
        let job = params.parse().map_err(js_error)?;

        Ok(ShareVerifier {
            job,
            shares_verified: 0,
            mismatches: 0,
        })
    }

    /// Reconstruct the merkle root and block hash for one share.
    #[wasm_bindgen]
    pub fn verify(&mut self, extranonce2: &str, ntime: &str, nonce: &str) -> Result<JsValue, JsValue> {
        let verification = self.reconstruct(extranonce2, ntime, nonce).map_err(js_error)?;
        VerificationInfo::new(&verification, None)
            .map_err(js_error)?
            .to_js()
    }

    /// Verify a share and compare against the hash the miner claims.
    ///
    /// A mismatch is returned as `matches: false`, not thrown.
    #[wasm_bindgen(js_name = verifyClaimed)]
    pub fn verify_claimed(
        &mut self,
        extranonce2: &str,
        ntime: &str,
        nonce: &str,
        block_hash: &str,
    ) -> Result<JsValue, JsValue> {
        let verification = self.reconstruct(extranonce2, ntime, nonce).map_err(js_error)?;
        let info = VerificationInfo::new(&verification, Some(block_hash)).map_err(js_error)?;

        if info.matches == Some(false) {
            self.mismatches += 1;
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "share hash mismatch: computed {}, claimed {}",
                info.block_hash, block_hash
            )));
        }

        info.to_js()
    }

    /// Number of shares verified by this instance.
    #[wasm_bindgen(getter, js_name = sharesVerified)]
    pub fn shares_verified(&self) -> u32 {
        self.shares_verified
    }

    /// Number of claimed hashes that did not match.
    #[wasm_bindgen(getter)]
    pub fn mismatches(&self) -> u32 {
        self.mismatches
    }

    /// Depth of the job's merkle branch.
    #[wasm_bindgen(getter, js_name = branchLength)]
    pub fn branch_length(&self) -> usize {
        self.job.merkle_branch.len()
    }
}

impl ShareVerifier {
    /// Build a verifier from an already-decoded job.
    pub fn from_job(job: Job) -> Self {
        ShareVerifier {
            job,
            shares_verified: 0,
            mismatches: 0,
        }
    }

    fn reconstruct(
        &mut self,
        extranonce2: &str,
        ntime: &str,
        nonce: &str,
    ) -> Result<ShareVerification, ShareError> {
        let share = ShareParams {
            extranonce2: extranonce2.to_string(),
            ntime: ntime.to_string(),
            nonce: nonce.to_string(),
        }
        .parse()?;

        let verification = self.job.verify(&share)?;
        self.shares_verified += 1;
        Ok(verification)
    }
}

/// Verify a complete share request object in one call.
///
/// A claimed `block_hash` in the request is compared, and the result carries
/// `matches` accordingly.
#[wasm_bindgen(js_name = verifyShare)]
pub fn verify_share(request: JsValue) -> Result<JsValue, JsValue> {
    let request: ShareRequest = serde_wasm_bindgen::from_value(request)
        .map_err(|e| JsValue::from_str(&format!("Invalid share request: {}", e)))?;
    let info = verify_request(&request).map_err(js_error)?;
    info.to_js()
}

/// Pure part of [`verify_share`].
pub fn verify_request(request: &ShareRequest) -> Result<VerificationInfo, ShareError> {
    let job = request.job.parse()?;
    let share = request.share.parse()?;
    let verification = job.verify(&share)?;
    VerificationInfo::new(&verification, request.block_hash.as_deref())
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
