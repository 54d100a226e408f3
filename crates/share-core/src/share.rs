//! Share verification: coinbase, Merkle climb and header hash in sequence.
//!
//! A [`Job`] carries what stays fixed for every share the miner submits
//! against it. A [`Share`] carries what the miner chose. [`Job::verify`]
//! reconstructs the block hash those parts imply.
//!
//! The `*Params` types are the hex-string form exchanged with a mining
//! session, suitable for JSON or a JS object.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::block::BlockHeader;
use crate::coinbase::CoinbaseParts;
use crate::encoding::{decode_field, decode_fixed, encode};
use crate::error::ShareError;
use crate::merkle::{build_merkle_root, parse_branch};
use crate::params::{DIGEST_LEN, NONCE_LEN, PREV_HASH_LEN, TIMESTAMP_LEN};

/// Session-constant inputs of a mining job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Hash of the previous block.
    pub prev_hash: [u8; PREV_HASH_LEN],
    /// Coinbase prefix (before the extranonces).
    pub coinbase1: Vec<u8>,
    /// Coinbase suffix (after the extranonces).
    pub coinbase2: Vec<u8>,
    /// Extranonce1 assigned to this session.
    pub extranonce1: Vec<u8>,
    /// Extranonce2 width advertised by the pool, if known.
    pub extranonce2_size: Option<usize>,
    /// Sibling hashes from the coinbase up to the root.
    pub merkle_branch: Vec<[u8; DIGEST_LEN]>,
}

/// Miner-chosen inputs of a single submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub extranonce2: Vec<u8>,
    pub timestamp: [u8; TIMESTAMP_LEN],
    pub nonce: [u8; NONCE_LEN],
}

/// Everything reconstructed while verifying a share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareVerification {
    /// Leaf hash of the assembled coinbase.
    pub coinbase_hash: [u8; DIGEST_LEN],
    /// Merkle root after climbing the branch.
    pub merkle_root: [u8; DIGEST_LEN],
    /// Hash of the assembled header.
    pub block_hash: [u8; DIGEST_LEN],
}

impl Job {
    /// Reconstruct the merkle root and block hash for `share`.
    pub fn verify(&self, share: &Share) -> Result<ShareVerification, ShareError> {
        if let Some(expected) = self.extranonce2_size {
            if share.extranonce2.len() != expected {
                return Err(ShareError::InvalidFieldLength {
                    field: "extranonce2".into(),
                    expected,
                    actual: share.extranonce2.len(),
                });
            }
        }

        let coinbase = CoinbaseParts::new(
            &self.coinbase1,
            &self.extranonce1,
            &share.extranonce2,
            &self.coinbase2,
        );
        let coinbase_hash = coinbase.hash();
        let merkle_root = build_merkle_root(&self.merkle_branch, coinbase_hash);

        let header = BlockHeader::new(self.prev_hash, share.nonce, share.timestamp, merkle_root);
        let block_hash = header.hash();

        tracing::debug!(
            coinbase_len = coinbase.len(),
            branch_len = self.merkle_branch.len(),
            merkle_root = %hex::encode(merkle_root),
            block_hash = %hex::encode(block_hash),
            "share reconstructed"
        );

        Ok(ShareVerification {
            coinbase_hash,
            merkle_root,
            block_hash,
        })
    }
}

impl ShareVerification {
    pub fn coinbase_hash_hex(&self) -> String {
        encode(&self.coinbase_hash)
    }

    pub fn merkle_root_hex(&self) -> String {
        encode(&self.merkle_root)
    }

    pub fn block_hash_hex(&self) -> String {
        encode(&self.block_hash)
    }

    /// Compare the reconstructed block hash against the one a miner reported.
    pub fn check_claimed_hash(&self, claimed: &str) -> Result<(), ShareError> {
        let claimed_bytes: [u8; DIGEST_LEN] = decode_fixed("block_hash", claimed)?;
        if claimed_bytes != self.block_hash {
            return Err(ShareError::HashMismatch {
                computed: self.block_hash_hex(),
                claimed: encode(&claimed_bytes),
            });
        }
        Ok(())
    }

    /// Like [`check_claimed_hash`](Self::check_claimed_hash) but reports a
    /// mismatch as `Ok(false)`. A malformed claim is still an error.
    pub fn claim_matches(&self, claimed: &str) -> Result<bool, ShareError> {
        let claimed_bytes: [u8; DIGEST_LEN] = decode_fixed("block_hash", claimed)?;
        Ok(claimed_bytes == self.block_hash)
    }
}

/// Hex form of a [`Job`], as delivered by a mining session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobParams {
    pub prevhash: String,
    pub coinb1: String,
    pub coinb2: String,
    pub extranonce1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extranonce2_size: Option<usize>,
    #[serde(default)]
    pub merkle_branch: Vec<String>,
}

impl JobParams {
    pub fn parse(&self) -> Result<Job, ShareError> {
        Ok(Job {
            prev_hash: decode_fixed("prevhash", &self.prevhash)?,
            coinbase1: decode_field("coinb1", &self.coinb1)?,
            coinbase2: decode_field("coinb2", &self.coinb2)?,
            extranonce1: decode_field("extranonce1", &self.extranonce1)?,
            extranonce2_size: self.extranonce2_size,
            merkle_branch: parse_branch(&self.merkle_branch)?,
        })
    }
}

/// Hex form of a [`Share`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareParams {
    pub extranonce2: String,
    pub ntime: String,
    pub nonce: String,
}

impl ShareParams {
    pub fn parse(&self) -> Result<Share, ShareError> {
        Ok(Share {
            extranonce2: decode_field("extranonce2", &self.extranonce2)?,
            timestamp: decode_fixed("ntime", &self.ntime)?,
            nonce: decode_fixed("nonce", &self.nonce)?,
        })
    }
}

/// A complete verification request: job, share and optionally the block
/// hash the miner claims the share produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRequest {
    #[serde(flatten)]
    pub job: JobParams,
    #[serde(flatten)]
    pub share: ShareParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
}

impl ShareRequest {
    /// Decode every field, reconstruct the share and check the claimed hash
    /// if one was given.
    pub fn verify(&self) -> Result<ShareVerification, ShareError> {
        let job = self.job.parse()?;
        let share = self.share.parse()?;
        let verification = job.verify(&share)?;
        if let Some(claimed) = &self.block_hash {
            verification.check_claimed_hash(claimed)?;
        }
        Ok(verification)
    }
}
