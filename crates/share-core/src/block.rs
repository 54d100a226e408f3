//! Block header assembly and final hashing.

use crate::encoding::to_array;
use crate::error::ShareError;
use crate::hash::blake2b_256;
use crate::params::{
    DIGEST_LEN, HEADER_LEN, MERKLE_ROOT_LEN, MERKLE_ROOT_OFFSET, NONCE_LEN, NONCE_OFFSET,
    PREV_HASH_LEN, TIMESTAMP_LEN, TIMESTAMP_OFFSET,
};

/// A block header (80 bytes).
///
/// Fields hold raw bytes exactly as the job and share supplied them. No
/// endianness conversion happens anywhere: the header is their concatenation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    /// Hash of the previous block.
    pub prev_hash: [u8; PREV_HASH_LEN],
    /// Nonce for proof of work.
    pub nonce: [u8; NONCE_LEN],
    /// Block timestamp.
    pub timestamp: [u8; TIMESTAMP_LEN],
    /// Merkle root of all transactions.
    pub merkle_root: [u8; MERKLE_ROOT_LEN],
}

impl BlockHeader {
    /// Create a new block header.
    pub fn new(
        prev_hash: [u8; PREV_HASH_LEN],
        nonce: [u8; NONCE_LEN],
        timestamp: [u8; TIMESTAMP_LEN],
        merkle_root: [u8; MERKLE_ROOT_LEN],
    ) -> Self {
        BlockHeader {
            prev_hash,
            nonce,
            timestamp,
            merkle_root,
        }
    }

    /// Build a header from unchecked slices, rejecting any field of the wrong
    /// width.
    pub fn from_slices(
        prev_hash: &[u8],
        nonce: &[u8],
        timestamp: &[u8],
        merkle_root: &[u8],
    ) -> Result<Self, ShareError> {
        Ok(BlockHeader {
            prev_hash: to_array("prevhash", prev_hash)?,
            nonce: to_array("nonce", nonce)?,
            timestamp: to_array("ntime", timestamp)?,
            merkle_root: to_array("merkle_root", merkle_root)?,
        })
    }

    /// Serialize as `prev_hash || nonce || timestamp || merkle_root`.
    pub fn serialize(&self) -> [u8; HEADER_LEN] {
        let mut header = [0u8; HEADER_LEN];
        header[..NONCE_OFFSET].copy_from_slice(&self.prev_hash);
        header[NONCE_OFFSET..TIMESTAMP_OFFSET].copy_from_slice(&self.nonce);
        header[TIMESTAMP_OFFSET..MERKLE_ROOT_OFFSET].copy_from_slice(&self.timestamp);
        header[MERKLE_ROOT_OFFSET..].copy_from_slice(&self.merkle_root);
        header
    }

    /// Compute the block hash. The header hash carries no domain tag.
    pub fn hash(&self) -> [u8; DIGEST_LEN] {
        blake2b_256(&self.serialize())
    }
}

/// Assemble the header from its fields and hash it.
pub fn finalize_header(
    prev_hash: &[u8],
    nonce: &[u8],
    timestamp: &[u8],
    merkle_root: &[u8],
) -> Result<[u8; DIGEST_LEN], ShareError> {
    BlockHeader::from_slices(prev_hash, nonce, timestamp, merkle_root).map(|h| h.hash())
}
