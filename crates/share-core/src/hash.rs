//! BLAKE2b-256 hashing with domain separation tags.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

use crate::params::{DIGEST_LEN, LEAF_TAG, NODE_TAG};

type Blake2b256 = Blake2b<U32>;

/// Plain BLAKE2b with a 32-byte output. Used for the block header.
#[inline]
pub fn blake2b_256(data: &[u8]) -> [u8; DIGEST_LEN] {
    let hash = Blake2b256::digest(data);
    let mut result = [0u8; DIGEST_LEN];
    result.copy_from_slice(&hash);
    result
}

/// Hash `tag || parts[0] || parts[1] || ...` without building the
/// concatenation in memory.
pub fn tagged_hash(tag: u8, parts: &[&[u8]]) -> [u8; DIGEST_LEN] {
    let mut hasher = Blake2b256::new();
    hasher.update([tag]);
    for part in parts {
        hasher.update(part);
    }
    let mut result = [0u8; DIGEST_LEN];
    result.copy_from_slice(&hasher.finalize());
    result
}

/// Leaf hash: `H(0x00 || data)`.
#[inline]
pub fn leaf_hash(data: &[u8]) -> [u8; DIGEST_LEN] {
    tagged_hash(LEAF_TAG, &[data])
}

/// Internal node hash: `H(0x01 || sibling || accumulator)`.
///
/// The sibling always comes first. Swapping the operands yields a different
/// root with no error, so callers must keep this order.
#[inline]
pub fn node_hash(sibling: &[u8; DIGEST_LEN], accumulator: &[u8; DIGEST_LEN]) -> [u8; DIGEST_LEN] {
    tagged_hash(NODE_TAG, &[sibling.as_slice(), accumulator.as_slice()])
}

/// Render a digest as lowercase hex, in stored byte order.
pub fn hash_to_hex(hash: &[u8; DIGEST_LEN]) -> alloc::string::String {
    hex::encode(hash)
}
