//! Protocol constants for share reconstruction.

/// Length of every digest produced by the hash primitive (BLAKE2b-256).
pub const DIGEST_LEN: usize = 32;

/// Domain separation prefix for the coinbase (leaf) hash.
pub const LEAF_TAG: u8 = 0x00;

/// Domain separation prefix for internal Merkle nodes.
pub const NODE_TAG: u8 = 0x01;

/// Previous block hash width in the header.
pub const PREV_HASH_LEN: usize = 32;

/// Header nonce width.
pub const NONCE_LEN: usize = 8;

/// Header timestamp width (little-endian u64 seconds, passed through as bytes).
pub const TIMESTAMP_LEN: usize = 8;

/// Merkle root width in the header.
pub const MERKLE_ROOT_LEN: usize = DIGEST_LEN;

/// Serialized header size: prev hash, nonce, timestamp, merkle root.
pub const HEADER_LEN: usize = PREV_HASH_LEN + NONCE_LEN + TIMESTAMP_LEN + MERKLE_ROOT_LEN;

// Field offsets inside the serialized header.
pub(crate) const NONCE_OFFSET: usize = PREV_HASH_LEN;
pub(crate) const TIMESTAMP_OFFSET: usize = NONCE_OFFSET + NONCE_LEN;
pub(crate) const MERKLE_ROOT_OFFSET: usize = TIMESTAMP_OFFSET + TIMESTAMP_LEN;
