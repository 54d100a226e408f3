//! Share verification for BLAKE2b proof-of-work mining.
//!
//! Given the parts a mining job and a submitted share are made of, this crate
//! independently reconstructs:
//! - the coinbase transaction and its leaf hash (`H(0x00 || tx)`)
//! - the Merkle root, by climbing the branch with `H(0x01 || sibling || acc)`
//! - the 80-byte block header and its hash
//!
//! `H` is BLAKE2b with a 32-byte digest. Every step is a pure function.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod block;
pub mod coinbase;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod merkle;
pub mod params;
pub mod share;

pub use block::{finalize_header, BlockHeader};
pub use coinbase::{hash_coinbase, CoinbaseParts};
pub use error::ShareError;
pub use hash::{blake2b_256, hash_to_hex};
pub use merkle::{build_merkle_root, parse_branch};
pub use share::{Job, JobParams, Share, ShareParams, ShareRequest, ShareVerification};
