//! Coinbase transaction assembly and hashing.
//!
//! A mining job hands out the coinbase in two static halves with a gap for
//! the extranonces. The full transaction (the "arbitrary transaction") is
//! `coinbase1 || extranonce1 || extranonce2 || coinbase2`, and its leaf hash
//! is the first input to the Merkle climb.

use alloc::vec::Vec;

use crate::hash::{leaf_hash, tagged_hash};
use crate::params::{DIGEST_LEN, LEAF_TAG};

/// Borrowed view of the four coinbase fragments, in assembly order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinbaseParts<'a> {
    /// Static prefix from the job.
    pub coinbase1: &'a [u8],
    /// Session extranonce assigned by the pool.
    pub extranonce1: &'a [u8],
    /// Miner-chosen extranonce.
    pub extranonce2: &'a [u8],
    /// Static suffix from the job.
    pub coinbase2: &'a [u8],
}

impl<'a> CoinbaseParts<'a> {
    pub fn new(
        coinbase1: &'a [u8],
        extranonce1: &'a [u8],
        extranonce2: &'a [u8],
        coinbase2: &'a [u8],
    ) -> Self {
        CoinbaseParts {
            coinbase1,
            extranonce1,
            extranonce2,
            coinbase2,
        }
    }

    fn fragments(&self) -> [&'a [u8]; 4] {
        [self.coinbase1, self.extranonce1, self.extranonce2, self.coinbase2]
    }

    /// Total length of the assembled transaction.
    pub fn len(&self) -> usize {
        self.fragments().iter().map(|f| f.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Concatenate the fragments into the full transaction bytes.
    pub fn assemble(&self) -> Vec<u8> {
        let mut tx = Vec::with_capacity(self.len());
        for fragment in self.fragments() {
            tx.extend_from_slice(fragment);
        }
        tx
    }

    /// Leaf hash of the assembled transaction: `H(0x00 || tx)`.
    pub fn hash(&self) -> [u8; DIGEST_LEN] {
        tagged_hash(LEAF_TAG, &self.fragments())
    }
}

/// Hash the coinbase built from its fragments.
pub fn hash_coinbase(
    coinbase1: &[u8],
    extranonce1: &[u8],
    extranonce2: &[u8],
    coinbase2: &[u8],
) -> [u8; DIGEST_LEN] {
    CoinbaseParts::new(coinbase1, extranonce1, extranonce2, coinbase2).hash()
}

/// Hash an already-assembled coinbase transaction.
pub fn hash_assembled_coinbase(tx: &[u8]) -> [u8; DIGEST_LEN] {
    leaf_hash(tx)
}
