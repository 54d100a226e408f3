//! Merkle root reconstruction from a coinbase hash and its branch.

use alloc::format;
use alloc::vec::Vec;

use crate::encoding::decode_fixed;
use crate::error::ShareError;
use crate::hash::node_hash;
use crate::params::DIGEST_LEN;

/// Climb the Merkle branch starting from the coinbase leaf hash.
///
/// Each step computes `H(0x01 || sibling || acc)`. The branch is consumed in
/// the order given, from the leaf's sibling up to the root. An empty branch
/// means the coinbase is the only transaction and the leaf is the root.
pub fn build_merkle_root(branch: &[[u8; DIGEST_LEN]], leaf: [u8; DIGEST_LEN]) -> [u8; DIGEST_LEN] {
    let mut root = leaf;
    for (level, sibling) in branch.iter().enumerate() {
        root = node_hash(sibling, &root);
        tracing::trace!(level, node = %hex::encode(root), "merkle level");
    }
    root
}

/// Decode a hex Merkle branch. Every element must be exactly one digest wide.
pub fn parse_branch<S: AsRef<str>>(branch: &[S]) -> Result<Vec<[u8; DIGEST_LEN]>, ShareError> {
    branch
        .iter()
        .enumerate()
        .map(|(i, h)| decode_fixed(&format!("merkle_branch[{}]", i), h.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::hash_to_hex;
    use alloc::string::ToString;

    const BRANCH: [&str; 3] = [
        "25cc1c464ed8f0a13da6c14098c2cd47526dcd64d3594a2ace794b9bc0ab704d",
        "2c162ebd012c0044cd34808a0dc9e5790f428cba73ce7b848a6f63ddd845c80e",
        "20283c26aa6cf99c126fe74021f2c5fb39baffd81814d725c57c883e16676c5d",
    ];

    fn leaf() -> [u8; 32] {
        decode_fixed("leaf", "d995219bcc23497f6e7d44db94aeb9e15482d8c2466088c0bf7d4ded0792ef23").unwrap()
    }

    #[test]
    fn test_empty_branch_is_identity() {
        let leaf = [0x42u8; 32];
        assert_eq!(build_merkle_root(&[], leaf), leaf);
    }

    #[test]
    fn test_single_sibling() {
        let sibling = [0x11u8; 32];
        let leaf = [0x22u8; 32];
        assert_eq!(build_merkle_root(&[sibling], leaf), node_hash(&sibling, &leaf));
    }

    #[test]
    fn test_block_86011_root() {
        let branch = parse_branch(&BRANCH).unwrap();
        let root = build_merkle_root(&branch, leaf());
        assert_eq!(
            hash_to_hex(&root),
            "74e5febb352cd33ee2f1b04ffab63bdaeb53bcc7bf167796185acad261ec107b"
        );
    }

    #[test]
    fn test_branch_order_matters() {
        let mut branch = parse_branch(&BRANCH).unwrap();
        branch.swap(0, 1);
        let root = build_merkle_root(&branch, leaf());
        assert_eq!(
            hash_to_hex(&root),
            "c5325671d2ad0a88e9efb5c5fe1afa8807bce9896620c3a8a50349ff8cd5d9a8"
        );
    }

    #[test]
    fn test_sibling_precedes_accumulator() {
        // Hashing acc || sibling instead gives a different, wrong root
        let branch = parse_branch(&BRANCH).unwrap();
        let wrong = branch
            .iter()
            .fold(leaf(), |acc, sibling| node_hash(&acc, sibling));
        assert_eq!(
            hash_to_hex(&wrong),
            "c34bf590b3bbce56ff2a5ebde023b35f7b3ea098da9b0ee5d42823950f16b623"
        );
        assert_ne!(wrong, build_merkle_root(&branch, leaf()));
    }

    #[test]
    fn test_parse_branch_rejects_short_element() {
        let err = parse_branch(&[BRANCH[0], "25cc1c46"]).unwrap_err();
        assert_eq!(
            err,
            ShareError::InvalidFieldLength {
                field: "merkle_branch[1]".to_string(),
                expected: 32,
                actual: 4,
            }
        );
    }

    #[test]
    fn test_parse_branch_rejects_bad_hex() {
        let err = parse_branch(&["xy".to_string()]).unwrap_err();
        assert_eq!(err.field(), "merkle_branch[0]");
    }

    #[test]
    fn test_parse_empty_branch() {
        let branch = parse_branch::<&str>(&[]).unwrap();
        assert!(branch.is_empty());
    }
}
