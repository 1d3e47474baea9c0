//! Transaction ids as Blake2b-256 digests.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use iou_types::TxHash;

type Blake2b256 = Blake2b<U32>;

/// 256-bit Blake2b digest of `data`.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Blake2b256::digest(data));
    out
}

/// Id of a transaction given its encoded bytes.
pub fn hash_transaction(tx_bytes: &[u8]) -> TxHash {
    TxHash::new(blake2b_256(tx_bytes))
}
