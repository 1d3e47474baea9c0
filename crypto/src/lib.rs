//! Cryptographic primitives for IOU ledger contracts.
//!
//! - **Ed25519** key pairs, giving every party its owning key
//! - **Blake2b** hashing for transaction ids
//!
//! Signature verification is owned by the ledger host and is not provided here.

pub mod hash;
pub mod keys;

pub use hash::{blake2b_256, hash_transaction};
pub use keys::keypair_from_seed;
