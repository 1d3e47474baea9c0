//! Fundamental types for IOU ledger contracts.
//!
//! This crate defines the records shared by every other crate in the workspace:
//! party identities and their keys, transaction hashes, and the ledger states
//! a transaction consumes or produces.

pub mod error;
pub mod hash;
pub mod keys;
pub mod party;
pub mod state;

pub use error::TypesError;
pub use hash::TxHash;
pub use keys::{KeyPair, PrivateKey, PublicKey};
pub use party::{Party, PartyRef};
pub use state::{ContractState, GenericState, IouState, LedgerState};
