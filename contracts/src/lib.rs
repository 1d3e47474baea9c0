//! IOU contract rules and the transaction shapes they inspect.
//!
//! A ledger host hands each contract a read-only [`TransactionView`] and treats
//! any [`RejectionReason`] as the transaction being invalid. This crate provides:
//! - **Commands**: the tagged [`CommandData`] union and its declared signers
//! - **TransactionView**: inputs, outputs and commands of a proposed transaction
//! - **Require helpers**: single-command selection and predicate checks
//! - **IouDestroyContract**: cancellation of an existing IOU
//! - **ContractVerifier**: runs a set of contracts over one transaction

pub mod command;
pub mod contract;
pub mod destroy;
pub mod error;
pub mod require;
pub mod transaction;
pub mod verifier;

pub use command::{CommandData, CommandWithSigners};
pub use contract::Contract;
pub use destroy::IouDestroyContract;
pub use error::{RejectionReason, VerificationError};
pub use require::{require, require_single_command};
pub use transaction::TransactionView;
pub use verifier::ContractVerifier;
