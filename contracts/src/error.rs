use iou_types::TxHash;
use thiserror::Error;

/// Why a contract refused a transaction. Every variant is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    #[error("required exactly one {command} command, found {found}")]
    AmbiguousCommand { command: &'static str, found: usize },

    #[error("the inputs consumed must be an IOU")]
    WrongInputType,

    #[error("no output state should be created, found {count}")]
    UnexpectedOutput { count: usize },

    #[error("only one input state should be consumed, found {count}")]
    WrongInputCount { count: usize },

    #[error("the lender and the borrower cannot be the same entity")]
    SelfDealingIou,

    #[error("all of the participants must be signers, missing {missing}")]
    MissingSignatures { missing: usize },

    #[error("the IOU's value must be positive, got {value}")]
    NonPositiveValue { value: i64 },
}

#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("contract {contract_id} rejected transaction {tx_id}: {reason}")]
    Rejected {
        contract_id: &'static str,
        tx_id: TxHash,
        reason: RejectionReason,
    },

    #[error("contract {0} is already registered")]
    DuplicateContract(&'static str),

    #[error("transaction encoding failed: {0}")]
    Encoding(String),
}

impl VerificationError {
    /// The contract-level reason, when this error is a rejection.
    pub fn reason(&self) -> Option<&RejectionReason> {
        match self {
            Self::Rejected { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
