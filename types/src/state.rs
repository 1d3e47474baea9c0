//! Ledger states a transaction may consume or produce.

use serde::{Deserialize, Serialize};

use crate::party::PartyRef;

/// Behaviour shared by every state recorded on the ledger.
pub trait ContractState {
    /// Identifier of the contract that governs this state.
    fn contract_id(&self) -> &str;

    /// Parties that must be involved in any transaction touching this state.
    fn participants(&self) -> Vec<PartyRef>;
}

/// A debt obligation: `borrower` owes `lender` the amount `value`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IouState {
    pub lender: PartyRef,
    pub borrower: PartyRef,
    pub value: i64,
}

impl IouState {
    pub const CONTRACT_ID: &'static str = "iou.contracts.IouDestroyContract";

    pub fn new(lender: PartyRef, borrower: PartyRef, value: i64) -> Self {
        Self {
            lender,
            borrower,
            value,
        }
    }
}

impl ContractState for IouState {
    fn contract_id(&self) -> &str {
        Self::CONTRACT_ID
    }

    fn participants(&self) -> Vec<PartyRef> {
        vec![self.lender.clone(), self.borrower.clone()]
    }
}

/// Any state not modelled by this workspace, carried opaquely.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenericState {
    pub contract_id: String,
    pub participants: Vec<PartyRef>,
}

impl ContractState for GenericState {
    fn contract_id(&self) -> &str {
        &self.contract_id
    }

    fn participants(&self) -> Vec<PartyRef> {
        self.participants.clone()
    }
}

/// The typed records a transaction carries as inputs and outputs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum LedgerState {
    Iou(IouState),
    Generic(GenericState),
}

impl LedgerState {
    /// The IOU payload, if this state is one.
    pub fn as_iou(&self) -> Option<&IouState> {
        match self {
            Self::Iou(iou) => Some(iou),
            Self::Generic(_) => None,
        }
    }
}

impl ContractState for LedgerState {
    fn contract_id(&self) -> &str {
        match self {
            Self::Iou(s) => s.contract_id(),
            Self::Generic(s) => s.contract_id(),
        }
    }

    fn participants(&self) -> Vec<PartyRef> {
        match self {
            Self::Iou(s) => s.participants(),
            Self::Generic(s) => s.participants(),
        }
    }
}

impl From<IouState> for LedgerState {
    fn from(state: IouState) -> Self {
        Self::Iou(state)
    }
}

impl From<GenericState> for LedgerState {
    fn from(state: GenericState) -> Self {
        Self::Generic(state)
    }
}
