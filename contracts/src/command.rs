//! Commands attached to a transaction.
//!
//! A command names the contract rule the transaction is asking for and lists
//! the keys that signed for it. Several commands can ride on one transaction;
//! each contract selects the variant it understands.

use iou_types::{PartyRef, PublicKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The family of IOU command kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandData {
    /// Issue a new IOU.
    Create,
    /// Cancel an existing IOU. Carries no payload.
    Destroy,
}

impl CommandData {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Destroy => "Destroy",
        }
    }
}

/// A command together with the keys declared as its signers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandWithSigners {
    pub value: CommandData,
    pub signers: BTreeSet<PublicKey>,
}

impl CommandWithSigners {
    pub fn new(value: CommandData, signers: impl IntoIterator<Item = PublicKey>) -> Self {
        Self {
            value,
            signers: signers.into_iter().collect(),
        }
    }

    /// Parties whose owning key is absent from the signer set.
    pub fn missing_signers<'a>(&self, parties: &'a [PartyRef]) -> Vec<&'a PartyRef> {
        parties
            .iter()
            .filter(|p| !self.signers.contains(p.owning_key()))
            .collect()
    }
}
