//! Read-only view of a proposed transaction.

use iou_types::{IouState, LedgerState, TxHash};
use serde::{Deserialize, Serialize};

use crate::command::CommandWithSigners;
use crate::error::VerificationError;

/// The inputs, outputs and commands of a transaction under verification.
///
/// Built by the ledger host; contracts only read it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransactionView {
    inputs: Vec<LedgerState>,
    outputs: Vec<LedgerState>,
    commands: Vec<CommandWithSigners>,
}

impl TransactionView {
    pub fn new(
        inputs: Vec<LedgerState>,
        outputs: Vec<LedgerState>,
        commands: Vec<CommandWithSigners>,
    ) -> Self {
        Self {
            inputs,
            outputs,
            commands,
        }
    }

    pub fn inputs(&self) -> &[LedgerState] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[LedgerState] {
        &self.outputs
    }

    pub fn commands(&self) -> &[CommandWithSigners] {
        &self.commands
    }

    /// Inputs that are IOUs, in input order.
    pub fn iou_inputs(&self) -> impl Iterator<Item = &IouState> {
        self.inputs.iter().filter_map(LedgerState::as_iou)
    }

    /// Blake2b-256 over the bincode encoding. Used for log correlation only.
    pub fn id(&self) -> Result<TxHash, VerificationError> {
        let bytes = bincode::serialize(self).map_err(|e| VerificationError::Encoding(e.to_string()))?;
        Ok(iou_crypto::hash_transaction(&bytes))
    }
}
