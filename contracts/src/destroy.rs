//! Cancellation of an existing IOU.
//!
//! A valid destroy transaction takes:
//! - exactly one existing IOU as input
//! - no outputs
//! - one `Destroy` command signed by both the lender and the borrower

use iou_types::{ContractState, IouState, Party};
use tracing::{debug, warn};

use crate::command::CommandData;
use crate::contract::Contract;
use crate::error::RejectionReason;
use crate::require::{require, require_single_command};
use crate::transaction::TransactionView;

/// Contract that permits an IOU to be removed from the ledger.
#[derive(Clone, Copy, Debug, Default)]
pub struct IouDestroyContract;

impl IouDestroyContract {
    pub const ID: &'static str = IouState::CONTRACT_ID;

    fn check(tx: &TransactionView) -> Result<(), RejectionReason> {
        let command = require_single_command(tx.commands(), CommandData::Destroy)?;

        let input_count = tx.inputs().len();
        let no_outputs = || {
            require(
                tx.outputs().is_empty(),
                RejectionReason::UnexpectedOutput {
                    count: tx.outputs().len(),
                },
            )
        };

        // With no inputs there is nothing to type-check; the count check reports it.
        let inp = match tx.iou_inputs().next() {
            Some(inp) => inp,
            None if input_count == 0 => {
                no_outputs()?;
                return Err(RejectionReason::WrongInputCount { count: 0 });
            }
            None => return Err(RejectionReason::WrongInputType),
        };

        no_outputs()?;
        require(
            input_count == 1,
            RejectionReason::WrongInputCount { count: input_count },
        )?;
        require(
            !Party::same_identity(&inp.lender, &inp.borrower),
            RejectionReason::SelfDealingIou,
        )?;

        let participants = inp.participants();
        let missing = command.missing_signers(&participants);
        require(
            missing.is_empty(),
            RejectionReason::MissingSignatures {
                missing: missing.len(),
            },
        )?;

        require(
            inp.value > 0,
            RejectionReason::NonPositiveValue { value: inp.value },
        )
    }
}

impl Contract for IouDestroyContract {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn verify(&self, tx: &TransactionView) -> Result<(), RejectionReason> {
        debug!(
            inputs = tx.inputs().len(),
            outputs = tx.outputs().len(),
            commands = tx.commands().len(),
            "checking IOU destroy"
        );
        Self::check(tx).inspect_err(|reason| warn!(%reason, "IOU destroy rejected"))
    }
}
