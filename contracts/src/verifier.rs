//! Host-side dispatch of a transaction to its contracts.
//!
//! The verifier owns no ledger state. It runs each registered contract against
//! the supplied view and reports the first rejection together with the id of
//! the contract that raised it.

use std::sync::Arc;

use tracing::{info, info_span, Span};

use crate::contract::Contract;
use crate::destroy::IouDestroyContract;
use crate::error::VerificationError;
use crate::transaction::TransactionView;

/// Span covering the verification of a single transaction.
fn contract_verify_span(tx_id: &str, contracts: usize) -> Span {
    info_span!("contract_verify", tx = %tx_id, contracts = contracts)
}

/// A set of contracts run together over each transaction.
#[derive(Clone, Default)]
pub struct ContractVerifier {
    contracts: Vec<Arc<dyn Contract>>,
}

impl ContractVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A verifier preloaded with every IOU contract in this crate.
    pub fn with_iou_contracts() -> Self {
        Self {
            contracts: vec![Arc::new(IouDestroyContract)],
        }
    }

    /// Add a contract. Ids must be unique.
    pub fn register(&mut self, contract: Arc<dyn Contract>) -> Result<(), VerificationError> {
        let id = contract.id();
        if self.contracts.iter().any(|c| c.id() == id) {
            return Err(VerificationError::DuplicateContract(id));
        }
        self.contracts.push(contract);
        Ok(())
    }

    pub fn contract_ids(&self) -> Vec<&'static str> {
        self.contracts.iter().map(|c| c.id()).collect()
    }

    /// Run every contract; the first rejection aborts verification.
    pub fn verify(&self, tx: &TransactionView) -> Result<(), VerificationError> {
        let tx_id = tx.id()?;
        let span = contract_verify_span(&tx_id.to_string(), self.contracts.len());
        let _enter = span.enter();

        for contract in &self.contracts {
            contract
                .verify(tx)
                .map_err(|reason| VerificationError::Rejected {
                    contract_id: contract.id(),
                    tx_id,
                    reason,
                })?;
        }

        info!("transaction accepted");
        Ok(())
    }
}
