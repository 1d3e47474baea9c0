use crate::error::RejectionReason;
use crate::transaction::TransactionView;

/// A ledger rule the host runs against every transaction that references it.
///
/// Implementations must be pure: the same view always yields the same result,
/// and nothing is retained between calls.
pub trait Contract: Send + Sync {
    /// Stable identifier the host uses to look the contract up.
    fn id(&self) -> &'static str;

    /// Accept the transaction or explain why it is invalid.
    fn verify(&self, tx: &TransactionView) -> Result<(), RejectionReason>;
}
