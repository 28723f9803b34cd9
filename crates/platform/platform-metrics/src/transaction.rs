//! Accounting for accepted transactions.

use crate::{AcceptResult, AcceptanceError, TransactionMetrics};
use tn_platform_types::{SignedTransaction, UnsignedTransaction};
use tracing::{trace, warn};

#[cfg(test)]
#[path = "tests/transaction_tests.rs"]
mod transaction_tests;

impl TransactionMetrics {
    /// Count an accepted transaction by the kind of its unsigned payload.
    pub fn accept(&self, tx: &SignedTransaction) -> AcceptResult<()> {
        let counter = match &tx.unsigned {
            UnsignedTransaction::AddDelegator(_) => &self.add_delegator,
            UnsignedTransaction::AddSubnetValidator(_) => &self.add_subnet_validator,
            UnsignedTransaction::AddValidator(_) => &self.add_validator,
            UnsignedTransaction::AdvanceTime(_) => &self.advance_time,
            UnsignedTransaction::CreateChain(_) => &self.create_chain,
            UnsignedTransaction::CreateSubnet(_) => &self.create_subnet,
            UnsignedTransaction::Export(_) => &self.export,
            UnsignedTransaction::Import(_) => &self.import,
            UnsignedTransaction::RewardValidator(_) => &self.reward_validator,
            UnsignedTransaction::Unrecognized { type_id } => {
                warn!(target: "tn::platform::metrics", type_id, "accepted transaction of unknown type");
                return Err(AcceptanceError::UnknownTransactionType { type_id: *type_id });
            }
        };

        counter.inc();
        trace!(target: "tn::platform::metrics", kind = tx.unsigned.name(), "transaction accepted");
        Ok(())
    }
}
