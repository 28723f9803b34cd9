//! Accounting for accepted blocks.

use crate::{AcceptResult, AcceptanceError, BlockMetrics, TransactionMetrics};
use tn_platform_types::Block;
use tracing::{trace, warn};

#[cfg(test)]
#[path = "tests/block_tests.rs"]
mod block_tests;

impl BlockMetrics {
    /// Count an accepted block and the transactions embedded in it.
    ///
    /// Transactions of a standard block are counted in order. The first one that can not be
    /// classified stops the walk and its error is returned; the block itself is still counted.
    pub fn accept(&self, block: &Block, txs: &TransactionMetrics) -> AcceptResult<()> {
        // no wildcard arm: a new block kind must get a counter before this compiles
        match block {
            Block::Abort(_) => self.abort.inc(),
            Block::Atomic(b) => {
                self.atomic.inc();
                txs.accept(&b.tx)?;
            }
            Block::Commit(_) => self.commit.inc(),
            Block::Proposal(b) => {
                self.proposal.inc();
                txs.accept(&b.tx)?;
            }
            Block::Standard(b) => {
                self.standard.inc();
                for tx in &b.txs {
                    txs.accept(tx)?;
                }
            }
            Block::Unrecognized { type_id, common } => {
                warn!(target: "tn::platform::metrics", type_id, height = common.height, "accepted block of unknown type");
                return Err(AcceptanceError::UnknownBlockType { type_id: *type_id });
            }
        }

        trace!(target: "tn::platform::metrics", kind = block.name(), height = block.height(), "block accepted");
        Ok(())
    }
}
