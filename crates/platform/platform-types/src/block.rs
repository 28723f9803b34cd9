//! Platform chain blocks.
//!
//! Proposal blocks carry a single transaction that, once accepted, is followed by either a
//! [CommitBlock] or an [AbortBlock] deciding its outcome. Atomic blocks carry one cross-chain
//! transaction and standard blocks carry an ordered batch of decision transactions.

use crate::{BlockId, SignedTransaction};
use serde::{Deserialize, Serialize};

/// Fields shared by every block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonBlock {
    /// The id of the parent block.
    pub parent: BlockId,
    /// Number of ancestors. Genesis is height zero.
    pub height: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbortBlock {
    pub common: CommonBlock,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomicBlock {
    pub common: CommonBlock,
    pub tx: SignedTransaction,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitBlock {
    pub common: CommonBlock,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalBlock {
    pub common: CommonBlock,
    pub tx: SignedTransaction,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardBlock {
    pub common: CommonBlock,
    /// Transactions in execution order.
    pub txs: Vec<SignedTransaction>,
}

/// A block accepted by consensus.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Abort(AbortBlock),
    Atomic(AtomicBlock),
    Commit(CommitBlock),
    Proposal(ProposalBlock),
    Standard(StandardBlock),
    /// A block tagged with a type id this node does not know.
    Unrecognized { common: CommonBlock, type_id: u32 },
}

impl Block {
    /// Shared block fields.
    pub fn common(&self) -> &CommonBlock {
        match self {
            Self::Abort(b) => &b.common,
            Self::Atomic(b) => &b.common,
            Self::Commit(b) => &b.common,
            Self::Proposal(b) => &b.common,
            Self::Standard(b) => &b.common,
            Self::Unrecognized { common, .. } => common,
        }
    }

    /// Height of the block.
    pub fn height(&self) -> u64 {
        self.common().height
    }

    /// Short, stable name of the block kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Abort(_) => "abort",
            Self::Atomic(_) => "atomic",
            Self::Commit(_) => "commit",
            Self::Proposal(_) => "proposal",
            Self::Standard(_) => "standard",
            Self::Unrecognized { .. } => "unrecognized",
        }
    }
}
