//! Platform chain transactions.

use crate::{Address, ChainId, NodeId, SubnetId, TxId};
use serde::{Deserialize, Serialize};

/// A transaction together with the credentials that authorize it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    /// The payload that was signed.
    pub unsigned: UnsignedTransaction,
    /// One credential per input.
    pub credentials: Vec<Credential>,
}

impl SignedTransaction {
    /// Wrap an unsigned payload without any credentials.
    pub fn new(unsigned: UnsignedTransaction) -> Self {
        Self { unsigned, credentials: Vec::new() }
    }

    /// Attach credentials.
    pub fn with_credentials(mut self, credentials: Vec<Credential>) -> Self {
        self.credentials = credentials;
        self
    }
}

/// Signatures over a transaction input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub signatures: Vec<Vec<u8>>,
}

/// The unsigned payload of a platform chain transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnsignedTransaction {
    AddDelegator(AddDelegatorTx),
    AddSubnetValidator(AddSubnetValidatorTx),
    AddValidator(AddValidatorTx),
    AdvanceTime(AdvanceTimeTx),
    CreateChain(CreateChainTx),
    CreateSubnet(CreateSubnetTx),
    Export(ExportTx),
    Import(ImportTx),
    RewardValidator(RewardValidatorTx),
    /// A payload tagged with a type id this node does not know.
    Unrecognized { type_id: u32 },
}

impl UnsignedTransaction {
    /// Short, stable name of the transaction kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddDelegator(_) => "add_delegator",
            Self::AddSubnetValidator(_) => "add_subnet_validator",
            Self::AddValidator(_) => "add_validator",
            Self::AdvanceTime(_) => "advance_time",
            Self::CreateChain(_) => "create_chain",
            Self::CreateSubnet(_) => "create_subnet",
            Self::Export(_) => "export",
            Self::Import(_) => "import",
            Self::RewardValidator(_) => "reward_validator",
            Self::Unrecognized { .. } => "unrecognized",
        }
    }
}

/// Staking period and weight of a validator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    pub node_id: NodeId,
    /// Unix time (seconds) the validator starts validating.
    pub start: u64,
    /// Unix time (seconds) the validator stops validating.
    pub end: u64,
    pub weight: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddValidatorTx {
    pub validator: Validator,
    pub reward_address: Address,
    /// Fee charged to delegators, in ten-thousandths of a percent.
    pub delegation_shares: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddDelegatorTx {
    pub validator: Validator,
    pub reward_address: Address,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddSubnetValidatorTx {
    pub validator: Validator,
    pub subnet: SubnetId,
}

/// Proposes moving chain time forward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceTimeTx {
    pub time: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateChainTx {
    pub subnet: SubnetId,
    pub chain_name: String,
    pub vm_id: [u8; 32],
    pub genesis: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSubnetTx {
    pub owners: Vec<Address>,
    pub threshold: u32,
}

/// Moves funds out of the platform chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTx {
    pub destination_chain: ChainId,
    pub amount: u64,
}

/// Moves funds into the platform chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportTx {
    pub source_chain: ChainId,
    pub amount: u64,
}

/// Proposes removing a validator whose staking period ended and paying out its reward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardValidatorTx {
    pub tx_id: TxId,
}
