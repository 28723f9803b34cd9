//! Fixtures for tests that need accepted blocks and transactions.

use crate::{
    AbortBlock, AddDelegatorTx, AddSubnetValidatorTx, AddValidatorTx, AdvanceTimeTx, AtomicBlock,
    Block, CommitBlock, CommonBlock, CreateChainTx, CreateSubnetTx, Credential, ExportTx, ImportTx,
    ProposalBlock, RewardValidatorTx, SignedTransaction, StandardBlock, UnsignedTransaction,
    Validator,
};

fn validator(seed: u8) -> Validator {
    Validator { node_id: [seed; 20], start: 1_000, end: 1_000 + 14 * 24 * 60 * 60, weight: 2_000 }
}

fn signed(unsigned: UnsignedTransaction) -> SignedTransaction {
    SignedTransaction::new(unsigned)
        .with_credentials(vec![Credential { signatures: vec![vec![7; 65]] }])
}

pub fn add_delegator_tx() -> SignedTransaction {
    signed(UnsignedTransaction::AddDelegator(AddDelegatorTx {
        validator: validator(1),
        reward_address: [1; 20],
    }))
}

pub fn add_subnet_validator_tx() -> SignedTransaction {
    signed(UnsignedTransaction::AddSubnetValidator(AddSubnetValidatorTx {
        validator: validator(2),
        subnet: [2; 32],
    }))
}

pub fn add_validator_tx() -> SignedTransaction {
    signed(UnsignedTransaction::AddValidator(AddValidatorTx {
        validator: validator(3),
        reward_address: [3; 20],
        delegation_shares: 20_000,
    }))
}

pub fn advance_time_tx() -> SignedTransaction {
    SignedTransaction::new(UnsignedTransaction::AdvanceTime(AdvanceTimeTx { time: 1_700_000_000 }))
}

pub fn create_chain_tx() -> SignedTransaction {
    signed(UnsignedTransaction::CreateChain(CreateChainTx {
        subnet: [4; 32],
        chain_name: "test-chain".to_string(),
        vm_id: [5; 32],
        genesis: b"{}".to_vec(),
    }))
}

pub fn create_subnet_tx() -> SignedTransaction {
    signed(UnsignedTransaction::CreateSubnet(CreateSubnetTx {
        owners: vec![[6; 20], [7; 20]],
        threshold: 1,
    }))
}

pub fn export_tx() -> SignedTransaction {
    signed(UnsignedTransaction::Export(ExportTx { destination_chain: [8; 32], amount: 500 }))
}

pub fn import_tx() -> SignedTransaction {
    signed(UnsignedTransaction::Import(ImportTx { source_chain: [9; 32], amount: 500 }))
}

pub fn reward_validator_tx() -> SignedTransaction {
    SignedTransaction::new(UnsignedTransaction::RewardValidator(RewardValidatorTx {
        tx_id: [10; 32],
    }))
}

/// A transaction whose type id is unknown to this node.
pub fn unrecognized_tx(type_id: u32) -> SignedTransaction {
    signed(UnsignedTransaction::Unrecognized { type_id })
}

/// One transaction of every known kind.
pub fn all_known_txs() -> Vec<SignedTransaction> {
    vec![
        add_delegator_tx(),
        add_subnet_validator_tx(),
        add_validator_tx(),
        advance_time_tx(),
        create_chain_tx(),
        create_subnet_tx(),
        export_tx(),
        import_tx(),
        reward_validator_tx(),
    ]
}

fn common(height: u64) -> CommonBlock {
    CommonBlock { parent: [height.wrapping_sub(1) as u8; 32], height }
}

pub fn abort_block(height: u64) -> Block {
    Block::Abort(AbortBlock { common: common(height) })
}

pub fn commit_block(height: u64) -> Block {
    Block::Commit(CommitBlock { common: common(height) })
}

pub fn atomic_block(height: u64, tx: SignedTransaction) -> Block {
    Block::Atomic(AtomicBlock { common: common(height), tx })
}

pub fn proposal_block(height: u64, tx: SignedTransaction) -> Block {
    Block::Proposal(ProposalBlock { common: common(height), tx })
}

pub fn standard_block(height: u64, txs: Vec<SignedTransaction>) -> Block {
    Block::Standard(StandardBlock { common: common(height), txs })
}

/// A block whose type id is unknown to this node.
pub fn unrecognized_block(height: u64, type_id: u32) -> Block {
    Block::Unrecognized { common: common(height), type_id }
}
