// SPDX-License-Identifier: Apache-2.0
//! Block and transaction types for the platform chain.
//!
//! These are the artifacts handed to the platform chain after consensus has accepted them.
//! Payloads are tagged by type id on the wire. A payload whose tag this node does not know is
//! preserved as an `Unrecognized` variant instead of being rejected during decoding, so later
//! layers can decide how to surface it.

#![warn(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused_crate_dependencies
)]

mod block;
mod transaction;
pub use block::*;
pub use transaction::*;

#[cfg(feature = "test-utils")]
pub mod test_utils;

/// 32-byte identifier for blocks.
pub type BlockId = [u8; 32];

/// 32-byte identifier for transactions.
pub type TxId = [u8; 32];

/// 32-byte identifier for a blockchain on the network.
pub type ChainId = [u8; 32];

/// 32-byte identifier for a subnet.
pub type SubnetId = [u8; 32];

/// 20-byte identifier for a node participating in consensus.
pub type NodeId = [u8; 20];

/// 20-byte account address.
pub type Address = [u8; 20];
