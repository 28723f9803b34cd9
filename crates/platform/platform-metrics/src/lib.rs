// SPDX-License-Identifier: Apache-2.0
//! Platform chain metrics count the blocks and transactions accepted by consensus.
//!
//! Each block and transaction kind has its own counter. Accepting a block counts the block and
//! every transaction it carries. Blocks or transactions of a kind this node does not know are
//! reported as errors instead of being dropped silently.

#![warn(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused_crate_dependencies
)]

mod api;
mod block;
mod config;
mod error;
mod metrics;
mod registry;
mod transaction;

pub use api::*;
pub use config::*;
pub use error::*;
pub use metrics::*;
pub use registry::Registerer;

#[cfg(test)]
#[path = "tests/test_utils.rs"]
mod test_utils;

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod registry_tests;

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod api_tests;

// only used in integration tests
#[cfg(test)]
use tracing_subscriber as _;
