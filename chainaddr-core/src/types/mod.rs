//! Domain types for chainaddr.
//!
//! - [`ChainId`] / [`ChainRegistry`]: which chain, and its encoding constants
//! - [`UtxoAddress`]: rendered UTXO address carrying its chain
//! - [`EthAddress`]: raw Ethereum address bytes

mod address;
mod chain;

pub use address::*;
pub use chain::*;
