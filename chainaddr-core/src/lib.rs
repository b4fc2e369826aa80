//! # chainaddr core
//!
//! Core types, errors, and constants for deterministic multi-chain address
//! derivation.
//!
//! This crate provides the foundational building blocks used by `chainaddr-crypto`:
//!
//! - **Types**: chain identifiers, the chain constant registry, address values
//! - **Errors**: the `ChainAddrError` hierarchy
//! - **Constants**: key, digest, and checksum sizes; HDAC checksum tags
//! - **Traits**: the point-derivation seam
//!
//! ## Example
//!
//! ```rust
//! use chainaddr_core::{ChainId, ChainRegistry};
//!
//! let registry = ChainRegistry::default();
//! assert_eq!(registry.get(ChainId::Litecoin).version_byte, 0x30);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{ChainAddrError, Result};
pub use traits::*;
pub use types::*;
