//! # chainaddr crypto
//!
//! Hashing, encoding, and address derivation for chainaddr.
//!
//! This crate provides:
//!
//! - **Hash**: SHA-256, double-SHA-256, RIPEMD-160, hash160, Keccak256
//! - **Codec**: Base58, Bech32, hex, EIP-55 casing
//! - **Bytes**: word swap, length-tolerant XOR merge, checksum truncation
//! - **Derive**: the per-chain address pipelines
//! - **Keys**: `PublicKey` and its UTXO / Ethereum views
//! - **Verify**: decoding and checksum checks for rendered addresses
//!
//! ## Example
//!
//! ```rust
//! use chainaddr_core::ChainId;
//! use chainaddr_crypto::{ChainKey, PublicKey};
//!
//! let mut secret = [0u8; 32];
//! secret[31] = 1;
//!
//! let key = PublicKey::new_from_private_key(&secret, ChainId::Ethereum).unwrap();
//! match key.into_chain_key() {
//!     ChainKey::Eth(eth) => {
//!         assert_eq!(eth.address(), "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf")
//!     }
//!     ChainKey::Utxo(_) => unreachable!(),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod bytes;
pub mod codec;
pub mod derive;
pub mod hash;
pub mod keys;
pub mod verify;

// Re-export main types at crate root
pub use bytes::{swap_u32_words, xor_merge, XorMerge};
pub use derive::AddressDeriver;
pub use hash::{double_sha256, hash160, keccak256, sha256};
pub use keys::{ChainKey, EthKey, KeyOrigin, PublicKey, Secp256k1, UtxoKey};
pub use verify::{decode_base58check, is_valid_eip55, unmask_hdac_checksum};
