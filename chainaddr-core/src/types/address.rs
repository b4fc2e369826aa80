//! Address types for chainaddr.
//!
//! - [`UtxoAddress`]: a rendered UTXO-chain address tagged with its chain
//! - [`EthAddress`]: the raw 20-byte Ethereum account address

use serde::{Deserialize, Serialize};

use super::{ChainId, UtxoChain};
use crate::constants::{ETH_ADDRESS_PREFIX, ETH_ADDRESS_SIZE};
use crate::error::{ChainAddrError, Result};

// ═══════════════════════════════════════════════════════════════════════════════
// UTXO ADDRESS
// ═══════════════════════════════════════════════════════════════════════════════

/// A rendered address on a UTXO chain.
///
/// Holding a [`UtxoChain`] means this can never describe an Ethereum address.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UtxoAddress {
    chain: UtxoChain,
    address: String,
}

impl UtxoAddress {
    /// Wraps an already-rendered address string.
    pub fn new(chain: UtxoChain, address: impl Into<String>) -> Self {
        Self {
            chain,
            address: address.into(),
        }
    }

    /// The chain this address belongs to.
    pub fn chain(&self) -> ChainId {
        self.chain.chain()
    }

    /// The rendered address.
    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// Consumes the wrapper, returning the rendered address.
    pub fn into_string(self) -> String {
        self.address
    }
}

impl std::fmt::Display for UtxoAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.address)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ETHEREUM ADDRESS
// ═══════════════════════════════════════════════════════════════════════════════

/// A 20-byte Ethereum address.
///
/// `Display` renders lowercase hex; mixed-case EIP-55 rendering needs Keccak
/// and lives in `chainaddr-crypto`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EthAddress {
    bytes: [u8; ETH_ADDRESS_SIZE],
}

impl EthAddress {
    /// Creates an address from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ETH_ADDRESS_SIZE {
            return Err(ChainAddrError::InvalidAddress(format!(
                "expected {} bytes, got {}",
                ETH_ADDRESS_SIZE,
                bytes.len()
            )));
        }

        let mut arr = [0u8; ETH_ADDRESS_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Creates from a fixed-size array.
    pub fn from_array(bytes: [u8; ETH_ADDRESS_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Lowercase hex without prefix, the input to EIP-55 hashing.
    pub fn to_lower_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Parses from hex string (with or without 0x prefix, any case).
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.strip_prefix(ETH_ADDRESS_PREFIX).unwrap_or(s);
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }
}

impl std::fmt::Debug for EthAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EthAddress({}{})", ETH_ADDRESS_PREFIX, self.to_lower_hex())
    }
}

impl std::fmt::Display for EthAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", ETH_ADDRESS_PREFIX, self.to_lower_hex())
    }
}
