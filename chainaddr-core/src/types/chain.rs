//! Chain identifiers and per-chain encoding constants.
//!
//! - [`ChainId`]: closed set of supported chains
//! - [`UtxoChain`]: a `ChainId` proven not to be Ethereum
//! - [`ChainConstants`]: version byte, address prefix, Bech32 HRP
//! - [`ChainRegistry`]: the constant table, with JSON overrides

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    CHECKSUM_SIZE, ETH_ADDRESS_PREFIX, HDAC_MAIN_CHECKSUM_TAG, HDAC_PUBKEY_HASH_VERSION,
    HDAC_TEST_CHECKSUM_TAG,
};
use crate::error::{ChainAddrError, Result};

// ═══════════════════════════════════════════════════════════════════════════════
// CHAIN IDENTIFIER
// ═══════════════════════════════════════════════════════════════════════════════

/// A chain whose address format this crate can render.
///
/// Discriminants index [`ChainRegistry`]'s table, so `ALL` must list the
/// variants in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChainId {
    /// Bitcoin mainnet
    Bitcoin,
    /// Litecoin mainnet
    Litecoin,
    /// Dash mainnet
    Dash,
    /// Bitcoin Cash mainnet (legacy address format)
    BitcoinCash,
    /// Dogecoin mainnet
    Dogecoin,
    /// Ethereum and EVM chains
    Ethereum,
    /// HDAC mainnet
    HdacMain,
    /// HDAC testnet
    HdacTest,
}

/// Address scheme family a chain belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChainFamily {
    /// Base58Check over version byte + hash160
    Utxo,
    /// Keccak256 + EIP-55
    Ethereum,
    /// Base58 with a checksum XOR-masked by the network tag
    Hdac {
        /// 4-byte mask applied to the double-SHA-256 checksum
        checksum_tag: [u8; CHECKSUM_SIZE],
    },
}

impl ChainId {
    /// Number of supported chains.
    pub const COUNT: usize = 8;

    /// Every chain, in discriminant order.
    pub const ALL: [ChainId; ChainId::COUNT] = [
        ChainId::Bitcoin,
        ChainId::Litecoin,
        ChainId::Dash,
        ChainId::BitcoinCash,
        ChainId::Dogecoin,
        ChainId::Ethereum,
        ChainId::HdacMain,
        ChainId::HdacTest,
    ];

    /// Canonical kebab-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            ChainId::Bitcoin => "bitcoin",
            ChainId::Litecoin => "litecoin",
            ChainId::Dash => "dash",
            ChainId::BitcoinCash => "bitcoin-cash",
            ChainId::Dogecoin => "dogecoin",
            ChainId::Ethereum => "ethereum",
            ChainId::HdacMain => "hdac-main",
            ChainId::HdacTest => "hdac-test",
        }
    }

    /// Address scheme family.
    pub const fn family(self) -> ChainFamily {
        match self {
            ChainId::Bitcoin
            | ChainId::Litecoin
            | ChainId::Dash
            | ChainId::BitcoinCash
            | ChainId::Dogecoin => ChainFamily::Utxo,
            ChainId::Ethereum => ChainFamily::Ethereum,
            ChainId::HdacMain => ChainFamily::Hdac {
                checksum_tag: HDAC_MAIN_CHECKSUM_TAG,
            },
            ChainId::HdacTest => ChainFamily::Hdac {
                checksum_tag: HDAC_TEST_CHECKSUM_TAG,
            },
        }
    }

    /// Returns true for the Ethereum account-model chain.
    pub const fn is_ethereum(self) -> bool {
        matches!(self, ChainId::Ethereum)
    }

    /// Narrows to a [`UtxoChain`], or `None` for Ethereum.
    pub const fn as_utxo(self) -> Option<UtxoChain> {
        if self.is_ethereum() {
            None
        } else {
            Some(UtxoChain(self))
        }
    }

    /// Compiled-in constants for this chain.
    pub fn default_constants(self) -> ChainConstants {
        match self {
            ChainId::Bitcoin => ChainConstants::utxo(0x00, Some("bc")),
            ChainId::Litecoin => ChainConstants::utxo(0x30, Some("ltc")),
            ChainId::Dash => ChainConstants::utxo(0x4c, None),
            ChainId::BitcoinCash => ChainConstants::utxo(0x00, Some("bitcoincash")),
            ChainId::Dogecoin => ChainConstants::utxo(0x1e, None),
            ChainId::Ethereum => ChainConstants {
                version_byte: 0x00,
                address_prefix: ETH_ADDRESS_PREFIX.to_string(),
                bech32_hrp: None,
            },
            ChainId::HdacMain | ChainId::HdacTest => {
                ChainConstants::utxo(HDAC_PUBKEY_HASH_VERSION, None)
            }
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainId {
    type Err = ChainAddrError;

    fn from_str(s: &str) -> Result<Self> {
        ChainId::ALL
            .into_iter()
            .find(|chain| chain.as_str() == s)
            .ok_or_else(|| ChainAddrError::ConfigError(format!("unknown chain '{}'", s)))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// UTXO CHAIN
// ═══════════════════════════════════════════════════════════════════════════════

/// A [`ChainId`] that is known not to be Ethereum.
///
/// Only obtainable through [`ChainId::as_utxo`] or `TryFrom<ChainId>`, so a
/// value of this type is the capability to build a [`UtxoAddress`](super::UtxoAddress).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "ChainId", try_from = "ChainId")]
pub struct UtxoChain(ChainId);

impl UtxoChain {
    /// The underlying chain.
    pub const fn chain(self) -> ChainId {
        self.0
    }
}

impl TryFrom<ChainId> for UtxoChain {
    type Error = ChainAddrError;

    fn try_from(chain: ChainId) -> Result<Self> {
        chain.as_utxo().ok_or(ChainAddrError::UnsupportedEncoding {
            chain: chain.to_string(),
            encoding: "utxo",
        })
    }
}

impl From<UtxoChain> for ChainId {
    fn from(chain: UtxoChain) -> Self {
        chain.0
    }
}

impl fmt::Display for UtxoChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CHAIN CONSTANTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Encoding parameters of one chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConstants {
    /// Public-key-hash version byte prepended to hash160 payloads
    pub version_byte: u8,
    /// Literal prefix of the rendered address ("0x" for Ethereum, empty otherwise)
    #[serde(default)]
    pub address_prefix: String,
    /// Bech32 human-readable part, if the chain has a Bech32 rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bech32_hrp: Option<String>,
}

impl ChainConstants {
    fn utxo(version_byte: u8, bech32_hrp: Option<&str>) -> Self {
        Self {
            version_byte,
            address_prefix: String::new(),
            bech32_hrp: bech32_hrp.map(str::to_string),
        }
    }

    fn validate(&self, chain: ChainId) -> Result<()> {
        if chain.is_ethereum() && self.address_prefix.is_empty() {
            return Err(ChainAddrError::ConfigError(format!(
                "{} requires a non-empty address prefix",
                chain
            )));
        }

        if !chain.is_ethereum() && !self.address_prefix.is_empty() {
            return Err(ChainAddrError::ConfigError(format!(
                "{} does not take an address prefix, got '{}'",
                chain, self.address_prefix
            )));
        }

        if let Some(hrp) = &self.bech32_hrp {
            let well_formed = !hrp.is_empty()
                && hrp
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit());
            if !well_formed {
                return Err(ChainAddrError::ConfigError(format!(
                    "invalid bech32 hrp '{}' for {}",
                    hrp, chain
                )));
            }
        }

        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CHAIN REGISTRY
// ═══════════════════════════════════════════════════════════════════════════════

/// Read-only table of [`ChainConstants`], one entry per [`ChainId`].
///
/// Every chain always has an entry, so lookups are total.
///
/// # Example
/// ```
/// use chainaddr_core::{ChainId, ChainRegistry};
///
/// let registry = ChainRegistry::from_json(r#"{ "litecoin": { "version_byte": 50 } }"#).unwrap();
/// assert_eq!(registry.get(ChainId::Litecoin).version_byte, 50);
/// assert_eq!(registry.get(ChainId::Bitcoin).version_byte, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainRegistry {
    chains: [ChainConstants; ChainId::COUNT],
}

impl ChainRegistry {
    /// The compiled-in table.
    pub fn builtin() -> Self {
        Self {
            chains: ChainId::ALL.map(ChainId::default_constants),
        }
    }

    /// Builds a registry from JSON overrides layered over [`builtin`](Self::builtin).
    ///
    /// The JSON is an object keyed by chain name:
    ///
    /// ```text
    /// { "dogecoin": { "version_byte": 30, "bech32_hrp": "doge" } }
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let overrides: BTreeMap<ChainId, ChainConstants> = serde_json::from_str(json)?;

        overrides
            .into_iter()
            .try_fold(Self::builtin(), |registry, (chain, constants)| {
                registry.with_override(chain, constants)
            })
    }

    /// Replaces the constants of one chain.
    pub fn with_override(mut self, chain: ChainId, constants: ChainConstants) -> Result<Self> {
        constants.validate(chain)?;
        debug!(
            %chain,
            version_byte = constants.version_byte,
            hrp = ?constants.bech32_hrp,
            "Overriding chain constants"
        );
        self.chains[chain.index()] = constants;
        Ok(self)
    }

    /// Constants for `chain`.
    pub fn get(&self, chain: ChainId) -> &ChainConstants {
        &self.chains[chain.index()]
    }

    /// Serializes the effective table as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        let table: BTreeMap<ChainId, &ChainConstants> = ChainId::ALL
            .into_iter()
            .map(|chain| (chain, self.get(chain)))
            .collect();
        Ok(serde_json::to_string_pretty(&table)?)
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
