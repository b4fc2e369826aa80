//! Per-chain address derivation.
//!
//! [`AddressDeriver`] dispatches on [`ChainId`] to one of three pipelines.
//!
//! ## UTXO (Base58Check)
//!
//! ```text
//! payload  = RIPEMD160(SHA256(compressed))
//! checksum = SHA256(SHA256(version || payload))[0..4]
//! address  = Base58(version || payload || checksum)
//! ```
//!
//! ## Ethereum
//!
//! ```text
//! address = "0x" || EIP55(keccak256(uncompressed[1..65])[12..32])
//! ```
//!
//! ## HDAC
//!
//! ```text
//! checksum = swap(SHA256(SHA256(version || payload))[0..4])
//! masked   = swap(checksum ⊕ swap(tag))
//! address  = Base58(version || payload || masked)
//! ```

use std::sync::OnceLock;

use tracing::warn;

use chainaddr_core::constants::{
    BASE58CHECK_ADDRESS_SIZE, CHECKSUM_SIZE, ETH_ADDRESS_SIZE, KECCAK256_SIZE,
};
use chainaddr_core::error::{ChainAddrError, Result};
use chainaddr_core::types::{ChainFamily, ChainId, ChainRegistry, EthAddress};

use crate::bytes::{swap_word, truncate_checksum, xor_merge_logged};
use crate::codec::{base58_encode, bech32_encode, to_eip55};
use crate::hash::{double_sha256, hash160, keccak256};
use crate::keys::{KeyOrigin, PublicKey};

/// Renders addresses from public key bytes using a [`ChainRegistry`].
#[derive(Clone, Debug, Default)]
pub struct AddressDeriver {
    registry: ChainRegistry,
}

impl AddressDeriver {
    /// Creates a deriver over a custom constant table.
    pub fn new(registry: ChainRegistry) -> Self {
        Self { registry }
    }

    /// Shared deriver over the builtin table.
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<AddressDeriver> = OnceLock::new();
        BUILTIN.get_or_init(AddressDeriver::default)
    }

    /// The constant table in use.
    pub fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    /// Derives the canonical address of `key` on its own chain.
    pub fn derive(&self, key: &PublicKey) -> String {
        let chain = key.chain();
        match chain.family() {
            ChainFamily::Utxo => self.utxo_address(key.compressed(), chain),
            ChainFamily::Ethereum => {
                if key.origin() == KeyOrigin::Encoded {
                    warn!(
                        %chain,
                        "Deriving Ethereum address from a legacy-encoded key; \
                         its uncompressed form is a copy of the decoded bytes"
                    );
                }
                self.eth_address(key.uncompressed(), chain)
            }
            ChainFamily::Hdac { checksum_tag } => {
                self.masked_address(key.compressed(), chain, checksum_tag)
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // UTXO
    // ═══════════════════════════════════════════════════════════════════════════

    /// `version || hash160(compressed)`.
    fn versioned_payload(&self, compressed: &[u8], chain: ChainId) -> Vec<u8> {
        let mut data = Vec::with_capacity(BASE58CHECK_ADDRESS_SIZE);
        data.push(self.registry.get(chain).version_byte);
        data.extend_from_slice(&hash160(compressed));
        data
    }

    /// Base58Check P2PKH address.
    ///
    /// `compressed` is not length-checked; a non-33-byte input still yields
    /// a well-formed but unmatched address.
    pub fn utxo_address(&self, compressed: &[u8], chain: ChainId) -> String {
        let mut data = self.versioned_payload(compressed, chain);
        let checksum = truncate_checksum(&double_sha256(&data));
        data.extend_from_slice(&checksum);
        base58_encode(&data)
    }

    /// Bech32 rendering of `version || hash160(compressed)` under the chain's HRP.
    ///
    /// Not selected by [`derive`](Self::derive); callers choose it explicitly.
    pub fn bech32_address(&self, compressed: &[u8], chain: ChainId) -> Result<String> {
        let hrp = self.registry.get(chain).bech32_hrp.as_deref().ok_or_else(|| {
            ChainAddrError::UnsupportedEncoding {
                chain: chain.to_string(),
                encoding: "bech32",
            }
        })?;
        bech32_encode(&self.versioned_payload(compressed, chain), hrp)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // ETHEREUM
    // ═══════════════════════════════════════════════════════════════════════════

    /// EIP-55 address with the chain's prefix.
    pub fn eth_address(&self, uncompressed: &[u8], chain: ChainId) -> String {
        let address = eth_address_from_uncompressed(uncompressed);
        format!(
            "{}{}",
            self.registry.get(chain).address_prefix,
            to_eip55(&address)
        )
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // HDAC
    // ═══════════════════════════════════════════════════════════════════════════

    /// Base58 address whose checksum is XOR-masked with the chain's network tag.
    ///
    /// # Errors
    /// `UnsupportedEncoding` for chains outside the HDAC family.
    pub fn hdac_address(&self, compressed: &[u8], chain: ChainId) -> Result<String> {
        match chain.family() {
            ChainFamily::Hdac { checksum_tag } => {
                Ok(self.masked_address(compressed, chain, checksum_tag))
            }
            ChainFamily::Utxo | ChainFamily::Ethereum => Err(ChainAddrError::UnsupportedEncoding {
                chain: chain.to_string(),
                encoding: "hdac",
            }),
        }
    }

    fn masked_address(
        &self,
        compressed: &[u8],
        chain: ChainId,
        tag: [u8; CHECKSUM_SIZE],
    ) -> String {
        let mut data = self.versioned_payload(compressed, chain);
        let checksum = truncate_checksum(&double_sha256(&data));
        data.extend_from_slice(&hdac_mask(checksum, tag));
        base58_encode(&data)
    }
}

/// Keccak256 of the 64-byte `X || Y`, last 20 bytes.
///
/// The leading SEC 1 format byte is dropped; an empty input hashes as empty.
pub fn eth_address_from_uncompressed(uncompressed: &[u8]) -> EthAddress {
    let coordinates = uncompressed.get(1..).unwrap_or_default();
    let hash = keccak256(coordinates);

    let mut bytes = [0u8; ETH_ADDRESS_SIZE];
    bytes.copy_from_slice(&hash[KECCAK256_SIZE - ETH_ADDRESS_SIZE..]);
    EthAddress::from_array(bytes)
}

/// Masks (or unmasks) a 4-byte checksum with an HDAC network tag.
///
/// Both words are byte-swapped, XOR-merged, and the result swapped back.
/// XOR makes this its own inverse for a fixed tag.
pub fn hdac_mask(
    checksum: [u8; CHECKSUM_SIZE],
    tag: [u8; CHECKSUM_SIZE],
) -> [u8; CHECKSUM_SIZE] {
    let merged = xor_merge_logged(&swap_word(checksum), &swap_word(tag));

    let mut word = [0u8; CHECKSUM_SIZE];
    word.copy_from_slice(&merged[..CHECKSUM_SIZE]);
    swap_word(word)
}
