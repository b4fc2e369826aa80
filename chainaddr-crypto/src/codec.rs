//! String codecs: Base58, Bech32, hex, and EIP-55 casing.
//!
//! Encoders over byte payloads are total except Bech32, whose HRP can be
//! malformed. Decoders return `ChainAddrError::DecodeError` on bad input.

use bech32::{FromBase32, ToBase32, Variant};

use chainaddr_core::error::{ChainAddrError, Result};
use chainaddr_core::types::EthAddress;

use crate::hash::keccak256;

// ═══════════════════════════════════════════════════════════════════════════════
// BASE58
// ═══════════════════════════════════════════════════════════════════════════════

/// Encodes bytes with the Bitcoin Base58 alphabet.
pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Decodes a Base58 string.
pub fn base58_decode(s: &str) -> Result<Vec<u8>> {
    bs58::decode(s)
        .into_vec()
        .map_err(|e| ChainAddrError::DecodeError(format!("base58: {}", e)))
}

// ═══════════════════════════════════════════════════════════════════════════════
// BECH32
// ═══════════════════════════════════════════════════════════════════════════════

/// Encodes bytes as Bech32 (BIP-173 checksum) under `hrp`.
pub fn bech32_encode(data: &[u8], hrp: &str) -> Result<String> {
    bech32::encode(hrp, data.to_base32(), Variant::Bech32)
        .map_err(|e| ChainAddrError::EncodingError(format!("bech32: {}", e)))
}

/// Decodes a Bech32 string into its HRP and payload bytes.
///
/// Bech32m strings are rejected.
pub fn bech32_decode(s: &str) -> Result<(String, Vec<u8>)> {
    let (hrp, data, variant) =
        bech32::decode(s).map_err(|e| ChainAddrError::DecodeError(format!("bech32: {}", e)))?;

    if variant != Variant::Bech32 {
        return Err(ChainAddrError::DecodeError(
            "bech32: expected Bech32, got Bech32m".into(),
        ));
    }

    let bytes = Vec::<u8>::from_base32(&data)
        .map_err(|e| ChainAddrError::DecodeError(format!("bech32: {}", e)))?;
    Ok((hrp, bytes))
}

// ═══════════════════════════════════════════════════════════════════════════════
// HEX
// ═══════════════════════════════════════════════════════════════════════════════

/// Lowercase hex encoding.
pub fn hex_encode(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decodes hex of either case.
pub fn hex_decode(s: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(s)?)
}

// ═══════════════════════════════════════════════════════════════════════════════
// EIP-55
// ═══════════════════════════════════════════════════════════════════════════════

/// Renders an Ethereum address as EIP-55 mixed-case hex, without prefix.
///
/// # Algorithm
///
/// ```text
/// lower = hex(address)
/// hash  = keccak256(ascii(lower))
/// digit i is upper-cased when nibble i of hash >= 8
/// ```
pub fn to_eip55(address: &EthAddress) -> String {
    let lower = address.to_lower_hex();
    let hash = keccak256(lower.as_bytes());

    lower
        .char_indices()
        .map(|(i, c)| {
            let byte = hash[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            if nibble >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}
