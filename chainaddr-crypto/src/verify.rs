//! Decoding and checksum verification of rendered addresses.
//!
//! These invert the encoders in [`derive`](crate::derive): they recover the
//! version byte and hash160 payload and check the embedded checksum. They say
//! nothing about whether an address is in use.

use chainaddr_core::constants::{
    BASE58CHECK_ADDRESS_SIZE, CHECKSUM_SIZE, ETH_ADDRESS_PREFIX, HASH160_SIZE,
};
use chainaddr_core::error::{ChainAddrError, Result};
use chainaddr_core::types::EthAddress;

use crate::bytes::truncate_checksum;
use crate::codec::{base58_decode, to_eip55};
use crate::derive::hdac_mask;
use crate::hash::double_sha256;

/// Version byte and hash160 payload of a decoded Base58 address.
pub type DecodedPayload = (u8, [u8; HASH160_SIZE]);

struct RawBase58Address {
    body: [u8; 1 + HASH160_SIZE],
    checksum: [u8; CHECKSUM_SIZE],
}

impl RawBase58Address {
    fn parse(address: &str) -> Result<Self> {
        let raw = base58_decode(address)?;
        if raw.len() != BASE58CHECK_ADDRESS_SIZE {
            return Err(ChainAddrError::InvalidAddress(format!(
                "expected {} decoded bytes, got {}",
                BASE58CHECK_ADDRESS_SIZE,
                raw.len()
            )));
        }

        let (body_bytes, checksum_bytes) = raw.split_at(1 + HASH160_SIZE);
        let mut body = [0u8; 1 + HASH160_SIZE];
        body.copy_from_slice(body_bytes);
        let mut checksum = [0u8; CHECKSUM_SIZE];
        checksum.copy_from_slice(checksum_bytes);

        Ok(Self { body, checksum })
    }

    fn expected_checksum(&self) -> [u8; CHECKSUM_SIZE] {
        truncate_checksum(&double_sha256(&self.body))
    }

    fn payload(&self) -> DecodedPayload {
        let mut hash = [0u8; HASH160_SIZE];
        hash.copy_from_slice(&self.body[1..]);
        (self.body[0], hash)
    }
}

fn check(expected: [u8; CHECKSUM_SIZE], actual: [u8; CHECKSUM_SIZE]) -> Result<()> {
    if expected != actual {
        return Err(ChainAddrError::ChecksumMismatch {
            expected: hex::encode(expected),
            actual: hex::encode(actual),
        });
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// BASE58CHECK
// ═══════════════════════════════════════════════════════════════════════════════

/// Decodes a Base58Check address and verifies its double-SHA-256 checksum.
pub fn decode_base58check(address: &str) -> Result<DecodedPayload> {
    let raw = RawBase58Address::parse(address)?;
    check(raw.expected_checksum(), raw.checksum)?;
    Ok(raw.payload())
}

// ═══════════════════════════════════════════════════════════════════════════════
// HDAC
// ═══════════════════════════════════════════════════════════════════════════════

/// Removes the HDAC mask from an address's trailing bytes.
///
/// For a well-formed address this is the standard double-SHA-256 checksum
/// of its version byte and payload.
pub fn unmask_hdac_checksum(
    address: &str,
    tag: [u8; CHECKSUM_SIZE],
) -> Result<[u8; CHECKSUM_SIZE]> {
    let raw = RawBase58Address::parse(address)?;
    Ok(hdac_mask(raw.checksum, tag))
}

/// Decodes an HDAC address and verifies its masked checksum against `tag`.
pub fn decode_hdac(address: &str, tag: [u8; CHECKSUM_SIZE]) -> Result<DecodedPayload> {
    let raw = RawBase58Address::parse(address)?;
    check(raw.expected_checksum(), hdac_mask(raw.checksum, tag))?;
    Ok(raw.payload())
}

// ═══════════════════════════════════════════════════════════════════════════════
// EIP-55
// ═══════════════════════════════════════════════════════════════════════════════

/// Returns true if `address` is "0x" + 40 hex digits cased per EIP-55.
pub fn is_valid_eip55(address: &str) -> bool {
    let Some(digits) = address.strip_prefix(ETH_ADDRESS_PREFIX) else {
        return false;
    };

    EthAddress::from_hex(digits)
        .map(|parsed| to_eip55(&parsed) == digits)
        .unwrap_or(false)
}
