//! Encoding constants for chainaddr.
//!
//! Key and digest sizes follow SEC 1 (secp256k1 point encodings) and the
//! output widths of the hash functions each address scheme relies on.

// ═══════════════════════════════════════════════════════════════════════════════
// SECP256K1 KEY SIZES
// ═══════════════════════════════════════════════════════════════════════════════

/// Size of a secp256k1 private scalar in bytes.
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Size of a SEC 1 compressed public key (`02|03 || X`).
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;

/// Size of a SEC 1 uncompressed public key (`04 || X || Y`).
pub const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;

// ═══════════════════════════════════════════════════════════════════════════════
// HASH OUTPUT SIZES
// ═══════════════════════════════════════════════════════════════════════════════

/// Size of a SHA-256 digest.
pub const SHA256_SIZE: usize = 32;

/// Size of a RIPEMD-160 digest, and so of every hash160 payload.
pub const HASH160_SIZE: usize = 20;

/// Size of keccak256 hash output.
pub const KECCAK256_SIZE: usize = 32;

/// Number of leading double-SHA-256 bytes kept as an address checksum.
pub const CHECKSUM_SIZE: usize = 4;

/// Width of the words reordered by the word-swap transform.
pub const WORD_SIZE: usize = 4;

/// Version byte + hash160 + checksum.
pub const BASE58CHECK_ADDRESS_SIZE: usize = 1 + HASH160_SIZE + CHECKSUM_SIZE;

// ═══════════════════════════════════════════════════════════════════════════════
// ETHEREUM CONSTANTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Size of Ethereum address in bytes (20 bytes = 160 bits).
pub const ETH_ADDRESS_SIZE: usize = 20;

/// Literal prefix of a rendered Ethereum address.
pub const ETH_ADDRESS_PREFIX: &str = "0x";

// ═══════════════════════════════════════════════════════════════════════════════
// HDAC CHECKSUM TAGS
// ═══════════════════════════════════════════════════════════════════════════════
// HDAC replaces the plain Base58Check checksum with one XOR-masked by a
// per-network tag, so its addresses never validate on Bitcoin.

/// Checksum mask for HDAC mainnet, ASCII "HDAC".
pub const HDAC_MAIN_CHECKSUM_TAG: [u8; CHECKSUM_SIZE] = *b"HDAC";

/// Checksum mask for HDAC testnet, ASCII "HTST".
pub const HDAC_TEST_CHECKSUM_TAG: [u8; CHECKSUM_SIZE] = *b"HTST";

/// P2PKH version byte shared by both HDAC networks.
pub const HDAC_PUBKEY_HASH_VERSION: u8 = 0x28;
