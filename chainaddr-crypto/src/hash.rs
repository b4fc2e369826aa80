//! Hash primitives used by the address schemes.
//!
//! Thin bindings over RustCrypto implementations. Every function returns a
//! fixed-size array so callers cannot mistake digest widths:
//!
//! ```text
//! hash160(x)       = RIPEMD160(SHA256(x))     20 bytes, UTXO payload
//! double_sha256(x) = SHA256(SHA256(x))        32 bytes, checksum source
//! keccak256(x)                                 32 bytes, Ethereum
//! ```

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use sha3::Keccak256;

use chainaddr_core::constants::{HASH160_SIZE, KECCAK256_SIZE, SHA256_SIZE};

// ═══════════════════════════════════════════════════════════════════════════════
// SHA-256 / RIPEMD-160
// ═══════════════════════════════════════════════════════════════════════════════

/// Computes SHA-256.
pub fn sha256(input: &[u8]) -> [u8; SHA256_SIZE] {
    Sha256::digest(input).into()
}

/// Computes SHA-256 applied twice in sequence.
pub fn double_sha256(input: &[u8]) -> [u8; SHA256_SIZE] {
    sha256(&sha256(input))
}

/// Computes RIPEMD-160.
pub fn ripemd160(input: &[u8]) -> [u8; HASH160_SIZE] {
    Ripemd160::digest(input).into()
}

/// Computes `RIPEMD160(SHA256(input))`, the public-key-hash payload.
pub fn hash160(input: &[u8]) -> [u8; HASH160_SIZE] {
    ripemd160(&sha256(input))
}

// ═══════════════════════════════════════════════════════════════════════════════
// KECCAK256 (for Ethereum addresses)
// ═══════════════════════════════════════════════════════════════════════════════

/// Computes Keccak256 hash (used for Ethereum addresses).
///
/// Note: Keccak256 is NOT SHA3-256. They use different padding.
pub fn keccak256(input: &[u8]) -> [u8; KECCAK256_SIZE] {
    let mut hasher = Keccak256::new();
    Digest::update(&mut hasher, input);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_double_sha256_is_sha256_twice() {
        let once = sha256(b"hello");
        assert_eq!(double_sha256(b"hello"), sha256(&once));
        assert_ne!(double_sha256(b"hello"), once);
    }

    #[test]
    fn test_ripemd160_empty() {
        assert_eq!(
            hex::encode(ripemd160(b"")),
            "9c1185a5c5e9fc54612808977ee8f548b2258d31"
        );
    }

    #[test]
    fn test_hash160_generator_point() {
        // Compressed encoding of the secp256k1 generator (private key 1)
        let g = hex::decode("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
            .unwrap();
        assert_eq!(
            hex::encode(hash160(&g)),
            "751e76e8199196d454941c45d1b3a323f1433bd6"
        );
    }

    #[test]
    fn test_keccak256() {
        let hash = keccak256(b"hello");
        assert_eq!(hash.len(), 32);

        // Known test vector
        let expected = hex::decode(
            "1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        ).unwrap();
        assert_eq!(hash.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_keccak256_differs_from_sha256() {
        assert_ne!(keccak256(b"hello"), sha256(b"hello"));
    }
}
