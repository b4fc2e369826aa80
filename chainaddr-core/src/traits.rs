//! Common traits for chainaddr.
//!
//! These traits mark the seams where external primitives plug in.

use crate::error::Result;

/// Elliptic-curve point derivation from a private scalar.
///
/// Implementations return the SEC 1 encoding of `private_key · G`:
/// 33 bytes when `compressed`, 65 bytes otherwise. Scalars outside
/// `[1, n)` must be rejected with `ChainAddrError::InvalidKey`, never
/// mapped to a placeholder point.
pub trait PointDeriver: Send + Sync {
    /// Derives the encoded public point for `private_key`.
    fn derive_public_key(&self, private_key: &[u8], compressed: bool) -> Result<Vec<u8>>;
}
