//! Public keys and their chain-specific views.
//!
//! - [`Secp256k1`]: the default [`PointDeriver`], backed by `k256`
//! - [`PublicKey`]: compressed + uncompressed encodings tagged with a chain
//! - [`ChainKey`]: a `PublicKey` split by account model, so UTXO-only
//!   operations are unavailable on Ethereum keys at compile time

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use serde::Serialize;
use tracing::debug;

use chainaddr_core::constants::{
    COMPRESSED_PUBLIC_KEY_SIZE, PRIVATE_KEY_SIZE, UNCOMPRESSED_PUBLIC_KEY_SIZE,
};
use chainaddr_core::error::{ChainAddrError, Result};
use chainaddr_core::traits::PointDeriver;
use chainaddr_core::types::{ChainId, EthAddress, UtxoAddress, UtxoChain};

use crate::codec::{base58_decode, hex_decode, hex_encode};
use crate::derive::{eth_address_from_uncompressed, AddressDeriver};

// ═══════════════════════════════════════════════════════════════════════════════
// POINT DERIVATION
// ═══════════════════════════════════════════════════════════════════════════════

/// secp256k1 point derivation via `k256`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Secp256k1;

impl PointDeriver for Secp256k1 {
    fn derive_public_key(&self, private_key: &[u8], compressed: bool) -> Result<Vec<u8>> {
        if private_key.len() != PRIVATE_KEY_SIZE {
            return Err(ChainAddrError::InvalidKeySize {
                expected: PRIVATE_KEY_SIZE,
                actual: private_key.len(),
            });
        }

        let secret = SecretKey::from_slice(private_key).map_err(|_| {
            ChainAddrError::InvalidKey("scalar is zero or not below the curve order".into())
        })?;

        Ok(secret
            .public_key()
            .to_encoded_point(compressed)
            .as_bytes()
            .to_vec())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PUBLIC KEY
// ═══════════════════════════════════════════════════════════════════════════════

/// How a [`PublicKey`] was constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyOrigin {
    /// Derived from a private scalar; both encodings are genuine.
    PrivateKey,
    /// Decoded from a Base58 string; both fields hold the same bytes.
    Encoded,
}

/// A public key bound to the chain it will be addressed on.
///
/// Immutable after construction.
///
/// # Example
///
/// ```rust
/// use chainaddr_core::ChainId;
/// use chainaddr_crypto::PublicKey;
///
/// let mut secret = [0u8; 32];
/// secret[31] = 1;
///
/// let key = PublicKey::new_from_private_key(&secret, ChainId::Bitcoin).unwrap();
/// assert_eq!(key.address(), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct PublicKey {
    chain: ChainId,
    origin: KeyOrigin,
    #[serde(with = "hex")]
    compressed: Vec<u8>,
    #[serde(with = "hex")]
    uncompressed: Vec<u8>,
}

impl PublicKey {
    /// Derives both encodings from a 32-byte private key with [`Secp256k1`].
    ///
    /// # Errors
    /// `InvalidKeySize` for a wrong-length input, `InvalidKey` for a scalar
    /// outside `[1, n)`.
    pub fn new_from_private_key(private_key: &[u8], chain: ChainId) -> Result<Self> {
        Self::new_from_private_key_with(&Secp256k1, private_key, chain)
    }

    /// Derives both encodings with a caller-supplied point derivation.
    ///
    /// Encodings of the wrong width are rejected rather than stored.
    pub fn new_from_private_key_with<D>(
        deriver: &D,
        private_key: &[u8],
        chain: ChainId,
    ) -> Result<Self>
    where
        D: PointDeriver + ?Sized,
    {
        let compressed = deriver.derive_public_key(private_key, true)?;
        check_len(&compressed, COMPRESSED_PUBLIC_KEY_SIZE)?;

        let uncompressed = deriver.derive_public_key(private_key, false)?;
        check_len(&uncompressed, UNCOMPRESSED_PUBLIC_KEY_SIZE)?;

        debug!(%chain, origin = ?KeyOrigin::PrivateKey, "Constructed public key");

        Ok(Self {
            chain,
            origin: KeyOrigin::PrivateKey,
            compressed,
            uncompressed,
        })
    }

    /// Legacy construction from a Base58 string whose payload is hex text.
    ///
    /// The input is trimmed of whitespace and NUL padding, Base58-decoded,
    /// and the decoded text hex-decoded. The same bytes are stored as both
    /// the compressed and the uncompressed form, so the uncompressed form is
    /// not a real SEC 1 encoding. Ethereum addresses derived from such keys
    /// are logged with a warning.
    ///
    /// # Errors
    /// `DecodeError` when the input is empty or any decoding stage fails.
    pub fn new_from_encoded(encoded: &[u8], chain: ChainId) -> Result<Self> {
        let text = std::str::from_utf8(encoded)
            .map_err(|e| ChainAddrError::DecodeError(format!("input is not UTF-8: {}", e)))?
            .trim_matches(|c: char| c.is_whitespace() || c == '\0');

        if text.is_empty() {
            return Err(ChainAddrError::DecodeError("empty input".into()));
        }

        let decoded = base58_decode(text)?;
        let hex_text = std::str::from_utf8(&decoded)
            .map_err(|_| ChainAddrError::DecodeError("decoded payload is not hex text".into()))?;

        let bytes = hex_decode(hex_text.trim()).map_err(|e| {
            ChainAddrError::DecodeError(format!("decoded payload is not hex: {}", e))
        })?;

        if bytes.is_empty() {
            return Err(ChainAddrError::DecodeError("decoded key is empty".into()));
        }

        debug!(%chain, origin = ?KeyOrigin::Encoded, len = bytes.len(), "Constructed public key");

        Ok(Self {
            chain,
            origin: KeyOrigin::Encoded,
            compressed: bytes.clone(),
            uncompressed: bytes,
        })
    }

    /// The chain this key is addressed on.
    pub fn chain(&self) -> ChainId {
        self.chain
    }

    /// How this key was constructed.
    pub fn origin(&self) -> KeyOrigin {
        self.origin
    }

    /// SEC 1 compressed encoding (33 bytes for derived keys).
    pub fn compressed(&self) -> &[u8] {
        &self.compressed
    }

    /// SEC 1 uncompressed encoding (65 bytes for derived keys).
    pub fn uncompressed(&self) -> &[u8] {
        &self.uncompressed
    }

    /// Lowercase hex of the compressed encoding.
    pub fn hex(&self) -> String {
        hex_encode(&self.compressed)
    }

    /// Canonical address on this key's chain, using the builtin constants.
    pub fn address(&self) -> String {
        AddressDeriver::builtin().derive(self)
    }

    /// Canonical address under a custom [`AddressDeriver`].
    pub fn address_with(&self, deriver: &AddressDeriver) -> String {
        deriver.derive(self)
    }

    /// The address wrapped with its chain.
    ///
    /// Prefer matching on [`ChainKey`], which makes this call impossible on
    /// Ethereum keys.
    ///
    /// # Panics
    /// Panics if the key belongs to Ethereum. Asking an account-model key for
    /// a UTXO address is a programming error.
    pub fn utxo_address(&self) -> UtxoAddress {
        match self.chain.as_utxo() {
            Some(chain) => UtxoAddress::new(chain, self.address()),
            None => panic!(
                "utxo_address() called on a {} key; Ethereum keys have no UTXO address",
                self.chain
            ),
        }
    }

    /// Splits by account model.
    pub fn into_chain_key(self) -> ChainKey {
        match self.chain.as_utxo() {
            Some(chain) => ChainKey::Utxo(UtxoKey { chain, key: self }),
            None => ChainKey::Eth(EthKey { key: self }),
        }
    }
}

fn check_len(encoded: &[u8], expected: usize) -> Result<()> {
    if encoded.len() != expected {
        return Err(ChainAddrError::InvalidKeySize {
            expected,
            actual: encoded.len(),
        });
    }
    Ok(())
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({}, {})", self.chain, self.hex())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CHAIN-SPECIFIC VIEWS
// ═══════════════════════════════════════════════════════════════════════════════

/// A [`PublicKey`] split by the kind of address it can produce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChainKey {
    /// Bitcoin-family and HDAC keys
    Utxo(UtxoKey),
    /// Ethereum keys
    Eth(EthKey),
}

impl From<PublicKey> for ChainKey {
    fn from(key: PublicKey) -> Self {
        key.into_chain_key()
    }
}

impl ChainKey {
    /// Canonical address, whichever the variant.
    pub fn address(&self) -> String {
        self.public_key().address()
    }

    /// The wrapped key.
    pub fn public_key(&self) -> &PublicKey {
        match self {
            ChainKey::Utxo(key) => key.public_key(),
            ChainKey::Eth(key) => key.public_key(),
        }
    }
}

/// A public key on a UTXO chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UtxoKey {
    chain: UtxoChain,
    key: PublicKey,
}

impl UtxoKey {
    /// The chain, as a UTXO chain.
    pub fn chain(&self) -> UtxoChain {
        self.chain
    }

    /// The wrapped key.
    pub fn public_key(&self) -> &PublicKey {
        &self.key
    }

    /// Canonical address string.
    pub fn address(&self) -> String {
        self.key.address()
    }

    /// Canonical address with its chain.
    pub fn utxo_address(&self) -> UtxoAddress {
        UtxoAddress::new(self.chain, self.address())
    }

    /// Bech32 rendering under the builtin constants.
    ///
    /// # Errors
    /// `UnsupportedEncoding` when the chain has no Bech32 HRP.
    pub fn bech32_address(&self) -> Result<String> {
        self.bech32_address_with(AddressDeriver::builtin())
    }

    /// Bech32 rendering under a custom constant table.
    pub fn bech32_address_with(&self, deriver: &AddressDeriver) -> Result<String> {
        deriver.bech32_address(self.key.compressed(), self.chain.chain())
    }
}

/// A public key on Ethereum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EthKey {
    key: PublicKey,
}

impl EthKey {
    /// The wrapped key.
    pub fn public_key(&self) -> &PublicKey {
        &self.key
    }

    /// EIP-55 address with "0x" prefix.
    pub fn address(&self) -> String {
        self.key.address()
    }

    /// The raw 20-byte address.
    pub fn eth_address(&self) -> EthAddress {
        eth_address_from_uncompressed(self.key.uncompressed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::base58_encode;
    use chainaddr_core::types::{ChainConstants, ChainRegistry};
    use test_case::test_case;

    fn key_one() -> [u8; 32] {
        let mut key = [0u8; 32];
        key[31] = 1;
        key
    }

    fn encoded(bytes: &[u8]) -> Vec<u8> {
        base58_encode(hex::encode(bytes).as_bytes()).into_bytes()
    }

    /// Returns fixed bytes regardless of input.
    struct FixedDeriver(Vec<u8>);

    impl PointDeriver for FixedDeriver {
        fn derive_public_key(&self, _private_key: &[u8], _compressed: bool) -> Result<Vec<u8>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_generator_point_encodings() {
        let key = PublicKey::new_from_private_key(&key_one(), ChainId::Bitcoin).unwrap();

        assert_eq!(
            key.hex(),
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
        assert_eq!(key.compressed().len(), COMPRESSED_PUBLIC_KEY_SIZE);
        assert_eq!(key.uncompressed().len(), UNCOMPRESSED_PUBLIC_KEY_SIZE);
        assert_eq!(key.uncompressed()[0], 0x04);
        assert_eq!(&key.uncompressed()[1..33], &key.compressed()[1..]);
        assert_eq!(key.origin(), KeyOrigin::PrivateKey);
    }

    #[test]
    fn test_golden_addresses() {
        let btc = PublicKey::new_from_private_key(&key_one(), ChainId::Bitcoin).unwrap();
        assert_eq!(btc.address(), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");

        let eth = PublicKey::new_from_private_key(&key_one(), ChainId::Ethereum).unwrap();
        assert_eq!(eth.address(), "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf");
    }

    #[test]
    fn test_address_is_deterministic() {
        for chain in ChainId::ALL {
            let key = PublicKey::new_from_private_key(&[0x42; 32], chain).unwrap();
            assert_eq!(key.address(), key.address());
        }
    }

    #[test_case(&[0u8; 32] ; "zero scalar")]
    #[test_case(&[0xff; 32] ; "scalar above order")]
    fn test_invalid_scalar(private_key: &[u8]) {
        let err = PublicKey::new_from_private_key(private_key, ChainId::Bitcoin).unwrap_err();
        assert!(matches!(err, ChainAddrError::InvalidKey(_)));
    }

    #[test]
    fn test_invalid_private_key_length() {
        let err = PublicKey::new_from_private_key(&[1u8; 31], ChainId::Bitcoin).unwrap_err();
        assert!(matches!(
            err,
            ChainAddrError::InvalidKeySize { expected: 32, actual: 31 }
        ));
    }

    #[test]
    fn test_malformed_deriver_output_rejected() {
        let deriver = FixedDeriver(vec![0x02; 20]);
        let err = PublicKey::new_from_private_key_with(&deriver, &key_one(), ChainId::Bitcoin)
            .unwrap_err();
        assert!(matches!(
            err,
            ChainAddrError::InvalidKeySize { expected: 33, actual: 20 }
        ));
    }

    #[test]
    fn test_deriver_as_trait_object() {
        let deriver: &dyn PointDeriver = &Secp256k1;
        let key = PublicKey::new_from_private_key_with(deriver, &key_one(), ChainId::Dash).unwrap();
        assert_eq!(key.chain(), ChainId::Dash);
    }

    #[test]
    fn test_new_from_encoded() {
        let compressed =
            hex::decode("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
                .unwrap();
        let key = PublicKey::new_from_encoded(&encoded(&compressed), ChainId::Bitcoin).unwrap();

        assert_eq!(key.compressed(), compressed.as_slice());
        assert_eq!(key.uncompressed(), key.compressed());
        assert_eq!(key.origin(), KeyOrigin::Encoded);
        assert_eq!(key.address(), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
    }

    #[test]
    fn test_new_from_encoded_trims_padding() {
        let mut input = b"  ".to_vec();
        input.extend(encoded(&[0xab, 0xcd]));
        input.extend_from_slice(b"\n\0\0");

        let key = PublicKey::new_from_encoded(&input, ChainId::Litecoin).unwrap();
        assert_eq!(key.hex(), "abcd");
    }

    #[test_case(b"" ; "empty")]
    #[test_case(b"   \0" ; "only padding")]
    #[test_case(b"0OIl" ; "not base58")]
    #[test_case(&[0xff, 0xfe] ; "not utf8")]
    fn test_new_from_encoded_rejects(input: &[u8]) {
        let err = PublicKey::new_from_encoded(input, ChainId::Bitcoin).unwrap_err();
        assert!(matches!(err, ChainAddrError::DecodeError(_)), "{:?}", err);
    }

    #[test]
    fn test_new_from_encoded_rejects_non_hex_payload() {
        let input = base58_encode(b"not hex at all").into_bytes();
        let err = PublicKey::new_from_encoded(&input, ChainId::Bitcoin).unwrap_err();
        assert!(matches!(err, ChainAddrError::DecodeError(_)));
    }

    #[test]
    fn test_utxo_address() {
        let key = PublicKey::new_from_private_key(&key_one(), ChainId::Dogecoin).unwrap();
        let address = key.utxo_address();

        assert_eq!(address.chain(), ChainId::Dogecoin);
        assert_eq!(address.as_str(), key.address());
    }

    #[test]
    fn test_utxo_address_allowed_on_hdac() {
        let key = PublicKey::new_from_private_key(&key_one(), ChainId::HdacMain).unwrap();
        assert_eq!(key.utxo_address().chain(), ChainId::HdacMain);
    }

    #[test]
    #[should_panic(expected = "utxo_address() called on a ethereum key")]
    fn test_utxo_address_panics_on_ethereum() {
        let key = PublicKey::new_from_private_key(&key_one(), ChainId::Ethereum).unwrap();
        let _ = key.utxo_address();
    }

    #[test]
    fn test_chain_key_split() {
        let btc = PublicKey::new_from_private_key(&key_one(), ChainId::Bitcoin).unwrap();
        let eth = PublicKey::new_from_private_key(&key_one(), ChainId::Ethereum).unwrap();

        match ChainKey::from(btc.clone()) {
            ChainKey::Utxo(key) => {
                assert_eq!(key.utxo_address().as_str(), btc.address());
                assert!(key.bech32_address().unwrap().starts_with("bc1"));
            }
            ChainKey::Eth(_) => panic!("bitcoin key split as Ethereum"),
        }

        match eth.clone().into_chain_key() {
            ChainKey::Eth(key) => {
                assert_eq!(key.address(), eth.address());
                assert_eq!(
                    key.eth_address().to_lower_hex(),
                    "7e5f4552091a69125d5dfcb7b8c2659029395bdf"
                );
            }
            ChainKey::Utxo(_) => panic!("ethereum key split as UTXO"),
        }
    }

    #[test]
    fn test_chain_key_bech32_unsupported() {
        let key = PublicKey::new_from_private_key(&key_one(), ChainId::Dash).unwrap();
        let ChainKey::Utxo(utxo) = key.into_chain_key() else {
            panic!("dash key split as Ethereum");
        };
        assert!(matches!(
            utxo.bech32_address(),
            Err(ChainAddrError::UnsupportedEncoding { .. })
        ));
    }

    #[test]
    fn test_bech32_address_with_custom_registry() {
        let registry = ChainRegistry::builtin()
            .with_override(
                ChainId::Dash,
                ChainConstants {
                    version_byte: 0x4c,
                    address_prefix: String::new(),
                    bech32_hrp: Some("dash".into()),
                },
            )
            .unwrap();
        let deriver = AddressDeriver::new(registry);

        let key = PublicKey::new_from_private_key(&key_one(), ChainId::Dash).unwrap();
        assert_eq!(key.address_with(&deriver), key.address());

        let ChainKey::Utxo(utxo) = key.into_chain_key() else {
            panic!("dash key split as Ethereum");
        };
        assert!(utxo.bech32_address().is_err());
        assert!(utxo
            .bech32_address_with(&deriver)
            .unwrap()
            .starts_with("dash1"));
    }

    #[test]
    fn test_public_key_serializes_as_hex() {
        let key = PublicKey::new_from_private_key(&key_one(), ChainId::HdacTest).unwrap();
        let json = serde_json::to_value(&key).unwrap();

        assert_eq!(json["chain"], "hdac-test");
        assert_eq!(json["origin"], "private-key");
        assert_eq!(json["compressed"], key.hex());
    }

    #[test]
    fn test_debug_shows_chain_and_hex() {
        let key = PublicKey::new_from_private_key(&key_one(), ChainId::Litecoin).unwrap();
        let debug = format!("{:?}", key);
        assert!(debug.contains("litecoin"));
        assert!(debug.contains(&key.hex()));
    }
}
