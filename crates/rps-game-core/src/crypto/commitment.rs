//! HMAC key, digest and the per-round move commitment.

use crate::error::{GameError, Result};
use crate::games::MoveSet;
use hmac::{Hmac, Mac};
use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

/// Size in bytes of both the key and the digest
pub const HMAC_BYTES: usize = 32;

/// Secret 256-bit HMAC key
#[derive(Clone, PartialEq, Eq)]
pub struct HmacKey([u8; HMAC_BYTES]);

impl HmacKey {
    /// Create a new key from a cryptographically secure generator
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; HMAC_BYTES];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; HMAC_BYTES]) -> Self {
        Self(bytes)
    }

    /// Parse the hex form shown to the user
    pub fn from_hex(s: &str) -> Result<Self> {
        decode_hex("key", s).map(Self)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; HMAC_BYTES] {
        &self.0
    }

    /// Lowercase hex form. This text is also the HMAC key material, so the
    /// displayed key works as-is in any HMAC-SHA256 tool.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.to_hex().as_bytes())
            .expect("HMAC accepts keys of any length")
    }
}

impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HmacKey(..)")
    }
}

impl FromStr for HmacKey {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// HMAC-SHA256(key, move name)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HmacDigest([u8; HMAC_BYTES]);

impl HmacDigest {
    /// Compute the digest of `move_name` under `key`
    pub fn compute(key: &HmacKey, move_name: &str) -> Self {
        let mut mac = key.mac();
        mac.update(move_name.as_bytes());
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; HMAC_BYTES]) -> Self {
        Self(bytes)
    }

    /// Parse a hex digest
    pub fn from_hex(s: &str) -> Result<Self> {
        decode_hex("hmac", s).map(Self)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; HMAC_BYTES] {
        &self.0
    }

    /// Lowercase hex form
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Verify that `key` and `move_name` produce this digest (constant time)
    pub fn verify(&self, key: &HmacKey, move_name: &str) -> bool {
        let mut mac = key.mac();
        mac.update(move_name.as_bytes());
        mac.verify_slice(&self.0).is_ok()
    }
}

impl fmt::Debug for HmacDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HmacDigest({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for HmacDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for HmacDigest {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for HmacKey {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_hex().serialize(s)
    }
}

impl<'de> Deserialize<'de> for HmacKey {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let hex_str = String::deserialize(d)?;
        Self::from_hex(&hex_str).map_err(serde::de::Error::custom)
    }
}

impl Serialize for HmacDigest {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_hex().serialize(s)
    }
}

impl<'de> Deserialize<'de> for HmacDigest {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let hex_str = String::deserialize(d)?;
        Self::from_hex(&hex_str).map_err(serde::de::Error::custom)
    }
}

fn decode_hex(field: &'static str, s: &str) -> Result<[u8; HMAC_BYTES]> {
    let bytes = hex::decode(s.trim()).map_err(|e| GameError::InvalidHex {
        field,
        reason: e.to_string(),
    })?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| GameError::InvalidLength {
        field,
        expected: HMAC_BYTES,
        actual,
    })
}

/// A hidden move bound to its published digest.
///
/// The key and move index stay inside the crate; they leave only through
/// `RevealedRound`, after the opponent's move is known.
#[derive(Clone)]
pub struct Commitment {
    key: HmacKey,
    move_index: usize,
    digest: HmacDigest,
}

impl Commitment {
    /// Pick a uniform move and a fresh key from `rng`, then commit to the move's name
    pub fn new<R: RngCore + CryptoRng>(moves: &MoveSet, rng: &mut R) -> Self {
        let key = HmacKey::random(rng);
        let move_index = rng.gen_range(0..moves.len());
        let move_name = moves.name(move_index).unwrap_or_default();
        let digest = HmacDigest::compute(&key, move_name);

        Self {
            key,
            move_index,
            digest,
        }
    }

    /// The publishable digest
    pub fn digest(&self) -> &HmacDigest {
        &self.digest
    }

    /// Hex form of the digest, for display
    pub fn digest_hex(&self) -> String {
        self.digest.to_hex()
    }

    /// Check a disclosed key and move name against this commitment
    pub fn verify(&self, key: &HmacKey, move_name: &str) -> bool {
        self.digest.verify(key, move_name)
    }

    pub(crate) fn key(&self) -> &HmacKey {
        &self.key
    }

    pub(crate) fn move_index(&self) -> usize {
        self.move_index
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commitment")
            .field("digest", &self.digest)
            .finish_non_exhaustive()
    }
}
