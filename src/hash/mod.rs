//! SHA-256 wrapper used by the Merkle layer.
//!
//! The tree treats the hash as an opaque primitive: 32-byte digests, rendered
//! as 64 lowercase hex characters at every external boundary.  Two helpers
//! are exposed:
//!
//! * [`sha256`] – single hash, used for internal node pairings.
//! * [`sha256d`] – double hash, used whenever a raw entry becomes a leaf.
//!   Leaves must not collide with the internal-node encoding (which is a
//!   single hash over concatenated digests), hence the second round.

use core::fmt;
use core::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest as _, Sha256};

/// Size of a digest in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Immutable 32-byte digest value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Digest {
    bytes: [u8; DIGEST_SIZE],
}

impl Digest {
    /// Constructs a digest from raw bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the canonical byte representation.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.bytes
    }

    /// Consumes the digest and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.bytes
    }

    /// Renders the digest as a 64-character lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Parses a digest from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, HexDigestError> {
        if s.len() != DIGEST_SIZE * 2 {
            return Err(HexDigestError::Length { got: s.len() });
        }
        let mut bytes = [0u8; DIGEST_SIZE];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| HexDigestError::Digit)?;
        Ok(Self { bytes })
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.into_bytes()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest(0x{})", self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = HexDigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// The external representation is hex throughout; serde follows suit instead
// of exposing the raw byte layout.
impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Digest::from_hex(&raw).map_err(D::Error::custom)
    }
}

/// Error surfaced when parsing a digest from its hex rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexDigestError {
    /// The string is not exactly 64 characters long.
    Length { got: usize },
    /// A character outside `[0-9a-fA-F]` was encountered.
    Digit,
}

impl fmt::Display for HexDigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexDigestError::Length { got } => {
                write!(f, "digest hex must be {} characters, got {}", DIGEST_SIZE * 2, got)
            }
            HexDigestError::Digit => write!(f, "digest hex contains a non-hex character"),
        }
    }
}

impl std::error::Error for HexDigestError {}

/// Hashes arbitrary bytes with a single round of SHA-256.
pub fn sha256(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    Digest::from_bytes(hasher.finalize().into())
}

/// Hashes arbitrary bytes with two rounds of SHA-256.
///
/// Raw entries pass through this before entering the tree as leaves.
pub fn sha256d(data: &[u8]) -> Digest {
    sha256(sha256(data).as_bytes())
}

/// Hashes the concatenation of two digests into their parent digest.
pub(crate) fn hash_pair(left: &Digest, right: &Digest) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    Digest::from_bytes(hasher.finalize().into())
}
