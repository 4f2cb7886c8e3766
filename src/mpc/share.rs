//! Secret Share Definition.
//!
//! A share is the flat byte string handed to one party: its coordinate vectors for every
//! secret byte followed by the threshold tag (see [`crate::mpc::codec`]).
//!
//! # Security
//! - Implements `Zeroize` and `ZeroizeOnDrop` to wipe share bytes from memory.
//! - `Debug` implementation redacts the contents.

use alloc::{string::String, vec::Vec};
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};
use crate::config::MIN_THRESHOLD;
use super::MpcError;

/// A share of a secret.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u8>", into = "Vec<u8>"))]
pub struct Share {
    bytes: Vec<u8>,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("threshold", &self.threshold())
            .field("length", &self.bytes.len())
            .field("value", &"***SENSITIVE***")
            .finish()
    }
}

impl Share {
    /// Wraps share bytes after checking their standalone structure.
    ///
    /// # Errors
    /// * `MpcError::MalformedShare` if `bytes` is empty, the tag is below 2, or the body is
    ///   empty or not a multiple of the tag.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, MpcError> {
        let share = Self { bytes };
        let Some(&tag) = share.bytes.last() else {
            return Err(MpcError::MalformedShare);
        };
        let threshold = tag as usize;
        let body_len = share.bytes.len() - 1;
        if threshold < MIN_THRESHOLD || body_len == 0 || body_len % threshold != 0 {
            return Err(MpcError::MalformedShare);
        }
        Ok(share)
    }

    /// Wraps bytes produced by the splitter.
    pub(crate) fn from_encoded(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Decodes a share from lowercase or uppercase hex.
    pub fn from_hex(text: &str) -> Result<Self, MpcError> {
        let bytes = hex::decode(text.trim()).map_err(|_| MpcError::InvalidEncoding)?;
        Self::from_bytes(bytes)
    }

    /// Encodes the share as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Returns the raw share bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the share, returning its bytes.
    pub fn into_bytes(mut self) -> Vec<u8> {
        core::mem::take(&mut self.bytes)
    }

    /// Threshold tag carried in the last byte.
    pub fn threshold(&self) -> usize {
        self.bytes.last().map_or(0, |&t| t as usize)
    }

    /// Length of the secret this share belongs to.
    pub fn secret_len(&self) -> usize {
        match self.threshold() {
            0 => 0,
            t => (self.bytes.len() - 1) / t,
        }
    }

    /// Total encoded length.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for Share {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl TryFrom<Vec<u8>> for Share {
    type Error = MpcError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl From<Share> for Vec<u8> {
    fn from(share: Share) -> Self {
        share.into_bytes()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_serde_as_byte_sequence() {
        let share = Share::from_bytes(vec![0x10, 0x20, 0x30, 0x40, 0x02]).unwrap();
        let json = serde_json::to_string(&share).unwrap();
        assert_eq!(json, "[16,32,48,64,2]");

        let decoded: Share = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, share);
    }

    #[test]
    fn test_serde_rejects_malformed() {
        assert!(serde_json::from_str::<Share>("[]").is_err());
        assert!(serde_json::from_str::<Share>("[7,1]").is_err());
        assert!(serde_json::from_str::<Share>("[1,2,3,2]").is_err());

        let err = serde_json::from_str::<Share>("[2]").unwrap_err();
        assert!(err.to_string().contains("Share is malformed"));
    }
}
