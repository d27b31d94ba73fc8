//! Typed identifiers for the CSP message framework
//!
//! ## Purpose
//!
//! Every byte-oriented identifier on the wire (message ids, group ids, blob
//! ids, keys, nonces) gets its own newtype over a fixed-size array, so a blob
//! id can never be passed where a group id is expected and a value of the
//! wrong width cannot be constructed at all.
//!
//! [`Identity`] is the one textual identifier: an 8 character ASCII account
//! id, transmitted as its raw ASCII bytes.

use crate::protocol::constants::{
    BALLOT_ID_LEN, BLOB_ID_LEN, BLOB_KEY_LEN, GROUP_ID_LEN, IDENTITY_LEN, MESSAGE_ID_LEN,
    NONCE_LEN,
};
use crate::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Macro to define a fixed-width byte identifier
///
/// Generates a `#[repr(transparent)]` wrapper over `[u8; LEN]` with slice
/// validation, hex display and (behind the `random` feature) random
/// generation.
macro_rules! define_byte_id {
    (
        $(#[$meta:meta])*
        $name:ident, $len:expr, $label:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            /// Width of this identifier on the wire
            pub const LEN: usize = $len;

            #[inline(always)]
            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Build from a slice, rejecting any length other than [`Self::LEN`]
            pub fn from_slice(bytes: &[u8]) -> Result<Self, ValidationError> {
                <[u8; $len]>::try_from(bytes)
                    .map(Self)
                    .map_err(|_| ValidationError::invalid_length($label, $len, bytes.len()))
            }

            #[inline(always)]
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            #[inline(always)]
            pub const fn into_inner(self) -> [u8; $len] {
                self.0
            }

            /// Fresh identifier from the thread-local CSPRNG
            #[cfg(feature = "random")]
            pub fn random() -> Self {
                use rand::RngCore;
                let mut bytes = [0u8; $len];
                rand::thread_rng().fill_bytes(&mut bytes);
                Self(bytes)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl From<[u8; $len]> for $name {
            #[inline(always)]
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = ValidationError;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                Self::from_slice(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            #[inline(always)]
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }
    };
}

define_byte_id! {
    /// Unique id of a single end-to-end message, chosen by the sender
    MessageId, MESSAGE_ID_LEN, "message id"
}

define_byte_id! {
    /// Random group id, unique only together with the creator identity
    GroupId, GROUP_ID_LEN, "group id"
}

define_byte_id! {
    /// Id of an encrypted blob on the blob server
    BlobId, BLOB_ID_LEN, "blob id"
}

define_byte_id! {
    /// Symmetric key a blob was encrypted with
    BlobKey, BLOB_KEY_LEN, "blob key"
}

define_byte_id! {
    /// Id of a poll, unique together with the poll creator
    BallotId, BALLOT_ID_LEN, "ballot id"
}

define_byte_id! {
    /// Encryption nonce
    Nonce, NONCE_LEN, "nonce"
}

impl MessageId {
    /// Little-endian integer view, as used in logs of the message pipeline
    pub fn to_u64(&self) -> u64 {
        u64::from_le_bytes(self.0)
    }
}

/// Account identity, 8 ASCII characters from `A-Z` and `0-9`
///
/// Gateway identities start with `*`; the asterisk is not allowed anywhere
/// else.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identity([u8; IDENTITY_LEN]);

impl Identity {
    pub const LEN: usize = IDENTITY_LEN;

    /// Validate raw ASCII bytes as they appear on the wire
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ValidationError> {
        let raw = <[u8; IDENTITY_LEN]>::try_from(bytes)
            .map_err(|_| ValidationError::invalid_length("identity", IDENTITY_LEN, bytes.len()))?;

        for (position, byte) in raw.iter().enumerate() {
            let valid = byte.is_ascii_uppercase()
                || byte.is_ascii_digit()
                || (*byte == b'*' && position == 0);
            if !valid {
                return Err(ValidationError::InvalidIdentity {
                    value: String::from_utf8_lossy(bytes).into_owned(),
                    reason: "identity characters must be A-Z or 0-9 (leading '*' for gateways)",
                });
            }
        }

        Ok(Self(raw))
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; IDENTITY_LEN] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    pub fn is_gateway(&self) -> bool {
        self.0[0] == b'*'
    }
}

impl FromStr for Identity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

impl TryFrom<&[u8]> for Identity {
    type Error = ValidationError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({})", self.as_str())
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
