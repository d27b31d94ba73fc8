//! # Codec Configuration
//!
//! Tunable limits for encoding and decoding, with defaults taken from the
//! protocol constants. Loaded as part of the client settings file.

use csp_types::constants::{
    MAX_MESSAGE_LEN, MAX_TEXT_MESSAGE_LEN, MIN_MESSAGE_PADDED_LEN, OVERHEAD_MAXPADDING,
};
use serde::{Deserialize, Serialize};

/// Size limits applied by [`crate::CspCodec`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecLimits {
    /// Largest body accepted in either direction
    pub max_body_len: usize,
    /// Largest text accepted when encoding text messages, in UTF-8 bytes
    pub max_text_len: usize,
    /// Minimum container size after padding
    pub min_padded_len: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_body_len: MAX_MESSAGE_LEN,
            max_text_len: MAX_TEXT_MESSAGE_LEN,
            min_padded_len: MIN_MESSAGE_PADDED_LEN,
        }
    }
}

impl CodecLimits {
    /// Reject limits the wire format cannot honor
    pub fn validate(&self) -> Result<(), String> {
        if self.max_body_len == 0 || self.max_body_len > MAX_MESSAGE_LEN {
            return Err(format!(
                "max_body_len must be within 1..={}, got {}",
                MAX_MESSAGE_LEN, self.max_body_len
            ));
        }
        if self.max_text_len == 0 || self.max_text_len > self.max_body_len {
            return Err(format!(
                "max_text_len must be within 1..={}, got {}",
                self.max_body_len, self.max_text_len
            ));
        }
        // Padding alone must be able to reach the minimum
        if self.min_padded_len > OVERHEAD_MAXPADDING {
            return Err(format!(
                "min_padded_len must be at most {}, got {}",
                OVERHEAD_MAXPADDING, self.min_padded_len
            ));
        }
        Ok(())
    }
}

/// Nonce tracking for replay protection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayGuardSettings {
    /// Nonces remembered before the oldest are evicted
    pub capacity: usize,
}

impl Default for ReplayGuardSettings {
    fn default() -> Self {
        Self { capacity: 100_000 }
    }
}
