//! Delivery receipt status codes

use crate::ValidationError;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// Status carried in the first byte of a delivery receipt body
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Serialize, Deserialize,
)]
pub enum DeliveryReceiptStatus {
    Received = 0x01,
    Read = 0x02,
    /// Explicit "agree" by the user
    UserAcknowledged = 0x03,
    /// Explicit "disagree" by the user
    UserDeclined = 0x04,
}

impl DeliveryReceiptStatus {
    pub fn from_wire(raw: u8) -> Result<Self, ValidationError> {
        Self::try_from(raw).map_err(|_| ValidationError::UnknownReceiptStatus { raw })
    }

    /// Acknowledge/decline are user reactions rather than transport states
    pub fn is_user_reaction(self) -> bool {
        matches!(self, Self::UserAcknowledged | Self::UserDeclined)
    }
}
