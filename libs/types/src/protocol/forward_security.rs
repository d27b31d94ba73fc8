//! Forward-secrecy protocol versions
//!
//! Versions form a total order. A message type that requires version V must
//! not travel over a session whose negotiated version is below V.

use crate::ValidationError;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Negotiated forward-secrecy version, wire value `major << 8 | minor`
#[repr(u16)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    Serialize,
    Deserialize,
)]
pub enum ForwardSecurityVersion {
    V1_0 = 0x0100,
    /// Adds edits, deletes, reactions and call signaling
    V1_1 = 0x0101,
    /// Adds group messages
    V1_2 = 0x0102,
}

impl ForwardSecurityVersion {
    pub const LATEST: Self = Self::V1_2;

    pub fn from_wire(raw: u16) -> Result<Self, ValidationError> {
        Self::try_from(raw).map_err(|_| ValidationError::UnknownForwardSecurityVersion { raw })
    }

    pub fn major(self) -> u8 {
        (u16::from(self) >> 8) as u8
    }

    pub fn minor(self) -> u8 {
        (u16::from(self) & 0xff) as u8
    }

    /// Whether a session at this version may carry a type requiring `minimum`
    pub fn satisfies(self, minimum: Option<ForwardSecurityVersion>) -> bool {
        minimum.map_or(true, |required| self >= required)
    }
}

impl fmt::Display for ForwardSecurityVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major(), self.minor())
    }
}

/// Forward-secrecy session collaborator, owned by the session layer
pub trait ForwardSecuritySession {
    /// Version both parties agreed on for this session
    fn negotiated_version(&self) -> ForwardSecurityVersion;
}

impl ForwardSecuritySession for ForwardSecurityVersion {
    fn negotiated_version(&self) -> ForwardSecurityVersion {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versions_are_ordered() {
        assert!(ForwardSecurityVersion::V1_0 < ForwardSecurityVersion::V1_1);
        assert!(ForwardSecurityVersion::V1_1 < ForwardSecurityVersion::V1_2);
        assert_eq!(ForwardSecurityVersion::LATEST, ForwardSecurityVersion::V1_2);
    }

    #[test]
    fn test_wire_values() {
        assert_eq!(u16::from(ForwardSecurityVersion::V1_1), 0x0101);
        assert_eq!(
            ForwardSecurityVersion::from_wire(0x0102),
            Ok(ForwardSecurityVersion::V1_2)
        );
        assert_eq!(
            ForwardSecurityVersion::from_wire(0x0200),
            Err(ValidationError::UnknownForwardSecurityVersion { raw: 0x0200 })
        );
        assert_eq!(ForwardSecurityVersion::V1_2.to_string(), "1.2");
    }

    #[test]
    fn test_satisfies() {
        let v1_1 = ForwardSecurityVersion::V1_1;
        assert!(v1_1.satisfies(None));
        assert!(v1_1.satisfies(Some(ForwardSecurityVersion::V1_0)));
        assert!(v1_1.satisfies(Some(ForwardSecurityVersion::V1_1)));
        assert!(!v1_1.satisfies(Some(ForwardSecurityVersion::V1_2)));
    }
}
