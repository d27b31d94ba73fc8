//! Group addressing
//!
//! A group is identified by the identity of its creator together with a
//! random group id. Neither half is unique on its own.

use crate::{GroupId, Identity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Creator identity plus group id, compared and hashed structurally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupReference {
    pub creator: Identity,
    pub group_id: GroupId,
}

impl GroupReference {
    pub const fn new(creator: Identity, group_id: GroupId) -> Self {
        Self { creator, group_id }
    }

    /// Whether `identity` created this group
    pub fn is_creator(&self, identity: &Identity) -> bool {
        self.creator == *identity
    }
}

impl fmt::Display for GroupReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.creator, self.group_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn identity(s: &str) -> Identity {
        s.parse().unwrap()
    }

    #[test]
    fn test_equal_references_hash_equal() {
        let a = GroupReference::new(identity("ABCDEFGH"), GroupId::new([7; 16]));
        let b = GroupReference::new(identity("ABCDEFGH"), GroupId::new([7; 16]));
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_both_halves_distinguish() {
        let base = GroupReference::new(identity("ABCDEFGH"), GroupId::new([7; 16]));
        let other_creator = GroupReference::new(identity("HGFEDCBA"), GroupId::new([7; 16]));
        let other_id = GroupReference::new(identity("ABCDEFGH"), GroupId::new([8; 16]));

        assert_ne!(base, other_creator);
        assert_ne!(base, other_id);
        assert!(base.is_creator(&identity("ABCDEFGH")));
        assert!(!base.is_creator(&identity("HGFEDCBA")));
    }

    #[test]
    fn test_display() {
        let reference = GroupReference::new(identity("ABCDEFGH"), GroupId::new([0; 16]));
        assert_eq!(
            reference.to_string(),
            "ABCDEFGH/00000000000000000000000000000000"
        );
    }
}
