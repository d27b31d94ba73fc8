//! Protocol layer of the CSP message framework
//!
//! Wire constants, group and blob addressing, forward-secrecy versions and
//! the message type catalog.

pub mod blob;
pub mod catalog;
pub mod constants;
pub mod descriptor;
pub mod envelope;
pub mod forward_security;
pub mod group;
pub mod message_type;
pub mod receipt;
