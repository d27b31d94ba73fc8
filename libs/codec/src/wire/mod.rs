//! Byte-level building blocks shared by every body codec
//!
//! - [`BodyReader`]: bounds-checked cursor that reports failures as
//!   `MalformedBody` with the current offset
//! - [`BodyWriter`]: append-only output buffer
//! - [`layout`]: zerocopy structs for the fixed-width parts of media bodies

pub mod layout;
mod reader;
mod writer;

pub use reader::BodyReader;
pub use writer::BodyWriter;
