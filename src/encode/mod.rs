//! Encoding side of the codec.
//!
//! Responsibilities:
//! - Canonical byte emission for every primitive and structural marker
//! - Structured writers enforcing one-value-per-slot and balanced framing
//!
//! Non-responsibilities:
//! - Decoding
//! - Transport and sink lifetime (callers own the `io::Write`)

pub mod values;
pub mod writer;

pub use values::Encode;
pub use writer::{
    ArrayWriter, ChunkedBytesWriter, ChunkedTextWriter, MapWriter, ValueWriter,
};
