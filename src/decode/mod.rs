//! Decoding side of the codec.
//!
//! Responsibilities:
//! - Tokenize a byte source into typed, self-contained atoms
//! - Report malformed data as error atoms rather than failures
//!
//! Non-responsibilities:
//! - Tree reconstruction (callers walk nesting by driving further reads)
//! - Payload buffering (string bytes are consumed by the caller)

pub mod atom;
pub mod decoder;

pub use atom::{Atom, AtomKind};
pub use decoder::Decoder;
