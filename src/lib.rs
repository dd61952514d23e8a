//! cbor-core
//!
//! Streaming CBOR codec: structured writers over any `io::Write` sink and a
//! pull-based atom decoder over any `io::Read` source.
//!
//! The encoder is push/recursive — writer objects hand out move-only value
//! slots, so an unbalanced or double-written stream does not compile. The
//! decoder is pull/flat — one [`decode::Atom`] per call, no parse tree,
//! malformed input reported as error atoms instead of panics.
//!
//! ```no_run
//! use cbor_core::encode::MapWriter;
//!
//! fn save(sink: &mut impl std::io::Write) -> std::io::Result<()> {
//!     let mut root = MapWriter::new(sink)?;
//!     root.put("version", &1u32)?;
//!     let mut orbits = root.entry("orbits")?.array()?;
//!     orbits.put(&3.14f64)?;
//!     orbits.close()?;
//!     root.close()
//! }
//! ```

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Codec sides
pub mod decode;
pub mod encode;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::constants::tags;
    pub use crate::decode::{Atom, AtomKind, Decoder};
    pub use crate::encode::{
        ArrayWriter, ChunkedBytesWriter, ChunkedTextWriter, Encode, MapWriter, ValueWriter,
    };
    pub use crate::types::{Null, Tag, Undefined};
}
