//! Wire-format constants shared by the encoders and the decoder.
//!
//! An item's initial byte is `(major << 5) | info`: the high three bits pick
//! the major type, the low five carry the additional-info field. Everything
//! here mirrors the public CBOR registry; byte-level compatibility matters.

/// Largest additional-info value encoded inline in the initial byte.
pub const AI_MAX_INLINE: u8 = 23;

/// Additional-info codes selecting a big-endian extension of 1/2/4/8 bytes.
pub const AI_U8: u8 = 24;
pub const AI_U16: u8 = 25;
pub const AI_U32: u8 = 26;
pub const AI_U64: u8 = 27;

/// Additional-info code for indefinite-length items (bytes, text, array,
/// map), closed later by [`BREAK_BYTE`]. Reserved for every other major type.
pub const AI_INDEFINITE: u8 = 31;

/// Terminator for indefinite-length sequences (major 7, info 31).
pub const BREAK_BYTE: u8 = 0xFF;

/// Well-known semantic tag numbers used by the save-state layer.
pub mod tags {
    use crate::types::Tag;

    /// Prefix marking a stream as self-described CBOR.
    pub const SELF_DESCRIBE_CBOR: Tag = Tag(55799);
    /// Marks a value that may be referenced again later in the stream.
    pub const SHARED_OBJECT_MARK: Tag = Tag(28);
    /// Reference to a previously marked shared value.
    pub const SHARED_OBJECT_REF: Tag = Tag(29);
    /// Opens a string-reference namespace.
    pub const STRINGREF_NAMESPACE: Tag = Tag(256);
    /// Reference into the enclosing string-reference namespace.
    pub const STRINGREF: Tag = Tag(25);
}
