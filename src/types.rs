//! Shared wire types: major-type and simple-value registries, tags, and the
//! null/undefined marker values.

use num_enum::TryFromPrimitive;

/// Major type selector (high three bits of an item's initial byte).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MajorType {
    Unsigned = 0,
    Negative = 1,
    Bytes    = 2,
    Text     = 3,
    Array    = 4,
    Map      = 5,
    Tag      = 6,
    Simple   = 7,
}

impl MajorType {
    /// Initial byte carrying this major type and a raw additional-info field.
    /// `info` must fit the low five bits.
    #[inline(always)]
    pub const fn initial(self, info: u8) -> u8 {
        ((self as u8) << 5) | (info & 0x1F)
    }
}

/// Major-7 simple-value codes assigned in this profile.
///
/// The remaining major-7 codes (0–19 simple values, 24 one-byte simple,
/// 25 half-float) are unassigned here and rejected by the decoder.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum SimpleValue {
    False     = 20,
    True      = 21,
    Null      = 22,
    Undefined = 23,
}

/// A semantic tag number attached to exactly one following value.
///
/// There is deliberately no `Default` impl: a tag is always a specific
/// registry number, never a placeholder. Well-known numbers live in
/// [`crate::constants::tags`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag(pub u64);

/// The CBOR `null` value (encodes as `0xF6`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Null;

/// The CBOR `undefined` value (encodes as `0xF7`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Undefined;
