//! Low-level value encoders.
//!
//! Each function appends the canonical byte form of exactly one primitive or
//! structural marker to the sink. None of them validate surrounding
//! structure; balanced nesting is the writer protocol's job.
//!
//! Layout of every item head:
//!
//! ```text
//! [ initial byte: (major << 5) | info ]
//! [ argument: 0/1/2/4/8 big-endian bytes, selected by info ]
//! ```
//!
//! Arguments always take the shortest valid form (canonical-length rule).
//! Floats are the one exception by design: a float32 is always 5 bytes, a
//! float64 always 9, regardless of value.

use std::io::{self, Write};

use byteorder::{BigEndian, WriteBytesExt};

use crate::constants::{AI_INDEFINITE, AI_MAX_INLINE, AI_U16, AI_U32, AI_U64, AI_U8, BREAK_BYTE};
use crate::types::{MajorType, Null, SimpleValue, Tag, Undefined};

/// Write an item head: major type plus minimal-width argument.
#[inline]
fn put_head<W: Write>(w: &mut W, major: MajorType, value: u64) -> io::Result<()> {
    if value <= AI_MAX_INLINE as u64 {
        w.write_u8(major.initial(value as u8))
    } else if value <= u8::MAX as u64 {
        w.write_u8(major.initial(AI_U8))?;
        w.write_u8(value as u8)
    } else if value <= u16::MAX as u64 {
        w.write_u8(major.initial(AI_U16))?;
        w.write_u16::<BigEndian>(value as u16)
    } else if value <= u32::MAX as u64 {
        w.write_u8(major.initial(AI_U32))?;
        w.write_u32::<BigEndian>(value as u32)
    } else {
        w.write_u8(major.initial(AI_U64))?;
        w.write_u64::<BigEndian>(value)
    }
}

/// Encode an unsigned integer (major 0).
#[inline]
pub fn put_u64<W: Write>(w: &mut W, v: u64) -> io::Result<()> {
    put_head(w, MajorType::Unsigned, v)
}

/// Encode a signed integer.
///
/// Non-negative values use major 0. Negative values use major 1 carrying the
/// one's complement of `v` as the argument, so the wire holds `-1 - v`
/// without ever overflowing (`i64::MIN` maps to `2^63 - 1`).
#[inline]
pub fn put_i64<W: Write>(w: &mut W, v: i64) -> io::Result<()> {
    if v >= 0 {
        put_head(w, MajorType::Unsigned, v as u64)
    } else {
        put_head(w, MajorType::Negative, !(v as u64))
    }
}

/// Encode a float32 (major 7, info 26; always 4 argument bytes).
#[inline]
pub fn put_f32<W: Write>(w: &mut W, v: f32) -> io::Result<()> {
    w.write_u8(MajorType::Simple.initial(AI_U32))?;
    w.write_f32::<BigEndian>(v)
}

/// Encode a float64 (major 7, info 27; always 8 argument bytes).
#[inline]
pub fn put_f64<W: Write>(w: &mut W, v: f64) -> io::Result<()> {
    w.write_u8(MajorType::Simple.initial(AI_U64))?;
    w.write_f64::<BigEndian>(v)
}

/// Encode a boolean (`0xF4` / `0xF5`).
#[inline]
pub fn put_bool<W: Write>(w: &mut W, v: bool) -> io::Result<()> {
    let code = if v { SimpleValue::True } else { SimpleValue::False };
    w.write_u8(MajorType::Simple.initial(code as u8))
}

/// Encode `null` (`0xF6`).
#[inline]
pub fn put_null<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_u8(MajorType::Simple.initial(SimpleValue::Null as u8))
}

/// Encode `undefined` (`0xF7`).
#[inline]
pub fn put_undefined<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_u8(MajorType::Simple.initial(SimpleValue::Undefined as u8))
}

/// Encode a definite-length byte string: head, then the raw bytes.
/// The slice is borrowed for this call only; nothing is retained.
#[inline]
pub fn put_bytes<W: Write>(w: &mut W, v: &[u8]) -> io::Result<()> {
    put_head(w, MajorType::Bytes, v.len() as u64)?;
    w.write_all(v)
}

/// Encode a definite-length text string. UTF-8 validity comes with `&str`;
/// the bytes go out untransformed.
#[inline]
pub fn put_str<W: Write>(w: &mut W, v: &str) -> io::Result<()> {
    put_head(w, MajorType::Text, v.len() as u64)?;
    w.write_all(v.as_bytes())
}

/// Encode a tag head (major 6). The tag stands before, never instead of,
/// the value it applies to; emitting the tagged value is the caller's duty.
#[inline]
pub fn put_tag<W: Write>(w: &mut W, tag: Tag) -> io::Result<()> {
    put_head(w, MajorType::Tag, tag.0)
}

/// Open an array with a known element count.
#[inline]
pub fn begin_array_len<W: Write>(w: &mut W, count: u64) -> io::Result<()> {
    put_head(w, MajorType::Array, count)
}

/// Open an indefinite-length array (`0x9F`), closed by [`put_break`].
#[inline]
pub fn begin_array<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_u8(MajorType::Array.initial(AI_INDEFINITE))
}

/// Open a map with a known pair count.
#[inline]
pub fn begin_map_len<W: Write>(w: &mut W, count: u64) -> io::Result<()> {
    put_head(w, MajorType::Map, count)
}

/// Open an indefinite-length map (`0xBF`), closed by [`put_break`].
#[inline]
pub fn begin_map<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_u8(MajorType::Map.initial(AI_INDEFINITE))
}

/// Open an indefinite-length byte string (`0x5F`): a run of definite-length
/// byte-string chunks, closed by [`put_break`].
#[inline]
pub fn begin_bytes<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_u8(MajorType::Bytes.initial(AI_INDEFINITE))
}

/// Open an indefinite-length text string (`0x7F`), chunked like
/// [`begin_bytes`].
#[inline]
pub fn begin_text<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_u8(MajorType::Text.initial(AI_INDEFINITE))
}

/// Terminate the innermost indefinite-length item (`0xFF`).
#[inline]
pub fn put_break<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_u8(BREAK_BYTE)
}

/// One encodable value.
///
/// This is the extension seam for composite application types: implement it
/// to make a type accepted by every `put`/`entry` slot of the writer
/// protocol. Implementations must append exactly one (possibly nested)
/// value to the sink.
pub trait Encode {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<()>;
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
        (**self).encode(w)
    }
}

impl Encode for u8 {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
        put_u64(w, *self as u64)
    }
}

impl Encode for u16 {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
        put_u64(w, *self as u64)
    }
}

impl Encode for u32 {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
        put_u64(w, *self as u64)
    }
}

impl Encode for u64 {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
        put_u64(w, *self)
    }
}

impl Encode for usize {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
        put_u64(w, *self as u64)
    }
}

impl Encode for i8 {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
        put_i64(w, *self as i64)
    }
}

impl Encode for i16 {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
        put_i64(w, *self as i64)
    }
}

impl Encode for i32 {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
        put_i64(w, *self as i64)
    }
}

impl Encode for i64 {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
        put_i64(w, *self)
    }
}

impl Encode for f32 {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
        put_f32(w, *self)
    }
}

impl Encode for f64 {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
        put_f64(w, *self)
    }
}

impl Encode for bool {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
        put_bool(w, *self)
    }
}

impl Encode for str {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
        put_str(w, self)
    }
}

impl Encode for String {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
        put_str(w, self)
    }
}

impl Encode for [u8] {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
        put_bytes(w, self)
    }
}

impl Encode for Null {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
        put_null(w)
    }
}

impl Encode for Undefined {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
        put_undefined(w)
    }
}
