//! Decoded atoms: the pull parser's unit of output.

use crate::constants::AI_INDEFINITE;
use crate::types::{SimpleValue, Tag};

/// Discriminant of a decoded atom.
///
/// The first four kinds are stream conditions, not values: a clean end of
/// input, and the three data-error reports. Everything else is one decoded
/// item head.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AtomKind {
    /// Clean end of input before an initial byte.
    EndOfStream,
    /// Input ended inside an item head or float payload.
    ErrorTruncated,
    /// Reserved or unassigned initial-byte encoding.
    ErrorInvalid,
    /// Declared length or magnitude not representable on this platform.
    ErrorOutOfRange,

    Bool,
    Null,
    Undefined,
    SequenceTerminator,
    Integer,
    Float,
    Tag,
    String,
    Bytes,
    Array,
    Map,
}

/// Payload slot, sized to the atom kind.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Payload {
    None,
    Unsigned(u64),
    Signed(i64),
    Float32(f32),
    Float64(f64),
}

/// One decoded, self-contained item.
///
/// An atom reports the item head only: for strings and byte strings it
/// carries the declared payload length, never the payload bytes themselves,
/// and for containers the declared count — the caller drives further reads
/// to walk nested structure and consume string payloads.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Atom {
    kind: AtomKind,
    initial: u8,
    payload: Payload,
}

impl Atom {
    pub(crate) fn end_of_stream() -> Self {
        Atom { kind: AtomKind::EndOfStream, initial: 0, payload: Payload::None }
    }

    pub(crate) fn truncated(initial: u8) -> Self {
        Atom { kind: AtomKind::ErrorTruncated, initial, payload: Payload::None }
    }

    pub(crate) fn invalid(initial: u8) -> Self {
        Atom { kind: AtomKind::ErrorInvalid, initial, payload: Payload::None }
    }

    pub(crate) fn out_of_range(initial: u8) -> Self {
        Atom { kind: AtomKind::ErrorOutOfRange, initial, payload: Payload::None }
    }

    pub(crate) fn simple(initial: u8, code: SimpleValue) -> Self {
        let kind = match code {
            SimpleValue::False | SimpleValue::True => AtomKind::Bool,
            SimpleValue::Null => AtomKind::Null,
            SimpleValue::Undefined => AtomKind::Undefined,
        };
        Atom { kind, initial, payload: Payload::None }
    }

    pub(crate) fn terminator(initial: u8) -> Self {
        Atom { kind: AtomKind::SequenceTerminator, initial, payload: Payload::None }
    }

    pub(crate) fn unsigned(initial: u8, v: u64) -> Self {
        Atom { kind: AtomKind::Integer, initial, payload: Payload::Unsigned(v) }
    }

    pub(crate) fn signed(initial: u8, v: i64) -> Self {
        Atom { kind: AtomKind::Integer, initial, payload: Payload::Signed(v) }
    }

    pub(crate) fn float32(initial: u8, v: f32) -> Self {
        Atom { kind: AtomKind::Float, initial, payload: Payload::Float32(v) }
    }

    pub(crate) fn float64(initial: u8, v: f64) -> Self {
        Atom { kind: AtomKind::Float, initial, payload: Payload::Float64(v) }
    }

    pub(crate) fn tagged(initial: u8, tag: u64) -> Self {
        Atom { kind: AtomKind::Tag, initial, payload: Payload::Unsigned(tag) }
    }

    /// String/Bytes/Array/Map head; `declared` is `None` for the
    /// indefinite (streaming) form.
    pub(crate) fn sized(kind: AtomKind, initial: u8, declared: Option<u64>) -> Self {
        let payload = match declared {
            Some(n) => Payload::Unsigned(n),
            None => Payload::None,
        };
        Atom { kind, initial, payload }
    }

    pub fn kind(&self) -> AtomKind {
        self.kind
    }

    /// The raw initial byte, mainly for diagnostics on error atoms.
    pub fn initial(&self) -> u8 {
        self.initial
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self.kind,
            AtomKind::ErrorTruncated | AtomKind::ErrorInvalid | AtomKind::ErrorOutOfRange
        )
    }

    pub fn is_eof(&self) -> bool {
        self.kind == AtomKind::EndOfStream
    }

    /// Anything except end-of-stream or an error report.
    pub fn is_value(&self) -> bool {
        !self.is_eof() && !self.is_error()
    }

    pub fn is_bool(&self) -> bool {
        self.kind == AtomKind::Bool
    }

    pub fn is_null(&self) -> bool {
        self.kind == AtomKind::Null
    }

    pub fn is_undefined(&self) -> bool {
        self.kind == AtomKind::Undefined
    }

    pub fn is_sequence_terminator(&self) -> bool {
        self.kind == AtomKind::SequenceTerminator
    }

    pub fn is_integer(&self) -> bool {
        self.kind == AtomKind::Integer
    }

    pub fn is_float(&self) -> bool {
        self.kind == AtomKind::Float
    }

    /// Integer or float.
    pub fn is_number(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    pub fn is_tag(&self) -> bool {
        self.kind == AtomKind::Tag
    }

    pub fn is_string(&self) -> bool {
        self.kind == AtomKind::String
    }

    pub fn is_bytes(&self) -> bool {
        self.kind == AtomKind::Bytes
    }

    pub fn is_array(&self) -> bool {
        self.kind == AtomKind::Array
    }

    pub fn is_map(&self) -> bool {
        self.kind == AtomKind::Map
    }

    /// False only for a string/bytes/array/map head in streaming form;
    /// every other atom is complete in itself.
    pub fn is_known_length(&self) -> bool {
        match self.kind {
            AtomKind::String | AtomKind::Bytes | AtomKind::Array | AtomKind::Map => {
                (self.initial & 0x1F) != AI_INDEFINITE
            }
            _ => true,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if self.kind == AtomKind::Bool {
            Some((self.initial & 0x1F) == SimpleValue::True as u8)
        } else {
            None
        }
    }

    /// Integer value, if non-negative.
    pub fn as_u64(&self) -> Option<u64> {
        match (self.kind, self.payload) {
            (AtomKind::Integer, Payload::Unsigned(v)) => Some(v),
            _ => None,
        }
    }

    /// Integer value, if it fits a signed 64-bit slot.
    pub fn as_i64(&self) -> Option<i64> {
        match (self.kind, self.payload) {
            (AtomKind::Integer, Payload::Signed(v)) => Some(v),
            (AtomKind::Integer, Payload::Unsigned(v)) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    /// Float value at its source width.
    pub fn as_f32(&self) -> Option<f32> {
        match (self.kind, self.payload) {
            (AtomKind::Float, Payload::Float32(v)) => Some(v),
            _ => None,
        }
    }

    /// Float value, widening float32 losslessly.
    pub fn as_f64(&self) -> Option<f64> {
        match (self.kind, self.payload) {
            (AtomKind::Float, Payload::Float64(v)) => Some(v),
            (AtomKind::Float, Payload::Float32(v)) => Some(v as f64),
            _ => None,
        }
    }

    pub fn tag(&self) -> Option<Tag> {
        match (self.kind, self.payload) {
            (AtomKind::Tag, Payload::Unsigned(v)) => Some(Tag(v)),
            _ => None,
        }
    }

    /// Declared byte length (strings) or element/pair count (containers).
    /// `None` for non-sized atoms and for streaming-form heads.
    pub fn declared_len(&self) -> Option<u64> {
        match (self.kind, self.payload) {
            (
                AtomKind::String | AtomKind::Bytes | AtomKind::Array | AtomKind::Map,
                Payload::Unsigned(n),
            ) => Some(n),
            _ => None,
        }
    }
}
