//! Pull-based atom decoder.
//!
//! Responsibilities:
//! - Read exactly one item head per call and report it as a typed [`Atom`]
//! - Report malformed data as error atoms, never as panics
//! - Leave string payloads and container contents to the caller
//!
//! Non-responsibilities:
//! - Tree building (a higher-level reader can layer on top)
//! - Resynchronization after an error atom (source position is unspecified)

use std::io::{self, ErrorKind, Read};

use byteorder::{BigEndian, ReadBytesExt};
use bytes::Bytes;

use crate::constants::{AI_INDEFINITE, AI_MAX_INLINE, AI_U16, AI_U32, AI_U64, AI_U8};
use crate::decode::atom::{Atom, AtomKind};
use crate::types::SimpleValue;

/// Outcome of reading an item's additional-info argument.
enum Argument {
    /// Literal or extension value, minimal-width decoded.
    Value(u64),
    /// Indefinite-length marker (validity depends on the major type).
    Indefinite,
    /// Reserved additional-info encoding (28–30).
    Reserved,
    /// Input ended inside the extension bytes.
    Truncated,
}

/// Streaming decoder over a caller-owned byte source.
///
/// Call [`read_atom`](Decoder::read_atom) until it reports
/// [`AtomKind::EndOfStream`] or an error atom. The decoder never buffers
/// string payloads: after a known-length `String`/`Bytes` atom the caller
/// must consume exactly the declared bytes, via
/// [`read_payload`](Decoder::read_payload) or
/// [`skip_payload`](Decoder::skip_payload), before the next `read_atom`.
pub struct Decoder<R: Read> {
    src: R,
}

impl<R: Read> Decoder<R> {
    pub fn new(src: R) -> Self {
        Decoder { src }
    }

    /// Release the underlying source (position unspecified after errors).
    pub fn into_inner(self) -> R {
        self.src
    }

    /// Read one item head.
    ///
    /// Malformed data comes back as an error atom; `Err` is reserved for
    /// real I/O failures of the source. After an error atom the source
    /// position is unspecified and further reads need external
    /// resynchronization.
    pub fn read_atom(&mut self) -> io::Result<Atom> {
        let initial = match self.read_initial()? {
            Some(b) => b,
            None => return Ok(Atom::end_of_stream()),
        };

        let major = initial >> 5;
        let info = initial & 0x1F;

        // Major 7 has its own argument layout (simple codes and floats).
        if major == 7 {
            return self.read_simple(initial, info);
        }

        let declared = match self.read_argument(info)? {
            Argument::Value(v) => Some(v),
            Argument::Indefinite => None,
            Argument::Reserved => return Ok(Atom::invalid(initial)),
            Argument::Truncated => return Ok(Atom::truncated(initial)),
        };

        Ok(match (major, declared) {
            (0, Some(v)) => Atom::unsigned(initial, v),
            // Major 1 carries the one's complement; magnitudes past
            // i64::MAX have no representation in the atom's signed slot.
            (1, Some(v)) if v > i64::MAX as u64 => Atom::out_of_range(initial),
            (1, Some(v)) => Atom::signed(initial, -1 - v as i64),
            (6, Some(v)) => Atom::tagged(initial, v),

            // A declared length must fit the platform's size type.
            (2..=5, Some(n)) if usize::try_from(n).is_err() => Atom::out_of_range(initial),
            (2, n) => Atom::sized(AtomKind::Bytes, initial, n),
            (3, n) => Atom::sized(AtomKind::String, initial, n),
            (4, n) => Atom::sized(AtomKind::Array, initial, n),
            (5, n) => Atom::sized(AtomKind::Map, initial, n),

            // Indefinite marker on an integer or tag head.
            _ => Atom::invalid(initial),
        })
    }

    /// Read the declared payload of a known-length string/bytes atom.
    pub fn read_payload(&mut self, len: usize) -> io::Result<Bytes> {
        let mut buf = vec![0u8; len];
        self.src.read_exact(&mut buf)?;
        Ok(Bytes::from(buf))
    }

    /// Discard the declared payload of a known-length string/bytes atom.
    pub fn skip_payload(&mut self, len: u64) -> io::Result<()> {
        let copied = io::copy(&mut (&mut self.src).take(len), &mut io::sink())?;
        if copied != len {
            return Err(ErrorKind::UnexpectedEof.into());
        }
        Ok(())
    }

    /// One byte, or `None` on clean end of input.
    fn read_initial(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.src.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Minimal-width argument for majors 0–6.
    fn read_argument(&mut self, info: u8) -> io::Result<Argument> {
        let wide = match info {
            0..=AI_MAX_INLINE => return Ok(Argument::Value(info as u64)),
            AI_U8 => self.src.read_u8().map(u64::from),
            AI_U16 => self.src.read_u16::<BigEndian>().map(u64::from),
            AI_U32 => self.src.read_u32::<BigEndian>().map(u64::from),
            AI_U64 => self.src.read_u64::<BigEndian>(),
            AI_INDEFINITE => return Ok(Argument::Indefinite),
            _ => return Ok(Argument::Reserved),
        };
        match wide {
            Ok(v) => Ok(Argument::Value(v)),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(Argument::Truncated),
            Err(e) => Err(e),
        }
    }

    /// Major-7 item: simple values, floats, or the break terminator.
    fn read_simple(&mut self, initial: u8, info: u8) -> io::Result<Atom> {
        if let Ok(code) = SimpleValue::try_from(info) {
            return Ok(Atom::simple(initial, code));
        }
        match info {
            // Info 26/27 carry a float32/float64 payload under major 7.
            AI_U32 => match self.src.read_f32::<BigEndian>() {
                Ok(v) => Ok(Atom::float32(initial, v)),
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(Atom::truncated(initial)),
                Err(e) => Err(e),
            },
            AI_U64 => match self.src.read_f64::<BigEndian>() {
                Ok(v) => Ok(Atom::float64(initial, v)),
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(Atom::truncated(initial)),
                Err(e) => Err(e),
            },
            AI_INDEFINITE => Ok(Atom::terminator(initial)),
            // Simple values 0–19, the one-byte simple form (24) and
            // half-floats (25) are unassigned in this profile.
            _ => Ok(Atom::invalid(initial)),
        }
    }
}
