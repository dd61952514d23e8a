//! Structured writer protocol.
//!
//! Responsibilities:
//! - Guarantee exactly one value per promised slot
//! - Guarantee balanced container framing and terminator bytes
//! - Route all bytes through the low-level value encoders
//!
//! Non-responsibilities:
//! - Transport (the caller owns the sink)
//! - Schema or key ordering policy
//!
//! Ownership discipline: a [`ValueWriter`] is a move-only capability for one
//! unfilled slot. Every way of filling the slot consumes the writer, so a
//! double write does not compile. Container writers hand out child slots
//! that mutably borrow the sink, so the parent is frozen until the child is
//! finished; writing into anything but the innermost open container does
//! not compile either. Containers always open in streaming form and emit
//! their break terminator when closed or dropped, which keeps encoding
//! single-pass (no upfront counts) at the cost of one byte per container.

use std::io::{self, Write};
use std::thread;

use crate::encode::values::{
    begin_array, begin_bytes, begin_map, begin_text, put_break, put_bytes, put_str, put_tag,
    put_undefined, Encode,
};
use crate::types::Tag;

/// A promised, not-yet-written value slot.
///
/// Obtained either directly over a sink (root value) or from a parent
/// container's `entry`. Holding it is the sole right to write the next
/// value; every filling operation consumes it.
///
/// Dropping an unconsumed slot is a protocol violation: the slot still owes
/// the stream one value. The drop glue emits an `undefined` placeholder so
/// the surrounding framing stays well-formed, and panics in debug builds to
/// surface the bug.
#[must_use = "a value slot must be filled exactly once"]
pub struct ValueWriter<'a, W: Write> {
    sink: Option<&'a mut W>,
}

impl<'a, W: Write> ValueWriter<'a, W> {
    /// Root writer for a single top-level value.
    pub fn new(sink: &'a mut W) -> Self {
        ValueWriter { sink: Some(sink) }
    }

    /// Discharge the slot, handing the sink to the consuming operation.
    fn take(mut self) -> &'a mut W {
        // Infallible: every constructor stores the sink and every consuming
        // method calls this exactly once.
        self.sink.take().expect("value slot already consumed")
    }

    /// Fill the slot with one encodable value.
    pub fn put<T: Encode + ?Sized>(self, value: &T) -> io::Result<()> {
        value.encode(self.take())
    }

    /// Write a tag head and return the slot for the tagged value.
    /// The tag never stands alone; the returned writer still owes the
    /// stream exactly one payload value.
    pub fn tag(self, tag: Tag) -> io::Result<ValueWriter<'a, W>> {
        let sink = self.take();
        put_tag(sink, tag)?;
        Ok(ValueWriter::new(sink))
    }

    /// Fill the slot with a streaming map.
    pub fn map(self) -> io::Result<MapWriter<'a, W>> {
        MapWriter::new(self.take())
    }

    /// Fill the slot with a streaming array.
    pub fn array(self) -> io::Result<ArrayWriter<'a, W>> {
        ArrayWriter::new(self.take())
    }

    /// Fill the slot with a chunked text string.
    pub fn chunked_text(self) -> io::Result<ChunkedTextWriter<'a, W>> {
        ChunkedTextWriter::new(self.take())
    }

    /// Fill the slot with a chunked byte string.
    pub fn chunked_bytes(self) -> io::Result<ChunkedBytesWriter<'a, W>> {
        ChunkedBytesWriter::new(self.take())
    }
}

impl<W: Write> Drop for ValueWriter<'_, W> {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            // Abandoned slot: keep the stream well-formed, then fail loudly.
            let _ = put_undefined(sink);
            if cfg!(debug_assertions) && !thread::panicking() {
                panic!("value slot dropped without a value");
            }
        }
    }
}

/// Streaming map writer.
///
/// Opens `0xBF` on construction and writes the `0xFF` terminator when
/// closed or dropped; no pair count is ever required. Keys may be any
/// encodable value (the format permits heterogeneous key types).
pub struct MapWriter<'a, W: Write> {
    sink: Option<&'a mut W>,
}

impl<'a, W: Write> MapWriter<'a, W> {
    /// Root map over a caller-owned sink.
    pub fn new(sink: &'a mut W) -> io::Result<Self> {
        begin_map(sink)?;
        Ok(MapWriter { sink: Some(sink) })
    }

    fn sink(&mut self) -> &mut W {
        // Infallible until `close` takes the sink, which consumes self.
        self.sink.as_deref_mut().expect("map writer already closed")
    }

    /// Write one complete key/value pair.
    pub fn put<K, V>(&mut self, key: &K, value: &V) -> io::Result<()>
    where
        K: Encode + ?Sized,
        V: Encode + ?Sized,
    {
        let sink = self.sink();
        key.encode(&mut *sink)?;
        value.encode(sink)
    }

    /// Write the key and return the slot for a structured value.
    /// The map is frozen until the returned writer is consumed.
    pub fn entry<K: Encode + ?Sized>(&mut self, key: &K) -> io::Result<ValueWriter<'_, W>> {
        let sink = self.sink();
        key.encode(&mut *sink)?;
        Ok(ValueWriter::new(sink))
    }

    /// Terminate the map, reporting sink errors.
    ///
    /// Plain drop also terminates, but has to swallow the write error;
    /// prefer `close` wherever the result can be checked.
    pub fn close(mut self) -> io::Result<()> {
        let sink = self.sink.take().expect("map writer already closed");
        put_break(sink)
    }
}

impl<W: Write> Drop for MapWriter<'_, W> {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            let _ = put_break(sink);
        }
    }
}

/// Streaming array writer. Same discipline as [`MapWriter`]: `0x9F` on
/// construction, break on close/drop.
pub struct ArrayWriter<'a, W: Write> {
    sink: Option<&'a mut W>,
}

impl<'a, W: Write> ArrayWriter<'a, W> {
    /// Root array over a caller-owned sink.
    pub fn new(sink: &'a mut W) -> io::Result<Self> {
        begin_array(sink)?;
        Ok(ArrayWriter { sink: Some(sink) })
    }

    fn sink(&mut self) -> &mut W {
        self.sink.as_deref_mut().expect("array writer already closed")
    }

    /// Write one element.
    pub fn put<T: Encode + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        value.encode(self.sink())
    }

    /// Return the slot for one structured element.
    pub fn entry(&mut self) -> ValueWriter<'_, W> {
        ValueWriter::new(self.sink())
    }

    /// Terminate the array, reporting sink errors.
    pub fn close(mut self) -> io::Result<()> {
        let sink = self.sink.take().expect("array writer already closed");
        put_break(sink)
    }
}

impl<W: Write> Drop for ArrayWriter<'_, W> {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            let _ = put_break(sink);
        }
    }
}

/// Chunked text-string writer: `0x7F`, then one definite-length text chunk
/// per `put`, closed by the break terminator.
pub struct ChunkedTextWriter<'a, W: Write> {
    sink: Option<&'a mut W>,
}

impl<'a, W: Write> ChunkedTextWriter<'a, W> {
    pub fn new(sink: &'a mut W) -> io::Result<Self> {
        begin_text(sink)?;
        Ok(ChunkedTextWriter { sink: Some(sink) })
    }

    /// Append one chunk. Chunk boundaries are not semantically visible to
    /// readers; they may split the text wherever the producer finds handy.
    pub fn put(&mut self, chunk: &str) -> io::Result<()> {
        let sink = self.sink.as_deref_mut().expect("chunked writer already closed");
        put_str(sink, chunk)
    }

    /// Terminate the string, reporting sink errors.
    pub fn close(mut self) -> io::Result<()> {
        let sink = self.sink.take().expect("chunked writer already closed");
        put_break(sink)
    }
}

impl<W: Write> Drop for ChunkedTextWriter<'_, W> {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            let _ = put_break(sink);
        }
    }
}

/// Chunked byte-string writer: `0x5F`, definite-length byte chunks, break.
pub struct ChunkedBytesWriter<'a, W: Write> {
    sink: Option<&'a mut W>,
}

impl<'a, W: Write> ChunkedBytesWriter<'a, W> {
    pub fn new(sink: &'a mut W) -> io::Result<Self> {
        begin_bytes(sink)?;
        Ok(ChunkedBytesWriter { sink: Some(sink) })
    }

    /// Append one chunk.
    pub fn put(&mut self, chunk: &[u8]) -> io::Result<()> {
        let sink = self.sink.as_deref_mut().expect("chunked writer already closed");
        put_bytes(sink, chunk)
    }

    /// Terminate the string, reporting sink errors.
    pub fn close(mut self) -> io::Result<()> {
        let sink = self.sink.take().expect("chunked writer already closed");
        put_break(sink)
    }
}

impl<W: Write> Drop for ChunkedBytesWriter<'_, W> {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            let _ = put_break(sink);
        }
    }
}
