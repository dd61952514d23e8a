// Writer protocol: framing, nesting, terminators, custom Encode impls,
// and misuse behavior.

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use cbor_core::encode::values::{begin_array_len, put_f32, put_tag, Encode};
    use cbor_core::encode::{ArrayWriter, ChunkedBytesWriter, ChunkedTextWriter, MapWriter, ValueWriter};
    use cbor_core::types::{Null, Tag};

    const ORIENTATION_TAG: Tag = Tag(2501);

    /// Composite application type encoded as a tagged fixed array, the way
    /// the save-state layer extends the codec.
    struct Vec3 {
        v: [f32; 3],
    }

    impl Encode for Vec3 {
        fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
            put_tag(w, ORIENTATION_TAG)?;
            begin_array_len(w, 3)?;
            put_f32(w, self.v[0])?;
            put_f32(w, self.v[1])?;
            put_f32(w, self.v[2])
        }
    }

    #[test]
    fn empty_map_is_open_then_break() {
        let mut buf = Vec::new();
        MapWriter::new(&mut buf).unwrap().close().unwrap();
        assert_eq!(hex::encode(&buf), "bfff");
    }

    #[test]
    fn one_pair_map() {
        let mut buf = Vec::new();
        let mut map = MapWriter::new(&mut buf).unwrap();
        map.put("a", &1u32).unwrap();
        map.close().unwrap();
        assert_eq!(hex::encode(&buf), "bf616101ff");
    }

    #[test]
    fn drop_terminates_like_close() {
        let mut closed = Vec::new();
        let mut dropped = Vec::new();

        let mut map = MapWriter::new(&mut closed).unwrap();
        map.put("k", &false).unwrap();
        map.close().unwrap();

        {
            let mut map = MapWriter::new(&mut dropped).unwrap();
            map.put("k", &false).unwrap();
        }

        assert_eq!(closed, dropped);
    }

    #[test]
    fn heterogeneous_map_keys() {
        let mut buf = Vec::new();
        let mut map = MapWriter::new(&mut buf).unwrap();
        map.put(&1u8, "one").unwrap();
        map.put(&-1i32, &Null).unwrap();
        map.close().unwrap();
        assert_eq!(hex::encode(&buf), "bf01636f6e6520f6ff");
    }

    #[test]
    fn nested_containers_through_entry_slots() {
        let mut buf = Vec::new();
        let mut root = MapWriter::new(&mut buf).unwrap();
        {
            let mut inner = root.entry("xs").unwrap().array().unwrap();
            inner.put(&0u8).unwrap();
            inner.put(&1u8).unwrap();
            inner.close().unwrap();
        }
        root.put("done", &true).unwrap();
        root.close().unwrap();
        assert_eq!(hex::encode(&buf), "bf6278739f0001ff64646f6e65f5ff");
    }

    #[test]
    fn tagged_value_through_slot() {
        let mut buf = Vec::new();
        ValueWriter::new(&mut buf)
            .tag(Tag(55799))
            .unwrap()
            .put(&0u8)
            .unwrap();
        assert_eq!(hex::encode(&buf), "d9d9f700");
    }

    #[test]
    fn custom_encode_impl_fills_any_slot() {
        let mut buf = Vec::new();
        let mut vecs = ArrayWriter::new(&mut buf).unwrap();
        vecs.put(&Vec3 { v: [1.0, 0.0, 0.0] }).unwrap();
        vecs.put(&Vec3 { v: [0.0, 1.0, 0.0] }).unwrap();
        vecs.close().unwrap();

        let one = "fa3f800000";
        let zero = "fa00000000";
        let tagged = |x: &str, y: &str, z: &str| format!("d909c583{x}{y}{z}");
        assert_eq!(
            hex::encode(&buf),
            format!("9f{}{}ff", tagged(one, zero, zero), tagged(zero, one, zero))
        );
    }

    #[test]
    fn chunked_text_writer() {
        let mut buf = Vec::new();
        let mut s = ChunkedTextWriter::new(&mut buf).unwrap();
        s.put("str").unwrap();
        s.put("eaming").unwrap();
        s.close().unwrap();
        assert_eq!(hex::encode(&buf), "7f637374726665616d696e67ff");
    }

    #[test]
    fn chunked_bytes_writer() {
        let mut buf = Vec::new();
        let mut s = ChunkedBytesWriter::new(&mut buf).unwrap();
        s.put(&[0xAA, 0xBB]).unwrap();
        s.put(&[]).unwrap();
        s.close().unwrap();
        assert_eq!(hex::encode(&buf), "5f42aabb40ff");
    }

    #[test]
    fn writer_output_is_idempotent() {
        let encode = || {
            let mut buf = Vec::new();
            let mut map = MapWriter::new(&mut buf).unwrap();
            map.put("version", &1u32).unwrap();
            map.put("test_float", &3.14f32).unwrap();
            map.put("test_null", &Null).unwrap();
            map.close().unwrap();
            buf
        };
        assert_eq!(encode(), encode());
    }

    #[test]
    #[should_panic(expected = "value slot dropped without a value")]
    fn abandoned_slot_fails_loudly() {
        let mut buf = Vec::new();
        let mut map = MapWriter::new(&mut buf).unwrap();
        let slot = map.entry("k").unwrap();
        drop(slot);
    }

    #[test]
    fn sink_errors_surface_through_writer_operations() {
        struct FullSink;
        impl Write for FullSink {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = FullSink;
        assert!(MapWriter::new(&mut sink).is_err());
        assert!(ValueWriter::new(&mut sink).put(&1u8).is_err());
    }
}
