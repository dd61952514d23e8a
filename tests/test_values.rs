// Byte-exact vectors for the low-level value encoders, covering every
// boundary of the minimal-width argument rule.

#[cfg(test)]
mod tests {
    use cbor_core::constants::tags;
    use cbor_core::encode::values::{
        begin_array, begin_array_len, begin_bytes, begin_map, begin_map_len, begin_text,
        put_bool, put_break, put_bytes, put_f32, put_f64, put_i64, put_null, put_str, put_tag,
        put_u64, put_undefined,
    };
    use cbor_core::types::Tag;

    fn hex_of<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        hex::encode(buf)
    }

    #[test]
    fn unsigned_minimal_width_boundaries() {
        assert_eq!(hex_of(|w| put_u64(w, 0)), "00");
        assert_eq!(hex_of(|w| put_u64(w, 23)), "17");
        assert_eq!(hex_of(|w| put_u64(w, 24)), "1818");
        assert_eq!(hex_of(|w| put_u64(w, 255)), "18ff");
        assert_eq!(hex_of(|w| put_u64(w, 256)), "190100");
        assert_eq!(hex_of(|w| put_u64(w, 65535)), "19ffff");
        assert_eq!(hex_of(|w| put_u64(w, 65536)), "1a00010000");
        assert_eq!(hex_of(|w| put_u64(w, u32::MAX as u64)), "1affffffff");
        assert_eq!(hex_of(|w| put_u64(w, u32::MAX as u64 + 1)), "1b0000000100000000");
        assert_eq!(hex_of(|w| put_u64(w, u64::MAX)), "1bffffffffffffffff");
    }

    #[test]
    fn signed_negative_is_ones_complement() {
        assert_eq!(hex_of(|w| put_i64(w, -1)), "20");
        assert_eq!(hex_of(|w| put_i64(w, -24)), "37");
        assert_eq!(hex_of(|w| put_i64(w, -25)), "3818");
        assert_eq!(hex_of(|w| put_i64(w, -100)), "3863");
        assert_eq!(hex_of(|w| put_i64(w, -256)), "38ff");
        assert_eq!(hex_of(|w| put_i64(w, -257)), "390100");
        assert_eq!(hex_of(|w| put_i64(w, i64::MIN)), "3b7fffffffffffffff");
    }

    #[test]
    fn signed_non_negative_uses_unsigned_major() {
        assert_eq!(hex_of(|w| put_i64(w, 0)), "00");
        assert_eq!(hex_of(|w| put_i64(w, 100)), "1864");
        assert_eq!(hex_of(|w| put_i64(w, i64::MAX)), "1b7fffffffffffffff");
    }

    #[test]
    fn floats_are_fixed_width() {
        assert_eq!(hex_of(|w| put_f32(w, 3.14)), "fa4048f5c3");
        assert_eq!(hex_of(|w| put_f64(w, 3.14)), "fb40091eb851eb851f");
        // Integer-valued floats keep their source width; no collapsing.
        assert_eq!(hex_of(|w| put_f32(w, 1.0)), "fa3f800000");
        assert_eq!(hex_of(|w| put_f64(w, 0.0)), "fb0000000000000000");
    }

    #[test]
    fn simple_values_are_single_bytes() {
        assert_eq!(hex_of(|w| put_bool(w, false)), "f4");
        assert_eq!(hex_of(|w| put_bool(w, true)), "f5");
        assert_eq!(hex_of(|w| put_null(w)), "f6");
        assert_eq!(hex_of(|w| put_undefined(w)), "f7");
    }

    #[test]
    fn strings_are_length_then_raw_bytes() {
        assert_eq!(hex_of(|w| put_str(w, "world")), "65776f726c64");
        assert_eq!(hex_of(|w| put_str(w, "")), "60");
        assert_eq!(hex_of(|w| put_bytes(w, &[1, 2, 3])), "43010203");
        assert_eq!(hex_of(|w| put_bytes(w, b"")), "40");
        // 24-byte payload forces the one-byte length extension.
        assert_eq!(hex_of(|w| put_bytes(w, &[0u8; 24])), format!("5818{}", "00".repeat(24)));
    }

    #[test]
    fn tag_heads() {
        assert_eq!(hex_of(|w| put_tag(w, Tag(0))), "c0");
        assert_eq!(hex_of(|w| put_tag(w, tags::STRINGREF)), "d819");
        assert_eq!(hex_of(|w| put_tag(w, tags::SELF_DESCRIBE_CBOR)), "d9d9f7");
    }

    #[test]
    fn container_openers_and_terminator() {
        assert_eq!(hex_of(|w| begin_array_len(w, 0)), "80");
        assert_eq!(hex_of(|w| begin_array_len(w, 3)), "83");
        assert_eq!(hex_of(|w| begin_map_len(w, 2)), "a2");
        assert_eq!(hex_of(|w| begin_array(w)), "9f");
        assert_eq!(hex_of(|w| begin_map(w)), "bf");
        assert_eq!(hex_of(|w| begin_bytes(w)), "5f");
        assert_eq!(hex_of(|w| begin_text(w)), "7f");
        assert_eq!(hex_of(|w| put_break(w)), "ff");
    }

    #[test]
    fn encoding_is_idempotent_across_sinks() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        for sink in [&mut a, &mut b] {
            put_u64(sink, 1_000_000).unwrap();
            put_str(sink, "hyperspace").unwrap();
            put_f64(sink, -0.5).unwrap();
        }
        assert_eq!(a, b);
    }
}
