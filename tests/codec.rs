use mipsasm_rs::{to_hex, Bits};

#[test]
fn negative_one_fills_with_ones() {
    assert_eq!(Bits::new(-1, 16).value(), 0xFFFF);
    assert_eq!(Bits::new(-1, 5).value(), 0x1F);
    assert_eq!(Bits::new(-1, 32).value(), 0xFFFF_FFFF);
}

#[test]
fn overflow_wraps_silently() {
    assert_eq!(Bits::new(65536, 16).value(), 0);
    assert_eq!(Bits::new(65537, 16).value(), 1);
    assert_eq!(Bits::new(32, 5).value(), 0);
    assert_eq!(Bits::new(-32769, 16).value(), 0x7FFF);
}

#[test]
fn reencoding_is_idempotent() {
    let values = [-123_456i64, -32_768, -1, 0, 1, 31, 65_535, 123_456];
    for w in [5u32, 6, 16, 26, 32] {
        for v in values {
            let b = Bits::new(v, w);
            assert_eq!(Bits::new(i64::from(b.signed()), w), b, "v={v} w={w}");
        }
    }
}

#[test]
fn signed_round_trips_in_range_values() {
    assert_eq!(Bits::new(-2, 16).signed(), -2);
    assert_eq!(Bits::new(-2, 16).value(), 0xFFFE);
    assert_eq!(Bits::new(123, 16).signed(), 123);
    assert_eq!(Bits::new(-33_554_432, 26).signed(), -33_554_432);
}

#[test]
fn concat_appends_low_bits() {
    let hi = Bits::new(0b101, 3);
    let lo = Bits::new(0b01, 2);
    let joined = hi.concat(lo);
    assert_eq!(joined.value(), 0b10101);
    assert_eq!(joined.width(), 5);
}

#[test]
fn hex_is_eight_lowercase_digits() {
    assert_eq!(to_hex(0x012A_4020), "012a4020");
    assert_eq!(to_hex(0), "00000000");
    assert_eq!(to_hex(0xFFFF_FFFF), "ffffffff");
}
