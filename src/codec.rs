use serde::{Deserialize, Serialize};

/// A bit pattern with an explicit width, held in the low bits of a `u32`.
///
/// Construction truncates, never rejects: out-of-range values keep only
/// their low `width` two's-complement bits. Instruction words are built by
/// concatenating fields high-to-low until the width reaches 32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bits {
    value: u32,
    width: u32,
}

impl Bits {
    /// Two's-complement truncation of `value` to `width` bits (1..=32).
    /// Negative values fill with ones from the sign; overflowing positive
    /// values wrap.
    pub fn new(value: i64, width: u32) -> Self {
        debug_assert!((1..=32).contains(&width));
        let mask = if width == 32 {
            u32::MAX
        } else {
            (1u32 << width) - 1
        };
        Self {
            value: (value as u32) & mask,
            width,
        }
    }

    pub fn value(self) -> u32 {
        self.value
    }

    pub fn width(self) -> u32 {
        self.width
    }

    /// Append `rhs` below this field; widths add and must stay within 32.
    pub fn concat(self, rhs: Bits) -> Bits {
        debug_assert!(self.width + rhs.width <= 32);
        Bits {
            value: (self.value << rhs.width) | rhs.value,
            width: self.width + rhs.width,
        }
    }

    /// Sign-extend the field back out to a full-width integer.
    pub fn signed(self) -> i32 {
        let shift = 32 - self.width;
        ((self.value << shift) as i32) >> shift
    }
}

/// Render a 32-bit word as exactly 8 lowercase hex digits, no `0x` prefix.
pub fn to_hex(word: u32) -> String {
    format!("{word:08x}")
}
