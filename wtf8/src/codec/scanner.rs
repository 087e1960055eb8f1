// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The table driven core shared by [`crate::decode`] and [`crate::validate`].
//!
//! [`scan_sequence`] looks at exactly one candidate sequence, starting at a given
//! position of a window, and reports either the code point it encodes (plus how many
//! bytes it used) or that the byte at that position can't start a well formed
//! sequence. It knows nothing about policies: a surrogate is reported like any other
//! code point, and the caller decides whether that is acceptable.
//!
//! ## Lead byte table
//!
//! [`SEQUENCE_LEN_TABLE`] maps every possible lead byte to the length of the sequence
//! it starts, or `0` if it can't start one (continuation bytes `80`-`BF` and reserved
//! bytes `F8`-`FF`). The data bits of the lead byte are extracted with
//! [`LEAD_BYTE_DATA_MASKS`], indexed by that same length.
//!
//! ## Checks, in order
//!
//! 1. The lead byte has a non zero length in the table.
//! 2. All continuation bytes are inside the window (a truncated sequence is malformed
//!    at the lead byte, there is no separate "ran off the end" outcome).
//! 3. Each continuation byte matches `10xxxxxx`.
//! 4. The value is not overlong (needs exactly this many bytes).
//! 5. The value is not above `0x10FFFF`.

use crate::{CODE_POINT_MAX, CodePoint, OVERLONG_THRESHOLDS, UTF8_1BYTE_MAX,
            UTF8_2BYTE_FIRST_MASK, UTF8_2BYTE_MAX, UTF8_2BYTE_MIN,
            UTF8_3BYTE_FIRST_MASK, UTF8_3BYTE_MAX, UTF8_3BYTE_MIN,
            UTF8_4BYTE_FIRST_MASK, UTF8_4BYTE_MAX, UTF8_4BYTE_MIN,
            UTF8_CONTINUATION_DATA_BITS, UTF8_CONTINUATION_DATA_MASK,
            UTF8_CONTINUATION_MASK, UTF8_CONTINUATION_PATTERN, UTF8_MAX_SEQUENCE_LEN};

/// Sequence length indexed by lead byte, `0` for bytes that can't start a sequence.
pub const SEQUENCE_LEN_TABLE: [u8; 256] = build_sequence_len_table();

/// Lead byte data mask indexed by sequence length. Index 0 is unused.
pub const LEAD_BYTE_DATA_MASKS: [u8; UTF8_MAX_SEQUENCE_LEN + 1] = [
    0,
    UTF8_1BYTE_MAX,
    UTF8_2BYTE_FIRST_MASK,
    UTF8_3BYTE_FIRST_MASK,
    UTF8_4BYTE_FIRST_MASK,
];

const fn build_sequence_len_table() -> [u8; 256] {
    let mut table = [0_u8; 256];
    let mut byte: usize = 0;
    while byte < 256 {
        #[allow(clippy::cast_possible_truncation)]
        let it = byte as u8;
        table[byte] = match it {
            0..=UTF8_1BYTE_MAX => 1,
            UTF8_2BYTE_MIN..=UTF8_2BYTE_MAX => 2,
            UTF8_3BYTE_MIN..=UTF8_3BYTE_MAX => 3,
            UTF8_4BYTE_MIN..=UTF8_4BYTE_MAX => 4,
            _ => 0,
        };
        byte += 1;
    }
    table
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scanned {
    /// A well formed sequence of `len` bytes. May be a surrogate.
    CodePoint { code_point: CodePoint, len: usize },
    /// The byte at the scanned position does not start a well formed sequence.
    Malformed,
}

#[must_use]
pub fn is_continuation_byte(byte: u8) -> bool {
    byte & UTF8_CONTINUATION_MASK == UTF8_CONTINUATION_PATTERN
}

/// Scan the candidate sequence starting at `window[pos]`. Never reads outside
/// `window`.
#[must_use]
pub fn scan_sequence(window: &[u8], pos: usize) -> Scanned {
    let Some(&lead) = window.get(pos) else {
        return Scanned::Malformed;
    };

    let len = usize::from(SEQUENCE_LEN_TABLE[usize::from(lead)]);
    if len == 0 {
        return Scanned::Malformed;
    }

    let Some(continuation_bytes) = window.get(pos + 1..pos + len) else {
        return Scanned::Malformed;
    };

    let mut value = u32::from(lead & LEAD_BYTE_DATA_MASKS[len]);
    for &byte in continuation_bytes {
        if !is_continuation_byte(byte) {
            return Scanned::Malformed;
        }
        value = (value << UTF8_CONTINUATION_DATA_BITS)
            | u32::from(byte & UTF8_CONTINUATION_DATA_MASK);
    }

    if value < OVERLONG_THRESHOLDS[len] || value > CODE_POINT_MAX {
        return Scanned::Malformed;
    }

    Scanned::CodePoint {
        code_point: CodePoint::from_u32_checked_by_caller(value),
        len,
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, code_point};

    fn scanned(value: u32, len: usize) -> Scanned {
        Scanned::CodePoint {
            code_point: code_point(value),
            len,
        }
    }

    #[test]
    fn test_table() {
        assert_eq2!(SEQUENCE_LEN_TABLE[0x00], 1);
        assert_eq2!(SEQUENCE_LEN_TABLE[0x7F], 1);
        assert_eq2!(SEQUENCE_LEN_TABLE[0x80], 0);
        assert_eq2!(SEQUENCE_LEN_TABLE[0xBF], 0);
        assert_eq2!(SEQUENCE_LEN_TABLE[0xC0], 2);
        assert_eq2!(SEQUENCE_LEN_TABLE[0xDF], 2);
        assert_eq2!(SEQUENCE_LEN_TABLE[0xE0], 3);
        assert_eq2!(SEQUENCE_LEN_TABLE[0xEF], 3);
        assert_eq2!(SEQUENCE_LEN_TABLE[0xF0], 4);
        assert_eq2!(SEQUENCE_LEN_TABLE[0xF7], 4);
        assert_eq2!(SEQUENCE_LEN_TABLE[0xF8], 0);
        assert_eq2!(SEQUENCE_LEN_TABLE[0xFF], 0);
    }

    #[test_case(b"a", scanned(0x61, 1) ; "ascii")]
    #[test_case(b"\xC2\xA9", scanned(0xA9, 2) ; "two bytes")]
    #[test_case(b"\xEC\xB3\x8C", scanned(0xCCCC, 3) ; "three bytes")]
    #[test_case(b"\xF0\x9F\x98\x80", scanned(0x1F600, 4) ; "four bytes")]
    #[test_case(b"\xF4\x8F\xBF\xBF", scanned(0x10_FFFF, 4) ; "largest code point")]
    #[test_case(b"\xED\xA0\x80", scanned(0xD800, 3) ; "lead surrogate")]
    #[test_case(b"\xED\xBF\xBF", scanned(0xDFFF, 3) ; "trail surrogate")]
    fn test_well_formed(input: &[u8], expected: Scanned) {
        assert_eq2!(scan_sequence(input, 0), expected);
    }

    #[test_case(b"\x80" ; "lone continuation")]
    #[test_case(b"\xFF" ; "reserved byte")]
    #[test_case(b"\xC0\x80" ; "overlong nul")]
    #[test_case(b"\xC1\xBF" ; "overlong two bytes")]
    #[test_case(b"\xE0\x9F\xBF" ; "overlong three bytes")]
    #[test_case(b"\xF0\x8F\xBF\xBF" ; "overlong four bytes")]
    #[test_case(b"\xF4\x90\x80\x80" ; "above max")]
    #[test_case(b"\xF7\xBF\xBF\xBF" ; "far above max")]
    #[test_case(b"\xED\xD0\x80" ; "bad second byte")]
    #[test_case(b"\xC0 " ; "continuation is ascii")]
    #[test_case(b"\xE2\x82" ; "truncated")]
    #[test_case(b"" ; "empty")]
    fn test_malformed(input: &[u8]) { assert_eq2!(scan_sequence(input, 0), Scanned::Malformed); }

    #[test]
    fn test_never_reads_past_window() {
        let buffer = b"\xE2\x82\xAC";
        // Same bytes, but the window stops before the last continuation byte.
        assert_eq2!(scan_sequence(&buffer[..2], 0), Scanned::Malformed);
        assert_eq2!(scan_sequence(buffer, 0), scanned(0x20AC, 3));
        assert_eq2!(scan_sequence(buffer, 3), Scanned::Malformed);
    }
}
