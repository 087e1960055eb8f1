// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte patterns, data masks, and code point boundaries shared by the encoder and the
//! decoder.
//!
//! WTF-8 uses exactly the same byte layout as UTF-8. The only difference is that code
//! points in the surrogate range are allowed to appear (encoded with the 3-byte form)
//! as long as they are not paired.
//!
//! | Bytes | Lead byte | Continuation bytes | Bit pattern                          | Smallest code point |
//! | ----- | --------- | ------------------ | ------------------------------------ | ------------------- |
//! | 1     | 00-7F     | -                  | 0xxxxxxx                             | 0x00                |
//! | 2     | C0-DF     | 80-BF              | 110xxxxx 10xxxxxx                    | 0x80                |
//! | 3     | E0-EF     | 80-BF (x2)         | 1110xxxx 10xxxxxx 10xxxxxx           | 0x800               |
//! | 4     | F0-F7     | 80-BF (x3)         | 11110xxx 10xxxxxx 10xxxxxx 10xxxxxx  | 0x10000             |
//!
//! A sequence whose value is smaller than the "smallest code point" column for its byte
//! count is an *overlong* encoding and is always malformed. Lead bytes `C0` and `C1`
//! can only ever produce overlong encodings, and `F5`-`F7` can only produce values
//! above [`CODE_POINT_MAX`], but they are still classified by their bit pattern here;
//! the value checks in the decoder reject them.
//!
//! ```rust
//! # use r3bl_wtf8::{UTF8_CONTINUATION_MASK, UTF8_CONTINUATION_PATTERN};
//! let byte = 0x9F;
//! assert_eq!(byte & UTF8_CONTINUATION_MASK, UTF8_CONTINUATION_PATTERN);
//! ```

// ============================================================================
// Lead byte ranges
// ============================================================================

/// Pattern: `0xxxxxxx`
pub const UTF8_1BYTE_MIN: u8 = 0b0000_0000;
/// Pattern: `0xxxxxxx`
pub const UTF8_1BYTE_MAX: u8 = 0b0111_1111;

/// Pattern: `110xxxxx 10xxxxxx`
pub const UTF8_2BYTE_MIN: u8 = 0b1100_0000;
/// Pattern: `110xxxxx 10xxxxxx`
pub const UTF8_2BYTE_MAX: u8 = 0b1101_1111;

/// Pattern: `1110xxxx 10xxxxxx 10xxxxxx`
pub const UTF8_3BYTE_MIN: u8 = 0b1110_0000;
/// Pattern: `1110xxxx 10xxxxxx 10xxxxxx`
pub const UTF8_3BYTE_MAX: u8 = 0b1110_1111;

/// Pattern: `11110xxx 10xxxxxx 10xxxxxx 10xxxxxx`
pub const UTF8_4BYTE_MIN: u8 = 0b1111_0000;
/// Pattern: `11110xxx 10xxxxxx 10xxxxxx 10xxxxxx`
pub const UTF8_4BYTE_MAX: u8 = 0b1111_0111;

// ============================================================================
// Continuation bytes
// ============================================================================

/// Continuation bytes satisfy `byte & UTF8_CONTINUATION_MASK ==
/// UTF8_CONTINUATION_PATTERN`.
pub const UTF8_CONTINUATION_MASK: u8 = 0b1100_0000;

/// See [`UTF8_CONTINUATION_MASK`].
pub const UTF8_CONTINUATION_PATTERN: u8 = 0b1000_0000;

/// Extracts the 6 payload bits of a continuation byte: `10xxxxxx` → `xxxxxx`.
pub const UTF8_CONTINUATION_DATA_MASK: u8 = 0b0011_1111;

/// Number of payload bits carried by each continuation byte.
pub const UTF8_CONTINUATION_DATA_BITS: u32 = 6;

// ============================================================================
// Lead byte data masks
// ============================================================================

/// `110xxxxx` → `xxxxx`
pub const UTF8_2BYTE_FIRST_MASK: u8 = 0b0001_1111;

/// `1110xxxx` → `xxxx`
pub const UTF8_3BYTE_FIRST_MASK: u8 = 0b0000_1111;

/// `11110xxx` → `xxx`
pub const UTF8_4BYTE_FIRST_MASK: u8 = 0b0000_0111;

// ============================================================================
// Code point boundaries
// ============================================================================

/// Largest code point that fits in a 1-byte sequence.
pub const CODE_POINT_1BYTE_MAX: u32 = 0x7F;

/// Largest code point that fits in a 2-byte sequence.
pub const CODE_POINT_2BYTE_MAX: u32 = 0x7FF;

/// Largest code point that fits in a 3-byte sequence. Surrogates live below this.
pub const CODE_POINT_3BYTE_MAX: u32 = 0xFFFF;

/// Largest Unicode code point.
pub const CODE_POINT_MAX: u32 = 0x10_FFFF;

/// First lead (high) surrogate.
pub const LEAD_SURROGATE_MIN: u32 = 0xD800;

/// Last lead (high) surrogate.
pub const LEAD_SURROGATE_MAX: u32 = 0xDBFF;

/// First trail (low) surrogate.
pub const TRAIL_SURROGATE_MIN: u32 = 0xDC00;

/// Last trail (low) surrogate.
pub const TRAIL_SURROGATE_MAX: u32 = 0xDFFF;

/// Offset subtracted from a supplementary code point before it is split into a
/// surrogate pair.
pub const SUPPLEMENTARY_PLANE_OFFSET: u32 = 0x1_0000;

/// U+FFFD, emitted by the lossy decoder for every malformed byte.
pub const REPLACEMENT_CODE_POINT: u32 = 0xFFFD;

/// Longest sequence the scanner ever has to look at.
pub const UTF8_MAX_SEQUENCE_LEN: usize = 4;

/// Smallest code point that is legal for a sequence of `len` bytes, indexed by `len`.
/// Anything below it is an overlong encoding. Index 0 is unused.
pub const OVERLONG_THRESHOLDS: [u32; UTF8_MAX_SEQUENCE_LEN + 1] =
    [0, 0, CODE_POINT_1BYTE_MAX + 1, CODE_POINT_2BYTE_MAX + 1, CODE_POINT_3BYTE_MAX + 1];
