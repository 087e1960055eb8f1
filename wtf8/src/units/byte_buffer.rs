// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bounds checked access to byte ranges with exclusive end semantics.
//!
//! A range `start..end` is valid for a buffer of length `len` when
//! `start <= end <= len`. Note the `<=` for `end`: a range that ends exactly at the
//! buffer's length is valid, and so is an empty range that starts there.
//!
//! ```text
//!           ╭──── buffer.len()=5 ───╮
//! Index:    0   1   2   3   4   5 (not readable)
//!         ┌───┬───┬───┬───┬───┬───┐
//!         │ a │ s │ c │ i │ i │ ! │
//!         └───┴───┴───┴───┴─▲─┴───┘
//!                           ╰ 4..5 = "i"      5..5 = ""      0..100 = out of bounds
//! ```
//!
//! The decoder asks [`ByteBuffer::slice`] for its window before scanning, and then only
//! reads through that window, so it can never see bytes outside the requested range.

use std::ops::Range;

use crate::{ByteIndex, ByteLength, DecodeError, byte_len};

/// Borrowed, read-only view over the bytes being decoded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ByteBuffer<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteBuffer<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self { Self { bytes } }

    #[must_use]
    pub fn len(&self) -> ByteLength { byte_len(self.bytes.len()) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] { self.bytes }

    /// Returns the bytes in `range`.
    ///
    /// # Errors
    ///
    /// [`DecodeError::OutOfBounds`] if `range.start > range.end` or `range.end` is past
    /// the end of the buffer.
    pub fn slice(&self, range: Range<ByteIndex>) -> Result<&'a [u8], DecodeError> {
        let length = self.len();
        match range.check_range_bounds(length) {
            RangeBoundsStatus::Within => Ok(&self.bytes[*range.start..*range.end]),
            status => Err(DecodeError::OutOfBounds {
                offset: status.first_bad_index(&range, length),
                start: range.start,
                end: range.end,
                length,
            }),
        }
    }
}

impl<'a> From<&'a [u8]> for ByteBuffer<'a> {
    fn from(bytes: &'a [u8]) -> Self { Self::new(bytes) }
}

/// Result of validating a `start..end` range against a buffer length.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RangeBoundsStatus {
    /// `start <= end <= length`, safe to slice.
    Within,
    /// `start > length`.
    StartOverflowed,
    /// `start <= length` but `end > length`.
    EndOverflowed,
    /// Both ends are in bounds but `start > end`.
    Inverted,
}

impl RangeBoundsStatus {
    /// The offset reported in [`DecodeError::OutOfBounds`]: the first index that could
    /// not be accessed.
    fn first_bad_index(self, range: &Range<ByteIndex>, length: ByteLength) -> ByteIndex {
        match self {
            RangeBoundsStatus::EndOverflowed => length.end_index(),
            RangeBoundsStatus::Within
            | RangeBoundsStatus::StartOverflowed
            | RangeBoundsStatus::Inverted => range.start,
        }
    }
}

/// Range validation with exclusive end semantics, see the [module
/// documentation](self).
pub trait RangeValidation {
    fn check_range_bounds(&self, length: ByteLength) -> RangeBoundsStatus;

    fn is_valid_for(&self, length: ByteLength) -> bool {
        self.check_range_bounds(length) == RangeBoundsStatus::Within
    }
}

impl RangeValidation for Range<ByteIndex> {
    fn check_range_bounds(&self, length: ByteLength) -> RangeBoundsStatus {
        let end_of_buffer = length.end_index();
        if self.start > end_of_buffer {
            RangeBoundsStatus::StartOverflowed
        } else if self.end > end_of_buffer {
            RangeBoundsStatus::EndOverflowed
        } else if self.start > self.end {
            RangeBoundsStatus::Inverted
        } else {
            RangeBoundsStatus::Within
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, byte_index};

    const ASCII: &[u8] = b"ascii";

    #[test_case(0, 5, RangeBoundsStatus::Within ; "whole buffer")]
    #[test_case(4, 5, RangeBoundsStatus::Within ; "last byte")]
    #[test_case(5, 5, RangeBoundsStatus::Within ; "empty range at end")]
    #[test_case(0, 0, RangeBoundsStatus::Within ; "empty range at start")]
    #[test_case(0, 100, RangeBoundsStatus::EndOverflowed ; "end far past buffer")]
    #[test_case(5, 6, RangeBoundsStatus::EndOverflowed ; "one past end")]
    #[test_case(6, 6, RangeBoundsStatus::StartOverflowed ; "empty range past end")]
    #[test_case(3, 2, RangeBoundsStatus::Inverted ; "inverted")]
    fn test_check_range_bounds(start: usize, end: usize, expected: RangeBoundsStatus) {
        let range = byte_index(start)..byte_index(end);
        assert_eq2!(range.check_range_bounds(byte_len(ASCII.len())), expected);
    }

    #[test]
    fn test_is_valid_for() {
        let length = byte_len(ASCII.len());
        assert!((byte_index(5)..byte_index(5)).is_valid_for(length));
        assert!(!(byte_index(5)..byte_index(6)).is_valid_for(length));
        assert!(!(byte_index(2)..byte_index(1)).is_valid_for(length));
    }

    #[test]
    fn test_accessors() {
        let buffer = ByteBuffer::from(ASCII);
        assert_eq2!(buffer.len(), byte_len(5));
        assert!(!buffer.is_empty());
        assert_eq2!(buffer.as_bytes(), ASCII);
        assert!(ByteBuffer::new(b"").is_empty());
    }

    #[test]
    fn test_slice_within_bounds() {
        let buffer = ByteBuffer::new(ASCII);
        assert_eq2!(buffer.slice(byte_index(4)..byte_index(5)), Ok(&b"i"[..]));
        assert_eq2!(buffer.slice(byte_index(5)..byte_index(5)), Ok(&b""[..]));
        assert_eq2!(buffer.slice(byte_index(0)..byte_index(5)), Ok(ASCII));
    }

    #[test]
    fn test_slice_out_of_bounds() {
        let buffer = ByteBuffer::new(ASCII);
        assert_eq2!(
            buffer.slice(byte_index(0)..byte_index(100)),
            Err(DecodeError::OutOfBounds {
                offset: byte_index(5),
                start: byte_index(0),
                end: byte_index(100),
                length: byte_len(5),
            })
        );
        assert_eq2!(
            buffer.slice(byte_index(3)..byte_index(1)),
            Err(DecodeError::OutOfBounds {
                offset: byte_index(3),
                start: byte_index(3),
                end: byte_index(1),
                length: byte_len(5),
            })
        );
    }

    #[test]
    fn test_out_of_bounds_message() {
        let buffer = ByteBuffer::new(ASCII);
        let error = buffer.slice(byte_index(5)..byte_index(6)).unwrap_err();
        assert_eq2!(error.to_string(), "array element access out of bounds");
    }
}
