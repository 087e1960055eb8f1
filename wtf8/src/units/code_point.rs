// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`CodePoint`] is a Unicode scalar value *or* a surrogate half.
//!
//! Rust's [`char`] cannot hold `0xD800..=0xDFFF`, but WTF-8 exists precisely to carry
//! those values, so the codec works with this newtype instead. The only way to get a
//! [`CodePoint`] is through a range checked constructor, which means the encoder never
//! has to deal with values above `0x10FFFF`.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{CODE_POINT_MAX, LEAD_SURROGATE_MAX, LEAD_SURROGATE_MIN,
            REPLACEMENT_CODE_POINT, SUPPLEMENTARY_PLANE_OFFSET, TRAIL_SURROGATE_MAX,
            TRAIL_SURROGATE_MIN};

/// An integer in `[0, 0x10FFFF]`, possibly a surrogate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePoint(u32);

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum CodePointError {
    #[error("code point {0:#X} is above U+10FFFF")]
    #[diagnostic(
        code(r3bl_wtf8::code_point::out_of_range),
        help("Unicode code points are in the range 0x0..=0x10FFFF")
    )]
    OutOfRange(u32),
}

impl CodePoint {
    /// U+FFFD REPLACEMENT CHARACTER.
    pub const REPLACEMENT: CodePoint = CodePoint(REPLACEMENT_CODE_POINT);

    /// Returns `None` for values above `0x10FFFF`.
    #[must_use]
    pub const fn from_u32(value: u32) -> Option<Self> {
        if value > CODE_POINT_MAX {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Only for values the decoder has already checked against [`CODE_POINT_MAX`].
    pub(crate) const fn from_u32_checked_by_caller(value: u32) -> Self { Self(value) }

    #[must_use]
    pub const fn to_u32(self) -> u32 { self.0 }

    #[must_use]
    pub const fn is_surrogate(self) -> bool {
        self.0 >= LEAD_SURROGATE_MIN && self.0 <= TRAIL_SURROGATE_MAX
    }

    #[must_use]
    pub const fn is_lead_surrogate(self) -> bool {
        self.0 >= LEAD_SURROGATE_MIN && self.0 <= LEAD_SURROGATE_MAX
    }

    #[must_use]
    pub const fn is_trail_surrogate(self) -> bool {
        self.0 >= TRAIL_SURROGATE_MIN && self.0 <= TRAIL_SURROGATE_MAX
    }

    /// `None` for surrogates.
    #[must_use]
    pub fn to_char(self) -> Option<char> { char::from_u32(self.0) }

    /// Same as [`Self::to_char`], except surrogates become U+FFFD.
    #[must_use]
    pub fn to_char_lossy(self) -> char {
        self.to_char().unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Combine a lead and a trail surrogate into the supplementary code point they
    /// represent. Returns `None` if the arguments are not a lead followed by a trail.
    #[must_use]
    pub const fn from_surrogate_pair(lead: CodePoint, trail: CodePoint) -> Option<Self> {
        if !lead.is_lead_surrogate() || !trail.is_trail_surrogate() {
            return None;
        }
        let high = lead.0 - LEAD_SURROGATE_MIN;
        let low = trail.0 - TRAIL_SURROGATE_MIN;
        Some(Self(SUPPLEMENTARY_PLANE_OFFSET + ((high << 10) | low)))
    }
}

/// Fail fast constructor.
///
/// # Panics
///
/// If `value` is above `0x10FFFF`. Passing such a value is a programmer error, it is
/// never silently truncated. Use [`CodePoint::try_from`] for untrusted input.
#[must_use]
pub fn code_point(value: u32) -> CodePoint {
    match CodePoint::from_u32(value) {
        Some(it) => it,
        None => panic!("code point {value:#X} is above U+10FFFF"),
    }
}

impl TryFrom<u32> for CodePoint {
    type Error = CodePointError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_u32(value).ok_or(CodePointError::OutOfRange(value))
    }
}

impl From<char> for CodePoint {
    fn from(it: char) -> Self { Self(u32::from(it)) }
}

/// Every UTF-16 code unit is in range, including the surrogate halves.
impl From<u16> for CodePoint {
    fn from(it: u16) -> Self { Self(u32::from(it)) }
}

impl From<CodePoint> for u32 {
    fn from(it: CodePoint) -> Self { it.0 }
}

/// Formats as `U+XXXX` (at least 4 hex digits), the way code points are usually
/// written.
impl Display for CodePoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "U+{:04X}", self.0) }
}
