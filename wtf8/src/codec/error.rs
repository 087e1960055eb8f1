// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors surfaced by the codec.
//!
//! The [`Display`](std::fmt::Display) text of each [`DecodeError`] variant is the
//! message callers match on, so it is kept short and stable:
//!
//! | Variant                       | Raised by                         | Message                               |
//! | ----------------------------- | --------------------------------- | ------------------------------------- |
//! | [`DecodeError::InvalidWtf8`]  | [`DecodePolicy::Accept`] decode   | `invalid WTF-8 string`                |
//! | [`DecodeError::InvalidUtf8`]  | [`DecodePolicy::Reject`] decode   | `invalid UTF-8 string`                |
//! | [`DecodeError::OutOfBounds`]  | [`crate::ByteBuffer::slice`]      | `array element access out of bounds`  |
//!
//! [`DecodePolicy::Replace`] never produces a content error.
//!
//! [`DecodePolicy::Accept`]: crate::DecodePolicy::Accept
//! [`DecodePolicy::Reject`]: crate::DecodePolicy::Reject
//! [`DecodePolicy::Replace`]: crate::DecodePolicy::Replace

use crate::{ByteIndex, ByteLength, DecodePolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum DecodeError {
    /// Malformed byte sequence under [`DecodePolicy::Accept`]. Isolated surrogates are
    /// fine under this policy, a 3-byte lead surrogate followed by a 3-byte trail
    /// surrogate is not (the pair must be encoded with 4 bytes).
    #[error("invalid WTF-8 string")]
    #[diagnostic(
        code(r3bl_wtf8::decode::invalid_wtf8),
        help("retry with the `replace` policy to substitute U+FFFD for malformed bytes")
    )]
    InvalidWtf8 { offset: ByteIndex },

    /// Malformed byte sequence or any surrogate under [`DecodePolicy::Reject`].
    #[error("invalid UTF-8 string")]
    #[diagnostic(
        code(r3bl_wtf8::decode::invalid_utf8),
        help(
            "use the `accept` policy to keep unpaired surrogates, or `replace` to \
             substitute U+FFFD"
        )
    )]
    InvalidUtf8 { offset: ByteIndex },

    /// The requested `start..end` range does not fit inside the buffer. `offset` is the
    /// first index that could not be accessed.
    #[error("array element access out of bounds")]
    #[diagnostic(
        code(r3bl_wtf8::decode::out_of_bounds),
        help("the range must satisfy start <= end <= buffer length")
    )]
    OutOfBounds {
        offset: ByteIndex,
        start: ByteIndex,
        end: ByteIndex,
        length: ByteLength,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    MalformedSequence,
    OutOfBounds,
}

impl DecodeError {
    /// The content error for `policy` at `offset`. Returns `None` for
    /// [`DecodePolicy::Replace`], which repairs instead of failing.
    #[must_use]
    pub fn malformed(policy: DecodePolicy, offset: ByteIndex) -> Option<Self> {
        match policy {
            DecodePolicy::Accept => Some(DecodeError::InvalidWtf8 { offset }),
            DecodePolicy::Reject => Some(DecodeError::InvalidUtf8 { offset }),
            DecodePolicy::Replace => None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::InvalidWtf8 { .. } | DecodeError::InvalidUtf8 { .. } => {
                DecodeErrorKind::MalformedSequence
            }
            DecodeError::OutOfBounds { .. } => DecodeErrorKind::OutOfBounds,
        }
    }

    /// Absolute offset into the buffer (not relative to the start of the range).
    #[must_use]
    pub fn offset(&self) -> ByteIndex {
        match self {
            DecodeError::InvalidWtf8 { offset }
            | DecodeError::InvalidUtf8 { offset }
            | DecodeError::OutOfBounds { offset, .. } => *offset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum EncodeError {
    /// [`DecodePolicy::Reject`] encoding found a surrogate that is not part of a pair.
    /// `index` is the position in the code point sequence.
    #[error("string contains an unpaired surrogate")]
    #[diagnostic(
        code(r3bl_wtf8::encode::unpaired_surrogate),
        help("strict UTF-8 cannot represent surrogates, encode as WTF-8 instead")
    )]
    UnpairedSurrogate { index: usize },
}
