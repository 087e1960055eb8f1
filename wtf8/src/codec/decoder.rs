// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decode a `[start, end)` byte range into [`CodePoints`] under a [`DecodePolicy`].
//!
//! The range is validated by [`ByteBuffer::slice`] before anything is read. The scan
//! loop then walks the window left to right, asking [`scan_sequence`] about one
//! candidate sequence at a time, and applies the policy to what it reports.
//!
//! ## Replace resynchronizes one byte at a time
//!
//! When [`DecodePolicy::Replace`] hits a problem it emits one U+FFFD and moves on to the
//! byte right after the *lead* byte, not past the whole candidate sequence. So an
//! isolated surrogate, `ED A0 80`, turns into three U+FFFD:
//!
//! ```text
//! ED A0 80    scan at ED: surrogate         → U+FFFD, advance 1
//!    A0 80    scan at A0: continuation byte → U+FFFD, advance 1
//!       80    scan at 80: continuation byte → U+FFFD, advance 1
//! ```
//!
//! The same rule applies to a truncated sequence at the end of the range: every byte
//! that is left becomes one U+FFFD.
//!
//! ```rust
//! use r3bl_wtf8::{DecodePolicy, decode};
//!
//! let buffer = b"a\xED\xA0\x80b";
//! let it = decode(buffer, 0, buffer.len(), DecodePolicy::Replace).unwrap();
//! assert_eq!(it.to_string_lossy(), "a\u{FFFD}\u{FFFD}\u{FFFD}b");
//! ```

use crate::{ByteBuffer, ByteIndex, CodePoint, CodePoints, DecodeError, DecodePolicy,
            Scanned, scan_sequence};

/// Decode `buffer[start..end]`.
///
/// On failure nothing that was decoded before the offending byte is returned.
///
/// # Errors
///
/// - [`DecodeError::OutOfBounds`] if `start > end` or `end > buffer.len()`.
/// - [`DecodeError::InvalidWtf8`] under [`DecodePolicy::Accept`] for malformed bytes.
/// - [`DecodeError::InvalidUtf8`] under [`DecodePolicy::Reject`] for malformed bytes or
///   any surrogate.
pub fn decode(
    buffer: &[u8],
    start: impl Into<ByteIndex>,
    end: impl Into<ByteIndex>,
    policy: DecodePolicy,
) -> Result<CodePoints, DecodeError> {
    let start = start.into();
    let window = ByteBuffer::new(buffer).slice(start..end.into())?;
    let mut acc = CodePoints::with_capacity(window.len());
    scan_window(window, start, policy, |it| acc.push(it))?;
    Ok(acc)
}

/// Decode an entire slice, see [`decode`].
///
/// # Errors
///
/// Same as [`decode`], except that [`DecodeError::OutOfBounds`] can't happen.
pub fn decode_slice(bytes: &[u8], policy: DecodePolicy) -> Result<CodePoints, DecodeError> {
    decode(bytes, 0, bytes.len(), policy)
}

/// Check that `buffer[start..end]` decodes under `policy`, without collecting the code
/// points. Always succeeds for [`DecodePolicy::Replace`] when the range is in bounds.
///
/// # Errors
///
/// Same as [`decode`].
pub fn validate(
    buffer: &[u8],
    start: impl Into<ByteIndex>,
    end: impl Into<ByteIndex>,
    policy: DecodePolicy,
) -> Result<(), DecodeError> {
    let start = start.into();
    let window = ByteBuffer::new(buffer).slice(start..end.into())?;
    scan_window(window, start, policy, |_| {})
}

/// The one scan loop. `base` is the absolute offset of `window[0]` in the caller's
/// buffer, used only for error reporting.
fn scan_window(
    window: &[u8],
    base: ByteIndex,
    policy: DecodePolicy,
    mut emit: impl FnMut(CodePoint),
) -> Result<(), DecodeError> {
    let mut pos = 0;
    // A 3-byte lead surrogate directly followed by a 3-byte trail surrogate is an
    // encoded pair, which is not well formed WTF-8.
    let mut previous_is_lead_surrogate = false;

    while pos < window.len() {
        match (scan_sequence(window, pos), policy) {
            (Scanned::CodePoint { code_point, len }, _) if !code_point.is_surrogate() => {
                emit(code_point);
                previous_is_lead_surrogate = false;
                pos += len;
                continue;
            }
            (Scanned::CodePoint { code_point, len }, DecodePolicy::Accept)
                if !(previous_is_lead_surrogate && code_point.is_trail_surrogate()) =>
            {
                emit(code_point);
                previous_is_lead_surrogate = code_point.is_lead_surrogate();
                pos += len;
                continue;
            }
            // Malformed under any policy, or a surrogate that the policy does not keep.
            _ => {}
        }

        let offset = base + pos;
        match DecodeError::malformed(policy, offset) {
            Some(error) => {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "decode failed",
                    %policy,
                    offset = offset.as_usize(),
                    error = %error
                );
                return Err(error);
            }
            None => {
                tracing::trace!(
                    message = "replacing malformed byte",
                    offset = offset.as_usize(),
                    byte = window[pos]
                );
                emit(CodePoint::REPLACEMENT);
                previous_is_lead_surrogate = false;
                pos += 1;
            }
        }
    }

    Ok(())
}
