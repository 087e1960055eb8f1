// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Encode [`CodePoint`]s as WTF-8.
//!
//! | Code point range    | Bytes | Encoding                              |
//! | ------------------- | ----- | ------------------------------------- |
//! | 0x000000 - 0x00007F | 1     | `0xxxxxxx`                            |
//! | 0x000080 - 0x0007FF | 2     | `110xxxxx 10xxxxxx`                   |
//! | 0x000800 - 0x00FFFF | 3     | `1110xxxx 10xxxxxx 10xxxxxx`          |
//! | 0x010000 - 0x10FFFF | 4     | `11110xxx 10xxxxxx 10xxxxxx 10xxxxxx` |
//!
//! Unpaired surrogates use the 3-byte row, that is the whole difference between WTF-8
//! and UTF-8. A lead surrogate that is immediately followed by a trail surrogate is a
//! pair, and is written as the 4-byte encoding of the supplementary code point it
//! stands for, so the output is always well formed WTF-8 and decodes back under
//! [`crate::DecodePolicy::Accept`].
//!
//! Values above `0x10FFFF` can't be represented by [`CodePoint`], so they never get
//! here; [`crate::code_point`] and [`CodePoint::try_from`] are where they are caught.

use smallvec::SmallVec;

use crate::{CODE_POINT_1BYTE_MAX, CODE_POINT_2BYTE_MAX, CODE_POINT_3BYTE_MAX,
            CodePoint, DecodePolicy, EncodeError, UTF8_2BYTE_MIN, UTF8_3BYTE_MIN,
            UTF8_4BYTE_MIN, UTF8_CONTINUATION_DATA_BITS, UTF8_CONTINUATION_DATA_MASK,
            UTF8_CONTINUATION_PATTERN, UTF8_MAX_SEQUENCE_LEN};

/// The bytes of a single encoded code point, never more than 4 so they stay on the
/// stack.
pub type EncodedCodePoint = SmallVec<[u8; UTF8_MAX_SEQUENCE_LEN]>;

/// Lead byte marker bits indexed by sequence length. Index 0 is unused.
const LEAD_BYTE_MARKERS: [u8; UTF8_MAX_SEQUENCE_LEN + 1] =
    [0, 0, UTF8_2BYTE_MIN, UTF8_3BYTE_MIN, UTF8_4BYTE_MIN];

/// Number of bytes needed to encode `it` on its own.
#[must_use]
pub fn sequence_len(it: CodePoint) -> usize {
    match it.to_u32() {
        value if value <= CODE_POINT_1BYTE_MAX => 1,
        value if value <= CODE_POINT_2BYTE_MAX => 2,
        value if value <= CODE_POINT_3BYTE_MAX => 3,
        _ => 4,
    }
}

/// Encode a single code point. Surrogates are written verbatim with the 3-byte form.
#[must_use]
pub fn encode_code_point(it: CodePoint) -> EncodedCodePoint {
    let value = it.to_u32();
    let len = sequence_len(it);
    let mut acc = EncodedCodePoint::new();

    // The shifted values are masked by the bit layout (lead byte gets at most 7 data
    // bits, continuation bytes exactly 6), so the `as u8` casts never drop data.
    #[allow(clippy::cast_possible_truncation)]
    {
        let continuation_count = (len - 1) as u32;
        let lead_shift = UTF8_CONTINUATION_DATA_BITS * continuation_count;
        acc.push(LEAD_BYTE_MARKERS[len] | (value >> lead_shift) as u8);
        for index in (0..continuation_count).rev() {
            let shift = UTF8_CONTINUATION_DATA_BITS * index;
            acc.push(
                UTF8_CONTINUATION_PATTERN
                    | ((value >> shift) as u8 & UTF8_CONTINUATION_DATA_MASK),
            );
        }
    }

    acc
}

/// Yields `(index, code_point)` where surrogate pairs have been combined into the
/// supplementary code point. `index` is the position of the (first) source element.
fn coalesce_pairs(code_points: &[CodePoint]) -> impl Iterator<Item = (usize, CodePoint)> {
    let mut index = 0;
    std::iter::from_fn(move || {
        let current = *code_points.get(index)?;
        let start = index;
        let combined = code_points
            .get(index + 1)
            .and_then(|next| CodePoint::from_surrogate_pair(current, *next));
        match combined {
            Some(it) => {
                index += 2;
                Some((start, it))
            }
            None => {
                index += 1;
                Some((start, current))
            }
        }
    })
}

/// Encode `code_points` as WTF-8. Total: every [`CodePoint`] sequence has an encoding.
///
/// A lead surrogate directly followed by a trail surrogate is written as the single
/// 4-byte sequence of the supplementary code point they form. So decoding the output
/// gives back that code point, not the two halves, and a sequence round trips exactly
/// only if it has no such adjacent pair (see [`crate::CodePoints::from_utf16`] for the
/// normalized form):
///
/// ```rust
/// use r3bl_wtf8::{DecodePolicy, code_points, decode_slice, encode};
///
/// let bytes = encode(&code_points![0xD800, 0xDC00, 0xD800]);
/// assert_eq!(bytes, b"\xF0\x90\x80\x80\xED\xA0\x80");
/// assert_eq!(
///     decode_slice(&bytes, DecodePolicy::Accept),
///     Ok(code_points![0x1_0000, 0xD800])
/// );
/// ```
#[must_use]
pub fn encode(code_points: &[CodePoint]) -> Vec<u8> {
    let mut acc = Vec::with_capacity(encoded_len(code_points));
    for (_, it) in coalesce_pairs(code_points) {
        acc.extend_from_slice(&encode_code_point(it));
    }
    acc
}

/// Exact length of [`encode`]'s output, without allocating it.
#[must_use]
pub fn encoded_len(code_points: &[CodePoint]) -> usize {
    coalesce_pairs(code_points).map(|(_, it)| sequence_len(it)).sum()
}

/// Encode with the same policy vocabulary the decoder uses:
/// - [`DecodePolicy::Accept`]: same as [`encode`].
/// - [`DecodePolicy::Reject`]: strict UTF-8, fails on the first unpaired surrogate.
/// - [`DecodePolicy::Replace`]: unpaired surrogates are written as U+FFFD.
///
/// # Errors
///
/// [`EncodeError::UnpairedSurrogate`] under [`DecodePolicy::Reject`].
pub fn encode_with_policy(
    code_points: &[CodePoint],
    policy: DecodePolicy,
) -> Result<Vec<u8>, EncodeError> {
    let mut acc = Vec::with_capacity(encoded_len(code_points));
    for (index, it) in coalesce_pairs(code_points) {
        let it = match (it.is_surrogate(), policy) {
            (false, _) | (true, DecodePolicy::Accept) => it,
            (true, DecodePolicy::Reject) => {
                return Err(EncodeError::UnpairedSurrogate { index });
            }
            (true, DecodePolicy::Replace) => CodePoint::REPLACEMENT,
        };
        acc.extend_from_slice(&encode_code_point(it));
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{CodePoints, assert_eq2, code_point, code_points, decode_slice};

    #[test_case(0x00, &[0x00] ; "nul")]
    #[test_case(0x7F, &[0x7F] ; "last one byte")]
    #[test_case(0x80, &[0xC2, 0x80] ; "first two bytes")]
    #[test_case(0xA9, &[0xC2, 0xA9] ; "copyright")]
    #[test_case(0x7FF, &[0xDF, 0xBF] ; "last two bytes")]
    #[test_case(0x800, &[0xE0, 0xA0, 0x80] ; "first three bytes")]
    #[test_case(0xD800, &[0xED, 0xA0, 0x80] ; "lead surrogate")]
    #[test_case(0xDC00, &[0xED, 0xB0, 0x80] ; "trail surrogate")]
    #[test_case(0xFFFF, &[0xEF, 0xBF, 0xBF] ; "last three bytes")]
    #[test_case(0x1_0000, &[0xF0, 0x90, 0x80, 0x80] ; "first four bytes")]
    #[test_case(0x10_FFFF, &[0xF4, 0x8F, 0xBF, 0xBF] ; "last four bytes")]
    fn test_encode_code_point(value: u32, expected: &[u8]) {
        let it = code_point(value);
        assert_eq2!(encode_code_point(it).as_slice(), expected);
        assert_eq2!(sequence_len(it), expected.len());
    }

    #[test]
    fn test_matches_std_for_scalar_values() {
        let text = "two \u{cccc} byte, latin \u{a9} 1, emoji \u{1F600}";
        let it = CodePoints::from(text);
        assert_eq2!(encode(&it), text.as_bytes().to_vec());
        assert_eq2!(encoded_len(&it), text.len());
    }

    #[test]
    fn test_adjacent_lead_and_trail_become_one_supplementary() {
        let it = code_points![0x61, 0xD83D, 0xDE00, 0x62];
        assert_eq2!(encode(&it), "a\u{1F600}b".as_bytes().to_vec());
        assert_eq2!(encoded_len(&it), 6);
    }

    #[test]
    fn test_adjacent_pair_decodes_as_supplementary() {
        let bytes = encode(&code_points![0xD800, 0xDC00]);
        assert_eq2!(bytes, vec![0xF0, 0x90, 0x80, 0x80]);
        assert_eq2!(
            decode_slice(&bytes, DecodePolicy::Reject),
            Ok(code_points![0x1_0000])
        );

        let bytes = encode(&code_points![0xD800, 0xDC00, 0xD800]);
        let it = decode_slice(&bytes, DecodePolicy::Accept).unwrap();
        assert_eq2!(it.to_string(), "U+10000 U+D800");
        assert_eq2!(it, CodePoints::from_utf16(&[0xD800, 0xDC00, 0xD800]));
    }

    #[test]
    fn test_swapped_pair_stays_two_three_byte_sequences() {
        let it = code_points![0xDC00, 0xD800];
        assert_eq2!(encode(&it), vec![0xED, 0xB0, 0x80, 0xED, 0xA0, 0x80]);
        assert_eq2!(encoded_len(&it), 6);
    }

    #[test]
    fn test_encode_with_policy() {
        let it = code_points![0x61, 0xD800, 0xD83D, 0xDE00];

        assert_eq2!(encode_with_policy(&it, DecodePolicy::Accept), Ok(encode(&it)));
        assert_eq2!(
            encode_with_policy(&it, DecodePolicy::Reject),
            Err(EncodeError::UnpairedSurrogate { index: 1 })
        );
        assert_eq2!(
            encode_with_policy(&it, DecodePolicy::Replace),
            Ok("a\u{FFFD}\u{1F600}".as_bytes().to_vec())
        );
    }

    #[test]
    fn test_empty() {
        assert_eq2!(encode(&[]), Vec::<u8>::new());
        assert_eq2!(encoded_len(&[]), 0);
    }
}
