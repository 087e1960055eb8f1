// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result as FmtResult},
          ops::Deref};

use crate::{CodePoint, LEAD_SURROGATE_MIN, SUPPLEMENTARY_PLANE_OFFSET,
            TRAIL_SURROGATE_MIN};

/// An ordered sequence of [`CodePoint`]s. This is what the decoder produces and what
/// the encoder consumes. It may contain unpaired surrogates (the WTF-8 domain); after a
/// successful [`crate::DecodePolicy::Reject`] decode it never does.
///
/// It can also hold a lead surrogate directly followed by a trail surrogate, but
/// [`crate::encode`] writes such a pair as one supplementary code point, so it does not
/// survive an encode and decode round trip as two halves. [`Self::from_utf16`] already
/// yields the merged form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodePoints(pub Vec<CodePoint>);

impl CodePoints {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self { Self(Vec::with_capacity(capacity)) }

    pub fn push(&mut self, it: CodePoint) { self.0.push(it); }

    #[must_use]
    pub fn into_vec(self) -> Vec<CodePoint> { self.0 }

    #[must_use]
    pub fn has_surrogate(&self) -> bool { self.0.iter().any(|it| it.is_surrogate()) }

    /// Build from UTF-16 code units the way JavaScript iterates a string: a lead unit
    /// followed by a trail unit becomes one supplementary code point, every other unit
    /// (including an isolated surrogate) becomes a code point of its own.
    #[must_use]
    pub fn from_utf16(units: &[u16]) -> Self {
        let mut acc = Self::with_capacity(units.len());
        let mut iter = units.iter().map(|unit| CodePoint::from(*unit)).peekable();
        while let Some(current) = iter.next() {
            let pair = iter
                .peek()
                .and_then(|next| CodePoint::from_surrogate_pair(current, *next));
            match pair {
                Some(combined) => {
                    iter.next();
                    acc.push(combined);
                }
                None => acc.push(current),
            }
        }
        acc
    }

    /// Inverse of [`Self::from_utf16`]. Supplementary code points are split into a
    /// surrogate pair, surrogate code points are written as a single unit.
    #[must_use]
    pub fn to_utf16(&self) -> Vec<u16> {
        let mut acc = Vec::with_capacity(self.0.len());
        for it in &self.0 {
            let value = it.to_u32();
            match u16::try_from(value) {
                Ok(unit) => acc.push(unit),
                Err(_) => {
                    let offset = value - SUPPLEMENTARY_PLANE_OFFSET;
                    // Both halves fit in 10 bits, so the casts are lossless.
                    #[allow(clippy::cast_possible_truncation)]
                    {
                        acc.push((LEAD_SURROGATE_MIN + (offset >> 10)) as u16);
                        acc.push((TRAIL_SURROGATE_MIN + (offset & 0x3FF)) as u16);
                    }
                }
            }
        }
        acc
    }

    /// Surrogates become U+FFFD, since a Rust [`String`] cannot hold them.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        self.0.iter().map(|it| it.to_char_lossy()).collect()
    }
}

impl Deref for CodePoints {
    type Target = [CodePoint];
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl From<&str> for CodePoints {
    fn from(it: &str) -> Self { it.chars().map(CodePoint::from).collect() }
}

impl From<Vec<CodePoint>> for CodePoints {
    fn from(it: Vec<CodePoint>) -> Self { Self(it) }
}

impl FromIterator<CodePoint> for CodePoints {
    fn from_iter<I: IntoIterator<Item = CodePoint>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CodePoints {
    type Item = &'a CodePoint;
    type IntoIter = std::slice::Iter<'a, CodePoint>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl IntoIterator for CodePoints {
    type Item = CodePoint;
    type IntoIter = std::vec::IntoIter<CodePoint>;
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

/// Space separated `U+XXXX` list.
impl Display for CodePoints {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (index, it) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{it}")?;
        }
        Ok(())
    }
}
