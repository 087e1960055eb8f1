// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result as FmtResult},
          ops::{Add, Deref}};

/// Absolute offset of a byte inside a [`crate::ByteBuffer`]. Error offsets are always
/// reported relative to the start of the whole buffer, never to the start of the
/// decoded range.
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct ByteIndex(pub usize);

impl ByteIndex {
    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }
}

pub fn byte_index(arg_byte_index: impl Into<ByteIndex>) -> ByteIndex {
    arg_byte_index.into()
}

impl Deref for ByteIndex {
    type Target = usize;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl From<usize> for ByteIndex {
    fn from(it: usize) -> Self { Self(it) }
}

impl Add<usize> for ByteIndex {
    type Output = ByteIndex;
    fn add(self, rhs: usize) -> Self::Output { Self(self.0 + rhs) }
}

impl Display for ByteIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "{}", self.0) }
}

/// Length of a [`crate::ByteBuffer`], in bytes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct ByteLength(pub usize);

impl ByteLength {
    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }

    /// The first index that is *not* readable, ie: one past the last byte. This is a
    /// valid exclusive range end.
    #[must_use]
    pub fn end_index(&self) -> ByteIndex { ByteIndex(self.0) }
}

pub fn byte_len(arg_byte_len: impl Into<ByteLength>) -> ByteLength { arg_byte_len.into() }

impl Deref for ByteLength {
    type Target = usize;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl From<usize> for ByteLength {
    fn from(it: usize) -> Self { Self(it) }
}

impl Display for ByteLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "{}", self.0) }
}
