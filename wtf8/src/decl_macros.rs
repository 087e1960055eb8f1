// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq!`] so that failing comparisons of long
/// code point or byte sequences print a readable diff.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Syntactic sugar for `Ok(())` (no args) and `Ok($value)` (one arg).
#[macro_export]
macro_rules! ok {
    () => {
        Ok(())
    };
    ($value:expr) => {
        Ok($value)
    };
}

/// Build a [`crate::CodePoints`] from a list of `u32` literals. Panics (fail fast) if
/// any value is above `0x10FFFF`.
///
/// ```rust
/// use r3bl_wtf8::{code_points, encode};
///
/// let it = code_points![0x61, 0xD800, 0x62];
/// assert_eq!(encode(&it), vec![0x61, 0xED, 0xA0, 0x80, 0x62]);
/// ```
#[macro_export]
macro_rules! code_points {
    ($($value:expr),* $(,)?) => {
        $crate::CodePoints::from_iter([$($crate::code_point($value)),*])
    };
}
