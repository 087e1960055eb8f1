// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter, EnumString};

/// How the decoder treats surrogates and malformed byte sequences. One scanner serves
/// all three, the policy only decides what happens when the scanner reports a problem.
///
/// | Policy      | Surrogates                          | Malformed bytes              |
/// | ----------- | ----------------------------------- | ---------------------------- |
/// | `Accept`    | kept (unless 3+3 byte encoded pair) | `invalid WTF-8 string`       |
/// | `Reject`    | `invalid UTF-8 string`              | `invalid UTF-8 string`       |
/// | `Replace`   | one U+FFFD per byte                 | one U+FFFD per byte          |
///
/// Parses from the names used on the command line:
///
/// ```rust
/// use std::str::FromStr;
/// use r3bl_wtf8::DecodePolicy;
///
/// assert_eq!(DecodePolicy::from_str("wtf8"), Ok(DecodePolicy::Accept));
/// assert_eq!(DecodePolicy::from_str("utf8-sloppy"), Ok(DecodePolicy::Replace));
/// assert_eq!(DecodePolicy::Reject.to_string(), "reject");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DecodePolicy {
    /// WTF-8.
    #[default]
    #[strum(to_string = "accept", serialize = "wtf8")]
    Accept,
    /// Strict UTF-8.
    #[strum(to_string = "reject", serialize = "utf8")]
    Reject,
    /// Lossy UTF-8.
    #[strum(to_string = "replace", serialize = "utf8-sloppy")]
    Replace,
}
