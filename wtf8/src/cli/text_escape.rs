// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A Rust [`String`] can't hold an unpaired surrogate, so text given to `wtf8 encode`
//! may spell any code point as `\u{XXXX}`. Everything else is taken literally.

use crate::{CodePoint, CodePointError, CodePoints};

const ESCAPE_OPEN: &str = "\\u{";
const ESCAPE_CLOSE: char = '}';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum TextEscapeError {
    #[error("unterminated `\\u{{` escape at byte {offset}")]
    #[diagnostic(
        code(r3bl_wtf8::cli::unterminated_escape),
        help("close the escape with a brace, eg: `\\u{{D800}}`")
    )]
    Unterminated { offset: usize },

    #[error("`{digits}` is not a hex number")]
    #[diagnostic(
        code(r3bl_wtf8::cli::invalid_escape),
        help("escapes hold 1 to 6 hex digits, eg: `\\u{{1F600}}`")
    )]
    InvalidDigits { digits: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    OutOfRange(#[from] CodePointError),
}

/// Turn `text` into code points, expanding `\u{XXXX}` escapes.
///
/// # Errors
///
/// If an escape isn't closed, doesn't hold hex digits, or names a value above
/// U+10FFFF.
pub fn parse_escaped_text(text: &str) -> Result<CodePoints, TextEscapeError> {
    let mut acc = CodePoints::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(ESCAPE_OPEN) {
        acc.0.extend(rest[..open].chars().map(CodePoint::from));

        let after_open = &rest[open + ESCAPE_OPEN.len()..];
        let Some(close) = after_open.find(ESCAPE_CLOSE) else {
            return Err(TextEscapeError::Unterminated {
                offset: text.len() - rest.len() + open,
            });
        };

        let digits = &after_open[..close];
        if digits.is_empty() || !digits.chars().all(|it| it.is_ascii_hexdigit()) {
            return Err(TextEscapeError::InvalidDigits {
                digits: digits.to_string(),
            });
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| TextEscapeError::InvalidDigits {
                digits: digits.to_string(),
            })?;
        acc.push(CodePoint::try_from(value)?);

        rest = &after_open[close + 1..];
    }

    acc.0.extend(rest.chars().map(CodePoint::from));
    Ok(acc)
}
