// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_wtf8
//!
//! Convert between sequences of Unicode code points and bytes, in three flavors that
//! share one scanner:
//!
//! | [`DecodePolicy`] | Also known as | Surrogates                  | Malformed bytes        |
//! | ---------------- | ------------- | --------------------------- | ---------------------- |
//! | `Accept`         | `wtf8`        | kept                        | `invalid WTF-8 string` |
//! | `Reject`         | `utf8`        | `invalid UTF-8 string`      | `invalid UTF-8 string` |
//! | `Replace`        | `utf8-sloppy` | U+FFFD, one per byte        | U+FFFD, one per byte   |
//!
//! [WTF-8](https://simonsapin.github.io/wtf-8/) is UTF-8 that also allows unpaired
//! surrogates (U+D800..=U+DFFF) to be written with the regular 3-byte form. That makes
//! it able to hold any sequence of UTF-16 code units, which is what JavaScript and
//! WebAssembly string refs are.
//!
//! ```rust
//! use r3bl_wtf8::{DecodeError, DecodePolicy, code_points, decode, encode};
//!
//! // A lone lead surrogate between two letters.
//! let bytes = encode(&code_points![0x61, 0xD800, 0x62]);
//! assert_eq!(bytes, b"a\xED\xA0\x80b");
//!
//! // WTF-8 gets it back unchanged.
//! let it = decode(&bytes, 0, bytes.len(), DecodePolicy::Accept).unwrap();
//! assert_eq!(it, code_points![0x61, 0xD800, 0x62]);
//!
//! // Strict UTF-8 refuses, and says where.
//! let error = decode(&bytes, 0, bytes.len(), DecodePolicy::Reject).unwrap_err();
//! assert_eq!(error.to_string(), "invalid UTF-8 string");
//! assert_eq!(error.offset().as_usize(), 1);
//!
//! // Lossy UTF-8 swaps each byte of the surrogate for U+FFFD.
//! let it = decode(&bytes, 0, bytes.len(), DecodePolicy::Replace).unwrap();
//! assert_eq!(it.to_string_lossy(), "a\u{FFFD}\u{FFFD}\u{FFFD}b");
//!
//! // Ranges are checked before anything is read.
//! assert!(matches!(
//!     decode(&bytes, 3, 99, DecodePolicy::Replace),
//!     Err(DecodeError::OutOfBounds { .. })
//! ));
//! ```
//!
//! # Modules
//!
//! - [`mod@units`]: [`CodePoint`], [`CodePoints`], [`ByteIndex`], [`ByteBuffer`].
//! - [`mod@codec`]: [`encode`], [`decode`], [`validate`], errors and the scanner.
//! - [`mod@log`]: opt in `tracing` subscriber and the `miette` report hook.
//! - [`mod@cli`]: the `wtf8` binary's arguments and commands.
//!
//! Everything is re-exported from the crate root.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod cli;
pub mod codec;
pub mod constants;
pub mod decl_macros;
pub mod log;
pub mod units;

// Re-export.
pub use cli::*;
pub use codec::*;
pub use constants::*;
pub use log::*;
pub use units::*;
