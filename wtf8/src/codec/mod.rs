// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The codec: [`encode`] code points to WTF-8, and [`decode`] byte ranges back under a
//! [`DecodePolicy`].
//!
//! Everything in here is a pure function over borrowed input. There is no shared
//! state, so the same buffer can be decoded from many threads at once.

// Attach.
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod policy;
pub mod scanner;

// Re-export.
pub use decoder::*;
pub use encoder::*;
pub use error::*;
pub use policy::*;
pub use scanner::*;
