// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod utf8;

// Re-export.
pub use utf8::*;
