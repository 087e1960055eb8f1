// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything behind the `wtf8` binary, kept in the library so it can be tested.

// Attach.
pub mod clap_config;
pub mod run;
pub mod text_escape;

// Re-export.
pub use clap_config::*;
pub use run::*;
pub use text_escape::*;
