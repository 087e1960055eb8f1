// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod byte_buffer;
pub mod byte_index;
pub mod code_point;
pub mod code_points;

// Re-export.
pub use byte_buffer::*;
pub use byte_index::*;
pub use code_point::*;
pub use code_points::*;
