// WIB2-RS: decoder for WIB v2 cold-electronics readout frames
// Copyright 2026 - Licensed under GPLv3

pub mod bitwise;
pub mod frame;

// Re-export commonly used types
pub use bitwise::{extract_field, extract_packed, field_mask, insert_field, insert_packed};
pub use frame::{
    layout, parse_frame, unpack, DecodedFrame, FrameBuffer, FrameError, FrameView, Header,
    Trailer,
};

/// WIB2-RS version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
