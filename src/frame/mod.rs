// WIB v2 frame model: header/trailer bit fields and packed 14-bit ADC samples

pub mod buffer;
pub mod header;
pub mod layout;
pub mod trailer;
pub mod unpack;
pub mod view;

use crate::bitwise::ElementError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("ADC index out of range: {0}")]
    AdcIndexOutOfRange(usize),

    #[error("FEMB index out of range: {0}")]
    FembIndexOutOfRange(usize),

    #[error("Channel index out of range: {0}")]
    ChannelIndexOutOfRange(usize),

    #[error("Frame buffer size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("ADC sample count mismatch: expected {expected}, got {actual}")]
    AdcCountMismatch { expected: usize, actual: usize },

    #[error("Frame parse error: {0}")]
    Parse(String),

    #[error("Word access error: {0}")]
    Element(#[from] ElementError),
}

pub type Result<T> = std::result::Result<T, FrameError>;

pub use buffer::FrameBuffer;
pub use header::Header;
pub use trailer::Trailer;
pub use unpack::{parse_frame, unpack, DecodedFrame};
pub use view::FrameView;
