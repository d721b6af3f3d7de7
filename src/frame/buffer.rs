// Owned frame storage for producers building WIB v2 frames

use super::header::Header;
use super::layout::{
    ADC_BYTE_OFFSET, ADC_PER_FRAME, BITS_PER_ADC, FRAME_BYTES, TRAILER_BYTE_OFFSET,
    TRAILER_WORD_OFFSET, WORD_BYTES,
};
use super::trailer::Trailer;
use super::view::FrameView;
use super::{FrameError, Result};
use crate::bitwise::insert_packed;

/// Owned, fixed-size storage for one frame.
///
/// Starts out zero-filled. Consumers that only decode should prefer
/// [`FrameView`] over borrowed memory; this type carries the write half of
/// every accessor pair for code that has to construct frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Create a zero-filled frame
    pub fn new() -> Self {
        Self {
            data: vec![0u8; FRAME_BYTES],
        }
    }

    /// Take ownership of an existing frame-sized buffer
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        if data.len() != FRAME_BYTES {
            return Err(FrameError::SizeMismatch {
                expected: FRAME_BYTES,
                actual: data.len(),
            });
        }
        Ok(Self { data })
    }

    /// Borrow the frame as a read-only view
    pub fn view(&self) -> FrameView<'_> {
        // Length is fixed at construction, so the view precondition holds
        FrameView { data: &self.data }
    }

    /// Get the raw frame bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return the raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    fn set_word(&mut self, index: usize, value: u32) {
        let offset = index * WORD_BYTES;
        self.data[offset..offset + WORD_BYTES].copy_from_slice(&value.to_le_bytes());
    }

    /// Get a copy of the header words
    pub fn header(&self) -> Header {
        self.view().header()
    }

    /// Overwrite the header words
    pub fn set_header(&mut self, header: &Header) {
        let words = header.words();
        for (index, word) in words.iter().enumerate() {
            self.set_word(index, *word);
        }
    }

    /// Get a copy of the trailer words
    pub fn trailer(&self) -> Trailer {
        self.view().trailer()
    }

    /// Overwrite the trailer words
    pub fn set_trailer(&mut self, trailer: &Trailer) {
        let words = trailer.words();
        for (index, word) in words.iter().enumerate() {
            self.set_word(TRAILER_WORD_OFFSET + index, *word);
        }
    }

    /// Set the 64-bit frame timestamp
    pub fn set_timestamp(&mut self, timestamp: u64) {
        let mut header = self.header();
        header.set_timestamp(timestamp);
        self.set_header(&header);
    }

    /// Get the ith ADC value in the frame
    pub fn get_adc(&self, index: usize) -> Result<u16> {
        self.view().get_adc(index)
    }

    /// Set the ith ADC value in the frame.
    /// Values wider than 14 bits are truncated.
    pub fn set_adc(&mut self, index: usize, value: u16) -> Result<()> {
        if index >= ADC_PER_FRAME {
            return Err(FrameError::AdcIndexOutOfRange(index));
        }
        let adc_region = &mut self.data[ADC_BYTE_OFFSET..TRAILER_BYTE_OFFSET];
        insert_packed(
            adc_region,
            index * BITS_PER_ADC,
            BITS_PER_ADC as u32,
            value as u32,
        )?;
        Ok(())
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for FrameBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
