// Read-only overlay over a raw WIB v2 frame buffer

use super::header::Header;
use super::layout::{
    ADC_BYTE_OFFSET, ADC_PER_FEMB, ADC_PER_FRAME, BITS_PER_ADC, FEMB_PER_FRAME, FRAME_BYTES,
    TRAILER_BYTE_OFFSET, TRAILER_WORD_OFFSET, U_PER_FEMB, V_PER_FEMB, WORD_BYTES, X_PER_FEMB,
};
use super::trailer::Trailer;
use super::{FrameError, Result};
use crate::bitwise::extract_packed;

/// Read-only view over one frame of caller-owned memory.
///
/// The view borrows the buffer and copies nothing; every accessor is a pure
/// O(1) projection of the underlying bytes.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub(crate) data: &'a [u8],
}

impl<'a> FrameView<'a> {
    /// Create a view over `data`, which must hold exactly one frame
    pub fn new(data: &'a [u8]) -> Result<Self> {
        if data.len() != FRAME_BYTES {
            return Err(FrameError::SizeMismatch {
                expected: FRAME_BYTES,
                actual: data.len(),
            });
        }
        Ok(Self { data })
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    // Buffer length is checked at construction, so in-range word reads
    // cannot run past the slice.
    fn word(&self, index: usize) -> u32 {
        let offset = index * WORD_BYTES;
        u32::from_le_bytes([
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ])
    }

    /// Get a copy of the header words
    pub fn header(&self) -> Header {
        Header::from_words([self.word(0), self.word(1), self.word(2), self.word(3)])
    }

    /// Get a copy of the trailer words
    pub fn trailer(&self) -> Trailer {
        Trailer::from_words([
            self.word(TRAILER_WORD_OFFSET),
            self.word(TRAILER_WORD_OFFSET + 1),
        ])
    }

    /// The 64-bit frame timestamp
    pub fn timestamp(&self) -> u64 {
        self.header().timestamp()
    }

    /// Get the ith ADC value in the frame.
    ///
    /// The 14-bit samples are packed back to back across the sample words.
    /// Their order is 40 U, 40 V and 48 X (collection) channel values from
    /// FEMB 0, then the same 128 values from FEMB 1. The result always fits
    /// 14 bits regardless of the surrounding word contents.
    pub fn get_adc(&self, index: usize) -> Result<u16> {
        if index >= ADC_PER_FRAME {
            return Err(FrameError::AdcIndexOutOfRange(index));
        }
        let adc_region = &self.data[ADC_BYTE_OFFSET..TRAILER_BYTE_OFFSET];
        let value = extract_packed(adc_region, index * BITS_PER_ADC, BITS_PER_ADC as u32)?;
        Ok(value as u16)
    }

    /// Get the ith U-channel ADC value of the given FEMB
    pub fn get_u(&self, femb: usize, channel: usize) -> Result<u16> {
        if channel >= U_PER_FEMB {
            return Err(FrameError::ChannelIndexOutOfRange(channel));
        }
        self.get_adc(femb_base(femb)? + channel)
    }

    /// Get the ith V-channel ADC value of the given FEMB
    pub fn get_v(&self, femb: usize, channel: usize) -> Result<u16> {
        if channel >= V_PER_FEMB {
            return Err(FrameError::ChannelIndexOutOfRange(channel));
        }
        self.get_adc(femb_base(femb)? + U_PER_FEMB + channel)
    }

    /// Get the ith X-channel (collection) ADC value of the given FEMB
    pub fn get_x(&self, femb: usize, channel: usize) -> Result<u16> {
        if channel >= X_PER_FEMB {
            return Err(FrameError::ChannelIndexOutOfRange(channel));
        }
        self.get_adc(femb_base(femb)? + U_PER_FEMB + V_PER_FEMB + channel)
    }

    /// Decode all 256 ADC values in frame order
    pub fn adc_values(&self) -> Result<Vec<u16>> {
        (0..ADC_PER_FRAME).map(|index| self.get_adc(index)).collect()
    }
}

fn femb_base(femb: usize) -> Result<usize> {
    if femb >= FEMB_PER_FRAME {
        return Err(FrameError::FembIndexOutOfRange(femb));
    }
    Ok(femb * ADC_PER_FEMB)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::buffer::FrameBuffer;

    fn frame_with_adc_words(words: &[(usize, u32)]) -> Vec<u8> {
        let mut data = vec![0u8; FRAME_BYTES];
        for &(index, word) in words {
            let offset = ADC_BYTE_OFFSET + index * WORD_BYTES;
            data[offset..offset + WORD_BYTES].copy_from_slice(&word.to_le_bytes());
        }
        data
    }

    #[test]
    fn test_size_validation() {
        assert!(matches!(
            FrameView::new(&[0u8; 16]),
            Err(FrameError::SizeMismatch {
                expected: FRAME_BYTES,
                actual: 16
            })
        ));

        let data = vec![0u8; FRAME_BYTES];
        assert!(FrameView::new(&data).is_ok());
    }

    #[test]
    fn test_adc_in_first_word() {
        let data = frame_with_adc_words(&[(0, 0x0000_3FFF)]);
        let view = FrameView::new(&data).unwrap();
        assert_eq!(view.get_adc(0).unwrap(), 0x3FFF);
        assert_eq!(view.get_adc(1).unwrap(), 0);
        assert_eq!(view.get_adc(255).unwrap(), 0);
    }

    #[test]
    fn test_adc_across_word_boundary() {
        // Sample 2 occupies bits 28..41: its low 4 bits sit at the top of
        // word 0 and its high 10 bits at the bottom of word 1
        let data = frame_with_adc_words(&[(0, 0xA000_0000), (1, 0x0000_0155)]);
        let view = FrameView::new(&data).unwrap();
        assert_eq!(view.get_adc(2).unwrap(), 0x155A);
        assert_eq!(view.get_adc(1).unwrap(), 0);
        assert_eq!(view.get_adc(3).unwrap(), 0);
    }

    #[test]
    fn test_adc_range_full() {
        let mut data = vec![0u8; FRAME_BYTES];
        for byte in &mut data[ADC_BYTE_OFFSET..TRAILER_BYTE_OFFSET] {
            *byte = 0xFF;
        }
        let view = FrameView::new(&data).unwrap();
        for index in 0..ADC_PER_FRAME {
            assert_eq!(view.get_adc(index).unwrap(), 0x3FFF);
        }
    }

    #[test]
    fn test_adc_index_out_of_range() {
        let data = vec![0u8; FRAME_BYTES];
        let view = FrameView::new(&data).unwrap();
        assert!(matches!(
            view.get_adc(256),
            Err(FrameError::AdcIndexOutOfRange(256))
        ));
        assert!(view.get_adc(usize::MAX).is_err());
    }

    #[test]
    fn test_channel_lookups_match_global_index() {
        let mut buffer = FrameBuffer::new();
        for index in 0..ADC_PER_FRAME {
            buffer.set_adc(index, index as u16).unwrap();
        }
        let view = buffer.view();

        for femb in 0..FEMB_PER_FRAME {
            let base = femb * ADC_PER_FEMB;
            for channel in 0..U_PER_FEMB {
                assert_eq!(view.get_u(femb, channel).unwrap(), (base + channel) as u16);
            }
            for channel in 0..V_PER_FEMB {
                assert_eq!(
                    view.get_v(femb, channel).unwrap(),
                    (base + U_PER_FEMB + channel) as u16
                );
            }
            for channel in 0..X_PER_FEMB {
                assert_eq!(
                    view.get_x(femb, channel).unwrap(),
                    (base + U_PER_FEMB + V_PER_FEMB + channel) as u16
                );
            }
        }
    }

    #[test]
    fn test_channel_lookup_validation() {
        let data = vec![0u8; FRAME_BYTES];
        let view = FrameView::new(&data).unwrap();

        assert!(matches!(
            view.get_u(2, 0),
            Err(FrameError::FembIndexOutOfRange(2))
        ));
        assert!(matches!(
            view.get_u(0, 40),
            Err(FrameError::ChannelIndexOutOfRange(40))
        ));
        assert!(view.get_v(0, 40).is_err());
        assert!(view.get_x(0, 48).is_err());
        assert!(view.get_x(1, 47).is_ok());
    }

    #[test]
    fn test_header_trailer_projection() {
        let mut data = vec![0u8; FRAME_BYTES];
        data[0..4].copy_from_slice(&0x1234_5678u32.to_le_bytes());
        data[8..12].copy_from_slice(&0xAAAA_AAAAu32.to_le_bytes());
        data[12..16].copy_from_slice(&0x5555_5555u32.to_le_bytes());
        let trailer_word1 = TRAILER_BYTE_OFFSET + WORD_BYTES;
        data[TRAILER_BYTE_OFFSET..trailer_word1].copy_from_slice(&0x000A_BCDEu32.to_le_bytes());

        let view = FrameView::new(&data).unwrap();
        assert_eq!(view.header().words()[0], 0x1234_5678);
        assert_eq!(view.timestamp(), 0x5555_5555_AAAA_AAAA);
        assert_eq!(view.trailer().crc20(), 0xA_BCDE);
    }

    #[test]
    fn test_adc_values_bulk() {
        let mut buffer = FrameBuffer::new();
        for index in 0..ADC_PER_FRAME {
            buffer.set_adc(index, (index * 7 % 0x4000) as u16).unwrap();
        }
        let values = buffer.view().adc_values().unwrap();
        assert_eq!(values.len(), ADC_PER_FRAME);
        for (index, value) in values.iter().enumerate() {
            assert_eq!(*value, (index * 7 % 0x4000) as u16);
        }
    }
}
