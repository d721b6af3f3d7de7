// Eager full-frame decode to a flat record and back

use super::buffer::FrameBuffer;
use super::header::Header;
use super::layout::{ADC_BYTES, ADC_PER_FRAME, BITS_PER_ADC, FRAME_BYTES, HEADER_WORDS, TRAILER_WORDS};
use super::trailer::Trailer;
use super::{FrameError, Result};
use crate::bitwise::{extract_packed, parse_word_array};
use nom::{
    bytes::complete::take,
    error::{Error, ErrorKind},
    IResult,
};
use serde::{Deserialize, Serialize};

/// One fully decoded frame.
///
/// A flat copy of every header and trailer field plus the 256 ADC values in
/// frame order. Useful when the caller wants all samples at once instead of
/// random access through [`super::FrameView`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecodedFrame {
    pub crate_no: u8,
    pub frame_version: u8,
    pub slot: u8,
    pub fiber: u8,
    pub femb_valid: u8,
    pub wib_code_1: u16,
    pub wib_code_2: u32,
    pub timestamp: u64,
    pub adcs: Vec<u16>,
    pub crc20: u32,
    pub flex_word_12: u16,
    pub eof: u8,
    pub flex_word_24: u32,
}

impl DecodedFrame {
    /// Pack the record back into frame bytes.
    /// `adcs` must hold exactly 256 samples.
    pub fn pack(&self) -> Result<FrameBuffer> {
        if self.adcs.len() != ADC_PER_FRAME {
            return Err(FrameError::AdcCountMismatch {
                expected: ADC_PER_FRAME,
                actual: self.adcs.len(),
            });
        }

        let mut buffer = FrameBuffer::new();

        let mut header = Header::new();
        header.set_crate_no(self.crate_no);
        header.set_frame_version(self.frame_version);
        header.set_slot(self.slot);
        header.set_fiber(self.fiber);
        header.set_femb_valid(self.femb_valid);
        header.set_wib_code_1(self.wib_code_1);
        header.set_wib_code_2(self.wib_code_2);
        header.set_timestamp(self.timestamp);
        buffer.set_header(&header);

        let mut trailer = Trailer::new();
        trailer.set_crc20(self.crc20);
        trailer.set_flex_word_12(self.flex_word_12);
        trailer.set_eof(self.eof);
        trailer.set_flex_word_24(self.flex_word_24);
        buffer.set_trailer(&trailer);

        for (index, adc) in self.adcs.iter().enumerate() {
            buffer.set_adc(index, *adc)?;
        }

        tracing::debug!(timestamp = self.timestamp, "packed WIB frame");
        Ok(buffer)
    }
}

/// Parse one frame off the front of `input`, returning the remainder
pub fn parse_frame(input: &[u8]) -> IResult<&[u8], DecodedFrame> {
    let (input, header_words) = parse_word_array(HEADER_WORDS)(input)?;
    let (input, adc_bytes) = take(ADC_BYTES)(input)?;
    let (input, trailer_words) = parse_word_array(TRAILER_WORDS)(input)?;

    let header = Header::from_words([
        header_words[0],
        header_words[1],
        header_words[2],
        header_words[3],
    ]);
    let trailer = Trailer::from_words([trailer_words[0], trailer_words[1]]);

    let mut adcs = Vec::with_capacity(ADC_PER_FRAME);
    for index in 0..ADC_PER_FRAME {
        let value = extract_packed(adc_bytes, index * BITS_PER_ADC, BITS_PER_ADC as u32)
            .map_err(|_| nom::Err::Error(Error::new(input, ErrorKind::Verify)))?;
        adcs.push(value as u16);
    }

    let frame = DecodedFrame {
        crate_no: header.crate_no(),
        frame_version: header.frame_version(),
        slot: header.slot(),
        fiber: header.fiber(),
        femb_valid: header.femb_valid(),
        wib_code_1: header.wib_code_1(),
        wib_code_2: header.wib_code_2(),
        timestamp: header.timestamp(),
        adcs,
        crc20: trailer.crc20(),
        flex_word_12: trailer.flex_word_12(),
        eof: trailer.eof(),
        flex_word_24: trailer.flex_word_24(),
    };

    Ok((input, frame))
}

/// Decode a buffer holding exactly one frame
pub fn unpack(bytes: &[u8]) -> Result<DecodedFrame> {
    if bytes.len() != FRAME_BYTES {
        return Err(FrameError::SizeMismatch {
            expected: FRAME_BYTES,
            actual: bytes.len(),
        });
    }

    let frame = parse_frame(bytes)
        .map(|(_, frame)| frame)
        .map_err(|err| FrameError::Parse(format!("{err:?}")))?;

    tracing::trace!(
        timestamp = frame.timestamp,
        crate_no = frame.crate_no,
        "unpacked WIB frame"
    );
    Ok(frame)
}
