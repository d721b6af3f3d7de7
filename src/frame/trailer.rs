// WIB v2 frame trailer: two 32-bit little-endian words

use super::layout::TRAILER_WORDS;
use crate::bitwise::{extract_field, insert_field};

// Word 0 fields, allocated LSB-first
const CRC20_SHIFT: u32 = 0;
const CRC20_WIDTH: u32 = 20;
const FLEX_12_SHIFT: u32 = 20;
const FLEX_12_WIDTH: u32 = 12;

// Word 1 fields
const EOF_SHIFT: u32 = 0;
const EOF_WIDTH: u32 = 8;
const FLEX_24_SHIFT: u32 = 8;
const FLEX_24_WIDTH: u32 = 24;

/// Frame trailer fields over their raw word storage.
///
/// Setters truncate values wider than the field. The CRC is carried but
/// never checked here; integrity validation belongs to the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Trailer {
    words: [u32; TRAILER_WORDS],
}

impl Trailer {
    /// Create an all-zero trailer
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trailer from its raw words
    pub fn from_words(words: [u32; TRAILER_WORDS]) -> Self {
        Self { words }
    }

    /// Get the raw word storage
    pub fn words(&self) -> [u32; TRAILER_WORDS] {
        self.words
    }

    /// 20-bit frame CRC
    pub fn crc20(&self) -> u32 {
        extract_field(self.words[0], CRC20_SHIFT, CRC20_WIDTH)
    }

    pub fn set_crc20(&mut self, value: u32) {
        self.words[0] = insert_field(self.words[0], CRC20_SHIFT, CRC20_WIDTH, value);
    }

    /// First flexible status field
    pub fn flex_word_12(&self) -> u16 {
        extract_field(self.words[0], FLEX_12_SHIFT, FLEX_12_WIDTH) as u16
    }

    pub fn set_flex_word_12(&mut self, value: u16) {
        self.words[0] = insert_field(self.words[0], FLEX_12_SHIFT, FLEX_12_WIDTH, value as u32);
    }

    /// End-of-frame marker
    pub fn eof(&self) -> u8 {
        extract_field(self.words[1], EOF_SHIFT, EOF_WIDTH) as u8
    }

    pub fn set_eof(&mut self, value: u8) {
        self.words[1] = insert_field(self.words[1], EOF_SHIFT, EOF_WIDTH, value as u32);
    }

    /// Second flexible status field
    pub fn flex_word_24(&self) -> u32 {
        extract_field(self.words[1], FLEX_24_SHIFT, FLEX_24_WIDTH)
    }

    pub fn set_flex_word_24(&mut self, value: u32) {
        self.words[1] = insert_field(self.words[1], FLEX_24_SHIFT, FLEX_24_WIDTH, value);
    }
}
