// Bit-level access layer beneath the frame overlay

pub mod elements;
pub mod parser;

pub use elements::{
    extract_field, extract_packed, field_mask, insert_field, insert_packed, read_word_le,
    write_word_le, ElementError,
};
pub use parser::{parse_word_array, parse_word_le};
