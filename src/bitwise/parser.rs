// Parser combinators using nom for word-oriented binary structures

use nom::{bytes::complete::take, IResult};

/// Parse a 32-bit little-endian word
pub fn parse_word_le(input: &[u8]) -> IResult<&[u8], u32> {
    let (input, bytes) = take(4usize)(input)?;
    Ok((
        input,
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
    ))
}

/// Parse `count` consecutive 32-bit little-endian words
pub fn parse_word_array<'a>(count: usize) -> impl FnMut(&'a [u8]) -> IResult<&'a [u8], Vec<u32>> {
    move |mut input: &'a [u8]| {
        let mut words = Vec::with_capacity(count);
        for _ in 0..count {
            let (remaining, word) = parse_word_le(input)?;
            words.push(word);
            input = remaining;
        }
        Ok((input, words))
    }
}
