use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Result;
use crate::hex::{self, WORD_DIGITS};

/// Pads a hex-digit string: a single `8` nibble (one set bit), then `0`
/// nibbles up to the next multiple of 16 digits.
///
/// The output is never empty; `pad("")` is `"8000000000000000"`.
pub fn pad(data: &str) -> String {
    let padded_len = (data.len() / WORD_DIGITS + 1) * WORD_DIGITS;
    let mut out = String::with_capacity(padded_len);
    out.push_str(data);
    out.push('8');
    while out.len() < padded_len {
        out.push('0');
    }
    out
}

/// Splits a padded string into consecutive 16-digit blocks.
///
/// `data` must already be block-aligned (see [`pad`]); an unaligned tail is
/// returned as a short final chunk. Blocks are counted in characters, so any
/// `&str` splits without panicking.
pub fn split(data: &str) -> impl Iterator<Item = &str> {
    let mut rest = data;
    core::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest
            .char_indices()
            .nth(WORD_DIGITS)
            .map_or(rest.len(), |(i, _)| i);
        let (block, tail) = rest.split_at(end);
        rest = tail;
        Some(block)
    })
}

/// Keeps the leading `digits` nibbles of `word` and pads them to a full word,
/// the integer form of `pad` applied to a fragment shorter than a block.
pub(crate) fn pad_word(word: u64, digits: usize) -> u64 {
    debug_assert!(digits < WORD_DIGITS);
    let shift = 4 * (WORD_DIGITS - digits) as u32;
    let kept = word.checked_shr(shift).unwrap_or(0).checked_shl(shift).unwrap_or(0);
    kept | (0x8 << (shift - 4))
}

/// A hex string padded and split into native 64-bit blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blocks {
    words: Vec<u64>,
    digits: usize,
}

impl Blocks {
    /// Validates, pads, splits and decodes `data`.
    pub fn parse(data: &str) -> Result<Self> {
        hex::validate(data)?;

        let padded = pad(data);
        let words = split(&padded)
            .map(hex::parse_word)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            words,
            digits: data.len(),
        })
    }

    /// Padded blocks, always at least one.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Length in hex digits of the unpadded input.
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Whether the unpadded input filled whole blocks, so the last padded
    /// block is nothing but padding.
    pub fn is_block_aligned(&self) -> bool {
        self.digits % WORD_DIGITS == 0
    }

    /// Hex digits of the input that land in the last padded block.
    pub(crate) fn tail_digits(&self) -> usize {
        self.digits % WORD_DIGITS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn pad_empty() {
        assert_eq!(pad(""), "8000000000000000");
    }

    #[test]
    fn pad_lengths() {
        assert_eq!(pad("abc"), "abc8000000000000");
        assert_eq!(pad("0123456789abcde"), "0123456789abcde8");
        assert_eq!(
            pad("0123456789abcdef"),
            "0123456789abcdef8000000000000000"
        );
        for len in 0..40 {
            let data: String = core::iter::repeat('f').take(len).collect();
            let padded = pad(&data);
            assert_eq!(padded.len() % WORD_DIGITS, 0);
            assert!(padded.len() > len);
            assert!(padded.len() <= len + WORD_DIGITS);
        }
    }

    #[test]
    fn split_blocks() {
        let padded = pad("0123456789abcdef01");
        let blocks: Vec<&str> = split(&padded).collect();
        assert_eq!(blocks, vec!["0123456789abcdef", "0180000000000000"]);
        assert_eq!(split("").count(), 0);
    }

    #[test]
    fn split_counts_characters() {
        let data = "é".repeat(20);
        let blocks: Vec<&str> = split(&data).collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].chars().count(), 16);
        assert_eq!(blocks[1].chars().count(), 4);
        assert_eq!(blocks.concat(), data);
    }

    #[test]
    fn pad_word_matches_string_padding() {
        let word = 0x0123456789abcdefu64;
        let text = "0123456789abcdef";
        for digits in 0..WORD_DIGITS {
            let expected = hex::parse_word(&pad(&text[..digits])).unwrap();
            assert_eq!(pad_word(word, digits), expected, "digits = {}", digits);
        }
    }

    #[test]
    fn parse_blocks() {
        let blocks = Blocks::parse("0123456789ABCDEF").unwrap();
        assert_eq!(blocks.words(), &[0x0123456789abcdef, 0x8000000000000000]);
        assert!(blocks.is_block_aligned());
        assert_eq!(blocks.digits(), 16);

        let blocks = Blocks::parse("abc").unwrap();
        assert_eq!(blocks.words(), &[0xabc8000000000000]);
        assert!(!blocks.is_block_aligned());
        assert_eq!(blocks.tail_digits(), 3);

        let blocks = Blocks::parse("").unwrap();
        assert_eq!(blocks.words(), &[0x8000000000000000]);
        assert!(blocks.is_block_aligned());
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert!(Blocks::parse("12 4").is_err());
        assert!(Blocks::parse("-1").is_err());
    }
}
