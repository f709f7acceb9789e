//! Conversions between hex-digit strings and native words.
//!
//! Everything inside the cipher works on `u64`; text only exists at this
//! boundary.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// Hex digits in one 64-bit word.
pub const WORD_DIGITS: usize = 16;

/// Removes a single leading `0x` or `0X`.
pub fn strip_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

/// Checks that every character of `input` is a hexadecimal digit.
pub fn validate(input: &str) -> Result<()> {
    match input.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        Some((position, character)) => Err(Error::InvalidEncoding {
            position,
            character,
        }),
        None => Ok(()),
    }
}

/// Parses one chunk of at most 16 hex digits into a word.
pub fn parse_word(chunk: &str) -> Result<u64> {
    if chunk.is_empty() || chunk.len() > WORD_DIGITS || !chunk.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return Err(Error::Decoding);
    }
    u64::from_str_radix(chunk, 16).map_err(|_| Error::Decoding)
}

/// Parses exactly `N` words from a string of `16 * N` hex digits.
pub fn parse_words<const N: usize>(input: &str, what: &'static str) -> Result<[u64; N]> {
    validate(input)?;
    if input.len() != N * WORD_DIGITS {
        return Err(Error::InvalidLength {
            what,
            expected: N * WORD_DIGITS,
            actual: input.len(),
        });
    }

    let mut words = [0u64; N];
    for (word, chunk) in words.iter_mut().zip(input.as_bytes().chunks(WORD_DIGITS)) {
        // validated above, so every chunk is ASCII
        let chunk = core::str::from_utf8(chunk).map_err(|_| Error::Decoding)?;
        *word = parse_word(chunk)?;
    }
    Ok(words)
}

fn words_from_bytes(bytes: &[u8; 16]) -> [u64; 2] {
    let mut hi = [0u8; 8];
    let mut lo = [0u8; 8];
    hi.copy_from_slice(&bytes[..8]);
    lo.copy_from_slice(&bytes[8..]);
    [u64::from_be_bytes(hi), u64::from_be_bytes(lo)]
}

macro_rules! word_pair {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub(crate) [u64; 2]);

        impl $name {
            /// Parses 32 hex digits, upper or lower case.
            pub fn from_hex(input: &str) -> Result<Self> {
                parse_words::<2>(input, $what).map(Self)
            }

            /// Builds the value from 16 big-endian bytes.
            pub fn from_bytes(bytes: &[u8; 16]) -> Self {
                Self(words_from_bytes(bytes))
            }

            /// The value as two 64-bit words.
            pub fn words(&self) -> [u64; 2] {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::from_hex(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{:016x}{:016x}", self.0[0], self.0[1])
            }
        }
    };
}

word_pair!(
    /// 128-bit secret key, `K0 || K1`.
    Key,
    "key"
);

word_pair!(
    /// 128-bit nonce. Must never repeat under the same key; this is not checked.
    Nonce,
    "nonce"
);

word_pair!(
    /// 128-bit authentication tag, taken from `x3 || x4` after finalization.
    Tag,
    "tag"
);

// Keys stay out of logs.
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Key(..)")
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Nonce({})", self)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({})", self)
    }
}

impl Key {
    pub(crate) fn k0(&self) -> u64 {
        self.0[0]
    }

    pub(crate) fn k1(&self) -> u64 {
        self.0[1]
    }
}

impl Tag {
    pub(crate) fn to_bytes(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[..8].copy_from_slice(&self.0[0].to_be_bytes());
        out[8..].copy_from_slice(&self.0[1].to_be_bytes());
        out
    }
}
