use thiserror::Error;

/// Errors returned by the ASCON functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input contains a character that is not a hexadecimal digit.
    #[error("invalid hex digit {character:?} at position {position}")]
    InvalidEncoding { position: usize, character: char },

    /// A fixed-size value (key, nonce or tag) has the wrong number of hex digits.
    #[error("{what} must be {expected} hex digits, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A 64-bit block could not be decoded.
    #[error("failed to decode 64-bit block")]
    Decoding,

    /// Calculated tag does not match expected.
    #[error("calculated tag does not match expected")]
    AuthenticationFailure,
}

pub type Result<T> = core::result::Result<T, Error>;
