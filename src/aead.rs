use alloc::string::String;

use constant_time_eq::constant_time_eq;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::hex::{Key, Nonce, Tag};
use crate::padding::Blocks;
use crate::sponge::Sponge;

/// Output of [`encrypt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sealed {
    /// Lowercase hex, same length as the plaintext.
    pub ciphertext: String,
    pub tag: Tag,
}

fn associated_blocks(associated_data: &str) -> Result<Option<Blocks>> {
    if associated_data.is_empty() {
        Ok(None)
    } else {
        Blocks::parse(associated_data).map(Some)
    }
}

/// ASCON-128 encryption of a hex-digit `plaintext`, authenticating
/// `associated_data` alongside it. Empty associated data means none.
///
/// `nonce` must be unique per key.
#[instrument(level = "debug", skip_all, fields(digits = plaintext.len()))]
pub fn encrypt(nonce: &Nonce, key: &Key, plaintext: &str, associated_data: &str) -> Result<Sealed> {
    let associated = associated_blocks(associated_data)?;
    let message = Blocks::parse(plaintext)?;

    let (sponge, ciphertext) = Sponge::new(key, nonce)
        .absorb_associated_data(associated.as_ref())
        .encrypt(&message);
    let tag = sponge.finalize();

    debug!(%tag, "encrypted");
    Ok(Sealed { ciphertext, tag })
}

/// Returns the plaintext of `ciphertext` if the tag calculated from `nonce`,
/// `key`, `ciphertext` and `associated_data` matches `expected_tag`.
///
/// On mismatch the candidate plaintext is dropped and
/// [`Error::AuthenticationFailure`] is returned.
#[instrument(level = "debug", skip_all, fields(digits = ciphertext.len()))]
pub fn decrypt(
    nonce: &Nonce,
    key: &Key,
    ciphertext: &str,
    associated_data: &str,
    expected_tag: &Tag,
) -> Result<String> {
    let associated = associated_blocks(associated_data)?;
    let message = Blocks::parse(ciphertext)?;

    let (sponge, plaintext) = Sponge::new(key, nonce)
        .absorb_associated_data(associated.as_ref())
        .decrypt(&message);
    let tag = sponge.finalize();

    if !constant_time_eq(&tag.to_bytes(), &expected_tag.to_bytes()) {
        debug!("tag mismatch");
        Err(Error::AuthenticationFailure)
    } else {
        Ok(plaintext)
    }
}
