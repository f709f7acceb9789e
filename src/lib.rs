//! Rust implementation of the [ASCON-128][asc] authenticated cipher, driven
//! by hex-digit strings.
//!
//! Plaintext, ciphertext and associated data are strings of hexadecimal
//! digits of any length (including odd lengths); keys, nonces and tags are
//! exactly 32 digits.
//!
//! ```
//! use ascon_hex::{decrypt, encrypt, Key, Nonce};
//!
//! let key: Key = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
//! let nonce: Nonce = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
//!
//! let sealed = encrypt(&nonce, &key, "000102030405060708090a0b0c0d0e0f", "0001").unwrap();
//! let plaintext = decrypt(&nonce, &key, &sealed.ciphertext, "0001", &sealed.tag).unwrap();
//! assert_eq!(plaintext, "000102030405060708090a0b0c0d0e0f");
//! ```
//!
//! [asc]: https://ascon.iaik.tugraz.at/

#![no_std]

extern crate alloc;

mod aead;
mod error;
pub mod hex;
pub mod padding;
pub mod permutation;
mod sponge;

pub use aead::{decrypt, encrypt, Sealed};
pub use error::{Error, Result};
pub use hex::{Key, Nonce, Tag};
pub use sponge::IV;
