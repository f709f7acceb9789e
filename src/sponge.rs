//! The four sponge phases of ASCON-128.
//!
//! Each phase consumes the sponge produced by the previous one, so the only
//! way to reach a tag is initialization, associated data, message, then
//! finalization, in that order.

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::marker::PhantomData;

use tracing::trace;

use crate::hex::{Key, Nonce, Tag, WORD_DIGITS};
use crate::padding::{pad_word, Blocks};
use crate::permutation::{permute, ROUNDS_A, ROUNDS_B};

/// ASCON-128 initialization vector: k=128, r=64, a=12, b=6.
pub const IV: u64 = 0x80400c0600000000;

/// The 320-bit state, `x0..x4`.
#[derive(Clone, PartialEq, Eq)]
struct State([u64; 5]);

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "x{}=0x{:016x}", i, x)?;
        }
        Ok(())
    }
}

/// Phase markers.
pub(crate) enum Initialized {}
pub(crate) enum Absorbed {}
pub(crate) enum Processed {}

pub(crate) struct Sponge<P> {
    state: State,
    key: Key,
    _phase: PhantomData<P>,
}

impl<P> Sponge<P> {
    fn advance<Q>(self) -> Sponge<Q> {
        Sponge {
            state: self.state,
            key: self.key,
            _phase: PhantomData,
        }
    }
}

fn push_word(out: &mut String, word: u64) {
    out.push_str(&format!("{:016x}", word));
}

impl Sponge<Initialized> {
    /// Seeds `IV || K || N`, runs `p^a` and mixes the key back into `x3, x4`.
    pub(crate) fn new(key: &Key, nonce: &Nonce) -> Self {
        let [n0, n1] = nonce.words();
        let mut state = State([IV, key.k0(), key.k1(), n0, n1]);

        permute(&mut state.0, ROUNDS_A);
        state.0[3] ^= key.k0();
        state.0[4] ^= key.k1();
        trace!(state = %state, "initialization");

        Self {
            state,
            key: *key,
            _phase: PhantomData,
        }
    }

    /// Absorbs associated data (if any) and sets the domain separator in `x4`.
    pub(crate) fn absorb_associated_data(mut self, data: Option<&Blocks>) -> Sponge<Absorbed> {
        if let Some(blocks) = data {
            for &block in blocks.words() {
                self.state.0[0] ^= block;
                permute(&mut self.state.0, ROUNDS_B);
            }
        }
        self.state.0[4] ^= 1;
        trace!(state = %self.state, "associated data");

        self.advance()
    }
}

impl Sponge<Absorbed> {
    /// Encrypts padded plaintext blocks; the returned ciphertext has exactly
    /// as many digits as the plaintext.
    pub(crate) fn encrypt(mut self, plaintext: &Blocks) -> (Sponge<Processed>, String) {
        let words = plaintext.words();
        let (&last, rest) = match words.split_last() {
            Some(split) => split,
            None => unreachable!("padding always yields a block"),
        };

        let mut ciphertext = String::with_capacity(words.len() * WORD_DIGITS);
        for &block in rest {
            self.state.0[0] ^= block;
            push_word(&mut ciphertext, self.state.0[0]);
            permute(&mut self.state.0, ROUNDS_B);
        }
        self.state.0[0] ^= last;
        push_word(&mut ciphertext, self.state.0[0]);
        ciphertext.truncate(plaintext.digits());
        trace!(state = %self.state, "plaintext");

        (self.advance(), ciphertext)
    }

    /// Decrypts padded ciphertext blocks, leaving `x0` where encryption of the
    /// recovered plaintext would have left it.
    pub(crate) fn decrypt(mut self, ciphertext: &Blocks) -> (Sponge<Processed>, String) {
        let words = ciphertext.words();
        let (&last, rest) = match words.split_last() {
            Some(split) => split,
            None => unreachable!("padding always yields a block"),
        };

        let mut plaintext = String::with_capacity(words.len() * WORD_DIGITS);
        for &block in rest {
            push_word(&mut plaintext, self.state.0[0] ^ block);
            self.state.0[0] = block;
            permute(&mut self.state.0, ROUNDS_B);
        }

        let last_plain = self.state.0[0] ^ last;
        if ciphertext.is_block_aligned() {
            // The last block is pure padding; nothing left to emit.
            self.state.0[0] = last_plain;
        } else {
            let tail = ciphertext.tail_digits();
            let mut fragment = String::with_capacity(WORD_DIGITS);
            push_word(&mut fragment, last_plain);
            plaintext.push_str(&fragment[..tail]);
            self.state.0[0] ^= pad_word(last_plain, tail);
        }
        trace!(state = %self.state, "ciphertext");

        (self.advance(), plaintext)
    }
}

impl Sponge<Processed> {
    /// Mixes the key into `x1, x2`, runs `p^a` and returns `x3 || x4` keyed again.
    pub(crate) fn finalize(mut self) -> Tag {
        let (k0, k1) = (self.key.k0(), self.key.k1());

        self.state.0[1] ^= k0;
        self.state.0[2] ^= k1;
        permute(&mut self.state.0, ROUNDS_A);
        self.state.0[3] ^= k0;
        self.state.0[4] ^= k1;
        trace!(state = %self.state, "finalization");

        Tag([self.state.0[3], self.state.0[4]])
    }
}
