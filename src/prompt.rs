//! Interactive collection of hex inputs on stdin.

use std::io::{self, BufRead, Write};

use ascon_hex::hex;
use rand::Rng;

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// What a prompted value has to look like.
#[derive(Debug, Clone, Copy)]
pub enum Expect {
    /// Exactly 32 hex digits.
    Block128,
    /// One or more hex digits.
    Hex,
    /// Zero or more hex digits.
    OptionalHex,
}

impl Expect {
    pub fn accepts(self, value: &str) -> bool {
        let is_hex = hex::validate(value).is_ok();
        match self {
            Expect::Block128 => is_hex && value.len() == 32,
            Expect::Hex => is_hex && !value.is_empty(),
            Expect::OptionalHex => is_hex,
        }
    }
}

/// Strips a `0x` prefix and surrounding whitespace.
pub fn normalize(input: &str) -> String {
    hex::strip_prefix(input.trim()).to_owned()
}

/// 32 random hex digits.
pub fn random_hex128() -> String {
    let mut rng = rand::rng();
    (0..32)
        .map(|_| HEX_CHARS[rng.random_range(0..16)] as char)
        .collect()
}

pub struct Prompter<R> {
    input: R,
}

impl<R: BufRead> Prompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Prints `message` and reads one trimmed line.
    pub fn line(&mut self, message: &str) -> io::Result<String> {
        print!("{}", message);
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(line.trim().to_owned())
    }

    fn read_hex(&mut self, message: &str) -> io::Result<String> {
        self.line(message).map(|line| normalize(&line))
    }

    /// Prompts until the answer satisfies `expect`.
    pub fn ask(&mut self, message: &str, expect: Expect, invalid: &str) -> io::Result<String> {
        loop {
            let value = self.read_hex(message)?;
            if expect.accepts(&value) {
                return Ok(value);
            }
            println!("{}", invalid);
        }
    }

    /// Like [`Prompter::ask`] for a 128-bit value, but an empty answer is
    /// replaced by a random one.
    pub fn ask_or_generate(&mut self, message: &str, invalid: &str) -> io::Result<String> {
        loop {
            let value = self.read_hex(message)?;
            if value.is_empty() {
                let generated = random_hex128();
                println!("Generated key: {}", generated);
                return Ok(generated);
            }
            if Expect::Block128.accepts(&value) {
                return Ok(value);
            }
            println!("{}", invalid);
        }
    }
}

/// Resolves a value given on the command line, or prompts for it.
pub fn flag_or_ask<R: BufRead>(
    prompter: &mut Prompter<R>,
    flag: Option<&str>,
    message: &str,
    expect: Expect,
    invalid: &str,
) -> io::Result<String> {
    match flag.map(normalize) {
        Some(value) if expect.accepts(&value) => Ok(value),
        Some(_) => {
            println!("{}", invalid);
            prompter.ask(message, expect, invalid)
        }
        None => prompter.ask(message, expect, invalid),
    }
}
