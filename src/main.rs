use std::io::{self, BufRead};
use std::process::ExitCode;

use ascon_hex::{decrypt, encrypt, Error, Key, Nonce, Tag};
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_forest::util::LevelFilter;
use tracing_forest::ForestLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

mod prompt;

use prompt::{flag_or_ask, normalize, random_hex128, Expect, Prompter};

const RULE: &str = "____________________________________________________";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prompted for when left out.
    #[command(subcommand)]
    mode: Option<Mode>,
}

/// Values left out are prompted for on stdin.
#[derive(Subcommand, Debug)]
enum Mode {
    /// Encrypt a hex plaintext under a fresh random nonce.
    #[command(visible_alias = "e")]
    Encrypt {
        /// 128-bit key; an empty answer at the prompt generates one.
        #[arg(short, long)]
        key: Option<String>,

        /// Plaintext in hexadecimal.
        #[arg(short, long)]
        plaintext: Option<String>,

        /// Associated data in hexadecimal.
        #[arg(short, long)]
        associated_data: Option<String>,
    },

    /// Decrypt and verify a hex ciphertext.
    #[command(visible_alias = "d")]
    Decrypt {
        /// 128-bit key.
        #[arg(short, long)]
        key: Option<String>,

        /// Nonce used for encryption.
        #[arg(short, long)]
        nonce: Option<String>,

        /// Ciphertext in hexadecimal.
        #[arg(short, long)]
        ciphertext: Option<String>,

        /// Associated data in hexadecimal.
        #[arg(short, long)]
        associated_data: Option<String>,

        /// Authentication tag.
        #[arg(short, long)]
        tag: Option<String>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Cipher(#[from] Error),
}

fn display_info(key: &str, nonce: &str, associated_data: &str, body: &[(&str, &str)]) {
    println!("\n{}\n", RULE);
    println!("Key:\n0x{}\n", key);
    println!("Nonce:\n0x{}\n", nonce);
    if associated_data.is_empty() {
        println!("Associated Data:\nN/A\n");
    } else {
        println!("Associated Data:\n0x{}\n", associated_data);
    }
    for (label, value) in body {
        println!("{}:\n0x{}\n", label, value);
    }
    println!("{}\n", RULE);
}

fn ask_mode<R: BufRead>(prompter: &mut Prompter<R>) -> io::Result<Mode> {
    loop {
        match prompter
            .line("\nChoose to encrypt ('e') or decrypt ('d'): ")?
            .as_str()
        {
            "e" | "encrypt" => {
                return Ok(Mode::Encrypt {
                    key: None,
                    plaintext: None,
                    associated_data: None,
                })
            }
            "d" | "decrypt" => {
                return Ok(Mode::Decrypt {
                    key: None,
                    nonce: None,
                    ciphertext: None,
                    associated_data: None,
                    tag: None,
                })
            }
            _ => println!("Invalid input"),
        }
    }
}

/// Runs one encryption or decryption; `Ok(false)` means the tag did not verify.
fn run<R: BufRead>(prompter: &mut Prompter<R>, mode: Mode) -> Result<bool, CliError> {
    match mode {
        Mode::Encrypt {
            key,
            plaintext,
            associated_data,
        } => {
            let key = match key.as_deref().map(normalize) {
                Some(key) if Expect::Block128.accepts(&key) => key,
                flag => {
                    if flag.is_some() {
                        println!("Invalid key");
                    }
                    prompter.ask_or_generate(
                        "\nEnter a 128-bit key or press enter to generate a random key: ",
                        "Invalid key",
                    )?
                }
            };
            let nonce = random_hex128();
            let plaintext = flag_or_ask(
                prompter,
                plaintext.as_deref(),
                "Enter the plaintext (in hexadecimal) to encrypt: ",
                Expect::Hex,
                "Invalid format",
            )?;
            let associated_data = flag_or_ask(
                prompter,
                associated_data.as_deref(),
                "Enter any associated data (in hexadecimal) or press enter to skip: ",
                Expect::OptionalHex,
                "Invalid format",
            )?;

            display_info(&key, &nonce, &associated_data, &[("Plaintext", plaintext.as_str())]);

            let sealed = encrypt(
                &Nonce::from_hex(&nonce)?,
                &Key::from_hex(&key)?,
                &plaintext,
                &associated_data,
            )?;
            println!("\nCiphertext:\n0x{}\n", sealed.ciphertext);
            println!("Tag:\n0x{}\n", sealed.tag);
            Ok(true)
        }
        Mode::Decrypt {
            key,
            nonce,
            ciphertext,
            associated_data,
            tag,
        } => {
            let key = flag_or_ask(
                prompter,
                key.as_deref(),
                "Enter the 128-bit key: ",
                Expect::Block128,
                "Invalid key",
            )?;
            let nonce = flag_or_ask(
                prompter,
                nonce.as_deref(),
                "Enter the nonce used: ",
                Expect::Block128,
                "Invalid nonce",
            )?;
            let ciphertext = flag_or_ask(
                prompter,
                ciphertext.as_deref(),
                "Enter the ciphertext (in hexadecimal) to decrypt: ",
                Expect::Hex,
                "Invalid format",
            )?;
            let associated_data = flag_or_ask(
                prompter,
                associated_data.as_deref(),
                "Enter any associated data (in hexadecimal) or press enter to skip: ",
                Expect::OptionalHex,
                "Invalid format",
            )?;
            let tag = flag_or_ask(
                prompter,
                tag.as_deref(),
                "Enter the tag: ",
                Expect::Block128,
                "Invalid tag",
            )?;

            display_info(
                &key,
                &nonce,
                &associated_data,
                &[("Ciphertext", ciphertext.as_str()), ("Tag", tag.as_str())],
            );

            match decrypt(
                &Nonce::from_hex(&nonce)?,
                &Key::from_hex(&key)?,
                &ciphertext,
                &associated_data,
                &Tag::from_hex(&tag)?,
            ) {
                Ok(plaintext) => {
                    println!("\n\nPlaintext: {}\n", plaintext);
                    Ok(true)
                }
                Err(Error::AuthenticationFailure) => {
                    println!("Unable to decrypt\n");
                    Ok(false)
                }
                Err(e) => Err(e.into()),
            }
        }
    }
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let args = Args::parse();
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock());

    let result = match args.mode {
        Some(mode) => run(&mut prompter, mode),
        None => ask_mode(&mut prompter)
            .map_err(CliError::from)
            .and_then(|mode| run(&mut prompter, mode)),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
