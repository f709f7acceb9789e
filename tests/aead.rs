use ascon_hex::{decrypt, encrypt, Error, Key, Nonce, Tag};
use hex_literal::hex;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const VECTOR: &str = "000102030405060708090a0b0c0d0e0f";
const VECTOR_CIPHERTEXT: &str = "1ee34125fdba17443d01da8a0eefb045";
const VECTOR_TAG: &str = "4281d1d3b962418d2e1c8a6d14f3e8a2";

fn key() -> Key {
    Key::from_bytes(&hex!("000102030405060708090a0b0c0d0e0f"))
}

fn nonce() -> Nonce {
    Nonce::from_bytes(&hex!("000102030405060708090a0b0c0d0e0f"))
}

fn random_hex(rng: &mut SmallRng, len: usize) -> String {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";
    (0..len)
        .map(|_| DIGITS[rng.random_range(0..16)] as char)
        .collect()
}

fn flip_digit(s: &str, index: usize) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    chars[index] = if chars[index] == '0' { '1' } else { '0' };
    chars.into_iter().collect()
}

#[test]
fn regression_vector() {
    let sealed = encrypt(&nonce(), &key(), VECTOR, VECTOR).unwrap();
    assert_eq!(sealed.ciphertext, VECTOR_CIPHERTEXT);
    assert_eq!(sealed.tag.to_string(), VECTOR_TAG);

    let tag: Tag = VECTOR_TAG.parse().unwrap();
    let plaintext = decrypt(&nonce(), &key(), VECTOR_CIPHERTEXT, VECTOR, &tag).unwrap();
    assert_eq!(plaintext, VECTOR);
}

#[test]
fn regression_vector_uppercase_input() {
    let upper = VECTOR.to_uppercase();
    let key = Key::from_hex(&upper).unwrap();
    let nonce = Nonce::from_hex(&upper).unwrap();
    let sealed = encrypt(&nonce, &key, &upper, &upper).unwrap();
    assert_eq!(sealed.ciphertext, VECTOR_CIPHERTEXT);
    assert_eq!(sealed.tag.to_string(), VECTOR_TAG);
}

#[test]
fn empty_plaintext_and_associated_data() {
    let sealed = encrypt(&nonce(), &key(), "", "").unwrap();
    assert_eq!(sealed.ciphertext, "");
    assert_eq!(sealed.tag.to_string(), "e355159f292911f794cb1432a0103a8a");
    assert_eq!(decrypt(&nonce(), &key(), "", "", &sealed.tag).unwrap(), "");
}

#[test]
fn partial_block_vectors() {
    let cases = [
        ("abc", "", "174", "d81d2fcef4577d863784fd943cdc283e"),
        ("0", "1", "a", "91e527a26dbc8d3da7b3a7a48e6516d3"),
        (
            "0123456789abcdef01234",
            "00112233445566778899",
            "463b6e2a6fa21683ac6ca",
            "d89d42ca0525658d1b0b8f941ebb0b22",
        ),
        (
            "0123456789abcdef0123456789abcdef",
            "",
            "bda04ad97a0aa8f459c8fe6165643e31",
            "4ef43a301414aff3854e4cc512c7f617",
        ),
    ];
    for (plaintext, associated_data, ciphertext, tag) in cases {
        let sealed = encrypt(&nonce(), &key(), plaintext, associated_data).unwrap();
        assert_eq!(sealed.ciphertext, ciphertext);
        assert_eq!(sealed.tag.to_string(), tag);
        assert_eq!(
            decrypt(&nonce(), &key(), ciphertext, associated_data, &sealed.tag).unwrap(),
            plaintext
        );
    }
}

#[test]
fn round_trip_and_length() {
    let mut rng = SmallRng::seed_from_u64(1);
    for len in 0..70 {
        let key = Key::from_hex(&random_hex(&mut rng, 32)).unwrap();
        let nonce = Nonce::from_hex(&random_hex(&mut rng, 32)).unwrap();
        let plaintext = random_hex(&mut rng, len);
        let ad_len = rng.random_range(0..40);
        let associated_data = random_hex(&mut rng, ad_len);

        let sealed = encrypt(&nonce, &key, &plaintext, &associated_data).unwrap();
        assert_eq!(sealed.ciphertext.len(), plaintext.len());

        let recovered =
            decrypt(&nonce, &key, &sealed.ciphertext, &associated_data, &sealed.tag).unwrap();
        assert_eq!(recovered, plaintext);
    }
}

#[test]
fn deterministic() {
    let a = encrypt(&nonce(), &key(), "0123456789", "ab").unwrap();
    let b = encrypt(&nonce(), &key(), "0123456789", "ab").unwrap();
    assert_eq!(a, b);
}

#[test]
fn associated_data_changes_output() {
    let without = encrypt(&nonce(), &key(), VECTOR, "").unwrap();
    for associated_data in ["0", "00", "8", VECTOR] {
        let with = encrypt(&nonce(), &key(), VECTOR, associated_data).unwrap();
        assert_ne!(with.ciphertext, without.ciphertext);
        assert_ne!(with.tag, without.tag);
    }
}

#[test]
fn tampering_is_detected() {
    let plaintext = "0123456789abcdef0123";
    let associated_data = "a0a1a2a3";
    let sealed = encrypt(&nonce(), &key(), plaintext, associated_data).unwrap();
    let tag = sealed.tag.to_string();

    for i in 0..sealed.ciphertext.len() {
        let forged = flip_digit(&sealed.ciphertext, i);
        assert_eq!(
            decrypt(&nonce(), &key(), &forged, associated_data, &sealed.tag),
            Err(Error::AuthenticationFailure),
            "ciphertext digit {}",
            i
        );
    }

    for i in 0..tag.len() {
        let forged: Tag = flip_digit(&tag, i).parse().unwrap();
        assert_eq!(
            decrypt(&nonce(), &key(), &sealed.ciphertext, associated_data, &forged),
            Err(Error::AuthenticationFailure),
            "tag digit {}",
            i
        );
    }

    for i in 0..associated_data.len() {
        let forged = flip_digit(associated_data, i);
        assert_eq!(
            decrypt(&nonce(), &key(), &sealed.ciphertext, &forged, &sealed.tag),
            Err(Error::AuthenticationFailure),
            "associated data digit {}",
            i
        );
    }

    for i in 0..32 {
        let other_nonce: Nonce = flip_digit(VECTOR, i).parse().unwrap();
        let other_key: Key = flip_digit(VECTOR, i).parse().unwrap();
        assert_eq!(
            decrypt(&other_nonce, &key(), &sealed.ciphertext, associated_data, &sealed.tag),
            Err(Error::AuthenticationFailure)
        );
        assert_eq!(
            decrypt(&nonce(), &other_key, &sealed.ciphertext, associated_data, &sealed.tag),
            Err(Error::AuthenticationFailure)
        );
    }
}

#[test]
fn dropping_associated_data_is_detected() {
    let sealed = encrypt(&nonce(), &key(), VECTOR, "00").unwrap();
    assert_eq!(
        decrypt(&nonce(), &key(), &sealed.ciphertext, "", &sealed.tag),
        Err(Error::AuthenticationFailure)
    );
}

#[test]
fn malformed_input() {
    assert_eq!(
        Key::from_hex("0001"),
        Err(Error::InvalidLength {
            what: "key",
            expected: 32,
            actual: 4
        })
    );
    assert!(matches!(
        decrypt(&nonce(), &key(), "12g", "", &"00".repeat(16).parse().unwrap()),
        Err(Error::InvalidEncoding {
            position: 2,
            character: 'g'
        })
    ));
}
