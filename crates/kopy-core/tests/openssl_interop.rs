//! End-to-end interoperability checks against ciphertext produced by the
//! reference OpenSSL-style tooling.

use kopy_core::crypto::{decrypt, encrypt, encrypt_with_salt, Salt};
use kopy_core::KopyError;

const PASSPHRASE: &[u8] = b"9ACJQzDPFiVJXC";
const PLAINTEXT: &[u8] = b"attack at dawn";
const SALT: [u8; 8] = [0xd7, 0x9c, 0x31, 0x9a, 0x10, 0x00, 0x9a, 0xa1];
const BLOB: &str = "U2FsdGVkX1/XnDGaEACaoTEhm7YsBicuJNgLrFSMKe0=";

#[test]
fn encrypts_to_the_reference_blob() {
    let blob = encrypt_with_salt(PLAINTEXT, PASSPHRASE, &Salt::from_bytes(SALT))
        .expect("encryption should succeed");
    assert_eq!(blob, BLOB);
}

#[test]
fn decrypts_the_reference_blob() {
    let plaintext = decrypt(BLOB, PASSPHRASE).expect("decryption should succeed");
    assert_eq!(plaintext, PLAINTEXT);
}

#[test]
fn round_trips_arbitrary_documents() {
    let cases: &[&[u8]] = &[
        b"",
        b"a",
        b"exactly one block!",
        &[0u8; 16],
        &[0xffu8; 4096],
        "snowman \u{2603} and friends".as_bytes(),
    ];

    for plaintext in cases {
        let blob = encrypt(plaintext, b"round-trip passphrase").expect("encrypt");
        let decrypted = decrypt(&blob, b"round-trip passphrase").expect("decrypt");
        assert_eq!(&decrypted, plaintext);
    }
}

#[test]
fn produced_blobs_are_framed_and_block_aligned() {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let blob = encrypt(b"some paste", b"pw").expect("encrypt");
    let raw = STANDARD.decode(&blob).expect("blob is base64");

    assert!(raw.starts_with(b"Salted__"));
    assert_eq!(raw.len() % 16, 0);
    // Marker + salt + at least one block of padded plaintext.
    assert!(raw.len() >= 32);
}

#[test]
fn truncated_blob_is_rejected() {
    // Drop the final base64 quantum (one cipher block) and re-pad: the
    // marker survives but the body is no longer the original.
    let tampered = &BLOB[..BLOB.len() - 24];
    let result = decrypt(tampered, PASSPHRASE);
    assert!(matches!(
        result,
        Err(KopyError::InvalidEncoding(_))
            | Err(KopyError::MisalignedCiphertext(_))
            | Err(KopyError::BadPadding)
    ));
}
