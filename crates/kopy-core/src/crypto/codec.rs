//! The AES-256-CBC codec: composition of KDF, padding, framing, and the
//! block cipher.

use aes::Aes256;
use cbc::cipher::{block_padding::NoPadding, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use super::{derive_key_iv, framing, padding, Salt};
use crate::error::{KopyError, Result};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Encrypt a document with a fresh random salt.
///
/// Returns the base64 `Salted__` blob that kopy.io (and
/// `openssl enc -d -aes-256-cbc -pass ...`) can decrypt.
pub fn encrypt(plaintext: &[u8], passphrase: &[u8]) -> Result<String> {
    let salt = Salt::generate()?;
    encrypt_with_salt(plaintext, passphrase, &salt)
}

/// Encrypt a document with a caller-supplied salt.
///
/// Exists for reproducible test vectors; real callers should let
/// [`encrypt`] draw a fresh salt so keys are never reused.
pub fn encrypt_with_salt(plaintext: &[u8], passphrase: &[u8], salt: &Salt) -> Result<String> {
    let key_iv = derive_key_iv(passphrase, salt);
    let padded = padding::pad(plaintext);

    // Padding is ours; the cipher only sees whole blocks.
    let cipher_bytes = Aes256CbcEnc::new(key_iv.key().into(), key_iv.iv().into())
        .encrypt_padded_vec_mut::<NoPadding>(&padded);

    framing::format_ciphertext(salt, &cipher_bytes)
}

/// Decrypt a base64 `Salted__` blob back to the document bytes.
///
/// A wrong passphrase almost always surfaces as `KopyError::BadPadding`,
/// exactly like corrupted ciphertext; the two cases cannot be told apart
/// at this layer.
pub fn decrypt(blob: &str, passphrase: &[u8]) -> Result<Vec<u8>> {
    let (salt, cipher_bytes) = framing::parse_ciphertext(blob)?;
    let key_iv = derive_key_iv(passphrase, &salt);

    let body_len = cipher_bytes.len();
    let padded = Aes256CbcDec::new(key_iv.key().into(), key_iv.iv().into())
        .decrypt_padded_vec_mut::<NoPadding>(&cipher_bytes)
        .map_err(|_| KopyError::MisalignedCiphertext(body_len))?;

    padding::unpad(&padded)
}
