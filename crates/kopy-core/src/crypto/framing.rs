//! On-wire framing of the ciphertext blob.
//!
//! Raw layout is `"Salted__" ++ salt(8) ++ body(n*16)`, so the marker
//! and the salt together fill exactly one block. The whole thing is
//! base64-encoded (standard alphabet, no line wrapping) for transport.
//! This layout is OpenSSL's and is not negotiable: it is what lets a
//! kopy.io paste decrypt under `openssl enc -d -aes-256-cbc`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::{Salt, BLOCK_SIZE, SALT_LEN, SALT_MARKER};
use crate::error::{KopyError, Result};

/// Frame a salt and cipher body into the base64 text form.
///
/// # Errors
///
/// Returns `KopyError::BadCiphertext` when the body is not a whole number
/// of blocks.
pub fn format_ciphertext(salt: &Salt, cipher_bytes: &[u8]) -> Result<String> {
    if cipher_bytes.len() % BLOCK_SIZE != 0 {
        return Err(KopyError::BadCiphertext(cipher_bytes.len()));
    }

    let mut raw = Vec::with_capacity(SALT_MARKER.len() + SALT_LEN + cipher_bytes.len());
    raw.extend_from_slice(SALT_MARKER);
    raw.extend_from_slice(salt.as_bytes());
    raw.extend_from_slice(cipher_bytes);

    Ok(STANDARD.encode(raw))
}

/// Split a base64 blob back into its salt and cipher body.
///
/// # Errors
///
/// - `KopyError::InvalidEncoding` when the blob is not valid base64.
/// - `KopyError::BadSaltPadding` when the decoded bytes do not start with
///   the `Salted__` marker.
/// - `KopyError::MisalignedCiphertext` when the decoded length is not a
///   multiple of the block size.
pub fn parse_ciphertext(blob: &str) -> Result<(Salt, Vec<u8>)> {
    let raw = STANDARD.decode(blob)?;

    if !raw.starts_with(SALT_MARKER) {
        return Err(KopyError::BadSaltPadding);
    }
    if raw.len() % BLOCK_SIZE != 0 {
        return Err(KopyError::MisalignedCiphertext(raw.len()));
    }

    let salt = Salt::try_from(&raw[SALT_MARKER.len()..BLOCK_SIZE])?;
    Ok((salt, raw[BLOCK_SIZE..].to_vec()))
}
