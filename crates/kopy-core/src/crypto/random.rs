//! OS-backed randomness and passphrase generation.

use md5::{Digest, Md5};

use super::PASSWORD_SEED_BYTES;
use crate::error::{KopyError, Result};

/// Draw `len` bytes from the operating system's CSPRNG.
///
/// # Errors
///
/// Returns `KopyError::InvalidLength` when `len` is zero, and
/// `KopyError::Entropy` if the OS entropy source fails.
pub fn random_bytes(len: usize) -> Result<Vec<u8>> {
    if len == 0 {
        return Err(KopyError::InvalidLength);
    }

    let mut buf = vec![0u8; len];
    getrandom::getrandom(&mut buf)?;
    Ok(buf)
}

/// Generate a random passphrase of `len` hexadecimal characters.
///
/// Each round hashes 100 fresh random bytes with MD5 and appends the hex
/// digest, so entropy per character is bounded by the digest, not by the
/// raw draw. Suitable for short-lived pastes only.
///
/// # Errors
///
/// Returns `KopyError::InvalidLength` when `len` is zero.
pub fn generate_password(len: usize) -> Result<String> {
    if len == 0 {
        return Err(KopyError::InvalidLength);
    }

    use std::fmt::Write as _;

    let mut output = String::new();
    while output.len() < len {
        let seed = random_bytes(PASSWORD_SEED_BYTES)?;
        for byte in Md5::digest(&seed) {
            let _ = write!(output, "{:02x}", byte);
        }
    }
    output.truncate(len);
    Ok(output)
}
