//! PKCS#7 padding over 16-byte blocks.

use super::BLOCK_SIZE;
use crate::error::{KopyError, Result};

/// Pad a message to a multiple of the block size.
///
/// Appends `p` copies of the byte `p`, where `p` is in `1..=16`. An
/// already-aligned message still receives a full block of padding, so the
/// padded output is never empty and `unpad` can always trust the final
/// byte.
///
/// # Examples
///
/// ```
/// use kopy_core::crypto::padding::pad;
///
/// assert_eq!(pad(b"AAAAAAAAAAAAAAA"), b"AAAAAAAAAAAAAAA\x01");
/// assert_eq!(pad(b""), vec![0x10; 16]);
/// ```
pub fn pad(message: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - (message.len() % BLOCK_SIZE);
    let mut padded = Vec::with_capacity(message.len() + pad_len);
    padded.extend_from_slice(message);
    padded.resize(message.len() + pad_len, pad_len as u8);
    padded
}

/// Strip and validate PKCS#7 padding.
///
/// Every one of the last `p` bytes must equal `p`. Validation is strict
/// but not constant-time; on a decrypt path this leaks where a mismatch
/// sits, which is acceptable for a local CLI but would matter for a
/// padding-oracle-exposed service.
///
/// # Errors
///
/// - `KopyError::MisalignedCiphertext` when the input length is not a
///   multiple of the block size.
/// - `KopyError::BadPadding` when the final byte is 0 or greater than the
///   block size, when the input is empty, or when any padding byte
///   disagrees with the final byte.
pub fn unpad(message: &[u8]) -> Result<Vec<u8>> {
    if message.len() % BLOCK_SIZE != 0 {
        return Err(KopyError::MisalignedCiphertext(message.len()));
    }

    // A well-formed padded message is never empty, but adversarial
    // decrypt output can be anything.
    let Some(&last) = message.last() else {
        return Err(KopyError::BadPadding);
    };

    let pad_len = last as usize;
    if pad_len == 0 || pad_len > BLOCK_SIZE {
        return Err(KopyError::BadPadding);
    }

    let (body, padding) = message.split_at(message.len() - pad_len);
    if padding.iter().any(|&b| b != last) {
        return Err(KopyError::BadPadding);
    }

    Ok(body.to_vec())
}
