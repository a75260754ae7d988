//! Legacy password-based key derivation.
//!
//! This is OpenSSL's historical `EVP_BytesToKey` with MD5 and an
//! iteration count of 1: hash the passphrase and salt, then keep hashing
//! the previous digest plus passphrase plus salt until 48 bytes have
//! accumulated. Key = first 32, IV = next 16.
//!
//! There is deliberately no stretching here. The scheme is weak by modern
//! standards but frozen by the ciphertext format; swapping in PBKDF2 or
//! Argon2 would make every existing paste undecryptable. Treat this
//! module as one fixed cipher suite that a future format revision can
//! replace wholesale without touching padding or framing.

use md5::{Digest, Md5};
use zeroize::ZeroizeOnDrop;

use super::{Salt, IV_LEN, KEY_LEN};

/// Key and IV derived from a passphrase and salt.
///
/// Zeroized on drop; `Debug` never prints the material.
#[derive(Clone, ZeroizeOnDrop)]
pub struct KeyIv {
    key: [u8; KEY_LEN],
    iv: [u8; IV_LEN],
}

impl KeyIv {
    /// The 32-byte AES-256 key.
    pub fn key(&self) -> &[u8; KEY_LEN] {
        &self.key
    }

    /// The 16-byte CBC initialization vector.
    pub fn iv(&self) -> &[u8; IV_LEN] {
        &self.iv
    }
}

impl std::fmt::Debug for KeyIv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyIv")
            .field("key", &"[REDACTED]")
            .field("iv", &"[REDACTED]")
            .finish()
    }
}

/// Derive the AES-256-CBC key and IV from a passphrase and salt.
///
/// Deterministic: the same passphrase and salt always produce the same
/// pair. The salt type guarantees the 8-byte precondition.
pub fn derive_key_iv(passphrase: &[u8], salt: &Salt) -> KeyIv {
    let mut accumulated = Vec::with_capacity(KEY_LEN + IV_LEN + 16);
    let mut previous: Option<[u8; 16]> = None;

    while accumulated.len() < KEY_LEN + IV_LEN {
        let mut hasher = Md5::new();
        if let Some(block) = previous {
            hasher.update(block);
        }
        hasher.update(passphrase);
        hasher.update(salt.as_bytes());

        let digest: [u8; 16] = hasher.finalize().into();
        accumulated.extend_from_slice(&digest);
        previous = Some(digest);
    }

    let mut key = [0u8; KEY_LEN];
    let mut iv = [0u8; IV_LEN];
    key.copy_from_slice(&accumulated[..KEY_LEN]);
    iv.copy_from_slice(&accumulated[KEY_LEN..KEY_LEN + IV_LEN]);

    KeyIv { key, iv }
}
