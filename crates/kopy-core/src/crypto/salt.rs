//! Fixed-size salt type.
//!
//! Modelling the salt as `[u8; 8]` moves the length check to construction,
//! so the KDF and framer can take a `&Salt` and skip runtime validation.

use super::SALT_LEN;
use crate::error::{KopyError, Result};

/// An 8-byte key-derivation salt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Salt([u8; SALT_LEN]);

impl Salt {
    /// Draw a fresh random salt from the OS CSPRNG.
    pub fn generate() -> Result<Self> {
        let mut bytes = [0u8; SALT_LEN];
        getrandom::getrandom(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Wrap exactly 8 bytes as a salt (for reproducible test vectors).
    pub fn from_bytes(bytes: [u8; SALT_LEN]) -> Self {
        Self(bytes)
    }

    /// View the raw salt bytes.
    pub fn as_bytes(&self) -> &[u8; SALT_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Salt {
    type Error = KopyError;

    fn try_from(slice: &[u8]) -> Result<Self> {
        let bytes: [u8; SALT_LEN] = slice
            .try_into()
            .map_err(|_| KopyError::BadSalt(slice.len()))?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Salt {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
