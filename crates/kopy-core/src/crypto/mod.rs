//! OpenSSL-compatible symmetric encryption for kopy.io documents.
//!
//! kopy.io's web client encrypts pastes with the classic
//! `openssl enc -aes-256-cbc` construction: an 8-byte random salt, a key
//! and IV derived from the passphrase with a single-pass MD5 chain
//! (`EVP_BytesToKey`, count 1), PKCS#7 padding, and a base64-encoded
//! `Salted__` header. For two-way interoperability we reproduce that
//! format byte for byte.
//!
//! ## Security Model
//!
//! This is a compatibility format, not a modern one:
//! - The KDF performs no stretching (single MD5 pass per block). Do not
//!   swap in a stronger KDF; it would break interop with the service.
//! - Confidentiality only. There is no MAC, so tampering surfaces (at
//!   best) as a padding error on decrypt.
//!
//! Passphrases generated by [`generate_password`] are low-assurance
//! secrets for short-lived pastes, not long-term keys.

pub mod codec;
pub mod framing;
pub mod kdf;
pub mod padding;
pub mod random;
pub mod salt;

pub use codec::{decrypt, encrypt, encrypt_with_salt};
pub use kdf::{derive_key_iv, KeyIv};
pub use random::{generate_password, random_bytes};
pub use salt::Salt;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Derived key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// Derived IV length in bytes.
pub const IV_LEN: usize = 16;

/// Salt length in bytes. Together with the marker it fills exactly one block.
pub const SALT_LEN: usize = 8;

/// Header marker preceding the salt in the framed ciphertext.
pub const SALT_MARKER: &[u8; 8] = b"Salted__";

/// Entropy drawn per MD5 pass when generating a passphrase.
pub const PASSWORD_SEED_BYTES: usize = 100;
