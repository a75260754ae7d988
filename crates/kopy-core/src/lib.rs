//! kopy-core - client library for the kopy.io pastebin service.
//!
//! Two halves:
//! - [`crypto`]: the OpenSSL-compatible AES-256-CBC codec kopy.io uses
//!   for client-side encryption (`Salted__` framing, MD5-chain key
//!   derivation, PKCS#7 padding).
//! - [`api`]: a blocking REST client for the documents endpoint that
//!   encrypts on upload and decrypts on retrieval.

pub mod api;
pub mod crypto;
pub mod error;

pub use api::{Client, Config, Document, Security};
pub use error::{KopyError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
