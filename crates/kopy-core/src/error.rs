//! Error types for kopy-core operations.
//!
//! The crypto taxonomy is closed on purpose: every way a ciphertext blob
//! can be malformed has its own kind, so callers can pattern-match instead
//! of parsing message strings. The CLI layer maps these to user-facing
//! messages.

use thiserror::Error;

/// Result type alias for kopy operations.
pub type Result<T> = std::result::Result<T, KopyError>;

/// Core error type for kopy operations.
#[derive(Debug, Error)]
pub enum KopyError {
    /// A generator was asked for a non-positive number of bytes/characters
    #[error("length must be a positive integer")]
    InvalidLength,

    /// Salt is not exactly 8 bytes
    #[error("salt must be exactly 8 bytes, got {0}")]
    BadSalt(usize),

    /// Cipher body handed to the framer is not a multiple of the block size
    #[error("ciphertext body of {0} bytes is not a multiple of the block size")]
    BadCiphertext(usize),

    /// Buffer length is not a multiple of the block size
    #[error("message of {0} bytes is not sized to the cipher block")]
    MisalignedCiphertext(usize),

    /// Decoded blob does not start with the `Salted__` marker
    #[error("ciphertext is missing the Salted__ marker")]
    BadSaltPadding,

    /// Ciphertext blob is not valid base64
    #[error("ciphertext is not valid base64: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    /// PKCS#7 padding is inconsistent. Covers both corrupted ciphertext
    /// and a wrong passphrase; the two are not distinguishable here.
    #[error("bad padding (corrupted ciphertext or wrong passphrase)")]
    BadPadding,

    /// The OS entropy source failed
    #[error("entropy source failed: {0}")]
    Entropy(#[from] getrandom::Error),

    /// Document does not exist on the server (or has expired)
    #[error("document not found")]
    DocumentNotFound,

    /// Document is encrypted but no passphrase was supplied
    #[error("document is encrypted, but no passphrase was given")]
    PassphraseRequired,

    /// Document declares a security scheme this client does not know
    #[error("document uses unknown encryption scheme: {0:?}")]
    UnknownScheme(String),

    /// Server response was structurally wrong (missing fields, bad
    /// content-type, non-UTF-8 plaintext, ...)
    #[error("malformed document: {0}")]
    InvalidDocument(String),

    /// HTTP transport error
    #[error("request to kopy.io failed: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },
}
