//! REST client for the kopy.io documents API.
//!
//! Uploads are form-encoded (`data`, `security`, `keep`); responses are
//! JSON. A document is tagged with a two-valued security scheme:
//! `"default"` for plaintext, `"encrypted"` for blobs produced by
//! [`crate::crypto`]. Encryption on create and decryption on retrieve
//! happen here so callers only ever see plaintext.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::crypto;
use crate::error::{KopyError, Result};

/// Public endpoint of the kopy.io service.
pub const DEFAULT_BASE_URL: &str = "https://kopy.io/";

/// Default document lifetime in seconds.
pub const DEFAULT_KEEP_SECS: u64 = 600;

const API_ENDPOINT: &str = "documents";

/// The 404 body the API uses for missing or expired documents.
const DOC_NOT_FOUND: &str = "Document not found.";

/// How a document is protected on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Security {
    /// Stored as plaintext.
    Default,
    /// Stored as an OpenSSL-compatible AES-256-CBC blob.
    Encrypted,
}

impl Security {
    fn as_str(self) -> &'static str {
        match self {
            Security::Default => "default",
            Security::Encrypted => "encrypted",
        }
    }

    /// Interpret the `security` field of an API response. A missing field
    /// means plaintext; anything other than the two known schemes is
    /// rejected rather than guessed at.
    fn from_tag(tag: Option<&str>) -> Result<Self> {
        match tag {
            None | Some("default") => Ok(Security::Default),
            Some("encrypted") => Ok(Security::Encrypted),
            Some(other) => Err(KopyError::UnknownScheme(other.to_string())),
        }
    }
}

/// A retrieved document with its data already decrypted.
#[derive(Debug, Clone)]
pub struct Document {
    pub data: String,
    pub security: Security,
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the service.
    pub base_url: String,
    /// kopy.io has served an invalid TLS certificate for years, so the
    /// original client skipped verification. Kept as an explicit, visible
    /// toggle with that default.
    pub accept_invalid_certs: bool,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            accept_invalid_certs: true,
            timeout: Duration::from_secs(30),
        }
    }
}

// --- Wire types ---

#[derive(Serialize)]
struct NewDocument<'a> {
    data: &'a str,
    security: &'a str,
    keep: u64,
}

#[derive(Deserialize)]
struct CreateResponse {
    key: Option<String>,
}

#[derive(Deserialize)]
struct DocumentResponse {
    data: Option<String>,
    security: Option<String>,
    message: Option<String>,
}

/// Blocking client for the kopy.io documents API.
pub struct Client {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl Client {
    /// Build a client from a [`Config`].
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn documents_url(&self) -> String {
        format!("{}/{}", self.base_url, API_ENDPOINT)
    }

    /// Upload a document. When a passphrase is given the data is encrypted
    /// client-side and tagged `security=encrypted`.
    ///
    /// Returns the new document's key.
    pub fn create_document(
        &self,
        data: &str,
        passphrase: Option<&str>,
        keep_secs: u64,
    ) -> Result<String> {
        match passphrase {
            Some(pass) => {
                let blob = crypto::encrypt(data.as_bytes(), pass.as_bytes())?;
                self.post_document(&blob, Security::Encrypted, keep_secs)
            }
            None => self.post_document(data, Security::Default, keep_secs),
        }
    }

    /// Fetch a document by key, decrypting it when it is encrypted.
    ///
    /// # Errors
    ///
    /// `DocumentNotFound` for missing/expired keys, `PassphraseRequired`
    /// when the document is encrypted and no passphrase was supplied,
    /// `UnknownScheme` for a security tag this client does not know, and
    /// the crypto taxonomy (typically `BadPadding` for a wrong
    /// passphrase) from decryption.
    pub fn retrieve_document(&self, id: &str, passphrase: Option<&str>) -> Result<Document> {
        let raw = self.get_document(id)?;

        if raw.message.as_deref() == Some(DOC_NOT_FOUND) {
            return Err(KopyError::DocumentNotFound);
        }

        let data = raw
            .data
            .ok_or_else(|| KopyError::InvalidDocument("document contained no data".to_string()))?;
        let security = Security::from_tag(raw.security.as_deref())?;

        let data = match security {
            Security::Default => data,
            Security::Encrypted => {
                let pass = passphrase.ok_or(KopyError::PassphraseRequired)?;
                let plaintext = crypto::decrypt(&data, pass.as_bytes())?;
                String::from_utf8(plaintext).map_err(|_| {
                    KopyError::InvalidDocument("decrypted document is not valid UTF-8".to_string())
                })?
            }
        };

        Ok(Document { data, security })
    }

    fn post_document(&self, data: &str, security: Security, keep_secs: u64) -> Result<String> {
        let payload = NewDocument {
            data,
            security: security.as_str(),
            keep: keep_secs,
        };

        let response = self
            .http
            .post(self.documents_url())
            .form(&payload)
            .send()?
            .error_for_status()?;

        let parsed: CreateResponse = response.json()?;
        parsed.key.ok_or_else(|| {
            KopyError::InvalidDocument("create response carried no document key".to_string())
        })
    }

    fn get_document(&self, id: &str) -> Result<DocumentResponse> {
        let response = self
            .http
            .get(format!("{}/{}", self.documents_url(), id))
            .send()?;

        let status = response.status();
        if !matches!(status, StatusCode::OK | StatusCode::NOT_FOUND) {
            return Err(KopyError::InvalidDocument(format!(
                "unexpected status {}",
                status
            )));
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("application/json"))
            .unwrap_or(false);
        if !is_json {
            return Err(KopyError::InvalidDocument(
                "response is not application/json".to_string(),
            ));
        }

        Ok(response.json()?)
    }
}
