//! Share-URL helpers.
//!
//! A share URL is `https://<host>/<key>#<passphrase>`. The fragment never
//! reaches the server, which is why kopy.io's web client can decrypt in
//! the browser; we reuse it to carry the passphrase between `send` and
//! `fetch`.

use anyhow::{bail, Result};

/// Strip a leading `http://` or `https://`.
pub fn chop_protocol(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Split a share URL into its document key and optional passphrase.
pub fn parse_share_url(url: &str) -> Result<(String, Option<String>)> {
    let chopped = chop_protocol(url);
    let (location, fragment) = match chopped.split_once('#') {
        Some((location, fragment)) => (
            location,
            (!fragment.is_empty()).then(|| fragment.to_string()),
        ),
        None => (chopped, None),
    };

    // The key is the last path segment; services may nest it under a
    // longer path such as kopy.io/documents/<key>.
    let Some((_, key)) = location.rsplit_once('/') else {
        bail!("'{}' has no document key (expected host/<key>)", url);
    };
    if key.is_empty() {
        bail!("'{}' has no document key (expected host/<key>)", url);
    }

    Ok((key.to_string(), fragment))
}

/// Format a share URL for a document key.
///
/// Always ends with a fragment separator; when a passphrase is present it
/// rides in the fragment so the web client can decrypt.
pub fn format_share_url(base_url: &str, key: &str, passphrase: Option<&str>) -> String {
    format!(
        "{}/{}#{}",
        base_url.trim_end_matches('/'),
        key,
        passphrase.unwrap_or("")
    )
}

/// Whether `fetch` input should be parsed as a URL rather than a bare key.
pub fn looks_like_url(input: &str) -> bool {
    input.contains('/') || input.contains('#')
}
