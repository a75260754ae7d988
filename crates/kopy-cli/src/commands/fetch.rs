//! `kopycat fetch` - download a document.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use kopy_core::{Client, KopyError};

use crate::cli::FetchArgs;
use crate::input;
use crate::url;

pub fn handle_fetch(args: &FetchArgs) -> Result<()> {
    let (key, fragment) = if url::looks_like_url(&args.document) {
        url::parse_share_url(&args.document)?
    } else {
        (args.document.clone(), None)
    };

    // A passphrase embedded in the URL wins over the flag/env.
    let passphrase =
        input::strip_passphrase(fragment.or_else(|| args.passphrase.clone()), args.strip);

    let client = Client::new(&args.server.client_config())?;
    let document = match client.retrieve_document(&key, passphrase.as_deref()) {
        Err(KopyError::PassphraseRequired) => {
            let passphrase = input::prompt_passphrase(false)?;
            client.retrieve_document(&key, Some(&passphrase))
        }
        other => other,
    }
    .with_context(|| format!("failed to fetch document '{}'", key))?;

    match &args.output {
        Some(path) => fs::write(path, &document.data)
            .with_context(|| format!("failed to write '{}'", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.data.as_bytes())?;
            // Keep shell prompts tidy without altering the document itself.
            if !document.data.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }

    Ok(())
}
