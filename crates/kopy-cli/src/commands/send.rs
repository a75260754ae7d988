//! `kopycat send` - upload a document.

use anyhow::{Context, Result};
use kopy_core::Client;

use crate::cli::SendArgs;
use crate::input;
use crate::url;

pub fn handle_send(args: &SendArgs) -> Result<()> {
    let document = input::read_document(args.file.as_deref())?;
    let passphrase = input::resolve_send_passphrase(args)?;

    let client = Client::new(&args.server.client_config())?;
    let key = client
        .create_document(&document, passphrase.as_deref(), args.keep)
        .context("failed to upload document")?;

    println!(
        "{}",
        url::format_share_url(&args.server.url, &key, shared_fragment(args, passphrase.as_deref()))
    );
    Ok(())
}

/// The passphrase to embed in the printed share URL, if any.
///
/// Anyone holding the full URL can decrypt, so the fragment stays empty
/// unless the user opted in with `--sharable`. A generated passphrase is
/// always embedded, since the URL is the only place the user sees it.
fn shared_fragment<'a>(args: &SendArgs, passphrase: Option<&'a str>) -> Option<&'a str> {
    if args.sharable || args.generate.is_some() {
        passphrase
    } else {
        None
    }
}
