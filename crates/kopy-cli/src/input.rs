//! Document and passphrase input helpers.

use std::fs;
use std::io::{IsTerminal, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use dialoguer::{theme::ColorfulTheme, Password};

use crate::cli::SendArgs;

/// Read the document body from a file, or from stdin when no file is given.
pub fn read_document(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read document from stdin")?;
            Ok(buf)
        }
    }
}

/// Strip surrounding whitespace from a passphrase when asked to.
///
/// Shells and `echo` love to append a trailing newline; with `--strip`
/// that noise never reaches key derivation.
pub fn strip_passphrase(passphrase: Option<String>, strip: bool) -> Option<String> {
    match passphrase {
        Some(p) if strip => Some(p.trim().to_string()),
        other => other,
    }
}

/// Work out the passphrase for `send`, if any.
///
/// Precedence: explicit flag/env, passphrase file, generated passphrase,
/// then an interactive prompt when `--encrypt` was given bare.
pub fn resolve_send_passphrase(args: &SendArgs) -> Result<Option<String>> {
    if let Some(passphrase) = &args.passphrase {
        return Ok(strip_passphrase(Some(passphrase.clone()), args.strip));
    }

    if let Some(path) = &args.passphrase_file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read passphrase file '{}'", path.display()))?;
        let passphrase = contents.lines().next().unwrap_or("").to_string();
        if passphrase.is_empty() {
            bail!("passphrase file '{}' is empty", path.display());
        }
        return Ok(strip_passphrase(Some(passphrase), args.strip));
    }

    if let Some(length) = args.generate {
        let passphrase =
            kopy_core::crypto::generate_password(length).context("failed to generate passphrase")?;
        return Ok(Some(passphrase));
    }

    if args.encrypt {
        return Ok(Some(prompt_passphrase(true)?));
    }

    Ok(None)
}

/// Prompt for a passphrase on the terminal.
pub fn prompt_passphrase(confirm: bool) -> Result<String> {
    if !std::io::stdin().is_terminal() {
        bail!("a passphrase is required; pass --passphrase or set KOPY_PASSPHRASE");
    }

    let theme = ColorfulTheme::default();
    let mut prompt = Password::with_theme(&theme).with_prompt("Passphrase");
    if confirm {
        prompt = prompt.with_confirmation("Confirm passphrase", "Passphrases do not match");
    }
    Ok(prompt.interact()?)
}
