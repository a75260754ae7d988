//! `kopycat passgen` - generate a random hex passphrase.

use anyhow::{Context, Result};

use crate::cli::PassgenArgs;

pub fn handle_passgen(args: &PassgenArgs) -> Result<()> {
    let passphrase = kopy_core::crypto::generate_password(args.length)
        .context("failed to generate passphrase")?;
    println!("{}", passphrase);
    Ok(())
}
