//! kopycat - a command-line client for the kopy.io pastebin.
//!
//! Uploads documents as-is or encrypted client-side with the service's
//! OpenSSL-compatible AES-256-CBC scheme, and fetches them back by share
//! URL or key.

mod cli;
mod commands;
mod input;
mod url;

use std::io::IsTerminal;

use clap::Parser;
use kopy_core::VERSION;

use crate::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Send(args)) => commands::send::handle_send(args),
        Some(Commands::Fetch(args)) => commands::fetch::handle_fetch(args),
        Some(Commands::Passgen(args)) => commands::passgen::handle_passgen(args),
        None => {
            println!("kopycat v{}", VERSION);
            println!("\nQuickstart:");
            println!("  kopycat send notes.txt");
            println!("  echo secret | kopycat send --encrypt --generate 14");
            println!("  kopycat fetch https://kopy.io/<key>#<passphrase>");
            println!("\nRun `kopycat --help` for full usage.");
            Ok(())
        }
    }
}

fn print_error(error: &anyhow::Error) {
    use owo_colors::OwoColorize;

    if std::io::stderr().is_terminal() {
        eprintln!("{} {:#}", "error:".red().bold(), error);
    } else {
        eprintln!("error: {:#}", error);
    }
}
