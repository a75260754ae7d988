//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use kopy_core::api::{DEFAULT_BASE_URL, DEFAULT_KEEP_SECS};

#[derive(Parser)]
#[command(
    name = "kopycat",
    version,
    about = "Share pastes on kopy.io, optionally encrypted client-side"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a document and print its share URL
    Send(SendArgs),
    /// Download a document by share URL or key and print it
    Fetch(FetchArgs),
    /// Generate a random hexadecimal passphrase
    Passgen(PassgenArgs),
}

#[derive(Args)]
pub struct SendArgs {
    /// File to upload; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Encrypt the document before uploading (prompts for a passphrase
    /// unless one is supplied another way)
    #[arg(short, long)]
    pub encrypt: bool,

    /// Passphrase for encryption (implies --encrypt)
    #[arg(short, long, env = "KOPY_PASSPHRASE", hide_env_values = true)]
    pub passphrase: Option<String>,

    /// Read the passphrase from the first line of a file (implies --encrypt)
    #[arg(long, value_name = "FILE", conflicts_with = "passphrase")]
    pub passphrase_file: Option<PathBuf>,

    /// Generate a random hex passphrase of this length and use it
    /// (implies --encrypt; the passphrase ends up in the share URL)
    #[arg(
        short,
        long,
        value_name = "LENGTH",
        conflicts_with_all = ["passphrase", "passphrase_file"]
    )]
    pub generate: Option<usize>,

    /// Embed the passphrase in the printed share URL so recipients can
    /// decrypt without being told it separately
    #[arg(short = 'u', long)]
    pub sharable: bool,

    /// Strip leading and trailing whitespace from the passphrase
    #[arg(short = 'S', long)]
    pub strip: bool,

    /// Seconds to keep the document before it expires
    #[arg(short, long, default_value_t = DEFAULT_KEEP_SECS)]
    pub keep: u64,

    #[command(flatten)]
    pub server: ServerArgs,
}

#[derive(Args)]
pub struct FetchArgs {
    /// Share URL (passphrase in the fragment) or bare document key
    pub document: String,

    /// Passphrase for encrypted documents; a URL fragment wins over this
    #[arg(short, long, env = "KOPY_PASSPHRASE", hide_env_values = true)]
    pub passphrase: Option<String>,

    /// Strip leading and trailing whitespace from the passphrase
    #[arg(short = 'S', long)]
    pub strip: bool,

    /// Write the document here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub server: ServerArgs,
}

#[derive(Args)]
pub struct PassgenArgs {
    /// Number of hex characters
    #[arg(default_value_t = 10)]
    pub length: usize,
}

#[derive(Args)]
pub struct ServerArgs {
    /// Base URL of the kopy.io-compatible service
    #[arg(long, env = "KOPY_URL", default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Verify the server's TLS certificate (off by default; kopy.io has
    /// served an invalid certificate for years)
    #[arg(long)]
    pub verify_certs: bool,
}

impl ServerArgs {
    pub fn client_config(&self) -> kopy_core::Config {
        kopy_core::Config {
            base_url: self.url.clone(),
            accept_invalid_certs: !self.verify_certs,
            ..kopy_core::Config::default()
        }
    }
}
