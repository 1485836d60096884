//! CLI definition for the `stanbot` binary.
//!
//! Flags only, no subcommands: the binary does exactly one thing, serve
//! the chat API.

use clap::Parser;

/// Lightweight STAN chatbot backend.
#[derive(Debug, Parser)]
#[command(name = "stanbot", version, about, long_about = None)]
pub struct Cli {
    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Host address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Allowed CORS origin (repeatable). All origins are allowed when unset.
    #[arg(long = "cors-origin", value_name = "ORIGIN")]
    pub cors_origin: Vec<String>,

    /// Serve the /data diagnostic dump (always on in debug builds).
    #[arg(long, default_value_t = cfg!(debug_assertions))]
    pub expose_data: bool,

    /// Suppress all output except errors.
    #[arg(long)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
