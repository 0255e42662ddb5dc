// ⚙️ Configuration - CLI flags with environment fallbacks

use clap::{Parser, Subcommand, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable output (development)
    #[default]
    Pretty,
    /// One JSON object per line (production)
    Json,
}

/// receipt-server flags
#[derive(Debug, Clone, Parser)]
#[command(name = "receipt-server", version, about = "Receipt points HTTP API")]
pub struct ServerArgs {
    /// Address to listen on
    #[arg(long, env = "RECEIPT_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Log output format
    #[arg(long, env = "RECEIPT_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// receipt-points flags
#[derive(Debug, Clone, Parser)]
#[command(name = "receipt-points", version, about = "Score receipt JSON files offline")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the points breakdown for each receipt file
    Score {
        /// Receipt JSON files (same shape as POST /receipts/process)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Emit breakdowns as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
