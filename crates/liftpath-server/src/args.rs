//! Command-line arguments for the LiftPath server.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Serve floor grids and lift-to-room routes over HTTP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Path to a building configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Generate floors on first request instead of at startup
    #[arg(long)]
    pub lazy: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
