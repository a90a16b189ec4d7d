//! LiftPath server entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{debug, error, LevelFilter};

use liftpath_server::Args;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'info' instead.",
            args.log_level
        );
        LevelFilter::Info
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!("Parsed arguments: {:?}", args);

    if let Err(err) = liftpath_server::run(args).await {
        error!("{err}");
        process::exit(1);
    }
}
