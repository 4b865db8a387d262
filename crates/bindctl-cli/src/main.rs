//! bindctl
//!
//! Manages ACL binding rules through the agent's HTTP API.

#![forbid(unsafe_code)]

use std::process::ExitCode;

use bindctl_cli::{Cli, logging};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    logging::init(cli.verbose).map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let mut stdout = std::io::stdout().lock();
    match bindctl_cli::run(&cli, &mut stdout).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
