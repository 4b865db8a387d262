//! # bindctl-cli
//!
//! Command-line tool for ACL binding rules:
//! - Create, read, list and delete rules
//! - Update a rule by merging flags into it, or replace it with `--no-merge`
//! - Address rules by full identifier or any unique prefix
//! - TOML configuration layered under environment variables and flags

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;

use std::io::Write;

use bindctl_client::HttpRuleStore;
use bindctl_core::RuleStore;

pub use cli::{Cli, Command};
pub use config::BindctlConfig;
pub use error::{Error, Result};

/// Runs a parsed command line against the configured agent.
///
/// `config` subcommands are answered locally; every other command builds an
/// HTTP store from the layered configuration.
pub async fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    if let Command::Config { action } = &cli.command {
        return config_handlers::handle_config_command(
            cli.config.as_deref(),
            &cli.http,
            action,
            out,
        );
    }

    let config = BindctlConfig::load(cli.config.as_deref())?.with_overrides(&cli.http);
    let client_config = config.client_config();
    tracing::debug!(?client_config, "Resolved connection settings");
    let store = HttpRuleStore::new(&client_config)?;

    execute(&store, &cli.command, out).await
}

/// Runs a rule command against `store`.
pub async fn execute(store: &dyn RuleStore, command: &Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Create(args) => commands::create::run(store, args, out).await,
        Command::Update(args) => commands::update::run(store, args, out).await,
        Command::Read(args) => commands::read::run(store, args, out).await,
        Command::List(args) => commands::list::run(store, args, out).await,
        Command::Delete(args) => commands::delete::run(store, args, out).await,
        Command::Config { .. } => Err(Error::config(
            "config commands do not use the rule store",
        )),
    }
}
