//! Handlers for the `config` subcommands (`path`, `get`, `init`).
//!
//! These never contact the agent.

use std::io::Write;
use std::path::PathBuf;

use crate::cli::{ConfigAction, HttpArgs};
use crate::config::BindctlConfig;
use crate::{Error, Result};

/// Dispatches a config subcommand.
pub fn handle_config_command(
    config_path: Option<&str>,
    http: &HttpArgs,
    action: &ConfigAction,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path, out),
        ConfigAction::Get { key } => cmd_config_get(config_path, http, key, out),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), *force, out),
    }
}

/// Prints the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>, out: &mut impl Write) -> Result<()> {
    let path = BindctlConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("could not determine config directory for this platform"))?;
    writeln!(out, "{}", path.display())?;
    if !path.exists() {
        tracing::warn!("Config file does not exist; run `bindctl config init` to create it");
    }
    Ok(())
}

/// Prints one value of the effective configuration by dotted key.
///
/// `http` carries the `--http-addr`/`--token` flags and their
/// `BINDCTL_HTTP_*` environment fallbacks, applied over the file.
pub fn cmd_config_get(
    config_path: Option<&str>,
    http: &HttpArgs,
    key: &str,
    out: &mut impl Write,
) -> Result<()> {
    let config = BindctlConfig::load(config_path)?.with_overrides(http);
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    let found = get_nested_value(&value, key)
        .ok_or_else(|| Error::config(format!("key '{key}' not found in configuration")))?;
    writeln!(out, "{}", format_toml_value(found))?;
    Ok(())
}

/// Writes a default configuration file.
pub fn cmd_config_init(file: Option<&str>, force: bool, out: &mut impl Write) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => BindctlConfig::default_config_path()
            .ok_or_else(|| Error::config("could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "config file already exists at {}; use --force to overwrite",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, BindctlConfig::default().to_toml_string()?)?;

    writeln!(out, "Config file created at {}", path.display())?;
    Ok(())
}

/// Walks a dotted key path through a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Formats a TOML value for stdout; scalars print bare.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}
