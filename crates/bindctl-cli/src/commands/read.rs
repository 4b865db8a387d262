//! `bindctl read`

use std::io::Write;

use bindctl_core::{RuleStore, render_rule, resolve_rule_id};

use crate::cli::ReadArgs;
use crate::commands::emit;
use crate::{Error, Result};

/// Prints one rule, looked up by full identifier or unique prefix.
pub async fn run(store: &dyn RuleStore, args: &ReadArgs, out: &mut impl Write) -> Result<()> {
    let token = args.id.as_deref().unwrap_or_default();
    let id = resolve_rule_id(store, token)
        .await
        .map_err(|e| Error::resolve("read", e))?;

    let rule = store
        .read(&id)
        .await
        .map_err(Error::Retrieve)?
        .ok_or_else(|| Error::NotFound {
            id: id.to_string(),
        })?;

    emit(out, &render_rule(&rule, args.output.meta, args.output.format)?)
}
