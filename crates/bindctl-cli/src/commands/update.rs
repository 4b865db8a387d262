//! `bindctl update`

use std::io::Write;

use bindctl_core::{RuleStore, merge, render_rule, resolve_rule_id};

use crate::cli::UpdateArgs;
use crate::commands::emit;
use crate::{Error, Result};

/// Updates an existing rule.
///
/// In merge mode only the supplied flags change the stored rule. With
/// `--no-merge` the rule is rebuilt from the flags alone, keeping just its
/// identifier and identity provider. Flag problems are reported before any
/// store call.
pub async fn run(store: &dyn RuleStore, args: &UpdateArgs, out: &mut impl Write) -> Result<()> {
    let token = args.id.as_deref().unwrap_or_default();
    if token.is_empty() {
        return Err(Error::MissingId { action: "update" });
    }

    let mode = args.mode();
    let overrides = args.overrides();
    overrides.check_required(mode).map_err(Error::required)?;

    let id = resolve_rule_id(store, token)
        .await
        .map_err(|e| Error::resolve("update", e))?;

    let existing = store
        .read(&id)
        .await
        .map_err(Error::Retrieve)?
        .ok_or_else(|| Error::NotFound {
            id: id.to_string(),
        })?;

    let updated = merge(&existing, &overrides, mode).map_err(Error::required)?;
    tracing::debug!(%id, ?mode, "Submitting binding rule update");

    let stored = store.update(&updated).await.map_err(|source| Error::Update {
        id: id.to_string(),
        source,
    })?;
    tracing::info!(%id, "Updated binding rule");

    emit(out, &render_rule(&stored, args.output.meta, args.output.format)?)
}
