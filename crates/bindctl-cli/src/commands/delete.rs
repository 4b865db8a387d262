//! `bindctl delete`

use std::io::Write;

use bindctl_core::{RuleStore, resolve_rule_id};

use crate::cli::DeleteArgs;
use crate::{Error, Result};

/// Deletes one rule, looked up by full identifier or unique prefix.
pub async fn run(store: &dyn RuleStore, args: &DeleteArgs, out: &mut impl Write) -> Result<()> {
    let token = args.id.as_deref().unwrap_or_default();
    let id = resolve_rule_id(store, token)
        .await
        .map_err(|e| Error::resolve("delete", e))?;

    store.delete(&id).await.map_err(|source| Error::Delete {
        id: id.to_string(),
        source,
    })?;
    tracing::info!(%id, "Deleted binding rule");

    writeln!(out, "Binding rule \"{id}\" deleted successfully")?;
    Ok(())
}
