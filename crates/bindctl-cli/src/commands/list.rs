//! `bindctl list`

use std::io::Write;

use bindctl_core::{RuleStore, render_rules};

use crate::cli::ListArgs;
use crate::commands::emit;
use crate::{Error, Result};

/// Prints every rule, optionally only those of one identity provider.
///
/// Pretty output is empty when there are no rules; JSON output is `[]`.
pub async fn run(store: &dyn RuleStore, args: &ListArgs, out: &mut impl Write) -> Result<()> {
    let provider = args.idp_name.as_deref().filter(|p| !p.is_empty());
    let rules = store.list(provider).await.map_err(Error::List)?;
    tracing::debug!(count = rules.len(), "Listed binding rules");

    emit(out, &render_rules(&rules, args.output.meta, args.output.format)?)
}
