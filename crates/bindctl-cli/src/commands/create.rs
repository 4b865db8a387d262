//! `bindctl create`

use std::io::Write;

use bindctl_core::{RuleStore, render_rule};

use crate::cli::CreateArgs;
use crate::commands::emit;
use crate::{Error, Result};

/// Creates a rule from the flags and prints what the store returned.
///
/// Required flags are checked before the store is contacted.
pub async fn run(store: &dyn RuleStore, args: &CreateArgs, out: &mut impl Write) -> Result<()> {
    let rule = args.new_rule().into_rule().map_err(Error::required)?;

    let created = store.create(&rule).await.map_err(Error::Create)?;
    tracing::info!(id = %created.id, "Created binding rule");

    emit(out, &render_rule(&created, args.output.meta, args.output.format)?)
}
