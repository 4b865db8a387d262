//! Binding rule subcommands.
//!
//! Each command takes the store and an output sink so it can run against
//! [`bindctl_core::InMemoryRuleStore`] in tests and the HTTP store in the
//! binary.

pub mod create;
pub mod delete;
pub mod list;
pub mod read;
pub mod update;

use std::io::Write;

use crate::Result;

/// Writes rendered output, ending it with exactly one newline.
pub(crate) fn emit(out: &mut impl Write, rendered: &str) -> Result<()> {
    if rendered.is_empty() {
        return Ok(());
    }
    if rendered.ends_with('\n') {
        write!(out, "{rendered}")?;
    } else {
        writeln!(out, "{rendered}")?;
    }
    Ok(())
}
