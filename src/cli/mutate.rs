//! `make-private` and `delete` commands

use std::path::Path;

use log::debug;

use crate::batch::{self, Action};
use crate::cli::CommandContext;
use crate::cli::prompt::TerminalConfirm;
use crate::error::Result;
use crate::output::ConsoleReporter;
use crate::store::DEFAULT_LIST_FILE;

/// Apply `action` to every repository in the default list file.
///
/// Individual failures are reported but do not change the exit status.
pub async fn run(env_file: &Path, action: Action) -> Result<()> {
    let ctx = CommandContext::new(env_file)?;

    let outcome = batch::run_from_file(
        &ctx.client,
        action,
        Path::new(DEFAULT_LIST_FILE),
        &mut TerminalConfirm,
        &ConsoleReporter,
    )
    .await?;

    debug!("Batch finished: {:?}", outcome);
    Ok(())
}
