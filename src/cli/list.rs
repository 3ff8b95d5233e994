//! `list` command

use std::path::Path;

use crate::cli::CommandContext;
use crate::client::ListQuery;
use crate::error::Result;
use crate::inventory;
use crate::output::{ConsoleReporter, Reporter};
use crate::store;

/// Run the list command.
///
/// The list file is rewritten even when the request failed, leaving it empty.
pub async fn run(env_file: &Path, private: bool, per_page: i64, output: &Path) -> Result<()> {
    let ctx = CommandContext::new(env_file)?;
    let reporter = ConsoleReporter;

    let query = ListQuery::new(private, per_page);
    let listing = inventory::list_owned(&ctx.client, &ctx.config, &query, &reporter).await?;

    store::save(&listing.names(), output)?;
    reporter.list_saved(output);

    Ok(())
}
