//! Dataset validation command.

use std::path::PathBuf;

use anyhow::Result;

/// Run the check command: load and validate both datasets, write nothing.
pub fn run(root: PathBuf) -> Result<()> {
    let report = lbcsite_static::check(&root)?;

    tracing::info!("leaderboards.json format is valid");
    tracing::info!(
        "{} leaderboards, {} press items",
        report.leaderboards,
        report.press_items
    );

    Ok(())
}
