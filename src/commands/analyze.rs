//! Analyze command: load a snapshot and print the season recap.

use std::path::Path;

use tracing::info;

use crate::{
    storage::{import_snapshot, LeagueReport},
    Result,
};

use super::report::render_report;

/// Load the snapshot in `data`, verify it and run every recap query.
pub fn load_report(data: &Path) -> Result<LeagueReport> {
    let db = import_snapshot(data)?;
    db.check_consistency()?;
    info!(data = %data.display(), "running recap queries");
    db.build_report()
}

/// Handle the analyze command
pub fn handle_analyze(data: &Path, as_json: bool) -> Result<()> {
    let report = load_report(data)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }

    Ok(())
}
