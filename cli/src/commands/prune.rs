use ipgate_common::assignments::Assignments;
use ipgate_common::config::Config;
use ipgate_common::success;
use ipgate_core::prune::{self, PruneOutcome};
use tracing::info;

use crate::terminal::print;

/// Prunes `mapping` and prints what is left in the mapping file format, so
/// the output can be written back.
pub fn prune(mut mapping: Assignments, keep: &[String], cfg: &Config) -> anyhow::Result<()> {
    let outcome: PruneOutcome =
        prune::prune_assignments(&mut mapping, keep.iter().map(String::as_str));

    if cfg.quiet == 0 {
        for key in &outcome.removed {
            info!("Dropping assignment for '{key}'");
        }
    }

    for (key, field) in mapping.iter() {
        print::print(&format!("{key} = {field}"));
    }

    if outcome.changed() {
        success!("{} assignment(s) pruned, {} kept", outcome.removed.len(), mapping.len());
    } else {
        success!("Nothing to prune");
    }
    Ok(())
}
