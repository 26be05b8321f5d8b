//! Removal of assignments whose keys no longer exist upstream.
//!
//! Deleting a key elsewhere does not delete its stored field, and a leftover
//! field would keep granting access by address. Pruning runs before the
//! mapping is saved or used.

use std::collections::HashSet;

use ipgate_common::assignments::Assignments;
use tracing::info;

/// What [`prune_assignments`] did to a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneOutcome {
    /// Keys dropped, in their original order.
    pub removed: Vec<String>,
}

impl PruneOutcome {
    /// Whether the caller needs to persist the mapping again.
    pub fn changed(&self) -> bool {
        !self.removed.is_empty()
    }
}

/// Drops every assignment whose key is not in `live_keys`. With no live keys
/// at all the mapping is cleared.
pub fn prune_assignments<'a, I>(assignments: &mut Assignments, live_keys: I) -> PruneOutcome
where
    I: IntoIterator<Item = &'a str>,
{
    let live: HashSet<&str> = live_keys.into_iter().collect();

    let removed: Vec<String> = assignments
        .keys()
        .filter(|key| !live.contains(key))
        .map(str::to_string)
        .collect();

    if !removed.is_empty() {
        assignments.retain(|key, _| live.contains(key));
        info!(count = removed.len(), "Pruned assignments for missing keys");
    }

    PruneOutcome { removed }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> Assignments {
        [("12", "1.1.1.1"), ("34", "2.2.2.2"), ("56", "3.3.3.3")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_prune_removes_missing_keys() {
        let mut assignments = mapping();
        let outcome = prune_assignments(&mut assignments, ["56", "12", "99"]);

        assert!(outcome.changed());
        assert_eq!(outcome.removed, vec!["34".to_string()]);
        assert_eq!(assignments.keys().collect::<Vec<_>>(), vec!["12", "56"]);
    }

    #[test]
    fn test_prune_unchanged() {
        let mut assignments = mapping();
        let outcome = prune_assignments(&mut assignments, ["12", "34", "56"]);

        assert!(!outcome.changed());
        assert_eq!(assignments, mapping());
    }

    #[test]
    fn test_prune_without_live_keys_clears() {
        let mut assignments = mapping();
        let outcome = prune_assignments(&mut assignments, std::iter::empty());

        assert_eq!(outcome.removed.len(), 3);
        assert!(assignments.is_empty());
    }
}
