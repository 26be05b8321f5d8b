//! # Access Policy
//!
//! Two questions are answered here:
//! * At save time: is a candidate field well formed, and does it stay clear of
//!   every sibling field? ([`validate_candidate_field`], [`check_no_overlap`],
//!   [`validate_update`])
//! * At request time: which key, if any, does a client address belong to?
//!   ([`find_matching_key`], [`find_matching_keys`])
//!
//! Save-time checks are strict and reject malformed siblings as undetermined.
//! Request-time lookups skip malformed stored fields so one bad assignment
//! cannot block the rest of the mapping.

use ipgate_common::assignments::Assignments;
use ipgate_common::network::address;
use ipgate_common::network::entry::{self, Entry, Field};
use ipgate_common::network::overlap::{self, OverlapResult};
use ipgate_common::{ParseResult, success};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{PolicyError, PolicyResult};

/// Checks that `text` is an empty field or a comma separated list of valid
/// addresses and ranges, returning the parsed field.
pub fn validate_candidate_field(text: &str) -> PolicyResult<Field> {
    entry::parse_field(text).map_err(|source| PolicyError::InvalidField {
        field: text.to_string(),
        source,
    })
}

/// Verifies that no entry of `candidate` overlaps any entry of any sibling.
///
/// Candidate entries are checked in order and, for each one, siblings in
/// order; the first conflict is reported with the sibling's position. Each
/// sibling is split into its own entries, so the conflicting sibling can be
/// named. A malformed sibling yields [`PolicyError::Undetermined`] rather than
/// a silent pass.
pub fn check_no_overlap<I, S>(candidate: &str, siblings: I) -> PolicyResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let field = validate_candidate_field(candidate)?;
    let siblings: Vec<S> = siblings.into_iter().collect();

    for needle in field.iter() {
        for (index, sibling) in siblings.iter().enumerate() {
            let sibling = sibling.as_ref();
            match overlap::overlaps_any(needle, entry::split_field(sibling)) {
                OverlapResult::Disjoint => {}
                OverlapResult::Overlaps => {
                    return Err(PolicyError::Overlap {
                        entry: needle.to_string(),
                        sibling: sibling.to_string(),
                        index,
                    });
                }
                OverlapResult::Invalid(source) => {
                    return Err(PolicyError::Undetermined {
                        entry: needle.to_string(),
                        sibling: sibling.to_string(),
                        index,
                        source,
                    });
                }
            }
        }
    }

    Ok(())
}

/// Validates the new field for `key` against every other assignment in
/// `posted`, the full set of values about to be saved together.
///
/// The stored value for `key` itself, if any, is ignored.
pub fn validate_update(key: &str, value: &str, posted: &Assignments) -> PolicyResult<()> {
    let others: Vec<(&str, &str)> = posted.iter().filter(|(k, _)| *k != key).collect();

    let reject = |err: PolicyError| {
        let other_key = match &err {
            PolicyError::Overlap { index, .. } | PolicyError::Undetermined { index, .. } => {
                others.get(*index).map(|(k, _)| k.to_string())
            }
            _ => None,
        };
        PolicyError::Rejected {
            key: key.to_string(),
            other_key,
            source: Box::new(err),
        }
    };

    check_no_overlap(value, others.iter().map(|(_, field)| *field)).map_err(reject)
}

/// Runs [`validate_update`] for every assignment, stopping at the first
/// failure so nothing after a bad value is accepted.
pub fn validate_assignments(posted: &Assignments) -> PolicyResult<()> {
    for (key, value) in posted.iter() {
        validate_update(key, value, posted)?;
    }

    success!("{} assignment(s) validated", posted.len());
    Ok(())
}

/// Returns the first key, in mapping order, whose field contains `client_ip`.
///
/// An invalid `client_ip` is an error, never "no match". Stored fields that
/// do not parse are skipped for that key only.
pub fn find_matching_key<I, K, F>(client_ip: &str, mapping: I) -> ParseResult<Option<K>>
where
    I: IntoIterator<Item = (K, F)>,
    F: AsRef<str>,
{
    let needle = Entry::Address(address::parse_address(client_ip)?);

    for (position, (key, field)) in mapping.into_iter().enumerate() {
        match overlap::overlaps_any(&needle, entry::split_field(field.as_ref())) {
            OverlapResult::Overlaps => return Ok(Some(key)),
            OverlapResult::Disjoint => {}
            OverlapResult::Invalid(err) => {
                warn!(position, error = %err, "Skipping malformed stored field");
            }
        }
    }

    debug!(client_ip, "No assignment matched");
    Ok(None)
}

/// Looks up many client addresses against one mapping snapshot in parallel.
///
/// Results line up with `client_ips`.
pub fn find_matching_keys<'m, S>(
    client_ips: &[S],
    mapping: &'m Assignments,
) -> Vec<ParseResult<Option<&'m str>>>
where
    S: AsRef<str> + Sync,
{
    client_ips
        .par_iter()
        .map(|ip| find_matching_key(ip.as_ref(), mapping.iter()))
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
