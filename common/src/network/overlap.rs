//! # Overlap Engine
//!
//! Interval arithmetic over parsed entries. The primitives take typed
//! [`Address`] and [`Ipv4Range`] values and cannot fail; only the text based
//! [`entry_overlaps_any`] has to deal with malformed input, which it reports
//! as [`OverlapResult::Invalid`] instead of folding it into "no overlap".

use crate::error::ParseError;
use crate::network::address::Address;
use crate::network::entry::{self, Entry};
use crate::network::range::Ipv4Range;

/// Outcome of comparing an entry against a haystack of raw entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlapResult {
    /// At least one haystack entry intersects the needle.
    Overlaps,
    /// Every haystack entry parsed and none intersects the needle.
    Disjoint,
    /// The needle or a haystack entry did not parse; no answer can be given.
    Invalid(ParseError),
}

impl OverlapResult {
    pub fn is_overlap(&self) -> bool {
        matches!(self, OverlapResult::Overlaps)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, OverlapResult::Invalid(_))
    }
}

/// Inclusive containment: `lower <= point <= upper`.
pub fn contains(point: Address, range: &Ipv4Range) -> bool {
    range.lower() <= point && point <= range.upper()
}

/// True when the closed intervals share at least one address. Ranges that
/// only touch (`a.upper == b.lower`) overlap.
pub fn ranges_overlap(a: &Ipv4Range, b: &Ipv4Range) -> bool {
    a.lower() <= b.upper() && b.lower() <= a.upper()
}

impl Entry {
    /// Whether two entries share at least one address.
    pub fn overlaps(&self, other: &Entry) -> bool {
        match (self, other) {
            (Entry::Address(a), Entry::Address(b)) => a == b,
            (Entry::Address(point), Entry::Range(range))
            | (Entry::Range(range), Entry::Address(point)) => contains(*point, range),
            (Entry::Range(a), Entry::Range(b)) => ranges_overlap(a, b),
        }
    }
}

/// Compares an already parsed needle against raw haystack entries, in order.
///
/// A haystack entry that is neither an address nor a range makes the whole
/// comparison [`OverlapResult::Invalid`], even when another entry would have
/// matched; the first malformed entry in haystack order is the one reported.
/// Otherwise the scan stops at the first hit.
pub fn overlaps_any<I, S>(needle: &Entry, haystack: I) -> OverlapResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parsed: Result<Vec<Entry>, ParseError> = haystack
        .into_iter()
        .map(|raw| entry::parse_entry(raw.as_ref()))
        .collect();

    match parsed {
        Ok(entries) if entries.iter().any(|candidate| needle.overlaps(candidate)) => {
            OverlapResult::Overlaps
        }
        Ok(_) => OverlapResult::Disjoint,
        Err(err) => OverlapResult::Invalid(err),
    }
}

/// Text front-end of [`overlaps_any`]: the needle is parsed first and a
/// needle that is not an address or range is [`OverlapResult::Invalid`].
pub fn entry_overlaps_any<I, S>(needle: &str, haystack: I) -> OverlapResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match entry::parse_entry(needle) {
        Ok(needle) => overlaps_any(&needle, haystack),
        Err(err) => OverlapResult::Invalid(err),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
