//! # Field Entries
//!
//! A field is the comma separated text stored for one key, for example
//! `1.1.1.1,2.2.2.100-2.2.2.120,3.3.3.3`. Each piece is an [`Entry`]:
//! * A single address (`1.1.1.1`).
//! * A range (`2.2.2.100-2.2.2.120`).
//!
//! There is no escaping and no whitespace trimming: `1.1.1.1, 2.2.2.2` is a
//! syntax error, as is a trailing comma.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, ParseResult};
use crate::network::ENTRY_SEPARATOR;
use crate::network::address::{self, Address};
use crate::network::range::{self, Ipv4Range};

/// One address or one range out of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Entry {
    Address(Address),
    Range(Ipv4Range),
}

impl Entry {
    /// Number of addresses this entry covers.
    pub fn len(&self) -> u64 {
        match self {
            Entry::Address(_) => 1,
            Entry::Range(range) => range.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<Address> for Entry {
    fn from(addr: Address) -> Self {
        Entry::Address(addr)
    }
}

impl From<Ipv4Range> for Entry {
    fn from(range: Ipv4Range) -> Self {
        Entry::Range(range)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Address(addr) => fmt::Display::fmt(addr, f),
            Entry::Range(range) => fmt::Display::fmt(range, f),
        }
    }
}

impl FromStr for Entry {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_entry(s)
    }
}

/// Parses one piece of a field, trying an address first and a range second.
///
/// A piece that splits cleanly into two addresses but has them in the wrong
/// order keeps its [`ParseError::RangeOrder`] error; anything else collapses
/// into [`ParseError::InvalidEntry`].
pub fn parse_entry(text: &str) -> ParseResult<Entry> {
    if let Ok(addr) = address::parse_address(text) {
        return Ok(Entry::Address(addr));
    }

    match range::parse_range(text) {
        Ok(range) => Ok(Entry::Range(range)),
        Err(err) if err.is_range_order() => Err(err),
        Err(_) => Err(ParseError::InvalidEntry {
            input: text.to_string(),
        }),
    }
}

/// An ordered list of entries parsed from one comma separated string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Field {
    entries: Vec<Entry>,
}

impl Field {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of addresses covered, counting overlaps twice.
    pub fn address_count(&self) -> u64 {
        self.entries.iter().map(Entry::len).sum()
    }
}

impl IntoIterator for Field {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, entry) in self.entries.iter().enumerate() {
            if idx > 0 {
                write!(f, "{ENTRY_SEPARATOR}")?;
            }
            fmt::Display::fmt(entry, f)?;
        }
        Ok(())
    }
}

impl FromStr for Field {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_field(s)
    }
}

/// Splits a field on `,` without parsing the pieces. An empty field has no
/// pieces at all rather than one empty piece.
pub fn split_field(text: &str) -> impl Iterator<Item = &str> {
    let pieces = if text.is_empty() { None } else { Some(text.split(ENTRY_SEPARATOR)) };
    pieces.into_iter().flatten()
}

/// Parses a whole comma separated field. The empty string is a valid, empty
/// field; any bad piece rejects the whole field.
pub fn parse_field(text: &str) -> ParseResult<Field> {
    let entries = split_field(text)
        .map(parse_entry)
        .collect::<ParseResult<Vec<Entry>>>()?;

    Ok(Field { entries })
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

    #[test]
    fn test_parse_entry_kinds() {
        assert!(matches!(Entry::from_str("1.1.1.1"), Ok(Entry::Address(_))));
        assert!(matches!(
            Entry::from_str("10.10.10.100-10.10.10.120"),
            Ok(Entry::Range(_))
        ));
        assert!(matches!(
            Entry::from_str("not-an-ip"),
            Err(ParseError::InvalidEntry { .. })
        ));
        assert!(matches!(
            Entry::from_str("10.0.0.9-10.0.0.1"),
            Err(ParseError::RangeOrder { .. })
        ));
    }

    #[test]
    fn test_parse_field_examples() {
        let field = parse_field("1.2.3.4,10.10.10.23").unwrap();
        assert_eq!(field.len(), 2);

        let field = parse_field("10.10.10.100-10.10.10.120").unwrap();
        assert_eq!(field.len(), 1);
        assert_eq!(field.address_count(), 21);

        let field = parse_field("1.1.1.1,2.2.2.100-2.2.2.120,3.3.3.3").unwrap();
        assert!(matches!(
            field.entries(),
            [Entry::Address(_), Entry::Range(_), Entry::Address(_)]
        ));
        assert_eq!(field.to_string(), "1.1.1.1,2.2.2.100-2.2.2.120,3.3.3.3");
    }

    #[test]
    fn test_empty_field_is_valid() {
        let field = parse_field("").unwrap();
        assert!(field.is_empty());
        assert_eq!(split_field("").count(), 0);
    }

    #[test]
    fn test_malformed_pieces_reject_the_field() {
        for input in [
            "1.1.1.1,",
            ",1.1.1.1",
            "1.1.1.1,,2.2.2.2",
            "1.1.1.1, 2.2.2.2",
            " ",
            "1.1.1.1,2.1.1.354",
            "1.1.1.1-1.1.1.5-1.1.1.9",
        ] {
            assert!(parse_field(input).is_err(), "input: {input:?}");
        }
    }

    #[test]
    fn test_bad_order_surfaces_through_field() {
        let err = parse_field("1.1.1.1,2.1.1.5-2.1.1.1").unwrap_err();
        assert!(err.is_range_order());
        assert_eq!(err.input(), "2.1.1.5-2.1.1.1");
    }
}
