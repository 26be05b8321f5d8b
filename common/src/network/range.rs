//! # IPv4 Range Model
//!
//! Closed ranges written as `lower-upper`, e.g. `10.1.1.100-10.1.1.115`.
//!
//! A range must span at least two addresses: equal or inverted bounds are
//! rejected with [`ParseError::RangeOrder`] so callers can tell a badly
//! ordered range apart from plain garbage.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, ParseResult};
use crate::network::RANGE_SEPARATOR;
use crate::network::address::{self, Address};

/// A continuous, inclusive range of IPv4 addresses with `lower < upper`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    lower: Address,
    upper: Address,
}

impl Ipv4Range {
    /// Builds a range from two addresses, refusing bounds that are not
    /// strictly increasing.
    pub fn new(lower: Address, upper: Address) -> ParseResult<Self> {
        if lower >= upper {
            return Err(ParseError::RangeOrder {
                input: format!("{lower}{RANGE_SEPARATOR}{upper}"),
                lower: lower.to_text(),
                upper: upper.to_text(),
            });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> Address {
        self.lower
    }

    pub fn upper(&self) -> Address {
        self.upper
    }

    /// Number of addresses covered, bounds included.
    pub fn len(&self) -> u64 {
        u64::from(self.upper.to_u32()) - u64::from(self.lower.to_u32()) + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for Ipv4Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.lower, RANGE_SEPARATOR, self.upper)
    }
}

impl FromStr for Ipv4Range {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_range(s)
    }
}

/// Parses `lower-upper` text.
///
/// The text must split into exactly two non-empty parts on `-`, so inputs
/// like `2.1.1.1-`, `--2.1.1.1` or a triple-hyphen string are syntax errors.
pub fn parse_range(text: &str) -> ParseResult<Ipv4Range> {
    let invalid = |reason: &'static str| ParseError::InvalidRange {
        input: text.to_string(),
        reason,
    };

    let parts: Vec<&str> = text.split(RANGE_SEPARATOR).collect();
    let [lower_str, upper_str] = parts.as_slice() else {
        return Err(invalid("expected two addresses joined by a single '-'"));
    };

    if lower_str.is_empty() || upper_str.is_empty() {
        return Err(invalid("range bounds cannot be empty"));
    }

    let lower = address::parse_address(lower_str)
        .map_err(|_| invalid("lower bound is not a valid IPv4 address"))?;
    let upper = address::parse_address(upper_str)
        .map_err(|_| invalid("upper bound is not a valid IPv4 address"))?;

    Ipv4Range::new(lower, upper).map_err(|_| ParseError::RangeOrder {
        input: text.to_string(),
        lower: lower_str.to_string(),
        upper: upper_str.to_string(),
    })
}

pub fn is_valid_range(text: &str) -> bool {
    parse_range(text).is_ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
