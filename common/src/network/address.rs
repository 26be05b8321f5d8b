//! # IPv4 Address Codec
//!
//! Converts between dotted-quad text and the 32-bit value every comparison
//! in this crate works on. This is the only place that decides whether a
//! string is an IPv4 address.
//!
//! Accepted text is exactly four decimal octets in `0..=255` joined by single
//! dots. Leading zeros, hex or octal notation, surrounding whitespace and IPv6
//! text are all rejected.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::{ParseError, ParseResult};

/// A single IPv4 host address held as its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(u32);

impl Address {
    pub const fn from_u32(value: u32) -> Self {
        Self(value)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }

    pub fn to_ipv4(self) -> Ipv4Addr {
        Ipv4Addr::from(self.0)
    }

    /// Canonical dotted-quad form; parsing it yields `self` again.
    pub fn to_text(self) -> String {
        self.to_string()
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Self(u32::from(addr))
    }
}

impl From<Address> for Ipv4Addr {
    fn from(addr: Address) -> Self {
        addr.to_ipv4()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_ipv4(), f)
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

/// Parses dotted-quad text into an [`Address`].
///
/// `std`'s parser already refuses leading zeros, hex octets and anything but
/// four dot separated groups, which is the exact grammar wanted here.
pub fn parse_address(text: &str) -> ParseResult<Address> {
    text.parse::<Ipv4Addr>()
        .map(Address::from)
        .map_err(|_| ParseError::InvalidAddress {
            input: text.to_string(),
        })
}

/// Cheap validity probe used where only a yes/no answer is needed.
pub fn is_valid_address(text: &str) -> bool {
    parse_address(text).is_ok()
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
    fn test_is_valid_address_table() {
        let cases: &[(&str, bool)] = &[
            ("", false),
            (" ", false),
            ("2.1.1.1", true),
            ("2.1.1.254", true),
            ("2.1.1.354", false),
            ("2.1.1.1-2.1.1.5", false),
            ("2.1.1.5,2.1.1.1", false),
            ("1.1.1.1,2.1.1.1", false),
            ("1.1.1.1,2.1.1.1-2.1.1.5", false),
        ];

        for (input, expected) in cases {
            assert_eq!(is_valid_address(input), *expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_rejects_alternate_notations() {
        assert!(parse_address("0x1.1.1.1").is_err());
        assert!(parse_address("01.1.1.1").is_err());
        assert!(parse_address("1.1.1").is_err());
        assert!(parse_address("1.1.1.1.1").is_err());
        assert!(parse_address("1..1.1").is_err());
        assert!(parse_address(" 1.1.1.1").is_err());
        assert!(parse_address("1.1.1.1 ").is_err());
        assert!(parse_address("::1").is_err());
        assert!(parse_address("+1.1.1.1").is_err());
    }

    #[test]
    fn test_numeric_value() {
        assert_eq!(parse_address("0.0.0.0").unwrap().to_u32(), 0);
        assert_eq!(parse_address("0.0.1.0").unwrap().to_u32(), 256);
        assert_eq!(parse_address("255.255.255.255").unwrap().to_u32(), u32::MAX);
        assert!(parse_address("10.1.1.99").unwrap() < parse_address("10.1.1.100").unwrap());
    }

    #[test]
    fn test_text_round_trip() {
        for value in [0u32, 1, 255, 256, 0x0A01_0164, 0xC0A8_0001, u32::MAX] {
            let addr = Address::from_u32(value);
            assert_eq!(parse_address(&addr.to_text()), Ok(addr));
        }
    }

    #[test]
    fn test_error_keeps_input() {
        let err = parse_address("2.1.1.354").unwrap_err();
        assert_eq!(err.input(), "2.1.1.354");
        assert!(!err.is_range_order());
    }
}
