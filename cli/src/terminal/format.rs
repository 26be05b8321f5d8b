use crate::terminal::colors;
use colored::*;
use ipgate_common::ParseResult;
use ipgate_common::network::address::Address;
use ipgate_common::network::entry::Entry;

type Detail = (String, ColoredString);

fn address_value(addr: Address) -> ColoredString {
    addr.to_string().color(colors::IPV4_ADDR)
}

pub fn entry_to_detail(entry: &Entry) -> Vec<Detail> {
    match entry {
        Entry::Address(addr) => vec![
            (String::from("Kind"), "address".normal()),
            (String::from("IPv4"), address_value(*addr)),
        ],
        Entry::Range(range) => vec![
            (String::from("Kind"), "range".normal()),
            (String::from("First"), address_value(range.lower())),
            (String::from("Last"), address_value(range.upper())),
            (String::from("Size"), range.len().to_string().color(colors::ACCENT)),
        ],
    }
}

/// Colored text for one lookup outcome.
pub fn lookup_to_value(result: &ParseResult<Option<&str>>) -> ColoredString {
    match result {
        Ok(Some(key)) => key.color(colors::KEY).bold(),
        Ok(None) => "no match".color(colors::NO_MATCH),
        Err(err) => err.to_string().color(colors::INVALID),
    }
}

/// Plain text for one lookup outcome, used when only results are printed.
pub fn lookup_to_plain(result: &ParseResult<Option<&str>>) -> String {
    match result {
        Ok(Some(key)) => key.to_string(),
        Ok(None) => String::from("-"),
        Err(_) => String::from("!"),
    }
}
