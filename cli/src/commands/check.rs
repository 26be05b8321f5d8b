use colored::*;
use ipgate_common::config::Config;
use ipgate_common::success;
use ipgate_core::{PolicyError, policy};

use crate::terminal::{colors, print};

pub fn check(candidate: &str, siblings: &[String], cfg: &Config) -> anyhow::Result<()> {
    match policy::check_no_overlap(candidate, siblings) {
        Ok(()) => {
            success!(
                "'{candidate}' overlaps none of {} sibling field(s)",
                siblings.len()
            );
            Ok(())
        }
        Err(err) => {
            if cfg.quiet < 2 {
                print_failure(&err);
            }
            Err(err.into())
        }
    }
}

fn print_failure(err: &PolicyError) {
    match err {
        PolicyError::Overlap {
            entry,
            sibling,
            index,
        } => {
            print::set_key_width(["Entry", "Sibling"]);
            print::aligned_line("Entry", entry.color(colors::IPV4_ADDR));
            print::aligned_line("Sibling", format!("#{index} {sibling}").color(colors::INVALID));
        }
        PolicyError::Undetermined {
            sibling, source, ..
        } => {
            print::set_key_width(["Sibling", "Problem"]);
            print::aligned_line("Sibling", sibling.as_str());
            print::aligned_line("Problem", source.to_string().color(colors::INVALID));
        }
        _ => {}
    }
}
