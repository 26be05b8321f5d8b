use anyhow::Context;
use colored::*;
use ipgate_common::assignments::Assignments;
use ipgate_common::config::Config;
use ipgate_core::policy;

use crate::terminal::{colors, print};

pub fn validate(mapping: &Assignments, cfg: &Config) -> anyhow::Result<()> {
    if cfg.quiet == 0 {
        print::set_key_width(mapping.keys());
        for (key, field) in mapping.iter() {
            let value: ColoredString = if field.is_empty() {
                "(empty)".color(colors::SEPARATOR)
            } else {
                field.color(colors::IPV4_ADDR)
            };
            print::aligned_line(key, value);
        }
    }

    policy::validate_assignments(mapping).context("Mapping rejected")
}
