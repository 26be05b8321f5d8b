use anyhow::Context;
use ipgate_common::config::Config;
use ipgate_common::network::entry::Field;
use ipgate_common::success;
use ipgate_core::policy;

use crate::mprint;
use crate::terminal::{format, print};

pub fn parse(field: &str, cfg: &Config) -> anyhow::Result<()> {
    let parsed: Field = policy::validate_candidate_field(field).context("Field rejected")?;

    if parsed.is_empty() {
        success!("Empty field, nothing will match it");
        return Ok(());
    }

    print_entries(&parsed, cfg);

    let entries: usize = parsed.len();
    let unit: &str = if entries == 1 { "entry" } else { "entries" };
    success!(
        "{entries} {unit} parsed, covering {} address(es)",
        parsed.address_count()
    );
    Ok(())
}

fn print_entries(parsed: &Field, cfg: &Config) {
    for (idx, entry) in parsed.iter().enumerate() {
        match cfg.quiet {
            2 => print::print(&entry.to_string()),
            _ => {
                print::tree_head(idx, &entry.to_string());
                print::as_tree_one_level(format::entry_to_detail(entry));
                if idx + 1 != parsed.len() {
                    mprint!();
                }
            }
        }
    }
}
