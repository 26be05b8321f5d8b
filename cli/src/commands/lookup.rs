use std::env;

use colored::*;

use ipgate_common::assignments::Assignments;
use ipgate_common::config::Config;
use ipgate_common::{ParseResult, success};
use ipgate_core::client::ClientIpSources;
use ipgate_core::policy;
use tracing::{debug, warn};

use crate::terminal::{format, print};

/// CGI style variable holding the peer address.
const REMOTE_ADDR_VAR: &str = "REMOTE_ADDR";

pub fn lookup(
    ips: Vec<String>,
    sources: ClientIpSources,
    mapping: &Assignments,
    cfg: &Config,
) -> anyhow::Result<()> {
    let ips: Vec<String> = if ips.is_empty() {
        vec![client_ip_from(sources)?]
    } else {
        ips
    };

    let results: Vec<ParseResult<Option<&str>>> = policy::find_matching_keys(&ips, mapping);

    print_results(&ips, &results, cfg);

    let invalid: usize = results.iter().filter(|r| r.is_err()).count();
    if invalid > 0 {
        warn!("{invalid} address(es) could not be parsed");
    }

    let matched: usize = results.iter().filter(|r| matches!(r, Ok(Some(_)))).count();
    if matched == 0 && cfg.quiet == 0 {
        print::no_results();
        return Ok(());
    }

    print_summary(matched, ips.len(), cfg);
    Ok(())
}

fn print_summary(matched: usize, total: usize, cfg: &Config) {
    let matched: ColoredString = matched.to_string().bold().green();
    let output: String = format!("Lookup Complete: {matched} of {total} address(es) matched");

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => success!("{}", output),
    }
}

fn client_ip_from(mut sources: ClientIpSources) -> anyhow::Result<String> {
    if sources.remote_addr.is_none() {
        sources.remote_addr = env::var(REMOTE_ADDR_VAR).ok();
    }

    let Some(ip) = sources.resolve() else {
        anyhow::bail!("No client address given and none found in {REMOTE_ADDR_VAR} or headers");
    };

    debug!(client_ip = ip, "Resolved client address");
    Ok(ip.to_string())
}

fn print_results(ips: &[String], results: &[ParseResult<Option<&str>>], cfg: &Config) {
    print::set_key_width(ips.iter().map(String::as_str));

    for (ip, result) in ips.iter().zip(results) {
        match cfg.quiet {
            2 => print::print(&format!("{ip} {}", format::lookup_to_plain(result))),
            _ => print::aligned_line(ip, format::lookup_to_value(result)),
        }
    }
}
