pub mod check;
pub mod lookup;
pub mod parse;
pub mod prune;
pub mod validate;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use ipgate_common::assignments::{self, Assignments};

#[derive(Parser)]
#[command(name = "ipgate")]
#[command(about = "Match client IPv4 addresses against per-key address fields.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print less; repeat to print results only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Skip the banner line
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a field and list its entries
    #[command(alias = "p")]
    Parse { field: String },
    /// Check a candidate field against sibling fields
    #[command(alias = "c")]
    Check {
        candidate: String,
        siblings: Vec<String>,
    },
    /// Find the key each client address belongs to
    #[command(alias = "l")]
    Lookup {
        /// Client addresses; when omitted the address is taken from the request metadata below
        ips: Vec<String>,
        /// Value of the Client-IP header
        #[arg(long)]
        client_ip: Option<String>,
        /// Value of the X-Forwarded-For header
        #[arg(long)]
        forwarded_for: Option<String>,
        #[command(flatten)]
        mapping: MappingArgs,
    },
    /// Validate every assignment of a mapping against the others
    #[command(alias = "v")]
    Validate {
        #[command(flatten)]
        mapping: MappingArgs,
    },
    /// Drop assignments whose keys are no longer live
    Prune {
        /// Keys that still exist, comma separated
        #[arg(long, value_delimiter = ',')]
        keep: Vec<String>,
        #[command(flatten)]
        mapping: MappingArgs,
    },
}

#[derive(Args)]
pub struct MappingArgs {
    /// Mapping file with one 'key = field' per line
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Inline 'key=field' assignment, may be repeated
    #[arg(short = 'a', long = "assign", value_parser = parse_assign_arg)]
    pub assign: Vec<(String, String)>,
}

impl MappingArgs {
    /// Reads the file, if any, then applies inline assignments on top.
    pub fn load(&self) -> anyhow::Result<Assignments> {
        let mut mapping: Assignments = match &self.file {
            Some(path) => Assignments::load(path)?,
            None => Assignments::new(),
        };

        for (key, field) in &self.assign {
            mapping.insert(key.as_str(), field.as_str());
        }

        if mapping.is_empty() && self.file.is_none() {
            anyhow::bail!("No assignments given; use --file or --assign");
        }

        Ok(mapping)
    }
}

fn parse_assign_arg(s: &str) -> Result<(String, String), String> {
    let (key, field) = assignments::parse_assignment(s)
        .ok_or_else(|| format!("expected 'key=field', got '{s}'"))?;

    if key.is_empty() {
        return Err(format!("key cannot be empty in '{s}'"));
    }
    Ok((key.to_string(), field.to_string()))
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
