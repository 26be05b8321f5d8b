mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, lookup, parse, prune, validate};
use ipgate_common::config::Config;
use ipgate_core::client::ClientIpSources;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Parse { field } => {
            print::header("parsing field", cfg.quiet);
            parse::parse(&field, &cfg)
        }
        Commands::Check {
            candidate,
            siblings,
        } => {
            print::header("checking for overlap", cfg.quiet);
            check::check(&candidate, &siblings, &cfg)
        }
        Commands::Lookup {
            ips,
            client_ip,
            forwarded_for,
            mapping,
        } => {
            print::header("looking up client addresses", cfg.quiet);
            let sources = ClientIpSources {
                remote_addr: None,
                client_ip,
                forwarded_for,
            };
            lookup::lookup(ips, sources, &mapping.load()?, &cfg)
        }
        Commands::Validate { mapping } => {
            print::header("validating assignments", cfg.quiet);
            validate::validate(&mapping.load()?, &cfg)
        }
        Commands::Prune { keep, mapping } => {
            print::header("pruning assignments", cfg.quiet);
            prune::prune(mapping.load()?, &keep, &cfg)
        }
    }
}
