mod commands;
mod terminal;

use commands::{CommandLine, Commands, challenge, donor, letters, list, report, thank};
use mailroom_common::config::Config;
use mailroom_core::{DonorCollection, Projection};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg = Config {
        quiet: commands.quiet,
        no_color: commands.no_color,
    };

    if cfg.no_color {
        colored::control::set_override(false);
    }

    let donors: DonorCollection = commands::load_roster(&commands.gifts)?;

    match commands.command {
        Commands::List => {
            print::header("donor roster", cfg.quiet);
            list::list(&donors, &cfg)
        }
        Commands::Report => {
            print::header("donor report", cfg.quiet);
            report::report(&donors, &cfg)
        }
        Commands::Donor { name } => {
            print::header("donor details", cfg.quiet);
            donor::donor(&donors, &name, &cfg)
        }
        Commands::Thank { name, index } => thank::thank(&donors, &name, index),
        Commands::Letters { dir } => {
            print::header("writing letters", cfg.quiet);
            letters::letters(&donors, dir.as_deref())
        }
        Commands::Challenge { factor, min, max } => {
            print::header("challenge projection", cfg.quiet);
            let projection: Projection = Projection::new(factor).within(min, max);
            challenge::challenge(&donors, projection, &cfg)
        }
    }
}
