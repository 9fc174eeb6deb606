mod commands;
mod terminal;

use commands::simulate::SimulationPlan;
use commands::{CommandLine, Commands, demo, info, simulate};
use rand::Rng;
use scoreboard_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };
    print::banner(&cfg);

    let outcome = match commands.command {
        Commands::Info => info::info(&cfg),
        Commands::Demo => demo::demo(&cfg),
        Commands::Simulate {
            games,
            players,
            results,
            seed,
        } => {
            let plan = SimulationPlan {
                games,
                players,
                results,
                seed: seed.unwrap_or_else(|| rand::rng().random()),
            };
            simulate::simulate(plan, &cfg)
        }
    };

    print::end_of_program(cfg.quiet);
    outcome
}
