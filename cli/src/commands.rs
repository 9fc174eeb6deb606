pub mod demo;
pub mod info;
pub mod simulate;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scoreboard")]
#[command(about = "Track games, players and their scores in memory.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output (-q hides headers, -qq prints only the summary)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show the validation rules of every entity
    #[command(alias = "i")]
    Info,
    /// Record a small chess tournament and print the standings
    #[command(alias = "d")]
    Demo,
    /// Fill a library with random results and print the standings
    #[command(alias = "s")]
    Simulate {
        /// Number of games to register
        #[arg(long, default_value_t = 3)]
        games: usize,
        /// Number of players to register
        #[arg(long, default_value_t = 6)]
        players: usize,
        /// Number of results to record
        #[arg(long, default_value_t = 40)]
        results: usize,
        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
