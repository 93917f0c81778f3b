use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

pub const HOMESEED_BEFORE_HELP: &str = concat!(
    "homeseed ",
    env!("CARGO_PKG_VERSION"),
    " – seed a user's data directory from the shared dataset\n\n",
    "\x1b[1;36mCommands\x1b[0m\n",
    "  activate         Mirror /data/example into <home>/data/example (input is linked).\n",
    "  hooks            List the entry points a host can register.\n",
);

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    propagate_version = false,
    disable_help_subcommand = true,
    before_help = HOMESEED_BEFORE_HELP
)]
#[allow(clippy::struct_excessive_bools)]
pub struct HomeseedCli {
    #[arg(
        short,
        long,
        help = "Suppress human output (errors still print to stderr)",
        global = true
    )]
    pub quiet: bool,
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase logging (-vv reaches trace)",
        global = true
    )]
    pub verbose: u8,
    #[arg(long, help = "Force trace logging regardless of -v/-q", global = true)]
    pub trace: bool,
    #[arg(
        long,
        help = "Emit {status,message,details} JSON envelopes",
        global = true
    )]
    pub json: bool,
    #[arg(long, help = "Disable colored human output", global = true)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: CommandCli,
}

#[derive(Subcommand, Debug)]
pub enum CommandCli {
    #[command(
        about = "Seed <home>/data from the shared dataset; safe to repeat.",
        override_usage = "homeseed activate [--home DIR] [--entry-point NAME]"
    )]
    Activate(ActivateArgs),
    #[command(about = "List registered activation entry points.")]
    Hooks,
}

#[derive(Args, Debug)]
pub struct ActivateArgs {
    #[arg(
        long,
        value_name = "DIR",
        help = "Directory that receives data/ (defaults to HOMESEED_HOME, then the current directory)"
    )]
    pub home: Option<PathBuf>,
    #[arg(
        long,
        value_name = "NAME",
        help = "Entry point to run (see `homeseed hooks`)"
    )]
    pub entry_point: Option<String>,
}
