use clap::{Parser, Subcommand};

/// Command-line interface definition for lunatracker
/// Interactive CLI scorekeeper for one badminton match
#[derive(Parser)]
#[command(
    name = "lunatracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "An interactive badminton scorekeeper: tag rallies with win/loss reasons, watch the score, export the log",
    long_about = None
)]
pub struct Cli {
    /// Preset the opponent name for this match
    #[arg(global = true, long = "opponent")]
    pub opponent: Option<String>,

    /// Override the export directory (useful for tests or one-off exports)
    #[arg(global = true, long = "out-dir")]
    pub out_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Without a subcommand the interactive match session starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or locate)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Show the configuration file location")]
        path: bool,
    },
}
