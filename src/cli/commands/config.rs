use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Commands;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        let file = Config::config_file();

        // ---- PRINT CONFIG (also the default with no flags) ----
        if *print_config || !*path {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(&cfg).unwrap());
        }

        // ---- CONFIG PATH ----
        if *path {
            println!("📄 Configuration file: {}", file.display());
        }
    }

    Ok(())
}
