use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with defaults
///
/// Match state itself is never persisted, so there is nothing else to
/// set up.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.test)?;

    let path = Config::config_file();
    println!("⚙️  Initializing lunatracker…");
    println!("📄 Config file : {}", path.display());
    println!("🎉 lunatracker initialization completed!");
    Ok(())
}
