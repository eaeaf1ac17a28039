use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::utils::path::expand_tilde;
use std::io;

/// Start the interactive match session (the default when no subcommand
/// is given).
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    //
    // 1. Opponent: CLI preset wins, otherwise start unnamed
    //
    let opponent = cli.opponent.clone().unwrap_or_default();

    //
    // 2. Export directory from config (already overridden by --out-dir)
    //
    let export_dir = expand_tilde(&cfg.export_dir);

    //
    // 3. Default export format from config
    //
    let default_format = ExportFormat::parse(&cfg.default_export_format)?;

    let mut session = Session::new(cfg.player_name.clone(), opponent, export_dir, default_format);

    let stdin = io::stdin();
    session.run(&mut stdin.lock())
}
