//! Interactive match session. One run of the loop is one match: the
//! state lives in memory and dies with the process, nothing is
//! persisted across runs.

use crate::core::histogram::reason_counts;
use crate::core::match_log::MatchState;
use crate::errors::{AppError, AppResult};
use crate::export::{self, ExportFormat};
use crate::models::outcome::Outcome;
use crate::models::reasons::{reason_by_number, reasons_for};
use crate::ui::chart;
use crate::ui::messages::{error, header, info, success};
use crate::utils::colors::{GREEN, RED, RESET, colorize_outcome};
use crate::utils::table::Table;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// One-line commands understood by the session prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Win(usize),
    Loss(usize),
    Delete(usize),
    Name(String),
    Log,
    Score,
    Chart,
    Reasons,
    Export {
        format: Option<ExportFormat>,
        file: Option<String>,
    },
    Help,
    Quit,
}

/// Parse one input line. Empty lines are no commands at all.
pub fn parse_command(line: &str) -> AppResult<Option<SessionCommand>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut parts = trimmed.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(None);
    };

    let cmd = match head {
        "w" | "win" => SessionCommand::Win(parse_number(parts.next())?),
        "l" | "loss" => SessionCommand::Loss(parse_number(parts.next())?),
        "del" | "d" => SessionCommand::Delete(parse_number(parts.next())?),
        // free text, inner spaces kept
        "name" => SessionCommand::Name(
            trimmed
                .strip_prefix("name")
                .unwrap_or_default()
                .trim()
                .to_string(),
        ),
        "log" => SessionCommand::Log,
        "score" => SessionCommand::Score,
        "chart" | "stats" => SessionCommand::Chart,
        "reasons" => SessionCommand::Reasons,
        "export" => match (parts.next(), parts.next()) {
            (None, _) => SessionCommand::Export {
                format: None,
                file: None,
            },
            (Some(fmt), file) => SessionCommand::Export {
                format: Some(ExportFormat::parse(fmt)?),
                file: file.map(str::to_string),
            },
        },
        "help" | "h" | "?" => SessionCommand::Help,
        "quit" | "q" | "exit" => SessionCommand::Quit,
        other => return Err(AppError::UnknownCommand(other.to_string())),
    };

    Ok(Some(cmd))
}

fn parse_number(tok: Option<&str>) -> AppResult<usize> {
    let tok = tok.ok_or_else(|| AppError::InvalidNumber("(missing)".to_string()))?;
    tok.parse()
        .map_err(|_| AppError::InvalidNumber(tok.to_string()))
}

pub struct Session {
    state: MatchState,
    player: String,
    export_dir: PathBuf,
    default_format: ExportFormat,
}

impl Session {
    pub fn new(
        player: String,
        opponent: String,
        export_dir: PathBuf,
        default_format: ExportFormat,
    ) -> Self {
        Self {
            state: MatchState::new(opponent),
            player,
            export_dir,
            default_format,
        }
    }

    /// Read commands until `quit` or EOF. A failed command reports its
    /// error and leaves the session (and the match state) alive.
    pub fn run<R: BufRead>(&mut self, input: &mut R) -> AppResult<()> {
        self.print_banner();

        let mut line = String::new();
        loop {
            print!("> ");
            io::stdout().flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            match parse_command(&line) {
                Ok(None) => continue,
                Ok(Some(SessionCommand::Quit)) => break,
                Ok(Some(cmd)) => {
                    if let Err(e) = self.execute(cmd) {
                        error(e);
                    }
                }
                Err(e) => error(e),
            }
        }

        println!();
        println!("{}", self.score_line());
        Ok(())
    }

    fn execute(&mut self, cmd: SessionCommand) -> AppResult<()> {
        match cmd {
            SessionCommand::Win(n) => self.record(Outcome::Win, n),
            SessionCommand::Loss(n) => self.record(Outcome::Loss, n),
            SessionCommand::Delete(n) => self.delete(n),
            SessionCommand::Name(name) => {
                self.state.opponent = name;
                info(format!("Opponent set to '{}'", self.state.opponent));
                Ok(())
            }
            SessionCommand::Log => {
                self.print_log();
                Ok(())
            }
            SessionCommand::Score => {
                println!("{}", self.score_line());
                Ok(())
            }
            SessionCommand::Chart => {
                self.print_charts();
                Ok(())
            }
            SessionCommand::Reasons => {
                self.print_reason_menus();
                Ok(())
            }
            SessionCommand::Export { format, file } => self.export(format, file),
            SessionCommand::Help => {
                print_help();
                Ok(())
            }
            SessionCommand::Quit => Ok(()),
        }
    }

    fn record(&mut self, outcome: Outcome, number: usize) -> AppResult<()> {
        let reason = reason_by_number(outcome, number)
            .ok_or_else(|| AppError::InvalidReason(number.to_string()))?;

        let entry = self.state.record(outcome, reason);
        success(format!(
            "[{}] {}：{}",
            entry.time_str(),
            entry.outcome.label(),
            entry.reason
        ));
        println!("{}", self.score_line());
        Ok(())
    }

    fn delete(&mut self, number: usize) -> AppResult<()> {
        if number == 0 {
            return Err(AppError::InvalidEntry(0));
        }

        let entry = self.state.remove(number - 1)?;
        success(format!(
            "Deleted rally #{number} ({}：{})",
            entry.outcome.label(),
            entry.reason
        ));
        println!("{}", self.score_line());
        Ok(())
    }

    fn export(&self, format: Option<ExportFormat>, file: Option<String>) -> AppResult<()> {
        let format = format.unwrap_or_else(|| self.default_format.clone());
        let path = export::resolve_target(
            &self.export_dir,
            &self.state.opponent,
            &format,
            file.as_deref(),
        );
        export::export_match(&self.state, &format, &path)
    }

    fn score_line(&self) -> String {
        let score = self.state.score();
        format!(
            "当前比分: {GREEN}{} {}{RESET} - {RED}对手 {}{RESET}",
            self.player, score.own, score.opponent
        )
    }

    fn print_log(&self) {
        if self.state.is_empty() {
            info("No rallies recorded yet.");
            return;
        }

        let mut table = Table::new(
            ["#", "时间", "类型", "原因"]
                .into_iter()
                .map(String::from)
                .collect(),
        );
        for (i, e) in self.state.entries().iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                e.time_str(),
                colorize_outcome(e.outcome),
                e.reason.to_string(),
            ]);
        }
        print!("{}", table.render());
    }

    fn print_charts(&self) {
        let entries = self.state.entries();
        println!("得分方式");
        print!("{}", chart::render(Outcome::Win, &reason_counts(entries, Outcome::Win)));
        println!("失分原因");
        print!("{}", chart::render(Outcome::Loss, &reason_counts(entries, Outcome::Loss)));
    }

    fn print_reason_menus(&self) {
        println!("失分原因 (l <n>):");
        for (i, r) in reasons_for(Outcome::Loss).iter().enumerate() {
            println!("  {}. {}", i + 1, r);
        }
        println!("得分方式 (w <n>):");
        for (i, r) in reasons_for(Outcome::Win).iter().enumerate() {
            println!("  {}. {}", i + 1, r);
        }
    }

    fn print_banner(&self) {
        header(format!("{} 比赛记录器", self.player));
        if self.state.opponent.is_empty() {
            println!("对手: (not set, use 'name <opponent>')");
        } else {
            println!("对手: {}", self.state.opponent);
        }
        println!();
        self.print_reason_menus();
        info("Type 'help' for the full command list.");
    }
}

fn print_help() {
    println!("Commands:");
    println!("  w <n>                      record a won rally (reason n from 得分方式)");
    println!("  l <n>                      record a lost rally (reason n from 失分原因)");
    println!("  del <n>                    delete rally #n from the log");
    println!("  name <text>                set the opponent name");
    println!("  log                        show the rally log");
    println!("  score                      show the current score");
    println!("  chart                      show per-reason bar charts");
    println!("  reasons                    show the reason menus again");
    println!("  export [csv|json] [file]   write the match log to a file");
    println!("  quit                       end the session");
}
