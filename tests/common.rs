#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn luna() -> Command {
    cargo_bin_cmd!("lunatracker")
}

/// Create a unique, empty export directory inside the system temp dir
pub fn setup_out_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lunatracker", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create out dir");
    path.to_string_lossy().to_string()
}

/// Run one scripted interactive session against the real binary.
/// The script is fed through stdin, one command per line; the session
/// ends at `quit` or EOF.
pub fn run_session(
    out_dir: &str,
    opponent: Option<&str>,
    script: &str,
) -> assert_cmd::assert::Assert {
    let mut cmd = luna();
    cmd.args(["--out-dir", out_dir]);
    if let Some(name) = opponent {
        cmd.args(["--opponent", name]);
    }
    cmd.write_stdin(script.to_string()).assert()
}
