mod common;
use common::{luna, run_session, setup_out_dir};
use predicates::prelude::*;

#[test]
fn test_session_starts_and_quits() {
    let out = setup_out_dir("session_starts_and_quits");

    run_session(&out, None, "quit\n")
        .success()
        .stdout(predicate::str::contains("比赛记录器"))
        .stdout(predicate::str::contains("当前比分"));
}

#[test]
fn test_session_ends_on_eof() {
    let out = setup_out_dir("session_ends_on_eof");

    // no quit: stdin just runs out
    run_session(&out, None, "w 1\n")
        .success()
        .stdout(predicate::str::contains("当前比分"));
}

#[test]
fn test_record_updates_score() {
    let out = setup_out_dir("record_updates_score");

    run_session(&out, None, "w 1\nl 4\nw 2\nscore\nquit\n")
        .success()
        .stdout(predicate::str::contains("Luna 2"))
        .stdout(predicate::str::contains("对手 1"));
}

#[test]
fn test_delete_gives_the_point_back() {
    let out = setup_out_dir("delete_gives_the_point_back");

    // record a win (杀球) and a loss (被调动), then delete the win:
    // the score must end 0:1 and only the loss stays in the log
    run_session(&out, None, "w 1\nl 4\ndel 1\nlog\nquit\n")
        .success()
        .stdout(predicate::str::contains("Deleted rally #1"))
        .stdout(predicate::str::contains("Luna 0"))
        .stdout(predicate::str::contains("对手 1"))
        .stdout(predicate::str::contains("被调动"));
}

#[test]
fn test_invalid_delete_index_keeps_session_alive() {
    let out = setup_out_dir("invalid_delete_index");

    run_session(&out, None, "del 5\nw 1\nscore\nquit\n")
        .success()
        .stderr(predicate::str::contains("Invalid entry index: 5"))
        .stdout(predicate::str::contains("Luna 1"));
}

#[test]
fn test_invalid_reason_number_is_rejected() {
    let out = setup_out_dir("invalid_reason_number");

    run_session(&out, None, "w 9\nscore\nquit\n")
        .success()
        .stderr(predicate::str::contains("Invalid reason number: 9"))
        .stdout(predicate::str::contains("Luna 0"));
}

#[test]
fn test_unknown_command_is_reported() {
    let out = setup_out_dir("unknown_command");

    run_session(&out, None, "smash\nquit\n")
        .success()
        .stderr(predicate::str::contains("Unknown command: smash"));
}

#[test]
fn test_chart_lists_every_category() {
    let out = setup_out_dir("chart_lists_every_category");

    // only one rally recorded, yet all 11 categories must show up
    let assert = run_session(&out, None, "w 1\nchart\nquit\n").success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for reason in [
        "接发失误",
        "步伐问题",
        "危险区球",
        "被调动",
        "击球出界",
        "判断失误",
        "网前丢球",
        "杀球",
        "调动对手",
        "对手失误",
        "网前得分",
    ] {
        assert!(stdout.contains(reason), "chart is missing {reason}");
    }
}

#[test]
fn test_init_in_test_mode() {
    luna()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialization completed"));
}

#[test]
fn test_config_path_is_printed() {
    luna()
        .args(["config", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file"));
}

#[test]
fn test_config_print_shows_fields() {
    luna()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("player_name"))
        .stdout(predicate::str::contains("export_dir"));
}
