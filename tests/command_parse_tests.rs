//! Parsing of the one-line session commands.

use lunatracker::core::session::{SessionCommand, parse_command};
use lunatracker::export::ExportFormat;

#[test]
fn test_record_and_delete_commands() {
    assert_eq!(
        parse_command("w 1").unwrap(),
        Some(SessionCommand::Win(1))
    );
    assert_eq!(
        parse_command("loss 4").unwrap(),
        Some(SessionCommand::Loss(4))
    );
    assert_eq!(
        parse_command("  del 2 ").unwrap(),
        Some(SessionCommand::Delete(2))
    );
}

#[test]
fn test_name_keeps_inner_spaces() {
    assert_eq!(
        parse_command("name 王 小明").unwrap(),
        Some(SessionCommand::Name("王 小明".to_string()))
    );
    // bare `name` clears the opponent
    assert_eq!(
        parse_command("name").unwrap(),
        Some(SessionCommand::Name(String::new()))
    );
}

#[test]
fn test_export_variants() {
    assert_eq!(
        parse_command("export").unwrap(),
        Some(SessionCommand::Export {
            format: None,
            file: None
        })
    );
    assert_eq!(
        parse_command("export json").unwrap(),
        Some(SessionCommand::Export {
            format: Some(ExportFormat::Json),
            file: None
        })
    );
    assert_eq!(
        parse_command("export csv match.csv").unwrap(),
        Some(SessionCommand::Export {
            format: Some(ExportFormat::Csv),
            file: Some("match.csv".to_string())
        })
    );
    assert!(parse_command("export pdf").is_err());
}

#[test]
fn test_blank_lines_are_no_commands() {
    assert_eq!(parse_command("").unwrap(), None);
    assert_eq!(parse_command("   \t ").unwrap(), None);
}

#[test]
fn test_rejections() {
    assert!(parse_command("serve").is_err());
    assert!(parse_command("w").is_err());
    assert!(parse_command("del two").is_err());
}
