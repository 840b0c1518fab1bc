use std::path::PathBuf;

use clap::Parser;
use torslate_types::{ErrorKind, Stage, TranslationResult};

use crate::cli::{Cli, Command};
use crate::commands::format_result;

#[test]
fn no_subcommand_runs_interactive_with_main_profile() {
    let cli = Cli::try_parse_from(["torslate"]).unwrap();
    assert_eq!(cli.profile, "main");
    assert!(cli.command.is_none());
}

#[test]
fn translate_takes_text_and_detect_flag() {
    let cli = Cli::try_parse_from(["torslate", "-p", "work", "translate", "good morning", "--detect"])
        .unwrap();

    assert_eq!(cli.profile, "work");
    assert_eq!(
        cli.command,
        Some(Command::Translate {
            text: "good morning".to_string(),
            detect: true,
        })
    );
}

#[test]
fn image_and_new_profile_subcommands() {
    let cli = Cli::try_parse_from(["torslate", "image", "shot.png"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Command::Image {
            path: PathBuf::from("shot.png")
        })
    );

    let cli = Cli::try_parse_from(["torslate", "new-profile", "games"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Command::NewProfile {
            name: "games".to_string()
        })
    );
}

#[test]
fn translate_requires_text() {
    assert!(Cli::try_parse_from(["torslate", "translate"]).is_err());
}

#[test]
fn result_output_lists_available_texts() {
    let ok = TranslationResult::success("Hello world", "สวัสดีโลก");
    assert_eq!(
        format_result(&ok),
        "original:   Hello world\ntranslated: สวัสดีโลก\n"
    );

    let failed = TranslationResult::failure(
        Some("Hello".to_string()),
        ErrorKind::Timeout {
            stage: Stage::Translation,
            millis: 15_000,
        },
    );
    assert_eq!(format_result(&failed), "original:   Hello\n");
}
