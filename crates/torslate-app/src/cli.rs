use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "torslate",
    version,
    about = "Translate text on screen with global hotkeys"
)]
pub struct Cli {
    /// Profile to load from the user config directory
    #[arg(short, long, default_value = "main")]
    pub profile: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Translate text without capturing the screen
    Translate {
        text: String,
        /// Detect the source language instead of using the configured one
        #[arg(long)]
        detect: bool,
    },
    /// Run OCR and translation on an image file
    Image { path: PathBuf },
    /// Create a profile copied from the main one
    NewProfile { name: String },
}
