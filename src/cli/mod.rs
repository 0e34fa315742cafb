//! CLI interface for vocli

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Interactive editor for formant synthesizer voices
#[derive(Parser)]
#[command(name = "vocli")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (default: vocli.yaml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a voice in the interactive editor
    Edit {
        /// Voice file to edit
        voice: PathBuf,
    },

    /// Create a voice with neutral formants
    New {
        /// Output file path (.json for JSON, YAML otherwise)
        output: PathBuf,

        /// Voice name
        #[arg(short, long, default_value = "default")]
        name: String,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print a phoneme, or an overview of the whole voice
    Show {
        /// Voice file
        voice: PathBuf,

        /// Phoneme name or ID
        phoneme: Option<String>,
    },

    /// Validate a voice file
    Check {
        /// Voice file
        voice: PathBuf,
    },

    /// List phoneme names and IDs
    Phonemes,

    /// Generate an example configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_new() {
        let cli = Cli::parse_from(["vocli", "new", "adam.voice", "--name", "Adam"]);
        match cli.command {
            Commands::New { output, name, force } => {
                assert_eq!(output, PathBuf::from("adam.voice"));
                assert_eq!(name, "Adam");
                assert!(!force);
            }
            _ => panic!("expected new"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["vocli", "edit", "adam.voice", "--config", "custom.yaml"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
        assert!(matches!(cli.command, Commands::Edit { .. }));
    }
}
