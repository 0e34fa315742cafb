//! vocli - interactive editor for formant synthesizer voices

use anyhow::{bail, Result};
use clap::Parser;
use std::io;
use std::path::Path;
use vocli::commands::select_phoneme;
use vocli::config::{self, VocliConfig};
use vocli::voice::{self, FileStore, VoiceDef, PHONEME_NAMES, SPEAKER_MAX};
use vocli::{Editor, Terminal};

mod cli;

use cli::{Cli, Commands};

fn init_logging(config: &VocliConfig) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = config::load_or_default(cli.config.as_deref())?;
    init_logging(&cfg);

    match cli.command {
        Commands::Edit { voice: path } => {
            let voice = voice::read_voice(&path)?;

            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            let mut terminal = Terminal::new(&mut input, &mut output);

            let mut editor = Editor::new(voice, FileStore, cfg.editor);
            editor.run(&mut terminal)?;
        }

        Commands::New { output, name, force } => {
            if name.chars().count() >= SPEAKER_MAX {
                bail!("Voice name must be shorter than {} characters", SPEAKER_MAX);
            }
            if output.exists() && !force {
                println!("{:?} already exists. Not overwriting (use --force).", output);
                return Ok(());
            }

            let voice = VoiceDef::new(name);
            voice::write_voice(&output, &voice)?;
            println!("Created voice '{}' in {:?}", voice.name, output);
        }

        Commands::Show { voice: path, phoneme } => {
            let voice = voice::read_voice(&path)?;

            match phoneme {
                Some(token) => {
                    let index = select_phoneme(&token)?;
                    print!("{}", voice::render_phoneme(index, &voice.phonemes[index]));
                }
                None => print!("{}", voice::render_summary(&voice)),
            }
        }

        Commands::Check { voice: path } => {
            println!("Checking voice at {:?}...", path);

            match voice::read_voice(&path) {
                Ok(voice) => {
                    println!("Voice is valid!");
                    println!("  Name: {}", voice.name);
                    println!("  Phonemes: {}", voice.phonemes.len());
                }
                Err(e) => {
                    println!("Voice is invalid: {:#}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Phonemes => {
            for (index, name) in PHONEME_NAMES.iter().enumerate() {
                println!("{:>2}  {}", index, name);
            }
        }

        Commands::Init => {
            let example_config = include_str!("../vocli.example.yaml");

            let path = config::DEFAULT_CONFIG;
            if Path::new(path).exists() {
                println!("{} already exists. Not overwriting.", path);
            } else {
                std::fs::write(path, example_config)?;
                println!("Created {} with example configuration.", path);
            }
        }
    }

    Ok(())
}
