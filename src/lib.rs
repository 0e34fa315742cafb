//! vocli - interactive editor for formant synthesizer voices
//!
//! A voice is a table of phonemes, each shaped by three formants. The editor
//! inspects and rewrites formants by phoneme name or ID, renames the voice
//! and saves it to disk.

pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod voice;

pub use commands::{Command, Outcome, Registry};
pub use config::VocliConfig;
pub use editor::{Editor, Terminal};
pub use error::CommandError;
pub use voice::VoiceDef;
