//! Command failures
//!
//! Every failure here is recoverable: the editor reports it and keeps
//! accepting input.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}', type 'help' for a list of commands")]
    UnknownCommand(String),

    #[error("{0}")]
    MissingArgument(&'static str),

    #[error("Invalid phoneme ID '{0}'")]
    InvalidPhoneme(String),

    #[error("The name you have specified is too long ({len} characters, limit {max})")]
    NameTooLong { len: usize, max: usize },

    #[error("The filename you have specified is too long ({len} bytes, limit {max})")]
    PathTooLong { len: usize, max: usize },

    #[error("Please specify a filename")]
    NoFilenameSet,

    #[error("Input closed")]
    InputClosed,

    #[error("Failed to save voice to {path:?}: {cause:#}")]
    Save {
        path: PathBuf,
        cause: anyhow::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type CommandResult<T> = std::result::Result<T, CommandError>;
