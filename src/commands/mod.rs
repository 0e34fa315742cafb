//! Editor commands
//!
//! Each command owns its argument grammar. The registry maps command names
//! to handlers and routes input lines to them.

mod edit;
mod help;
mod name;
mod print;
mod quit;
mod registry;
mod save;

#[cfg(test)]
mod testing;

pub use edit::EditCommand;
pub use help::HelpCommand;
pub use name::NameCommand;
pub use print::PrintCommand;
pub use quit::QuitCommand;
pub use registry::Registry;
pub use save::SaveCommand;

use crate::editor::{parse_long, Terminal};
use crate::error::{CommandError, CommandResult};
use crate::voice::{resolve_phoneme, VoiceDef, VoiceStore, NUM_PHONEMES};

/// What the session should do after a command completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading commands
    Continue,
    /// Stop the session
    Quit,
}

/// Everything a command may touch while it runs
pub struct Context<'a, 't> {
    pub voice: &'a mut VoiceDef,
    pub terminal: &'a mut Terminal<'t>,
    pub store: &'a mut dyn VoiceStore,
    pub registry: &'a Registry,
}

/// Trait for editor commands
pub trait Command {
    /// Name the command is invoked by
    fn name(&self) -> &'static str;

    /// One-line usage text
    fn describe(&self) -> &'static str;

    /// Run the command with the text following its name
    fn execute(&self, args: &str, ctx: &mut Context<'_, '_>) -> CommandResult<Outcome>;
}

/// Resolve the phoneme named by the first argument
///
/// Arguments starting with a letter are looked up by name, anything else is
/// read as a numeric ID.
pub fn select_phoneme(args: &str) -> CommandResult<usize> {
    let token = args
        .split_whitespace()
        .next()
        .ok_or(CommandError::MissingArgument("No phoneme specified"))?;

    let index = if token.starts_with(|c: char| c.is_ascii_alphabetic()) {
        resolve_phoneme(token)
    } else {
        usize::try_from(parse_long(token)).ok()
    };

    index
        .filter(|&i| i < NUM_PHONEMES)
        .ok_or_else(|| CommandError::InvalidPhoneme(token.to_string()))
}
