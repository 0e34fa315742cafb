//! `quit` - end the session, saving first if the voice has a file

use super::save::save_voice;
use super::{Command, Context, Outcome};
use crate::error::CommandResult;

pub struct QuitCommand;

impl Command for QuitCommand {
    fn name(&self) -> &'static str {
        "quit"
    }

    fn describe(&self) -> &'static str {
        "quit              --  Quit the voice editor"
    }

    fn execute(&self, _args: &str, ctx: &mut Context<'_, '_>) -> CommandResult<Outcome> {
        if ctx.voice.has_filename() {
            ctx.terminal.println("Auto-saving...")?;
            save_voice(ctx)?;
        }

        Ok(Outcome::Quit)
    }
}
