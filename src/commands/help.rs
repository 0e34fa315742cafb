//! `help` - list every command's usage

use super::{Command, Context, Outcome};
use crate::error::CommandResult;

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn describe(&self) -> &'static str {
        "help              --  Display this help text"
    }

    fn execute(&self, _args: &str, ctx: &mut Context<'_, '_>) -> CommandResult<Outcome> {
        for command in ctx.registry.iter() {
            ctx.terminal.println(command.describe())?;
        }
        Ok(Outcome::Continue)
    }
}
