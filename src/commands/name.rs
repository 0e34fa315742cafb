//! `name` - rename the voice

use super::{Command, Context, Outcome};
use crate::error::{CommandError, CommandResult};
use crate::voice::SPEAKER_MAX;

pub struct NameCommand;

impl Command for NameCommand {
    fn name(&self) -> &'static str {
        "name"
    }

    fn describe(&self) -> &'static str {
        "name <new>        --  Rename the current voice to the value specified by <new>"
    }

    fn execute(&self, args: &str, ctx: &mut Context<'_, '_>) -> CommandResult<Outcome> {
        // TODO: take the rest of the line so names can contain spaces
        let name = args
            .split_whitespace()
            .next()
            .ok_or(CommandError::MissingArgument("Please specify a name"))?;

        let len = name.chars().count();
        if len >= SPEAKER_MAX {
            return Err(CommandError::NameTooLong {
                len,
                max: SPEAKER_MAX - 1,
            });
        }

        ctx.terminal.println(&format!(
            "Changing name from '{}' to '{}'",
            ctx.voice.name, name
        ))?;
        tracing::info!(old = %ctx.voice.name, new = name, "Voice renamed");
        ctx.voice.name = name.to_string();

        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::testing::Harness;
    use crate::error::CommandError;
    use crate::voice::SPEAKER_MAX;

    #[test]
    fn test_rename() {
        let mut harness = Harness::new("");
        harness.dispatch("name Eve").unwrap();

        assert_eq!(harness.voice.name, "Eve");
        assert_eq!(harness.output(), "Changing name from 'Adam' to 'Eve'\n");
    }

    #[test]
    fn test_rename_uses_first_token() {
        let mut harness = Harness::new("");
        harness.dispatch("name   Eve  Smith ").unwrap();
        assert_eq!(harness.voice.name, "Eve");
    }

    #[test]
    fn test_rename_rejects_long_name() {
        let mut harness = Harness::new("");
        let too_long = "n".repeat(SPEAKER_MAX);

        let result = harness.dispatch(&format!("name {}", too_long));
        assert!(matches!(result, Err(CommandError::NameTooLong { .. })));
        assert_eq!(harness.voice.name, "Adam");

        let longest = "n".repeat(SPEAKER_MAX - 1);
        harness.dispatch(&format!("name {}", longest)).unwrap();
        assert_eq!(harness.voice.name, longest);
    }

    #[test]
    fn test_rename_requires_argument() {
        let mut harness = Harness::new("");
        assert!(matches!(
            harness.dispatch("name   "),
            Err(CommandError::MissingArgument(_))
        ));
        assert_eq!(harness.voice.name, "Adam");
    }
}
