//! `print` - show one phoneme

use super::{select_phoneme, Command, Context, Outcome};
use crate::error::CommandResult;
use crate::voice::render_phoneme;

pub struct PrintCommand;

impl Command for PrintCommand {
    fn name(&self) -> &'static str {
        "print"
    }

    fn describe(&self) -> &'static str {
        "print <Name/ID>   --  Print the phoneme specified by <Name/ID>"
    }

    fn execute(&self, args: &str, ctx: &mut Context<'_, '_>) -> CommandResult<Outcome> {
        let index = select_phoneme(args)?;
        ctx.terminal
            .print(&render_phoneme(index, &ctx.voice.phonemes[index]))?;
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::testing::Harness;
    use crate::commands::Outcome;
    use crate::error::CommandError;

    #[test]
    fn test_print_by_name_and_id() {
        let mut harness = Harness::new("");
        assert_eq!(harness.dispatch("print IY").unwrap(), Outcome::Continue);
        assert_eq!(harness.dispatch("print 17").unwrap(), Outcome::Continue);

        let output = harness.output();
        assert_eq!(output.matches("Phoneme 17 (IY)").count(), 2);
    }

    #[test]
    fn test_print_invalid_phoneme() {
        let mut harness = Harness::new("");
        let err = harness.dispatch("print 200").unwrap_err();
        assert_eq!(err.to_string(), "Invalid phoneme ID '200'");
        assert!(harness.output().is_empty());
    }

    #[test]
    fn test_print_missing_argument() {
        let mut harness = Harness::new("");
        assert!(matches!(
            harness.dispatch("print"),
            Err(CommandError::MissingArgument(_))
        ));
    }
}
