//! `save` - write the voice to disk

use super::{Command, Context, Outcome};
use crate::error::{CommandError, CommandResult};
use crate::voice::PATH_MAX;
use std::path::PathBuf;

pub struct SaveCommand;

impl Command for SaveCommand {
    fn name(&self) -> &'static str {
        "save"
    }

    fn describe(&self) -> &'static str {
        "save [file]       --  Save the current voice to the specified or last used filename"
    }

    fn execute(&self, args: &str, ctx: &mut Context<'_, '_>) -> CommandResult<Outcome> {
        match args.split_whitespace().next() {
            Some(file) => {
                if file.len() >= PATH_MAX {
                    return Err(CommandError::PathTooLong {
                        len: file.len(),
                        max: PATH_MAX - 1,
                    });
                }
                ctx.voice.filename = PathBuf::from(file);
            }
            None if !ctx.voice.has_filename() => return Err(CommandError::NoFilenameSet),
            None => {}
        }

        ctx.terminal
            .println(&format!("filename: {}", ctx.voice.filename.display()))?;
        save_voice(ctx)?;

        Ok(Outcome::Continue)
    }
}

/// Write the voice to its remembered filename
pub(super) fn save_voice(ctx: &mut Context<'_, '_>) -> CommandResult<()> {
    ctx.store
        .write_voice(&ctx.voice.filename, ctx.voice)
        .map_err(|cause| {
            tracing::warn!(path = %ctx.voice.filename.display(), "Save failed: {:#}", cause);
            CommandError::Save {
                path: ctx.voice.filename.clone(),
                cause,
            }
        })
}

#[cfg(test)]
mod tests {
    use crate::commands::testing::Harness;
    use crate::error::CommandError;
    use std::path::Path;

    #[test]
    fn test_save_without_filename() {
        let mut harness = Harness::new("");
        assert!(matches!(
            harness.dispatch("save"),
            Err(CommandError::NoFilenameSet)
        ));
        assert!(harness.store.writes.is_empty());
    }

    #[test]
    fn test_save_remembers_filename() {
        let mut harness = Harness::new("");
        harness.dispatch("save out.voice").unwrap();
        harness.dispatch("save").unwrap();

        let targets: Vec<_> = harness.store.writes.iter().map(|(p, _)| p.as_path()).collect();
        assert_eq!(targets, [Path::new("out.voice"), Path::new("out.voice")]);
        assert_eq!(harness.voice.filename, Path::new("out.voice"));
        assert_eq!(harness.output().matches("filename: out.voice").count(), 2);
    }

    #[test]
    fn test_save_overrides_filename() {
        let mut harness = Harness::new("");
        harness.dispatch("save first.voice").unwrap();
        harness.dispatch("save second.voice").unwrap();
        harness.dispatch("save").unwrap();

        assert_eq!(harness.store.writes[2].0, Path::new("second.voice"));
    }

    #[test]
    fn test_save_writes_current_voice() {
        let mut harness = Harness::new("");
        harness.dispatch("name Eve").unwrap();
        harness.dispatch("save eve.voice").unwrap();
        assert_eq!(harness.store.writes[0].1.name, "Eve");
    }

    #[test]
    fn test_save_failure_is_reported() {
        let mut harness = Harness::new("");
        harness.store.fail = true;

        let err = harness.dispatch("save out.voice").unwrap_err();
        assert!(matches!(err, CommandError::Save { .. }));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_save_rejects_long_path() {
        let mut harness = Harness::new("");
        let path = "p".repeat(crate::voice::PATH_MAX);

        assert!(matches!(
            harness.dispatch(&format!("save {}", path)),
            Err(CommandError::PathTooLong { .. })
        ));
        assert!(!harness.voice.has_filename());
    }
}
