//! Command registry and dispatcher

use super::{
    Command, Context, EditCommand, HelpCommand, NameCommand, Outcome, PrintCommand, QuitCommand,
    SaveCommand,
};
use crate::editor::Terminal;
use crate::error::{CommandError, CommandResult};
use crate::voice::{VoiceDef, VoiceStore};

/// Ordered table of commands
pub struct Registry {
    commands: Vec<Box<dyn Command>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Registry holding the voice editor commands
    pub fn standard() -> Self {
        Self::new()
            .with(PrintCommand)
            .with(EditCommand)
            .with(NameCommand)
            .with(SaveCommand)
            .with(HelpCommand)
            .with(QuitCommand)
    }

    /// Add a command (builder pattern)
    pub fn with<C: Command + 'static>(mut self, command: C) -> Self {
        self.commands.push(Box::new(command));
        self
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands in registration order
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Command + 'static)> + '_ {
        self.commands.iter().map(|c| c.as_ref())
    }

    /// Command names in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.name())
    }

    /// Find a command by exact name
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.iter().find(|c| c.name() == name)
    }

    /// Route one input line to its command
    ///
    /// The first whitespace-separated token selects the command; the rest of
    /// the line is handed to it untouched. Blank lines do nothing.
    pub fn dispatch(
        &self,
        line: &str,
        voice: &mut VoiceDef,
        terminal: &mut Terminal<'_>,
        store: &mut dyn VoiceStore,
    ) -> CommandResult<Outcome> {
        let line = line.trim_start();
        let (name, args) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));

        if name.is_empty() {
            return Ok(Outcome::Continue);
        }

        let command = self
            .get(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;

        tracing::debug!(command = name, args = args.trim(), "Dispatching command");

        let mut ctx = Context {
            voice,
            terminal,
            store,
            registry: self,
        };
        command.execute(args, &mut ctx)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::Harness;

    #[test]
    fn test_standard_table_order() {
        let registry = Registry::standard();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ["print", "edit", "name", "save", "help", "quit"]);
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_unknown_command_leaves_voice_alone() {
        let mut harness = Harness::new("");
        let before = harness.voice.clone();

        let result = harness.dispatch("rename Eve");
        assert!(matches!(result, Err(CommandError::UnknownCommand(ref n)) if n == "rename"));
        assert_eq!(harness.voice, before);
        assert_eq!(harness.store.writes.len(), 0);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut harness = Harness::new("");
        assert!(matches!(
            harness.dispatch("PRINT 3"),
            Err(CommandError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let mut harness = Harness::new("");
        assert_eq!(harness.dispatch("").unwrap(), Outcome::Continue);
        assert_eq!(harness.dispatch("   \t").unwrap(), Outcome::Continue);
    }

    #[test]
    fn test_bare_commands_are_never_unknown() {
        let registry = Registry::standard();
        for name in registry.names() {
            let mut harness = Harness::new("");
            match harness.dispatch(name) {
                Ok(_) => assert!(matches!(name, "help" | "quit"), "{} succeeded", name),
                Err(CommandError::MissingArgument(_)) => {
                    assert!(matches!(name, "print" | "edit" | "name"), "{}", name)
                }
                Err(CommandError::NoFilenameSet) => assert_eq!(name, "save"),
                Err(other) => panic!("{} failed with {:?}", name, other),
            }
        }
    }
}
