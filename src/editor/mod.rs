//! Interactive voice editing session
//!
//! Reads command lines, routes them through the registry and reports
//! failures until the operator quits or the input ends.

mod terminal;

pub use terminal::{parse_long, Terminal};

use crate::commands::{Outcome, Registry};
use crate::config::EditorSettings;
use crate::voice::{render_summary, VoiceDef, VoiceStore};
use anyhow::{Context, Result};

/// An editing session over a single voice
pub struct Editor<S: VoiceStore> {
    registry: Registry,
    voice: VoiceDef,
    store: S,
    settings: EditorSettings,
}

impl<S: VoiceStore> Editor<S> {
    /// Create a session with the standard command set
    pub fn new(voice: VoiceDef, store: S, settings: EditorSettings) -> Self {
        Self {
            registry: Registry::standard(),
            voice,
            store,
            settings,
        }
    }

    /// The voice being edited
    pub fn voice(&self) -> &VoiceDef {
        &self.voice
    }

    /// The store voices are saved to
    pub fn store(&self) -> &S {
        &self.store
    }

    /// End the session and hand back the voice
    pub fn into_voice(self) -> VoiceDef {
        self.voice
    }

    /// Run the read-dispatch loop
    ///
    /// End of input behaves like `quit`, so a voice with a file is saved
    /// before the loop returns.
    pub fn run(&mut self, terminal: &mut Terminal<'_>) -> Result<()> {
        if self.settings.banner {
            terminal.print(&render_summary(&self.voice))?;
            terminal.println("Type 'help' for a list of commands.")?;
        }

        loop {
            terminal.print(&self.settings.prompt)?;
            let (line, closed) = match terminal.read_line()? {
                Some(line) => (line, false),
                None => {
                    terminal.println("")?;
                    tracing::debug!("Input closed, quitting");
                    ("quit".to_string(), true)
                }
            };

            match self
                .registry
                .dispatch(&line, &mut self.voice, terminal, &mut self.store)
            {
                Ok(Outcome::Quit) => break,
                Ok(Outcome::Continue) => {}
                Err(e) => {
                    tracing::debug!(line = %line, "Command failed: {}", e);
                    terminal.println(&format!("error: {}", e))?;
                    if closed {
                        return Err(e).context("input closed before the voice could be saved");
                    }
                }
            }

            if closed {
                break;
            }
        }

        tracing::info!(name = %self.voice.name, "Session ended");
        Ok(())
    }
}
