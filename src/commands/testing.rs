//! Scripted sessions for command tests

use super::{Outcome, Registry};
use crate::editor::Terminal;
use crate::error::CommandResult;
use crate::voice::{VoiceDef, VoiceStore};
use anyhow::Result;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Store that records every write instead of touching the disk
#[derive(Default)]
pub struct RecordingStore {
    pub writes: Vec<(PathBuf, VoiceDef)>,
    pub fail: bool,
}

impl VoiceStore for RecordingStore {
    fn write_voice(&mut self, path: &Path, voice: &VoiceDef) -> Result<()> {
        if self.fail {
            anyhow::bail!("disk full");
        }
        self.writes.push((path.to_path_buf(), voice.clone()));
        Ok(())
    }
}

/// A voice, a recording store and scripted console input
pub struct Harness {
    pub registry: Registry,
    pub voice: VoiceDef,
    pub store: RecordingStore,
    input: Cursor<Vec<u8>>,
    output: Vec<u8>,
}

impl Harness {
    /// `input` is what the operator types in reply to prompts
    pub fn new(input: &str) -> Self {
        Self::with_bytes(input.as_bytes())
    }

    /// Like `new`, for replies that are not valid UTF-8
    pub fn with_bytes(input: &[u8]) -> Self {
        Self {
            registry: Registry::standard(),
            voice: VoiceDef::new("Adam"),
            store: RecordingStore::default(),
            input: Cursor::new(input.to_vec()),
            output: Vec::new(),
        }
    }

    pub fn dispatch(&mut self, line: &str) -> CommandResult<Outcome> {
        let mut terminal = Terminal::new(&mut self.input, &mut self.output);
        self.registry
            .dispatch(line, &mut self.voice, &mut terminal, &mut self.store)
    }

    /// Everything written to the console so far
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}
