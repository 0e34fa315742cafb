//! Voice persistence
//!
//! Voices are stored as YAML documents, or JSON when the file has a `.json`
//! extension. The remembered filename is not part of the document.

use super::VoiceDef;
use anyhow::{Context, Result};
use std::path::Path;

/// Destination for saved voices
pub trait VoiceStore {
    /// Write the voice to the given path
    fn write_voice(&mut self, path: &Path, voice: &VoiceDef) -> Result<()>;
}

/// Store that writes voice files to disk
#[derive(Debug, Default, Clone, Copy)]
pub struct FileStore;

impl VoiceStore for FileStore {
    fn write_voice(&mut self, path: &Path, voice: &VoiceDef) -> Result<()> {
        write_voice(path, voice)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load and validate a voice file
pub fn read_voice(path: &Path) -> Result<VoiceDef> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read voice file: {:?}", path))?;

    let mut voice: VoiceDef = if is_json(path) {
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse voice file: {:?}", path))?
    } else {
        serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse voice file: {:?}", path))?
    };
    voice.validate()?;
    voice.filename = path.to_path_buf();

    tracing::info!(path = %path.display(), name = %voice.name, "Voice loaded");
    Ok(voice)
}

/// Serialize a voice to the given path
pub fn write_voice(path: &Path, voice: &VoiceDef) -> Result<()> {
    let contents = if is_json(path) {
        serde_json::to_string_pretty(voice)?
    } else {
        serde_yaml::to_string(voice)?
    };

    std::fs::write(path, contents)
        .with_context(|| format!("failed to write voice file: {:?}", path))?;

    tracing::info!(path = %path.display(), name = %voice.name, "Voice saved");
    Ok(())
}
