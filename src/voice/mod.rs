//! Voice definitions
//!
//! A voice is a named table of phonemes, each described by a fixed set of
//! formants that drive a formant speech synthesizer.

mod phonemes;
mod render;
mod store;

pub use phonemes::{phoneme_name, resolve_phoneme, PHONEME_NAMES};
pub use render::{render_phoneme, render_summary};
pub use store::{read_voice, write_voice, FileStore, VoiceStore};

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Number of phonemes in every voice
pub const NUM_PHONEMES: usize = 40;

/// Number of formants per phoneme
pub const NUM_FORMANTS: usize = 3;

/// Voice names must be strictly shorter than this many characters
pub const SPEAKER_MAX: usize = 32;

/// Remembered filenames must be strictly shorter than this many bytes
pub const PATH_MAX: usize = 4096;

/// A single resonance peak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formant {
    /// Center frequency in Hz
    pub frequency: u32,

    /// Bandwidth in Hz
    pub bandwidth: u32,

    /// Amplitude relative to the first formant, in dB
    pub db_offset: i32,
}

impl Formant {
    pub const fn new(frequency: u32, bandwidth: u32, db_offset: i32) -> Self {
        Self {
            frequency,
            bandwidth,
            db_offset,
        }
    }
}

const NEUTRAL_FORMANTS: [Formant; NUM_FORMANTS] = [
    Formant::new(500, 60, 0),
    Formant::new(1500, 90, -6),
    Formant::new(2500, 150, -12),
];

/// One row of the voice table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phoneme {
    pub formants: [Formant; NUM_FORMANTS],
}

impl Default for Phoneme {
    fn default() -> Self {
        Self {
            formants: NEUTRAL_FORMANTS,
        }
    }
}

/// The voice being edited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceDef {
    /// Display name
    pub name: String,

    /// Where the voice was last loaded from or saved to (empty = never saved)
    #[serde(skip)]
    pub filename: PathBuf,

    /// Exactly `NUM_PHONEMES` entries, indexed by phoneme ID
    pub phonemes: Vec<Phoneme>,
}

impl VoiceDef {
    /// Create a voice with neutral formants for every phoneme
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filename: PathBuf::new(),
            phonemes: vec![Phoneme::default(); NUM_PHONEMES],
        }
    }

    /// Whether a filename has been remembered for this voice
    pub fn has_filename(&self) -> bool {
        !self.filename.as_os_str().is_empty()
    }

    /// Validate a voice read from storage
    pub fn validate(&self) -> Result<()> {
        if self.name.chars().count() >= SPEAKER_MAX {
            bail!(
                "Voice name '{}' must be shorter than {} characters",
                self.name,
                SPEAKER_MAX
            );
        }
        if self.phonemes.len() != NUM_PHONEMES {
            bail!(
                "Voice has {} phonemes, expected {}",
                self.phonemes.len(),
                NUM_PHONEMES
            );
        }

        for (index, phoneme) in self.phonemes.iter().enumerate() {
            for (slot, formant) in phoneme.formants.iter().enumerate() {
                if formant.frequency == 0 || formant.bandwidth == 0 {
                    bail!(
                        "Phoneme {} ({}) formant #{} has a zero frequency or bandwidth",
                        index,
                        phoneme_name(index).unwrap_or("?"),
                        slot + 1
                    );
                }
            }
        }

        Ok(())
    }
}

impl Default for VoiceDef {
    fn default() -> Self {
        Self::new("default")
    }
}
