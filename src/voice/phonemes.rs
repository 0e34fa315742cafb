//! Phoneme name table
//!
//! ARPAbet symbols followed by a silence entry. A phoneme's ID is its
//! position in this table.

use super::NUM_PHONEMES;

/// Phoneme names, indexed by phoneme ID
pub const PHONEME_NAMES: [&str; NUM_PHONEMES] = [
    "AA", "AE", "AH", "AO", "AW", "AY", "B", "CH", "D", "DH", //
    "EH", "ER", "EY", "F", "G", "HH", "IH", "IY", "JH", "K", //
    "L", "M", "N", "NG", "OW", "OY", "P", "R", "S", "SH", //
    "T", "TH", "UH", "UW", "V", "W", "Y", "Z", "ZH", "PAU",
];

/// Resolve a phoneme name to its ID (case-insensitive)
pub fn resolve_phoneme(name: &str) -> Option<usize> {
    PHONEME_NAMES
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name))
}

/// Name of the phoneme with the given ID
pub fn phoneme_name(index: usize) -> Option<&'static str> {
    PHONEME_NAMES.get(index).copied()
}
