//! Text rendering of voice data

use super::{phoneme_name, Phoneme, VoiceDef};

/// Render a phoneme as a formant table
pub fn render_phoneme(index: usize, phoneme: &Phoneme) -> String {
    let mut out = format!(
        "Phoneme {} ({})\n  Formant  Frequency  Bandwidth  dB offset\n",
        index,
        phoneme_name(index).unwrap_or("?")
    );
    for (slot, formant) in phoneme.formants.iter().enumerate() {
        out.push_str(&format!(
            "  #{:<7} {:>6} Hz  {:>6} Hz  {:>6} dB\n",
            slot + 1,
            formant.frequency,
            formant.bandwidth,
            formant.db_offset
        ));
    }

    out
}

/// Render a one-line-per-phoneme overview of a voice
pub fn render_summary(voice: &VoiceDef) -> String {
    let mut out = format!("Voice: {}\n", voice.name);
    if voice.has_filename() {
        out.push_str(&format!("File:  {}\n", voice.filename.display()));
    }
    for (index, phoneme) in voice.phonemes.iter().enumerate() {
        let frequencies: Vec<String> = phoneme
            .formants
            .iter()
            .map(|f| f.frequency.to_string())
            .collect();
        out.push_str(&format!(
            "  {:>2} {:<4} {}\n",
            index,
            phoneme_name(index).unwrap_or("?"),
            frequencies.join(" / ")
        ));
    }

    out
}
