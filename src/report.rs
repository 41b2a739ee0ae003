//! Filtering a voice catalog by family and printing the report.

use crate::voice::Voice;
use std::io::{self, Write};

/// Voices whose name contains `marker`, in catalog order.
///
/// The match is a plain case-sensitive substring check, so `Wavenet` does not
/// match `wavenet`.
pub fn filter_by_family<'a>(voices: &'a [Voice], marker: &str) -> Vec<&'a Voice> {
    voices.iter().filter(|v| v.name.contains(marker)).collect()
}

/// Write the report: the total catalog count, then one line per voice in the
/// `marker` family.
pub fn write_report(out: &mut impl Write, voices: &[Voice], marker: &str) -> io::Result<()> {
    writeln!(out, "Total voices found: {}", voices.len())?;
    for voice in filter_by_family(voices, marker) {
        writeln!(out, "Name: {}, Gender: {}", voice.name, voice.gender_label())?;
    }
    Ok(())
}
