//! Voice-leading diagnostics
//!
//! Findings are reported as warnings (range, spacing, overlap, parallels) or
//! errors (voices out of order) alongside the harmonic label; they never
//! change or suppress the label itself.

use crate::config::HarmonyOptions;
use crate::model::FourPartVoicing;

/// Nominal SATB ranges as (low, high) MIDI pitches, soprano first.
const VOICE_RANGES: [(u8, u8); 4] = [(60, 81), (55, 74), (48, 69), (40, 62)];

const VOICE_NAMES: [&str; 4] = ["soprano", "alto", "tenor", "bass"];

/// Diagnostics produced for one voicing (and optionally its predecessor).
#[derive(Debug, Clone, Default)]
pub struct VoicingDiagnostics {
    /// Non-blocking findings
    pub warnings: Vec<String>,
    /// Structural findings
    pub errors: Vec<String>,
}

/// Run all voicing checks.
///
/// Overlap and parallel-motion checks only run when a previous voicing is
/// supplied and `detect_parallel_motion` is set.
pub fn diagnose(
    voicing: &FourPartVoicing,
    previous: Option<&FourPartVoicing>,
    options: &HarmonyOptions,
) -> VoicingDiagnostics {
    let mut diag = VoicingDiagnostics::default();

    if !voicing.is_ordered() {
        diag.errors
            .push("voices out of order: expected soprano >= alto >= tenor >= bass".to_string());
    }

    let tolerance = options.voice_range_tolerance as i32;
    for (idx, pitch) in voicing.voices().iter().enumerate() {
        let (low, high) = VOICE_RANGES[idx];
        let pitch = *pitch as i32;
        if pitch < low as i32 - tolerance || pitch > high as i32 + tolerance {
            diag.warnings.push(format!(
                "{} pitch {} outside range {}-{} (tolerance {})",
                VOICE_NAMES[idx], pitch, low, high, tolerance
            ));
        }
    }

    let max_spacing = options.max_voice_spacing as i32;
    let voices = voicing.voices();
    for pair in [(0usize, 1usize), (1, 2)] {
        let gap = voices[pair.0] as i32 - voices[pair.1] as i32;
        if gap > max_spacing {
            diag.warnings.push(format!(
                "spacing of {} semitones between {} and {} exceeds {}",
                gap, VOICE_NAMES[pair.0], VOICE_NAMES[pair.1], max_spacing
            ));
        }
    }

    if let Some(prev) = previous {
        if options.detect_parallel_motion {
            check_overlap(voicing, prev, &mut diag);
            check_parallels(voicing, prev, &mut diag);
        }
    }

    diag
}

/// Voice overlap: a voice moving past where an adjacent voice sat in the
/// previous chord.
fn check_overlap(curr: &FourPartVoicing, prev: &FourPartVoicing, diag: &mut VoicingDiagnostics) {
    let c = curr.voices();
    let p = prev.voices();
    for (upper, lower) in [(0usize, 1usize), (1, 2), (2, 3)] {
        if c[lower] > p[upper] || c[upper] < p[lower] {
            diag.warnings.push(format!(
                "voice overlap between {} and {}",
                VOICE_NAMES[upper], VOICE_NAMES[lower]
            ));
        }
    }
}

/// Parallel perfect fifths/octaves between any voice pair moving in similar
/// motion.
fn check_parallels(curr: &FourPartVoicing, prev: &FourPartVoicing, diag: &mut VoicingDiagnostics) {
    let c = curr.voices();
    let p = prev.voices();
    for upper in 0..4usize {
        for lower in (upper + 1)..4 {
            let prev_interval = (p[upper] as i32 - p[lower] as i32).rem_euclid(12);
            let curr_interval = (c[upper] as i32 - c[lower] as i32).rem_euclid(12);
            if prev_interval != curr_interval || (prev_interval != 7 && prev_interval != 0) {
                continue;
            }
            let upper_motion = c[upper] as i32 - p[upper] as i32;
            let lower_motion = c[lower] as i32 - p[lower] as i32;
            if upper_motion == 0 || lower_motion == 0 {
                continue;
            }
            if upper_motion.signum() != lower_motion.signum() {
                continue;
            }
            let interval_name = if prev_interval == 7 { "fifths" } else { "octaves" };
            diag.warnings.push(format!(
                "parallel {} between {} and {}",
                interval_name, VOICE_NAMES[upper], VOICE_NAMES[lower]
            ));
        }
    }
}
