//! Per-chord key scoring and hysteresis
//!
//! For each position the 24 candidate keys are scored by summing a windowed
//! diatonic-fit count with the configured bonuses. The previously chosen key
//! wins over the raw winner unless the raw winner's score exceeds it by more
//! than the switch margin.

use crate::config::KeyEstimatorConfig;
use crate::error::AnalysisError;
use crate::model::chord::{self, ChordQuality};
use crate::model::pitch::{exact_match, mod12, normalize};
use crate::model::Key;

use super::segments::{segments_from_keys, KeySegment};
use super::TraceEntry;

/// Result of estimating a key for every chord of a sequence.
#[derive(Debug, Clone)]
pub struct KeyEstimate {
    /// One key per chord index
    pub keys: Vec<Key>,

    /// Contiguous equal-key runs with confidence
    pub segments: Vec<KeySegment>,

    /// Per-chord diagnostic trace, when requested
    pub trace: Option<Vec<TraceEntry>>,
}

/// All 24 candidate keys in canonical order: major keys by ascending tonic,
/// then minor keys. Ties resolve to the earliest candidate, so the
/// deterministic tie-break (prefer major, then lowest tonic) falls out of
/// the iteration order.
fn candidates() -> impl Iterator<Item = Key> {
    (0..12u8)
        .map(Key::Major)
        .chain((0..12u8).map(Key::Minor))
}

/// Estimate a local key for every chord of the sequence.
///
/// Index 0 is pinned to the initial key; each later position scores all 24
/// candidates and applies the hysteresis rule.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for an empty chord sequence.
pub fn estimate_per_chord(
    chords: &[Vec<u8>],
    initial_key: Key,
    config: &KeyEstimatorConfig,
) -> Result<KeyEstimate, AnalysisError> {
    if chords.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "empty chord sequence".to_string(),
        ));
    }
    log::debug!(
        "estimating keys for {} chords, initial key {}",
        chords.len(),
        initial_key.name()
    );

    let normalized: Vec<Vec<u8>> = chords.iter().map(|c| normalize(c)).collect();

    let mut keys: Vec<Key> = Vec::with_capacity(normalized.len());
    let mut margins: Vec<f32> = Vec::with_capacity(normalized.len());
    let mut trace: Vec<TraceEntry> = Vec::new();

    for index in 0..normalized.len() {
        let prev_chosen = keys.last().copied();

        let mut scored: Vec<(Key, f32)> = Vec::with_capacity(24);
        for candidate in candidates() {
            let score = score_candidate(
                candidate,
                index,
                &normalized,
                prev_chosen,
                initial_key,
                config,
            );
            scored.push((candidate, score));
        }

        // Raw winner under the deterministic tie-break; strict comparison
        // keeps the earliest (major-first, lowest-tonic) candidate on ties.
        let (mut raw_best, mut best_score) = scored[0];
        for &(candidate, score) in &scored[1..] {
            if score > best_score {
                raw_best = candidate;
                best_score = score;
            }
        }
        let runner_up_score = scored
            .iter()
            .filter(|(k, _)| *k != raw_best)
            .map(|(_, s)| *s)
            .fold(f32::MIN, f32::max);
        let runner_up = scored
            .iter()
            .find(|(k, s)| *k != raw_best && *s == runner_up_score)
            .map(|(k, _)| *k)
            .unwrap_or(raw_best);

        let mut held = false;
        let chosen = if index == 0 || index < config.min_switch_index {
            if raw_best != initial_key {
                held = index != 0;
            }
            initial_key
        } else {
            let prev = prev_chosen.unwrap_or(initial_key);
            if raw_best == prev {
                prev
            } else {
                let prev_score = scored
                    .iter()
                    .find(|(k, _)| *k == prev)
                    .map(|(_, s)| *s)
                    .unwrap_or(0.0);
                if best_score > prev_score + config.switch_margin {
                    log::debug!(
                        "key switch at chord {}: {} -> {} ({:.1} vs {:.1})",
                        index,
                        prev.name(),
                        raw_best.name(),
                        best_score,
                        prev_score
                    );
                    raw_best
                } else {
                    held = true;
                    prev
                }
            }
        };

        let margin = if best_score > 0.0 {
            ((best_score - runner_up_score) / best_score).clamp(0.0, 1.0)
        } else {
            0.0
        };
        margins.push(margin);

        if config.keep_trace {
            trace.push(TraceEntry {
                index,
                chosen,
                raw_best,
                best_score,
                runner_up,
                runner_up_score,
                held_by_hysteresis: held,
                switched: prev_chosen.map(|p| p != chosen).unwrap_or(false),
            });
        }
        keys.push(chosen);
    }

    let segments = segments_from_keys(&keys, &margins);
    Ok(KeyEstimate {
        keys,
        segments,
        trace: if config.keep_trace { Some(trace) } else { None },
    })
}

/// Score one candidate key at one position.
fn score_candidate(
    candidate: Key,
    index: usize,
    chords: &[Vec<u8>],
    prev_chosen: Option<Key>,
    initial_key: Key,
    config: &KeyEstimatorConfig,
) -> f32 {
    let mut score = 0.0f32;

    // Windowed diatonic fit.
    let lo = index.saturating_sub(config.window_radius);
    let hi = (index + config.window_radius).min(chords.len() - 1);
    for chord in &chords[lo..=hi] {
        score += chord
            .iter()
            .filter(|&&pc| candidate.contains_pc(pc))
            .count() as f32;
    }

    if prev_chosen == Some(candidate) {
        score += config.prev_key_bias;
    }
    if candidate == initial_key {
        score += config.initial_key_bias;
    }

    let current = &chords[index];
    let dominant_root = mod12(candidate.tonic() as i32 + 7);
    if exact_match(
        current,
        &chord::pitch_classes(dominant_root, ChordQuality::DominantSeventh),
    ) {
        score += config.dominant_seventh_bonus;
    } else if exact_match(
        current,
        &chord::pitch_classes(dominant_root, ChordQuality::Major),
    ) {
        score += config.dominant_triad_bonus;
    }

    if index > 0
        && is_dominant_of(&chords[index - 1], candidate)
        && is_tonic_of(current, candidate)
    {
        score += config.cadence_bonus;
    }

    if let Some(prev_key) = prev_chosen {
        if prev_key.contains_all(current) && candidate.contains_all(current) {
            score += config.pivot_chord_bonus;
        }
    }

    score += secondary_dominant_bonus(current, candidate, config);

    if config.out_of_key_penalty_per_pc > 0.0 {
        let outside = current
            .iter()
            .filter(|&&pc| !candidate.contains_pc(pc))
            .count() as f32;
        score -= config.out_of_key_penalty_per_pc * outside;
    }

    score
}

/// True when the set is exactly the key's V triad or V7.
fn is_dominant_of(pcs: &[u8], key: Key) -> bool {
    let root = mod12(key.tonic() as i32 + 7);
    exact_match(pcs, &chord::pitch_classes(root, ChordQuality::Major))
        || exact_match(
            pcs,
            &chord::pitch_classes(root, ChordQuality::DominantSeventh),
        )
}

/// True when the set is exactly the key's tonic triad or tonic seventh.
fn is_tonic_of(pcs: &[u8], key: Key) -> bool {
    let tonic = key.tonic();
    let (triad, seventh) = if key.is_major() {
        (ChordQuality::Major, ChordQuality::MajorSeventh)
    } else {
        (ChordQuality::Minor, ChordQuality::MinorSeventh)
    };
    exact_match(pcs, &chord::pitch_classes(tonic, triad))
        || exact_match(pcs, &chord::pitch_classes(tonic, seventh))
}

/// Bonus when the set is some V/x or V7/x of a non-tonic diatonic degree.
fn secondary_dominant_bonus(pcs: &[u8], candidate: Key, config: &KeyEstimatorConfig) -> f32 {
    for degree in 2..=7u8 {
        let target = candidate.degree_pitch_class(degree);
        let root = mod12(target as i32 + 7);
        if exact_match(
            pcs,
            &chord::pitch_classes(root, ChordQuality::DominantSeventh),
        ) {
            return config.secondary_dominant_seventh_bonus;
        }
        if exact_match(pcs, &chord::pitch_classes(root, ChordQuality::Major)) {
            return config.secondary_dominant_triad_bonus;
        }
    }
    0.0
}
