//! Progression orchestration
//!
//! Feeds chords through the harmony analyzer left to right, threads the
//! previous voicings and labels into the cadence analyzer's three-chord
//! window, and optionally runs the key estimator first for key-aware
//! re-analysis. Cadential 6-4 relabeling is a deferred second pass over the
//! indexed raw results, never in-place back-patching during the scan.

use crate::analysis::cadence::{self, TransitionContext};
use crate::analysis::harmony;
use crate::analysis::result::{CadenceInfo, HarmonicFunction, HarmonyAnalysisResult, ProgressionAnalysis};
use crate::config::{HarmonyOptions, KeyEstimatorConfig};
use crate::error::AnalysisError;
use crate::keyfind::estimator::estimate_per_chord;
use crate::model::{FourPartVoicing, Key};

/// One chord of a progression, as delivered by the notation parser.
#[derive(Debug, Clone)]
pub struct ChordInput {
    /// Pitch classes of the chord (raw; normalization happens inside)
    pub pitch_classes: Vec<u8>,

    /// Optional four-part voicing for inversion and voice-leading analysis
    pub voicing: Option<FourPartVoicing>,
}

impl ChordInput {
    /// A chord with no voicing information.
    pub fn new(pitch_classes: Vec<u8>) -> Self {
        Self {
            pitch_classes,
            voicing: None,
        }
    }

    /// A chord with a voicing.
    pub fn voiced(pitch_classes: Vec<u8>, voicing: FourPartVoicing) -> Self {
        Self {
            pitch_classes,
            voicing: Some(voicing),
        }
    }
}

/// Analyze a progression under a single fixed key.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for an empty chord sequence.
pub fn analyze_progression(
    chords: &[ChordInput],
    key: Key,
    options: &HarmonyOptions,
) -> Result<ProgressionAnalysis, AnalysisError> {
    if chords.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "empty chord sequence".to_string(),
        ));
    }
    log::debug!(
        "analyzing progression of {} chords in {}",
        chords.len(),
        key.name()
    );
    let keys = vec![key; chords.len()];
    let (per_chord, cadences) = run_passes(chords, &keys, options);
    Ok(ProgressionAnalysis {
        per_chord,
        cadences,
        keys: None,
        segments: None,
        trace: None,
    })
}

/// Analyze a progression with per-chord key estimation.
///
/// The key estimator runs first over the raw pitch-class sets; every chord
/// is then re-analyzed under its estimated key, and contiguous equal-key
/// runs are reported as segments.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for an empty chord sequence.
pub fn analyze_progression_with_modulation(
    chords: &[ChordInput],
    initial_key: Key,
    options: &HarmonyOptions,
    estimator_config: &KeyEstimatorConfig,
) -> Result<ProgressionAnalysis, AnalysisError> {
    if chords.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "empty chord sequence".to_string(),
        ));
    }
    let pcs: Vec<Vec<u8>> = chords.iter().map(|c| c.pitch_classes.clone()).collect();
    let estimate = estimate_per_chord(&pcs, initial_key, estimator_config)?;
    let (per_chord, cadences) = run_passes(chords, &estimate.keys, options);
    Ok(ProgressionAnalysis {
        per_chord,
        cadences,
        keys: Some(estimate.keys),
        segments: Some(estimate.segments),
        trace: estimate.trace,
    })
}

/// The forward scan plus the two deferred passes.
fn run_passes(
    chords: &[ChordInput],
    keys: &[Key],
    options: &HarmonyOptions,
) -> (Vec<HarmonyAnalysisResult>, Vec<CadenceInfo>) {
    // Pass 1: raw per-chord results, previous voicing threaded forward.
    let mut per_chord: Vec<HarmonyAnalysisResult> = Vec::with_capacity(chords.len());
    for (index, chord) in chords.iter().enumerate() {
        let previous_voicing = index
            .checked_sub(1)
            .and_then(|prev| chords[prev].voicing.as_ref());
        per_chord.push(harmony::analyze(
            &chord.pitch_classes,
            keys[index],
            options,
            chord.voicing.as_ref(),
            previous_voicing,
        ));
    }

    // Pass 2: cadences over the sliding window.
    let mut cadences: Vec<CadenceInfo> = Vec::new();
    for index in 1..chords.len() {
        let (Some(prev_label), Some(curr_label)) =
            (per_chord[index - 1].label.as_ref(), per_chord[index].label.as_ref())
        else {
            continue;
        };
        let prev2_label = index
            .checked_sub(2)
            .and_then(|i| per_chord[i].label.as_ref());
        let prev2_voicing = index.checked_sub(2).and_then(|i| chords[i].voicing.as_ref());
        let ctx = TransitionContext {
            index_from: index - 1,
            key: keys[index],
            prev2_label,
            prev2_voicing,
            prev_label,
            prev_voicing: chords[index - 1].voicing.as_ref(),
            curr_label,
            curr_voicing: chords[index].voicing.as_ref(),
        };
        if let Some(info) = cadence::detect_detailed(&ctx, options) {
            cadences.push(info);
        }
    }

    // Pass 3: deferred cadential 6-4 commit. A tonic 6-4 directly before a
    // home-key dominant carries dominant function; the numeral text stays.
    for index in 0..chords.len().saturating_sub(1) {
        let is_cadential = matches!(
            (per_chord[index].label.as_ref(), per_chord[index + 1].label.as_ref()),
            (Some(six_four), Some(dominant))
                if cadence::is_tonic_six_four(six_four) && cadence::is_home_dominant(dominant)
        );
        if is_cadential {
            per_chord[index].function = HarmonicFunction::Dominant;
            per_chord[index]
                .warnings
                .push("cadential 6-4: second-inversion tonic standing for the dominant".to_string());
        }
    }

    (per_chord, cadences)
}
