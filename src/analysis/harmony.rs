//! Single-chord harmony analysis
//!
//! Resolves the competing interpretations of one pitch-class set by running
//! the romanizer matchers in a fixed precedence order. The chain is an
//! explicit sequence of small strategy calls with early return; reordering a
//! step is a deliberate, visible edit, not a side effect of nested branches.

use crate::analysis::result::{function_of_label, HarmonyAnalysisResult};
use crate::analysis::voice_leading::{self, VoicingDiagnostics};
use crate::config::HarmonyOptions;
use crate::model::chord::ChordQuality;
use crate::model::pitch::normalize;
use crate::model::{FourPartVoicing, Key};
use crate::romanize::{
    match_augmented_sixth, match_diatonic_seventh, match_diatonic_triad, match_dominant_ninth,
    match_mixture_seventh, match_mixture_triad, match_secondary_dominant,
    match_secondary_leading_tone, Romanization,
};

/// Analyze a single chord snapshot.
///
/// Pure function of its inputs: the same pitch classes, key, options, and
/// voicings always yield the same result. Malformed harmonic input (fewer
/// than two distinct pitch classes) returns `success = false`, never an
/// error; voicing diagnostics are attached to the result in every case.
pub fn analyze(
    pcs: &[u8],
    key: Key,
    options: &HarmonyOptions,
    voicing: Option<&FourPartVoicing>,
    previous_voicing: Option<&FourPartVoicing>,
) -> HarmonyAnalysisResult {
    let norm = normalize(pcs);
    let diag = voicing
        .map(|v| voice_leading::diagnose(v, previous_voicing, options))
        .unwrap_or_default();

    if norm.len() < 2 {
        let mut result = HarmonyAnalysisResult::failure(diag.warnings, diag.errors);
        result
            .errors
            .push("fewer than two distinct pitch classes".to_string());
        return result;
    }

    match run_chain(&norm, key, options, voicing) {
        Some(rz) => finish(rz, diag),
        None => {
            log::debug!(
                "no harmonic interpretation for {:?} in {}",
                norm,
                key.name()
            );
            HarmonyAnalysisResult::failure(diag.warnings, diag.errors)
        }
    }
}

/// The precedence chain. Each step is try-else-continue; the first match
/// wins.
fn run_chain(
    norm: &[u8],
    key: Key,
    options: &HarmonyOptions,
    voicing: Option<&FourPartVoicing>,
) -> Option<Romanization> {
    // 1. Dominant ninth first: the highest-arity category must never be
    //    shadowed by a smaller-set matcher.
    if let Some(rz) = match_dominant_ninth(norm, key, options, voicing) {
        return Some(rz);
    }

    // 2. Four or more distinct classes prefer a seventh/tension reading.
    if norm.len() >= 4 {
        // Augmented-sixth override ahead of the diatonic seventh, so a
        // voiced Ger65/Fr43 is not mislabeled as a diatonic seventh. The
        // override is skipped when the mixture reading is preferred; the
        // ordered pair below decides instead.
        if !options.prefer_mixture_seventh_over_augmented_sixth {
            if let Some(rz) = match_augmented_sixth(norm, key, options, voicing) {
                return Some(rz);
            }
        }
        if let Some(rz) = match_diatonic_seventh(norm, key, options, voicing) {
            return Some(rz);
        }

        // 3. Mixture seventh vs augmented sixth, order under option control.
        if options.prefer_mixture_seventh_over_augmented_sixth {
            if let Some(rz) = match_mixture_seventh(norm, key, options, voicing) {
                return Some(rz);
            }
            if let Some(rz) = match_augmented_sixth(norm, key, options, voicing) {
                return Some(rz);
            }
        } else {
            if let Some(rz) = match_augmented_sixth(norm, key, options, voicing) {
                return Some(rz);
            }
            if let Some(rz) = match_mixture_seventh(norm, key, options, voicing) {
                return Some(rz);
            }
        }

        // 4. Mixture seventh without voicing: root-position label only.
        if let Some(rz) = match_mixture_seventh(norm, key, options, None) {
            return Some(rz);
        }
    }

    // 5. Augmented sixth without the four-class gate (covers It6).
    if let Some(rz) = match_augmented_sixth(norm, key, options, voicing) {
        return Some(rz);
    }

    // 6. Minor-key safeguard: a diatonic iiø7 always wins over a secondary
    //    reading of the same set.
    if !key.is_major() && options.prefer_diatonic_ii_half_dim_in_minor {
        if let Some(rz) = match_diatonic_seventh(norm, key, options, voicing) {
            if let Some(roman) = rz.label.as_roman() {
                if roman.numeral.degree() == 2
                    && roman.quality == ChordQuality::HalfDiminishedSeventh
                {
                    return Some(rz);
                }
            }
        }
    }

    // 7. Secondary sevenths. A diatonic-seventh reading of the same set was
    //    already preferred in step 2.
    if norm.len() >= 4 {
        if let Some(rz) = match_secondary_dominant(norm, key, options, voicing) {
            return Some(rz);
        }
        if let Some(rz) = match_secondary_leading_tone(norm, key, options, voicing) {
            return Some(rz);
        }
    }

    // 8. Triads, only for exactly three distinct classes.
    if norm.len() == 3 {
        if let Some(rz) = match_diatonic_triad(norm, key, options, voicing) {
            return Some(rz);
        }
        if let Some(rz) = match_mixture_triad(norm, key, options, voicing) {
            return Some(rz);
        }
        if let Some(rz) = match_secondary_dominant(norm, key, options, voicing) {
            return Some(rz);
        }
        if let Some(rz) = match_secondary_leading_tone(norm, key, options, voicing) {
            return Some(rz);
        }
    }

    // 9. Safety re-checks so no voiced four-note input falls through on
    //    branch ordering alone. Idempotent re-application of earlier steps.
    if let Some(rz) = match_dominant_ninth(norm, key, options, voicing) {
        return Some(rz);
    }
    if let Some(rz) = match_mixture_seventh(norm, key, options, voicing) {
        return Some(rz);
    }
    if let Some(rz) = match_mixture_seventh(norm, key, options, None) {
        return Some(rz);
    }
    if let Some(rz) = match_augmented_sixth(norm, key, options, voicing) {
        return Some(rz);
    }
    if norm.len() >= 4 {
        if let Some(rz) = match_secondary_dominant(norm, key, options, voicing) {
            return Some(rz);
        }
        if let Some(rz) = match_secondary_leading_tone(norm, key, options, voicing) {
            return Some(rz);
        }
    }

    None
}

fn finish(rz: Romanization, diag: VoicingDiagnostics) -> HarmonyAnalysisResult {
    let mut warnings = diag.warnings;
    if let Some(note) = rz.note {
        warnings.push(note);
    }
    HarmonyAnalysisResult {
        success: true,
        roman: rz.label.base_numeral(),
        function: function_of_label(&rz.label),
        roman_text: Some(rz.label.render()),
        label: Some(rz.label),
        warnings,
        errors: diag.errors,
    }
}
