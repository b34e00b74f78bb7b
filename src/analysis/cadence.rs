//! Cadence classification
//!
//! Two layers: `detect` is a plain function-table lookup over scale-degree
//! symbols; `detect_detailed` works on structured labels and a bounded
//! three-chord window, adding pre-dominant suppressions, the
//! perfect-authentic checks, and 6-4 classification. State carried between
//! transitions is strictly the two previous labels and voicings.

use crate::analysis::result::{
    function_of_numeral, CadenceInfo, CadenceType, HarmonicFunction, SixFourType,
};
use crate::config::HarmonyOptions;
use crate::model::chord::ChordQuality;
use crate::model::label::{ChordLabel, Figure, RomanNumeral};
use crate::model::pitch::mod12;
use crate::model::{FourPartVoicing, Key};

/// Table-lookup cadence classification over bare scale-degree symbols.
///
/// Dominant → tonic is Authentic, subdominant → tonic is Plagal, dominant →
/// submediant is Deceptive, any other motion from the dominant is Half.
pub fn detect(prev: RomanNumeral, curr: RomanNumeral, is_major: bool) -> CadenceType {
    let prev_function = function_of_numeral(prev);
    if curr.degree() == 1 {
        return match prev_function {
            HarmonicFunction::Dominant => CadenceType::Authentic,
            HarmonicFunction::Subdominant => CadenceType::Plagal,
            _ => CadenceType::None,
        };
    }
    if prev_function == HarmonicFunction::Dominant {
        // The submediant of the mode: vi in major, VI in minor.
        let submediant = curr.degree() == 6 && curr.is_major_case() != is_major;
        return if submediant {
            CadenceType::Deceptive
        } else {
            CadenceType::Half
        };
    }
    CadenceType::None
}

/// One transition of the sliding window handed to [`detect_detailed`].
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext<'a> {
    /// Index of the earlier chord of the pair
    pub index_from: usize,
    /// Key governing the transition
    pub key: Key,
    /// Label and voicing two chords back, if any
    pub prev2_label: Option<&'a ChordLabel>,
    /// Voicing two chords back
    pub prev2_voicing: Option<&'a FourPartVoicing>,
    /// Label of the earlier chord of the pair
    pub prev_label: &'a ChordLabel,
    /// Voicing of the earlier chord
    pub prev_voicing: Option<&'a FourPartVoicing>,
    /// Label of the later chord of the pair
    pub curr_label: &'a ChordLabel,
    /// Voicing of the later chord
    pub curr_voicing: Option<&'a FourPartVoicing>,
}

/// Detailed classification of one transition.
///
/// Returns `None` when the transition carries neither a cadence nor a 6-4
/// event.
pub fn detect_detailed(ctx: &TransitionContext, options: &HarmonyOptions) -> Option<CadenceInfo> {
    // A completed passing/pedal pattern around a second-inversion chord is
    // read as prolongation, not as a cadence, so it is classified first.
    if options.classify_non_cadential_six_four {
        if let Some(six_four) = classify_six_four_window(ctx) {
            log::debug!(
                "6-4 prolongation at index {}: {:?}",
                ctx.index_from,
                six_four
            );
            return Some(CadenceInfo {
                index_from: ctx.index_from,
                cadence: CadenceType::None,
                is_perfect_authentic: false,
                has_cadential_six_four: false,
                six_four_type: six_four,
            });
        }
    }

    let mut cadence = match (ctx.prev_label.base_numeral(), ctx.curr_label.base_numeral()) {
        (Some(prev), Some(curr)) => detect(prev, curr, ctx.key.is_major()),
        _ => CadenceType::None,
    };

    // Upgrade by structured-head comparison: any home-dominant shape (V7,
    // V9, V65, ...) moving to a tonic-degree chord is Authentic even when
    // the bare-symbol table missed it.
    if cadence != CadenceType::Authentic
        && is_home_dominant(ctx.prev_label)
        && is_tonic_degree(ctx.curr_label)
    {
        cadence = CadenceType::Authentic;
    }

    // Demotion: vii°/V (or viiø7/V, vii°7/V) into I looks dominant-to-tonic
    // by head comparison but is a pre-dominant resolving irregularly.
    if options.demote_secondary_leading_tone_cadence
        && is_secondary_leading_tone_of_v(ctx.prev_label)
        && is_tonic_degree(ctx.curr_label)
    {
        cadence = CadenceType::None;
    }

    // Half-cadence suppressions: pre-dominant prolongations are not
    // independent cadences.
    if cadence == CadenceType::Half && is_predominant_prolongation(ctx.prev_label, ctx.key) {
        cadence = CadenceType::None;
    }

    if cadence == CadenceType::None {
        return None;
    }

    let has_cadential_six_four = cadence == CadenceType::Authentic
        && ctx.prev2_label.map(is_tonic_six_four).unwrap_or(false);

    let is_perfect_authentic = cadence == CadenceType::Authentic
        && is_perfect_authentic(
            ctx.prev_label,
            ctx.curr_label,
            ctx.prev_voicing,
            ctx.curr_voicing,
            ctx.key,
            options,
        );

    Some(CadenceInfo {
        index_from: ctx.index_from,
        cadence,
        is_perfect_authentic,
        has_cadential_six_four,
        six_four_type: if has_cadential_six_four {
            SixFourType::Cadential
        } else {
            SixFourType::None
        },
    })
}

/// Home-key dominant shape: degree 5, unflattened, not secondary, with a
/// major or dominant-seventh quality (any figure, including the ninth).
pub(crate) fn is_home_dominant(label: &ChordLabel) -> bool {
    match label.as_roman() {
        Some(r) => {
            r.numeral.degree() == 5
                && !r.flat
                && r.secondary.is_none()
                && matches!(
                    r.quality,
                    ChordQuality::Major | ChordQuality::DominantSeventh
                )
        }
        None => false,
    }
}

/// Tonic-degree chord of the home key: degree 1, unflattened, not secondary.
fn is_tonic_degree(label: &ChordLabel) -> bool {
    match label.as_roman() {
        Some(r) => r.numeral.degree() == 1 && !r.flat && r.secondary.is_none(),
        None => false,
    }
}

/// Tonic chord in second inversion, the cadential 6-4 shape.
pub(crate) fn is_tonic_six_four(label: &ChordLabel) -> bool {
    match label.as_roman() {
        Some(r) => r.numeral.degree() == 1 && !r.flat && r.figure == Figure::SixFour,
        None => false,
    }
}

/// Secondary leading-tone chord tonicizing V.
fn is_secondary_leading_tone_of_v(label: &ChordLabel) -> bool {
    match label.as_roman() {
        Some(r) => {
            r.numeral.degree() == 7
                && r.secondary.map(|t| t.degree() == 5).unwrap_or(false)
        }
        None => false,
    }
}

/// Pre-dominant prolongations whose motion onto the dominant is not a half
/// cadence: a 6-4 shape, an augmented sixth, a mixture-seventh
/// pre-dominant, or a secondary leading-tone chord of V.
fn is_predominant_prolongation(label: &ChordLabel, key: Key) -> bool {
    match label {
        ChordLabel::AugmentedSixth(_) => true,
        ChordLabel::Roman(r) => {
            if r.figure == Figure::SixFour {
                return true;
            }
            if is_secondary_leading_tone_of_v(label) {
                return true;
            }
            // Mixture sevenths: bII7 / bVI7 / bVII7, and iv7 in a major key.
            r.quality.is_seventh()
                && (r.flat || (key.is_major() && r.numeral == RomanNumeral::iv))
        }
    }
}

/// Strict perfect-authentic checks, all option-gated.
fn is_perfect_authentic(
    prev: &ChordLabel,
    curr: &ChordLabel,
    prev_voicing: Option<&FourPartVoicing>,
    curr_voicing: Option<&FourPartVoicing>,
    key: Key,
    options: &HarmonyOptions,
) -> bool {
    let (Some(p), Some(c)) = (prev.as_roman(), curr.as_roman()) else {
        return false;
    };
    if p.numeral.degree() != 5 || p.flat || p.secondary.is_some() {
        return false;
    }
    if options.pac_disallow_dominant_extensions && p.figure == Figure::Nine {
        return false;
    }
    if options.pac_require_root_position_dominant && p.figure != Figure::None {
        return false;
    }
    if c.numeral.degree() != 1 || c.flat || c.secondary.is_some() || c.figure != Figure::None {
        return false;
    }
    match c.quality {
        ChordQuality::Major | ChordQuality::Minor => {}
        ChordQuality::MajorSeventh if options.pac_allow_tonic_major_seventh => {}
        _ => return false,
    }
    if options.pac_require_soprano_tonic {
        match curr_voicing {
            Some(v) if v.soprano_pc() == key.tonic() => {}
            _ => return false,
        }
    }
    if options.pac_require_soprano_leading_tone_resolution {
        if let (Some(pv), Some(cv)) = (prev_voicing, curr_voicing) {
            let leading_tone = mod12(key.tonic() as i32 + 11);
            if pv.soprano_pc() == leading_tone && cv.soprano_pc() != key.tonic() {
                return false;
            }
        }
    }
    true
}

/// Passing/pedal classification for a second-inversion chord sitting in the
/// middle of the three-chord window.
///
/// Passing: the outer chords share a harmony, one in root position and one
/// in first inversion, with a stepwise monotonic bass through the 6-4.
/// Pedal: the outer chords share a harmony and the bass holds the same
/// pitch class across all three chords.
fn classify_six_four_window(ctx: &TransitionContext) -> Option<SixFourType> {
    let mid = ctx.prev_label.as_roman()?;
    if mid.figure != Figure::SixFour {
        return None;
    }
    // The cadential shape (tonic 6-4) defers to the following dominant.
    if is_tonic_six_four(ctx.prev_label) {
        return None;
    }
    let outer_a = ctx.prev2_label?.as_roman()?;
    let outer_b = ctx.curr_label.as_roman()?;
    if outer_a.numeral != outer_b.numeral || outer_a.flat != outer_b.flat {
        return None;
    }
    let va = ctx.prev2_voicing?;
    let vm = ctx.prev_voicing?;
    let vb = ctx.curr_voicing?;

    if va.bass_pc() == vm.bass_pc() && vm.bass_pc() == vb.bass_pc() {
        return Some(SixFourType::Pedal);
    }

    let root_and_first_inversion = matches!(
        (outer_a.figure, outer_b.figure),
        (Figure::None, Figure::Six) | (Figure::Six, Figure::None)
    );
    let step_in = vm.bass as i32 - va.bass as i32;
    let step_out = vb.bass as i32 - vm.bass as i32;
    let stepwise = (1..=2).contains(&step_in.abs())
        && (1..=2).contains(&step_out.abs())
        && step_in.signum() == step_out.signum();
    if root_and_first_inversion && stepwise {
        return Some(SixFourType::Passing);
    }
    None
}
