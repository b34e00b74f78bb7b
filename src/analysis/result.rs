//! Analysis result types

use serde::{Deserialize, Serialize};

use crate::keyfind::segments::KeySegment;
use crate::keyfind::TraceEntry;
use crate::model::label::{ChordLabel, RomanNumeral};

/// Harmonic function of a chord within its key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HarmonicFunction {
    /// Tonic function (I, iii, vi)
    Tonic,
    /// Subdominant (pre-dominant) function (ii, IV, bII, bVI, augmented sixths)
    Subdominant,
    /// Dominant function (V, vii°, secondary chords)
    Dominant,
    /// No function assigned (unanalyzed chord)
    Unknown,
}

/// Function of a bare scale-degree symbol.
pub fn function_of_numeral(numeral: RomanNumeral) -> HarmonicFunction {
    match numeral.degree() {
        1 | 3 | 6 => HarmonicFunction::Tonic,
        2 | 4 => HarmonicFunction::Subdominant,
        _ => HarmonicFunction::Dominant,
    }
}

/// Function of a full structured label.
///
/// Secondary chords carry dominant function in the home key; borrowed
/// bVI/bVII are pre-dominant rather than tonic/dominant substitutes.
pub fn function_of_label(label: &ChordLabel) -> HarmonicFunction {
    match label {
        ChordLabel::AugmentedSixth(_) => HarmonicFunction::Subdominant,
        ChordLabel::Roman(r) => {
            if r.secondary.is_some() {
                return HarmonicFunction::Dominant;
            }
            match (r.numeral.degree(), r.flat) {
                (6, true) | (7, true) => HarmonicFunction::Subdominant,
                (degree, _) => function_of_numeral(RomanNumeral::from_degree(degree, true)),
            }
        }
    }
}

/// Result of analyzing a single chord snapshot
///
/// "No harmonic interpretation found" is a normal outcome expressed through
/// `success = false`; analysis never fails with an error for pitch-class or
/// voicing input. Voice-leading findings accompany a successful result as
/// `warnings` (non-blocking) or `errors` (structural) and never alter the
/// label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonyAnalysisResult {
    /// True if some harmonic category matched
    pub success: bool,

    /// Scale-degree symbol of the label, if the label has one (augmented
    /// sixths do not)
    pub roman: Option<RomanNumeral>,

    /// Harmonic function of the matched chord
    pub function: HarmonicFunction,

    /// Rendered display text of the label (e.g. "V65/ii", "Ger65")
    pub roman_text: Option<String>,

    /// Structured label; downstream passes inspect this instead of the text
    pub label: Option<ChordLabel>,

    /// Non-blocking diagnostic findings
    pub warnings: Vec<String>,

    /// Structural findings (e.g. voices out of order)
    pub errors: Vec<String>,
}

impl HarmonyAnalysisResult {
    /// An unanalyzed result with the given diagnostics.
    pub fn failure(warnings: Vec<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            roman: None,
            function: HarmonicFunction::Unknown,
            roman_text: None,
            label: None,
            warnings,
            errors,
        }
    }
}

/// Cadence classification of a chord-to-chord transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CadenceType {
    /// Dominant resolving to tonic
    Authentic,
    /// Subdominant resolving to tonic
    Plagal,
    /// Motion from the dominant that does not reach the tonic
    Half,
    /// Dominant resolving to the submediant
    Deceptive,
    /// No cadence
    None,
}

/// How a second-inversion chord is functioning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SixFourType {
    /// No 6-4 involvement
    None,
    /// Cadential 6-4: tonic 6-4 standing for the dominant
    Cadential,
    /// Passing 6-4: stepwise bass through the same harmony
    Passing,
    /// Pedal 6-4: static bass under a neighboring 6-4
    Pedal,
}

/// One detected cadence or 6-4 event on a transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CadenceInfo {
    /// Index of the earlier chord of the pair
    pub index_from: usize,

    /// Cadence classification
    pub cadence: CadenceType,

    /// True only for authentic cadences meeting the strict PAC checks
    pub is_perfect_authentic: bool,

    /// True when a cadential 6-4 immediately preceded the dominant
    pub has_cadential_six_four: bool,

    /// 6-4 role on this transition, if any
    pub six_four_type: SixFourType,
}

/// Complete result of a progression analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionAnalysis {
    /// One harmony result per input chord
    pub per_chord: Vec<HarmonyAnalysisResult>,

    /// Detected cadences and 6-4 events, in index order
    pub cadences: Vec<CadenceInfo>,

    /// Per-chord key assignment (modulation mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<crate::model::Key>>,

    /// Contiguous equal-key segments (modulation mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<KeySegment>>,

    /// Key-estimator diagnostic trace, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<TraceEntry>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::chord::ChordQuality;
    use crate::model::label::{Aug6Kind, Figure, RomanLabel};

    #[test]
    fn test_function_of_numeral() {
        assert_eq!(function_of_numeral(RomanNumeral::I), HarmonicFunction::Tonic);
        assert_eq!(
            function_of_numeral(RomanNumeral::IV),
            HarmonicFunction::Subdominant
        );
        assert_eq!(
            function_of_numeral(RomanNumeral::vii),
            HarmonicFunction::Dominant
        );
    }

    #[test]
    fn test_secondary_is_dominant_function() {
        let label = ChordLabel::Roman(RomanLabel {
            numeral: RomanNumeral::V,
            flat: false,
            quality: ChordQuality::DominantSeventh,
            figure: Figure::None,
            secondary: Some(RomanNumeral::ii),
        });
        assert_eq!(function_of_label(&label), HarmonicFunction::Dominant);
    }

    #[test]
    fn test_borrowed_submediant_is_predominant() {
        let label = ChordLabel::Roman(RomanLabel {
            numeral: RomanNumeral::VI,
            flat: true,
            quality: ChordQuality::Major,
            figure: Figure::None,
            secondary: None,
        });
        assert_eq!(function_of_label(&label), HarmonicFunction::Subdominant);
        assert_eq!(
            function_of_label(&ChordLabel::AugmentedSixth(Aug6Kind::German)),
            HarmonicFunction::Subdominant
        );
    }
}
