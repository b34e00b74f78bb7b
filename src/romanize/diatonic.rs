//! Diatonic triad and seventh matchers
//!
//! For each of the seven scale degrees, the expected chord is built from the
//! key's degree table and quality table, and the input set must equal it
//! exactly. {0,4,7,11} matches Imaj7 in C major; {0,4,7} alone does not.

use super::{
    diatonic_seventh_quality, diatonic_triad_quality, numeral_for, seventh_figure, triad_figure,
    Romanization,
};
use crate::config::HarmonyOptions;
use crate::model::chord;
use crate::model::label::{ChordLabel, Figure, RomanLabel};
use crate::model::pitch::exact_match;
use crate::model::{FourPartVoicing, Key};

/// Match a normalized pitch-class set against the seven diatonic triads.
pub fn match_diatonic_triad(
    pcs: &[u8],
    key: Key,
    _options: &HarmonyOptions,
    voicing: Option<&FourPartVoicing>,
) -> Option<Romanization> {
    for degree in 1..=7u8 {
        let root = key.degree_pitch_class(degree);
        let quality = diatonic_triad_quality(key.is_major(), degree);
        let expected = chord::pitch_classes(root, quality);
        if !exact_match(pcs, &expected) {
            continue;
        }
        let figure = voicing
            .map(|v| triad_figure(root, quality, v.bass_pc()))
            .unwrap_or(Figure::None);
        let label = ChordLabel::Roman(RomanLabel {
            numeral: numeral_for(degree, quality),
            flat: false,
            quality,
            figure,
            secondary: None,
        });
        return Some(Romanization::new(label, root, quality));
    }
    None
}

/// Match a normalized pitch-class set against the seven diatonic sevenths.
pub fn match_diatonic_seventh(
    pcs: &[u8],
    key: Key,
    _options: &HarmonyOptions,
    voicing: Option<&FourPartVoicing>,
) -> Option<Romanization> {
    for degree in 1..=7u8 {
        let root = key.degree_pitch_class(degree);
        let quality = diatonic_seventh_quality(key.is_major(), degree);
        let expected = chord::pitch_classes(root, quality);
        if !exact_match(pcs, &expected) {
            continue;
        }
        let figure = voicing
            .map(|v| seventh_figure(root, quality, v.bass_pc()))
            .unwrap_or(Figure::None);
        let label = ChordLabel::Roman(RomanLabel {
            numeral: numeral_for(degree, quality),
            flat: false,
            quality,
            figure,
            secondary: None,
        });
        return Some(Romanization::new(label, root, quality));
    }
    None
}
