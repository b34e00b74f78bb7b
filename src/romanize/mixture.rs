//! Mixture (borrowed) chord matchers
//!
//! Chords borrowed from the parallel minor, matched in major keys only.
//! Roots are absolute offsets from the tonic, not scale degrees, so
//! inversion figures are computed from the candidate's own root.

use super::{seventh_figure, triad_figure, Romanization};
use crate::config::HarmonyOptions;
use crate::model::chord;
use crate::model::label::{ChordLabel, Figure, RomanLabel, RomanNumeral};
use crate::model::pitch::{exact_match, mod12};
use crate::model::{ChordQuality, FourPartVoicing, Key};

/// Borrowed-triad candidates: (tonic offset, quality, numeral, flat).
const MIXTURE_TRIADS: [(u8, ChordQuality, RomanNumeral, bool); 6] = [
    (0, ChordQuality::Minor, RomanNumeral::i, false),
    (5, ChordQuality::Minor, RomanNumeral::iv, false),
    (3, ChordQuality::Major, RomanNumeral::III, true),
    (8, ChordQuality::Major, RomanNumeral::VI, true),
    (10, ChordQuality::Major, RomanNumeral::VII, true),
    (1, ChordQuality::Major, RomanNumeral::II, true),
];

/// Mixture-seventh candidates: (tonic offset, quality, numeral, flat).
/// All dominant-seventh quality except iv7.
const MIXTURE_SEVENTHS: [(u8, ChordQuality, RomanNumeral, bool); 4] = [
    (5, ChordQuality::MinorSeventh, RomanNumeral::iv, false),
    (10, ChordQuality::DominantSeventh, RomanNumeral::VII, true),
    (1, ChordQuality::DominantSeventh, RomanNumeral::II, true),
    (8, ChordQuality::DominantSeventh, RomanNumeral::VI, true),
];

/// Match a normalized pitch-class set against the borrowed-triad candidates
/// {i, iv, bIII, bVI, bVII, bII}. Major keys only.
pub fn match_mixture_triad(
    pcs: &[u8],
    key: Key,
    options: &HarmonyOptions,
    voicing: Option<&FourPartVoicing>,
) -> Option<Romanization> {
    if !key.is_major() {
        return None;
    }
    let tonic = key.tonic();
    for (offset, quality, numeral, flat) in MIXTURE_TRIADS {
        let root = mod12(tonic as i32 + offset as i32);
        let expected = chord::pitch_classes(root, quality);
        if !exact_match(pcs, &expected) {
            continue;
        }
        let figure = voicing
            .map(|v| triad_figure(root, quality, v.bass_pc()))
            .unwrap_or(Figure::None);
        // Neapolitan enforcement: when enabled and a voicing is present,
        // bII is only accepted in first inversion.
        if numeral == RomanNumeral::II
            && options.neapolitan_requires_first_inversion
            && voicing.is_some()
            && figure != Figure::Six
        {
            continue;
        }
        let label = ChordLabel::Roman(RomanLabel {
            numeral,
            flat,
            quality,
            figure,
            secondary: None,
        });
        return Some(Romanization::new(label, root, quality));
    }
    None
}

/// Match a normalized pitch-class set against the mixture sevenths
/// {iv7, bVII7, bII7, bVI7}. Major keys only.
///
/// A match carries a resolution note that the analyzer surfaces as a
/// warning; bVI7 in particular is enharmonically identical to Ger65 and the
/// note names its typical resolution.
pub fn match_mixture_seventh(
    pcs: &[u8],
    key: Key,
    _options: &HarmonyOptions,
    voicing: Option<&FourPartVoicing>,
) -> Option<Romanization> {
    if !key.is_major() {
        return None;
    }
    let tonic = key.tonic();
    for (offset, quality, numeral, flat) in MIXTURE_SEVENTHS {
        let root = mod12(tonic as i32 + offset as i32);
        let expected = chord::pitch_classes(root, quality);
        if !exact_match(pcs, &expected) {
            continue;
        }
        let figure = voicing
            .map(|v| seventh_figure(root, quality, v.bass_pc()))
            .unwrap_or(Figure::None);
        let label = ChordLabel::Roman(RomanLabel {
            numeral,
            flat,
            quality,
            figure,
            secondary: None,
        });
        let mut rz = Romanization::new(label, root, quality);
        rz.note = Some(resolution_note(numeral, flat));
        return Some(rz);
    }
    None
}

/// Typical-resolution note for a matched mixture seventh.
fn resolution_note(numeral: RomanNumeral, flat: bool) -> String {
    match (numeral, flat) {
        (RomanNumeral::VI, true) => {
            "bVI7 is enharmonically equivalent to Ger65 and typically resolves to V".to_string()
        }
        (RomanNumeral::II, true) => "bII7 typically resolves to V or to I".to_string(),
        (RomanNumeral::VII, true) => "bVII7 typically resolves to I".to_string(),
        _ => "iv7 typically resolves to V".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::pitch::normalize;

    fn opts() -> HarmonyOptions {
        HarmonyOptions::default()
    }

    #[test]
    fn test_borrowed_minor_subdominant() {
        // F-Ab-C in C major.
        let rz = match_mixture_triad(&normalize(&[5, 8, 0]), Key::Major(0), &opts(), None)
            .expect("iv should match");
        assert_eq!(rz.label.render(), "iv");
    }

    #[test]
    fn test_neapolitan() {
        // Db-F-Ab in C major.
        let rz = match_mixture_triad(&normalize(&[1, 5, 8]), Key::Major(0), &opts(), None)
            .expect("bII should match");
        assert_eq!(rz.label.render(), "bII");
    }

    #[test]
    fn test_neapolitan_first_inversion_enforcement() {
        let mut options = opts();
        options.neapolitan_requires_first_inversion = true;
        // Root-position voicing (Db in the bass) is rejected...
        let root_pos = FourPartVoicing::new(65, 61, 56, 49);
        assert!(match_mixture_triad(
            &normalize(&[1, 5, 8]),
            Key::Major(0),
            &options,
            Some(&root_pos)
        )
        .is_none());
        // ...the first-inversion voicing (F in the bass) is accepted as bII6.
        let first_inv = FourPartVoicing::new(73, 68, 61, 53);
        let rz = match_mixture_triad(
            &normalize(&[1, 5, 8]),
            Key::Major(0),
            &options,
            Some(&first_inv),
        )
        .expect("bII6 should match");
        assert_eq!(rz.label.render(), "bII6");
    }

    #[test]
    fn test_mixture_rejected_in_minor_key() {
        assert!(match_mixture_triad(&normalize(&[5, 8, 0]), Key::Minor(0), &opts(), None).is_none());
    }

    #[test]
    fn test_flat_six_seventh_root_position() {
        // Ab-C-Eb-Gb in C major, no voicing: root-position bVI7.
        let rz = match_mixture_seventh(&normalize(&[8, 0, 3, 6]), Key::Major(0), &opts(), None)
            .expect("bVI7 should match");
        assert_eq!(rz.label.render(), "bVI7");
        let note = rz.note.expect("resolution note expected");
        assert!(note.contains("bVI7"));
        assert!(note.contains("resolves"));
    }

    #[test]
    fn test_flat_seven_seventh_with_inversion() {
        // Bb7 with D in the bass in C major.
        let voicing = FourPartVoicing::new(77, 70, 65, 62);
        let rz = match_mixture_seventh(
            &normalize(&[10, 2, 5, 8]),
            Key::Major(0),
            &opts(),
            Some(&voicing),
        )
        .expect("bVII65 should match");
        assert_eq!(rz.label.render(), "bVII65");
    }
}
