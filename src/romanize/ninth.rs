//! Dominant ninth matcher
//!
//! A 4-or-5-note superset check against {root, 3rd, 5th, 7th, 9th} of V.
//! Unlike the exact-match families this one tolerates an omitted fifth, but
//! {root, 3rd, 7th, 9th} is the floor: anything less reads as a plain
//! seventh chord and belongs to the other matchers.

use super::Romanization;
use crate::config::HarmonyOptions;
use crate::model::label::{ChordLabel, Figure, RomanLabel, RomanNumeral};
use crate::model::pitch::{mod12, subset_of};
use crate::model::{ChordQuality, FourPartVoicing, Key};

/// Match a normalized pitch-class set as the dominant ninth of the key.
///
/// The ninth is major (+14 above the root) in major keys and minor (+13) in
/// minor keys.
pub fn match_dominant_ninth(
    pcs: &[u8],
    key: Key,
    _options: &HarmonyOptions,
    _voicing: Option<&FourPartVoicing>,
) -> Option<Romanization> {
    if pcs.len() < 4 || pcs.len() > 5 {
        return None;
    }
    let root = mod12(key.tonic() as i32 + 7);
    let ninth_offset = if key.is_major() { 2 } else { 1 };
    let third = mod12(root as i32 + 4);
    let fifth = mod12(root as i32 + 7);
    let seventh = mod12(root as i32 + 10);
    let ninth = mod12(root as i32 + ninth_offset);

    let floor = [root, third, seventh, ninth];
    let full = [root, third, fifth, seventh, ninth];
    if !subset_of(&floor, pcs) || !subset_of(pcs, &full) {
        return None;
    }

    let label = ChordLabel::Roman(RomanLabel {
        numeral: RomanNumeral::V,
        flat: false,
        quality: ChordQuality::DominantSeventh,
        figure: Figure::Nine,
        secondary: None,
    });
    Some(Romanization::new(label, root, ChordQuality::DominantSeventh))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::pitch::normalize;

    fn opts() -> HarmonyOptions {
        HarmonyOptions::default()
    }

    #[test]
    fn test_full_five_note_ninth() {
        // G-B-D-F-A in C major.
        let rz = match_dominant_ninth(&normalize(&[7, 11, 2, 5, 9]), Key::Major(0), &opts(), None)
            .expect("V9 should match");
        assert_eq!(rz.label.render(), "V9");
    }

    #[test]
    fn test_ninth_with_omitted_fifth() {
        // G-B-F-A in C major.
        assert!(
            match_dominant_ninth(&normalize(&[7, 11, 5, 9]), Key::Major(0), &opts(), None).is_some()
        );
    }

    #[test]
    fn test_plain_seventh_is_not_a_ninth() {
        // G7 lacks the ninth.
        assert!(
            match_dominant_ninth(&normalize(&[7, 11, 2, 5]), Key::Major(0), &opts(), None).is_none()
        );
    }

    #[test]
    fn test_minor_key_uses_flat_ninth() {
        // E-G#-B-D-F in A minor: V9 with the minor ninth F.
        let rz = match_dominant_ninth(&normalize(&[4, 8, 11, 2, 5]), Key::Minor(9), &opts(), None)
            .expect("V9 should match in minor");
        assert_eq!(rz.label.render(), "V9");
        // The major ninth F# is not the minor-key ninth.
        assert!(
            match_dominant_ninth(&normalize(&[4, 8, 11, 2, 6]), Key::Minor(9), &opts(), None)
                .is_none()
        );
    }
}
