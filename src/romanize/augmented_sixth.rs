//! Augmented-sixth chord matcher
//!
//! The Italian, French, and German sixths are built on fixed offsets from
//! the tonic: {♭6, 1, ♯4}, plus {2} for the French and {♭3} for the German.
//! The German sixth is pitch-class-identical to the borrowed bVI7, so a
//! match requires a voicing with ♭6 in the bass; without that bass the set
//! is left to the mixture-seventh matcher.

use super::Romanization;
use crate::config::HarmonyOptions;
use crate::model::label::{Aug6Kind, ChordLabel};
use crate::model::pitch::{exact_match, mod12};
use crate::model::{ChordQuality, FourPartVoicing, Key};

/// Match a normalized pitch-class set as It6, Fr43, or Ger65.
///
/// Requires a voicing whose bass carries ♭6. When
/// `disallow_augmented_sixth_when_soprano_flat6` is set and the soprano also
/// carries ♭6 (the common bVI7 voicing), the match is declined.
pub fn match_augmented_sixth(
    pcs: &[u8],
    key: Key,
    options: &HarmonyOptions,
    voicing: Option<&FourPartVoicing>,
) -> Option<Romanization> {
    let voicing = voicing?;
    let tonic = key.tonic();
    let flat6 = mod12(tonic as i32 + 8);
    if voicing.bass_pc() != flat6 {
        return None;
    }
    if options.disallow_augmented_sixth_when_soprano_flat6 && voicing.soprano_pc() == flat6 {
        return None;
    }

    let sharp4 = mod12(tonic as i32 + 6);
    let second = mod12(tonic as i32 + 2);
    let flat3 = mod12(tonic as i32 + 3);

    let candidates = [
        (Aug6Kind::Italian, vec![flat6, tonic, sharp4]),
        (Aug6Kind::French, vec![flat6, tonic, second, sharp4]),
        (Aug6Kind::German, vec![flat6, tonic, flat3, sharp4]),
    ];
    for (kind, expected) in candidates {
        if exact_match(pcs, &expected) {
            let label = ChordLabel::AugmentedSixth(kind);
            return Some(Romanization::new(label, flat6, ChordQuality::Unknown));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::pitch::normalize;

    fn opts() -> HarmonyOptions {
        HarmonyOptions::default()
    }

    /// Ab in the bass, C in the soprano.
    fn german_voicing() -> FourPartVoicing {
        FourPartVoicing::new(72, 66, 63, 56)
    }

    #[test]
    fn test_german_sixth_with_flat6_bass() {
        let rz = match_augmented_sixth(
            &normalize(&[8, 0, 3, 6]),
            Key::Major(0),
            &opts(),
            Some(&german_voicing()),
        )
        .expect("Ger65 should match");
        assert_eq!(rz.label.render(), "Ger65");
    }

    #[test]
    fn test_requires_voicing() {
        assert!(
            match_augmented_sixth(&normalize(&[8, 0, 3, 6]), Key::Major(0), &opts(), None)
                .is_none()
        );
    }

    #[test]
    fn test_requires_flat6_in_bass() {
        // C in the bass: not an augmented-sixth voicing.
        let voicing = FourPartVoicing::new(75, 68, 66, 60);
        assert!(match_augmented_sixth(
            &normalize(&[8, 0, 3, 6]),
            Key::Major(0),
            &opts(),
            Some(&voicing)
        )
        .is_none());
    }

    #[test]
    fn test_soprano_flat6_suppression() {
        // Ab in both bass and soprano: declined under the default option.
        let voicing = FourPartVoicing::new(80, 72, 66, 56);
        assert!(match_augmented_sixth(
            &normalize(&[8, 0, 3, 6]),
            Key::Major(0),
            &opts(),
            Some(&voicing)
        )
        .is_none());

        let mut options = opts();
        options.disallow_augmented_sixth_when_soprano_flat6 = false;
        assert!(match_augmented_sixth(
            &normalize(&[8, 0, 3, 6]),
            Key::Major(0),
            &options,
            Some(&voicing)
        )
        .is_some());
    }

    #[test]
    fn test_italian_sixth_three_notes() {
        // Ab-C-F# in C major.
        let voicing = FourPartVoicing::new(72, 66, 60, 56);
        let rz = match_augmented_sixth(
            &normalize(&[8, 0, 6]),
            Key::Major(0),
            &opts(),
            Some(&voicing),
        )
        .expect("It6 should match");
        assert_eq!(rz.label.render(), "It6");
    }

    #[test]
    fn test_french_sixth() {
        // Ab-C-D-F# in C major.
        let voicing = FourPartVoicing::new(74, 66, 60, 56);
        let rz = match_augmented_sixth(
            &normalize(&[8, 0, 2, 6]),
            Key::Major(0),
            &opts(),
            Some(&voicing),
        )
        .expect("Fr43 should match");
        assert_eq!(rz.label.render(), "Fr43");
    }
}
