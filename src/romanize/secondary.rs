//! Secondary dominant and secondary leading-tone matchers
//!
//! A secondary chord tonicizes a diatonic degree other than the tonic.
//! Targets are searched in the preferred order {V, ii, vi, IV, iii, vii}.
//! The chord's root is identified uniquely from its interval content before
//! the target scan, so a major triad (one possible root) can never be
//! credited to more than one target.

use super::{diatonic_triad_quality, numeral_for, seventh_figure, triad_figure, Romanization};
use crate::config::HarmonyOptions;
use crate::model::chord;
use crate::model::label::{ChordLabel, Figure, RomanLabel, RomanNumeral};
use crate::model::pitch::{exact_match, mod12};
use crate::model::{ChordQuality, FourPartVoicing, Key};

/// Tonicization targets, as 1-based scale degrees, in preferred order.
const TARGET_ORDER: [u8; 6] = [5, 2, 6, 4, 3, 7];

/// The unique root for which the set equals the given quality's chord, if
/// any. Fully diminished sevenths are symmetric and have four roots; this
/// returns the lowest, so callers that care about the ambiguity must scan
/// targets instead.
fn find_root(pcs: &[u8], quality: ChordQuality) -> Option<u8> {
    (0..12u8).find(|&root| exact_match(pcs, &chord::pitch_classes(root, quality)))
}

/// Numeral used for a tonicized target: the target degree cased by its
/// diatonic triad quality.
fn target_numeral(key: Key, degree: u8) -> RomanNumeral {
    numeral_for(degree, diatonic_triad_quality(key.is_major(), degree))
}

/// Match a normalized pitch-class set as V/x or V7/x for a diatonic target.
pub fn match_secondary_dominant(
    pcs: &[u8],
    key: Key,
    _options: &HarmonyOptions,
    voicing: Option<&FourPartVoicing>,
) -> Option<Romanization> {
    let quality = match pcs.len() {
        3 => ChordQuality::Major,
        4 => ChordQuality::DominantSeventh,
        _ => return None,
    };
    let root = find_root(pcs, quality)?;
    for degree in TARGET_ORDER {
        let target_root = key.degree_pitch_class(degree);
        if root != mod12(target_root as i32 + 7) {
            continue;
        }
        let figure = match (voicing, quality) {
            (Some(v), ChordQuality::Major) => triad_figure(root, quality, v.bass_pc()),
            (Some(v), _) => seventh_figure(root, quality, v.bass_pc()),
            (None, _) => Figure::None,
        };
        let label = ChordLabel::Roman(RomanLabel {
            numeral: RomanNumeral::V,
            flat: false,
            quality,
            figure,
            secondary: Some(target_numeral(key, degree)),
        });
        return Some(Romanization::new(label, root, quality));
    }
    None
}

/// Match a normalized pitch-class set as vii°/x, viiø7/x, or vii°7/x for a
/// diatonic target (the leading tone a semitone below the target root).
///
/// A fully diminished seventh is enharmonically identical across four
/// targets a minor third apart; when
/// `prefer_secondary_leading_tone_target_v` is set, target V is probed
/// before the normal target order.
pub fn match_secondary_leading_tone(
    pcs: &[u8],
    key: Key,
    options: &HarmonyOptions,
    voicing: Option<&FourPartVoicing>,
) -> Option<Romanization> {
    let qualities: &[ChordQuality] = match pcs.len() {
        3 => &[ChordQuality::Diminished],
        4 => &[
            ChordQuality::HalfDiminishedSeventh,
            ChordQuality::DiminishedSeventh,
        ],
        _ => return None,
    };
    for &quality in qualities {
        let mut order: Vec<u8> = TARGET_ORDER.to_vec();
        if quality == ChordQuality::DiminishedSeventh
            && options.prefer_secondary_leading_tone_target_v
        {
            // TARGET_ORDER already leads with V; keep the explicit reorder so
            // the preference survives any future reordering of the table.
            order.retain(|&d| d != 5);
            order.insert(0, 5);
        }
        for degree in order {
            let target_root = key.degree_pitch_class(degree);
            let lt_root = mod12(target_root as i32 - 1);
            let expected = chord::pitch_classes(lt_root, quality);
            if !exact_match(pcs, &expected) {
                continue;
            }
            let figure = match (voicing, quality) {
                (Some(v), ChordQuality::Diminished) => triad_figure(lt_root, quality, v.bass_pc()),
                (Some(v), _) => seventh_figure(lt_root, quality, v.bass_pc()),
                (None, _) => Figure::None,
            };
            let label = ChordLabel::Roman(RomanLabel {
                numeral: RomanNumeral::vii,
                flat: false,
                quality,
                figure,
                secondary: Some(target_numeral(key, degree)),
            });
            return Some(Romanization::new(label, lt_root, quality));
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

    #[test]
    fn test_v_of_v_triad() {
        // D-F#-A in C major.
        let rz = match_secondary_dominant(&normalize(&[2, 6, 9]), Key::Major(0), &opts(), None)
            .expect("V/V should match");
        assert_eq!(rz.label.render(), "V/V");
    }

    #[test]
    fn test_v7_of_ii() {
        // A7 in C major tonicizes ii.
        let rz = match_secondary_dominant(&normalize(&[9, 1, 4, 7]), Key::Major(0), &opts(), None)
            .expect("V7/ii should match");
        assert_eq!(rz.label.render(), "V7/ii");
    }

    #[test]
    fn test_v7_of_vi() {
        // E7 in C major tonicizes vi.
        let rz = match_secondary_dominant(&normalize(&[4, 8, 11, 2]), Key::Major(0), &opts(), None)
            .expect("V7/vi should match");
        assert_eq!(rz.label.render(), "V7/vi");
    }

    #[test]
    fn test_diatonic_dominant_is_not_secondary() {
        // G major is V of C, not V of anything else; the tonic is never a
        // secondary target.
        assert!(
            match_secondary_dominant(&normalize(&[7, 11, 2]), Key::Major(0), &opts(), None)
                .is_none()
        );
    }

    #[test]
    fn test_leading_tone_seventh_of_v() {
        // F#-A-C-E in C major: viiø7/V.
        let rz =
            match_secondary_leading_tone(&normalize(&[6, 9, 0, 4]), Key::Major(0), &opts(), None)
                .expect("viiø7/V should match");
        assert_eq!(rz.label.render(), "viiø7/V");
    }

    #[test]
    fn test_fully_diminished_prefers_target_v() {
        // F#-A-C-Eb is vii°7 of G (target V in C major), but the same set is
        // also vii°7 of Bb, Db, and E; the option pins the reading to V.
        let rz =
            match_secondary_leading_tone(&normalize(&[6, 9, 0, 3]), Key::Major(0), &opts(), None)
                .expect("vii°7/V should match");
        assert_eq!(rz.label.render(), "vii°7/V");
    }

    #[test]
    fn test_leading_tone_triad_of_v_with_inversion() {
        // F#-A-C with A in the bass: vii°6/V.
        let voicing = FourPartVoicing::new(78, 72, 66, 57);
        let rz = match_secondary_leading_tone(
            &normalize(&[6, 9, 0]),
            Key::Major(0),
            &opts(),
            Some(&voicing),
        )
        .expect("vii°6/V should match");
        assert_eq!(rz.label.render(), "vii°6/V");
    }
}
