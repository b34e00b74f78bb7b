//! Chord romanization matchers
//!
//! A library of independent, pure matcher functions, one family per file:
//! - Diatonic triads and sevenths
//! - Mixture (borrowed) triads and sevenths
//! - Secondary dominants and secondary leading-tone chords
//! - Augmented-sixth chords
//! - The dominant ninth
//!
//! Every matcher has the same shape: it takes a normalized pitch-class set,
//! a key, the options, and an optional voicing, and returns either
//! `Some(Romanization)` or `None`. "No match" is never an error; a set is
//! unanalyzable only if every matcher declines it. Matches require exact
//! set equality against the expected chord, never subset or superset.

pub mod augmented_sixth;
pub mod diatonic;
pub mod mixture;
pub mod ninth;
pub mod secondary;

pub use augmented_sixth::match_augmented_sixth;
pub use diatonic::{match_diatonic_seventh, match_diatonic_triad};
pub use mixture::{match_mixture_seventh, match_mixture_triad};
pub use ninth::match_dominant_ninth;
pub use secondary::{match_secondary_dominant, match_secondary_leading_tone};

use crate::model::chord::{chord_tone, ChordQuality};
use crate::model::label::{ChordLabel, Figure, RomanNumeral};

/// A successful romanization: the structured label plus the matched chord's
/// root and quality.
#[derive(Debug, Clone, PartialEq)]
pub struct Romanization {
    /// Structured harmonic label
    pub label: ChordLabel,
    /// Root pitch class of the matched chord
    pub root: u8,
    /// Quality of the matched chord
    pub quality: ChordQuality,
    /// Optional analyst note attached as a warning by the analyzer
    /// (e.g. the typical resolution of a mixture seventh)
    pub note: Option<String>,
}

impl Romanization {
    pub(crate) fn new(label: ChordLabel, root: u8, quality: ChordQuality) -> Self {
        Self {
            label,
            root,
            quality,
            note: None,
        }
    }
}

/// Diatonic triad quality per 1-based scale degree.
///
/// Major: I ii iii IV V vi vii°. Minor derives literally from the
/// harmonic-minor degree table: i ii° III+ iv V VI vii°.
pub(crate) fn diatonic_triad_quality(key_is_major: bool, degree: u8) -> ChordQuality {
    if key_is_major {
        match degree {
            1 | 4 | 5 => ChordQuality::Major,
            2 | 3 | 6 => ChordQuality::Minor,
            _ => ChordQuality::Diminished,
        }
    } else {
        match degree {
            1 | 4 => ChordQuality::Minor,
            2 | 7 => ChordQuality::Diminished,
            3 => ChordQuality::Augmented,
            _ => ChordQuality::Major,
        }
    }
}

/// Diatonic seventh quality per 1-based scale degree.
///
/// Major: Imaj7 ii7 iii7 IVmaj7 V7 vi7 viiø7. Minor (the closed quality
/// enumeration has no minor-major seventh): i7 iiø7 IIImaj7 iv7 V7 VImaj7
/// vii°7.
pub(crate) fn diatonic_seventh_quality(key_is_major: bool, degree: u8) -> ChordQuality {
    if key_is_major {
        match degree {
            1 | 4 => ChordQuality::MajorSeventh,
            2 | 3 | 6 => ChordQuality::MinorSeventh,
            5 => ChordQuality::DominantSeventh,
            _ => ChordQuality::HalfDiminishedSeventh,
        }
    } else {
        match degree {
            1 | 4 => ChordQuality::MinorSeventh,
            2 => ChordQuality::HalfDiminishedSeventh,
            3 | 6 => ChordQuality::MajorSeventh,
            5 => ChordQuality::DominantSeventh,
            _ => ChordQuality::DiminishedSeventh,
        }
    }
}

/// Case of a numeral for a given chord quality.
pub(crate) fn quality_is_major_case(quality: ChordQuality) -> bool {
    matches!(
        quality,
        ChordQuality::Major
            | ChordQuality::Augmented
            | ChordQuality::DominantSeventh
            | ChordQuality::MajorSeventh
    )
}

/// Numeral for a 1-based degree, cased by quality.
pub(crate) fn numeral_for(degree: u8, quality: ChordQuality) -> RomanNumeral {
    RomanNumeral::from_degree(degree, quality_is_major_case(quality))
}

/// Inversion figure for a triad, identified by which chord member's pitch
/// class the bass carries. A bass outside the chord yields no figure.
pub(crate) fn triad_figure(root: u8, quality: ChordQuality, bass_pc: u8) -> Figure {
    let intervals = quality.intervals();
    if intervals.len() != 3 {
        return Figure::None;
    }
    if bass_pc == chord_tone(root, intervals[1]) {
        Figure::Six
    } else if bass_pc == chord_tone(root, intervals[2]) {
        Figure::SixFour
    } else {
        Figure::None
    }
}

/// Inversion figure for a seventh chord, identified by which chord member's
/// pitch class the bass carries (root → root-position "7" rendering,
/// third → 65, fifth → 43, seventh → 42).
pub(crate) fn seventh_figure(root: u8, quality: ChordQuality, bass_pc: u8) -> Figure {
    let intervals = quality.intervals();
    if intervals.len() != 4 {
        return Figure::None;
    }
    if bass_pc == chord_tone(root, intervals[1]) {
        Figure::SixFive
    } else if bass_pc == chord_tone(root, intervals[2]) {
        Figure::FourThree
    } else if bass_pc == chord_tone(root, intervals[3]) {
        Figure::FourTwo
    } else {
        Figure::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_key_triad_qualities() {
        assert_eq!(diatonic_triad_quality(true, 1), ChordQuality::Major);
        assert_eq!(diatonic_triad_quality(true, 2), ChordQuality::Minor);
        assert_eq!(diatonic_triad_quality(true, 7), ChordQuality::Diminished);
    }

    #[test]
    fn test_minor_key_triad_qualities_harmonic_table() {
        assert_eq!(diatonic_triad_quality(false, 3), ChordQuality::Augmented);
        assert_eq!(diatonic_triad_quality(false, 5), ChordQuality::Major);
        assert_eq!(diatonic_triad_quality(false, 7), ChordQuality::Diminished);
    }

    #[test]
    fn test_seventh_qualities() {
        assert_eq!(diatonic_seventh_quality(true, 5), ChordQuality::DominantSeventh);
        assert_eq!(
            diatonic_seventh_quality(true, 7),
            ChordQuality::HalfDiminishedSeventh
        );
        assert_eq!(
            diatonic_seventh_quality(false, 7),
            ChordQuality::DiminishedSeventh
        );
    }

    #[test]
    fn test_seventh_figure_by_bass_member() {
        // G7: root 7, third 11, fifth 2, seventh 5.
        assert_eq!(
            seventh_figure(7, ChordQuality::DominantSeventh, 7),
            Figure::None
        );
        assert_eq!(
            seventh_figure(7, ChordQuality::DominantSeventh, 11),
            Figure::SixFive
        );
        assert_eq!(
            seventh_figure(7, ChordQuality::DominantSeventh, 2),
            Figure::FourThree
        );
        assert_eq!(
            seventh_figure(7, ChordQuality::DominantSeventh, 5),
            Figure::FourTwo
        );
    }
}
