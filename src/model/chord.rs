//! Chord qualities and pitch-class-set construction

use serde::{Deserialize, Serialize};

use super::pitch::mod12;

/// Chord quality, determining the interval offsets from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    /// Major triad {0, 4, 7}
    Major,
    /// Minor triad {0, 3, 7}
    Minor,
    /// Diminished triad {0, 3, 6}
    Diminished,
    /// Augmented triad {0, 4, 8}
    Augmented,
    /// Dominant seventh {0, 4, 7, 10}
    DominantSeventh,
    /// Minor seventh {0, 3, 7, 10}
    MinorSeventh,
    /// Major seventh {0, 4, 7, 11}
    MajorSeventh,
    /// Half-diminished seventh {0, 3, 6, 10}
    HalfDiminishedSeventh,
    /// Fully diminished seventh {0, 3, 6, 9}
    DiminishedSeventh,
    /// Unknown quality (empty interval set)
    Unknown,
}

impl ChordQuality {
    /// Interval offsets from the root, in semitones.
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::DominantSeventh => &[0, 4, 7, 10],
            ChordQuality::MinorSeventh => &[0, 3, 7, 10],
            ChordQuality::MajorSeventh => &[0, 4, 7, 11],
            ChordQuality::HalfDiminishedSeventh => &[0, 3, 6, 10],
            ChordQuality::DiminishedSeventh => &[0, 3, 6, 9],
            ChordQuality::Unknown => &[],
        }
    }

    /// True for the seventh-chord qualities.
    pub fn is_seventh(&self) -> bool {
        self.intervals().len() == 4
    }
}

/// Pitch-class set of a chord built on `root` with the given quality.
///
/// Deterministic lookup, no failure modes; `Unknown` yields an empty set.
pub fn pitch_classes(root: u8, quality: ChordQuality) -> Vec<u8> {
    quality
        .intervals()
        .iter()
        .map(|&offset| mod12(root as i32 + offset as i32))
        .collect()
}

/// Chord tone at `offset` semitones above `root`.
pub fn chord_tone(root: u8, offset: u8) -> u8 {
    mod12(root as i32 + offset as i32)
}
