//! Key representation and scale-degree tables

use serde::{Deserialize, Serialize};

use super::pitch::mod12;

/// Major-scale degree offsets from the tonic.
pub const MAJOR_SCALE: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Minor-key degree offsets from the tonic.
///
/// This is a harmonic-minor-derived table: degree 7 is the raised leading
/// tone (11 semitones above the tonic, not 10).
pub const MINOR_SCALE: [u8; 7] = [0, 2, 3, 5, 7, 8, 11];

/// Musical key: tonic pitch class plus mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Major key (0 = C, 1 = C#, ..., 11 = B)
    Major(u8),
    /// Minor key (0 = C, 1 = C#, ..., 11 = B)
    Minor(u8),
}

impl Key {
    /// Tonic pitch class in `0..=11`.
    pub fn tonic(&self) -> u8 {
        match self {
            Key::Major(pc) | Key::Minor(pc) => *pc % 12,
        }
    }

    /// True for major keys.
    pub fn is_major(&self) -> bool {
        matches!(self, Key::Major(_))
    }

    /// Get key name in musical notation (e.g., "C", "Am", "F#", "D#m")
    ///
    /// Major keys render as the note name only, minor keys with an "m"
    /// suffix.
    ///
    /// # Example
    ///
    /// ```
    /// use cadenza_harmony::model::Key;
    ///
    /// assert_eq!(Key::Major(0).name(), "C");
    /// assert_eq!(Key::Major(6).name(), "F#");
    /// assert_eq!(Key::Minor(9).name(), "Am");
    /// ```
    pub fn name(&self) -> String {
        let note_names = [
            "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
        ];
        match self {
            Key::Major(i) => note_names[*i as usize % 12].to_string(),
            Key::Minor(i) => format!("{}m", note_names[*i as usize % 12]),
        }
    }

    /// Scale-degree pitch classes, tonic first.
    ///
    /// Minor keys use the harmonic-minor-derived table (raised degree 7).
    pub fn scale_pitch_classes(&self) -> [u8; 7] {
        let table = if self.is_major() {
            MAJOR_SCALE
        } else {
            MINOR_SCALE
        };
        let tonic = self.tonic();
        table.map(|offset| mod12(tonic as i32 + offset as i32))
    }

    /// Pitch class of a 1-based scale degree.
    pub fn degree_pitch_class(&self, degree: u8) -> u8 {
        debug_assert!((1..=7).contains(&degree));
        self.scale_pitch_classes()[(degree - 1) as usize]
    }

    /// True if `pc` belongs to this key's scale table.
    pub fn contains_pc(&self, pc: u8) -> bool {
        self.scale_pitch_classes().contains(&(pc % 12))
    }

    /// True if every pitch class of `pcs` is diatonic to this key.
    pub fn contains_all(&self, pcs: &[u8]) -> bool {
        pcs.iter().all(|&pc| self.contains_pc(pc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_name() {
        assert_eq!(Key::Major(0).name(), "C");
        assert_eq!(Key::Major(7).name(), "G");
        assert_eq!(Key::Minor(9).name(), "Am");
        assert_eq!(Key::Minor(1).name(), "C#m");
    }

    #[test]
    fn test_major_scale_c() {
        assert_eq!(
            Key::Major(0).scale_pitch_classes(),
            [0, 2, 4, 5, 7, 9, 11]
        );
    }

    #[test]
    fn test_minor_scale_uses_raised_leading_tone() {
        // A minor: degree 7 is G#, not G.
        assert_eq!(
            Key::Minor(9).scale_pitch_classes(),
            [9, 11, 0, 2, 4, 5, 8]
        );
        assert!(Key::Minor(9).contains_pc(8));
        assert!(!Key::Minor(9).contains_pc(7));
    }

    #[test]
    fn test_degree_pitch_class() {
        assert_eq!(Key::Major(0).degree_pitch_class(5), 7);
        assert_eq!(Key::Minor(9).degree_pitch_class(5), 4);
    }
}
