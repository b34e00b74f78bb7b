//! Four-part voicing data

use serde::{Deserialize, Serialize};

use super::pitch::mod12;

/// A four-voice chord snapshot with absolute pitches (MIDI note numbers).
///
/// The expected voice order is soprano >= alto >= tenor >= bass. The order
/// is checked by the voice-leading diagnostics, not enforced here: a voicing
/// with crossed voices still analyzes, it just collects an error entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPartVoicing {
    /// Soprano pitch
    pub soprano: u8,
    /// Alto pitch
    pub alto: u8,
    /// Tenor pitch
    pub tenor: u8,
    /// Bass pitch
    pub bass: u8,
}

impl FourPartVoicing {
    /// Construct a voicing from soprano down to bass.
    pub fn new(soprano: u8, alto: u8, tenor: u8, bass: u8) -> Self {
        Self {
            soprano,
            alto,
            tenor,
            bass,
        }
    }

    /// Bass pitch class, used to identify inversions and to gate the
    /// augmented-sixth interpretation.
    pub fn bass_pc(&self) -> u8 {
        mod12(self.bass as i32)
    }

    /// Soprano pitch class, used by strict perfect-authentic-cadence checks
    /// and by the augmented-sixth soprano-suppression rule.
    pub fn soprano_pc(&self) -> u8 {
        mod12(self.soprano as i32)
    }

    /// True if soprano >= alto >= tenor >= bass.
    pub fn is_ordered(&self) -> bool {
        self.soprano >= self.alto && self.alto >= self.tenor && self.tenor >= self.bass
    }

    /// Voices from soprano down to bass.
    pub fn voices(&self) -> [u8; 4] {
        [self.soprano, self.alto, self.tenor, self.bass]
    }
}
