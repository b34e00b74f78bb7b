//! Local-key estimation
//!
//! Scores all 24 major/minor keys at each position of a chord sequence
//! using a sliding window of diatonic membership plus contextual bonuses,
//! with a hysteresis rule against single-chord flicker. Contiguous equal-key
//! runs are exposed as segments for modulation reporting.

pub mod estimator;
pub mod segments;

pub use estimator::{estimate_per_chord, KeyEstimate};
pub use segments::{segments_from_keys, KeySegment};

use serde::{Deserialize, Serialize};

use crate::model::Key;

/// Diagnostic snapshot for one chord index
///
/// Optional, for explainability and testing; correctness never depends on
/// the trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Chord index
    pub index: usize,

    /// Key chosen after hysteresis
    pub chosen: Key,

    /// Raw highest-scoring key before hysteresis
    pub raw_best: Key,

    /// Score of the raw winner
    pub best_score: f32,

    /// Strongest competitor to the chosen key
    pub runner_up: Key,

    /// Score of the runner-up
    pub runner_up_score: f32,

    /// True when the raw winner differed but the previous key was retained
    pub held_by_hysteresis: bool,

    /// True when the chosen key differs from the previous chord's key
    pub switched: bool,
}
