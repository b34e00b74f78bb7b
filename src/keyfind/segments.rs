//! Modulation segments
//!
//! Contiguous runs of equal per-chord keys, each annotated with a
//! confidence derived from the averaged normalized score margin
//! (best − second) / best across its chords.

use serde::{Deserialize, Serialize};

use crate::model::Key;

/// A contiguous run of chords assigned the same key
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeySegment {
    /// First chord index of the run (inclusive)
    pub start: usize,

    /// Last chord index of the run (inclusive)
    pub end: usize,

    /// Key of the run
    pub key: Key,

    /// Averaged normalized margin over the run (0.0-1.0)
    pub confidence: f32,
}

/// Collapse a per-chord key assignment into contiguous segments.
///
/// `margins` must hold one normalized margin per chord index.
pub fn segments_from_keys(keys: &[Key], margins: &[f32]) -> Vec<KeySegment> {
    debug_assert_eq!(keys.len(), margins.len());
    let mut segments = Vec::new();
    if keys.is_empty() {
        return segments;
    }

    let mut start = 0usize;
    for index in 1..=keys.len() {
        let run_ended = index == keys.len() || keys[index] != keys[start];
        if !run_ended {
            continue;
        }
        let end = index - 1;
        let span = (end - start + 1) as f32;
        let confidence = margins[start..=end].iter().sum::<f32>() / span;
        segments.push(KeySegment {
            start,
            end,
            key: keys[start],
            confidence: confidence.clamp(0.0, 1.0),
        });
        start = index;
    }
    segments
}
