//! Pure value types for harmonic analysis
//!
//! This module contains all stateless data building blocks:
//! - Pitch-class arithmetic
//! - Keys and scale-degree tables
//! - Chord qualities and pitch-class-set construction
//! - Four-part voicings
//! - Structured roman-numeral labels

pub mod chord;
pub mod key;
pub mod label;
pub mod pitch;
pub mod voicing;

pub use chord::{pitch_classes, ChordQuality};
pub use key::Key;
pub use label::{Aug6Kind, ChordLabel, Figure, RomanLabel, RomanNumeral};
pub use voicing::FourPartVoicing;
