//! # Cadenza Harmony
//!
//! A tonal-harmony analysis engine over pitch-class sets, providing roman
//! numerals, cadence classification, and local-key estimation.
//!
//! ## Features
//!
//! - **Chord romanization**: independent matchers for diatonic, mixture,
//!   secondary, augmented-sixth, and dominant-ninth categories, resolved by
//!   a fixed precedence chain
//! - **Cadence classification**: authentic/plagal/half/deceptive detection
//!   with perfect-authentic and 6-4 refinement
//! - **Key estimation**: windowed 24-key scoring with hysteresis and
//!   modulation segments
//!
//! ## Quick Start
//!
//! ```
//! use cadenza_harmony::{analyze_progression, CadenceType, ChordInput, HarmonyOptions, Key};
//!
//! // G major -> C major in C major: one authentic cadence.
//! let chords = vec![
//!     ChordInput::new(vec![7, 11, 2]),
//!     ChordInput::new(vec![0, 4, 7]),
//! ];
//! let analysis = analyze_progression(&chords, Key::Major(0), &HarmonyOptions::default())?;
//!
//! assert_eq!(analysis.per_chord[0].roman_text.as_deref(), Some("V"));
//! assert_eq!(analysis.cadences[0].cadence, CadenceType::Authentic);
//! # Ok::<(), cadenza_harmony::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The analysis pipeline follows this flow:
//!
//! ```text
//! Pitch-class sets -> Romanizer matchers -> Precedence chain -> Cadences -> Key estimation
//! ```
//!
//! All computation is synchronous and side-effect free; every analysis is a
//! pure function of its inputs plus an explicit options value.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod keyfind;
pub mod model;
pub mod romanize;

// Re-export main types
pub use analysis::harmony::analyze;
pub use analysis::progression::{
    analyze_progression, analyze_progression_with_modulation, ChordInput,
};
pub use analysis::result::{
    CadenceInfo, CadenceType, HarmonicFunction, HarmonyAnalysisResult, ProgressionAnalysis,
    SixFourType,
};
pub use config::{HarmonyOptions, KeyEstimatorConfig};
pub use error::AnalysisError;
pub use keyfind::{estimate_per_chord, KeyEstimate, KeySegment, TraceEntry};
pub use model::{ChordQuality, FourPartVoicing, Key, RomanNumeral};
