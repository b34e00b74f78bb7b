//! Analysis and orchestration modules
//!
//! Combines the romanizer matchers into final analysis:
//! - The single-chord precedence chain
//! - Voice-leading diagnostics
//! - Cadence classification
//! - Progression orchestration
//! - Result types

pub mod cadence;
pub mod harmony;
pub mod progression;
pub mod result;
pub mod voice_leading;

pub use harmony::analyze;
pub use progression::{analyze_progression, analyze_progression_with_modulation, ChordInput};
pub use result::{
    CadenceInfo, CadenceType, HarmonicFunction, HarmonyAnalysisResult, ProgressionAnalysis,
    SixFourType,
};
