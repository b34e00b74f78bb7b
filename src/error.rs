//! Error types for the harmony analysis engine

use std::fmt;

/// Errors that can occur at the sequence-level API
///
/// Per-chord harmonic analysis never errors: "no interpretation found" is a
/// normal outcome expressed in the result's `success` flag. Only misuse of
/// the sequence-level entry points (e.g., an empty chord list) is an error.
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Processing error during analysis
    ProcessingError(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
