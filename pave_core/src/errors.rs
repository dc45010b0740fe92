//! # Error Types
//!
//! Structured error types for pave_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! None of these errors are transient. A failed solve is terminal for that
//! call and the caller decides how to present it.
//!
//! ## Example
//!
//! ```rust
//! use pave_core::errors::{PaveError, PaveResult};
//!
//! fn validate_esals(w18: f64) -> PaveResult<()> {
//!     if w18 <= 0.0 {
//!         return Err(PaveError::invalid_input(
//!             "design_esals",
//!             w18.to_string(),
//!             "Design ESALs must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_esals(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for pave_core operations
pub type PaveResult<T> = Result<T, PaveError>;

/// Structured error type for pavement calculations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PaveError {
    /// An input value is invalid (out of range, wrong sign, empty, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The design equation residual has the same sign at both bracket ends
    #[error(
        "No root in SN bracket [{lo}, {hi}]: residual({lo}) = {residual_lo:.4}, residual({hi}) = {residual_hi:.4}"
    )]
    NoRootInBracket {
        lo: f64,
        hi: f64,
        residual_lo: f64,
        residual_hi: f64,
    },

    /// The root finder used up its iteration budget
    #[error(
        "Solver did not converge after {iterations} iterations (last SN = {last_estimate:.6}, bracket width = {bracket_width:.3e})"
    )]
    DidNotConverge {
        iterations: u32,
        last_estimate: f64,
        bracket_width: f64,
    },

    /// Material code not found in the material database
    #[error("Material not found: {material}")]
    MaterialNotFound { material: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl PaveError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        PaveError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NoRootInBracket error
    pub fn no_root_in_bracket(lo: f64, hi: f64, residual_lo: f64, residual_hi: f64) -> Self {
        PaveError::NoRootInBracket {
            lo,
            hi,
            residual_lo,
            residual_hi,
        }
    }

    /// Create a DidNotConverge error
    pub fn did_not_converge(iterations: u32, last_estimate: f64, bracket_width: f64) -> Self {
        PaveError::DidNotConverge {
            iterations,
            last_estimate,
            bracket_width,
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material: impl Into<String>) -> Self {
        PaveError::MaterialNotFound {
            material: material.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        PaveError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry).
    ///
    /// Every calculation here is deterministic, so retrying the same call
    /// cannot change the outcome.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// True when the failure is the caller's input rather than the solver
    pub fn is_user_error(&self) -> bool {
        !matches!(self, PaveError::DidNotConverge { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PaveError::InvalidInput { .. } => "INVALID_INPUT",
            PaveError::NoRootInBracket { .. } => "NO_ROOT_IN_BRACKET",
            PaveError::DidNotConverge { .. } => "DID_NOT_CONVERGE",
            PaveError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            PaveError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for PaveError {
    fn from(err: serde_json::Error) -> Self {
        PaveError::serialization(err.to_string())
    }
}
