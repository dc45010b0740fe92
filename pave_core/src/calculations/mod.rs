//! # Pavement Calculations
//!
//! This module contains all pavement calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, PaveError>` - Pure calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`required_sn`] - Required structural number from the AASHTO 1993 equation
//! - [`provided_sn`] - Structural number provided by a layer stack
//! - [`design_check`] - Provided vs. required comparison
//! - [`flexible_design`] - Complete flexible pavement design check

pub mod design_check;
pub mod flexible_design;
pub mod provided_sn;
pub mod required_sn;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use design_check::{evaluate_design, DesignCheck};
pub use flexible_design::{DesignResult, FlexibleDesignInput};
pub use provided_sn::{compute_provided_sn, LayerContribution, PavementLayer, ProvidedSn};
pub use required_sn::{solve_required_sn, solve_required_sn_with, DesignInputs, SolveReport, SolverSettings};

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// AASHTO 1993 flexible pavement design check
    FlexibleDesign(FlexibleDesignInput),
    // Future: RigidDesign(RigidDesignInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::FlexibleDesign(d) => &d.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::FlexibleDesign(_) => "FlexibleDesign",
        }
    }

    /// Run the calculation with the given solver settings
    pub fn evaluate(&self, settings: &SolverSettings) -> crate::errors::PaveResult<DesignResult> {
        match self {
            CalculationItem::FlexibleDesign(d) => flexible_design::calculate_with(d, settings),
        }
    }
}
