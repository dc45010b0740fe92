//! # Flexible Pavement Design
//!
//! Full AASHTO 1993 flexible pavement check for one design case:
//!
//! 1. Solve the design equation for the required SN
//! 2. Aggregate the layer stack into the provided SN
//! 3. Compare the two
//!
//! ## Assumptions
//!
//! - Single subgrade modulus (no seasonal damage weighting)
//! - Surface layer drainage coefficient fixed at 1.0
//! - No minimum layer thickness checks
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use pave_core::calculations::flexible_design::{calculate, FlexibleDesignInput};
//! use pave_core::calculations::provided_sn::PavementLayer;
//! use pave_core::calculations::required_sn::DesignInputs;
//! use pave_core::materials::PavementMaterial;
//!
//! let input = FlexibleDesignInput {
//!     label: "Main Road".to_string(),
//!     inputs: DesignInputs {
//!         design_esals: 5_000_000.0,
//!         reliability_zr: -1.282,
//!         overall_std_dev: 0.45,
//!         initial_serviceability: 4.2,
//!         terminal_serviceability: 2.5,
//!         subgrade_modulus_psi: 5000.0,
//!     },
//!     layers: vec![
//!         PavementLayer::from_material(PavementMaterial::AsphaltConcrete, 10.0, 1.0).unwrap(),
//!         PavementLayer::from_material(PavementMaterial::CementTreatedBase, 20.0, 1.0).unwrap(),
//!         PavementLayer::from_material(PavementMaterial::GranularSubbase, 15.0, 1.0).unwrap(),
//!     ],
//! };
//!
//! let result = calculate(&input).unwrap();
//!
//! println!("SN required: {:.3}", result.sn_required);
//! println!("SN provided: {:.3}", result.sn_provided);
//! println!("Margin: {:.3}", result.margin);
//! println!("Pass: {}", result.passes());
//! ```

use serde::{Deserialize, Serialize};

use super::design_check::{evaluate_design, DesignCheck};
use super::provided_sn::{compute_provided_sn, LayerContribution, PavementLayer};
use super::required_sn::{solve_required_sn_with, DesignInputs, SolveReport, SolverSettings};
use crate::equations::flexible::log10_allowable_esals;
use crate::errors::{PaveError, PaveResult};

/// Input for one flexible pavement design case.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Main Road",
///   "inputs": {
///     "design_esals": 5000000.0,
///     "reliability_zr": -1.282,
///     "overall_std_dev": 0.45,
///     "initial_serviceability": 4.2,
///     "terminal_serviceability": 2.5,
///     "subgrade_modulus_psi": 5000.0
///   },
///   "layers": [
///     { "material": "AC", "layer_coefficient": 0.44, "thickness_cm": 10.0, "drainage_coefficient": 1.0 },
///     { "material": "CTB", "layer_coefficient": 0.23, "thickness_cm": 20.0, "drainage_coefficient": 1.0 },
///     { "material": "GSB", "layer_coefficient": 0.11, "thickness_cm": 15.0, "drainage_coefficient": 1.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlexibleDesignInput {
    /// User label for this design case (e.g., "Main Road", "Ramp B")
    pub label: String,

    /// Traffic, reliability, serviceability and subgrade inputs
    pub inputs: DesignInputs,

    /// Layer stack, top to bottom
    pub layers: Vec<PavementLayer>,
}

impl FlexibleDesignInput {
    /// Validate inputs and every layer.
    pub fn validate(&self) -> PaveResult<()> {
        self.inputs.validate()?;
        if self.layers.is_empty() {
            return Err(PaveError::invalid_input("layers", "[]", "At least one layer is required"));
        }
        for (index, layer) in self.layers.iter().enumerate() {
            layer.validate(index)?;
        }
        Ok(())
    }
}

/// Result of a flexible pavement design check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    /// Required SN (3 decimals)
    pub sn_required: f64,

    /// Provided SN (3 decimals)
    pub sn_provided: f64,

    /// Per-layer breakdown of the provided SN
    pub layer_contributions: Vec<LayerContribution>,

    /// SN_provided − SN_required (3 decimals)
    pub margin: f64,

    /// True when the margin is non-negative
    pub passed: bool,

    /// Root-finder details for the required SN
    pub solve: SolveReport,

    /// ESALs the provided structure can carry at the design reliability
    pub allowable_esals: f64,
}

impl DesignResult {
    /// Check if the design passes
    pub fn passes(&self) -> bool {
        self.passed
    }

    /// Pass/fail comparison view of this result
    pub fn check(&self) -> DesignCheck {
        DesignCheck {
            passed: self.passed,
            margin: self.margin,
            sn_required: self.sn_required,
            sn_provided: self.sn_provided,
        }
    }
}

/// Run the design check with the default solver settings.
///
/// # Returns
///
/// * `Ok(DesignResult)` - Calculation results
/// * `Err(PaveError)` - If inputs are invalid or the required SN cannot be solved
pub fn calculate(input: &FlexibleDesignInput) -> PaveResult<DesignResult> {
    calculate_with(input, &SolverSettings::default())
}

/// Run the design check with explicit solver settings.
pub fn calculate_with(input: &FlexibleDesignInput, settings: &SolverSettings) -> PaveResult<DesignResult> {
    input.validate()?;

    let solve = solve_required_sn_with(&input.inputs, settings)?;
    let provided = compute_provided_sn(&input.layers)?;
    let check = evaluate_design(solve.sn_required, provided.sn_provided);

    let design = &input.inputs;
    let allowable_esals = 10f64.powf(log10_allowable_esals(
        provided.sn_exact,
        design.reliability_zr,
        design.overall_std_dev,
        design.delta_psi(),
        design.subgrade_modulus_psi,
    ));

    tracing::debug!(
        label = %input.label,
        sn_required = check.sn_required,
        sn_provided = check.sn_provided,
        margin = check.margin,
        passed = check.passed,
        "flexible design evaluated"
    );

    Ok(DesignResult {
        sn_required: check.sn_required,
        sn_provided: check.sn_provided,
        layer_contributions: provided.contributions,
        margin: check.margin,
        passed: check.passed,
        solve,
        allowable_esals,
    })
}
