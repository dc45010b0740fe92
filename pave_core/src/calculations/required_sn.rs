//! # Required Structural Number
//!
//! Solves the AASHTO 1993 flexible pavement equation for the structural
//! number (SN) needed to carry the design traffic at the chosen reliability.
//!
//! The equation has no closed form in SN, so the residual
//! `capacity(SN) − log10(W18)` is driven to zero with Brent's method on a
//! fixed practical bracket. Targets whose root falls outside the bracket are
//! reported as [`PaveError::NoRootInBracket`] rather than extrapolated.
//!
//! ## Example
//!
//! ```rust
//! use pave_core::calculations::required_sn::{solve_required_sn, DesignInputs};
//!
//! let inputs = DesignInputs {
//!     design_esals: 5_000_000.0,
//!     reliability_zr: -1.282,
//!     overall_std_dev: 0.45,
//!     initial_serviceability: 4.2,
//!     terminal_serviceability: 2.5,
//!     subgrade_modulus_psi: 5000.0,
//! };
//!
//! let report = solve_required_sn(&inputs).unwrap();
//! assert!((report.sn_required - 5.137).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::flexible::design_residual;
use crate::equations::root_finding::brent;
use crate::errors::{PaveError, PaveResult};
use crate::materials::SubgradeSupport;
use crate::reliability::Reliability;
use crate::units::round_to;

/// Traffic, reliability, serviceability and subgrade inputs.
///
/// ## JSON Example
///
/// ```json
/// {
///   "design_esals": 5000000.0,
///   "reliability_zr": -1.282,
///   "overall_std_dev": 0.45,
///   "initial_serviceability": 4.2,
///   "terminal_serviceability": 2.5,
///   "subgrade_modulus_psi": 5000.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignInputs {
    /// Cumulative 18-kip ESALs over the design life (W18)
    pub design_esals: f64,

    /// Standard normal deviate for the design reliability (Zr, usually ≤ 0)
    pub reliability_zr: f64,

    /// Overall standard deviation (So, typically 0.40-0.50 for flexible)
    pub overall_std_dev: f64,

    /// Initial serviceability index (P0)
    pub initial_serviceability: f64,

    /// Terminal serviceability index (Pt)
    pub terminal_serviceability: f64,

    /// Subgrade resilient modulus (Mr) in psi
    pub subgrade_modulus_psi: f64,
}

impl DesignInputs {
    /// Build inputs from a tabulated reliability level and a subgrade
    /// specification (direct Mr or CBR).
    pub fn from_reliability(
        design_esals: f64,
        reliability: Reliability,
        overall_std_dev: f64,
        initial_serviceability: f64,
        terminal_serviceability: f64,
        subgrade: SubgradeSupport,
    ) -> PaveResult<Self> {
        let inputs = DesignInputs {
            design_esals,
            reliability_zr: reliability.zr(),
            overall_std_dev,
            initial_serviceability,
            terminal_serviceability,
            subgrade_modulus_psi: subgrade.resilient_modulus_psi()?,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Design serviceability loss ΔPSI = P0 − Pt
    pub fn delta_psi(&self) -> f64 {
        self.initial_serviceability - self.terminal_serviceability
    }

    /// Validate input parameters.
    pub fn validate(&self) -> PaveResult<()> {
        if !(self.design_esals.is_finite() && self.design_esals > 0.0) {
            return Err(PaveError::invalid_input(
                "design_esals",
                self.design_esals.to_string(),
                "Design ESALs must be positive",
            ));
        }
        if !self.reliability_zr.is_finite() {
            return Err(PaveError::invalid_input(
                "reliability_zr",
                self.reliability_zr.to_string(),
                "Zr must be a finite number",
            ));
        }
        if !(self.overall_std_dev.is_finite() && self.overall_std_dev > 0.0) {
            return Err(PaveError::invalid_input(
                "overall_std_dev",
                self.overall_std_dev.to_string(),
                "Overall standard deviation must be positive",
            ));
        }
        let delta_psi = self.delta_psi();
        if !(delta_psi.is_finite() && delta_psi > 0.0) {
            return Err(PaveError::invalid_input(
                "terminal_serviceability",
                self.terminal_serviceability.to_string(),
                format!(
                    "Terminal serviceability must be below initial serviceability ({})",
                    self.initial_serviceability
                ),
            ));
        }
        if !(self.subgrade_modulus_psi.is_finite() && self.subgrade_modulus_psi > 0.0) {
            return Err(PaveError::invalid_input(
                "subgrade_modulus_psi",
                self.subgrade_modulus_psi.to_string(),
                "Resilient modulus must be positive",
            ));
        }
        Ok(())
    }

    /// Design equation residual at a trial structural number
    pub fn residual(&self, sn: f64) -> f64 {
        design_residual(
            sn,
            self.design_esals,
            self.reliability_zr,
            self.overall_std_dev,
            self.delta_psi(),
            self.subgrade_modulus_psi,
        )
    }
}

/// Root-finder configuration.
///
/// The defaults reproduce the standard practical search range; changing the
/// bracket changes which targets are considered solvable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Lower end of the SN search bracket
    pub bracket_lo: f64,
    /// Upper end of the SN search bracket
    pub bracket_hi: f64,
    /// Absolute tolerance on SN
    pub tolerance: f64,
    /// Iteration cap
    pub max_iterations: u32,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            bracket_lo: 0.1,
            bracket_hi: 20.0,
            tolerance: 1e-6,
            max_iterations: 100,
        }
    }
}

impl SolverSettings {
    /// Validate solver configuration.
    pub fn validate(&self) -> PaveResult<()> {
        // SN = -1 is a pole of the equation
        if !(self.bracket_lo.is_finite() && self.bracket_lo > -1.0) {
            return Err(PaveError::invalid_input(
                "bracket_lo",
                self.bracket_lo.to_string(),
                "Bracket must stay above SN = -1",
            ));
        }
        if !(self.bracket_hi.is_finite() && self.bracket_hi > self.bracket_lo) {
            return Err(PaveError::invalid_input(
                "bracket_hi",
                self.bracket_hi.to_string(),
                "Upper bracket must exceed lower bracket",
            ));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(PaveError::invalid_input(
                "tolerance",
                self.tolerance.to_string(),
                "Tolerance must be positive",
            ));
        }
        if self.max_iterations == 0 {
            return Err(PaveError::invalid_input(
                "max_iterations",
                "0",
                "At least one iteration is required",
            ));
        }
        Ok(())
    }
}

/// Outcome of a required-SN solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Required structural number, rounded to 3 decimals for display
    pub sn_required: f64,
    /// Required structural number at full precision
    pub sn_exact: f64,
    /// Root-finder iterations used
    pub iterations: u32,
    /// Residual at `sn_exact` (log10 ESALs)
    pub final_residual: f64,
}

/// Solve for the required structural number with the default settings.
///
/// # Errors
///
/// * `InvalidInput` - an input invariant is violated (solve not attempted)
/// * `NoRootInBracket` - the required SN lies outside [0.1, 20.0]
/// * `DidNotConverge` - the iteration cap was exhausted
pub fn solve_required_sn(inputs: &DesignInputs) -> PaveResult<SolveReport> {
    solve_required_sn_with(inputs, &SolverSettings::default())
}

/// Solve for the required structural number with explicit solver settings.
pub fn solve_required_sn_with(inputs: &DesignInputs, settings: &SolverSettings) -> PaveResult<SolveReport> {
    inputs.validate()?;
    settings.validate()?;

    tracing::debug!(
        w18 = inputs.design_esals,
        zr = inputs.reliability_zr,
        so = inputs.overall_std_dev,
        delta_psi = inputs.delta_psi(),
        mr_psi = inputs.subgrade_modulus_psi,
        "solving for required SN"
    );

    let root = brent(
        |sn| inputs.residual(sn),
        settings.bracket_lo,
        settings.bracket_hi,
        settings.tolerance,
        settings.max_iterations,
    )
    .inspect_err(|err| tracing::warn!(error = %err, "required SN solve failed"))?;

    tracing::debug!(sn = root.x, iterations = root.iterations, residual = root.fx, "required SN converged");

    Ok(SolveReport {
        sn_required: round_to(root.x, 3),
        sn_exact: root.x,
        iterations: root.iterations,
        final_residual: root.fx,
    })
}

/// One point of the residual curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResidualSample {
    pub sn: f64,
    pub residual: f64,
}

/// Evaluate the design residual at each trial SN.
///
/// Useful for plotting the equation around the root or for presenting a
/// trial-and-error table alongside the solved value.
pub fn residual_curve(inputs: &DesignInputs, sn_values: &[f64]) -> PaveResult<Vec<ResidualSample>> {
    inputs.validate()?;
    Ok(sn_values
        .iter()
        .map(|&sn| ResidualSample {
            sn,
            residual: inputs.residual(sn),
        })
        .collect())
}

/// `count` evenly spaced SN values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Required SN for one traffic level of a sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsalSweepPoint {
    pub design_esals: f64,
    pub outcome: Result<SolveReport, PaveError>,
}

/// Solve the required SN for each traffic level, holding every other input
/// fixed. Each point is solved independently; a failure at one traffic level
/// does not affect the others.
pub fn esal_sweep(inputs: &DesignInputs, esals: &[f64], settings: &SolverSettings) -> Vec<EsalSweepPoint> {
    esals
        .iter()
        .map(|&design_esals| {
            let point_inputs = DesignInputs { design_esals, ..*inputs };
            EsalSweepPoint {
                design_esals,
                outcome: solve_required_sn_with(&point_inputs, settings),
            }
        })
        .collect()
}
