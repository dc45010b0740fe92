//! # Pavement Design Equations
//!
//! This module contains the closed-form equations and numerical methods used
//! in calculations. Having equations in one place enables:
//! - Easy verification against the AASHTO 1993 Guide
//! - Term-by-term reporting of the design equation
//! - Consistent implementation across calculation types
//!
//! ## Modules
//!
//! - [`flexible`] - AASHTO 1993 flexible pavement design equation
//! - [`root_finding`] - Bracketed scalar root finding (Brent's method)
//!
//! ## References
//!
//! - AASHTO Guide for Design of Pavement Structures, 1993

pub mod flexible;
pub mod root_finding;

pub use flexible::{
    design_residual,
    log10_allowable_esals,
    reliability_term,
    serviceability_term,
    structural_term,
    subgrade_term,
};

pub use root_finding::{brent, Root};
