//! # pave_core - Flexible Pavement Calculation Engine
//!
//! `pave_core` is the computational heart of Pavestack, implementing the
//! AASHTO 1993 flexible pavement design procedure with a clean, LLM-friendly
//! API. All inputs and outputs are JSON-serializable, making it ideal for
//! integration with AI assistants via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Bounded**: The required SN is only searched in a fixed practical range
//!
//! ## Quick Start
//!
//! ```rust
//! use pave_core::calculations::{solve_required_sn, DesignInputs};
//! use pave_core::materials::SubgradeSupport;
//! use pave_core::reliability::Reliability;
//!
//! let inputs = DesignInputs::from_reliability(
//!     5_000_000.0,
//!     Reliability::R90,
//!     0.45,
//!     4.2,
//!     2.5,
//!     SubgradeSupport::ResilientModulus { mr_psi: 5000.0 },
//! )
//! .unwrap();
//!
//! let report = solve_required_sn(&inputs).unwrap();
//! println!("SN required = {:.3}", report.sn_required);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Required SN, provided SN and the design check
//! - [`equations`] - AASHTO 1993 equation terms and the root finder
//! - [`materials`] - Layer material database and subgrade support
//! - [`reliability`] - Reliability levels and Zr values
//! - [`project`] - Project container for multiple design cases
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod project;
pub mod reliability;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{PaveError, PaveResult};
pub use project::{Project, ProjectMetadata, ProjectSettings};
