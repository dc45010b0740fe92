//! # Materials Database
//!
//! Material definitions and property lookups for flexible pavement design.
//!
//! ## Material Types
//!
//! - **Layer materials**: Bound and unbound layers with AASHTO layer
//!   coefficients and drainage coefficient ranges
//! - **Subgrade**: Roadbed soil, specified by resilient modulus or CBR
//!
//! ## Example
//!
//! ```rust
//! use pave_core::materials::{PavementMaterial, SubgradeSupport};
//!
//! let props = PavementMaterial::CementTreatedBase.properties();
//! assert_eq!(props.layer_coefficient, 0.23);
//!
//! let subgrade = SubgradeSupport::Cbr { cbr_percent: 5.0 };
//! assert_eq!(subgrade.resilient_modulus_psi().unwrap(), 7500.0);
//! ```

pub mod layer_materials;
pub mod subgrade;

pub use layer_materials::{DrainageRange, MaterialProperties, PavementMaterial};
pub use subgrade::{mr_from_cbr, SubgradeSupport};
