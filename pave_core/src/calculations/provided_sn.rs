//! # Provided Structural Number
//!
//! Aggregates a layer stack into the structural number it provides:
//!
//! ```text
//! SN = Σ aᵢ × Dᵢ × mᵢ
//! ```
//!
//! with Dᵢ in inches. The surface layer is not drained, so its drainage
//! coefficient is always taken as 1.0 whatever value is configured.
//!
//! ## Example
//!
//! ```rust
//! use pave_core::calculations::provided_sn::{compute_provided_sn, PavementLayer};
//! use pave_core::materials::PavementMaterial;
//!
//! let layers = vec![
//!     PavementLayer::from_material(PavementMaterial::AsphaltConcrete, 10.0, 1.0).unwrap(),
//!     PavementLayer::from_material(PavementMaterial::CementTreatedBase, 20.0, 1.0).unwrap(),
//!     PavementLayer::from_material(PavementMaterial::GranularSubbase, 15.0, 1.0).unwrap(),
//! ];
//!
//! let provided = compute_provided_sn(&layers).unwrap();
//! assert_eq!(provided.sn_provided, 4.193);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{PaveError, PaveResult};
use crate::materials::PavementMaterial;
use crate::units::{round_to, Centimeters, Inches};

/// Drainage coefficient applied to the surface layer
pub const SURFACE_DRAINAGE_COEFFICIENT: f64 = 1.0;

/// One layer of the pavement structure, listed top to bottom.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Base",
///   "material": "CTB",
///   "layer_coefficient": 0.23,
///   "thickness_cm": 20.0,
///   "drainage_coefficient": 1.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PavementLayer {
    /// Optional user label (e.g., "Surface", "Base")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Material from the database, if the layer was built from one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<PavementMaterial>,

    /// Structural layer coefficient aᵢ
    pub layer_coefficient: f64,

    /// Layer thickness in centimeters
    pub thickness_cm: f64,

    /// Configured drainage coefficient mᵢ
    pub drainage_coefficient: f64,
}

impl PavementLayer {
    /// Layer with an explicit layer coefficient
    pub fn new(layer_coefficient: f64, thickness_cm: f64, drainage_coefficient: f64) -> Self {
        PavementLayer {
            label: None,
            material: None,
            layer_coefficient,
            thickness_cm,
            drainage_coefficient,
        }
    }

    /// Layer whose coefficient comes from the material database.
    ///
    /// The drainage coefficient must lie within the material's range.
    pub fn from_material(material: PavementMaterial, thickness_cm: f64, drainage_coefficient: f64) -> PaveResult<Self> {
        let layer = PavementLayer {
            label: Some(material.code().to_string()),
            material: Some(material),
            layer_coefficient: material.layer_coefficient(),
            thickness_cm,
            drainage_coefficient,
        };
        layer.validate(0)?;
        Ok(layer)
    }

    /// Set the user label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Thickness converted to inches
    pub fn thickness_in(&self) -> f64 {
        Inches::from(Centimeters(self.thickness_cm)).0
    }

    /// Validate the layer; `index` is the 0-based position used in messages.
    pub fn validate(&self, index: usize) -> PaveResult<()> {
        let field = |name: &str| format!("layers[{index}].{name}");

        if !(self.layer_coefficient.is_finite() && self.layer_coefficient > 0.0) {
            return Err(PaveError::invalid_input(
                field("layer_coefficient"),
                self.layer_coefficient.to_string(),
                "Layer coefficient must be positive",
            ));
        }
        if !(self.thickness_cm.is_finite() && self.thickness_cm > 0.0) {
            return Err(PaveError::invalid_input(
                field("thickness_cm"),
                self.thickness_cm.to_string(),
                "Thickness must be positive",
            ));
        }
        if !(self.drainage_coefficient.is_finite() && self.drainage_coefficient > 0.0) {
            return Err(PaveError::invalid_input(
                field("drainage_coefficient"),
                self.drainage_coefficient.to_string(),
                "Drainage coefficient must be positive",
            ));
        }
        if let Some(material) = self.material {
            let range = material.properties().drainage_range;
            if !range.contains(self.drainage_coefficient) {
                return Err(PaveError::invalid_input(
                    field("drainage_coefficient"),
                    self.drainage_coefficient.to_string(),
                    format!(
                        "Drainage coefficient for {} must be between {:.2} and {:.2}",
                        material.code(),
                        range.min,
                        range.max
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// Contribution of one layer to the provided SN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerContribution {
    /// 1-based layer number, top to bottom
    pub layer_index: usize,
    pub label: Option<String>,
    pub layer_coefficient: f64,
    pub thickness_cm: f64,
    pub thickness_in: f64,
    /// Drainage coefficient actually used (1.0 for the surface layer)
    pub drainage_coefficient: f64,
    /// aᵢ × Dᵢ × mᵢ
    pub contribution: f64,
}

/// Provided structural number with its per-layer breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvidedSn {
    /// Provided SN rounded to 3 decimals
    pub sn_provided: f64,
    /// Provided SN at full precision
    pub sn_exact: f64,
    pub contributions: Vec<LayerContribution>,
}

impl ProvidedSn {
    /// Total structure thickness in centimeters
    pub fn total_thickness_cm(&self) -> f64 {
        self.contributions.iter().map(|c| c.thickness_cm).sum()
    }
}

/// Compute the structural number provided by a layer stack.
///
/// # Errors
///
/// * `InvalidInput` - empty stack, or any non-positive coefficient or thickness
pub fn compute_provided_sn(layers: &[PavementLayer]) -> PaveResult<ProvidedSn> {
    if layers.is_empty() {
        return Err(PaveError::invalid_input("layers", "[]", "At least one layer is required"));
    }
    for (index, layer) in layers.iter().enumerate() {
        layer.validate(index)?;
    }

    let contributions: Vec<LayerContribution> = layers
        .iter()
        .enumerate()
        .map(|(index, layer)| {
            let m = if index == 0 {
                SURFACE_DRAINAGE_COEFFICIENT
            } else {
                layer.drainage_coefficient
            };
            let thickness_in = layer.thickness_in();
            LayerContribution {
                layer_index: index + 1,
                label: layer.label.clone(),
                layer_coefficient: layer.layer_coefficient,
                thickness_cm: layer.thickness_cm,
                thickness_in,
                drainage_coefficient: m,
                contribution: layer.layer_coefficient * thickness_in * m,
            }
        })
        .collect();

    let sn_exact: f64 = contributions.iter().map(|c| c.contribution).sum();

    Ok(ProvidedSn {
        sn_provided: round_to(sn_exact, 3),
        sn_exact,
        contributions,
    })
}
