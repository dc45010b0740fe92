//! Pavement Layer Materials
//!
//! Layer coefficients (aᵢ), drainage coefficient ranges (mᵢ) and elastic
//! moduli for the bound and unbound materials commonly used in flexible
//! pavement structures.

use serde::{Deserialize, Serialize};

use crate::errors::{PaveError, PaveResult};
use crate::units::{Mpa, Psi};

/// Pavement layer materials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PavementMaterial {
    /// Asphalt Concrete
    #[serde(rename = "AC")]
    AsphaltConcrete,
    /// Crushed Aggregate Base
    #[serde(rename = "CAB")]
    CrushedAggregateBase,
    /// Cement Treated Base
    #[serde(rename = "CTB")]
    CementTreatedBase,
    /// Granular Subbase
    #[serde(rename = "GSB")]
    GranularSubbase,
    /// Improved Subgrade
    #[serde(rename = "ISG")]
    ImprovedSubgrade,
    /// Lime Treated Subgrade
    #[serde(rename = "LTS")]
    LimeTreatedSubgrade,
    /// Emulsified Asphalt Mix
    #[serde(rename = "EAM")]
    EmulsifiedAsphaltMix,
}

/// Allowed drainage coefficient range for a material
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrainageRange {
    pub min: f64,
    pub max: f64,
}

impl DrainageRange {
    /// Check whether a drainage coefficient lies within this range (inclusive)
    pub fn contains(&self, m: f64) -> bool {
        m >= self.min - 1e-9 && m <= self.max + 1e-9
    }

    /// Midpoint of the range, used as the default mᵢ for lower layers
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Design properties of a pavement material
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Elastic modulus in MPa
    pub elastic_modulus_mpa: Mpa,
    /// Elastic modulus in psi
    pub elastic_modulus_psi: Psi,
    /// Structural layer coefficient aᵢ
    pub layer_coefficient: f64,
    /// Valid drainage coefficient range mᵢ
    pub drainage_range: DrainageRange,
}

const FREE_DRAINING: DrainageRange = DrainageRange { min: 1.0, max: 1.0 };
const UNBOUND: DrainageRange = DrainageRange { min: 0.80, max: 1.25 };

impl PavementMaterial {
    /// All material variants for UI selection
    pub const ALL: [PavementMaterial; 7] = [
        PavementMaterial::AsphaltConcrete,
        PavementMaterial::CrushedAggregateBase,
        PavementMaterial::CementTreatedBase,
        PavementMaterial::GranularSubbase,
        PavementMaterial::ImprovedSubgrade,
        PavementMaterial::LimeTreatedSubgrade,
        PavementMaterial::EmulsifiedAsphaltMix,
    ];

    /// Short code (e.g., "AC", "CTB")
    pub fn code(&self) -> &'static str {
        match self {
            PavementMaterial::AsphaltConcrete => "AC",
            PavementMaterial::CrushedAggregateBase => "CAB",
            PavementMaterial::CementTreatedBase => "CTB",
            PavementMaterial::GranularSubbase => "GSB",
            PavementMaterial::ImprovedSubgrade => "ISG",
            PavementMaterial::LimeTreatedSubgrade => "LTS",
            PavementMaterial::EmulsifiedAsphaltMix => "EAM",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> PaveResult<Self> {
        match s.trim().to_uppercase().replace([' ', '_'], "-").as_str() {
            "AC" | "ASPHALT-CONCRETE" => Ok(PavementMaterial::AsphaltConcrete),
            "CAB" | "CRUSHED-AGGREGATE-BASE" => Ok(PavementMaterial::CrushedAggregateBase),
            "CTB" | "CEMENT-TREATED-BASE" => Ok(PavementMaterial::CementTreatedBase),
            "GSB" | "GRANULAR-SUBBASE" => Ok(PavementMaterial::GranularSubbase),
            "ISG" | "IMPROVED-SUBGRADE" => Ok(PavementMaterial::ImprovedSubgrade),
            "LTS" | "LIME-TREATED-SUBGRADE" => Ok(PavementMaterial::LimeTreatedSubgrade),
            "EAM" | "EMULSIFIED-ASPHALT-MIX" => Ok(PavementMaterial::EmulsifiedAsphaltMix),
            _ => Err(PaveError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PavementMaterial::AsphaltConcrete => "Asphalt Concrete (AC)",
            PavementMaterial::CrushedAggregateBase => "Crushed Aggregate Base",
            PavementMaterial::CementTreatedBase => "Cement Treated Base (CTB)",
            PavementMaterial::GranularSubbase => "Granular Subbase",
            PavementMaterial::ImprovedSubgrade => "Improved Subgrade",
            PavementMaterial::LimeTreatedSubgrade => "Lime Treated Subgrade",
            PavementMaterial::EmulsifiedAsphaltMix => "Emulsified Asphalt Mix (EAM)",
        }
    }

    /// Get design properties for this material
    pub fn properties(&self) -> MaterialProperties {
        let (mpa, psi, a, drainage_range) = match self {
            PavementMaterial::AsphaltConcrete => (3100.0, 450_000.0, 0.44, FREE_DRAINING),
            PavementMaterial::CrushedAggregateBase => (207.0, 30_000.0, 0.14, UNBOUND),
            PavementMaterial::CementTreatedBase => (690.0, 100_000.0, 0.23, UNBOUND),
            PavementMaterial::GranularSubbase => (103.0, 15_000.0, 0.11, UNBOUND),
            PavementMaterial::ImprovedSubgrade => (69.0, 10_000.0, 0.08, UNBOUND),
            PavementMaterial::LimeTreatedSubgrade => (138.0, 20_000.0, 0.10, UNBOUND),
            PavementMaterial::EmulsifiedAsphaltMix => (2070.0, 300_000.0, 0.30, FREE_DRAINING),
        };
        MaterialProperties {
            elastic_modulus_mpa: Mpa(mpa),
            elastic_modulus_psi: Psi(psi),
            layer_coefficient: a,
            drainage_range,
        }
    }

    /// Shortcut for the structural layer coefficient aᵢ
    pub fn layer_coefficient(&self) -> f64 {
        self.properties().layer_coefficient
    }
}

impl std::fmt::Display for PavementMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_coefficients() {
        assert_eq!(PavementMaterial::AsphaltConcrete.layer_coefficient(), 0.44);
        assert_eq!(PavementMaterial::CementTreatedBase.layer_coefficient(), 0.23);
        assert_eq!(PavementMaterial::GranularSubbase.layer_coefficient(), 0.11);
    }

    #[test]
    fn test_drainage_ranges() {
        let ac = PavementMaterial::AsphaltConcrete.properties().drainage_range;
        assert!(ac.contains(1.0));
        assert!(!ac.contains(1.1));

        let cab = PavementMaterial::CrushedAggregateBase.properties().drainage_range;
        assert!(cab.contains(0.80));
        assert!(cab.contains(1.25));
        assert!(!cab.contains(1.3));
        assert!((cab.midpoint() - 1.025).abs() < 1e-12);
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(
            PavementMaterial::from_str_flexible("ctb").unwrap(),
            PavementMaterial::CementTreatedBase
        );
        assert_eq!(
            PavementMaterial::from_str_flexible("granular subbase").unwrap(),
            PavementMaterial::GranularSubbase
        );
        assert!(PavementMaterial::from_str_flexible("PCC").is_err());
    }

    #[test]
    fn test_codes_roundtrip() {
        for material in PavementMaterial::ALL {
            assert_eq!(PavementMaterial::from_str_flexible(material.code()).unwrap(), material);
        }
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PavementMaterial::EmulsifiedAsphaltMix).unwrap();
        assert_eq!(json, "\"EAM\"");
    }
}
