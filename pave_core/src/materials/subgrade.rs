//! Subgrade Support
//!
//! The roadbed soil enters the design equation through its resilient
//! modulus Mr. When only a CBR test value is available, Mr is estimated
//! with the usual AASHTO correlations:
//!
//! ```text
//! Mr = 1500 × CBR           (CBR ≤ 10)
//! Mr = 2555 × CBR^0.64      (CBR > 10)
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{PaveError, PaveResult};
use crate::units::{Mpa, Psi};

/// CBR threshold between the linear and power-law correlations
pub const CBR_LINEAR_LIMIT: f64 = 10.0;

/// How the subgrade stiffness is specified
///
/// ## JSON Example
///
/// ```json
/// { "method": "Cbr", "cbr_percent": 5.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum SubgradeSupport {
    /// Resilient modulus entered directly
    ResilientModulus { mr_psi: f64 },
    /// Resilient modulus estimated from a CBR value
    Cbr { cbr_percent: f64 },
}

impl SubgradeSupport {
    /// Resolve to the resilient modulus Mr in psi
    pub fn resilient_modulus_psi(&self) -> PaveResult<f64> {
        match *self {
            SubgradeSupport::ResilientModulus { mr_psi } => {
                if mr_psi <= 0.0 || !mr_psi.is_finite() {
                    return Err(PaveError::invalid_input(
                        "mr_psi",
                        mr_psi.to_string(),
                        "Resilient modulus must be positive",
                    ));
                }
                Ok(mr_psi)
            }
            SubgradeSupport::Cbr { cbr_percent } => mr_from_cbr(cbr_percent),
        }
    }

    /// Resolve to the resilient modulus in MPa (for reporting)
    pub fn resilient_modulus_mpa(&self) -> PaveResult<Mpa> {
        Ok(Psi(self.resilient_modulus_psi()?).into())
    }
}

/// Estimate resilient modulus (psi) from CBR (%)
pub fn mr_from_cbr(cbr_percent: f64) -> PaveResult<f64> {
    if cbr_percent <= 0.0 || !cbr_percent.is_finite() {
        return Err(PaveError::invalid_input(
            "cbr_percent",
            cbr_percent.to_string(),
            "CBR must be positive",
        ));
    }
    if cbr_percent <= CBR_LINEAR_LIMIT {
        Ok(1500.0 * cbr_percent)
    } else {
        Ok(2555.0 * cbr_percent.powf(0.64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_range() {
        assert!((mr_from_cbr(5.0).unwrap() - 7500.0).abs() < 1e-9);
        assert!((mr_from_cbr(10.0).unwrap() - 15000.0).abs() < 1e-9);
    }

    #[test]
    fn test_power_law_range() {
        // 2555 × 15^0.64 ≈ 14457
        let mr = mr_from_cbr(15.0).unwrap();
        assert!((mr - 14457.37).abs() < 0.1);
    }

    #[test]
    fn test_invalid_cbr() {
        assert!(mr_from_cbr(0.0).is_err());
        assert!(mr_from_cbr(-3.0).is_err());
        assert!(mr_from_cbr(f64::NAN).is_err());
    }

    #[test]
    fn test_direct_modulus() {
        let support = SubgradeSupport::ResilientModulus { mr_psi: 5000.0 };
        assert_eq!(support.resilient_modulus_psi().unwrap(), 5000.0);
        assert!((support.resilient_modulus_mpa().unwrap().0 - 34.475).abs() < 1e-9);

        let bad = SubgradeSupport::ResilientModulus { mr_psi: 0.0 };
        assert!(bad.resilient_modulus_psi().is_err());
    }

    #[test]
    fn test_serialization() {
        let support = SubgradeSupport::Cbr { cbr_percent: 5.0 };
        let json = serde_json::to_string(&support).unwrap();
        assert_eq!(json, r#"{"method":"Cbr","cbr_percent":5.0}"#);
        let roundtrip: SubgradeSupport = serde_json::from_str(&json).unwrap();
        assert_eq!(support, roundtrip);
    }
}
