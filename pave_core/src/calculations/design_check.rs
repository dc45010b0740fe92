//! # Design Check
//!
//! Compares the provided structural number against the required one.
//! A structure passes when `SN_provided − SN_required ≥ 0`; an exact match
//! passes.

use serde::{Deserialize, Serialize};

use crate::units::round_to;

/// Pass/fail comparison of provided against required SN.
///
/// ## JSON Example
///
/// ```json
/// {
///   "passed": false,
///   "margin": -0.944,
///   "sn_required": 5.137,
///   "sn_provided": 4.193
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignCheck {
    /// True when the provided SN is at least the required SN
    pub passed: bool,
    /// Safety margin SN_provided − SN_required, rounded to 3 decimals
    pub margin: f64,
    pub sn_required: f64,
    pub sn_provided: f64,
}

impl DesignCheck {
    /// "PASS" or "FAIL"
    pub fn status(&self) -> &'static str {
        if self.passed { "PASS" } else { "FAIL" }
    }

    /// One-line comparison, e.g. `SN_provided (4.193) < SN_required (5.137)`
    pub fn summary(&self) -> String {
        format!(
            "SN_provided ({:.3}) {} SN_required ({:.3})",
            self.sn_provided,
            if self.passed { "≥" } else { "<" },
            self.sn_required
        )
    }
}

/// Compare provided against required structural number.
///
/// # Example
/// ```rust
/// use pave_core::calculations::design_check::evaluate_design;
///
/// let check = evaluate_design(5.137, 4.193);
/// assert!(!check.passed);
/// assert_eq!(check.margin, -0.944);
/// ```
pub fn evaluate_design(sn_required: f64, sn_provided: f64) -> DesignCheck {
    let margin = sn_provided - sn_required;
    DesignCheck {
        passed: margin >= 0.0,
        margin: round_to(margin, 3),
        sn_required,
        sn_provided,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failing_design() {
        let check = evaluate_design(5.137, 4.193);
        assert!(!check.passed);
        assert_eq!(check.status(), "FAIL");
        assert_eq!(check.summary(), "SN_provided (4.193) < SN_required (5.137)");
    }

    #[test]
    fn test_passing_design() {
        let check = evaluate_design(4.041, 4.193);
        assert!(check.passed);
        assert_eq!(check.margin, 0.152);
        assert!(check.summary().contains('≥'));
    }

    #[test]
    fn test_exact_match_passes() {
        let check = evaluate_design(4.5, 4.5);
        assert!(check.passed);
        assert_eq!(check.margin, 0.0);
    }

    #[test]
    fn test_pass_iff_non_negative_margin() {
        let pairs = [(3.0, 2.999), (2.999, 3.0), (0.0, 0.0), (10.0, 12.5), (7.25, 1.0)];
        for (required, provided) in pairs {
            let check = evaluate_design(required, provided);
            assert_eq!(check.passed, provided - required >= 0.0);
        }
    }
}
