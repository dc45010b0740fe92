//! # AASHTO 1993 Flexible Pavement Design Equation
//!
//! ```text
//! log10(W18) = Zr·So + 9.36·log10(SN+1) − 0.20
//!            + log10(ΔPSI / (4.2 − 1.5)) / (0.4 + 1094 / (SN+1)^5.19)
//!            + 2.32·log10(Mr) − 8.07
//! ```
//!
//! The right-hand side is the (log) number of 18-kip ESALs a structure of
//! structural number SN can carry. Each term is exposed separately so the
//! step-by-step calculation can be reported.
//!
//! ## Notation
//!
//! - `W18` = Design 18-kip equivalent single axle loads
//! - `Zr` = Standard normal deviate for the design reliability
//! - `So` = Overall standard deviation
//! - `ΔPSI` = Design serviceability loss (P0 − Pt)
//! - `Mr` = Subgrade resilient modulus (psi)
//! - `SN` = Structural number
//!
//! ## References
//!
//! - AASHTO Guide for Design of Pavement Structures (1993), Part II, Figure 3.1

/// Serviceability index of the AASHO Road Test pavements when new
pub const AASHO_INITIAL_PSI: f64 = 4.2;

/// Serviceability index at which AASHO Road Test sections were considered failed
pub const AASHO_TERMINAL_PSI: f64 = 1.5;

/// Reliability term Zr·So
#[inline]
pub fn reliability_term(zr: f64, so: f64) -> f64 {
    zr * so
}

/// Structural term 9.36·log10(SN+1) − 0.20
#[inline]
pub fn structural_term(sn: f64) -> f64 {
    9.36 * (sn + 1.0).log10() - 0.20
}

/// Serviceability-loss term
///
/// # Formula
/// log10(ΔPSI / 2.7) / (0.4 + 1094 / (SN+1)^5.19)
#[inline]
pub fn serviceability_term(sn: f64, delta_psi: f64) -> f64 {
    let numerator = (delta_psi / (AASHO_INITIAL_PSI - AASHO_TERMINAL_PSI)).log10();
    let denominator = 0.4 + 1094.0 / (sn + 1.0).powf(5.19);
    numerator / denominator
}

/// Subgrade term 2.32·log10(Mr) − 8.07
#[inline]
pub fn subgrade_term(mr_psi: f64) -> f64 {
    2.32 * mr_psi.log10() - 8.07
}

/// log10 of the ESALs a structure with structural number `sn` can carry
pub fn log10_allowable_esals(sn: f64, zr: f64, so: f64, delta_psi: f64, mr_psi: f64) -> f64 {
    reliability_term(zr, so) + structural_term(sn) + serviceability_term(sn, delta_psi) + subgrade_term(mr_psi)
}

/// Design equation residual: capacity minus demand, both as log10(ESALs).
///
/// Zero at the required structural number, negative below it and positive
/// above it. Strictly increasing in `sn` for ΔPSI > 0 and Mr > 0.
///
/// # Example
/// ```rust
/// use pave_core::equations::flexible::design_residual;
///
/// let below = design_residual(3.0, 5.0e6, -1.282, 0.45, 1.7, 5000.0);
/// let above = design_residual(7.0, 5.0e6, -1.282, 0.45, 1.7, 5000.0);
/// assert!(below < 0.0 && above > 0.0);
/// ```
pub fn design_residual(sn: f64, w18: f64, zr: f64, so: f64, delta_psi: f64, mr_psi: f64) -> f64 {
    log10_allowable_esals(sn, zr, so, delta_psi, mr_psi) - w18.log10()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_pavement_terms() {
        // SN = 5, ΔPSI = 1.7, Mr = 5000 psi
        assert!((structural_term(5.0) - (9.36 * 6f64.log10() - 0.20)).abs() < 1e-12);
        assert!((subgrade_term(5000.0) - 0.5116).abs() < 1e-3);
        // numerator log10(1.7/2.7) ≈ -0.2009, denominator 0.4 + 1094/6^5.19 ≈ 0.5001
        assert!((serviceability_term(5.0, 1.7) + 0.4018).abs() < 1e-3);
    }

    #[test]
    fn test_no_serviceability_penalty_at_reference_loss() {
        // ΔPSI = 4.2 - 1.5 makes the numerator log10(1) = 0
        let reference_loss = AASHO_INITIAL_PSI - AASHO_TERMINAL_PSI;
        assert_eq!(serviceability_term(4.0, reference_loss), 0.0);
    }

    #[test]
    fn test_residual_is_capacity_minus_demand() {
        let cap = log10_allowable_esals(4.0, -1.282, 0.45, 1.7, 5000.0);
        let r = design_residual(4.0, 1.0e6, -1.282, 0.45, 1.7, 5000.0);
        assert!((cap - 6.0 - r).abs() < 1e-12);
    }

    #[test]
    fn test_residual_increases_with_sn() {
        for &dpsi in &[0.5, 1.7, 2.7, 3.5] {
            let mut prev = design_residual(0.1, 5.0e6, -1.282, 0.45, dpsi, 5000.0);
            let mut sn = 0.1;
            while sn < 20.0 {
                sn += 0.05;
                let r = design_residual(sn, 5.0e6, -1.282, 0.45, dpsi, 5000.0);
                assert!(r > prev, "residual not increasing at SN = {sn}, ΔPSI = {dpsi}");
                prev = r;
            }
        }
    }
}
