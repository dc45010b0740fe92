//! # Design Reliability
//!
//! Reliability levels and their standard normal deviates (Zr) per the
//! AASHTO 1993 Guide, Part I, Table 4.1.
//!
//! The reliability level is the probability that the pavement carries the
//! design traffic before reaching terminal serviceability. It enters the
//! design equation only through `Zr × So`.
//!
//! ## Example
//!
//! ```rust
//! use pave_core::reliability::Reliability;
//!
//! let r = Reliability::from_percent(90.0).unwrap();
//! assert_eq!(r.zr(), -1.282);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{PaveError, PaveResult};

/// Tabulated reliability level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reliability {
    R50,
    R60,
    R70,
    R75,
    R80,
    R85,
    R90,
    R91,
    R92,
    R93,
    R94,
    R95,
    R96,
    R97,
    R98,
    R99,
    R99_9,
}

impl Reliability {
    /// All tabulated levels, lowest to highest
    pub const ALL: [Reliability; 17] = [
        Reliability::R50,
        Reliability::R60,
        Reliability::R70,
        Reliability::R75,
        Reliability::R80,
        Reliability::R85,
        Reliability::R90,
        Reliability::R91,
        Reliability::R92,
        Reliability::R93,
        Reliability::R94,
        Reliability::R95,
        Reliability::R96,
        Reliability::R97,
        Reliability::R98,
        Reliability::R99,
        Reliability::R99_9,
    ];

    /// Reliability as a percentage (e.g., 90.0)
    pub fn percent(&self) -> f64 {
        match self {
            Reliability::R50 => 50.0,
            Reliability::R60 => 60.0,
            Reliability::R70 => 70.0,
            Reliability::R75 => 75.0,
            Reliability::R80 => 80.0,
            Reliability::R85 => 85.0,
            Reliability::R90 => 90.0,
            Reliability::R91 => 91.0,
            Reliability::R92 => 92.0,
            Reliability::R93 => 93.0,
            Reliability::R94 => 94.0,
            Reliability::R95 => 95.0,
            Reliability::R96 => 96.0,
            Reliability::R97 => 97.0,
            Reliability::R98 => 98.0,
            Reliability::R99 => 99.0,
            Reliability::R99_9 => 99.9,
        }
    }

    /// Standard normal deviate Zr
    pub fn zr(&self) -> f64 {
        match self {
            Reliability::R50 => 0.000,
            Reliability::R60 => -0.253,
            Reliability::R70 => -0.524,
            Reliability::R75 => -0.674,
            Reliability::R80 => -0.841,
            Reliability::R85 => -1.037,
            Reliability::R90 => -1.282,
            Reliability::R91 => -1.340,
            Reliability::R92 => -1.405,
            Reliability::R93 => -1.476,
            Reliability::R94 => -1.555,
            Reliability::R95 => -1.645,
            Reliability::R96 => -1.751,
            Reliability::R97 => -1.881,
            Reliability::R98 => -2.054,
            Reliability::R99 => -2.327,
            Reliability::R99_9 => -3.090,
        }
    }

    /// Look up a tabulated level by percentage.
    ///
    /// Only exact table entries are accepted; the table is not interpolated.
    pub fn from_percent(percent: f64) -> PaveResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| (r.percent() - percent).abs() < 1e-9)
            .ok_or_else(|| {
                PaveError::invalid_input(
                    "reliability",
                    percent.to_string(),
                    "Reliability must be one of the tabulated levels (50, 60, 70, 75, 80, 85, 90-99, 99.9)",
                )
            })
    }
}

impl Default for Reliability {
    fn default() -> Self {
        Reliability::R90
    }
}

impl std::fmt::Display for Reliability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_endpoints() {
        assert_eq!(Reliability::R50.zr(), 0.0);
        assert_eq!(Reliability::R99_9.zr(), -3.090);
    }

    #[test]
    fn test_zr_decreases_with_reliability() {
        for pair in Reliability::ALL.windows(2) {
            assert!(pair[1].percent() > pair[0].percent());
            assert!(pair[1].zr() < pair[0].zr());
        }
    }

    #[test]
    fn test_from_percent() {
        assert_eq!(Reliability::from_percent(95.0).unwrap(), Reliability::R95);
        assert_eq!(Reliability::from_percent(99.9).unwrap(), Reliability::R99_9);
    }

    #[test]
    fn test_untabulated_percent_rejected() {
        let err = Reliability::from_percent(87.5).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_display() {
        assert_eq!(Reliability::R90.to_string(), "90%");
        assert_eq!(Reliability::R99_9.to_string(), "99.9%");
    }
}
