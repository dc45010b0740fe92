//! # Bracketed Root Finding
//!
//! Brent's method for a scalar function on an interval where it changes
//! sign. Each step takes an inverse quadratic interpolation or secant step
//! when that step stays well inside the bracket, and falls back to
//! bisection otherwise, so convergence is never slower than bisection.
//!
//! ## References
//!
//! - Brent, R. P. (1973), *Algorithms for Minimization without Derivatives*, Ch. 4
//! - Press et al., *Numerical Recipes*, 3rd ed., §9.3

use serde::{Deserialize, Serialize};

use crate::errors::{PaveError, PaveResult};

/// A converged root estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Root {
    /// Root location (full precision)
    pub x: f64,
    /// Function value at `x`
    pub fx: f64,
    /// Iterations used (0 when a bracket endpoint was already a root)
    pub iterations: u32,
}

/// Find a root of `f` in `[lo, hi]` with Brent's method.
///
/// # Arguments
/// * `f` - Function to solve, must be continuous on the bracket
/// * `lo`, `hi` - Bracket endpoints, `f(lo)` and `f(hi)` must differ in sign
/// * `tolerance` - Absolute tolerance on `x`
/// * `max_iterations` - Iteration cap
///
/// # Errors
/// * `NoRootInBracket` - `f(lo)` and `f(hi)` have the same sign (or either is NaN)
/// * `DidNotConverge` - iteration cap reached before the bracket shrank to `tolerance`
///
/// # Example
/// ```rust
/// use pave_core::equations::root_finding::brent;
///
/// let root = brent(|x| x * x - 2.0, 0.0, 2.0, 1e-10, 100).unwrap();
/// assert!((root.x - 2f64.sqrt()).abs() < 1e-9);
/// ```
pub fn brent<F>(mut f: F, lo: f64, hi: f64, tolerance: f64, max_iterations: u32) -> PaveResult<Root>
where
    F: FnMut(f64) -> f64,
{
    let mut a = lo;
    let mut b = hi;
    let mut fa = f(a);
    let mut fb = f(b);

    if fa.is_nan() || fb.is_nan() || fa * fb > 0.0 {
        return Err(PaveError::no_root_in_bracket(lo, hi, fa, fb));
    }
    if fa == 0.0 {
        return Ok(Root { x: a, fx: fa, iterations: 0 });
    }
    if fb == 0.0 {
        return Ok(Root { x: b, fx: fb, iterations: 0 });
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for iteration in 1..=max_iterations {
        // Keep the root between b and c
        if (fb > 0.0 && fc > 0.0) || (fb < 0.0 && fc < 0.0) {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        // b is the best estimate so far
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol1 = 2.0 * f64::EPSILON * b.abs() + 0.5 * tolerance;
        let xm = 0.5 * (c - b);

        tracing::trace!(iteration, x = b, fx = fb, half_width = xm.abs(), "brent step");

        if xm.abs() <= tol1 || fb == 0.0 {
            return Ok(Root { x: b, fx: fb, iterations: iteration });
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                // Secant
                (2.0 * xm * s, 1.0 - s)
            } else {
                // Inverse quadratic interpolation
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            let min1 = 3.0 * xm * q - (tol1 * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol1 { d } else { tol1.copysign(xm) };
        fb = f(b);
    }

    Err(PaveError::did_not_converge(max_iterations, b, (c - b).abs()))
}
