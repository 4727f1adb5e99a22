//! # Simply-Supported Beam Formulas
//!
//! Equations for a simply-supported span under a full-length uniform load,
//! plus the unit-load influence line and the closed-form virtual-work
//! integrals the deflection solver is built on. The beam has a pin at the
//! left support (x=0) and a roller at the right support (x=L).
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `x` = Position along the beam from the left support
//! - `ξ` = Integration variable along the span
//! - `w` = Uniform load intensity (force per unit length)
//! - `M` = Bending moment from the real load
//! - `M̄` = Bending moment from a unit load placed at `x`
//! - `V` = Shear force
//! - `δ` = Deflection
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Moment: Positive causes tension on bottom (sagging)
//! - Shear: Positive when left side up relative to right
//! - Deflection: Positive downward
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - Structural Analysis by R.C. Hibbeler, Ch. 9 (virtual work)

// =============================================================================
// UNIFORM LOAD FORMULAS
// =============================================================================

/// Reactions for uniform load w over full span L
///
/// ```text
///    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
///    ═════════════════
///    △                △
///   R1  ←─────L─────→ R2
/// ```
///
/// # Formula
/// R1 = R2 = wL/2
#[inline]
pub fn uniform_load_reactions(w: f64, l: f64) -> (f64, f64) {
    let r = w * l / 2.0;
    (r, r)
}

/// Shear at position x for uniform load w over full span
///
/// # Formula
/// V(x) = wL/2 - wx
///
/// - At x=0: V = +wL/2
/// - At x=L/2: V = 0
/// - At x=L: V = -wL/2
#[inline]
pub fn uniform_load_shear(w: f64, l: f64, x: f64) -> f64 {
    w * l / 2.0 - w * x
}

/// Moment at position x for uniform load w over full span
///
/// # Formula (Roark's Table 8.1, Case 2a)
/// M(x) = wLx/2 - wx²/2
///
/// Maximum moment at midspan:
/// M_max = wL²/8  at x = L/2
#[inline]
pub fn uniform_load_moment(w: f64, l: f64, x: f64) -> f64 {
    w * l * x / 2.0 - w * x * x / 2.0
}

/// Maximum moment for uniform load
///
/// # Formula
/// M_max = wL²/8
#[inline]
pub fn uniform_load_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}

/// Deflection at position x for uniform load w on a prismatic beam
///
/// # Formula (Roark's Table 8.1, Case 2a)
/// δ(x) = wx(L³ - 2Lx² + x³) / (24EI)
///
/// # Note
/// Only valid for constant EI; the slab solver uses the virtual-work integrals
/// below so it can vary I along the span.
#[inline]
pub fn uniform_load_deflection(w: f64, l: f64, x: f64, e: f64, i: f64) -> f64 {
    w * x * (l.powi(3) - 2.0 * l * x * x + x.powi(3)) / (24.0 * e * i)
}

// =============================================================================
// UNIT LOAD (VIRTUAL WORK)
// =============================================================================

/// Moment at ξ due to a unit load at x (triangular influence line)
///
/// ```text
///              1
///              ↓
///    ──────────┬──────────
///    △         x          △
/// ```
///
/// # Formula
/// - M̄(ξ) = ξ(L-x)/L     for ξ ≤ x
/// - M̄(ξ) = x(L-ξ)/L     for ξ > x
#[inline]
pub fn unit_load_moment(l: f64, x: f64, xi: f64) -> f64 {
    if xi <= x {
        xi * (l - x) / l
    } else {
        x * (l - xi) / l
    }
}

/// Antiderivative of ξ·M(ξ)·2/w left of the unit load: Lξ³/3 - ξ⁴/4
#[inline]
fn left_antiderivative(l: f64, xi: f64) -> f64 {
    l * xi.powi(3) / 3.0 - xi.powi(4) / 4.0
}

/// Antiderivative of (L-ξ)·M(ξ)·2/w right of the unit load:
/// L²ξ²/2 - 2Lξ³/3 + ξ⁴/4
#[inline]
fn right_antiderivative(l: f64, xi: f64) -> f64 {
    l * l * xi * xi / 2.0 - 2.0 * l * xi.powi(3) / 3.0 + xi.powi(4) / 4.0
}

/// Virtual-work integral ∫ M(ξ)·M̄(ξ) dξ over `[start, end]` for a uniform
/// load w and a unit load at x.
///
/// The integrand is a cubic on each side of x, so the interval is split at x
/// and integrated exactly. Dividing by the (constant) EI of the interval gives
/// that interval's share of the deflection at x.
///
/// # Formulas
/// - ξ ≤ x: M·M̄ = w(L-x)/(2L) · (Lξ² - ξ³)
/// - ξ ≥ x: M·M̄ = wx/(2L) · (L²ξ - 2Lξ² + ξ³)
///
/// An empty or reversed interval contributes zero.
pub fn uniform_load_virtual_work(w: f64, l: f64, x: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return 0.0;
    }

    let mut total = 0.0;

    let left_end = end.min(x);
    if left_end > start {
        let k = w * (l - x) / (2.0 * l);
        total += k * (left_antiderivative(l, left_end) - left_antiderivative(l, start));
    }

    let right_start = start.max(x);
    if end > right_start {
        let k = w * x / (2.0 * l);
        total += k * (right_antiderivative(l, end) - right_antiderivative(l, right_start));
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Composite Simpson's rule, used to check the closed forms
    fn simpson<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, n: usize) -> f64 {
        let h = (b - a) / n as f64;
        let mut sum = f(a) + f(b);
        for k in 1..n {
            let weight = if k % 2 == 1 { 4.0 } else { 2.0 };
            sum += weight * f(a + k as f64 * h);
        }
        sum * h / 3.0
    }

    #[test]
    fn test_uniform_moment_endpoints() {
        let (w, l) = (10602.0, 9.4);
        assert_eq!(uniform_load_moment(w, l, 0.0), 0.0);
        assert_eq!(uniform_load_moment(w, l, l), 0.0);
        assert_relative_eq!(
            uniform_load_moment(w, l, l / 2.0),
            uniform_load_max_moment(w, l),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_uniform_shear() {
        let (w, l) = (100.0, 10.0);
        assert_eq!(uniform_load_shear(w, l, 0.0), 500.0);
        assert_eq!(uniform_load_shear(w, l, l), -500.0);
        assert_eq!(uniform_load_shear(w, l, 5.0), 0.0);
        let (r1, r2) = uniform_load_reactions(w, l);
        assert_eq!(r1, 500.0);
        assert_eq!(r2, 500.0);
    }

    #[test]
    fn test_unit_load_influence_line() {
        let l = 10.0;
        assert_eq!(unit_load_moment(l, 4.0, 0.0), 0.0);
        assert_eq!(unit_load_moment(l, 4.0, l), 0.0);
        // Peak at the load point: x(L-x)/L
        assert_relative_eq!(unit_load_moment(l, 4.0, 4.0), 2.4);
        // Continuous across the load point
        assert_relative_eq!(
            unit_load_moment(l, 4.0, 4.0 - 1e-9),
            unit_load_moment(l, 4.0, 4.0 + 1e-9),
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_virtual_work_matches_prismatic_deflection() {
        let (w, l, e, i) = (10602.0, 9.4, 3e10, 1.7e-3);
        for &x in &[0.0, 1.3, 2.35, 4.7, 6.0, 8.8] {
            let delta = uniform_load_virtual_work(w, l, x, 0.0, l) / (e * i);
            let expected = uniform_load_deflection(w, l, x, e, i);
            assert_relative_eq!(delta, expected, epsilon = 1e-15, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_midspan_closed_form() {
        let (w, l, e, i) = (1.0, 1.0, 1.0, 1.0);
        let delta = uniform_load_virtual_work(w, l, 0.5, 0.0, l) / (e * i);
        assert_relative_eq!(delta, 5.0 / 384.0, max_relative = 1e-12);
    }

    #[test]
    fn test_virtual_work_against_quadrature() {
        let (w, l) = (10602.0, 9.4);
        let x = 3.1;
        let integrand = |xi: f64| uniform_load_moment(w, l, xi) * unit_load_moment(l, x, xi);
        for &(a, b) in &[(0.0, 2.0), (2.0, 7.4), (7.4, 9.4), (1.0, 3.1), (3.1, 5.0)] {
            let exact = uniform_load_virtual_work(w, l, x, a, b);
            // Split at x so Simpson sees a smooth integrand
            let numeric = if a < x && x < b {
                simpson(&integrand, a, x, 200) + simpson(&integrand, x, b, 200)
            } else {
                simpson(&integrand, a, b, 200)
            };
            assert_relative_eq!(exact, numeric, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_virtual_work_is_additive() {
        let (w, l, x) = (5.0, 8.0, 2.5);
        let whole = uniform_load_virtual_work(w, l, x, 0.0, l);
        let parts = uniform_load_virtual_work(w, l, x, 0.0, 1.0)
            + uniform_load_virtual_work(w, l, x, 1.0, 7.0)
            + uniform_load_virtual_work(w, l, x, 7.0, l);
        assert_relative_eq!(whole, parts, max_relative = 1e-12);
    }

    #[test]
    fn test_empty_interval() {
        assert_eq!(uniform_load_virtual_work(1.0, 1.0, 0.5, 0.3, 0.3), 0.0);
        assert_eq!(uniform_load_virtual_work(1.0, 1.0, 0.5, 0.6, 0.2), 0.0);
    }
}
