//! # Cross-Section Property Formulas
//!
//! Geometric properties of the shapes a hollow-core slab section is built from:
//! the gross rectangle, the voids (two half-disks joined by a rectangle), and
//! the bonded strips added through the parallel-axis theorem.
//!
//! ## Notation
//!
//! - `b` = Width of a rectangle
//! - `h` = Height of a rectangle
//! - `r` = Void radius
//! - `A` = Area
//! - `d` = Distance from a shape's centroid to the section's axis
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1
//! - Gere & Goodno, Mechanics of Materials, Appendix E

use std::f64::consts::PI;

// =============================================================================
// RECTANGLE
// =============================================================================

/// Area of a rectangle
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Second moment of area of a rectangle about its horizontal centroidal axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │ ════════│ ← centroidal axis at h/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bh³/12
///
/// # Example
/// ```rust
/// use slab_core::equations::section::rectangular_moment_of_inertia;
///
/// let i = rectangular_moment_of_inertia(1.2, 0.265);
/// assert!((i - 1.8609625e-3).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

// =============================================================================
// VOIDS
// =============================================================================

/// Second moment of area of a half-disk, as used for the void caps
///
/// # Formula
/// I = πr⁴/8
///
/// This is the half-disk's moment about its diameter. The void decomposition
/// treats each cap as if that axis lay on the slab's neutral axis, which holds
/// for voids centered at mid-height.
#[inline]
pub fn half_disk_moment_of_inertia(r: f64) -> f64 {
    PI * r.powi(4) / 8.0
}

/// Area of a half-disk, πr²/2
#[inline]
pub fn half_disk_area(r: f64) -> f64 {
    PI * r * r / 2.0
}

/// Second moment of area of one void: top half-disk, central rectangle
/// (`2r` wide, `rect_height` tall), bottom half-disk.
///
/// ```text
///       ╭───╮      ← half-disk, radius r
///       │   │
///       │   │      ← rectangle 2r × rect_height
///       │   │
///       ╰───╯      ← half-disk, radius r
/// ```
///
/// # Formula
/// I_void = πr⁴/8 + 2r·h³/12 + πr⁴/8
#[inline]
pub fn void_moment_of_inertia(r: f64, rect_height: f64) -> f64 {
    let cap = half_disk_moment_of_inertia(r);
    let core = rectangular_moment_of_inertia(2.0 * r, rect_height);
    cap + core + cap
}

/// Area of one void, πr² + 2r·h
#[inline]
pub fn void_area(r: f64, rect_height: f64) -> f64 {
    2.0 * half_disk_area(r) + rectangular_area(2.0 * r, rect_height)
}

// =============================================================================
// TRANSFORMED AREAS
// =============================================================================

/// Parallel-axis contribution of an area `a` whose centroid lies `d` from the axis
///
/// # Formula
/// ΔI = A·d²
#[inline]
pub fn parallel_axis_term(area: f64, d: f64) -> f64 {
    area * d * d
}

/// Modular ratio n = E_reinforcement / E_base
#[inline]
pub fn modular_ratio(e_reinforcement: f64, e_base: f64) -> f64 {
    e_reinforcement / e_base
}

/// Lever arm of a soffit-bonded strip: distance from the slab's mid-depth to
/// the strip's own mid-thickness.
///
/// # Formula
/// d = (h + t)/2
#[inline]
pub fn soffit_lever_arm(slab_height: f64, strip_thickness: f64) -> f64 {
    (slab_height + strip_thickness) / 2.0
}
