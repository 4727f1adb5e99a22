//! # Beam Statics
//!
//! Internal forces in the simply-supported slab under its uniform load.
//!
//! ## Sign Convention
//! - Positive moment: tension on bottom fiber (sagging)
//! - Positive shear: left side up, right side down
//!
//! ## Example
//! ```rust
//! use slab_core::calculations::statics::{moment, shear};
//! use slab_core::geometry::SlabGeometry;
//!
//! let slab = SlabGeometry::default();
//! let q = slab.load_n_per_m;
//! let l = slab.span_m;
//!
//! assert_eq!(moment(&slab, 0.0), 0.0);
//! assert!((moment(&slab, l / 2.0) - q * l * l / 8.0).abs() < 1e-6);
//! assert_eq!(shear(&slab, 0.0), q * l / 2.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::beam::{uniform_load_moment, uniform_load_reactions, uniform_load_shear};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::SlabGeometry;

/// Bending moment at `x` m from the left support (N·m)
#[inline]
pub fn moment(slab: &SlabGeometry, x: f64) -> f64 {
    uniform_load_moment(slab.load_n_per_m, slab.span_m, x)
}

/// Shear force at `x` m from the left support (N)
#[inline]
pub fn shear(slab: &SlabGeometry, x: f64) -> f64 {
    uniform_load_shear(slab.load_n_per_m, slab.span_m, x)
}

/// Evenly spaced positions over `[0, L]`, both ends included
pub(crate) fn span_positions(span_m: f64, n_samples: usize) -> CalcResult<Vec<f64>> {
    if n_samples < 2 {
        return Err(CalcError::invalid_input(
            "n_samples",
            n_samples.to_string(),
            "At least 2 samples are needed to cover the span",
        ));
    }
    let step = span_m / (n_samples - 1) as f64;
    Ok((0..n_samples)
        .map(|i| if i == n_samples - 1 { span_m } else { step * i as f64 })
        .collect())
}

/// One sampled point of the internal-force diagrams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForcePoint {
    pub position_m: f64,
    pub moment_nm: f64,
    pub shear_n: f64,
}

/// Sampled bending-moment and shear diagrams with their governing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalForceDiagram {
    pub points: Vec<ForcePoint>,
    /// Largest sampled moment (N·m)
    pub max_moment_nm: f64,
    /// Position of the largest sampled moment (m)
    pub max_moment_position_m: f64,
    /// Largest sampled shear magnitude (N)
    pub max_shear_n: f64,
    /// Position of the largest sampled shear magnitude (m)
    pub max_shear_position_m: f64,
    /// Support reactions, left then right (N)
    pub reactions_n: (f64, f64),
}

/// Sample moment and shear at `n_samples` evenly spaced positions.
pub fn internal_forces(slab: &SlabGeometry, n_samples: usize) -> CalcResult<InternalForceDiagram> {
    slab.validate()?;
    let points: Vec<ForcePoint> = span_positions(slab.span_m, n_samples)?
        .into_iter()
        .map(|x| ForcePoint {
            position_m: x,
            moment_nm: moment(slab, x),
            shear_n: shear(slab, x),
        })
        .collect();

    let first = points
        .first()
        .copied()
        .ok_or_else(|| CalcError::internal("internal force diagram has no samples"))?;
    let mut max_moment = first;
    let mut max_shear = first;
    for p in &points[1..] {
        if p.moment_nm > max_moment.moment_nm {
            max_moment = *p;
        }
        if p.shear_n.abs() > max_shear.shear_n.abs() {
            max_shear = *p;
        }
    }

    Ok(InternalForceDiagram {
        max_moment_nm: max_moment.moment_nm,
        max_moment_position_m: max_moment.position_m,
        max_shear_n: max_shear.shear_n.abs(),
        max_shear_position_m: max_shear.position_m,
        reactions_n: uniform_load_reactions(slab.load_n_per_m, slab.span_m),
        points,
    })
}
