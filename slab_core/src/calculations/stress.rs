//! # Stress Evaluator
//!
//! Normal bending stress through the depth of the transformed section at one
//! position along the span.
//!
//! ```text
//! σ(y) = M(x)·(y − ȳ) / I_t            concrete, 0 ≤ y ≤ h
//! σ(y) = n·M(x)·(y − ȳ) / I_t          laminate, −t ≤ y < 0
//! ```
//!
//! Depth `y` is measured up from the slab soffit, so the strips sit at
//! negative depths. The sign follows `(y − ȳ)`: points below the reference
//! depth come out negative.
//!
//! Outside the bonded zone `[a, L − a]` there is no laminate, so the profile
//! is that of the bare concrete section, as in the deflection solver.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::calculations::stress::stress_profile;
//! use slab_core::geometry::{ReinforcementScheme, SlabGeometry};
//!
//! let slab = SlabGeometry::default();
//! let scheme = ReinforcementScheme::from_layers(100.0, 3, 100.0, 1);
//! let profile = stress_profile(slab.midspan_m(), &slab, &scheme, 51).unwrap();
//!
//! assert_eq!(profile.points.len(), 51);
//! println!("peak {:.2} MPa at y = {:.4} m", profile.max_abs_stress_pa / 1e6, profile.max_stress_depth_m);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{section, statics};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{ReinforcementScheme, SlabGeometry};
use crate::units::{Megapascals, Pascals};

/// Which depth the bending stress is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NeutralAxis {
    /// Midway between the strip underside and the slab top: `(h − t)/2`
    #[default]
    Midpoint,
    /// Centroid of the transformed section:
    /// `(A_c·h/2 − n·A_r·t/2) / (A_c + n·A_r)`
    TransformedCentroid,
}

impl NeutralAxis {
    /// Reference depth above the soffit (m)
    pub fn depth_m(&self, slab: &SlabGeometry, props: &section::SectionProperties, thickness_m: f64) -> f64 {
        match self {
            NeutralAxis::Midpoint => (slab.height_m - thickness_m) / 2.0,
            NeutralAxis::TransformedCentroid => {
                let a_c = props.concrete_area_m2;
                let na_r = props.modular_ratio * props.reinforcement_area_m2;
                (a_c * slab.height_m / 2.0 - na_r * thickness_m / 2.0) / (a_c + na_r)
            }
        }
    }
}

/// One sample of a stress profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressPoint {
    /// Height above the soffit (m), negative inside the strip
    pub depth_m: f64,
    pub stress_pa: f64,
}

/// Stress distribution through the depth at one span position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressProfile {
    /// Span position the profile was taken at (m)
    pub position_m: f64,
    /// Bending moment at that position (N·m)
    pub moment_nm: f64,
    pub points: Vec<StressPoint>,
    /// Depth of zero stress (m)
    pub reference_depth_m: f64,
    /// Largest stress magnitude over the samples (Pa)
    pub max_abs_stress_pa: f64,
    /// Depth of `max_abs_stress_pa` (m)
    pub max_stress_depth_m: f64,
}

impl StressProfile {
    /// `(depth m, stress MPa)` pairs for plotting
    pub fn to_megapascals(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.depth_m, Megapascals::from(Pascals(p.stress_pa)).value()))
            .collect()
    }
}

/// Stress profile at `x` m about the midpoint reference depth.
pub fn stress_profile(
    x: f64,
    slab: &SlabGeometry,
    scheme: &ReinforcementScheme,
    n_samples: usize,
) -> CalcResult<StressProfile> {
    stress_profile_with_axis(x, slab, scheme, n_samples, NeutralAxis::default())
}

/// Stress profile at `x` m, sampled evenly over `[−t, h]`.
pub fn stress_profile_with_axis(
    x: f64,
    slab: &SlabGeometry,
    scheme: &ReinforcementScheme,
    n_samples: usize,
    axis: NeutralAxis,
) -> CalcResult<StressProfile> {
    let mut props = section::calculate(slab, scheme)?;
    if !(0.0..=slab.span_m).contains(&x) {
        return Err(CalcError::invalid_input(
            "x",
            x.to_string(),
            format!("Position must lie on the span [0, {}] m", slab.span_m),
        ));
    }
    if n_samples < 2 {
        return Err(CalcError::invalid_input(
            "n_samples",
            n_samples.to_string(),
            "At least 2 samples are needed to cover the depth",
        ));
    }

    let bonded = scheme.is_bonded_at(slab.span_m, x);
    if !bonded && scheme.is_active() {
        props = section::calculate(slab, &ReinforcementScheme::none())?;
    }

    let t = if bonded { scheme.thickness_m() } else { 0.0 };
    let m = statics::moment(slab, x);
    let i_t = props.transformed_inertia_m4;
    let y_ref = axis.depth_m(slab, &props, t);

    let step = (slab.height_m + t) / (n_samples - 1) as f64;
    let points: Vec<StressPoint> = (0..n_samples)
        .map(|k| {
            let y = if k == n_samples - 1 { slab.height_m } else { -t + step * k as f64 };
            let mut stress_pa = m * (y - y_ref) / i_t;
            if y < 0.0 {
                stress_pa *= props.modular_ratio;
            }
            StressPoint { depth_m: y, stress_pa }
        })
        .collect();

    if let Some(bad) = points.iter().find(|p| !p.stress_pa.is_finite()) {
        return Err(CalcError::calculation_failed(
            "stress",
            format!("Non-finite stress at y = {} m, x = {} m", bad.depth_m, x),
        ));
    }

    let first = points
        .first()
        .copied()
        .ok_or_else(|| CalcError::internal("stress profile has no samples"))?;
    let peak = points
        .iter()
        .copied()
        .fold(first, |best, p| if p.stress_pa.abs() > best.stress_pa.abs() { p } else { best });

    log::debug!(
        "stress at x={:.3} m: M={:.1} N·m, ȳ={:.4} m, |σ|max={:.3e} Pa",
        x,
        m,
        y_ref,
        peak.stress_pa.abs()
    );

    Ok(StressProfile {
        position_m: x,
        moment_nm: m,
        reference_depth_m: y_ref,
        max_abs_stress_pa: peak.stress_pa.abs(),
        max_stress_depth_m: peak.depth_m,
        points,
    })
}
