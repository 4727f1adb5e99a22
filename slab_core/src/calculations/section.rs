//! # Section Properties
//!
//! Second moment of area of the hollow-core section, and of the transformed
//! composite section once strips are bonded to the soffit.
//!
//! ## Method
//!
//! 1. Gross rectangle: `bh³/12`
//! 2. Minus `void_count` voids, each two half-disks and a rectangle about
//!    the slab centroid
//! 3. Plus each strip's transformed area `n·A_strip` at lever arm
//!    `d = (h + t)/2`, with its lateral offset from the centerline:
//!    `n·A_strip·(d² + offset²)`
//!
//! ## Example
//!
//! ```rust
//! use slab_core::calculations::section::{calculate, inertia};
//! use slab_core::geometry::{ReinforcementScheme, SlabGeometry};
//!
//! let slab = SlabGeometry::default();
//! let bare = inertia(&slab, &ReinforcementScheme::none()).unwrap();
//! let strengthened = calculate(&slab, &ReinforcementScheme::from_layers(100.0, 1, 100.0, 1)).unwrap();
//!
//! assert!(strengthened.transformed_inertia_m4 > bare);
//! assert_eq!(strengthened.concrete_inertia_m4, bare);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::section::{
    modular_ratio, parallel_axis_term, rectangular_moment_of_inertia, soffit_lever_arm,
    void_moment_of_inertia,
};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{ReinforcementScheme, SlabGeometry, StripLayout};

/// Derived section properties for one (slab, reinforcement) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Solid rectangle bh³/12 (m⁴)
    pub gross_inertia_m4: f64,
    /// Total deduction for voids (m⁴)
    pub void_inertia_m4: f64,
    /// Hollow-core concrete section (m⁴)
    pub concrete_inertia_m4: f64,
    /// Transformed composite section; equals the concrete value when unreinforced (m⁴)
    pub transformed_inertia_m4: f64,
    /// E_strip / E_concrete; zero when unreinforced
    pub modular_ratio: f64,
    /// Distance from mid-depth to the strip centroid (m); zero when unreinforced
    pub lever_arm_m: f64,
    /// Lateral offset of each strip from the centerline (m)
    pub strip_offsets_m: Vec<f64>,
    /// Net concrete area (m²)
    pub concrete_area_m2: f64,
    /// Area of all strips (m²), untransformed
    pub reinforcement_area_m2: f64,
}

impl SectionProperties {
    /// Stiffness gain from the strips, as a ratio I_transformed / I_concrete
    pub fn stiffness_ratio(&self) -> f64 {
        self.transformed_inertia_m4 / self.concrete_inertia_m4
    }
}

/// Second moment of area of the hollow-core concrete alone (m⁴).
///
/// Validates the slab and rejects a non-positive result.
pub fn concrete_inertia(slab: &SlabGeometry) -> CalcResult<f64> {
    slab.validate()?;

    let gross = rectangular_moment_of_inertia(slab.width_m, slab.height_m);
    let voids = slab.void_count as f64 * void_moment_of_inertia(slab.void_radius_m, slab.void_rect_height_m);
    let net = gross - voids;

    if !(net > 0.0) {
        return Err(CalcError::invalid_input(
            "void_count",
            slab.void_count.to_string(),
            format!("Voids remove {:.6e} m⁴ of a {:.6e} m⁴ section", voids, gross),
        ));
    }
    Ok(net)
}

/// Transformed second moment of area for a slab and strip scheme (m⁴).
///
/// Returns the concrete-only value when the scheme carries no laminate.
pub fn inertia(slab: &SlabGeometry, scheme: &ReinforcementScheme) -> CalcResult<f64> {
    Ok(calculate(slab, scheme)?.transformed_inertia_m4)
}

/// Full set of section properties for a slab and strip scheme.
pub fn calculate(slab: &SlabGeometry, scheme: &ReinforcementScheme) -> CalcResult<SectionProperties> {
    let concrete = concrete_inertia(slab)?;
    scheme.validate(slab)?;

    let gross_inertia_m4 = rectangular_moment_of_inertia(slab.width_m, slab.height_m);
    let mut props = SectionProperties {
        gross_inertia_m4,
        void_inertia_m4: gross_inertia_m4 - concrete,
        concrete_inertia_m4: concrete,
        transformed_inertia_m4: concrete,
        modular_ratio: 0.0,
        lever_arm_m: 0.0,
        strip_offsets_m: Vec::new(),
        concrete_area_m2: slab.concrete_area_m2(),
        reinforcement_area_m2: 0.0,
    };

    if !scheme.is_active() {
        return Ok(props);
    }

    let n = modular_ratio(scheme.e_pa, slab.e_concrete_pa);
    let d = soffit_lever_arm(slab.height_m, scheme.thickness_m());
    let area_per_strip = scheme.area_per_strip_m2();

    let offsets = if scheme.strip_count > 1 {
        StripLayout::evenly_spaced(slab.width_m, scheme.strip_count).offsets_m
    } else {
        vec![0.0]
    };

    // Each strip: n·A·(d² + offset²)
    let added: f64 = offsets
        .iter()
        .map(|offset| n * (parallel_axis_term(area_per_strip, d) + parallel_axis_term(area_per_strip, *offset)))
        .sum();

    props.transformed_inertia_m4 = concrete + added;
    props.modular_ratio = n;
    props.lever_arm_m = d;
    props.strip_offsets_m = offsets;
    props.reinforcement_area_m2 = scheme.total_area_m2();

    log::debug!(
        "section: I_c={:.6e} m4, I_t={:.6e} m4, n={:.3}, strips={}",
        concrete,
        props.transformed_inertia_m4,
        n,
        scheme.strip_count
    );

    Ok(props)
}
