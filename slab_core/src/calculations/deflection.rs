//! # Deflection Solver
//!
//! Deflection of the slab by the unit-load (virtual work) method:
//!
//! ```text
//! δ(x) = ∫₀ᴸ M(ξ)·M̄(ξ) / (E·I(ξ)) dξ
//! ```
//!
//! where `M` is the moment from the uniform load and `M̄` the moment from a
//! unit load at `x`. Strips bonded over the central part of the span make
//! `I(ξ)` piecewise constant:
//!
//! ```text
//!   I_concrete     I_transformed      I_concrete
//! ├────────────┼────────────────────┼────────────┤
//! 0            a                  L - a          L
//! ```
//!
//! with `a = (L - L_bonded)/2`. Each segment is integrated in closed form
//! (see [`crate::equations::beam::uniform_load_virtual_work`]), so results are
//! exact to rounding and independent between sample points.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::calculations::deflection::{deflection_at, Baseline};
//! use slab_core::geometry::{ReinforcementScheme, SlabGeometry};
//!
//! let slab = SlabGeometry::default();
//! let baseline = Baseline::compute(&slab).unwrap();
//!
//! let scheme = ReinforcementScheme::from_layers(100.0, 5, 60.0, 1);
//! let delta = deflection_at(slab.midspan_m(), &slab, &scheme).unwrap();
//!
//! assert!(delta < baseline.deflection_m);
//! println!("{:.2}% less deflection", baseline.reduction_percent(delta));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::section;
use crate::calculations::statics::span_positions;
use crate::equations::beam::uniform_load_virtual_work;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{ReinforcementScheme, SlabGeometry};
use crate::units::{Meters, Millimeters};

/// A stretch of span with constant second moment of area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InertiaSegment {
    pub start_m: f64,
    pub end_m: f64,
    pub inertia_m4: f64,
}

/// Second moment of area along the span, as contiguous segments covering `[0, L]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InertiaProfile {
    pub segments: Vec<InertiaSegment>,
}

impl InertiaProfile {
    /// One inertia over the whole span
    pub fn uniform(span_m: f64, inertia_m4: f64) -> Self {
        InertiaProfile {
            segments: vec![InertiaSegment {
                start_m: 0.0,
                end_m: span_m,
                inertia_m4,
            }],
        }
    }

    /// Concrete inertia over `[0, a]` and `[L-a, L]`, transformed inertia between
    pub fn centered(span_m: f64, a: f64, concrete_m4: f64, transformed_m4: f64) -> Self {
        let b = span_m - a;
        InertiaProfile {
            segments: vec![
                InertiaSegment {
                    start_m: 0.0,
                    end_m: a,
                    inertia_m4: concrete_m4,
                },
                InertiaSegment {
                    start_m: a,
                    end_m: b,
                    inertia_m4: transformed_m4,
                },
                InertiaSegment {
                    start_m: b,
                    end_m: span_m,
                    inertia_m4: concrete_m4,
                },
            ],
        }
    }

    /// Build the profile a strip scheme produces on a slab.
    pub fn for_scheme(slab: &SlabGeometry, scheme: &ReinforcementScheme) -> CalcResult<Self> {
        let props = section::calculate(slab, scheme)?;

        for (field, value) in [
            ("concrete_inertia_m4", props.concrete_inertia_m4),
            ("transformed_inertia_m4", props.transformed_inertia_m4),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    format!("Non-positive inertia for slab {:?} with strips {:?}", slab, scheme),
                ));
            }
        }

        if !scheme.is_active() {
            return Ok(InertiaProfile::uniform(slab.span_m, props.concrete_inertia_m4));
        }
        if scheme.is_full_length() {
            return Ok(InertiaProfile::uniform(slab.span_m, props.transformed_inertia_m4));
        }
        Ok(InertiaProfile::centered(
            slab.span_m,
            scheme.unbonded_end_m(slab.span_m),
            props.concrete_inertia_m4,
            props.transformed_inertia_m4,
        ))
    }

    /// Unit-load integral at `x`, summed segment by segment (m)
    pub fn deflection_at(&self, slab: &SlabGeometry, x: f64) -> f64 {
        self.segments
            .iter()
            .map(|seg| {
                uniform_load_virtual_work(slab.load_n_per_m, slab.span_m, x, seg.start_m, seg.end_m)
                    / (slab.e_concrete_pa * seg.inertia_m4)
            })
            .sum()
    }
}

fn check_position(slab: &SlabGeometry, x: f64) -> CalcResult<()> {
    if !(0.0..=slab.span_m).contains(&x) {
        return Err(CalcError::invalid_input(
            "x",
            x.to_string(),
            format!("Position must lie on the span [0, {}] m", slab.span_m),
        ));
    }
    Ok(())
}

fn check_finite(x: f64, value: f64, scheme: &ReinforcementScheme) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::calculation_failed(
            "deflection",
            format!("Non-finite deflection {} at x = {} m for strips {:?}", value, x, scheme),
        ))
    }
}

/// Deflection at `x` m from the left support, positive downward (m).
pub fn deflection_at(x: f64, slab: &SlabGeometry, scheme: &ReinforcementScheme) -> CalcResult<f64> {
    let profile = InertiaProfile::for_scheme(slab, scheme)?;
    check_position(slab, x)?;
    check_finite(x, profile.deflection_at(slab, x), scheme)
}

/// One sample of a deflection curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionPoint {
    pub position_m: f64,
    pub deflection_m: f64,
}

/// Deflected shape sampled evenly along the span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflectionCurve {
    pub points: Vec<DeflectionPoint>,
}

impl DeflectionCurve {
    /// Sample with the largest deflection
    pub fn peak(&self) -> Option<DeflectionPoint> {
        self.points
            .iter()
            .copied()
            .fold(None, |best: Option<DeflectionPoint>, p| match best {
                Some(b) if b.deflection_m >= p.deflection_m => Some(b),
                _ => Some(p),
            })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(position m, deflection mm)` pairs for plotting
    pub fn to_millimeters(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| {
                let mm: Millimeters = Meters(p.deflection_m).into();
                (p.position_m, mm.value())
            })
            .collect()
    }
}

/// Deflection at `n_samples` evenly spaced points over `[0, L]`.
///
/// Every sample is an independent solve of the same integral.
pub fn deflection_curve(slab: &SlabGeometry, scheme: &ReinforcementScheme, n_samples: usize) -> CalcResult<DeflectionCurve> {
    let profile = InertiaProfile::for_scheme(slab, scheme)?;
    let points = span_positions(slab.span_m, n_samples)?
        .into_iter()
        .map(|x| {
            Ok(DeflectionPoint {
                position_m: x,
                deflection_m: check_finite(x, profile.deflection_at(slab, x), scheme)?,
            })
        })
        .collect::<CalcResult<Vec<_>>>()?;
    Ok(DeflectionCurve { points })
}

/// Midspan deflection of the bare slab: the reference every reduction is measured against.
///
/// Computed once per slab and passed explicitly. Construction fails if the
/// deflection is not a finite positive number, so a broken baseline can never
/// be mistaken for zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    /// Slab the baseline was computed for
    pub slab: SlabGeometry,
    pub deflection_m: f64,
    pub concrete_inertia_m4: f64,
}

impl Baseline {
    pub fn compute(slab: &SlabGeometry) -> CalcResult<Self> {
        let concrete_inertia_m4 = section::concrete_inertia(slab)?;
        let deflection_m = InertiaProfile::uniform(slab.span_m, concrete_inertia_m4)
            .deflection_at(slab, slab.midspan_m());

        if !(deflection_m > 0.0) || !deflection_m.is_finite() {
            return Err(CalcError::calculation_failed(
                "baseline deflection",
                format!("Unreinforced midspan deflection is {} m for slab {:?}", deflection_m, slab),
            ));
        }

        log::debug!("baseline: {:.6} m (I_c = {:.6e} m4)", deflection_m, concrete_inertia_m4);
        Ok(Baseline {
            slab: *slab,
            deflection_m,
            concrete_inertia_m4,
        })
    }

    /// Err unless this baseline was computed for `slab`
    pub fn ensure_matches(&self, slab: &SlabGeometry) -> CalcResult<()> {
        if self.slab != *slab {
            return Err(CalcError::invalid_input(
                "baseline",
                format!("{:?}", self.slab),
                "Baseline was computed for a different slab",
            ));
        }
        Ok(())
    }

    pub fn deflection_mm(&self) -> f64 {
        Millimeters::from(Meters(self.deflection_m)).value()
    }

    /// Percent reduction of `deflection_m` relative to the bare slab
    pub fn reduction_percent(&self, deflection_m: f64) -> f64 {
        (self.deflection_m - deflection_m) / self.deflection_m * 100.0
    }
}
