//! # Analysis Orchestrator
//!
//! Runs a strip template over a range of ply counts and reports, for each,
//! the midspan deflection, its reduction against the bare slab, and how much
//! reduction each square meter of bonded laminate buys.
//!
//! A failing sample is logged and recorded in [`SweepReport::skipped`]; the
//! rest of the sweep carries on. A failing baseline aborts the whole sweep.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::calculations::sweep::{sweep, DEFAULT_LAYER_RANGE};
//! use slab_core::geometry::{ReinforcementScheme, SlabGeometry};
//!
//! let slab = SlabGeometry::default();
//! let template = ReinforcementScheme::from_layers(150.0, 0, 80.0, 2);
//! let report = sweep(&slab, &template, DEFAULT_LAYER_RANGE).unwrap();
//!
//! assert_eq!(report.records.len(), 25);
//! if let Some(best) = report.best_efficiency() {
//!     println!("{} plies: {:.3} %/m²", best.layer_count, best.efficiency.unwrap_or(0.0));
//! }
//! ```

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::deflection::{deflection_at, Baseline};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{ReinforcementScheme, SlabGeometry};
use crate::units::{Meters, Millimeters};

/// Ply counts swept when the caller has no preference
pub const DEFAULT_LAYER_RANGE: RangeInclusive<u32> = 1..=25;

/// Outcome for one ply count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub layer_count: u32,
    /// Total strip thickness (mm)
    pub thickness_mm: f64,
    /// Midspan deflection (mm)
    pub deflection_mm: f64,
    /// Reduction against the bare slab (%)
    pub reduction_percent: f64,
    /// Laminate plan area, counted per ply (m²)
    pub bonded_area_m2: f64,
    /// Reduction per bonded area (%/m²); `None` when nothing is bonded
    pub efficiency: Option<f64>,
}

/// A ply count whose analysis failed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedSample {
    pub layer_count: u32,
    pub error: CalcError,
}

/// Results of a sweep, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Bare-slab midspan deflection (mm)
    pub baseline_deflection_mm: f64,
    pub records: Vec<AnalysisRecord>,
    pub skipped: Vec<SkippedSample>,
    pub generated_at: DateTime<Utc>,
}

impl SweepReport {
    /// Record with the highest reduction per bonded area
    pub fn best_efficiency(&self) -> Option<&AnalysisRecord> {
        self.records
            .iter()
            .filter_map(|r| r.efficiency.map(|e| (r, e)))
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(r, _)| r)
    }

    /// Record with the largest deflection reduction
    pub fn best_reduction(&self) -> Option<&AnalysisRecord> {
        self.records
            .iter()
            .max_by(|a, b| a.reduction_percent.total_cmp(&b.reduction_percent))
    }

    /// True when every requested ply count produced a record
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Sweep `template` over `layer_counts`, computing the baseline first.
pub fn sweep(
    slab: &SlabGeometry,
    template: &ReinforcementScheme,
    layer_counts: impl IntoIterator<Item = u32>,
) -> CalcResult<SweepReport> {
    let baseline = Baseline::compute(slab)?;
    sweep_with_baseline(slab, &baseline, template, layer_counts)
}

/// Sweep against a baseline the caller already holds.
///
/// The baseline must have been computed for `slab`.
pub fn sweep_with_baseline(
    slab: &SlabGeometry,
    baseline: &Baseline,
    template: &ReinforcementScheme,
    layer_counts: impl IntoIterator<Item = u32>,
) -> CalcResult<SweepReport> {
    baseline.ensure_matches(slab)?;
    if !(baseline.deflection_m > 0.0) || !baseline.deflection_m.is_finite() {
        return Err(CalcError::calculation_failed(
            "baseline deflection",
            format!("Cannot measure reductions against {} m", baseline.deflection_m),
        ));
    }

    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for layer_count in layer_counts {
        match analyze(slab, baseline, &template.with_layers(layer_count)) {
            Ok(record) => records.push(record),
            Err(error) => {
                log::warn!("skipping {} plies: {}", layer_count, error);
                skipped.push(SkippedSample { layer_count, error });
            }
        }
    }

    log::info!(
        "sweep: {} records, {} skipped, baseline {:.3} mm",
        records.len(),
        skipped.len(),
        baseline.deflection_mm()
    );

    Ok(SweepReport {
        baseline_deflection_mm: baseline.deflection_mm(),
        records,
        skipped,
        generated_at: Utc::now(),
    })
}

/// Midspan analysis of a single scheme against the baseline.
pub fn analyze(slab: &SlabGeometry, baseline: &Baseline, scheme: &ReinforcementScheme) -> CalcResult<AnalysisRecord> {
    baseline.ensure_matches(slab)?;
    let deflection_m = deflection_at(slab.midspan_m(), slab, scheme)?;
    let reduction_percent = baseline.reduction_percent(deflection_m);
    let bonded_area_m2 = scheme.bonded_area_m2(slab.span_m);
    let efficiency = if bonded_area_m2 > 0.0 {
        Some(reduction_percent / bonded_area_m2)
    } else {
        None
    };

    Ok(AnalysisRecord {
        layer_count: scheme.layer_count,
        thickness_mm: Millimeters::from(Meters(scheme.thickness_m())).value(),
        deflection_mm: Millimeters::from(Meters(deflection_m)).value(),
        reduction_percent,
        bonded_area_m2,
        efficiency,
    })
}
