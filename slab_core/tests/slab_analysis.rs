//! End-to-end checks of the public API on the reference slab.

use approx::assert_relative_eq;

use slab_core::calculations::{
    deflection_at, deflection_curve, inertia, internal_forces, stress_profile, sweep, sweep_with_baseline, Baseline,
    DEFAULT_LAYER_RANGE,
};
use slab_core::config::{load_config, save_config, AnalysisConfig};
use slab_core::geometry::{section_layout, ReinforcementScheme, SlabGeometry};

const GOLDEN_BASELINE_M: f64 = 0.02081122027664074;
const GOLDEN_ONE_PLY_M: f64 = 0.020764622052744045;

#[test]
fn reference_slab_golden_values() {
    let slab = SlabGeometry::default();
    let baseline = Baseline::compute(&slab).unwrap();
    assert_relative_eq!(baseline.deflection_m, GOLDEN_BASELINE_M, max_relative = 1e-6);

    let bare = deflection_at(slab.midspan_m(), &slab, &ReinforcementScheme::none()).unwrap();
    assert_relative_eq!(bare, GOLDEN_BASELINE_M, max_relative = 1e-6);

    let one_ply = ReinforcementScheme::from_layers(100.0, 1, 100.0, 1);
    let strengthened = deflection_at(slab.midspan_m(), &slab, &one_ply).unwrap();
    assert!(strengthened < bare);
    assert_relative_eq!(strengthened, GOLDEN_ONE_PLY_M, max_relative = 1e-6);
}

#[test]
fn symmetric_reinforcement_gives_symmetric_curve() {
    let slab = SlabGeometry::default();
    let scheme = ReinforcementScheme::from_layers(150.0, 6, 70.0, 2);
    let curve = deflection_curve(&slab, &scheme, 41).unwrap();
    let n = curve.len();
    for i in 0..n / 2 {
        assert_relative_eq!(
            curve.points[i].deflection_m,
            curve.points[n - 1 - i].deflection_m,
            epsilon = 1e-15,
            max_relative = 1e-9
        );
    }
    let peak = curve.peak().unwrap();
    assert_relative_eq!(peak.position_m, slab.midspan_m(), max_relative = 1e-12);
}

#[test]
fn more_plies_less_deflection() {
    let slab = SlabGeometry::default();
    let mut previous = f64::INFINITY;
    for layers in DEFAULT_LAYER_RANGE {
        let scheme = ReinforcementScheme::from_layers(200.0, layers, 80.0, 3);
        let d = deflection_at(slab.midspan_m(), &slab, &scheme).unwrap();
        assert!(d < previous);
        previous = d;
    }
}

#[test]
fn zero_thickness_matches_bare_section() {
    let slab = SlabGeometry::default();
    let bare = inertia(&slab, &ReinforcementScheme::none()).unwrap();
    let zero = ReinforcementScheme::from_thickness_mm(100.0, 0.0, 100.0, 1);
    assert_eq!(inertia(&slab, &zero).unwrap(), bare);
}

#[test]
fn sweep_reports_in_order_and_skips_failures() {
    let slab = SlabGeometry::default();
    let template = ReinforcementScheme::from_layers(100.0, 0, 100.0, 1);
    let report = sweep(&slab, &template, DEFAULT_LAYER_RANGE).unwrap();

    assert_eq!(report.records.len(), 25);
    assert!(report.skipped.is_empty());
    assert_relative_eq!(report.baseline_deflection_mm, GOLDEN_BASELINE_M * 1000.0, max_relative = 1e-6);
    for (record, expected) in report.records.iter().zip(1..=25) {
        assert_eq!(record.layer_count, expected);
        assert!(record.reduction_percent > 0.0);
        assert!(record.efficiency.is_some());
    }

    // Negative modulus only fails once plies are present
    let broken = template.with_modulus(-1.0);
    let baseline = Baseline::compute(&slab).unwrap();
    let report = sweep_with_baseline(&slab, &baseline, &broken, [0, 1, 2]).unwrap();
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].layer_count, 0);
    assert!(report.records[0].efficiency.is_none());
    let skipped: Vec<u32> = report.skipped.iter().map(|s| s.layer_count).collect();
    assert_eq!(skipped, vec![1, 2]);
}

#[test]
fn statics_and_stress_agree() {
    let slab = SlabGeometry::default();
    let forces = internal_forces(&slab, 21).unwrap();
    let scheme = ReinforcementScheme::from_layers(100.0, 2, 100.0, 1);
    let profile = stress_profile(slab.midspan_m(), &slab, &scheme, 11).unwrap();

    assert_relative_eq!(profile.moment_nm, forces.max_moment_nm, max_relative = 1e-12);
    assert_relative_eq!(profile.reference_depth_m, (slab.height_m - scheme.thickness_m()) / 2.0);
}

#[test]
fn layout_matches_scheme() {
    let slab = SlabGeometry::default();
    let layout = section_layout(&slab, &ReinforcementScheme::from_layers(100.0, 3, 100.0, 3));
    assert_eq!(layout.voids.len(), 5);
    assert_eq!(layout.strips.len(), 3);
    let json = serde_json::to_string(&layout).unwrap();
    assert!(json.contains("\"strips\""));
}

#[test]
fn config_drives_a_sweep() {
    let path = std::env::temp_dir().join(format!("slab_core_it_config_{}.json", std::process::id()));
    let config = AnalysisConfig {
        strip_width_mm: 200.0,
        strip_count: 2,
        length_percent: 80.0,
        layer_counts: vec![1, 5, 10],
        ..AnalysisConfig::default()
    };
    save_config(&config, &path).unwrap();
    let loaded = load_config(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let report = sweep(&loaded.geometry, &loaded.template(), loaded.layer_counts.iter().copied()).unwrap();
    let counts: Vec<u32> = report.records.iter().map(|r| r.layer_count).collect();
    assert_eq!(counts, vec![1, 5, 10]);
    // 0.2 m × 7.52 m × 2 strips × 5 plies
    assert_relative_eq!(report.records[1].bonded_area_m2, 15.04, max_relative = 1e-9);
}
