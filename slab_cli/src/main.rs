//! # slab_cli
//!
//! Runs a ply-count sweep for one slab and strip layout and prints the
//! results as a table followed by the full report as JSON.
//!
//! ```text
//! slab_cli [config.json]
//! ```
//!
//! Without an argument the reference slab and a single 100 mm strip are
//! analysed. Set `RUST_LOG=debug` for per-calculation detail.

use std::path::Path;
use std::process::ExitCode;

use slab_core::calculations::{
    section, stress_profile_with_axis, sweep_with_baseline, Baseline, SweepReport,
};
use slab_core::config::{load_config, AnalysisConfig};
use slab_core::errors::{CalcError, CalcResult};
use slab_core::units::{Megapascals, Pascals};

fn main() -> ExitCode {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => return report_error(&e),
        },
        None => {
            log::info!("no config given, using defaults");
            AnalysisConfig::default()
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&e),
    }
}

fn run(config: &AnalysisConfig) -> CalcResult<()> {
    config.validate()?;
    let slab = &config.geometry;
    let baseline = Baseline::compute(slab)?;
    let template = config.template();

    println!("═══════════════════════════════════════════════════════════════");
    println!("  HOLLOW-CORE SLAB STRENGTHENING");
    println!("═══════════════════════════════════════════════════════════════");
    println!();
    println!("Slab:");
    println!(
        "  Section:  {:.0} x {:.0} mm, {} voids of r = {:.0} mm",
        slab.width_m * 1000.0,
        slab.height_m * 1000.0,
        slab.void_count,
        slab.void_radius_m * 1000.0
    );
    println!("  Span:     {:.2} m", slab.span_m);
    println!("  Load:     {:.0} N/m", slab.load_n_per_m);
    println!("  I_c:      {:.4e} m⁴", baseline.concrete_inertia_m4);
    println!();
    println!("Strips:");
    println!(
        "  {} x {:.0} mm, {:.0}% of span, {:.2} mm plies, E = {:.0} GPa",
        config.strip_count,
        config.strip_width_mm,
        config.length_percent,
        config.layer_thickness_mm,
        config.e_reinforcement_pa / 1e9
    );
    println!();
    println!(
        "Baseline midspan deflection: {:.3} mm (L/{:.0})",
        baseline.deflection_mm(),
        slab.span_m / baseline.deflection_m
    );
    println!();

    let layer_counts = config.layer_counts.iter().copied();
    let report = sweep_with_baseline(slab, &baseline, &template, layer_counts)?;
    print_table(&report);

    if let Some(deepest) = report.best_reduction() {
        let scheme = config.scheme(deepest.layer_count);
        let props = section::calculate(slab, &scheme)?;
        let profile = stress_profile_with_axis(
            slab.midspan_m(),
            slab,
            &scheme,
            config.stress_samples,
            config.neutral_axis,
        )?;
        println!();
        println!("Midspan with {} plies:", deepest.layer_count);
        println!("  I_t / I_c:   {:.4}", props.stiffness_ratio());
        println!(
            "  Peak stress: {:.2} MPa at y = {:.1} mm",
            Megapascals::from(Pascals(profile.max_abs_stress_pa)).value(),
            profile.max_stress_depth_m * 1000.0
        );
    }

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    match report.best_efficiency() {
        Some(best) => println!(
            "  BEST EFFICIENCY: {} plies, {:.2}% reduction, {:.4} %/m²",
            best.layer_count,
            best.reduction_percent,
            best.efficiency.unwrap_or(0.0)
        ),
        None => println!("  BEST EFFICIENCY: none (no bonded area)"),
    }
    println!("═══════════════════════════════════════════════════════════════");

    println!();
    println!("JSON Output:");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_table(report: &SweepReport) {
    println!("  Plies   t (mm)   δ (mm)   Reduction   Area (m²)   %/m²");
    println!("  ─────   ──────   ──────   ─────────   ─────────   ──────");
    for r in &report.records {
        let efficiency = r
            .efficiency
            .map(|e| format!("{:.4}", e))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:>5}   {:>6.2}   {:>6.3}   {:>8.2}%   {:>9.3}   {:>6}",
            r.layer_count,
            r.thickness_mm,
            r.deflection_mm,
            r.reduction_percent,
            r.bonded_area_m2,
            efficiency
        );
    }
    for s in &report.skipped {
        println!("  {:>5}   skipped: {}", s.layer_count, s.error);
    }
}

fn report_error(e: &CalcError) -> ExitCode {
    eprintln!("Error [{}]: {}", e.error_code(), e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
    ExitCode::FAILURE
}
