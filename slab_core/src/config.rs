//! # Analysis Configuration
//!
//! Everything a sweep session needs, in one JSON document. Missing fields
//! fall back to the reference slab and a single 100 mm carbon strip.
//!
//! ## Saving
//!
//! Saves are atomic: the JSON is written to `<path>.tmp`, synced, read back
//! and parsed, then renamed over the target. A crash mid-save leaves the old
//! file intact.
//!
//! ## Example
//!
//! ```rust,no_run
//! use slab_core::config::{load_config, save_config, AnalysisConfig};
//! use std::path::Path;
//!
//! let mut config = AnalysisConfig::default();
//! config.strip_count = 2;
//! save_config(&config, Path::new("slab.json"))?;
//!
//! let loaded = load_config(Path::new("slab.json"))?;
//! assert_eq!(loaded.strip_count, 2);
//! # Ok::<(), slab_core::errors::CalcError>(())
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::calculations::stress::NeutralAxis;
use crate::calculations::sweep::DEFAULT_LAYER_RANGE;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{ReinforcementScheme, SlabGeometry, E_CARBON_PA, LAYER_THICKNESS_M, MAX_STRIP_COUNT, STRIP_WIDTH_OPTIONS_MM};
use crate::units::{Meters, Millimeters};

/// Inputs for one analysis session.
///
/// ## JSON Example
///
/// ```json
/// {
///   "geometry": { "width_m": 1.2, "height_m": 0.265, "span_m": 9.4, "void_count": 5,
///                 "void_radius_m": 0.075, "void_rect_height_m": 0.055,
///                 "e_concrete_pa": 3e10, "load_n_per_m": 10602.0 },
///   "strip_width_mm": 150.0,
///   "length_percent": 80.0,
///   "strip_count": 2,
///   "layer_counts": [1, 2, 4, 8]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub geometry: SlabGeometry,
    /// Width of one strip (mm)
    pub strip_width_mm: f64,
    /// Bonded length as a percentage of the span
    pub length_percent: f64,
    /// Strips across the slab width (1 to 3)
    pub strip_count: u32,
    /// Thickness of one ply (mm)
    pub layer_thickness_mm: f64,
    /// Laminate elastic modulus (Pa)
    pub e_reinforcement_pa: f64,
    /// Ply counts to sweep, in report order
    pub layer_counts: Vec<u32>,
    /// Points along the span for deflection curves
    pub curve_samples: usize,
    /// Points through the depth for stress profiles
    pub stress_samples: usize,
    /// Reference depth for stress profiles
    pub neutral_axis: NeutralAxis,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            geometry: SlabGeometry::default(),
            strip_width_mm: 100.0,
            length_percent: 100.0,
            strip_count: 1,
            layer_thickness_mm: Millimeters::from(Meters(LAYER_THICKNESS_M)).value(),
            e_reinforcement_pa: E_CARBON_PA,
            layer_counts: DEFAULT_LAYER_RANGE.collect(),
            curve_samples: 101,
            stress_samples: 51,
            neutral_axis: NeutralAxis::default(),
        }
    }
}

impl AnalysisConfig {
    /// Strip scheme with no plies; the sweep fills in the ply count.
    pub fn template(&self) -> ReinforcementScheme {
        let ply: Meters = Millimeters(self.layer_thickness_mm).into();
        ReinforcementScheme {
            layer_thickness_m: ply.value(),
            ..ReinforcementScheme::from_layers(self.strip_width_mm, 0, self.length_percent, self.strip_count)
        }
        .with_modulus(self.e_reinforcement_pa)
    }

    /// Scheme for a specific ply count
    pub fn scheme(&self, layers: u32) -> ReinforcementScheme {
        self.template().with_layers(layers)
    }

    /// Check everything the engine will be asked to do with this config.
    pub fn validate(&self) -> CalcResult<()> {
        self.geometry.validate()?;

        if self.strip_count == 0 || self.strip_count > MAX_STRIP_COUNT {
            return Err(CalcError::invalid_input(
                "strip_count",
                self.strip_count.to_string(),
                format!("Strip count must be between 1 and {}", MAX_STRIP_COUNT),
            ));
        }
        for (field, value) in [
            ("strip_width_mm", self.strip_width_mm),
            ("layer_thickness_mm", self.layer_thickness_mm),
            ("e_reinforcement_pa", self.e_reinforcement_pa),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Must be a positive number"));
            }
        }
        if !STRIP_WIDTH_OPTIONS_MM.contains(&self.strip_width_mm) {
            log::warn!(
                "strip width {} mm is not a stock width {:?}",
                self.strip_width_mm,
                STRIP_WIDTH_OPTIONS_MM
            );
        }
        if self.layer_counts.is_empty() {
            return Err(CalcError::invalid_input("layer_counts", "[]", "At least one ply count is required"));
        }
        if self.curve_samples < 2 {
            return Err(CalcError::invalid_input(
                "curve_samples",
                self.curve_samples.to_string(),
                "At least 2 samples are needed",
            ));
        }
        if self.stress_samples < 2 {
            return Err(CalcError::invalid_input(
                "stress_samples",
                self.stress_samples.to_string(),
                "At least 2 samples are needed",
            ));
        }

        // A single ply exercises every strip check except thickness
        self.scheme(1).validate(&self.geometry)
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Save a configuration as pretty JSON, atomically.
pub fn save_config(config: &AnalysisConfig, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(config)?;
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    // Verify before replacing anything
    if let Err(e) = read_json(&tmp_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    log::debug!("saved config to {}", path.display());
    Ok(())
}

/// Load and validate a configuration file.
pub fn load_config(path: &Path) -> CalcResult<AnalysisConfig> {
    let config = read_json(path)?;
    config.validate()?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

fn read_json(path: &Path) -> CalcResult<AnalysisConfig> {
    let mut file = File::open(path)
        .map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::env::temp_dir;

    fn temp_config_path(name: &str) -> PathBuf {
        temp_dir().join(format!("slab_core_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_default_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.layer_counts.len(), 25);
    }

    #[test]
    fn test_template_carries_material() {
        let config = AnalysisConfig {
            strip_width_mm: 150.0,
            layer_thickness_mm: 0.5,
            e_reinforcement_pa: 2.0e11,
            strip_count: 2,
            ..AnalysisConfig::default()
        };
        let scheme = config.scheme(3);
        assert_relative_eq!(scheme.strip_width_m, 0.15);
        assert_relative_eq!(scheme.thickness_m(), 0.0015, max_relative = 1e-12);
        assert_eq!(scheme.e_pa, 2.0e11);
        assert_eq!(scheme.strip_count, 2);
        assert_eq!(config.template().layer_count, 0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AnalysisConfig = serde_json::from_str(r#"{ "strip_count": 3 }"#).unwrap();
        assert_eq!(config.strip_count, 3);
        assert_eq!(config.geometry, SlabGeometry::default());
        assert_eq!(config.curve_samples, 101);
        assert_eq!(config.neutral_axis, NeutralAxis::Midpoint);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let zero_strips = AnalysisConfig {
            strip_count: 0,
            ..AnalysisConfig::default()
        };
        assert!(zero_strips.validate().is_err());

        let no_layers = AnalysisConfig {
            layer_counts: vec![],
            ..AnalysisConfig::default()
        };
        assert!(no_layers.validate().is_err());

        let too_wide = AnalysisConfig {
            strip_width_mm: 500.0,
            strip_count: 3,
            ..AnalysisConfig::default()
        };
        let err = too_wide.validate().unwrap_err();
        assert!(err.is_configuration_error());

        let bad_length = AnalysisConfig {
            length_percent: 120.0,
            ..AnalysisConfig::default()
        };
        assert!(bad_length.validate().is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_config_path("roundtrip");
        let config = AnalysisConfig {
            strip_width_mm: 250.0,
            length_percent: 61.7,
            strip_count: 3,
            layer_thickness_mm: 0.1 + 0.2,
            layer_counts: vec![2, 4, 6],
            neutral_axis: NeutralAxis::TransformedCentroid,
            ..AnalysisConfig::default()
        };

        save_config(&config, &path).unwrap();
        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);
        assert!(!tmp_path_for(&path).exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let path = temp_config_path("invalid");
        fs::write(&path, r#"{ "strip_count": 7 }"#).unwrap();
        let err = load_config(&path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        fs::write(&path, "not json").unwrap();
        let err = load_config(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(&temp_config_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
