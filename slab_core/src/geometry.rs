//! # Geometry Model
//!
//! Immutable descriptions of the slab and of the composite strengthening
//! applied to its soffit. Both are plain values: every analysis takes them by
//! reference and recomputes what it needs, so there is no "current" state.
//!
//! ## Coordinates
//!
//! - Lateral position is measured from the slab's left edge (0 to `width_m`).
//! - Depth is measured up from the slab soffit; bonded strips sit at negative
//!   depths between `-thickness` and 0.
//! - Span position runs from the left support (0) to the right support (`span_m`).
//!
//! ## Example
//!
//! ```rust
//! use slab_core::geometry::{ReinforcementScheme, SlabGeometry};
//!
//! let slab = SlabGeometry::default();
//! slab.validate().unwrap();
//!
//! // Two 100 mm strips, 3 plies each, over the middle 60% of the span
//! let scheme = ReinforcementScheme::from_layers(100.0, 3, 60.0, 2);
//! scheme.validate(&slab).unwrap();
//! assert!((scheme.thickness_m() - 0.0012).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::section::{rectangular_area, void_area};
use crate::errors::{CalcError, CalcResult};
use crate::units::{Meters, Millimeters};

/// Thickness of one composite ply (m)
pub const LAYER_THICKNESS_M: f64 = 0.0004;

/// Elastic modulus of the carbon-fiber laminate (Pa)
pub const E_CARBON_PA: f64 = 1.65e11;

/// Largest number of strips the placement policy supports
pub const MAX_STRIP_COUNT: u32 = 3;

/// Strip widths offered to users (mm)
pub const STRIP_WIDTH_OPTIONS_MM: [f64; 6] = [50.0, 100.0, 150.0, 200.0, 250.0, 300.0];

/// Slack for strip-fit comparisons (m)
const FIT_TOLERANCE_M: f64 = 1e-9;

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be a positive number"));
    }
    Ok(())
}

// ============================================================================
// Slab
// ============================================================================

/// Physical constants of a hollow-core slab on a simple span.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width_m": 1.2,
///   "height_m": 0.265,
///   "span_m": 9.4,
///   "void_count": 5,
///   "void_radius_m": 0.075,
///   "void_rect_height_m": 0.055,
///   "e_concrete_pa": 3e10,
///   "load_n_per_m": 10602.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlabGeometry {
    /// Slab width (m)
    pub width_m: f64,
    /// Slab depth (m)
    pub height_m: f64,
    /// Clear span between supports (m)
    pub span_m: f64,
    /// Number of longitudinal voids
    pub void_count: u32,
    /// Radius of the void end caps (m)
    pub void_radius_m: f64,
    /// Height of the straight segment between the caps (m)
    pub void_rect_height_m: f64,
    /// Concrete elastic modulus (Pa)
    pub e_concrete_pa: f64,
    /// Uniform line load on the span (N/m)
    pub load_n_per_m: f64,
}

impl Default for SlabGeometry {
    /// The 1.2 m × 265 mm reference slab on a 9.4 m span
    fn default() -> Self {
        SlabGeometry {
            width_m: 1.2,
            height_m: 0.265,
            span_m: 9.4,
            void_count: 5,
            void_radius_m: 0.075,
            void_rect_height_m: 0.055,
            e_concrete_pa: 3e10,
            load_n_per_m: 10602.0,
        }
    }
}

impl SlabGeometry {
    /// Validate dimensions, moduli and void fit.
    ///
    /// Voids must fit side by side within the width (`count · 2r ≤ width`) and
    /// within the depth (`2r + rect_height ≤ height`).
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("width_m", self.width_m)?;
        require_positive("height_m", self.height_m)?;
        require_positive("span_m", self.span_m)?;
        require_positive("e_concrete_pa", self.e_concrete_pa)?;
        require_positive("load_n_per_m", self.load_n_per_m)?;

        if self.void_count > 0 {
            require_positive("void_radius_m", self.void_radius_m)?;
            if !(self.void_rect_height_m >= 0.0) {
                return Err(CalcError::invalid_input(
                    "void_rect_height_m",
                    self.void_rect_height_m.to_string(),
                    "Void straight segment cannot be negative",
                ));
            }

            let occupied_width = self.void_count as f64 * 2.0 * self.void_radius_m;
            if occupied_width > self.width_m {
                return Err(CalcError::invalid_input(
                    "void_count",
                    self.void_count.to_string(),
                    format!(
                        "{} voids of radius {} m need {:.4} m, slab is {} m wide",
                        self.void_count, self.void_radius_m, occupied_width, self.width_m
                    ),
                ));
            }

            let void_height = 2.0 * self.void_radius_m + self.void_rect_height_m;
            if void_height > self.height_m {
                return Err(CalcError::invalid_input(
                    "void_radius_m",
                    self.void_radius_m.to_string(),
                    format!("Void height {:.4} m exceeds slab height {} m", void_height, self.height_m),
                ));
            }
        }
        Ok(())
    }

    /// Net concrete area of the section, gross minus voids (m²)
    pub fn concrete_area_m2(&self) -> f64 {
        rectangular_area(self.width_m, self.height_m)
            - self.void_count as f64 * void_area(self.void_radius_m, self.void_rect_height_m)
    }

    /// Midspan position (m)
    pub fn midspan_m(&self) -> f64 {
        self.span_m / 2.0
    }
}

// ============================================================================
// Reinforcement
// ============================================================================

/// Composite strips bonded to the slab soffit.
///
/// Single- and multi-strip layouts, and thickness- or ply-count input, are all
/// expressed through this one type. A scheme with no plies, no strips or zero
/// strip width carries no load and analyses exactly like the bare slab.
///
/// ## JSON Example
///
/// ```json
/// {
///   "strip_width_m": 0.1,
///   "layer_count": 2,
///   "layer_thickness_m": 0.0004,
///   "strip_count": 1,
///   "length_percent": 100.0,
///   "e_pa": 1.65e11
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementScheme {
    /// Width of one strip (m)
    pub strip_width_m: f64,
    /// Number of plies laminated into each strip
    pub layer_count: u32,
    /// Thickness of one ply (m)
    pub layer_thickness_m: f64,
    /// Number of strips across the slab width (0 to 3)
    pub strip_count: u32,
    /// Bonded length as a percentage of the span, centered on midspan
    pub length_percent: f64,
    /// Laminate elastic modulus (Pa)
    pub e_pa: f64,
}

impl Default for ReinforcementScheme {
    fn default() -> Self {
        ReinforcementScheme::none()
    }
}

impl ReinforcementScheme {
    /// No strengthening
    pub fn none() -> Self {
        ReinforcementScheme {
            strip_width_m: 0.0,
            layer_count: 0,
            layer_thickness_m: LAYER_THICKNESS_M,
            strip_count: 0,
            length_percent: 0.0,
            e_pa: E_CARBON_PA,
        }
    }

    /// Carbon strips built from standard 0.4 mm plies.
    ///
    /// # Arguments
    ///
    /// * `strip_width_mm` - Width of one strip (mm)
    /// * `layers` - Plies per strip
    /// * `length_percent` - Bonded length as % of span
    /// * `strip_count` - Strips across the width
    pub fn from_layers(strip_width_mm: f64, layers: u32, length_percent: f64, strip_count: u32) -> Self {
        let width: Meters = Millimeters(strip_width_mm).into();
        ReinforcementScheme {
            strip_width_m: width.value(),
            layer_count: layers,
            layer_thickness_m: LAYER_THICKNESS_M,
            strip_count,
            length_percent,
            e_pa: E_CARBON_PA,
        }
    }

    /// Carbon strips of a given total thickness.
    ///
    /// The ply count is the thickness rounded up to whole 0.4 mm plies, and
    /// the ply thickness is rescaled so `thickness_m()` returns exactly the
    /// requested value. Bonded area is counted per ply.
    pub fn from_thickness_mm(strip_width_mm: f64, thickness_mm: f64, length_percent: f64, strip_count: u32) -> Self {
        let thickness: Meters = Millimeters(thickness_mm.max(0.0)).into();
        let layers = layers_for_thickness(thickness.value(), LAYER_THICKNESS_M);
        let mut scheme = ReinforcementScheme::from_layers(strip_width_mm, layers, length_percent, strip_count);
        if layers > 0 {
            scheme.layer_thickness_m = thickness.value() / layers as f64;
        }
        scheme
    }

    /// Same scheme with a different ply count
    pub fn with_layers(self, layers: u32) -> Self {
        ReinforcementScheme {
            layer_count: layers,
            ..self
        }
    }

    /// Same scheme with a different laminate modulus
    pub fn with_modulus(self, e_pa: f64) -> Self {
        ReinforcementScheme { e_pa, ..self }
    }

    /// Total strip thickness (m)
    pub fn thickness_m(&self) -> f64 {
        self.layer_count as f64 * self.layer_thickness_m
    }

    /// Cross-sectional area of one strip (m²)
    pub fn area_per_strip_m2(&self) -> f64 {
        rectangular_area(self.strip_width_m, self.thickness_m())
    }

    /// Cross-sectional area of all strips (m²)
    pub fn total_area_m2(&self) -> f64 {
        self.area_per_strip_m2() * self.strip_count as f64
    }

    /// True when the strips add stiffness
    pub fn is_active(&self) -> bool {
        self.thickness_m() > 0.0 && self.total_area_m2() > 0.0
    }

    /// True when the strips run the full span
    pub fn is_full_length(&self) -> bool {
        self.length_percent >= 100.0
    }

    /// Bonded length along the span (m)
    pub fn reinforced_length_m(&self, span_m: f64) -> f64 {
        self.length_percent.clamp(0.0, 100.0) / 100.0 * span_m
    }

    /// Distance from each support to the start of the bonded zone (m).
    ///
    /// `a = (L - L_r)/2`; zero for full-length strips.
    pub fn unbonded_end_m(&self, span_m: f64) -> f64 {
        if self.is_full_length() {
            0.0
        } else {
            (span_m - self.reinforced_length_m(span_m)) / 2.0
        }
    }

    /// True when laminate is bonded at span position `x` m
    pub fn is_bonded_at(&self, span_m: f64, x: f64) -> bool {
        if !self.is_active() {
            return false;
        }
        let a = self.unbonded_end_m(span_m);
        x >= a && x <= span_m - a
    }

    /// Plan area of laminate actually bonded (m²):
    /// strip width × bonded length × strips × plies
    pub fn bonded_area_m2(&self, span_m: f64) -> f64 {
        self.strip_width_m * self.reinforced_length_m(span_m) * self.strip_count as f64 * self.layer_count as f64
    }

    /// Validate against the slab the strips are bonded to.
    pub fn validate(&self, slab: &SlabGeometry) -> CalcResult<()> {
        if self.strip_count > MAX_STRIP_COUNT {
            return Err(CalcError::invalid_input(
                "strip_count",
                self.strip_count.to_string(),
                format!("At most {} strips are supported", MAX_STRIP_COUNT),
            ));
        }
        if !(0.0..=100.0).contains(&self.length_percent) {
            return Err(CalcError::invalid_input(
                "length_percent",
                self.length_percent.to_string(),
                "Bonded length must be between 0 and 100% of the span",
            ));
        }
        if !(self.strip_width_m >= 0.0) || !self.strip_width_m.is_finite() {
            return Err(CalcError::invalid_input(
                "strip_width_m",
                self.strip_width_m.to_string(),
                "Strip width cannot be negative",
            ));
        }
        if !(self.layer_thickness_m >= 0.0) || !self.layer_thickness_m.is_finite() {
            return Err(CalcError::invalid_input(
                "layer_thickness_m",
                self.layer_thickness_m.to_string(),
                "Ply thickness cannot be negative",
            ));
        }
        if !self.is_active() {
            return Ok(());
        }
        require_positive("e_pa", self.e_pa)?;

        // Evenly spaced strips may not overlap their neighbours, and a lone
        // centered strip may not hang past the edges
        let pitch = slab.width_m / (self.strip_count as f64 + 1.0);
        let max_width = if self.strip_count > 1 { pitch } else { slab.width_m };
        if self.strip_width_m > max_width + FIT_TOLERANCE_M {
            return Err(CalcError::invalid_input(
                "strip_width_m",
                self.strip_width_m.to_string(),
                format!(
                    "{} strips on a {} m slab allow at most {:.3} m each",
                    self.strip_count, slab.width_m, max_width
                ),
            ));
        }
        Ok(())
    }
}

/// Whole plies needed for a thickness, tolerant of float noise (0.8 mm is 2 plies, not 3)
pub fn layers_for_thickness(thickness_m: f64, ply_m: f64) -> u32 {
    if thickness_m <= 0.0 || ply_m <= 0.0 {
        return 0;
    }
    ((thickness_m / ply_m) - 1e-9).ceil().max(1.0) as u32
}

// ============================================================================
// Layout
// ============================================================================

/// Strip placement across the slab width.
///
/// Strip centers are evenly spaced at `width/(n+1)·(i+1)`; a single strip is
/// centered. Offsets are measured from the section's vertical centerline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripLayout {
    /// Strip centers from the slab's left edge (m)
    pub centers_m: Vec<f64>,
    /// Lateral offsets from the centerline (m), negative to the left
    pub offsets_m: Vec<f64>,
}

impl StripLayout {
    /// Evenly spaced placement of `count` strips across `slab_width_m`
    pub fn evenly_spaced(slab_width_m: f64, count: u32) -> Self {
        let pitch = slab_width_m / (count as f64 + 1.0);
        let centers_m: Vec<f64> = (1..=count).map(|i| pitch * i as f64).collect();
        let offsets_m = centers_m.iter().map(|c| c - slab_width_m / 2.0).collect();
        StripLayout { centers_m, offsets_m }
    }
}

/// Outline of one void, for section drawings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoidOutline {
    /// Lateral center (m)
    pub center_m: f64,
    /// Bottom of the straight segment, i.e. center of the lower cap (m)
    pub rect_bottom_m: f64,
    /// Top of the straight segment, i.e. center of the upper cap (m)
    pub rect_top_m: f64,
    /// Cap radius (m)
    pub radius_m: f64,
}

/// Outline of one strip, for section drawings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripOutline {
    /// Left edge (m)
    pub left_m: f64,
    /// Strip width (m)
    pub width_m: f64,
    /// Bottom face, negative below the soffit (m)
    pub bottom_m: f64,
    /// Strip thickness (m)
    pub thickness_m: f64,
}

/// Cross-section drawing data: slab outline, voids and strips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLayout {
    pub width_m: f64,
    pub height_m: f64,
    pub voids: Vec<VoidOutline>,
    pub strips: Vec<StripOutline>,
}

/// Lay out voids and strips in the section.
///
/// Voids are spaced like strips (`width/(n+1)`) and centered at mid-height.
pub fn section_layout(slab: &SlabGeometry, scheme: &ReinforcementScheme) -> SectionLayout {
    let void_pitch = slab.width_m / (slab.void_count as f64 + 1.0);
    let rect_bottom_m = (slab.height_m - slab.void_rect_height_m) / 2.0;
    let voids = (1..=slab.void_count)
        .map(|i| VoidOutline {
            center_m: void_pitch * i as f64,
            rect_bottom_m,
            rect_top_m: rect_bottom_m + slab.void_rect_height_m,
            radius_m: slab.void_radius_m,
        })
        .collect();

    let strips = if scheme.is_active() {
        let thickness_m = scheme.thickness_m();
        StripLayout::evenly_spaced(slab.width_m, scheme.strip_count)
            .centers_m
            .into_iter()
            .map(|center| StripOutline {
                left_m: center - scheme.strip_width_m / 2.0,
                width_m: scheme.strip_width_m,
                bottom_m: -thickness_m,
                thickness_m,
            })
            .collect()
    } else {
        Vec::new()
    };

    SectionLayout {
        width_m: slab.width_m,
        height_m: slab.height_m,
        voids,
        strips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_slab_is_valid() {
        SlabGeometry::default().validate().unwrap();
    }

    #[test]
    fn test_non_positive_dimensions_rejected() {
        let mut slab = SlabGeometry::default();
        slab.height_m = 0.0;
        let err = slab.validate().unwrap_err();
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("height_m"));

        let mut slab = SlabGeometry::default();
        slab.span_m = -9.4;
        assert!(slab.validate().is_err());

        let mut slab = SlabGeometry::default();
        slab.e_concrete_pa = f64::NAN;
        assert!(slab.validate().is_err());
    }

    #[test]
    fn test_overlapping_voids_rejected() {
        let slab = SlabGeometry {
            void_count: 9,
            ..SlabGeometry::default()
        };
        // 9 × 0.15 m = 1.35 m > 1.2 m
        let err = slab.validate().unwrap_err();
        assert!(err.to_string().contains("void_count"));
    }

    #[test]
    fn test_void_taller_than_slab_rejected() {
        let slab = SlabGeometry {
            void_rect_height_m: 0.2,
            ..SlabGeometry::default()
        };
        assert!(slab.validate().is_err());
    }

    #[test]
    fn test_solid_slab_ignores_void_dimensions() {
        let slab = SlabGeometry {
            void_count: 0,
            void_radius_m: 0.0,
            ..SlabGeometry::default()
        };
        slab.validate().unwrap();
        assert_relative_eq!(slab.concrete_area_m2(), 1.2 * 0.265);
    }

    #[test]
    fn test_none_is_inactive() {
        let none = ReinforcementScheme::none();
        assert!(!none.is_active());
        assert_eq!(none.thickness_m(), 0.0);
        assert_eq!(none.bonded_area_m2(9.4), 0.0);
        none.validate(&SlabGeometry::default()).unwrap();
    }

    #[test]
    fn test_zero_strips_is_inactive() {
        let scheme = ReinforcementScheme::from_layers(100.0, 4, 100.0, 0);
        assert!(!scheme.is_active());
    }

    #[test]
    fn test_from_layers() {
        let scheme = ReinforcementScheme::from_layers(150.0, 5, 50.0, 2);
        assert_relative_eq!(scheme.strip_width_m, 0.15);
        assert_relative_eq!(scheme.thickness_m(), 0.002, max_relative = 1e-12);
        assert_relative_eq!(scheme.reinforced_length_m(9.4), 4.7);
        assert_relative_eq!(scheme.unbonded_end_m(9.4), 2.35);
        // 0.15 × 4.7 × 2 strips × 5 plies
        assert_relative_eq!(scheme.bonded_area_m2(9.4), 7.05, max_relative = 1e-12);
    }

    #[test]
    fn test_from_thickness_rounds_up_to_whole_plies() {
        let scheme = ReinforcementScheme::from_thickness_mm(100.0, 1.0, 100.0, 1);
        assert_eq!(scheme.layer_count, 3);
        assert_relative_eq!(scheme.thickness_m(), 0.001, max_relative = 1e-12);

        let exact = ReinforcementScheme::from_thickness_mm(100.0, 0.8, 100.0, 1);
        assert_eq!(exact.layer_count, 2);

        let none = ReinforcementScheme::from_thickness_mm(100.0, 0.0, 100.0, 1);
        assert_eq!(none.layer_count, 0);
        assert!(!none.is_active());
    }

    #[test]
    fn test_full_length_has_no_unbonded_end() {
        let scheme = ReinforcementScheme::from_layers(100.0, 1, 100.0, 1);
        assert!(scheme.is_full_length());
        assert_eq!(scheme.unbonded_end_m(9.4), 0.0);
    }

    #[test]
    fn test_scheme_validation() {
        let slab = SlabGeometry::default();
        assert!(ReinforcementScheme::from_layers(100.0, 1, 100.0, 4).validate(&slab).is_err());
        assert!(ReinforcementScheme::from_layers(100.0, 1, 120.0, 1).validate(&slab).is_err());
        assert!(ReinforcementScheme::from_layers(100.0, 1, -5.0, 1).validate(&slab).is_err());
        // 3 × 500 mm does not fit in 1.2 m
        assert!(ReinforcementScheme::from_layers(500.0, 1, 100.0, 3).validate(&slab).is_err());
        assert!(ReinforcementScheme::from_layers(100.0, 1, 100.0, 1)
            .with_modulus(0.0)
            .validate(&slab)
            .is_err());
        ReinforcementScheme::from_layers(300.0, 10, 35.0, 3).validate(&slab).unwrap();
    }

    #[test]
    fn test_overlapping_strips_rejected() {
        let slab = SlabGeometry::default();
        // Pitch is 0.3 m for three strips and 0.4 m for two
        let err = ReinforcementScheme::from_layers(380.0, 2, 100.0, 3).validate(&slab).unwrap_err();
        assert!(err.is_configuration_error());
        assert!(ReinforcementScheme::from_layers(550.0, 1, 100.0, 2).validate(&slab).is_err());
        assert!(ReinforcementScheme::from_layers(400.0, 1, 100.0, 3).validate(&slab).is_err());

        ReinforcementScheme::from_layers(300.0, 1, 100.0, 3).validate(&slab).unwrap();
        ReinforcementScheme::from_layers(400.0, 1, 100.0, 2).validate(&slab).unwrap();
        ReinforcementScheme::from_layers(300.0, 1, 100.0, 1).validate(&slab).unwrap();
        assert!(ReinforcementScheme::from_layers(1300.0, 1, 100.0, 1).validate(&slab).is_err());
    }

    #[test]
    fn test_bonded_zone() {
        let scheme = ReinforcementScheme::from_layers(100.0, 2, 50.0, 1);
        // 50% of 9.4 m leaves 2.35 m unbonded at each end
        assert!(!scheme.is_bonded_at(9.4, 1.0));
        assert!(scheme.is_bonded_at(9.4, 4.7));
        assert!(!scheme.is_bonded_at(9.4, 8.0));

        let full = ReinforcementScheme::from_layers(100.0, 2, 100.0, 1);
        assert!(full.is_bonded_at(9.4, 0.0));
        assert!(!ReinforcementScheme::none().is_bonded_at(9.4, 4.7));
    }

    #[test]
    fn test_strip_layout_even_spacing() {
        let single = StripLayout::evenly_spaced(1.2, 1);
        assert_relative_eq!(single.centers_m[0], 0.6);
        assert_relative_eq!(single.offsets_m[0], 0.0);

        let triple = StripLayout::evenly_spaced(1.2, 3);
        assert_relative_eq!(triple.centers_m[0], 0.3);
        assert_relative_eq!(triple.offsets_m[0], -0.3, max_relative = 1e-12);
        assert_relative_eq!(triple.offsets_m[1], 0.0, epsilon = 1e-15);
        assert_relative_eq!(triple.offsets_m[2], 0.3, max_relative = 1e-12);
    }

    #[test]
    fn test_section_layout() {
        let slab = SlabGeometry::default();
        let scheme = ReinforcementScheme::from_layers(100.0, 2, 100.0, 2);
        let layout = section_layout(&slab, &scheme);

        assert_eq!(layout.voids.len(), 5);
        assert_relative_eq!(layout.voids[0].center_m, 0.2, max_relative = 1e-12);
        assert_relative_eq!(layout.voids[0].rect_bottom_m, 0.105, max_relative = 1e-12);
        assert_relative_eq!(layout.voids[0].rect_top_m, 0.16, max_relative = 1e-12);

        assert_eq!(layout.strips.len(), 2);
        assert_relative_eq!(layout.strips[0].left_m, 0.35, max_relative = 1e-12);
        assert_relative_eq!(layout.strips[1].left_m, 0.75, max_relative = 1e-12);
        assert_relative_eq!(layout.strips[0].bottom_m, -0.0008, max_relative = 1e-12);

        let bare = section_layout(&slab, &ReinforcementScheme::none());
        assert!(bare.strips.is_empty());
    }

    #[test]
    fn test_scheme_serialization_roundtrip() {
        let scheme = ReinforcementScheme::from_layers(200.0, 7, 45.0, 3);
        let json = serde_json::to_string(&scheme).unwrap();
        let roundtrip: ReinforcementScheme = serde_json::from_str(&json).unwrap();
        assert_eq!(scheme, roundtrip);
    }
}
