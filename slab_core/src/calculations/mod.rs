//! # Slab Calculations
//!
//! Every calculation is a pure function of explicit inputs: a
//! [`SlabGeometry`](crate::geometry::SlabGeometry), usually a
//! [`ReinforcementScheme`](crate::geometry::ReinforcementScheme), and the
//! sample counts or positions being asked for. Results are plain
//! JSON-serializable data.
//!
//! ## Available Calculations
//!
//! - [`section`] - Second moment of area, bare and transformed
//! - [`statics`] - Bending moment and shear along the span
//! - [`deflection`] - Unit-load deflection with a stepped inertia profile
//! - [`stress`] - Bending stress through the depth
//! - [`sweep`] - Ply-count sweeps against the bare-slab baseline

pub mod deflection;
pub mod section;
pub mod statics;
pub mod stress;
pub mod sweep;

pub use deflection::{deflection_at, deflection_curve, Baseline, DeflectionCurve, DeflectionPoint, InertiaProfile};
pub use section::{concrete_inertia, inertia, SectionProperties};
pub use statics::{internal_forces, moment, shear, ForcePoint, InternalForceDiagram};
pub use stress::{stress_profile, stress_profile_with_axis, NeutralAxis, StressPoint, StressProfile};
pub use sweep::{sweep, sweep_with_baseline, AnalysisRecord, SkippedSample, SweepReport, DEFAULT_LAYER_RANGE};
