//! # slab_core - Hollow-Core Slab Strengthening Engine
//!
//! `slab_core` analyses a simply-supported hollow-core concrete slab with
//! carbon-fibre strips bonded to its soffit: section properties of the
//! transformed section, moment and shear, deflection by the unit-load method
//! with a stepped inertia profile, bending stress through the depth, and
//! sweeps over ply counts that rank strengthening schemes by how much
//! deflection each square meter of laminate removes.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions of explicit inputs, no ambient state
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Configuration and computation failures are distinct variants
//!
//! ## Quick Start
//!
//! ```rust
//! use slab_core::calculations::{deflection_at, Baseline};
//! use slab_core::geometry::{ReinforcementScheme, SlabGeometry};
//!
//! let slab = SlabGeometry::default();
//! let baseline = Baseline::compute(&slab).unwrap();
//!
//! let scheme = ReinforcementScheme::from_layers(100.0, 1, 100.0, 1);
//! let delta = deflection_at(slab.midspan_m(), &slab, &scheme).unwrap();
//! assert!(delta < baseline.deflection_m);
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Slab and strip descriptions, layout helpers
//! - [`calculations`] - Section, statics, deflection, stress and sweeps
//! - [`equations`] - Closed-form mechanics the calculations use
//! - [`config`] - JSON analysis configuration with atomic saves
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//!
//! The crate logs through the `log` facade and never installs a logger.

pub mod calculations;
pub mod config;
pub mod equations;
pub mod errors;
pub mod geometry;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{Baseline, SweepReport};
pub use config::{load_config, save_config, AnalysisConfig};
pub use errors::{CalcError, CalcResult};
pub use geometry::{ReinforcementScheme, SlabGeometry};
