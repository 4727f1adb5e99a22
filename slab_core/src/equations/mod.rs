//! # Structural Equations
//!
//! The closed-form mechanics the calculations are assembled from, kept apart
//! so each formula can be checked against its reference on its own.
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported beam formulas and virtual-work integrals
//! - [`section`] - Cross-section areas and second moments
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Shear**: Positive when left side moves up relative to right
//! - **Deflection**: Positive downward
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition
//! - Hibbeler, Structural Analysis (virtual work)

pub mod beam;
pub mod section;

pub use beam::{
    unit_load_moment,
    uniform_load_deflection,
    uniform_load_max_moment,
    uniform_load_moment,
    uniform_load_reactions,
    uniform_load_shear,
    uniform_load_virtual_work,
};

pub use section::{
    half_disk_area,
    half_disk_moment_of_inertia,
    modular_ratio,
    parallel_axis_term,
    rectangular_area,
    rectangular_moment_of_inertia,
    soffit_lever_arm,
    void_area,
    void_moment_of_inertia,
};
