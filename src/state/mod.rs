//! State containers and the variable layout.
//!
//! # Submodules
//!
//! - [`layout`]: name → slot map shared by every kernel
//! - [`field`]: ghosted multi-component and scalar grid storage
//! - [`convert`]: primitive ↔ conservative helpers for callers

pub mod convert;
pub mod field;
pub mod layout;

pub use convert::{
    conservative_field_to_primitive, conservative_to_primitive, primitive_field_to_conservative,
    primitive_to_conservative,
};
pub use field::{CellField, ScalarField};
pub use layout::{N_BASE_VARS, VariableLayout};
