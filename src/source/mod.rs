//! Source terms of the split MHD update.
//!
//! # Submodules
//!
//! - [`traits`]: per-cell source term trait and evaluation context
//! - [`tension`]: magnetic-tension momentum source

pub mod tension;
pub mod traits;

pub use tension::{TensionSource, tension_source};
#[cfg(feature = "parallel")]
pub use tension::tension_source_parallel;
pub use traits::{SourceContext, SourceTerm};
