//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use radial_pattern::prelude::*;
//! ```

pub use crate::analytic::analytic_count;
pub use crate::lattice::{lattice_point_count, LatticePoint};
pub use crate::pattern::{BuildError, PatternTable};
pub use crate::strategy::{
    AnalyticCounter, CellCountHook, CellCounter, EstimateCounter, HookError, HuxleyCounter,
    LinearScanCounter,
};
