//! Per-query search statistics.
//!
//! This module provides the counter object a solver fills while it runs:
//! expanded vertices, improving edge relaxations, and heuristic fallbacks for
//! coordinate-less vertices.

mod stats;
pub use stats::*;
