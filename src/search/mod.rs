//! The A* query engine.
//!
//! [`AStarSolver`] runs one best-first search over a shared
//! [`crate::graph::GraphStore`]; [`path`] turns the recorded predecessors
//! back into a printable route.

mod path;
mod solver;

pub use path::*;
pub use solver::*;
