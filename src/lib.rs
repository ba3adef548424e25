//! Single-pair shortest-path queries over road networks.
//!
//! A [`graph::GraphStore`] is loaded once from a DIMACS-style dataset pair
//! and shared read-only; each query runs a fresh [`search::AStarSolver`]
//! guided by the great-circle distance between vertex coordinates.

pub mod fs;
pub mod geo;
pub mod graph;
pub mod search;
pub mod sets;
pub mod statistics;

pub use fs::LoadError;
pub use graph::{Cost, GraphStore, VertexId};
pub use search::{AStarSolver, Outcome, Solution};
