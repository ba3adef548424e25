//! File system I/O operations for loading road-network datasets.
//!
//! This module provides the line-oriented parser for the coordinate and edge
//! dataset pair (`<base>.co` / `<base>.gr`) a [`crate::graph::GraphStore`] is
//! built from.

mod dimacs_load;

pub use dimacs_load::*;
