//! The immutable road-network graph.
//!
//! A [`GraphStore`] is built once from a dataset pair and never mutated
//! afterwards; every query reads it through `&self`.

mod graph_store;

pub use graph_store::*;
