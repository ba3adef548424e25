use hashbrown::HashMap;

use crate::geo::{GeoPoint, great_circle_distance};

/// Externally assigned vertex identifier. Not necessarily contiguous, so all
/// per-vertex tables are keyed by id rather than indexed by position.
pub type VertexId = u32;

/// Non-negative edge cost, in the same unit as the great-circle heuristic
/// (metres for the road datasets).
pub type Cost = u64;

/// In-memory directed weighted graph with per-vertex coordinates.
///
/// # Invariants
/// - Immutable after construction; safe to share across concurrent queries.
/// - Edge costs are non-negative by construction (`Cost` is unsigned).
/// - A vertex may appear in `adjacency` without coordinates and vice versa;
///   [`heuristic`](GraphStore::heuristic) reports the former as `None`.
#[derive(Debug)]
pub struct GraphStore {
    adjacency: HashMap<VertexId, HashMap<VertexId, Cost>>,
    coords: HashMap<VertexId, GeoPoint>,
    edge_count: usize,
}

impl GraphStore {
    /// Builds a store from already-parsed coordinate and adjacency tables.
    ///
    /// The loader in [`crate::fs`] is the usual entry point; this constructor
    /// exists so small graphs can be assembled directly.
    pub fn new(
        coords: HashMap<VertexId, GeoPoint>,
        adjacency: HashMap<VertexId, HashMap<VertexId, Cost>>,
    ) -> Self {
        let edge_count = adjacency.values().map(HashMap::len).sum();
        GraphStore {
            adjacency,
            coords,
            edge_count,
        }
    }

    /// Number of vertices with known coordinates.
    pub fn vertex_count(&self) -> usize {
        self.coords.len()
    }

    /// Number of distinct directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether `vertex` is present in the coordinate table.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.coords.contains_key(&vertex)
    }

    /// Coordinates of `vertex`, if the dataset supplied any.
    pub fn coordinates(&self, vertex: VertexId) -> Option<GeoPoint> {
        self.coords.get(&vertex).copied()
    }

    /// Outgoing edges of `vertex` as `(target, cost)` pairs.
    ///
    /// Unknown and dead-end vertices yield an empty iterator, not an error.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, Cost)> + '_ {
        self.adjacency
            .get(&vertex)
            .into_iter()
            .flatten()
            .map(|(&target, &cost)| (target, cost))
    }

    /// Cost of the direct edge `from -> to`, if one exists.
    pub fn edge_cost(&self, from: VertexId, to: VertexId) -> Option<Cost> {
        self.adjacency.get(&from)?.get(&to).copied()
    }

    /// Great-circle distance between two vertices, in metres.
    ///
    /// Returns `None` when either vertex lacks coordinates. Callers that use
    /// this as the search heuristic substitute zero in that case; zero stays
    /// admissible but is no longer informative, so the substitution is
    /// counted rather than silently folded in.
    pub fn heuristic(&self, a: VertexId, b: VertexId) -> Option<f64> {
        let pa = self.coords.get(&a)?;
        let pb = self.coords.get(&b)?;
        Some(great_circle_distance(*pa, *pb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> GraphStore {
        let mut coords = HashMap::new();
        coords.insert(1, GeoPoint::from_degrees(40.0, -3.0));
        coords.insert(2, GeoPoint::from_degrees(41.0, -3.0));
        coords.insert(3, GeoPoint::from_degrees(41.0, -3.0));

        let mut adjacency: HashMap<VertexId, HashMap<VertexId, Cost>> = HashMap::new();
        adjacency.entry(1).or_default().insert(2, 120_000);
        adjacency.entry(2).or_default().insert(1, 120_000);
        adjacency.entry(2).or_default().insert(3, 5);
        // vertex 4 has an edge but no coordinates
        adjacency.entry(4).or_default().insert(1, 7);

        GraphStore::new(coords, adjacency)
    }

    #[test]
    fn test_counts() {
        let graph = store();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_neighbors_of_dead_end_is_empty() {
        let graph = store();
        assert_eq!(graph.neighbors(3).count(), 0);
    }

    #[test]
    fn test_neighbors_of_unknown_vertex_is_empty() {
        let graph = store();
        assert_eq!(graph.neighbors(999).count(), 0);
    }

    #[test]
    fn test_edge_cost_lookup() {
        let graph = store();
        assert_eq!(graph.edge_cost(2, 3), Some(5));
        assert_eq!(graph.edge_cost(3, 2), None);
        assert_eq!(graph.edge_cost(999, 1), None);
    }

    #[test]
    fn test_heuristic_is_zero_for_coincident_vertices() {
        let graph = store();
        assert_eq!(graph.heuristic(2, 3), Some(0.0));
    }

    #[test]
    fn test_heuristic_missing_coordinates() {
        let graph = store();
        assert_eq!(graph.heuristic(4, 1), None);
        assert_eq!(graph.heuristic(1, 4), None);
    }

    #[test]
    fn test_heuristic_magnitude() {
        let graph = store();
        // one degree of latitude, ~111 km
        let h = graph.heuristic(1, 2).unwrap();
        assert!(h > 110_000.0 && h < 112_000.0);
    }
}
