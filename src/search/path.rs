use crate::graph::{GraphStore, VertexId};
use crate::sets::BestPathTable;

/// Walks recorded predecessors backward from `goal` and returns the vertex
/// sequence from `start` to `goal`.
///
/// Returns an empty sequence when the walk does not end at `start`: the
/// recorded predecessors then do not connect the two, independently of what
/// the solver reported.
pub fn path_vertices(table: &BestPathTable, start: VertexId, goal: VertexId) -> Vec<VertexId> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(parent) = table.parent_of(current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();

    if path.first() != Some(&start) {
        return Vec::new();
    }
    path
}

/// Renders a recorded route as the alternating vertex / edge-cost line
/// `<start> - (<c1>) - <n1> - ... - (<cN>) - <goal>`.
///
/// Edge costs come from the graph, not the table, so the printed costs are
/// the original dataset values. A single-vertex route renders as just the
/// vertex id; a missing route renders as the empty string.
///
/// # Panics
/// Panics if a recorded predecessor pair has no edge in `graph`; the table
/// only ever records relaxations of existing edges.
pub fn render_route(
    graph: &GraphStore,
    table: &BestPathTable,
    start: VertexId,
    goal: VertexId,
) -> String {
    let path = path_vertices(table, start, goal);
    let Some((&first, rest)) = path.split_first() else {
        return String::new();
    };

    let mut out = first.to_string();
    let mut prev = first;
    for &vertex in rest {
        let cost = graph
            .edge_cost(prev, vertex)
            .expect("recorded predecessor without a matching edge");
        out.push_str(&format!(" - ({cost}) - {vertex}"));
        prev = vertex;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashMap;

    use crate::geo::GeoPoint;
    use crate::graph::Cost;

    fn chain_graph() -> GraphStore {
        let coords = [(1, 40.0, -3.0), (2, 40.1, -3.0), (3, 40.2, -3.0)]
            .into_iter()
            .map(|(id, lat, lon)| (id, GeoPoint::from_degrees(lat, lon)))
            .collect();
        let mut adjacency: HashMap<VertexId, HashMap<VertexId, Cost>> = HashMap::new();
        adjacency.entry(1).or_default().insert(2, 1498);
        adjacency.entry(2).or_default().insert(3, 8718);
        GraphStore::new(coords, adjacency)
    }

    fn chain_table() -> BestPathTable {
        let mut table = BestPathTable::new();
        table.record(1, 0, None);
        table.record(2, 1498, Some(1));
        table.record(3, 10216, Some(2));
        table
    }

    #[test]
    fn test_path_vertices_walks_back_to_start() {
        let table = chain_table();
        assert_eq!(path_vertices(&table, 1, 3), vec![1, 2, 3]);
        assert_eq!(path_vertices(&table, 1, 2), vec![1, 2]);
    }

    #[test]
    fn test_path_vertices_rejects_disconnected_head() {
        let table = chain_table();
        // the walk from 3 ends at 1, not at 2
        assert_eq!(path_vertices(&table, 2, 3), Vec::<VertexId>::new());
    }

    #[test]
    fn test_path_vertices_of_unrecorded_goal_is_empty() {
        let table = chain_table();
        assert_eq!(path_vertices(&table, 1, 99), Vec::<VertexId>::new());
    }

    #[test]
    fn test_single_vertex_path() {
        let mut table = BestPathTable::new();
        table.record(7, 0, None);
        assert_eq!(path_vertices(&table, 7, 7), vec![7]);
    }

    #[test]
    fn test_render_alternates_vertices_and_costs() {
        let graph = chain_graph();
        let table = chain_table();
        assert_eq!(
            render_route(&graph, &table, 1, 3),
            "1 - (1498) - 2 - (8718) - 3"
        );
    }

    #[test]
    fn test_render_single_vertex_is_bare_id() {
        let graph = chain_graph();
        let mut table = BestPathTable::new();
        table.record(1, 0, None);
        assert_eq!(render_route(&graph, &table, 1, 1), "1");
    }

    #[test]
    fn test_render_missing_route_is_empty_string() {
        let graph = chain_graph();
        let table = chain_table();
        assert_eq!(render_route(&graph, &table, 3, 1), "");
    }
}
