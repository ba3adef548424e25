use hashbrown::HashMap;
use tracing::debug;

use crate::graph::{Cost, GraphStore, VertexId};
use crate::search::path;
use crate::sets::{BestPathTable, Frontier};
use crate::statistics::Stats;

/// Final state of a query.
///
/// Negative results are values the caller branches on, never errors: an
/// unreachable goal and an unknown endpoint are both normal outcomes of a
/// well-formed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The goal was reached; `cost` is the optimal path cost.
    Route { cost: Cost },
    /// The frontier emptied without reaching the goal.
    NoRoute,
    /// Start or goal is absent from the coordinate table; the search loop
    /// was never entered.
    UnknownVertex,
}

impl Outcome {
    /// The optimal cost, if a route was found.
    pub fn cost(&self) -> Option<Cost> {
        match *self {
            Outcome::Route { cost } => Some(cost),
            Outcome::NoRoute | Outcome::UnknownVertex => None,
        }
    }
}

/// Result of one [`AStarSolver::solve`] call.
#[derive(Debug)]
pub struct Solution {
    pub outcome: Outcome,
    pub stats: Stats,
}

/// Heuristic-guided best-first (A*) solver for one single-pair query.
///
/// The solver owns all mutable search state (frontier, best-path table and
/// g-cost bookkeeping) while the graph itself stays shared and read-only.
/// Construct a fresh solver per query; running a second `solve` on the same
/// instance would start from the residue of the first.
///
/// With non-negative edge costs and the great-circle heuristic (admissible
/// and consistent), the first pop of a vertex already carries its optimal
/// g-cost, so no vertex is ever reopened and the best-path table needs no
/// separate closed flag.
pub struct AStarSolver<'g> {
    graph: &'g GraphStore,
    frontier: Frontier,
    best_paths: BestPathTable,
    g_costs: HashMap<VertexId, Cost>,
}

impl<'g> AStarSolver<'g> {
    /// Creates a solver with fresh, empty query state over `graph`.
    pub fn new(graph: &'g GraphStore) -> Self {
        AStarSolver {
            graph,
            frontier: Frontier::new(),
            best_paths: BestPathTable::new(),
            g_costs: HashMap::new(),
        }
    }

    fn estimate(&self, vertex: VertexId, goal: VertexId, stats: &mut Stats) -> f64 {
        match self.graph.heuristic(vertex, goal) {
            Some(h) => h,
            None => {
                stats.bump_heuristic_fallback();
                0.0
            }
        }
    }

    /// Runs the search from `start` to `goal`.
    ///
    /// Endpoints without coordinates yield [`Outcome::UnknownVertex`] with
    /// zero expansions; an exhausted frontier yields [`Outcome::NoRoute`].
    /// Equal-cost rediscoveries of a vertex are rejected, so the first
    /// discovered path among ties is kept and repeated runs expand the same
    /// vertices in the same order.
    pub fn solve(&mut self, start: VertexId, goal: VertexId) -> Solution {
        let graph = self.graph;
        let mut stats = Stats::new();

        if !graph.contains(start) || !graph.contains(goal) {
            return Solution {
                outcome: Outcome::UnknownVertex,
                stats,
            };
        }

        self.g_costs.insert(start, 0);
        let f_start = self.estimate(start, goal, &mut stats);
        self.frontier.push(f_start, start);
        self.best_paths.record(start, 0, None);

        while !self.frontier.is_empty() {
            let current = self.frontier.pop();

            if current == goal {
                let cost = self.g_costs[&current];
                debug!(cost, expanded = stats.expanded_nodes(), "route found");
                return Solution {
                    outcome: Outcome::Route { cost },
                    stats,
                };
            }

            stats.bump_expanded();
            let current_g = self.g_costs[&current];

            for (neighbor, edge_cost) in graph.neighbors(current) {
                let candidate_g = current_g + edge_cost;

                // strictly-better only: an equal-cost rediscovery keeps the
                // first recorded path
                if self
                    .g_costs
                    .get(&neighbor)
                    .is_some_and(|&best| candidate_g >= best)
                {
                    continue;
                }

                self.g_costs.insert(neighbor, candidate_g);
                let f = candidate_g as f64 + self.estimate(neighbor, goal, &mut stats);
                self.frontier.push(f, neighbor);
                self.best_paths.record(neighbor, candidate_g, Some(current));
                stats.bump_relaxed();
            }
        }

        debug!(expanded = stats.expanded_nodes(), "frontier exhausted");
        Solution {
            outcome: Outcome::NoRoute,
            stats,
        }
    }

    /// Vertex sequence of the route recorded by the last `solve`, from
    /// `start` to `goal`; empty when no recorded path connects them.
    pub fn path_vertices(&self, start: VertexId, goal: VertexId) -> Vec<VertexId> {
        path::path_vertices(&self.best_paths, start, goal)
    }

    /// Renders the recorded route in the `<v> - (<cost>) - <v>` line format;
    /// empty string when no recorded path connects `start` and `goal`.
    pub fn reconstruct_path(&self, start: VertexId, goal: VertexId) -> String {
        path::render_route(self.graph, &self.best_paths, start, goal)
    }
}
