use std::path::Path;

use serde::Serialize;

/// Diagnostic counters for a single query.
#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    expanded_nodes: usize,
    relaxed_edges: usize,
    heuristic_fallbacks: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            expanded_nodes: 0,
            relaxed_edges: 0,
            heuristic_fallbacks: 0,
        }
    }

    /// Record into the statistics object that a vertex was popped and expanded
    pub fn bump_expanded(&mut self) {
        self.expanded_nodes += 1
    }

    /// Record into the statistics object that an edge relaxation improved the
    /// best known path to its target
    pub fn bump_relaxed(&mut self) {
        self.relaxed_edges += 1
    }

    /// Record that the heuristic fell back to zero because a vertex has no
    /// coordinates. Zero stays admissible, but the estimate is no longer
    /// informative there, so the degradation is counted instead of hidden.
    pub fn bump_heuristic_fallback(&mut self) {
        self.heuristic_fallbacks += 1
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn relaxed_edges(&self) -> usize {
        self.relaxed_edges
    }

    pub fn heuristic_fallbacks(&self) -> usize {
        self.heuristic_fallbacks
    }

    /// Writes the counters to `path` as a JSON object.
    pub fn dump(&self, path: &Path) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self).map_err(std::io::Error::from)
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}
