use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use hashbrown::HashMap;
use tracing::info;

use crate::geo::GeoPoint;
use crate::graph::{Cost, GraphStore, VertexId};

/// Fatal dataset-loading failures.
///
/// Load errors abort the whole run: a partially parsed graph is never
/// returned. Malformed individual lines are not errors; the parser skips
/// them.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("dataset file not found: {path}")]
    DatasetNotFound { path: PathBuf },

    #[error("no {kind} records parsed from {path}")]
    EmptyDataset { path: PathBuf, kind: &'static str },

    #[error("error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl GraphStore {
    /// Loads a graph from the dataset pair `<base>.co` and `<base>.gr`.
    ///
    /// Coordinate records have the form `v <id> <lon*1e6> <lat*1e6>`, edge
    /// records `a <from> <to> <cost>`; every other line (comments, headers,
    /// lines whose fields fail to parse) is skipped. Duplicate ordered pairs
    /// keep the last-loaded cost.
    ///
    /// # Errors
    /// [`LoadError::DatasetNotFound`] if either file is missing,
    /// [`LoadError::EmptyDataset`] if a file yields zero records.
    pub fn load(base: &str) -> Result<Self, LoadError> {
        let coords = load_coords(&format!("{base}.co"))?;
        let adjacency = load_edges(&format!("{base}.gr"))?;

        let graph = GraphStore::new(coords, adjacency);
        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            base,
            "graph loaded"
        );
        Ok(graph)
    }
}

fn open(path: &str) -> Result<BufReader<File>, LoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => LoadError::DatasetNotFound { path: path.into() },
        _ => LoadError::Io {
            path: path.into(),
            source,
        },
    })?;
    Ok(BufReader::new(file))
}

fn load_coords(path: &str) -> Result<HashMap<VertexId, GeoPoint>, LoadError> {
    let mut coords = HashMap::new();

    for line in open(path)?.lines() {
        let line = line.map_err(|source| LoadError::Io {
            path: path.into(),
            source,
        })?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 4 || fields[0] != "v" {
            continue;
        }
        // v <id> <lon*1e6> <lat*1e6>
        let (Some(id), Some(lon), Some(lat)) = (
            fields[1].parse::<VertexId>().ok(),
            fields[2].parse::<i64>().ok(),
            fields[3].parse::<i64>().ok(),
        ) else {
            continue;
        };
        coords.insert(
            id,
            GeoPoint::from_degrees(lat as f64 / 1e6, lon as f64 / 1e6),
        );
    }

    if coords.is_empty() {
        return Err(LoadError::EmptyDataset {
            path: path.into(),
            kind: "vertex",
        });
    }
    Ok(coords)
}

fn load_edges(path: &str) -> Result<HashMap<VertexId, HashMap<VertexId, Cost>>, LoadError> {
    let mut adjacency: HashMap<VertexId, HashMap<VertexId, Cost>> = HashMap::new();

    for line in open(path)?.lines() {
        let line = line.map_err(|source| LoadError::Io {
            path: path.into(),
            source,
        })?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 4 || fields[0] != "a" {
            continue;
        }
        // a <from> <to> <cost>; cost parses unsigned, so negative-weight
        // lines never enter the graph
        let (Some(from), Some(to), Some(cost)) = (
            fields[1].parse::<VertexId>().ok(),
            fields[2].parse::<VertexId>().ok(),
            fields[3].parse::<Cost>().ok(),
        ) else {
            continue;
        };
        adjacency.entry(from).or_default().insert(to, cost);
    }

    if adjacency.is_empty() {
        return Err(LoadError::EmptyDataset {
            path: path.into(),
            kind: "edge",
        });
    }
    Ok(adjacency)
}
