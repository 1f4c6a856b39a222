//! Graph artifact persistence

use std::path::Path;

use crate::app::discovery::WalkError;
use crate::app::topology::TopologyGraph;

/// Write the graph as DOT to `path`, replacing any previous artifact.
///
/// Called once per run, after the walk has completed.
pub fn write_graph_artifact(graph: &TopologyGraph, path: &Path) -> Result<(), WalkError> {
    let dot = graph.to_dot();
    std::fs::write(path, dot.as_bytes()).map_err(|source| WalkError::ArtifactWrite {
        path: path.to_path_buf(),
        source,
    })?;
    trace_info!(
        "Graph artifact written to {} ({} bytes)",
        path.display(),
        dot.len()
    );
    Ok(())
}
