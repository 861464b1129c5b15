use layergen_core::errors::LayergenError;
use sha2::{Digest, Sha256};

use crate::graph::LayeredGraph;

/// Computes the canonical structural hash for the provided graph.
///
/// The encoding walks vertices and edges in id order, so two graphs hash
/// equal exactly when they are structurally identical (same layering,
/// same edges, same colors). Round-trip tests and the CLI log line rely
/// on this.
pub fn canonical_hash(graph: &LayeredGraph) -> Result<String, LayergenError> {
    let mut hasher = Sha256::new();
    hasher.update((graph.depth() as u64).to_le_bytes());

    hasher.update((graph.vertex_count() as u64).to_le_bytes());
    for vertex in graph.vertices() {
        hasher.update((graph.vertex_depth(vertex)? as u64).to_le_bytes());
        let edge_ids = graph.connected_edge_ids(vertex)?;
        hasher.update((edge_ids.len() as u64).to_le_bytes());
        for edge_id in edge_ids {
            hasher.update(edge_id.as_raw().to_le_bytes());
        }
    }

    hasher.update((graph.edge_count() as u64).to_le_bytes());
    for edge in graph.edges() {
        hasher.update(edge.from().as_raw().to_le_bytes());
        hasher.update(edge.to().as_raw().to_le_bytes());
        hasher.update(edge.color().as_str().as_bytes());
    }

    Ok(format!("{:x}", hasher.finalize()))
}
