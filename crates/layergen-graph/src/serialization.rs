use layergen_core::errors::{ErrorInfo, LayergenError};
use serde::{Deserialize, Serialize};

use crate::graph::{EdgeColor, LayeredGraph};

/// Serializes the graph to the pretty-printed JSON export schema.
///
/// The schema is the only externally observable contract:
/// `depth` counts populated layers (a single-vertex graph exports
/// `"depth": 1`), `vertices` are listed in id order with their incident
/// edge ids and depth, and `edges` in id order with `[from, to]`
/// endpoints and a lowercase color string.
pub fn graph_to_json(graph: &LayeredGraph) -> Result<String, LayergenError> {
    let document = GraphDocument::from_graph(graph)?;
    serde_json::to_string_pretty(&document)
        .map_err(|err| LayergenError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from its JSON representation.
pub fn graph_from_json(json: &str) -> Result<LayeredGraph, LayergenError> {
    let document: GraphDocument = serde_json::from_str(json)
        .map_err(|err| LayergenError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    document.into_graph()
}

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &LayeredGraph) -> Result<Vec<u8>, LayergenError> {
    let document = GraphDocument::from_graph(graph)?;
    bincode::serialize(&document)
        .map_err(|err| LayergenError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<LayeredGraph, LayergenError> {
    let document: GraphDocument = bincode::deserialize(bytes)
        .map_err(|err| LayergenError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    document.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
struct GraphDocument {
    depth: usize,
    vertices: Vec<VertexDocument>,
    edges: Vec<EdgeDocument>,
}

#[derive(Debug, Serialize, Deserialize)]
struct VertexDocument {
    id: u64,
    edge_ids: Vec<u64>,
    depth: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct EdgeDocument {
    id: u64,
    vertex_ids: [u64; 2],
    color: EdgeColor,
}

impl GraphDocument {
    fn from_graph(graph: &LayeredGraph) -> Result<Self, LayergenError> {
        let mut vertices = Vec::with_capacity(graph.vertex_count());
        for id in graph.vertices() {
            vertices.push(VertexDocument {
                id: id.as_raw(),
                edge_ids: graph
                    .connected_edge_ids(id)
                    .map_err(serde_context)?
                    .iter()
                    .map(|edge_id| edge_id.as_raw())
                    .collect(),
                depth: graph.vertex_depth(id).map_err(serde_context)?,
            });
        }
        let edges = graph
            .edges()
            .iter()
            .map(|edge| EdgeDocument {
                id: edge.id().as_raw(),
                vertex_ids: [edge.from().as_raw(), edge.to().as_raw()],
                color: edge.color(),
            })
            .collect();
        Ok(Self {
            depth: graph.depth(),
            vertices,
            edges,
        })
    }

    fn into_graph(self) -> Result<LayeredGraph, LayergenError> {
        let mut graph = LayeredGraph::new();
        for (index, vertex) in self.vertices.iter().enumerate() {
            if index as u64 != vertex.id {
                return Err(LayergenError::Serde(
                    ErrorInfo::new("non-contiguous-ids", "vertex ids must be contiguous from 0")
                        .with_context("position", index)
                        .with_context("id", vertex.id),
                ));
            }
            let id = graph.add_vertex();
            graph.set_vertex_depth(id, vertex.depth).map_err(serde_context)?;
        }
        for (index, edge) in self.edges.iter().enumerate() {
            if index as u64 != edge.id {
                return Err(LayergenError::Serde(
                    ErrorInfo::new("non-contiguous-ids", "edge ids must be contiguous from 0")
                        .with_context("position", index)
                        .with_context("id", edge.id),
                ));
            }
            let [from, to] = edge.vertex_ids;
            graph
                .add_edge(
                    layergen_core::VertexId::from_raw(from),
                    layergen_core::VertexId::from_raw(to),
                    edge.color,
                )
                .map_err(serde_context)?;
        }
        Ok(graph)
    }
}

fn serde_context(err: LayergenError) -> LayergenError {
    LayergenError::Serde(
        ErrorInfo::new("invalid-document", "document references unknown entities")
            .with_context("cause", err),
    )
}
