use std::collections::{BTreeMap, BTreeSet};

use layergen_core::{
    errors::{ErrorInfo, LayergenError},
    Depth, EdgeId, VertexId,
};
use serde::{Deserialize, Serialize};

use crate::ids::{edge_index, make_edge, make_vertex, vertex_index};

/// Classification assigned to an edge when it is created.
///
/// The color records *how* the edge came to exist and never changes
/// afterwards: there is deliberately no setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeColor {
    /// Tree edge produced while growing the initial layered structure.
    Grey,
    /// Self-loop added by the green pass.
    Green,
    /// Edge to a non-child vertex one layer deeper.
    Yellow,
    /// Edge to a vertex two layers deeper.
    Red,
}

impl EdgeColor {
    /// All colors in their canonical order.
    pub const ALL: [EdgeColor; 4] = [
        EdgeColor::Grey,
        EdgeColor::Green,
        EdgeColor::Yellow,
        EdgeColor::Red,
    ];

    /// Returns the lowercase name used by the export schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeColor::Grey => "grey",
            EdgeColor::Green => "green",
            EdgeColor::Yellow => "yellow",
            EdgeColor::Red => "red",
        }
    }
}

/// Immutable edge value stored by the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    id: EdgeId,
    from: VertexId,
    to: VertexId,
    color: EdgeColor,
}

impl Edge {
    /// Returns the edge identifier.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Returns the source vertex identifier.
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// Returns the target vertex identifier.
    pub fn to(&self) -> VertexId {
        self.to
    }

    /// Returns the color assigned at creation time.
    pub fn color(&self) -> EdgeColor {
        self.color
    }
}

#[derive(Debug, Clone, Default)]
struct VertexRecord {
    depth: Option<Depth>,
    edges: Vec<EdgeId>,
    children: BTreeSet<VertexId>,
}

/// Directed multigraph whose vertices live in discrete depth layers.
///
/// The graph only grows: vertices and edges are never removed, and their
/// identifiers are assigned monotonically and never reused. A graph is
/// populated by [`GraphGenerator`](crate::GraphGenerator) during a single
/// generation run and treated as read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct LayeredGraph {
    vertices: Vec<VertexRecord>,
    edges: Vec<Edge>,
    layers: BTreeMap<Depth, BTreeSet<VertexId>>,
}

impl LayeredGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new vertex with a fresh identifier.
    ///
    /// The depth is left unset until [`set_vertex_depth`](Self::set_vertex_depth)
    /// assigns it.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = make_vertex(self.vertices.len());
        self.vertices.push(VertexRecord::default());
        id
    }

    /// Adds an edge between two existing vertices with the given color.
    ///
    /// Self-loops and parallel edges are permitted. When the color is
    /// [`EdgeColor::Grey`] the target is recorded as a child of the
    /// source, so the children relation tracks the layered tree only.
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        color: EdgeColor,
    ) -> Result<EdgeId, LayergenError> {
        self.vertex(from)?;
        self.vertex(to)?;
        let id = make_edge(self.edges.len());
        self.edges.push(Edge {
            id,
            from,
            to,
            color,
        });
        self.vertex_mut(from)?.edges.push(id);
        if from != to {
            self.vertex_mut(to)?.edges.push(id);
        }
        if color == EdgeColor::Grey {
            self.vertex_mut(from)?.children.insert(to);
        }
        Ok(id)
    }

    /// Assigns the depth bucket for a vertex.
    ///
    /// Reassignment moves the vertex out of its previous bucket; the
    /// generator only ever assigns a depth once, right after creation.
    pub fn set_vertex_depth(&mut self, id: VertexId, depth: Depth) -> Result<(), LayergenError> {
        let previous = self.vertex(id)?.depth;
        if let Some(previous) = previous {
            if let Some(bucket) = self.layers.get_mut(&previous) {
                bucket.remove(&id);
                if bucket.is_empty() {
                    self.layers.remove(&previous);
                }
            }
        }
        self.vertex_mut(id)?.depth = Some(depth);
        self.layers.entry(depth).or_default().insert(id);
        Ok(())
    }

    /// Returns the recorded depth of a vertex.
    pub fn vertex_depth(&self, id: VertexId) -> Result<Depth, LayergenError> {
        self.vertex(id)?.depth.ok_or_else(|| {
            graph_error("depth-unset", "vertex depth has not been assigned")
                .with_id("vertex", id.as_raw())
        })
    }

    /// Returns all vertex identifiers in id order.
    pub fn vertices(&self) -> Vec<VertexId> {
        (0..self.vertices.len()).map(make_vertex).collect()
    }

    /// Returns all edges in id order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the edge stored under the provided identifier.
    pub fn edge(&self, id: EdgeId) -> Result<&Edge, LayergenError> {
        self.edges.get(edge_index(id)).ok_or_else(|| {
            graph_error("unknown-edge", "edge does not exist").with_id("edge", id.as_raw())
        })
    }

    /// Returns the identifiers of all edges touching a vertex.
    pub fn connected_edge_ids(&self, id: VertexId) -> Result<&[EdgeId], LayergenError> {
        Ok(&self.vertex(id)?.edges)
    }

    /// Returns the Grey-tree children recorded for a vertex.
    pub fn children_of(&self, id: VertexId) -> Result<&BTreeSet<VertexId>, LayergenError> {
        Ok(&self.vertex(id)?.children)
    }

    /// Returns whether `to` is a direct Grey-tree child of `from`.
    pub fn is_child(&self, from: VertexId, to: VertexId) -> Result<bool, LayergenError> {
        self.vertex(to)?;
        Ok(self.vertex(from)?.children.contains(&to))
    }

    /// Returns the vertices recorded at the provided depth, in id order.
    ///
    /// An unpopulated depth yields an empty list.
    pub fn vertices_at_depth(&self, depth: Depth) -> Vec<VertexId> {
        self.layers
            .get(&depth)
            .map(|bucket| bucket.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Returns the number of populated depth buckets.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Returns the number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of edges carrying the provided color.
    pub fn edge_count_by_color(&self, color: EdgeColor) -> usize {
        self.edges.iter().filter(|edge| edge.color == color).count()
    }

    fn vertex(&self, id: VertexId) -> Result<&VertexRecord, LayergenError> {
        self.vertices.get(vertex_index(id)).ok_or_else(|| {
            graph_error("unknown-vertex", "vertex does not exist").with_id("vertex", id.as_raw())
        })
    }

    fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexRecord, LayergenError> {
        self.vertices.get_mut(vertex_index(id)).ok_or_else(|| {
            graph_error("unknown-vertex", "vertex does not exist").with_id("vertex", id.as_raw())
        })
    }
}

fn graph_error(code: &str, message: &str) -> LayergenError {
    LayergenError::Graph(ErrorInfo::new(code, message))
}

trait WithId {
    fn with_id(self, key: &str, value: u64) -> LayergenError;
}

impl WithId for LayergenError {
    fn with_id(self, key: &str, value: u64) -> LayergenError {
        match self {
            LayergenError::Graph(info) => LayergenError::Graph(info.with_context(key, value)),
            other => other,
        }
    }
}
