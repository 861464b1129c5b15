use std::fmt::Write;

use crate::graph::{EdgeColor, LayeredGraph};

/// Produces a short human-readable description of a finished graph.
///
/// The format lists the populated depth count, the vertex total with its
/// per-depth distribution, and the edge total with its per-color
/// distribution, e.g.
/// `{depth: 3, vertices: {amount: 9, distribution: [1, 4, 4]}, edges:
/// {amount: 11, distribution: {grey: 8, green: 1, yellow: 2, red: 0}}}`.
pub fn describe(graph: &LayeredGraph) -> String {
    let mut out = String::new();
    let _ = write!(out, "{{depth: {}, ", graph.depth());

    let _ = write!(out, "vertices: {{amount: {}, distribution: [", graph.vertex_count());
    for depth in 0..graph.depth() {
        if depth > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", graph.vertices_at_depth(depth).len());
    }
    out.push_str("]}, ");

    let _ = write!(out, "edges: {{amount: {}, distribution: {{", graph.edge_count());
    for (idx, color) in EdgeColor::ALL.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}: {}", color.as_str(), graph.edge_count_by_color(*color));
    }
    out.push_str("}}}");
    out
}
