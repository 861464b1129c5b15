use layergen_core::{LayergenError, VertexId};
use layergen_graph::{EdgeColor, LayeredGraph};

#[test]
fn add_edge_rejects_unknown_endpoints() {
    let mut graph = LayeredGraph::new();
    let a = graph.add_vertex();
    graph.set_vertex_depth(a, 0).unwrap();

    let ghost = VertexId::from_raw(99);
    let err = graph.add_edge(a, ghost, EdgeColor::Grey).unwrap_err();
    match err {
        LayergenError::Graph(info) => {
            assert_eq!(info.code, "unknown-vertex");
            assert_eq!(info.context.get("vertex"), Some(&"99".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unknown_edge_lookup_is_typed_failure() {
    let graph = LayeredGraph::new();
    let err = graph.edge(layergen_core::EdgeId::from_raw(3)).unwrap_err();
    assert_eq!(err.info().code, "unknown-edge");
}

#[test]
fn depth_query_before_assignment_fails() {
    let mut graph = LayeredGraph::new();
    let a = graph.add_vertex();
    let err = graph.vertex_depth(a).unwrap_err();
    assert_eq!(err.info().code, "depth-unset");
}

#[test]
fn children_recorded_for_grey_edges_only() {
    let mut graph = LayeredGraph::new();
    let a = graph.add_vertex();
    let b = graph.add_vertex();
    let c = graph.add_vertex();
    graph.set_vertex_depth(a, 0).unwrap();
    graph.set_vertex_depth(b, 1).unwrap();
    graph.set_vertex_depth(c, 1).unwrap();

    graph.add_edge(a, b, EdgeColor::Grey).unwrap();
    graph.add_edge(a, c, EdgeColor::Yellow).unwrap();

    assert!(graph.is_child(a, b).unwrap());
    assert!(!graph.is_child(a, c).unwrap());
    assert_eq!(graph.children_of(a).unwrap().len(), 1);
}

#[test]
fn self_loop_registered_once_in_adjacency() {
    let mut graph = LayeredGraph::new();
    let a = graph.add_vertex();
    graph.set_vertex_depth(a, 0).unwrap();

    let loop_id = graph.add_edge(a, a, EdgeColor::Green).unwrap();
    assert_eq!(graph.connected_edge_ids(a).unwrap(), &[loop_id]);
}

#[test]
fn parallel_edges_are_permitted() {
    let mut graph = LayeredGraph::new();
    let a = graph.add_vertex();
    let b = graph.add_vertex();
    graph.set_vertex_depth(a, 0).unwrap();
    graph.set_vertex_depth(b, 1).unwrap();

    let first = graph.add_edge(a, b, EdgeColor::Grey).unwrap();
    let second = graph.add_edge(a, b, EdgeColor::Grey).unwrap();
    assert_ne!(first, second);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn depth_buckets_partition_vertices() {
    let mut graph = LayeredGraph::new();
    let a = graph.add_vertex();
    let b = graph.add_vertex();
    graph.set_vertex_depth(a, 0).unwrap();
    graph.set_vertex_depth(b, 1).unwrap();

    assert_eq!(graph.depth(), 2);
    assert_eq!(graph.vertices_at_depth(0), vec![a]);
    assert_eq!(graph.vertices_at_depth(1), vec![b]);
    assert!(graph.vertices_at_depth(2).is_empty());

    // Reassignment moves the vertex between buckets and drops the
    // emptied one.
    graph.set_vertex_depth(b, 0).unwrap();
    assert_eq!(graph.depth(), 1);
    assert_eq!(graph.vertices_at_depth(0), vec![a, b]);
}

#[test]
fn accessors_are_idempotent() {
    let mut graph = LayeredGraph::new();
    let a = graph.add_vertex();
    let b = graph.add_vertex();
    graph.set_vertex_depth(a, 0).unwrap();
    graph.set_vertex_depth(b, 1).unwrap();
    graph.add_edge(a, b, EdgeColor::Grey).unwrap();

    assert_eq!(graph.vertices(), graph.vertices());
    assert_eq!(graph.edges(), graph.edges());
    assert_eq!(
        graph.connected_edge_ids(a).unwrap(),
        graph.connected_edge_ids(a).unwrap()
    );
    assert_eq!(graph.vertices_at_depth(1), graph.vertices_at_depth(1));
    assert_eq!(graph.depth(), graph.depth());
}
