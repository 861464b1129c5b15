use layergen_core::rng::RngHandle;
use layergen_graph::{EdgeColor, EdgeProbabilities, GeneratorParams, GraphGenerator};

fn params(max_depth: usize, new_vertices_per_step: usize) -> GeneratorParams {
    GeneratorParams {
        max_depth,
        new_vertices_per_step,
    }
}

#[test]
fn zero_depth_yields_single_vertex_graph() {
    let generator = GraphGenerator::new(params(0, 3));
    let graph = generator.generate(&mut RngHandle::from_seed(7)).unwrap();

    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.depth(), 1);
    let root = graph.vertices()[0];
    assert_eq!(graph.vertex_depth(root).unwrap(), 0);
    // With default probabilities a lone root may still receive a green
    // self-loop, so only grey structure is asserted here.
    assert_eq!(graph.edge_count_by_color(EdgeColor::Grey), 0);
    assert_eq!(graph.edge_count_by_color(EdgeColor::Yellow), 0);
    assert_eq!(graph.edge_count_by_color(EdgeColor::Red), 0);
}

#[test]
fn zero_depth_without_loops_yields_empty_edge_set() {
    let generator = GraphGenerator::with_probabilities(
        params(0, 3),
        EdgeProbabilities {
            green: 0.0,
            red: 0.0,
        },
    )
    .unwrap();
    let graph = generator.generate(&mut RngHandle::from_seed(7)).unwrap();

    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn zero_branching_yields_single_vertex_regardless_of_depth() {
    let generator = GraphGenerator::with_probabilities(
        params(10, 0),
        EdgeProbabilities {
            green: 0.0,
            red: 0.0,
        },
    )
    .unwrap();
    let graph = generator.generate(&mut RngHandle::from_seed(21)).unwrap();

    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.depth(), 1);
}

#[test]
fn certain_green_probability_loops_every_vertex_exactly_once() {
    let generator = GraphGenerator::with_probabilities(
        params(4, 2),
        EdgeProbabilities {
            green: 1.0,
            red: 0.0,
        },
    )
    .unwrap();
    let graph = generator.generate(&mut RngHandle::from_seed(99)).unwrap();

    assert_eq!(
        graph.edge_count_by_color(EdgeColor::Green),
        graph.vertex_count()
    );
    for vertex in graph.vertices() {
        let loops = graph
            .connected_edge_ids(vertex)
            .unwrap()
            .iter()
            .filter(|edge_id| {
                let edge = graph.edge(**edge_id).unwrap();
                edge.color() == EdgeColor::Green && edge.from() == vertex && edge.to() == vertex
            })
            .count();
        assert_eq!(loops, 1);
    }
}

#[test]
fn suppressed_probabilities_leave_only_grey_and_yellow() {
    let generator = GraphGenerator::with_probabilities(
        params(5, 3),
        EdgeProbabilities {
            green: 0.0,
            red: 0.0,
        },
    )
    .unwrap();
    let graph = generator.generate(&mut RngHandle::from_seed(5)).unwrap();

    assert_eq!(graph.edge_count_by_color(EdgeColor::Green), 0);
    assert_eq!(graph.edge_count_by_color(EdgeColor::Red), 0);
    assert_eq!(
        graph.edge_count(),
        graph.edge_count_by_color(EdgeColor::Grey)
            + graph.edge_count_by_color(EdgeColor::Yellow)
    );
}

#[test]
fn yellow_edges_never_target_grey_children() {
    let generator = GraphGenerator::new(params(6, 3));
    let graph = generator.generate(&mut RngHandle::from_seed(11)).unwrap();

    for edge in graph.edges() {
        if edge.color() == EdgeColor::Yellow {
            assert!(!graph.is_child(edge.from(), edge.to()).unwrap());
            let from_depth = graph.vertex_depth(edge.from()).unwrap();
            let to_depth = graph.vertex_depth(edge.to()).unwrap();
            assert_eq!(to_depth, from_depth + 1);
        }
    }
}

#[test]
fn red_edges_skip_exactly_one_layer() {
    let generator = GraphGenerator::with_probabilities(
        params(6, 3),
        EdgeProbabilities {
            green: 0.0,
            red: 1.0,
        },
    )
    .unwrap();
    let graph = generator.generate(&mut RngHandle::from_seed(13)).unwrap();

    for edge in graph.edges() {
        if edge.color() == EdgeColor::Red {
            let from_depth = graph.vertex_depth(edge.from()).unwrap();
            let to_depth = graph.vertex_depth(edge.to()).unwrap();
            assert_eq!(to_depth, from_depth + 2);
        }
    }
}

#[test]
fn out_of_range_probability_rejected_at_construction() {
    let err = GraphGenerator::with_probabilities(
        params(2, 2),
        EdgeProbabilities {
            green: 1.5,
            red: 0.0,
        },
    )
    .unwrap_err();
    assert_eq!(err.info().code, "probability-range");
    assert_eq!(err.info().context.get("pass"), Some(&"green".to_string()));
}
