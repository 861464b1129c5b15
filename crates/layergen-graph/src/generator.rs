use layergen_core::{
    errors::{ErrorInfo, LayergenError},
    rng::RngHandle,
    VertexId,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::graph::{EdgeColor, LayeredGraph};

/// Default probability of the green self-loop pass.
pub const DEFAULT_GREEN_PROBABILITY: f64 = 0.1;

/// Default probability of the red skip-level pass.
pub const DEFAULT_RED_PROBABILITY: f64 = 0.33;

/// Structural parameters of a generation run.
///
/// Unsigned fields make negative values unrepresentable; zero is valid
/// and yields a single-vertex graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorParams {
    /// Maximum depth the grey tree is allowed to reach.
    pub max_depth: usize,
    /// Number of child-creation attempts per vertex per layer.
    pub new_vertices_per_step: usize,
}

/// Fixed probabilities of the classification passes.
///
/// These are constants of the algorithm rather than derived from input;
/// tests override them (0.0 / 1.0) to pin down pass behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeProbabilities {
    /// Probability of adding a green self-loop to a vertex.
    pub green: f64,
    /// Probability of adding a red skip-level edge from a vertex.
    pub red: f64,
}

impl Default for EdgeProbabilities {
    fn default() -> Self {
        Self {
            green: DEFAULT_GREEN_PROBABILITY,
            red: DEFAULT_RED_PROBABILITY,
        }
    }
}

/// Randomized layered graph generator.
///
/// One [`generate`](Self::generate) call drives four ordered passes over
/// a fresh [`LayeredGraph`]: grey tree growth, green self-loops, yellow
/// same-adjacent-depth edges and red skip-level edges. The generator
/// owns no mutable state besides the caller-supplied RNG handle, so
/// independent generations may run concurrently.
#[derive(Debug, Clone)]
pub struct GraphGenerator {
    params: GeneratorParams,
    probabilities: EdgeProbabilities,
}

impl GraphGenerator {
    /// Creates a generator with the default pass probabilities.
    pub fn new(params: GeneratorParams) -> Self {
        Self {
            params,
            probabilities: EdgeProbabilities::default(),
        }
    }

    /// Creates a generator with explicit pass probabilities.
    ///
    /// Fails with a `Config` error when a probability lies outside
    /// `[0, 1]`; the check happens here so a generation run can never
    /// fail mid-pass on malformed configuration.
    pub fn with_probabilities(
        params: GeneratorParams,
        probabilities: EdgeProbabilities,
    ) -> Result<Self, LayergenError> {
        for (label, value) in [
            ("green", probabilities.green),
            ("red", probabilities.red),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(LayergenError::Config(
                    ErrorInfo::new("probability-range", "probability must lie in [0, 1]")
                        .with_context("pass", label)
                        .with_context("value", value),
                ));
            }
        }
        Ok(Self {
            params,
            probabilities,
        })
    }

    /// Returns the structural parameters of this generator.
    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    /// Builds one fully populated graph.
    pub fn generate(&self, rng: &mut RngHandle) -> Result<LayeredGraph, LayergenError> {
        let mut graph = LayeredGraph::new();
        self.grow_grey_tree(&mut graph, rng)?;
        self.add_green_edges(&mut graph, rng)?;
        self.add_yellow_edges(&mut graph, rng)?;
        self.add_red_edges(&mut graph, rng)?;
        Ok(graph)
    }

    /// Pass 1: grows the layered tree from a single root at depth 0.
    ///
    /// Each vertex at depth `d` makes up to `new_vertices_per_step`
    /// attempts, each succeeding with probability `1 - d / max_depth`.
    /// An entire layer may fail to produce children; the tree then stops
    /// short of `max_depth`, which is expected.
    fn grow_grey_tree(
        &self,
        graph: &mut LayeredGraph,
        rng: &mut RngHandle,
    ) -> Result<(), LayergenError> {
        let root = graph.add_vertex();
        graph.set_vertex_depth(root, 0)?;

        for depth in 0..self.params.max_depth {
            let parents = graph.vertices_at_depth(depth);
            if parents.is_empty() {
                break;
            }
            let success = 1.0 - depth as f64 / self.params.max_depth as f64;
            for parent in parents {
                for _ in 0..self.params.new_vertices_per_step {
                    if !rng.gen_bool(success) {
                        continue;
                    }
                    let child = graph.add_vertex();
                    graph.set_vertex_depth(child, depth + 1)?;
                    graph.add_edge(parent, child, EdgeColor::Grey)?;
                }
            }
        }
        Ok(())
    }

    /// Pass 2: adds a green self-loop to each vertex with fixed probability.
    fn add_green_edges(
        &self,
        graph: &mut LayeredGraph,
        rng: &mut RngHandle,
    ) -> Result<(), LayergenError> {
        for vertex in graph.vertices() {
            if rng.gen_bool(self.probabilities.green) {
                graph.add_edge(vertex, vertex, EdgeColor::Green)?;
            }
        }
        Ok(())
    }

    /// Pass 3: adds yellow edges to uniformly chosen non-child vertices
    /// one layer deeper.
    ///
    /// The per-vertex probability grows linearly with depth: a vertex at
    /// depth `d` fires with probability `d / (graph_depth - 1)`, so the
    /// root never fires and deeper layers approach certainty without
    /// reaching it.
    fn add_yellow_edges(
        &self,
        graph: &mut LayeredGraph,
        rng: &mut RngHandle,
    ) -> Result<(), LayergenError> {
        let graph_depth = graph.depth();
        if graph_depth < 2 {
            return Ok(());
        }
        let divisor = (graph_depth - 1) as f64;
        for depth in 0..graph_depth - 1 {
            let probability = depth as f64 / divisor;
            for vertex in graph.vertices_at_depth(depth) {
                if !rng.gen_bool(probability) {
                    continue;
                }
                let children = graph.children_of(vertex)?.clone();
                let candidates: Vec<VertexId> = graph
                    .vertices_at_depth(depth + 1)
                    .into_iter()
                    .filter(|candidate| !children.contains(candidate))
                    .collect();
                if let Some(&target) = candidates.choose(rng) {
                    graph.add_edge(vertex, target, EdgeColor::Yellow)?;
                }
            }
        }
        Ok(())
    }

    /// Pass 4: adds red edges to uniformly chosen vertices two layers
    /// deeper with fixed probability.
    fn add_red_edges(
        &self,
        graph: &mut LayeredGraph,
        rng: &mut RngHandle,
    ) -> Result<(), LayergenError> {
        let graph_depth = graph.depth();
        if graph_depth < 3 {
            return Ok(());
        }
        for depth in 0..graph_depth - 2 {
            let targets = graph.vertices_at_depth(depth + 2);
            if targets.is_empty() {
                continue;
            }
            for vertex in graph.vertices_at_depth(depth) {
                if !rng.gen_bool(self.probabilities.red) {
                    continue;
                }
                if let Some(&target) = targets.choose(rng) {
                    graph.add_edge(vertex, target, EdgeColor::Red)?;
                }
            }
        }
        Ok(())
    }
}
