#![deny(missing_docs)]

//! Layered directed multigraph and the four-pass randomized generator
//! that grows one from a root vertex.

mod generator;
mod graph;
mod hash;
mod ids;
mod printing;
mod serialization;

pub use generator::{
    EdgeProbabilities, GeneratorParams, GraphGenerator, DEFAULT_GREEN_PROBABILITY,
    DEFAULT_RED_PROBABILITY,
};
pub use graph::{Edge, EdgeColor, LayeredGraph};
pub use hash::canonical_hash;
pub use printing::describe;
pub use serialization::{graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json};
