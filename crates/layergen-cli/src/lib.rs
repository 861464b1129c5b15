#![deny(missing_docs)]

//! Batch driver for the layergen generator: parameter intake, output
//! directory preparation and per-graph JSON export.

pub mod intake;
pub mod logging;
pub mod run;
