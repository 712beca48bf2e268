//! Path-to-mesh pipeline.
//!
//! Turns a vector path string into a planar straight-line graph: parse,
//! expand, resolve to absolute coordinates, flatten curves, rescale into a
//! unit frame, split into rings and find one seed point per hole. The
//! [`triangulate`] module holds the engine seam that meshes the graph.

pub mod absolute;
pub mod command;
pub mod error;
pub mod expand;
pub mod hole;
pub mod normalize;
pub mod options;
pub mod parser;
pub mod pipeline;
pub mod pslg;
pub mod sample;
pub mod subpath;
pub mod triangulate;

pub use error::{ErrorKind, PipelineError, PipelineResult};
pub use options::{HoleOptions, HoleStrategy, MissingHolePolicy, PipelineOptions};
pub use pipeline::{Pipeline, Stage};
pub use pslg::Pslg;
pub use triangulate::{EarcutEngine, Mesh, TriangulationEngine};
