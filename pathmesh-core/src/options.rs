//! Pipeline configuration.

use pathmesh_graphics::types::Scalar;

/// How a hole's interior seed point is searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoleStrategy {
    /// Random rays from outside the ring (seeded, reproducible).
    #[default]
    Random,
    /// Deterministic horizontal scanlines across the ring's bounding box.
    Scanline,
}

/// What to do when no seed point can be found for a hole ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingHolePolicy {
    /// Fail the whole pipeline with a `HoleNotFound` error.
    #[default]
    Abort,
    /// Log a warning and emit no seed for that ring; the triangulation
    /// engine then meshes the ring's interior.
    Omit,
}

/// Options for the hole-seed search.
#[derive(Debug, Clone)]
pub struct HoleOptions {
    pub strategy: HoleStrategy,
    /// Distance of random ray origins from the ring's bounding box, as a
    /// fraction of the box size. Default: 0.2.
    pub margin: Scalar,
    /// Rays whose crossings come closer than this to any ring vertex are
    /// rejected. Default: 0.001.
    pub vertex_epsilon: Scalar,
    /// Maximum number of rays or scanlines per hole. Default: 10 000.
    pub max_attempts: usize,
    /// Seed for the random strategy.
    pub seed: u64,
}

impl Default for HoleOptions {
    fn default() -> Self {
        Self {
            strategy: HoleStrategy::Random,
            margin: 0.2,
            vertex_epsilon: 0.001,
            max_attempts: 10_000,
            seed: 0x5eed,
        }
    }
}

/// Options controlling the whole pipeline.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Samples taken along each cubic curve, endpoints included. Each curve
    /// becomes `segments_per_curve - 1` line segments. Default: 5.
    pub segments_per_curve: usize,
    /// Pin the first absolute `moveto` to the origin instead of moving the
    /// current position to it. Default: false.
    pub ignore_first_moveto: bool,
    pub hole: HoleOptions,
    pub missing_hole: MissingHolePolicy,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            segments_per_curve: 5,
            ignore_first_moveto: false,
            hole: HoleOptions::default(),
            missing_hole: MissingHolePolicy::Abort,
        }
    }
}
