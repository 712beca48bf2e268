//! Geometry primitives for `pathmesh`.
//!
//! Everything here is pure math on `kurbo` points: bounding boxes, Bézier
//! evaluation, segment intersection, and polygon predicates.

pub mod types;

pub mod bbox;
pub mod bezier;
pub mod intersection;
pub mod math;
pub mod polygon;
