//! Error types for geometry construction and layout.
//!
//! Two tiers, deliberately distinct:
//! - [`GeometryError`] and [`ConfigError`] are recoverable, inspectable
//!   values carrying the offending argument ("caller gave bad input").
//! - [`LayoutFault`] marks a construction error reaching a code path the
//!   engine's invariants guarantee unreachable ("engine invariant
//!   broken"). It is fatal and never retried.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::Point;

/// Errors from geometry construction (lines, polygons, paths).
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("cannot connect an empty point sequence")]
    #[diagnostic(code(rosette::geometry::no_points))]
    NoPoints,

    #[error("cannot connect a single point {0} to itself")]
    #[diagnostic(code(rosette::geometry::single_point))]
    SinglePoint(Point),

    #[error("a closed path needs at least 3 vertices, got {}", .0.len())]
    #[diagnostic(code(rosette::geometry::too_few_points))]
    TooFewPoints(Vec<Point>),

    #[error("invalid segment count: {0}")]
    #[diagnostic(code(rosette::geometry::invalid_segment_count))]
    InvalidSegmentCount(u32),

    #[error("invalid edge count: {0} (a polygon needs at least 3 edges)")]
    #[diagnostic(code(rosette::geometry::invalid_edge_count))]
    InvalidEdgeCount(u32),

    #[error("invalid corner distance: {0} (must be positive)")]
    #[diagnostic(code(rosette::geometry::invalid_corner_distance))]
    InvalidCornerDistance(f64),
}

/// Errors from validating a [`LayoutConfig`](crate::layout::LayoutConfig).
///
/// The layout engine itself assumes a validated configuration; this is
/// the gate its callers run user-facing input through.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid layer count: {0} (must be at least 1)")]
    #[diagnostic(code(rosette::config::invalid_layer_count))]
    InvalidLayerCount(u32),

    #[error("invalid scale: {0} (must be positive and finite)")]
    #[diagnostic(code(rosette::config::invalid_scale))]
    InvalidScale(f64),

    #[error("invalid structure edge count: {0} (must be at least 3)")]
    #[diagnostic(code(rosette::config::invalid_structure_edge_count))]
    InvalidStructureEdgeCount(u32),

    #[error("invalid polygon edge count: {0} (must be at least 3, or 1 for circles)")]
    #[diagnostic(code(rosette::config::invalid_polygon_edge_count))]
    InvalidPolygonEdgeCount(u32),

    #[error("degenerate viewport: {width} x {height}")]
    #[diagnostic(code(rosette::config::degenerate_viewport))]
    DegenerateViewport { width: f64, height: f64 },
}

/// A contract violation inside the layout engine.
///
/// The engine handles exactly one expected construction error (the
/// zero corner distance at layer 0); any other [`GeometryError`]
/// surfacing mid-layout means the engine or its caller broke an
/// invariant. Not user-recoverable.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
#[error("layout invariant violated at layer {layer}")]
#[diagnostic(code(rosette::layout::fault))]
pub struct LayoutFault {
    /// Layer being built when the fault surfaced.
    pub layer: u32,
    #[source]
    pub source: GeometryError,
}
