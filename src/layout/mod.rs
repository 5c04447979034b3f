//! The layer state machine.
//!
//! For each layer the engine builds the structural polygon, subdivides
//! its edges into polygon centers, culls centers against the viewport,
//! and emits drawing directives for the external renderer. Layout is a
//! pure computation: configuration in, [`Scene`] out, no state kept
//! between passes.

pub mod color;
pub mod defaults;
pub mod line;
pub mod polygon;
pub mod types;

use crate::errors::{ConfigError, GeometryError, LayoutFault};
use crate::log::debug;
use crate::types::{Color, Point, Rect};

use self::line::Line;
use self::types::{
    ColorOptions, Directive, DrawingOptions, PathSpec, RegularPolygonSpec, Scene,
};

/// Read-only configuration for one layout pass.
///
/// The engine assumes a validated configuration; run
/// [`LayoutConfig::validate`] on anything user-provided before calling
/// [`layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Number of concentric layers, at least 1. Layer 0 is the single
    /// polygon at the viewport center.
    pub layer_count: u32,
    /// Fraction of the shorter viewport dimension the pattern spans.
    pub scale: f64,
    /// Edge count of the structural polygon each layer subdivides.
    pub structure_edge_count: u32,
    /// Edge count of each placed polygon (1 is the circle sentinel).
    pub polygon_edge_count: u32,
    pub drawing: DrawingOptions,
    pub color: ColorOptions,
    /// Gradient endpoint for the innermost layer.
    pub inner_color: Color,
    /// Gradient endpoint for the outermost layer.
    pub outer_color: Color,
    /// Rectangle the pattern is centered in and culled against.
    pub viewport: Rect,
}

impl LayoutConfig {
    /// Configuration with conventional defaults for the given viewport.
    pub fn new(viewport: Rect) -> Self {
        LayoutConfig {
            layer_count: 5,
            scale: 0.9,
            structure_edge_count: 6,
            polygon_edge_count: 6,
            drawing: DrawingOptions::default(),
            color: ColorOptions::default(),
            inner_color: Color::BLACK,
            outer_color: Color::new(0.0, 0.0, 1.0, 1.0),
            viewport,
        }
    }

    /// Reject configurations the engine is not contracted to handle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layer_count == 0 {
            return Err(ConfigError::InvalidLayerCount(self.layer_count));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::InvalidScale(self.scale));
        }
        if self.structure_edge_count < 3 {
            return Err(ConfigError::InvalidStructureEdgeCount(
                self.structure_edge_count,
            ));
        }
        // Placed polygons allow the 1-edge circle sentinel; with circle
        // replacement on, the polygon edge count is never consulted.
        if !self.drawing.replace_polygons_with_circles
            && self.polygon_edge_count != 1
            && self.polygon_edge_count < 3
        {
            return Err(ConfigError::InvalidPolygonEdgeCount(self.polygon_edge_count));
        }
        if self.viewport.width() <= 0.0 || self.viewport.height() <= 0.0 {
            return Err(ConfigError::DegenerateViewport {
                width: self.viewport.width(),
                height: self.viewport.height(),
            });
        }
        Ok(())
    }

    /// Corner distance (radius) of every placed polygon; also the base
    /// spacing unit for structural layers.
    fn polygon_corner_distance(&self) -> f64 {
        self.viewport.shorter_side() * self.scale / f64::from(self.layer_count) / 2.0
    }
}

/// Compute the drawing directives for one pass over all layers.
///
/// Layers are emitted outermost-first unless
/// `reverse_drawing_order` is set; the order changes only which
/// directives paint over which, never which shapes exist. In the
/// non-reversed order, a layer whose polygons are all culled terminates
/// the pass (monotonic-shrinkage assumption).
///
/// Any geometry error other than the designated zero-distance case at
/// layer 0 is a contract violation and surfaces as [`LayoutFault`].
pub fn layout(config: &LayoutConfig) -> Result<Scene, LayoutFault> {
    let corner_distance = config.polygon_corner_distance();
    let reverse = config.drawing.reverse_drawing_order;
    debug!(
        layer_count = config.layer_count,
        corner_distance, reverse, "starting layout pass"
    );

    let layers: Vec<u32> = if reverse {
        (0..config.layer_count).collect()
    } else {
        (0..config.layer_count).rev().collect()
    };

    let mut scene = Scene::default();
    for layer in layers {
        let any_visible = emit_layer(config, layer, corner_distance, &mut scene)?;
        if !any_visible && !reverse {
            // Smaller layers shrink toward the center; once a layer is
            // fully culled, the remaining ones are assumed culled too.
            debug!(layer, "layer fully culled, skipping smaller layers");
            break;
        }
    }

    debug!(directives = scene.len(), "layout pass complete");
    Ok(scene)
}

/// Emit one layer's directives. Returns whether any polygon survived
/// culling.
fn emit_layer(
    config: &LayoutConfig,
    layer: u32,
    corner_distance: f64,
    scene: &mut Scene,
) -> Result<bool, LayoutFault> {
    let viewport_center = config.viewport.center();
    let structure_distance = f64::from(layer) * corner_distance;

    let corners = match polygon::corner_points(
        config.structure_edge_count,
        viewport_center,
        structure_distance,
    ) {
        Ok(corners) => corners,
        // The zero corner distance at layer 0 is the designated
        // degenerate case: the structure collapses to a single point.
        // A zero distance on any other layer is a contract violation.
        Err(GeometryError::InvalidCornerDistance(d)) if layer == 0 && d == 0.0 => {
            emit_polygon(config, layer, corner_distance, viewport_center, scene)
                .map_err(|source| LayoutFault { layer, source })?;
            return Ok(true);
        }
        Err(source) => return Err(LayoutFault { layer, source }),
    };

    let centers = subdivided_centers(&corners, layer)
        .map_err(|source| LayoutFault { layer, source })?;
    debug_assert_eq!(
        centers.len(),
        (config.structure_edge_count * layer) as usize
    );

    let mut visible = 0usize;
    for &center in &centers {
        let spec = RegularPolygonSpec {
            edge_count: config.polygon_edge_count,
            center,
            corner_distance,
        };
        if !spec.bounding_square().intersects(&config.viewport) {
            continue;
        }
        visible += 1;
        emit_polygon(config, layer, corner_distance, center, scene)
            .map_err(|source| LayoutFault { layer, source })?;
    }
    debug!(
        layer,
        visible,
        culled = centers.len() - visible,
        "layer polygons placed"
    );
    let any_visible = visible > 0;

    if config.drawing.draw_structure_edges {
        // The outline uses the unmodified structure corners, not the
        // subdivided center list.
        let path = polygon::closed_path(corners)
            .map_err(|source| LayoutFault { layer, source })?;
        scene.directives.push(Directive {
            layer,
            path,
            fill: None,
            stroke: Some(defaults::STROKE_COLOR),
        });
    }

    Ok(any_visible)
}

/// Interleave each structure corner with the interior points of the
/// edge leaving it, preserving rotational order. A layer-`L` structure
/// edge subdivides into `L` segments, so every edge contributes its
/// corner plus `L - 1` interior points.
fn subdivided_centers(corners: &[Point], layer: u32) -> Result<Vec<Point>, GeometryError> {
    let edges = Line::connect_consecutively(corners)?;
    let mut centers = Vec::with_capacity(corners.len() * layer as usize);
    for (corner, edge) in corners.iter().zip(&edges) {
        centers.push(*corner);
        centers.extend(edge.segment(layer)?);
    }
    Ok(centers)
}

/// Emit one placed polygon (or circle) with its resolved colors.
fn emit_polygon(
    config: &LayoutConfig,
    layer: u32,
    corner_distance: f64,
    center: Point,
    scene: &mut Scene,
) -> Result<(), GeometryError> {
    let path = if config.drawing.replace_polygons_with_circles {
        PathSpec::Circle {
            center,
            radius: corner_distance,
        }
    } else {
        polygon::regular_polygon_path(config.polygon_edge_count, center, corner_distance)?
    };

    let fill = fill_color(config, layer);
    let stroke = stroke_color(config, fill);
    scene.directives.push(Directive {
        layer,
        path,
        fill,
        stroke,
    });
    Ok(())
}

/// Fill for one polygon on the given layer: random per polygon when
/// requested, otherwise the layer's gradient mix (which depends only on
/// the layer index).
fn fill_color(config: &LayoutConfig, layer: u32) -> Option<Color> {
    if !config.color.color_in_polygons {
        return None;
    }
    Some(if config.color.use_random_colors {
        color::random_color()
    } else {
        color::mix(
            config.inner_color,
            config.outer_color,
            color::layer_factor(layer, config.layer_count),
        )
    })
}

/// Stroke for one polygon: the polygon's own fill when requested and
/// available, else the default stroke color. No stroke at all unless
/// edge drawing is on.
fn stroke_color(config: &LayoutConfig, fill: Option<Color>) -> Option<Color> {
    if !config.drawing.draw_polygon_edges {
        return None;
    }
    match (config.color.use_polygon_color_for_edges, fill) {
        (true, Some(c)) => Some(c),
        // Without a computed fill there is no polygon color to follow.
        _ => Some(defaults::STROKE_COLOR),
    }
}
