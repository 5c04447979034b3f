//! Drawing directives and option flags for the layout engine.

use crate::types::{Color, Point, Rect};

/// The geometric payload of a directive.
///
/// Polygons carry their vertices in rotational order and are implicitly
/// closed (last vertex connects back to the first). Circles carry arc
/// parameters instead of a vertex list.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSpec {
    Polygon { points: Vec<Point> },
    Circle { center: Point, radius: f64 },
}

impl PathSpec {
    /// The point the shape is centered on (vertex centroid for
    /// polygons, arc center for circles).
    pub fn center(&self) -> Point {
        match self {
            PathSpec::Circle { center, .. } => *center,
            PathSpec::Polygon { points } => {
                // Vertices of a regular polygon average back to its center.
                let n = points.len() as f64;
                let (sx, sy) = points
                    .iter()
                    .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
                Point::new(sx / n, sy / n)
            }
        }
    }
}

/// One drawing instruction for the external renderer.
///
/// The engine never strokes or fills anything itself; the collaborator
/// executes these in emission order (which is the paint order).
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    /// Layer this directive belongs to (0 = innermost).
    pub layer: u32,
    pub path: PathSpec,
    /// Fill color, when polygon coloring is enabled.
    pub fill: Option<Color>,
    /// Stroke color, when edge drawing is enabled.
    pub stroke: Option<Color>,
}

/// The ordered result of one layout pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub directives: Vec<Directive>,
}

impl Scene {
    /// Directives belonging to one layer, in emission order.
    pub fn layer(&self, layer: u32) -> impl Iterator<Item = &Directive> {
        self.directives.iter().filter(move |d| d.layer == layer)
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }
}

/// Independently combinable drawing toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawingOptions {
    /// Draw inner layers before outer ones instead of the reverse.
    pub reverse_drawing_order: bool,
    /// Stroke each placed polygon's outline.
    pub draw_polygon_edges: bool,
    /// Stroke the structure polygon's outline per layer.
    pub draw_structure_edges: bool,
    /// Place circles instead of regular polygons.
    pub replace_polygons_with_circles: bool,
}

/// Independently combinable coloring toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorOptions {
    /// Fill placed polygons.
    pub color_in_polygons: bool,
    /// Use a fresh random fill per polygon instead of the layer mix.
    pub use_random_colors: bool,
    /// Stroke edges with the polygon's own fill color.
    pub use_polygon_color_for_edges: bool,
}

/// A regular polygon is fully determined by these three values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularPolygonSpec {
    pub edge_count: u32,
    pub center: Point,
    pub corner_distance: f64,
}

impl RegularPolygonSpec {
    /// Axis-aligned bounding square, used for viewport culling.
    pub fn bounding_square(&self) -> Rect {
        Rect::square(self.center, self.corner_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_center() {
        let c = PathSpec::Circle {
            center: Point::new(3.0, 4.0),
            radius: 2.0,
        };
        assert_eq!(c.center(), Point::new(3.0, 4.0));
    }

    #[test]
    fn polygon_center_is_vertex_centroid() {
        let square = PathSpec::Polygon {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 2.0),
                Point::new(0.0, 2.0),
            ],
        };
        assert_eq!(square.center(), Point::new(1.0, 1.0));
    }

    #[test]
    fn options_default_to_all_off() {
        assert_eq!(DrawingOptions::default(), DrawingOptions {
            reverse_drawing_order: false,
            draw_polygon_edges: false,
            draw_structure_edges: false,
            replace_polygons_with_circles: false,
        });
        assert_eq!(ColorOptions::default(), ColorOptions {
            color_in_polygons: false,
            use_random_colors: false,
            use_polygon_color_for_edges: false,
        });
    }

    #[test]
    fn bounding_square_side_is_twice_corner_distance() {
        let spec = RegularPolygonSpec {
            edge_count: 6,
            center: Point::new(10.0, 10.0),
            corner_distance: 3.0,
        };
        let square = spec.bounding_square();
        assert_eq!(square.width(), 6.0);
        assert_eq!(square.height(), 6.0);
        assert_eq!(square.center(), spec.center);
    }

    #[test]
    fn scene_layer_filter() {
        let scene = Scene {
            directives: vec![
                Directive {
                    layer: 0,
                    path: PathSpec::Circle {
                        center: Point::ORIGIN,
                        radius: 1.0,
                    },
                    fill: None,
                    stroke: None,
                },
                Directive {
                    layer: 2,
                    path: PathSpec::Circle {
                        center: Point::ORIGIN,
                        radius: 1.0,
                    },
                    fill: None,
                    stroke: None,
                },
            ],
        };
        assert_eq!(scene.layer(2).count(), 1);
        assert_eq!(scene.layer(1).count(), 0);
        assert_eq!(scene.len(), 2);
    }
}
