//! Regular polygon geometry: corner generation and closed paths.

use std::f64::consts::PI;

use glam::dvec2;

use crate::errors::GeometryError;
use crate::types::Point;

use super::types::PathSpec;

/// Corner points of a regular polygon, evenly spaced on the circle of
/// radius `corner_distance` around `center`.
///
/// The interior angle step is `π − π·(n−2)/n`, and corner `k` (for
/// `k = 1..=n`) sits at `center + corner_distance·(sin(step·k),
/// cos(step·k))`: the first corner lands at one full step, not at
/// angle 0. The rotational order is fixed; consumers must not reorder.
pub fn corner_points(
    edge_count: u32,
    center: Point,
    corner_distance: f64,
) -> Result<Vec<Point>, GeometryError> {
    if edge_count <= 2 {
        return Err(GeometryError::InvalidEdgeCount(edge_count));
    }
    if corner_distance <= 0.0 {
        return Err(GeometryError::InvalidCornerDistance(corner_distance));
    }

    let step = PI - PI * f64::from(edge_count - 2) / f64::from(edge_count);
    let center = center.to_dvec2();

    Ok((1..=edge_count)
        .map(|k| {
            let angle = step * f64::from(k);
            Point::from_dvec2(center + corner_distance * dvec2(angle.sin(), angle.cos()))
        })
        .collect())
}

/// Build an implicitly closed path visiting `points` in order.
///
/// A closed path needs at least 3 vertices; 1 or 2 points are rejected
/// with the offending sequence as payload.
pub fn closed_path(points: Vec<Point>) -> Result<PathSpec, GeometryError> {
    match points.len() {
        0 => Err(GeometryError::NoPoints),
        1 | 2 => Err(GeometryError::TooFewPoints(points)),
        _ => Ok(PathSpec::Polygon { points }),
    }
}

/// Path for a regular polygon with the given edge count and radius.
///
/// An edge count of exactly 1 yields a circle of that radius instead of
/// failing; everything else goes through [`corner_points`] and
/// [`closed_path`], whose errors propagate unchanged (so an edge count
/// of 2 fails with `InvalidEdgeCount(2)`).
pub fn regular_polygon_path(
    edge_count: u32,
    center: Point,
    radius: f64,
) -> Result<PathSpec, GeometryError> {
    if edge_count == 1 {
        return Ok(PathSpec::Circle { center, radius });
    }
    closed_path(corner_points(edge_count, center, radius)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn corner_count_matches_edge_count() {
        for n in 3..=12 {
            let points = corner_points(n, pt(0.0, 0.0), 5.0).unwrap();
            assert_eq!(points.len(), n as usize);
        }
    }

    #[test]
    fn corners_lie_on_the_radius_circle() {
        let center = pt(10.0, -4.0);
        for n in [3, 4, 5, 6, 9] {
            for p in corner_points(n, center, 7.5).unwrap() {
                assert!(
                    (center.distance(p) - 7.5).abs() < EPS,
                    "{n}-gon corner {p} not at distance 7.5"
                );
            }
        }
    }

    #[test]
    fn consecutive_corners_are_equidistant() {
        for n in [3, 4, 7, 11] {
            let points = corner_points(n, pt(1.0, 2.0), 3.0).unwrap();
            let side = points[0].distance(points[1]);
            for i in 0..points.len() {
                let next = points[(i + 1) % points.len()];
                assert!(
                    (points[i].distance(next) - side).abs() < EPS,
                    "{n}-gon sides uneven at corner {i}"
                );
            }
        }
    }

    #[test]
    fn first_corner_is_one_step_in() {
        // Square: step = π/2, so corner 1 is at (sin, cos)(π/2) = (1, 0).
        let points = corner_points(4, pt(0.0, 0.0), 2.0).unwrap();
        assert!((points[0].x - 2.0).abs() < EPS);
        assert!(points[0].y.abs() < EPS);
        // ...and corner 4 closes the turn at (0, 1) scaled.
        assert!(points[3].x.abs() < EPS);
        assert!((points[3].y - 2.0).abs() < EPS);
    }

    #[test]
    fn degenerate_edge_counts_are_rejected() {
        for n in [0, 1, 2] {
            assert_eq!(
                corner_points(n, pt(0.0, 0.0), 1.0),
                Err(GeometryError::InvalidEdgeCount(n))
            );
        }
    }

    #[test]
    fn non_positive_corner_distance_is_rejected() {
        assert_eq!(
            corner_points(5, pt(0.0, 0.0), 0.0),
            Err(GeometryError::InvalidCornerDistance(0.0))
        );
        assert_eq!(
            corner_points(5, pt(0.0, 0.0), -3.0),
            Err(GeometryError::InvalidCornerDistance(-3.0))
        );
    }

    #[test]
    fn closed_path_needs_three_vertices() {
        assert_eq!(closed_path(vec![]), Err(GeometryError::NoPoints));

        let two = vec![pt(0.0, 0.0), pt(1.0, 1.0)];
        assert_eq!(
            closed_path(two.clone()),
            Err(GeometryError::TooFewPoints(two))
        );

        let three = vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0)];
        assert_eq!(
            closed_path(three.clone()),
            Ok(PathSpec::Polygon { points: three })
        );
    }

    #[test]
    fn one_edge_yields_a_circle() {
        assert_eq!(
            regular_polygon_path(1, pt(2.0, 3.0), 4.0),
            Ok(PathSpec::Circle {
                center: pt(2.0, 3.0),
                radius: 4.0
            })
        );
    }

    #[test]
    fn two_edges_propagate_invalid_edge_count() {
        assert_eq!(
            regular_polygon_path(2, pt(0.0, 0.0), 1.0),
            Err(GeometryError::InvalidEdgeCount(2))
        );
        assert_eq!(
            regular_polygon_path(0, pt(0.0, 0.0), 1.0),
            Err(GeometryError::InvalidEdgeCount(0))
        );
    }

    #[test]
    fn polygon_path_keeps_corner_order() {
        let corners = corner_points(6, pt(0.0, 0.0), 2.0).unwrap();
        let path = regular_polygon_path(6, pt(0.0, 0.0), 2.0).unwrap();
        assert_eq!(path, PathSpec::Polygon { points: corners });
    }
}
