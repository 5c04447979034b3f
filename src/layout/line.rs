//! Directed line segments with subdivision support.

use crate::errors::GeometryError;
use crate::types::{Point, Vector};

/// A directed segment: a start point plus the displacement to its end.
///
/// Two lines are equal iff their `(start, vector)` pairs are equal; a
/// line and its reversal are distinct values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Point,
    pub vector: Vector,
}

impl Line {
    pub fn new(start: Point, vector: Vector) -> Self {
        Line { start, vector }
    }

    /// Line from `start` to `end`; the vector is derived.
    pub fn between(start: Point, end: Point) -> Self {
        Line {
            start,
            vector: end - start,
        }
    }

    pub fn end(&self) -> Point {
        self.start + self.vector
    }

    /// Connect a point sequence into consecutive lines.
    ///
    /// Two points give the single segment first→second. Three or more
    /// give the closed cycle `point[i] → point[(i+1) % n]` in input
    /// order. Empty and single-point inputs are rejected.
    pub fn connect_consecutively(points: &[Point]) -> Result<Vec<Line>, GeometryError> {
        match points {
            [] => Err(GeometryError::NoPoints),
            [p] => Err(GeometryError::SinglePoint(*p)),
            [a, b] => Ok(vec![Line::between(*a, *b)]),
            _ => Ok(points
                .iter()
                .enumerate()
                .map(|(i, p)| Line::between(*p, points[(i + 1) % points.len()]))
                .collect()),
        }
    }

    /// The `count - 1` interior points dividing the line into `count`
    /// equal parts, ordered from `start` toward the end.
    ///
    /// Neither endpoint is included: `segment(1)` is empty, and a count
    /// of zero is rejected.
    pub fn segment(&self, count: u32) -> Result<Vec<Point>, GeometryError> {
        if count == 0 {
            return Err(GeometryError::InvalidSegmentCount(count));
        }
        Ok((1..count)
            .map(|k| self.start + (f64::from(k) / f64::from(count)) * self.vector)
            .collect())
    }
}
