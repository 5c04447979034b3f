//! Strongly-typed 2D primitives for rosette.
//!
//! Design goals:
//! - Positions and displacements are distinct types (`Point` vs `Vector`)
//! - Conversions to raw `glam::DVec2` only at math boundaries
//! - All values are plain immutable data

use std::fmt;
use std::ops::{Add, Mul, Sub};

use glam::{DVec2, dvec2};

/// An absolute position in the layout's 2D coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        (other - self).length()
    }

    /// Raw vector view for trigonometric math.
    #[inline]
    pub fn to_dvec2(self) -> DVec2 {
        dvec2(self.x, self.y)
    }

    #[inline]
    pub fn from_dvec2(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A displacement/offset (not an absolute position).
/// `Point + Vector = Point`; `Point - Point = Vector`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { dx: 0.0, dy: 0.0 };

    #[inline]
    pub fn new(dx: f64, dy: f64) -> Self {
        Vector { dx, dy }
    }

    pub fn length(self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, rhs: Vector) -> Point {
        Point {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

impl Sub<Point> for Point {
    type Output = Vector;
    fn sub(self, rhs: Point) -> Vector {
        Vector {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        Vector {
            dx: self.dx * rhs,
            dy: self.dy * rhs,
        }
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

/// Axis-aligned rectangle, used for the viewport and for culling tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Rectangle from its min corner and side lengths.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            min: Point::new(x, y),
            max: Point::new(x + width, y + height),
        }
    }

    /// Axis-aligned square centered on `center` with the given half side.
    pub fn square(center: Point, half_side: f64) -> Self {
        Rect {
            min: Point::new(center.x - half_side, center.y - half_side),
            max: Point::new(center.x + half_side, center.y + half_side),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// The smaller of width and height.
    pub fn shorter_side(&self) -> f64 {
        self.width().min(self.height())
    }

    pub fn center(&self) -> Point {
        Point {
            x: (self.min.x + self.max.x) / 2.0,
            y: (self.min.y + self.max.y) / 2.0,
        }
    }

    /// Closed intersection test: rectangles that merely touch intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

/// A color as 4 normalized HSBA components in `[0, 1]`.
///
/// The engine only ever mixes colors component-wise; the external
/// renderer owns the conversion to whatever space it paints in.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Color {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        hue: 0.0,
        saturation: 0.0,
        brightness: 0.0,
        alpha: 1.0,
    };

    pub fn new(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Color {
            hue,
            saturation,
            brightness,
            alpha,
        }
    }

    #[inline]
    pub fn components(self) -> [f64; 4] {
        [self.hue, self.saturation, self.brightness, self.alpha]
    }

    #[inline]
    pub fn from_components(c: [f64; 4]) -> Self {
        Color {
            hue: c[0],
            saturation: c[1],
            brightness: c[2],
            alpha: c[3],
        }
    }
}
