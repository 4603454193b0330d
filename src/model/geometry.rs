//! Geometry primitives for the interaction state machines.
//!
//! All components are `f64`: positions arrive from the host in whatever
//! unit its layout uses (pixels, terminal cells) and the autoscroll math
//! needs fractional offsets regardless of the unit.

use std::ops::{Add, AddAssign, Mul, Sub};

/// A 2D point in content-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.dx;
        self.y += rhs.dy;
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D displacement or velocity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    /// Horizontal component.
    pub dx: f64,
    /// Vertical component.
    pub dy: f64,
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Create a vector.
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Whether both components are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.dx * rhs, self.dy * rhs)
    }
}

/// A 2D extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Create a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle (origin + size).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent.
    pub size: Size,
}

impl Rect {
    /// Create a rectangle from components.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Whether `point` lies inside the rectangle.
    ///
    /// The top/left edges are inclusive, bottom/right exclusive, so
    /// adjacent cells never both claim a shared boundary point.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x < self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y < self.origin.y + self.size.height
    }
}

/// Per-edge margins, used for the autoscroll trigger zones.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    /// Top margin.
    pub top: f64,
    /// Left margin.
    pub left: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Right margin.
    pub right: f64,
}

impl EdgeInsets {
    /// Create insets from the four edge margins.
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Uniform insets on all four edges.
    pub fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_plus_vector_translates() {
        let p = Point::new(1.0, 2.0) + Vector::new(0.5, -1.0);
        assert_eq!(p, Point::new(1.5, 1.0));
    }

    #[test]
    fn point_difference_is_vector() {
        let v = Point::new(3.0, 4.0) - Point::new(1.0, 1.0);
        assert_eq!(v, Vector::new(2.0, 3.0));
    }

    #[test]
    fn vector_scales_by_scalar() {
        assert_eq!(Vector::new(2.0, -3.0) * 0.5, Vector::new(1.0, -1.5));
    }

    #[test]
    fn zero_vector_reports_zero() {
        assert!(Vector::ZERO.is_zero());
        assert!(!Vector::new(0.0, 0.001).is_zero());
    }

    #[test]
    fn rect_center_is_midpoint() {
        let r = Rect::new(10.0, 20.0, 4.0, 6.0);
        assert_eq!(r.center(), Point::new(12.0, 23.0));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(9.999, 9.999)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
        assert!(!r.contains(Point::new(5.0, 10.0)));
    }

    #[test]
    fn uniform_insets_set_all_edges() {
        let insets = EdgeInsets::uniform(3.0);
        assert_eq!(insets, EdgeInsets::new(3.0, 3.0, 3.0, 3.0));
    }
}
