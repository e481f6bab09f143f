use std::{fmt, ops};

use crate::error::{Error, Result};

use super::Vector;

/// An absolute location on the plane
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Point {
    x: f64,
    y: f64
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0f64, y: 0f64 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Like [`Point::new`], but refuses NaN and infinite coordinates
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        let p = Self::new(x, y);
        if !p.is_finite() {
            return Err(Error::InvalidCoordinate { x, y });
        }

        Ok(p)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl ops::Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Self::Output {
        let p: cgmath::Point2<f64> = self.into();
        let v: cgmath::Vector2<f64> = rhs.into();

        (p + v).into()
    }
}

impl ops::AddAssign<Vector> for Point {
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl ops::Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        let a: cgmath::Point2<f64> = self.into();
        let b: cgmath::Point2<f64> = rhs.into();

        (a - b).into()
    }
}

impl From<cgmath::Point2<f64>> for Point {
    fn from(p: cgmath::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for cgmath::Point2<f64> {
    fn from(p: Point) -> Self {
        cgmath::Point2::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Views a run of points as interleaved `x, y` coordinates without copying
pub fn as_coords(points: &[Point]) -> &[f64] {
    bytemuck::cast_slice(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_exact() {
        assert_eq!(Point::new(0.1f64 + 0.2f64, 0f64), Point::new(0.1f64 + 0.2f64, 0f64));
        assert_ne!(Point::new(0.1f64 + 0.2f64, 0f64), Point::new(0.3f64, 0f64));
    }

    #[test]
    fn default_is_origin() {
        assert_eq!(Point::default(), Point::new(0f64, 0f64));
    }

    #[test]
    fn try_new_rejects_non_finite() {
        assert!(Point::try_new(1f64, 2f64).is_ok());
        assert!(matches!(
            Point::try_new(f64::NAN, 0f64),
            Err(Error::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            Point::try_new(0f64, f64::NEG_INFINITY),
            Err(Error::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn add_assign_matches_add() {
        let mut p = Point::new(3f64, -1f64);
        p += Vector::new(0.5f64, 0.5f64);
        assert_eq!(p, Point::new(3f64, -1f64) + Vector::new(0.5f64, 0.5f64));
        assert_eq!(p, Point::new(3.5f64, -0.5f64));
    }

    #[test]
    fn difference_is_displacement() {
        let a = Point::new(1f64, 2f64);
        let b = Point::new(-3f64, 4f64);
        assert_eq!(b - a, Vector::new(-4f64, 2f64));
        assert_eq!(a + (b - a), b);
    }

    #[test]
    fn overflow_saturates_to_infinity() {
        let p = Point::new(f64::MAX, 0f64) + Vector::new(f64::MAX, 0f64);
        assert_eq!(p.x(), f64::INFINITY);
        assert!(!p.is_finite());
    }

    #[test]
    fn display_renders_both_coordinates() {
        assert_eq!(Point::new(-3f64, 4.5f64).to_string(), "(-3, 4.5)");
    }

    #[test]
    fn coords_are_interleaved() {
        let points = [Point::new(1f64, 2f64), Point::new(3f64, 4f64)];
        assert_eq!(as_coords(&points), &[1f64, 2f64, 3f64, 4f64]);
        assert!(as_coords(&[]).is_empty());
    }

    #[test]
    fn converts_through_cgmath() {
        let p = Point::new(7f64, -2f64);
        let q: cgmath::Point2<f64> = p.into();
        assert_eq!(q, cgmath::Point2::new(7f64, -2f64));
        assert_eq!(Point::from(q), p);
        assert_eq!(Point::from((7f64, -2f64)), p);
    }
}
