use std::{fmt, ops};

use crate::error::{Error, Result};

/// A relative displacement on the plane
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector {
    dx: f64,
    dy: f64
}

impl Default for Vector {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Vector {
    pub const ZERO: Self = Self { dx: 0f64, dy: 0f64 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn try_new(dx: f64, dy: f64) -> Result<Self> {
        let v = Self::new(dx, dy);
        if !v.is_finite() {
            return Err(Error::InvalidCoordinate { x: dx, y: dy });
        }

        Ok(v)
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dy(&self) -> f64 {
        self.dy
    }

    pub fn is_finite(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }
}

impl ops::Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Self) -> Self::Output {
        let a: cgmath::Vector2<f64> = self.into();
        let b: cgmath::Vector2<f64> = rhs.into();

        (a + b).into()
    }
}

impl ops::Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Self::new(-self.dx, -self.dy)
    }
}

impl From<cgmath::Vector2<f64>> for Vector {
    fn from(v: cgmath::Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector> for cgmath::Vector2<f64> {
    fn from(v: Vector) -> Self {
        cgmath::Vector2::new(v.dx, v.dy)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((dx, dy): (f64, f64)) -> Self {
        Self::new(dx, dy)
    }
}

impl From<Vector> for (f64, f64) {
    fn from(v: Vector) -> Self {
        (v.dx, v.dy)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.dx, self.dy)
    }
}
