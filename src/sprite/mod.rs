use std::fmt;

use crate::geometry::{self, Point, Vector};

/// A positioned entity. Two sprites at the same point are still distinct.
#[derive(Clone, Debug, Default)]
pub struct Sprite {
    pos: Point
}

impl Sprite {
    pub fn position(&self) -> Point {
        self.pos
    }
}

impl Sprite {
    pub fn new(initial: Point) -> Self {
        Self { pos: initial }
    }

    /// Places the sprite at `reference` displaced by `direction`
    pub fn new_relative_to(reference: Point, direction: Vector) -> Self {
        Self::new(geometry::translate(&reference, direction))
    }

    pub fn move_to(&mut self, target: Point) {
        self.pos = target;
    }

    pub fn move_by(&mut self, delta: Vector) {
        self.pos += delta;
    }
}

impl fmt::Display for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sprite at {}", self.pos)
    }
}
