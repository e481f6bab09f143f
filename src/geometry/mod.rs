mod point;
mod vector;

pub use point::{Point, as_coords};
pub use vector::Vector;

/// Returns `position` displaced by `direction`
pub fn translate(position: &Point, direction: Vector) -> Point {
    *position + direction
}
