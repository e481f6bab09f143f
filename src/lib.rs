//! Plane geometry primitives and a movable sprite entity.
//!
//! [`Point`] and [`Vector`] are plain values; [`Sprite`] owns a single
//! position that changes only through [`Sprite::move_to`] and
//! [`Sprite::move_by`]. Callers that cannot own sprites directly can go
//! through a [`SpriteRegistry`] and hold [`SpriteHandle`]s instead.

pub mod config;
pub mod error;
pub mod geometry;
pub mod registry;
pub mod sprite;

pub use config::{Config, CoordinatePolicy};
pub use error::{Error, Result};
pub use geometry::{translate, Point, Vector};
pub use registry::{SpriteHandle, SpriteRegistry};
pub use sprite::Sprite;
