use std::fmt;

/// Opaque reference to a sprite owned by a [`super::SpriteRegistry`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpriteHandle {
    pub(super) index: usize,
    pub(super) generation: u32
}

impl fmt::Display for SpriteHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sprite #{}v{}", self.index, self.generation)
    }
}
