mod handle;

pub use handle::SpriteHandle;

use crate::{
    config::{Config, CoordinatePolicy},
    error::{Error, Result},
    geometry::{self, Point, Vector},
    sprite::Sprite
};

struct Slot {
    generation: u32,
    sprite: Option<Sprite>
}

/// Owns sprites on behalf of callers that may only hold [`SpriteHandle`]s.
///
/// Removed slots are reused, but their generation is bumped first so that
/// stale handles keep failing with [`Error::UnknownHandle`]. A slot whose
/// generation is exhausted is retired instead of reused.
pub struct SpriteRegistry {
    slots: Vec<Slot>,
    // Indices of empty slots that may be reused
    free: Vec<usize>,
    len: usize,
    config: Config
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl SpriteRegistry {
    pub fn new(config: Config) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
            config
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl SpriteRegistry {
    pub fn spawn(&mut self, initial: Point) -> Result<SpriteHandle> {
        self.check(initial.x(), initial.y())?;

        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(Slot { generation: 0, sprite: None });
                self.slots.len() - 1
            }
        };

        let slot = &mut self.slots[index];
        slot.sprite = Some(Sprite::new(initial));
        self.len += 1;

        let handle = SpriteHandle { index, generation: slot.generation };
        log::debug!("spawned {} at {}", handle, initial);

        Ok(handle)
    }

    pub fn spawn_relative_to(&mut self, reference: Point, direction: Vector) -> Result<SpriteHandle> {
        self.check(reference.x(), reference.y())?;
        self.check(direction.dx(), direction.dy())?;

        self.spawn(geometry::translate(&reference, direction))
    }

    pub fn remove(&mut self, handle: SpriteHandle) -> Result<Sprite> {
        let slot = self.slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .ok_or(Error::UnknownHandle(handle))?;

        let sprite = slot.sprite.take().ok_or(Error::UnknownHandle(handle))?;
        self.len -= 1;

        match slot.generation.checked_add(1) {
            Some(generation) => {
                slot.generation = generation;
                self.free.push(handle.index);
                log::debug!("removed {}", handle);
            },
            None => {
                log::debug!("removed {}, slot {} retired", handle, handle.index);
            }
        }

        Ok(sprite)
    }

    pub fn get(&self, handle: SpriteHandle) -> Option<&Sprite> {
        self.slots
            .get(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.sprite.as_ref())
    }

    fn get_mut(&mut self, handle: SpriteHandle) -> Result<&mut Sprite> {
        self.slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.sprite.as_mut())
            .ok_or(Error::UnknownHandle(handle))
    }

    pub fn position(&self, handle: SpriteHandle) -> Result<Point> {
        self.get(handle)
            .map(Sprite::position)
            .ok_or(Error::UnknownHandle(handle))
    }

    pub fn move_to(&mut self, handle: SpriteHandle, target: Point) -> Result<()> {
        self.check(target.x(), target.y())?;

        self.get_mut(handle)?.move_to(target);
        log::trace!("{} moved to {}", handle, target);

        Ok(())
    }

    pub fn move_by(&mut self, handle: SpriteHandle, delta: Vector) -> Result<()> {
        self.check(delta.dx(), delta.dy())?;

        let pos = self.get_mut(handle)?.position() + delta;
        // Finite inputs can still overflow to infinity
        self.check(pos.x(), pos.y())?;

        self.get_mut(handle)?.move_by(delta);
        log::trace!("{} moved by {} to {}", handle, delta, pos);

        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpriteHandle, &Sprite)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.sprite.as_ref().map(|sprite| {
                (SpriteHandle { index, generation: slot.generation }, sprite)
            } )
        } )
    }

    /// Current position of every live sprite, in slot order
    pub fn positions(&self) -> Vec<Point> {
        self.iter().map(|(_, sprite)| sprite.position()).collect()
    }

    fn check(&self, x: f64, y: f64) -> Result<()> {
        match self.config.coordinate_policy {
            CoordinatePolicy::Propagate => Ok(()),
            CoordinatePolicy::Reject => {
                if x.is_finite() && y.is_finite() {
                    Ok(())
                } else {
                    log::warn!("rejected non-finite coordinate ({}, {})", x, y);
                    Err(Error::InvalidCoordinate { x, y })
                }
            }
        }
    }
}
