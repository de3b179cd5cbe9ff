//! Local translation of a scene node.
//!
//! For nodes attached to a parent through [`ChildOf`](bevy_ecs::hierarchy::ChildOf)
//! the position is relative to the parent. Root nodes are placed in world space.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    /// Offset the position by `delta`.
    pub fn translate(&mut self, delta: Vector2) {
        self.pos = self.pos + delta;
    }
}

impl Default for MapPosition {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
