//! Hit points and removal marker for scene entities.
//!
//! A node is a *wreck* when it carries [`Destroyed`] or when its
//! [`Hitpoints`] dropped to zero. Wrecks are pruned (with their whole subtree)
//! by [`remove_wrecks`](crate::systems::scenegraph::remove_wrecks).

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hitpoints {
    pub current: u32,
}

impl Hitpoints {
    pub fn new(hitpoints: u32) -> Self {
        Self { current: hitpoints }
    }

    /// Subtract `points`, saturating at zero.
    pub fn damage(&mut self, points: u32) {
        self.current = self.current.saturating_sub(points);
    }

    pub fn repair(&mut self, points: u32) {
        self.current = self.current.saturating_add(points);
    }

    pub fn is_destroyed(&self) -> bool {
        self.current == 0
    }
}

/// Externally flags a node for removal regardless of its hit points.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Destroyed;
