//! Variant tag of a scene node.
//!
//! The scene graph dispatches per-node behavior on this tag instead of on the
//! set of components an entity happens to carry. The traversal itself (children
//! in insertion order, transforms composed root first) is the same for every
//! variant; see [`crate::systems::scenegraph`].

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NodeKind {
    /// Pure grouping node (scene root, layers). Does nothing on its own.
    #[default]
    Plain,
    /// Static picture, drawn but never updated.
    Sprite,
    /// Spawns particles at its world position while updated.
    Emitter,
    /// Kinematic body with velocity and hit points.
    Entity,
    /// Entity backed by a ballistic table row; guided kinds steer.
    Projectile,
}

/// Marks the root of a scene graph. Traversal systems start here.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct SceneRoot;

/// Direct children of the root that group nodes by draw depth.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Background,
    Air,
}
