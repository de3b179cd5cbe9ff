//! Kinematic part of the entity update.
//!
//! Entities integrate their [`RigidBody`] velocity into their local
//! [`MapPosition`] with an explicit Euler step. Children are moved along by
//! transform composition, not by integration.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::category::Category;
use crate::components::hitpoints::Hitpoints;
use crate::components::mapposition::MapPosition;
use crate::components::nodekind::NodeKind;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::sprite::Sprite;
use crate::systems::projectile::projectile_speed;

/// Spawn a kinematic entity node.
pub fn spawn_entity(
    world: &mut World,
    position: Vector2,
    velocity: Vector2,
    hitpoints: u32,
    category: Category,
) -> Entity {
    world
        .spawn((
            NodeKind::Entity,
            MapPosition { pos: position },
            Rotation::default(),
            RigidBody { velocity },
            Hitpoints::new(hitpoints),
            category,
        ))
        .id()
}

/// Spawn a kinematic entity that draws `sprite`.
pub fn spawn_sprite_entity(
    world: &mut World,
    sprite: Sprite,
    position: Vector2,
    velocity: Vector2,
    hitpoints: u32,
    category: Category,
) -> Entity {
    let entity = spawn_entity(world, position, velocity, hitpoints, category);
    world.entity_mut(entity).insert(sprite);
    entity
}

/// `position += velocity * dt` for nodes with a [`RigidBody`].
pub fn integrate_velocity(world: &mut World, node: Entity, dt: f32) {
    let Some(velocity) = world.get::<RigidBody>(node).map(|rb| rb.velocity) else {
        return;
    };
    if let Some(mut position) = world.get_mut::<MapPosition>(node) {
        position.translate(velocity.scale_by(dt));
    }
}

pub fn velocity(world: &World, node: Entity) -> Option<Vector2> {
    world.get::<RigidBody>(node).map(|rb| rb.velocity)
}

pub fn set_velocity(world: &mut World, node: Entity, velocity: Vector2) {
    if let Some(mut rb) = world.get_mut::<RigidBody>(node) {
        rb.set_velocity(velocity);
    }
}

/// Speed of an entity: the table speed for projectiles, the velocity
/// magnitude for everything else.
pub fn entity_speed(world: &World, node: Entity) -> f32 {
    if let Some(speed) = projectile_speed(world, node) {
        return speed;
    }
    world.get::<RigidBody>(node).map(|rb| rb.speed()).unwrap_or(0.0)
}
