//! Projectile construction, guidance and ballistic lookups.
//!
//! Projectiles read their texture, rect, speed and damage from the
//! [`ProjectileTable`] resource, which must be inserted before the first
//! projectile is spawned. Guided projectiles (missiles) carry a smoke and a
//! propellant emitter at their tail and steer toward `target_direction` during
//! [`update_current`](crate::systems::scenegraph::update_current).

use bevy_ecs::prelude::*;
use raylib::prelude::{Rectangle, Vector2};

use crate::components::hitpoints::Hitpoints;
use crate::components::mapposition::MapPosition;
use crate::components::nodekind::NodeKind;
use crate::components::projectile::{
    Projectile, ProjectileKind, facing_degrees, steer_velocity, unit_vector,
};
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::resources::particles::ParticleKind;
use crate::resources::projectiletable::ProjectileTable;
use crate::systems::particleemitter::spawn_emitter;
use crate::systems::scenegraph::{attach_child, world_position, world_transform};

/// Spawn a projectile of `kind` at local `position`, at rest.
///
/// Guided kinds are tinted and get two emitter children (smoke, propellant)
/// half a sprite below their center.
///
/// # Panics
///
/// If no [`ProjectileTable`] resource is present.
pub fn spawn_projectile(world: &mut World, kind: ProjectileKind, position: Vector2) -> Entity {
    let data = *world.resource::<ProjectileTable>().get(kind);
    let projectile = Projectile::new(kind);
    let sprite = Sprite::centered(data.texture, data.rect.to_rectangle());
    let tail = Vector2 {
        x: 0.0,
        y: sprite.local_bounds().height / 2.0,
    };

    let entity = world
        .spawn((
            NodeKind::Projectile,
            MapPosition { pos: position },
            Rotation::default(),
            RigidBody::new(),
            Hitpoints::new(1),
            projectile,
            sprite,
        ))
        .id();

    if projectile.is_guided() {
        world.entity_mut(entity).insert(Tint::new(200, 200, 255, 255));
        for particle in [ParticleKind::Smoke, ParticleKind::Propellant] {
            let emitter = spawn_emitter(world, particle, tail);
            attach_child(world, entity, emitter);
        }
    }
    entity
}

pub fn is_guided(world: &World, node: Entity) -> bool {
    world.get::<Projectile>(node).is_some_and(|p| p.is_guided())
}

/// Point a guided projectile at `target` (world coordinates).
///
/// # Panics
///
/// If `node` is not a guided projectile.
pub fn guide_towards(world: &mut World, node: Entity, target: Vector2) {
    let position = world_position(world, node);
    let Some(mut projectile) = world.get_mut::<Projectile>(node) else {
        panic!("guide_towards called on {node:?}, which is not a projectile");
    };
    assert!(
        projectile.is_guided(),
        "guide_towards called on unguided projectile {:?}",
        projectile.kind
    );
    if let Some(direction) = unit_vector(target - position) {
        projectile.target_direction = direction;
    }
}

/// Homing step for guided projectiles; unguided ones are left untouched.
pub fn steer_projectile(world: &mut World, node: Entity, dt: f32) {
    let Some(projectile) = world.get::<Projectile>(node).copied() else {
        return;
    };
    if !projectile.is_guided() {
        return;
    }
    let speed = world.resource::<ProjectileTable>().get(projectile.kind).speed;

    let new_velocity = {
        let Some(mut body) = world.get_mut::<RigidBody>(node) else {
            return;
        };
        let v = steer_velocity(body.velocity, projectile.target_direction, speed, dt);
        body.set_velocity(v);
        v
    };

    let degrees = facing_degrees(new_velocity);
    if let Some(mut rotation) = world.get_mut::<Rotation>(node) {
        rotation.degrees = degrees;
        return;
    }
    world.entity_mut(node).insert(Rotation { degrees });
}

/// World-space bounding box of the projectile's sprite.
pub fn projectile_bounding_rect(world: &World, node: Entity) -> Option<Rectangle> {
    let sprite = world.get::<Sprite>(node)?;
    world.get::<Projectile>(node)?;
    Some(world_transform(world, node).transform_rect(sprite.local_bounds()))
}

/// Table speed of the projectile's kind.
pub fn projectile_speed(world: &World, node: Entity) -> Option<f32> {
    let projectile = world.get::<Projectile>(node)?;
    let table = world.get_resource::<ProjectileTable>()?;
    Some(table.get(projectile.kind).speed)
}

/// Table damage of the projectile's kind.
pub fn projectile_damage(world: &World, node: Entity) -> Option<u32> {
    let projectile = world.get::<Projectile>(node)?;
    let table = world.get_resource::<ProjectileTable>()?;
    Some(table.get(projectile.kind).damage)
}
