//! Emission step for emitter nodes.
//!
//! Runs from [`update_current`](crate::systems::scenegraph::update_current) for
//! [`NodeKind::Emitter`] nodes. The number of particles due comes from
//! [`ParticleEmitter::tick`]; all of them spawn at the emitter's world position
//! as of this call, which already reflects this tick's movement of its
//! ancestors.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::nodekind::NodeKind;
use crate::components::particleemitter::ParticleEmitter;
use crate::resources::particles::{ParticleKind, ParticleSystem};
use crate::systems::scenegraph::world_position;

/// Spawn an emitter node of `kind` at local `position`.
pub fn spawn_emitter(world: &mut World, kind: ParticleKind, position: Vector2) -> Entity {
    world
        .spawn((
            NodeKind::Emitter,
            MapPosition { pos: position },
            ParticleEmitter::new(kind),
        ))
        .id()
}

/// Advance the emitter by `dt` and push the particles that became due.
/// Returns how many were emitted.
pub fn emit_particles(world: &mut World, node: Entity, dt: f32) -> u32 {
    let (due, kind) = match world.get_mut::<ParticleEmitter>(node) {
        Some(mut emitter) => (emitter.tick(dt), emitter.kind),
        None => return 0,
    };
    if due == 0 {
        return 0;
    }

    let position = world_position(world, node);
    let Some(mut particles) = world.get_resource_mut::<ParticleSystem>() else {
        return 0;
    };
    for _ in 0..due {
        particles.add_particle(kind, position);
    }
    due
}
