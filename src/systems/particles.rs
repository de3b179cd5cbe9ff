//! Particle aging.
//!
//! Runs once per tick after the scene update, so particles spawned this tick
//! are aged starting next tick.

use bevy_ecs::prelude::*;

use crate::resources::particles::ParticleSystem;
use crate::resources::worldtime::WorldTime;

pub fn update_particles(time: Res<WorldTime>, mut particles: ResMut<ParticleSystem>) {
    if time.delta <= 0.0 {
        return;
    }
    particles.update(time.delta);
}
