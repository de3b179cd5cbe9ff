//! Particle values and the shared particle system.
//!
//! Emitter nodes push [`Particle`]s into the [`ParticleSystem`] resource; the
//! [`update_particles`](crate::systems::particles::update_particles) system ages
//! them once per tick and drops the ones whose lifetime ran out. Particles are
//! plain values: no entity, no transform, just a world position.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Color, Vector2};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ParticleKind {
    Propellant,
    Smoke,
    EnginePower,
}

impl ParticleKind {
    pub const ALL: [ParticleKind; 3] = [
        ParticleKind::Propellant,
        ParticleKind::Smoke,
        ParticleKind::EnginePower,
    ];

    /// Default color and starting lifetime for this kind.
    pub fn data(self) -> ParticleData {
        match self {
            ParticleKind::Propellant => ParticleData {
                color: Color::new(255, 255, 50, 255),
                lifetime: 0.6,
            },
            ParticleKind::Smoke => ParticleData {
                color: Color::new(50, 50, 50, 255),
                lifetime: 4.0,
            },
            ParticleKind::EnginePower => ParticleData {
                color: Color::new(255, 150, 40, 255),
                lifetime: 0.3,
            },
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ParticleData {
    pub color: Color,
    /// Starting lifetime in seconds.
    pub lifetime: f32,
}

/// One visual particle.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vector2,
    pub color: Color,
    /// Remaining lifetime in seconds.
    pub lifetime: f32,
}

#[derive(Resource, Debug, Default)]
pub struct ParticleSystem {
    particles: FxHashMap<ParticleKind, Vec<Particle>>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a fresh particle of `kind` at `position`.
    pub fn add_particle(&mut self, kind: ParticleKind, position: Vector2) {
        let data = kind.data();
        self.particles.entry(kind).or_default().push(Particle {
            position,
            color: data.color,
            lifetime: data.lifetime,
        });
    }

    /// Age every particle by `dt` and drop the expired ones.
    pub fn update(&mut self, dt: f32) {
        for list in self.particles.values_mut() {
            for p in list.iter_mut() {
                p.lifetime -= dt;
            }
            list.retain(|p| p.lifetime > 0.0);
        }
    }

    pub fn particles(&self, kind: ParticleKind) -> &[Particle] {
        self.particles.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.particles.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

/// Opacity of `particle`: fades linearly from opaque to transparent over the
/// kind's lifetime.
pub fn particle_alpha(kind: ParticleKind, particle: &Particle) -> u8 {
    let ratio = (particle.lifetime / kind.data().lifetime).clamp(0.0, 1.0);
    (255.0 * ratio) as u8
}
