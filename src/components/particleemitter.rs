//! Emitter node component.
//!
//! A [`ParticleEmitter`] accumulates update time and, every
//! [`EMISSION_INTERVAL`] seconds, pushes one particle of its [`ParticleKind`] into
//! the shared [`ParticleSystem`](crate::resources::particles::ParticleSystem) at
//! the node's world position. Large deltas catch up by emitting several
//! particles in one update; the remainder carries over to the next one.
//!
//! The emitter stores no particles itself.
//!
//! # Related
//!
//! - [`crate::systems::particleemitter::emit_particles`] – emission step
//! - [`crate::resources::particles`] – particle aging and culling

use bevy_ecs::prelude::*;

use crate::resources::particles::ParticleKind;

/// Particles emitted per second by every emitter.
pub const EMISSION_RATE: f32 = 30.0;
/// Seconds between two emissions.
pub const EMISSION_INTERVAL: f32 = 1.0 / EMISSION_RATE;

#[derive(Component, Debug, Clone)]
pub struct ParticleEmitter {
    /// Kind of particle pushed on each emission.
    pub kind: ParticleKind,
    /// Time accumulated since the last emission.
    pub accumulated: f32,
}

impl ParticleEmitter {
    pub fn new(kind: ParticleKind) -> Self {
        Self {
            kind,
            accumulated: 0.0,
        }
    }

    /// Advance the accumulator by `dt` and return how many particles are due.
    pub fn tick(&mut self, dt: f32) -> u32 {
        self.accumulated += dt;
        let mut due = 0;
        while self.accumulated >= EMISSION_INTERVAL {
            self.accumulated -= EMISSION_INTERVAL;
            due += 1;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_new_emitter_starts_empty() {
        let e = ParticleEmitter::new(ParticleKind::Smoke);
        assert_eq!(e.kind, ParticleKind::Smoke);
        assert!(e.accumulated.abs() < EPSILON);
    }

    #[test]
    fn test_tick_below_interval_emits_nothing() {
        let mut e = ParticleEmitter::new(ParticleKind::Propellant);
        assert_eq!(e.tick(EMISSION_INTERVAL * 0.5), 0);
        assert!((e.accumulated - EMISSION_INTERVAL * 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_tick_carries_remainder() {
        let mut e = ParticleEmitter::new(ParticleKind::Propellant);
        assert_eq!(e.tick(EMISSION_INTERVAL * 3.5), 3);
        assert!((e.accumulated - EMISSION_INTERVAL * 0.5).abs() < EPSILON);
        // The carried half interval completes with another half.
        assert_eq!(e.tick(EMISSION_INTERVAL * 0.6), 1);
    }
}
