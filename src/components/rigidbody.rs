//! Kinematic body of a scene entity.
//!
//! The [`RigidBody`] component stores the velocity that
//! [`integrate_velocity`](crate::systems::movement::integrate_velocity) applies
//! to the node's local [`MapPosition`](super::mapposition::MapPosition) every
//! update. There is no collision response here; bodies are purely kinematic.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing velocity in world units per second.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    pub fn with_velocity(vx: f32, vy: f32) -> Self {
        Self {
            velocity: Vector2 { x: vx, y: vy },
        }
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Add `delta` to the current velocity.
    pub fn accelerate(&mut self, delta: Vector2) {
        self.velocity = self.velocity + delta;
    }

    /// Magnitude of the velocity.
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_is_at_rest() {
        let rb = RigidBody::new();
        assert!(approx_eq(rb.velocity.x, 0.0));
        assert!(approx_eq(rb.velocity.y, 0.0));
        assert!(approx_eq(rb.speed(), 0.0));
    }

    #[test]
    fn test_speed_is_velocity_magnitude() {
        let rb = RigidBody::with_velocity(3.0, -4.0);
        assert!(approx_eq(rb.speed(), 5.0));
    }

    #[test]
    fn test_accelerate_adds_to_velocity() {
        let mut rb = RigidBody::with_velocity(1.0, 2.0);
        rb.accelerate(Vector2 { x: 0.5, y: -2.0 });
        assert!(approx_eq(rb.velocity.x, 1.5));
        assert!(approx_eq(rb.velocity.y, 0.0));
    }
}
