//! Projectile component and homing math.
//!
//! A [`Projectile`] names a row of the ballistic table
//! ([`ProjectileTable`](crate::resources::projectiletable::ProjectileTable)) through
//! its [`ProjectileKind`]. Only [`ProjectileKind::Missile`] is guided: each update
//! it bends its velocity toward `target_direction` at [`APPROACH_RATE`] and
//! re-normalizes to the table speed. See [`crate::systems::projectile`].

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::category::Category;

/// How hard a guided projectile pulls toward its target, in world units per
/// second applied to the direction vector.
pub const APPROACH_RATE: f32 = 200.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProjectileKind {
    AlliedBullet,
    EnemyBullet,
    Missile,
}

impl ProjectileKind {
    pub const ALL: [ProjectileKind; 3] = [
        ProjectileKind::AlliedBullet,
        ProjectileKind::EnemyBullet,
        ProjectileKind::Missile,
    ];
}

#[derive(Component, Clone, Copy, Debug)]
pub struct Projectile {
    pub kind: ProjectileKind,
    /// Unit vector toward the current target. Only meaningful when guided.
    pub target_direction: Vector2,
}

impl Projectile {
    pub fn new(kind: ProjectileKind) -> Self {
        Self {
            kind,
            target_direction: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    pub fn is_guided(&self) -> bool {
        self.kind == ProjectileKind::Missile
    }

    pub fn category(&self) -> Category {
        if self.kind == ProjectileKind::EnemyBullet {
            Category::ENEMY_PROJECTILE
        } else {
            Category::ALLIED_PROJECTILE
        }
    }
}

/// `v / |v|`, or `None` for a zero-length vector.
pub fn unit_vector(v: Vector2) -> Option<Vector2> {
    let len = v.length();
    if len <= f32::EPSILON {
        return None;
    }
    Some(Vector2 {
        x: v.x / len,
        y: v.y / len,
    })
}

/// Blend `velocity` toward `target_direction` and rescale the result to `speed`.
///
/// A degenerate blend (zero-length) keeps the current velocity.
pub fn steer_velocity(velocity: Vector2, target_direction: Vector2, speed: f32, dt: f32) -> Vector2 {
    let blended = target_direction.scale_by(APPROACH_RATE * dt) + velocity;
    match unit_vector(blended) {
        Some(dir) => dir.scale_by(speed),
        None => velocity,
    }
}

/// Sprite rotation for a given velocity. Projectile art points up, so the
/// heading angle is offset by 90 degrees.
pub fn facing_degrees(velocity: Vector2) -> f32 {
    velocity.y.atan2(velocity.x).to_degrees() + 90.0
}
