use bevy_ecs::prelude::Component;

/// Local rotation of a scene node, in degrees, clockwise (Y+ is down).
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation {
    pub degrees: f32,
}
