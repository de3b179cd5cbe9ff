use bevy_ecs::prelude::{Entity, Resource};

/// Enemy aircraft still alive this tick, collected for missile targeting.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActiveEnemies(pub Vec<Entity>);
