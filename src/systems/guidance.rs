//! Missile targeting.
//!
//! Two commands per tick: the first records every live enemy aircraft into
//! [`ActiveEnemies`], the second points each guided allied projectile at the
//! closest one. Both go through the [`CommandQueue`], so this system must run
//! before [`dispatch_commands_system`](crate::systems::commands::dispatch_commands_system).

use bevy_ecs::prelude::*;

use crate::components::category::Category;
use crate::resources::commandqueue::{CommandQueue, SceneCommand};
use crate::resources::targets::ActiveEnemies;
use crate::systems::projectile::{guide_towards, is_guided};
use crate::systems::scenegraph::{is_marked_for_removal, world_position};

pub fn guide_missiles_system(
    mut queue: ResMut<CommandQueue>,
    mut enemies: ResMut<ActiveEnemies>,
) {
    enemies.0.clear();

    queue.push(SceneCommand::new(Category::ENEMY_AIRCRAFT, |world, node, _| {
        if !is_marked_for_removal(world, node) {
            world.resource_mut::<ActiveEnemies>().0.push(node);
        }
    }));

    queue.push(SceneCommand::new(
        Category::ALLIED_PROJECTILE,
        |world, node, _| {
            if !is_guided(world, node) {
                return;
            }
            let origin = world_position(world, node);
            let closest = world
                .resource::<ActiveEnemies>()
                .0
                .iter()
                .map(|enemy| world_position(world, *enemy))
                .map(|pos| (pos, (pos - origin).length()))
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(pos, _)| pos);
            if let Some(target) = closest {
                guide_towards(world, node, target);
            }
        },
    ));
}
