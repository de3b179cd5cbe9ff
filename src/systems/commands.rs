//! Delivery of category-targeted [`SceneCommand`]s.

use bevy_ecs::prelude::*;

use crate::resources::commandqueue::{CommandQueue, SceneCommand};
use crate::resources::worldtime::WorldTime;
use crate::systems::scenegraph::{children_of, node_category, scene_roots};

/// Run `command` on `node` if the categories intersect, then on every
/// descendant (preorder, children in insertion order).
pub fn on_command(world: &mut World, node: Entity, command: &SceneCommand, dt: f32) {
    if command.category.intersects(node_category(world, node)) {
        (command.action)(world, node, dt);
    }
    for child in children_of(world, node) {
        if world.get_entity(child).is_ok() {
            on_command(world, child, command, dt);
        }
    }
}

/// Drain the [`CommandQueue`] against every scene root, oldest command first.
/// Commands pushed while dispatching are delivered in the same pass.
pub fn dispatch_commands_system(world: &mut World) {
    let dt = world.resource::<WorldTime>().delta;
    let roots = scene_roots(world);
    loop {
        let Some(command) = world.resource_mut::<CommandQueue>().pop() else {
            break;
        };
        for root in &roots {
            on_command(world, *root, &command, dt);
        }
    }
}
