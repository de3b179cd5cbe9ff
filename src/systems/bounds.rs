//! Culling of projectiles and enemies that left the battlefield.
//!
//! The battlefield is the visible area grown by [`BATTLEFIELD_MARGIN`] on
//! every side, so enemies can enter from above before being drawn. Nodes of
//! the affected categories whose world position falls outside get the
//! [`Destroyed`] marker and are pruned by the next wreck removal.

use bevy_ecs::prelude::*;
use raylib::prelude::{Rectangle, Vector2};

use crate::components::category::Category;
use crate::components::hitpoints::Destroyed;
use crate::resources::commandqueue::{CommandQueue, SceneCommand};
use crate::resources::screensize::ScreenSize;
use crate::systems::scenegraph::world_position;

pub const BATTLEFIELD_MARGIN: f32 = 150.0;

pub fn battlefield_bounds(screen: &ScreenSize) -> Rectangle {
    Rectangle {
        x: -BATTLEFIELD_MARGIN,
        y: -BATTLEFIELD_MARGIN,
        width: screen.w as f32 + 2.0 * BATTLEFIELD_MARGIN,
        height: screen.h as f32 + 2.0 * BATTLEFIELD_MARGIN,
    }
}

fn contains(rect: &Rectangle, p: Vector2) -> bool {
    p.x >= rect.x && p.x <= rect.x + rect.width && p.y >= rect.y && p.y <= rect.y + rect.height
}

pub fn destroy_outside_view_system(mut queue: ResMut<CommandQueue>, screen: Res<ScreenSize>) {
    let bounds = battlefield_bounds(&screen);
    queue.push(SceneCommand::new(
        Category::PROJECTILE | Category::ENEMY_AIRCRAFT,
        move |world, node, _| {
            if !contains(&bounds, world_position(world, node)) {
                world.entity_mut(node).insert(Destroyed);
            }
        },
    ));
}
