//! Scene graph operations over the `bevy_ecs` hierarchy.
//!
//! Every scene node is an entity with a [`NodeKind`] tag and a local transform
//! ([`MapPosition`], optional [`Rotation`] / [`Scale`]). Ownership follows the
//! built-in relationship: a parent's [`Children`] lists its nodes in insertion
//! order and each child points back with a non-owning [`ChildOf`]. Despawning a
//! node despawns its whole subtree.
//!
//! # Traversals
//!
//! - [`update_node`]: node-specific behavior first ([`update_current`]), then
//!   every child in insertion order. Later siblings observe earlier ones
//!   already updated.
//! - [`draw_node`]: composes `parent * local`, draws the node, then its
//!   children on top with the composed transform. Takes `&World`.
//! - [`remove_wrecks`]: prunes marked children together with their subtrees.
//!
//! # Schedule position
//!
//! [`scene_update_system`] runs after command dispatch and wreck removal;
//! emitters therefore see the positions their parents reached this tick.

use bevy_ecs::hierarchy::{ChildOf, Children};
use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector2};
use smallvec::{SmallVec, smallvec};

use crate::components::category::Category;
use crate::components::globaltransform2d::GlobalTransform2D;
use crate::components::hitpoints::{Destroyed, Hitpoints};
use crate::components::mapposition::MapPosition;
use crate::components::nodekind::{NodeKind, SceneRoot};
use crate::components::projectile::Projectile;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::resources::worldtime::WorldTime;
use crate::systems::movement::integrate_velocity;
use crate::systems::particleemitter::emit_particles;
use crate::systems::projectile::steer_projectile;
use crate::systems::render::SceneRenderer;

/// Snapshot of a node's children. Traversals iterate the snapshot so the
/// hierarchy may change underneath them.
pub type ChildList = SmallVec<[Entity; 8]>;

/// Spawn a bare node of `kind` at local `position`.
pub fn spawn_node(world: &mut World, kind: NodeKind, position: Vector2) -> Entity {
    world
        .spawn((kind, MapPosition { pos: position }))
        .id()
}

/// Spawn a scene root with the [`SceneRoot`] marker.
pub fn spawn_root(world: &mut World) -> Entity {
    world
        .spawn((SceneRoot, NodeKind::Plain, MapPosition::new(0.0, 0.0)))
        .id()
}

pub fn children_of(world: &World, node: Entity) -> ChildList {
    match world.get::<Children>(node) {
        Some(children) => {
            let list: &[Entity] = children;
            SmallVec::from_slice(list)
        }
        None => ChildList::new(),
    }
}

pub fn parent_of(world: &World, node: Entity) -> Option<Entity> {
    world.get::<ChildOf>(node).map(|child_of| child_of.parent())
}

/// True when `ancestor` appears on the parent chain of `node`.
pub fn is_ancestor(world: &World, ancestor: Entity, node: Entity) -> bool {
    let mut current = parent_of(world, node);
    while let Some(parent) = current {
        if parent == ancestor {
            return true;
        }
        current = parent_of(world, parent);
    }
    false
}

/// Move `child` (and its subtree) under `parent`, appended after the existing
/// children. A child attached elsewhere is moved.
pub fn attach_child(world: &mut World, parent: Entity, child: Entity) {
    assert_ne!(parent, child, "a node cannot own itself");
    assert!(
        !is_ancestor(world, child, parent),
        "attaching {child:?} under {parent:?} would create a cycle"
    );
    world.entity_mut(parent).add_child(child);
    world.flush();
}

/// Detach `child` from `parent` and hand it back.
///
/// Returns `None`, and changes nothing, when `child` is not a direct child of
/// `parent`. The detached subtree stays alive; the caller owns it now.
pub fn detach_child(world: &mut World, parent: Entity, child: Entity) -> Option<Entity> {
    if !children_of(world, parent).contains(&child) {
        return None;
    }
    world.entity_mut(child).remove::<ChildOf>();
    world.flush();
    Some(child)
}

/// Local transform of `node` as stored in its components.
pub fn local_transform(world: &World, node: Entity) -> GlobalTransform2D {
    GlobalTransform2D::new(
        world
            .get::<MapPosition>(node)
            .map(|p| p.pos)
            .unwrap_or(Vector2 { x: 0.0, y: 0.0 }),
        world.get::<Rotation>(node).map(|r| r.degrees).unwrap_or(0.0),
        world
            .get::<Scale>(node)
            .map(|s| s.scale)
            .unwrap_or(Vector2 { x: 1.0, y: 1.0 }),
    )
}

/// Compose the local transforms from the root of `node`'s tree down to `node`.
pub fn world_transform(world: &World, node: Entity) -> GlobalTransform2D {
    let mut chain: ChildList = smallvec![node];
    let mut current = node;
    while let Some(parent) = parent_of(world, current) {
        chain.push(parent);
        current = parent;
    }
    chain
        .iter()
        .rev()
        .fold(GlobalTransform2D::IDENTITY, |acc, e| {
            acc.compose(&local_transform(world, *e))
        })
}

pub fn world_position(world: &World, node: Entity) -> Vector2 {
    world_transform(world, node).position()
}

/// Category of `node`. Projectiles derive it from their kind; other nodes use
/// their [`Category`] component, defaulting to [`Category::NONE`].
pub fn node_category(world: &World, node: Entity) -> Category {
    if let Some(projectile) = world.get::<Projectile>(node) {
        return projectile.category();
    }
    world.get::<Category>(node).copied().unwrap_or(Category::NONE)
}

/// A wreck: flagged [`Destroyed`] or out of [`Hitpoints`].
pub fn is_marked_for_removal(world: &World, node: Entity) -> bool {
    world.get::<Destroyed>(node).is_some()
        || world
            .get::<Hitpoints>(node)
            .is_some_and(|hp| hp.is_destroyed())
}

/// Node-specific part of the update, dispatched on [`NodeKind`].
pub fn update_current(world: &mut World, node: Entity, dt: f32) {
    let kind = world.get::<NodeKind>(node).copied().unwrap_or_default();
    match kind {
        NodeKind::Projectile => {
            steer_projectile(world, node, dt);
            integrate_velocity(world, node, dt);
        }
        NodeKind::Entity => integrate_velocity(world, node, dt),
        NodeKind::Emitter => emit_particles(world, node, dt),
        NodeKind::Plain | NodeKind::Sprite => {}
    }
}

/// Update `node`, then its children in insertion order.
pub fn update_node(world: &mut World, node: Entity, dt: f32) {
    update_current(world, node, dt);
    for child in children_of(world, node) {
        if world.get_entity(child).is_ok() {
            update_node(world, child, dt);
        }
    }
}

/// Node-specific part of drawing. Only sprite-bearing variants draw anything.
pub fn draw_current(
    world: &World,
    node: Entity,
    transform: &GlobalTransform2D,
    renderer: &mut dyn SceneRenderer,
) {
    let kind = world.get::<NodeKind>(node).copied().unwrap_or_default();
    match kind {
        NodeKind::Sprite | NodeKind::Entity | NodeKind::Projectile => {
            if let Some(sprite) = world.get::<Sprite>(node) {
                let tint = world
                    .get::<Tint>(node)
                    .map(|t| t.color)
                    .unwrap_or(Color::WHITE);
                renderer.draw_sprite(sprite, transform, tint);
            }
        }
        NodeKind::Emitter | NodeKind::Plain => {}
    }
}

/// Draw `node` with `parent_transform * local`, then its children on top.
pub fn draw_node(
    world: &World,
    node: Entity,
    parent_transform: &GlobalTransform2D,
    renderer: &mut dyn SceneRenderer,
) {
    let transform = parent_transform.compose(&local_transform(world, node));
    draw_current(world, node, &transform, renderer);
    for child in children_of(world, node) {
        draw_node(world, child, &transform, renderer);
    }
}

/// Despawn every marked descendant of `node` together with its subtree.
/// Unmarked children are searched recursively.
pub fn remove_wrecks(world: &mut World, node: Entity) {
    for child in children_of(world, node) {
        if is_marked_for_removal(world, child) {
            world.entity_mut(child).despawn();
        } else {
            remove_wrecks(world, child);
        }
    }
    world.flush();
}

pub fn scene_roots(world: &mut World) -> Vec<Entity> {
    world
        .query_filtered::<Entity, With<SceneRoot>>()
        .iter(world)
        .collect()
}

/// Update every scene graph by the current tick's delta.
pub fn scene_update_system(world: &mut World) {
    let dt = world.resource::<WorldTime>().delta;
    for root in scene_roots(world) {
        update_node(world, root, dt);
    }
}

/// Prune wrecks from every scene graph.
pub fn remove_wrecks_system(world: &mut World) {
    for root in scene_roots(world) {
        remove_wrecks(world, root);
    }
}
