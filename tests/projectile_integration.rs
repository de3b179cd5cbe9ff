//! Integration tests for projectiles: construction from the ballistic table,
//! guided steering, missile targeting and ballistic lookups.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test projectile_integration
//! ```

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use skyraid::components::category::Category;
use skyraid::components::nodekind::NodeKind;
use skyraid::components::particleemitter::ParticleEmitter;
use skyraid::components::projectile::{Projectile, ProjectileKind};
use skyraid::components::rotation::Rotation;
use skyraid::components::tint::Tint;
use skyraid::resources::commandqueue::CommandQueue;
use skyraid::resources::particles::{ParticleKind, ParticleSystem};
use skyraid::resources::projectiletable::ProjectileTable;
use skyraid::resources::targets::ActiveEnemies;
use skyraid::resources::worldtime::WorldTime;
use skyraid::systems::commands::dispatch_commands_system;
use skyraid::systems::guidance::guide_missiles_system;
use skyraid::systems::movement::{entity_speed, set_velocity, spawn_entity, velocity};
use skyraid::systems::projectile::{
    guide_towards, is_guided, projectile_bounding_rect, projectile_damage, projectile_speed,
    spawn_projectile,
};
use skyraid::systems::scenegraph::{
    attach_child, children_of, node_category, spawn_root, update_node, world_position,
};

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn v(x: f32, y: f32) -> Vector2 {
    Vector2 { x, y }
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    let mut time = WorldTime::default();
    time.delta = delta;
    world.insert_resource(time);
    world.insert_resource(ParticleSystem::new());
    world.insert_resource(CommandQueue::default());
    world.insert_resource(ActiveEnemies::default());
    world.insert_resource(ProjectileTable::builtin());
    world
}

fn tick_guidance(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((guide_missiles_system, dispatch_commands_system).chain());
    schedule.run(world);
}

/// Angle in degrees between two non-zero vectors.
fn angle_between(a: Vector2, b: Vector2) -> f32 {
    let cos = (a.x * b.x + a.y * b.y) / (a.length() * b.length());
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn missile_gets_tint_and_two_tail_emitters() {
    let mut world = make_world(0.0);
    let missile = spawn_projectile(&mut world, ProjectileKind::Missile, v(50.0, 60.0));

    assert_eq!(world.get::<NodeKind>(missile), Some(&NodeKind::Projectile));
    assert!(world.get::<Tint>(missile).is_some());

    let emitters = children_of(&world, missile);
    assert_eq!(emitters.len(), 2);
    let kinds: Vec<ParticleKind> = emitters
        .iter()
        .map(|e| world.get::<ParticleEmitter>(*e).unwrap().kind)
        .collect();
    assert_eq!(kinds, vec![ParticleKind::Smoke, ParticleKind::Propellant]);

    // Half the missile rect height (32) below the center.
    for emitter in emitters {
        let p = world_position(&world, emitter);
        assert!(approx_eq(p.x, 50.0));
        assert!(approx_eq(p.y, 76.0));
    }
}

#[test]
fn bullets_have_no_emitters_and_no_tint() {
    let mut world = make_world(0.0);
    for kind in [ProjectileKind::AlliedBullet, ProjectileKind::EnemyBullet] {
        let bullet = spawn_projectile(&mut world, kind, v(0.0, 0.0));
        assert!(children_of(&world, bullet).is_empty());
        assert!(world.get::<Tint>(bullet).is_none());
        assert!(!is_guided(&world, bullet));
    }
}

#[test]
fn projectile_category_follows_its_kind() {
    let mut world = make_world(0.0);
    let allied = spawn_projectile(&mut world, ProjectileKind::AlliedBullet, v(0.0, 0.0));
    let enemy = spawn_projectile(&mut world, ProjectileKind::EnemyBullet, v(0.0, 0.0));
    let missile = spawn_projectile(&mut world, ProjectileKind::Missile, v(0.0, 0.0));

    assert_eq!(node_category(&world, allied), Category::ALLIED_PROJECTILE);
    assert_eq!(node_category(&world, enemy), Category::ENEMY_PROJECTILE);
    assert_eq!(node_category(&world, missile), Category::ALLIED_PROJECTILE);
}

// =============================================================================
// Movement and guidance
// =============================================================================

#[test]
fn unguided_projectile_only_integrates() {
    let mut world = make_world(0.0);
    let root = spawn_root(&mut world);
    let bullet = spawn_projectile(&mut world, ProjectileKind::AlliedBullet, v(10.0, 100.0));
    attach_child(&mut world, root, bullet);
    set_velocity(&mut world, bullet, v(0.0, -300.0));

    update_node(&mut world, root, 0.5);

    let p = world_position(&world, bullet);
    assert!(approx_eq(p.x, 10.0));
    assert!(approx_eq(p.y, -50.0));
    let vel = velocity(&world, bullet).unwrap();
    assert!(approx_eq(vel.y, -300.0));
}

#[test]
fn guided_update_turns_toward_target_at_table_speed() {
    let mut world = make_world(0.0);
    let root = spawn_root(&mut world);
    let missile = spawn_projectile(&mut world, ProjectileKind::Missile, v(0.0, 0.0));
    attach_child(&mut world, root, missile);
    set_velocity(&mut world, missile, v(0.0, -150.0));
    guide_towards(&mut world, missile, v(100.0, 0.0));

    let target_direction = world.get::<Projectile>(missile).unwrap().target_direction;
    assert!(approx_eq(target_direction.x, 1.0));
    assert!(approx_eq(target_direction.y, 0.0));

    let mut previous = angle_between(velocity(&world, missile).unwrap(), target_direction);
    for _ in 0..5 {
        update_node(&mut world, root, 0.1);
        let vel = velocity(&world, missile).unwrap();
        let angle = angle_between(vel, target_direction);
        assert!(angle < previous, "{angle} should be below {previous}");
        assert!(approx_eq(vel.length(), 150.0));
        previous = angle;
    }
}

#[test]
fn guided_missile_at_rest_launches_along_target_direction() {
    let mut world = make_world(0.0);
    let root = spawn_root(&mut world);
    let missile = spawn_projectile(&mut world, ProjectileKind::Missile, v(0.0, 0.0));
    attach_child(&mut world, root, missile);
    guide_towards(&mut world, missile, v(10.0, 0.0));

    update_node(&mut world, root, 0.1);

    // Steering runs before integration.
    let vel = velocity(&world, missile).unwrap();
    assert!(approx_eq(vel.x, 150.0));
    assert!(approx_eq(vel.y, 0.0));
    assert!(approx_eq(world_position(&world, missile).x, 15.0));
    // Heading right: atan2(0, 150) + 90
    assert!(approx_eq(world.get::<Rotation>(missile).unwrap().degrees, 90.0));
}

#[test]
fn guide_towards_own_position_keeps_previous_direction() {
    let mut world = make_world(0.0);
    let missile = spawn_projectile(&mut world, ProjectileKind::Missile, v(5.0, 5.0));
    guide_towards(&mut world, missile, v(5.0, -20.0));
    guide_towards(&mut world, missile, v(5.0, 5.0));

    let dir = world.get::<Projectile>(missile).unwrap().target_direction;
    assert!(approx_eq(dir.x, 0.0));
    assert!(approx_eq(dir.y, -1.0));
}

#[test]
#[should_panic]
fn guide_towards_on_unguided_projectile_panics() {
    let mut world = make_world(0.0);
    let bullet = spawn_projectile(&mut world, ProjectileKind::AlliedBullet, v(0.0, 0.0));
    guide_towards(&mut world, bullet, v(100.0, 0.0));
}

#[test]
fn missiles_are_guided_toward_the_closest_enemy() {
    let mut world = make_world(0.016);
    let root = spawn_root(&mut world);
    let far = spawn_entity(
        &mut world,
        v(0.0, -300.0),
        v(0.0, 0.0),
        10,
        Category::ENEMY_AIRCRAFT,
    );
    let near = spawn_entity(
        &mut world,
        v(100.0, 0.0),
        v(0.0, 0.0),
        10,
        Category::ENEMY_AIRCRAFT,
    );
    let friend = spawn_entity(
        &mut world,
        v(0.0, 10.0),
        v(0.0, 0.0),
        10,
        Category::ALLIED_AIRCRAFT,
    );
    let missile = spawn_projectile(&mut world, ProjectileKind::Missile, v(0.0, 0.0));
    for node in [far, near, friend, missile] {
        attach_child(&mut world, root, node);
    }

    tick_guidance(&mut world);

    assert_eq!(world.resource::<ActiveEnemies>().0, vec![far, near]);
    let dir = world.get::<Projectile>(missile).unwrap().target_direction;
    assert!(approx_eq(dir.x, 1.0));
    assert!(approx_eq(dir.y, 0.0));
}

#[test]
fn guidance_without_enemies_leaves_missiles_alone() {
    let mut world = make_world(0.016);
    let root = spawn_root(&mut world);
    let missile = spawn_projectile(&mut world, ProjectileKind::Missile, v(0.0, 0.0));
    attach_child(&mut world, root, missile);

    tick_guidance(&mut world);

    assert!(world.resource::<ActiveEnemies>().0.is_empty());
    let dir = world.get::<Projectile>(missile).unwrap().target_direction;
    assert!(approx_eq(dir.x, 0.0));
    assert!(approx_eq(dir.y, 0.0));
}

// =============================================================================
// Ballistic lookups
// =============================================================================

#[test]
fn speed_and_damage_come_from_the_table() {
    let mut world = make_world(0.0);
    let bullet = spawn_projectile(&mut world, ProjectileKind::EnemyBullet, v(0.0, 0.0));
    let missile = spawn_projectile(&mut world, ProjectileKind::Missile, v(0.0, 0.0));
    let plane = spawn_entity(&mut world, v(0.0, 0.0), v(3.0, 4.0), 10, Category::NONE);

    assert_eq!(projectile_speed(&world, bullet), Some(300.0));
    assert_eq!(projectile_damage(&world, bullet), Some(10));
    assert_eq!(projectile_speed(&world, missile), Some(150.0));
    assert_eq!(projectile_damage(&world, missile), Some(200));
    assert_eq!(projectile_damage(&world, plane), None);

    // At rest, a projectile still reports its table speed.
    assert!(approx_eq(entity_speed(&world, missile), 150.0));
    assert!(approx_eq(entity_speed(&world, plane), 5.0));
}

#[test]
fn bounding_rect_follows_the_world_transform() {
    let mut world = make_world(0.0);
    let root = spawn_root(&mut world);
    let missile = spawn_projectile(&mut world, ProjectileKind::Missile, v(100.0, 100.0));
    attach_child(&mut world, root, missile);

    // 15x32 rect, origin at (7, 16)
    let r = projectile_bounding_rect(&world, missile).unwrap();
    assert!(approx_eq(r.x, 93.0));
    assert!(approx_eq(r.y, 84.0));
    assert!(approx_eq(r.width, 15.0));
    assert!(approx_eq(r.height, 32.0));

    world.get_mut::<Rotation>(missile).unwrap().degrees = 90.0;
    let r = projectile_bounding_rect(&world, missile).unwrap();
    assert!(approx_eq(r.width, 32.0));
    assert!(approx_eq(r.height, 15.0));
}

#[test]
fn shipped_table_file_matches_builtin_defaults() {
    let table = ProjectileTable::load_from_file("assets/data/projectiles.json").unwrap();
    let builtin = ProjectileTable::builtin();
    for kind in ProjectileKind::ALL {
        assert_eq!(table.get(kind), builtin.get(kind));
    }
}
