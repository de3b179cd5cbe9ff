//! Mission setup and the update schedule.
//!
//! [`init_world`] inserts every resource the systems expect, [`spawn_scene`]
//! builds the root with its two layers and the player aircraft, and
//! [`build_update_schedule`] wires the per-tick systems in their fixed order.
//! [`spawn_raiders`] keeps a few enemy aircraft and missiles coming so there is
//! something to watch.

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::*;

use crate::components::category::Category;
use crate::components::nodekind::{Layer, NodeKind};
use crate::components::projectile::ProjectileKind;
use crate::components::sprite::Sprite;
use crate::events::music::MusicMessage;
use crate::resources::commandqueue::CommandQueue;
use crate::resources::framestep::{FixedTimestep, FrameStats};
use crate::resources::gameconfig::GameConfig;
use crate::resources::music::MusicPlayer;
use crate::resources::particles::{ParticleKind, ParticleSystem};
use crate::resources::projectiletable::ProjectileTable;
use crate::resources::screensize::ScreenSize;
use crate::resources::targets::ActiveEnemies;
use crate::resources::texturestore::{TextureId, TextureStore};
use crate::resources::worldtime::WorldTime;
use crate::systems::bounds::destroy_outside_view_system;
use crate::systems::commands::dispatch_commands_system;
use crate::systems::guidance::guide_missiles_system;
use crate::systems::movement::spawn_sprite_entity;
use crate::systems::music::{poll_music_messages, update_music_messages};
use crate::systems::particleemitter::spawn_emitter;
use crate::systems::particles::update_particles;
use crate::systems::projectile::spawn_projectile;
use crate::systems::scenegraph::{
    attach_child, remove_wrecks_system, scene_update_system, spawn_node, spawn_root,
};

const PLAYER_HITPOINTS: u32 = 100;
const RAIDER_HITPOINTS: u32 = 20;
const RAIDER_SPEED: f32 = 80.0;
/// Seconds between two raider waves.
const RAID_INTERVAL: f32 = 2.5;

/// Texture files, relative to the working directory.
const TEXTURES: [(TextureId, &str); 3] = [
    (TextureId::Entities, "./assets/textures/entities.png"),
    (TextureId::Jungle, "./assets/textures/jungle.png"),
    (TextureId::Particle, "./assets/textures/particle.png"),
];

fn eagle_rect() -> Rectangle {
    Rectangle {
        x: 0.0,
        y: 0.0,
        width: 48.0,
        height: 64.0,
    }
}

fn raptor_rect() -> Rectangle {
    Rectangle {
        x: 144.0,
        y: 0.0,
        width: 84.0,
        height: 64.0,
    }
}

/// Handles to the nodes of a freshly built scene.
#[derive(Clone, Copy, Debug)]
pub struct Scene {
    pub root: Entity,
    pub background: Entity,
    pub air: Entity,
    pub player: Entity,
}

/// Air layer that new aircraft and projectiles are attached to.
#[derive(Resource, Clone, Copy, Debug)]
pub struct AirLayer(pub Entity);

/// Countdown to the next raider wave.
#[derive(Resource, Clone, Copy, Debug)]
pub struct RaidTimer {
    pub remaining: f32,
}

impl Default for RaidTimer {
    fn default() -> Self {
        Self {
            remaining: RAID_INTERVAL,
        }
    }
}

/// Load every texture the scene uses. Missing files are logged and skipped;
/// nodes using them are simply not drawn.
pub fn load_textures(rl: &mut RaylibHandle, thread: &RaylibThread) -> TextureStore {
    let mut store = TextureStore::new();
    for (id, path) in TEXTURES {
        match store.load(rl, thread, id, path) {
            Ok(()) => info!("Loaded texture {:?} from '{}'", id, path),
            Err(e) => warn!("{}", e),
        }
    }
    store
}

/// Create the world and insert the resources every system expects.
pub fn init_world(config: &GameConfig, table: ProjectileTable, music: MusicPlayer) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(FixedTimestep::new(config.ticks_per_second));
    world.insert_resource(FrameStats::default());
    world.insert_resource(ScreenSize {
        w: config.window_width as i32,
        h: config.window_height as i32,
    });
    world.insert_resource(ParticleSystem::new());
    world.insert_resource(CommandQueue::default());
    world.insert_resource(ActiveEnemies::default());
    world.insert_resource(RaidTimer::default());
    world.insert_resource(table);
    world.insert_resource(Messages::<MusicMessage>::default());
    world.insert_resource(music);
    world.insert_resource(config.clone());
    world
}

/// Build the root, its background and air layers, and the player aircraft
/// with its engine trail.
pub fn spawn_scene(world: &mut World) -> Scene {
    let screen = *world.resource::<ScreenSize>();
    let root = spawn_root(world);

    let background = spawn_node(world, NodeKind::Sprite, Vector2 { x: 0.0, y: 0.0 });
    world.entity_mut(background).insert((
        Layer::Background,
        Sprite::new(
            TextureId::Jungle,
            Rectangle {
                x: 0.0,
                y: 0.0,
                width: screen.w as f32,
                height: screen.h as f32,
            },
        ),
    ));
    attach_child(world, root, background);

    let air = spawn_node(world, NodeKind::Plain, Vector2 { x: 0.0, y: 0.0 });
    world
        .entity_mut(air)
        .insert((Layer::Air, Category::SCENE_AIR_LAYER));
    attach_child(world, root, air);
    world.insert_resource(AirLayer(air));

    let player = spawn_sprite_entity(
        world,
        Sprite::centered(TextureId::Entities, eagle_rect()),
        Vector2 {
            x: screen.w as f32 / 2.0,
            y: screen.h as f32 - 80.0,
        },
        Vector2 { x: 0.0, y: 0.0 },
        PLAYER_HITPOINTS,
        Category::PLAYER_AIRCRAFT,
    );
    attach_child(world, air, player);
    let engine = spawn_emitter(
        world,
        ParticleKind::EnginePower,
        Vector2 {
            x: 0.0,
            y: eagle_rect().height / 2.0,
        },
    );
    attach_child(world, player, engine);

    info!("Scene ready: root={:?} player={:?}", root, player);
    Scene {
        root,
        background,
        air,
        player,
    }
}

/// Every [`RAID_INTERVAL`] seconds: one raider entering from the top at a
/// random column, and one missile launched from the bottom edge that the
/// guidance system will steer toward it.
pub fn spawn_raiders(world: &mut World) {
    let dt = world.resource::<WorldTime>().delta;
    {
        let mut timer = world.resource_mut::<RaidTimer>();
        timer.remaining -= dt;
        if timer.remaining > 0.0 {
            return;
        }
        timer.remaining += RAID_INTERVAL;
    }

    let Some(AirLayer(air)) = world.get_resource::<AirLayer>().copied() else {
        return;
    };
    let screen = *world.resource::<ScreenSize>();
    let width = screen.w.max(1) as f32;

    let raider = spawn_sprite_entity(
        world,
        Sprite::centered(TextureId::Entities, raptor_rect()),
        Vector2 {
            x: fastrand::f32() * width,
            y: -50.0,
        },
        Vector2 {
            x: 0.0,
            y: RAIDER_SPEED,
        },
        RAIDER_HITPOINTS,
        Category::ENEMY_AIRCRAFT,
    );
    attach_child(world, air, raider);

    let missile = spawn_projectile(
        world,
        ProjectileKind::Missile,
        Vector2 {
            x: fastrand::f32() * width,
            y: screen.h as f32 + 20.0,
        },
    );
    attach_child(world, air, missile);
}

/// Per-tick systems, in execution order.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            poll_music_messages,
            update_music_messages,
            destroy_outside_view_system,
            guide_missiles_system,
            dispatch_commands_system,
            scene_update_system,
            update_particles,
            remove_wrecks_system,
            spawn_raiders,
        )
            .chain(),
    );
    update
}
