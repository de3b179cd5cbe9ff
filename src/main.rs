//! Skyraid entry point.
//!
//! A vertical 2D shooter core written in Rust using:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for the scene graph and the per-tick schedule
//!
//! # Main Loop
//!
//! 1. Load `config.ini` and the ballistic table, open the window
//! 2. Load textures, build the ECS world and the scene
//! 3. Start the mission theme on the music thread
//! 4. Every frame:
//!    - convert real elapsed time into fixed ticks and run the update schedule
//!      once per tick
//!    - draw the scene graph, particles and the statistics overlay
//! 5. Shut the music thread down on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use clap::Parser;
use log::{error, info, warn};

use skyraid::game;
use skyraid::resources::framestep::FrameStats;
use skyraid::resources::gameconfig::GameConfig;
use skyraid::resources::music::{MIN_VOLUME, MusicPlayer, MusicTheme};
use skyraid::resources::projectiletable::ProjectileTable;
use skyraid::systems::render::render_frame;
use skyraid::systems::time::run_fixed_ticks;

/// Skyraid 2D shooter
#[derive(Parser)]
#[command(version, about = "Vertical 2D arcade shooter core")]
struct Cli {
    /// INI file with window, game and audio settings.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Start with the music volume at zero.
    #[arg(long)]
    mute: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using default settings", e);
    }
    if cli.mute {
        config.music_volume = MIN_VOLUME;
    }

    let table = match ProjectileTable::load_from_file(&config.projectile_table) {
        Ok(table) => table,
        Err(e) => {
            warn!("{}; using built-in ballistic table", e);
            ProjectileTable::builtin()
        }
    };

    // --------------- Raylib window & assets ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .title("Skyraid");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    let textures = game::load_textures(&mut rl, &thread);

    // --------------- Music ---------------
    let mut music = MusicPlayer::spawn();
    music.set_volume(config.music_volume);
    music.set_loop(true);
    music.play(MusicTheme::MissionTheme);

    // --------------- ECS world + scene ---------------
    let mut world = game::init_world(&config, table, music);
    world.insert_resource(textures);
    let scene = game::spawn_scene(&mut world);
    info!("Mission started with player {:?}", scene.player);

    let mut update = game::build_update_schedule();
    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        return;
    }

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        let frame_time = rl.get_frame_time();

        run_fixed_ticks(&mut world, &mut update, frame_time);

        {
            let mut d = rl.begin_drawing(&thread);
            render_frame(&mut world, &mut d);
        }
        world.resource_mut::<FrameStats>().record(frame_time);
    }

    if let Some(mut music) = world.remove_resource::<MusicPlayer>() {
        music.shutdown();
    }
    info!("Bye");
}
