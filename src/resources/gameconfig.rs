//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 640
//! height = 480
//! target_fps = 60
//! vsync = true
//!
//! [game]
//! ticks_per_second = 60
//! projectile_table = ./assets/data/projectiles.json
//!
//! [audio]
//! music_volume = 100
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 640;
const DEFAULT_WINDOW_HEIGHT: u32 = 480;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_TICKS_PER_SECOND: u32 = 60;
const DEFAULT_PROJECTILE_TABLE: &str = "./assets/data/projectiles.json";
const DEFAULT_MUSIC_VOLUME: f32 = 100.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Simulation ticks per second (fixed timestep).
    pub ticks_per_second: u32,
    /// JSON file holding the ballistic table.
    pub projectile_table: PathBuf,
    /// Music volume in `0..=100`.
    pub music_volume: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            projectile_table: PathBuf::from(DEFAULT_PROJECTILE_TABLE),
            music_volume: DEFAULT_MUSIC_VOLUME,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = get_u32(&config, "window", "width") {
            self.window_width = width;
        }
        if let Some(height) = get_u32(&config, "window", "height") {
            self.window_height = height;
        }
        if let Some(fps) = get_u32(&config, "window", "target_fps") {
            self.target_fps = fps;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [game] section
        if let Some(ticks) = get_u32(&config, "game", "ticks_per_second") {
            self.ticks_per_second = ticks.max(1);
        }
        if let Some(path) = config.get("game", "projectile_table") {
            self.projectile_table = PathBuf::from(path);
        }

        // [audio] section
        if let Some(volume) = config.getfloat("audio", "music_volume").ok().flatten() {
            self.music_volume = volume as f32;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, ticks={}, table={:?}, music_volume={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.ticks_per_second,
            self.projectile_table,
            self.music_volume
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        // [game] section
        config.set(
            "game",
            "ticks_per_second",
            Some(self.ticks_per_second.to_string()),
        );
        config.set(
            "game",
            "projectile_table",
            Some(self.projectile_table.display().to_string()),
        );

        // [audio] section
        config.set("audio", "music_volume", Some(self.music_volume.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Duration of one simulation tick in seconds.
    pub fn time_per_frame(&self) -> f32 {
        1.0 / self.ticks_per_second.max(1) as f32
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

/// Read an unsigned key that must fit in `u32`. Out-of-range values are
/// logged and ignored so the current value stays.
fn get_u32(config: &Ini, section: &str, key: &str) -> Option<u32> {
    let value = config.getuint(section, key).ok().flatten()?;
    match u32::try_from(value) {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("[{}] {} = {} is out of range; ignored", section, key, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("skyraid_{}_{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let c = GameConfig::new();
        assert_eq!(c.window_size(), (640, 480));
        assert_eq!(c.ticks_per_second, 60);
        assert!((c.time_per_frame() - 1.0 / 60.0).abs() < 1e-6);
        assert_eq!(c.music_volume, 100.0);
    }

    #[test]
    fn test_missing_file_is_an_error_and_keeps_defaults() {
        let mut c = GameConfig::with_path(temp_config("does_not_exist"));
        assert!(c.load_from_file().is_err());
        assert_eq!(c.window_width, 640);
    }

    #[test]
    fn test_load_overrides_present_keys_only() {
        let path = temp_config("partial");
        std::fs::write(
            &path,
            "[window]\nwidth = 800\n\n[game]\nticks_per_second = 30\n\n[audio]\nmusic_volume = 40\n",
        )
        .unwrap();
        let mut c = GameConfig::with_path(&path);
        c.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(c.window_width, 800);
        assert_eq!(c.window_height, 480);
        assert_eq!(c.ticks_per_second, 30);
        assert_eq!(c.music_volume, 40.0);
        assert_eq!(c.projectile_table, PathBuf::from(DEFAULT_PROJECTILE_TABLE));
    }

    #[test]
    fn test_out_of_range_values_keep_defaults() {
        let path = temp_config("overflow");
        std::fs::write(
            &path,
            "[window]\nheight = 4294967776\n\n[game]\nticks_per_second = 4294967296\n",
        )
        .unwrap();
        let mut c = GameConfig::with_path(&path);
        c.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(c.ticks_per_second, 60);
        assert_eq!(c.window_height, 480);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config("roundtrip");
        let mut saved = GameConfig::with_path(&path);
        saved.window_height = 720;
        saved.vsync = false;
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.window_height, 720);
        assert!(!loaded.vsync);
    }
}
