//! Texture lookup keyed by [`TextureId`].
//!
//! Textures are loaded once during setup (see [`crate::game::load_textures`]) and
//! read by the renderer. Scene components only store the id.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureId {
    Entities,
    Jungle,
    Particle,
}

#[derive(Resource, Default)]
pub struct TextureStore {
    pub map: FxHashMap<TextureId, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path` and store it under `id`, replacing any previous texture.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        id: TextureId,
        path: &str,
    ) -> Result<(), String> {
        let texture = rl
            .load_texture(thread, path)
            .map_err(|e| format!("Failed to load texture {:?} from '{}': {}", id, path, e))?;
        self.map.insert(id, texture);
        Ok(())
    }

    pub fn get(&self, id: TextureId) -> Option<&Texture2D> {
        self.map.get(&id)
    }
}
