//! Static ballistic data for every [`ProjectileKind`].
//!
//! The table is built once during setup, either from a JSON file or from
//! [`ProjectileTable::builtin`], and inserted as a resource. Nothing writes to it
//! afterwards: projectile systems only take `Res<ProjectileTable>` / `&World`.
//!
//! # File format
//!
//! ```json
//! {
//!   "projectiles": [
//!     { "kind": "Missile", "texture": "Entities",
//!       "rect": { "x": 160, "y": 64, "width": 15, "height": 32 },
//!       "speed": 150.0, "damage": 200 }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::info;
use raylib::prelude::Rectangle;
use serde::Deserialize;

use crate::components::projectile::ProjectileKind;
use crate::resources::texturestore::TextureId;

/// Source rect inside a texture, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct TextureRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl TextureRect {
    pub fn to_rectangle(self) -> Rectangle {
        Rectangle {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct ProjectileData {
    pub kind: ProjectileKind,
    pub texture: TextureId,
    pub rect: TextureRect,
    /// Movement speed in world units per second.
    pub speed: f32,
    pub damage: u32,
}

#[derive(Deserialize)]
struct ProjectileTableFile {
    projectiles: Vec<ProjectileData>,
}

#[derive(Resource, Clone, Debug)]
pub struct ProjectileTable {
    rows: BTreeMap<ProjectileKind, ProjectileData>,
}

impl Default for ProjectileTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProjectileTable {
    /// Table shipped with the game, used when no data file is available.
    pub fn builtin() -> Self {
        let bullet = |kind, x| ProjectileData {
            kind,
            texture: TextureId::Entities,
            rect: TextureRect {
                x,
                y: 64.0,
                width: 3.0,
                height: 14.0,
            },
            speed: 300.0,
            damage: 10,
        };
        let rows = [
            bullet(ProjectileKind::AlliedBullet, 175.0),
            bullet(ProjectileKind::EnemyBullet, 178.0),
            ProjectileData {
                kind: ProjectileKind::Missile,
                texture: TextureId::Entities,
                rect: TextureRect {
                    x: 160.0,
                    y: 64.0,
                    width: 15.0,
                    height: 32.0,
                },
                speed: 150.0,
                damage: 200,
            },
        ];
        Self {
            rows: rows.into_iter().map(|row| (row.kind, row)).collect(),
        }
    }

    /// Parse a table from JSON. Every kind must appear exactly once.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let file: ProjectileTableFile =
            serde_json::from_str(json).map_err(|e| format!("Invalid projectile table: {}", e))?;

        let mut rows = BTreeMap::new();
        for row in file.projectiles {
            if !is_valid_speed(row.speed) {
                return Err(format!(
                    "Projectile {:?} has invalid speed {}",
                    row.kind, row.speed
                ));
            }
            if rows.insert(row.kind, row).is_some() {
                return Err(format!("Projectile {:?} listed twice", row.kind));
            }
        }
        if let Some(missing) = ProjectileKind::ALL.iter().find(|k| !rows.contains_key(*k)) {
            return Err(format!("Projectile {:?} missing from table", missing));
        }
        Ok(Self { rows })
    }

    /// Load and parse the table from `path`.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read projectile table {:?}: {}", path, e))?;
        let table = Self::from_json(&json)?;
        info!("Loaded projectile table from {:?} ({} rows)", path, table.rows.len());
        Ok(table)
    }

    /// Row for `kind`. Every kind is present by construction.
    pub fn get(&self, kind: ProjectileKind) -> &ProjectileData {
        &self.rows[&kind]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectileData> {
        self.rows.values()
    }
}

/// Speeds must be finite and strictly positive. NaN fails the comparison.
fn is_valid_speed(speed: f32) -> bool {
    speed > 0.0 && speed.is_finite()
}
