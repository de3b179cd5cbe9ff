use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

use crate::resources::texturestore::TextureId;

/// Sprite is identified by a texture id and the source rect selecting its frame
/// inside the texture.
/// The origin selects the pivot point (in pixels) relative to the rect's top-left
/// used for placement/rotation/scaling when rendering.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub texture: TextureId,
    pub source: Rectangle,
    pub origin: Vector2,
}

impl Sprite {
    pub fn new(texture: TextureId, source: Rectangle) -> Self {
        Self {
            texture,
            source,
            origin: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Sprite whose pivot sits at the center of its source rect, so rotation
    /// spins it in place.
    pub fn centered(texture: TextureId, source: Rectangle) -> Self {
        let mut sprite = Self::new(texture, source);
        sprite.center_origin();
        sprite
    }

    pub fn center_origin(&mut self) {
        self.origin = Vector2 {
            x: (self.source.width / 2.0).floor(),
            y: (self.source.height / 2.0).floor(),
        };
    }

    /// Bounds in the owning node's local space.
    pub fn local_bounds(&self) -> Rectangle {
        Rectangle {
            x: -self.origin.x,
            y: -self.origin.y,
            width: self.source.width,
            height: self.source.height,
        }
    }
}
