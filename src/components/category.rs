//! Category tags used by command dispatch, targeting and culling.
//!
//! Categories are bit flags so a command can target several classes at once
//! (`Category::PROJECTILE` covers allied and enemy projectiles).

use bevy_ecs::prelude::Component;
use bitflags::bitflags;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Category(u32);

bitflags! {
    impl Category: u32 {
        const SCENE_AIR_LAYER = 1 << 0;
        const PLAYER_AIRCRAFT = 1 << 1;
        const ALLIED_AIRCRAFT = 1 << 2;
        const ENEMY_AIRCRAFT = 1 << 3;
        const ALLIED_PROJECTILE = 1 << 4;
        const ENEMY_PROJECTILE = 1 << 5;

        const AIRCRAFT = Self::PLAYER_AIRCRAFT.bits()
            | Self::ALLIED_AIRCRAFT.bits()
            | Self::ENEMY_AIRCRAFT.bits();
        const PROJECTILE = Self::ALLIED_PROJECTILE.bits() | Self::ENEMY_PROJECTILE.bits();
    }
}

impl Category {
    /// Nodes without a class; no command targets them.
    pub const NONE: Category = Category::empty();
}
