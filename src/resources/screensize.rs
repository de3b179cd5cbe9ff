//! Screen size resource.
//!
//! Stores the dimensions of the visible play area in pixels. Culling and
//! spawning read this to place things relative to the view.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
