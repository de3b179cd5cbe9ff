//! Systems and scene traversals.
//!
//! - [`scenegraph`] – attach/detach, world transforms, update/draw traversals, wreck removal
//! - [`movement`] – velocity integration for entities
//! - [`projectile`] – projectile spawning, guidance and ballistic lookups
//! - [`particleemitter`] – emission step of emitter nodes
//! - [`particles`] – particle aging
//! - [`commands`] – category-targeted command dispatch
//! - [`guidance`] – missile targeting
//! - [`bounds`] – out-of-view culling
//! - [`render`] – draw pass and raylib renderer
//! - [`music`] – music thread and message bridge
//! - [`time`] – world time update

pub mod bounds;
pub mod commands;
pub mod guidance;
pub mod movement;
pub mod music;
pub mod particleemitter;
pub mod particles;
pub mod projectile;
pub mod render;
pub mod scenegraph;
pub mod time;
