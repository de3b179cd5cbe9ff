//! ECS resources shared across systems.
//!
//! - [`commandqueue`] – pending category-targeted scene commands
//! - [`framestep`] – fixed timestep accumulator and frame statistics
//! - [`gameconfig`] – INI-backed configuration
//! - [`music`] – background music player handle
//! - [`particles`] – particle values and the particle system
//! - [`projectiletable`] – static ballistic data
//! - [`screensize`] – visible area in pixels
//! - [`targets`] – enemies available for missile targeting
//! - [`texturestore`] – textures keyed by id
//! - [`worldtime`] – simulation clock

pub mod commandqueue;
pub mod framestep;
pub mod gameconfig;
pub mod music;
pub mod particles;
pub mod projectiletable;
pub mod screensize;
pub mod targets;
pub mod texturestore;
pub mod worldtime;
