//! ECS components for scene nodes.
//!
//! Submodules overview:
//! - [`category`] – bit-mask tags used by command dispatch, targeting and culling
//! - [`globaltransform2d`] – composed world-space transform value
//! - [`hitpoints`] – hit points and the `Destroyed` removal marker
//! - [`mapposition`] – local position of a node relative to its parent
//! - [`nodekind`] – node variant tag, scene root marker and layers
//! - [`particleemitter`] – emitter node state (particle kind, time accumulator)
//! - [`projectile`] – projectile kind, target direction and homing math
//! - [`rigidbody`] – kinematic body storing velocity
//! - [`rotation`] – local rotation angle in degrees
//! - [`scale`] – local 2D scale factor
//! - [`sprite`] – texture id, source rect and pivot
//! - [`tint`] – color modulation for sprites

pub mod category;
pub mod globaltransform2d;
pub mod hitpoints;
pub mod mapposition;
pub mod nodekind;
pub mod particleemitter;
pub mod projectile;
pub mod rigidbody;
pub mod rotation;
pub mod scale;
pub mod sprite;
pub mod tint;
