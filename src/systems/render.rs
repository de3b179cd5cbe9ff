//! Draw pass.
//!
//! Drawing never mutates the world: [`render_frame`] only needs `&mut World`
//! to look up the scene roots, then hands `&World` to
//! [`draw_node`](crate::systems::scenegraph::draw_node). The actual raylib calls
//! sit behind [`SceneRenderer`], so traversal order can be checked without a
//! window.
//!
//! Per frame: background layer, particles, the remaining layers, then the
//! statistics overlay.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::globaltransform2d::GlobalTransform2D;
use crate::components::nodekind::Layer;
use crate::components::sprite::Sprite;
use crate::resources::framestep::FrameStats;
use crate::resources::particles::{Particle, ParticleKind, ParticleSystem, particle_alpha};
use crate::resources::texturestore::{TextureId, TextureStore};
use crate::systems::scenegraph::{children_of, draw_current, draw_node, local_transform, scene_roots};

/// Backend the draw traversal renders into.
pub trait SceneRenderer {
    fn draw_sprite(&mut self, sprite: &Sprite, transform: &GlobalTransform2D, tint: Color);
    fn draw_particle(&mut self, kind: ParticleKind, particle: &Particle, alpha: u8);
}

/// Draw every live particle, kind by kind.
pub fn draw_particles(particles: &ParticleSystem, renderer: &mut dyn SceneRenderer) {
    for kind in ParticleKind::ALL {
        for particle in particles.particles(kind) {
            renderer.draw_particle(kind, particle, particle_alpha(kind, particle));
        }
    }
}

/// Draw the scene under `root`, slotting the particles in right after the
/// background layer so trails render below aircraft and projectiles.
pub fn draw_scene(world: &World, root: Entity, renderer: &mut dyn SceneRenderer) {
    let root_transform = GlobalTransform2D::IDENTITY.compose(&local_transform(world, root));
    draw_current(world, root, &root_transform, renderer);

    let particles = world.get_resource::<ParticleSystem>();
    let mut particles_drawn = false;
    for child in children_of(world, root) {
        if !particles_drawn && world.get::<Layer>(child).is_some_and(|l| *l != Layer::Background) {
            if let Some(particles) = particles {
                draw_particles(particles, renderer);
            }
            particles_drawn = true;
        }
        draw_node(world, child, &root_transform, renderer);
    }
    if !particles_drawn {
        if let Some(particles) = particles {
            draw_particles(particles, renderer);
        }
    }
}

/// [`SceneRenderer`] over any raylib draw handle.
pub struct RaylibRenderer<'a, D: RaylibDraw> {
    pub d: &'a mut D,
    pub textures: &'a TextureStore,
}

impl<D: RaylibDraw> SceneRenderer for RaylibRenderer<'_, D> {
    fn draw_sprite(&mut self, sprite: &Sprite, transform: &GlobalTransform2D, tint: Color) {
        let Some(tex) = self.textures.get(sprite.texture) else {
            return;
        };
        let position = transform.position();
        let scale = transform.scale();
        let dest = Rectangle {
            x: position.x,
            y: position.y,
            width: sprite.source.width * scale.x,
            height: sprite.source.height * scale.y,
        };
        let origin = Vector2 {
            x: sprite.origin.x * scale.x,
            y: sprite.origin.y * scale.y,
        };
        self.d.draw_texture_pro(
            tex,
            sprite.source,
            dest,
            origin,
            transform.rotation_degrees(),
            tint,
        );
    }

    fn draw_particle(&mut self, _kind: ParticleKind, particle: &Particle, alpha: u8) {
        let color = Color::new(particle.color.r, particle.color.g, particle.color.b, alpha);
        match self.textures.get(TextureId::Particle) {
            Some(tex) => {
                let (w, h) = (tex.width as f32, tex.height as f32);
                let src = Rectangle {
                    x: 0.0,
                    y: 0.0,
                    width: w,
                    height: h,
                };
                let dest = Rectangle {
                    x: particle.position.x,
                    y: particle.position.y,
                    width: w,
                    height: h,
                };
                let origin = Vector2 {
                    x: w / 2.0,
                    y: h / 2.0,
                };
                self.d.draw_texture_pro(tex, src, dest, origin, 0.0, color);
            }
            None => self.d.draw_circle_v(particle.position, 2.0, color),
        }
    }
}

/// Draw one frame of every scene plus the statistics overlay.
pub fn render_frame(world: &mut World, d: &mut RaylibDrawHandle) {
    let roots = scene_roots(world);
    let world: &World = world;

    d.clear_background(Color::BLACK);
    if let Some(textures) = world.get_resource::<TextureStore>() {
        let mut renderer = RaylibRenderer { d: &mut *d, textures };
        for root in roots {
            draw_scene(world, root, &mut renderer);
        }
    }

    if let Some(stats) = world.get_resource::<FrameStats>() {
        d.draw_text(&stats.text(), 5, 5, 10, Color::WHITE);
    }
}
