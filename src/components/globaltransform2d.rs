//! World-space transform of a scene node.
//!
//! A node's [`MapPosition`](super::mapposition::MapPosition),
//! [`Rotation`](super::rotation::Rotation) and [`Scale`](super::scale::Scale) are
//! local to its parent. Composing the local transforms of every ancestor, root
//! first, yields the [`GlobalTransform2D`] used for drawing, emission and
//! bounding boxes. See [`crate::systems::scenegraph::world_transform`].
//!
//! The transform is a 2x3 affine matrix, so a non-uniform parent scale over a
//! rotated child composes exactly (the result may be skewed). Position,
//! rotation and scale are derived from the matrix only where raylib needs them,
//! at draw time.

use raylib::prelude::{Rectangle, Vector2};

/// Rotate a 2D vector by `angle_degrees` (clockwise on screen, Y+ down).
pub fn rotate(v: Vector2, angle_degrees: f32) -> Vector2 {
    let rad = angle_degrees.to_radians();
    let (sin, cos) = rad.sin_cos();
    Vector2 {
        x: v.x * cos - v.y * sin,
        y: v.x * sin + v.y * cos,
    }
}

/// Affine transform `p' = [a c; b d] * p + (tx, ty)`.
///
/// `(a, b)` is the image of the local X axis, `(c, d)` that of the local Y axis.
#[derive(Clone, Copy, Debug)]
pub struct GlobalTransform2D {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for GlobalTransform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl GlobalTransform2D {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Local transform: scale, then rotate, then translate.
    pub fn new(position: Vector2, rotation_degrees: f32, scale: Vector2) -> Self {
        let (sin, cos) = rotation_degrees.to_radians().sin_cos();
        Self {
            a: scale.x * cos,
            b: scale.x * sin,
            c: -scale.y * sin,
            d: scale.y * cos,
            tx: position.x,
            ty: position.y,
        }
    }

    /// Map a point from this transform's local space into its parent space.
    pub fn transform_point(&self, point: Vector2) -> Vector2 {
        Vector2 {
            x: self.a * point.x + self.c * point.y + self.tx,
            y: self.b * point.x + self.d * point.y + self.ty,
        }
    }

    /// `self * local`: place `local` inside the space described by `self`.
    pub fn compose(&self, local: &GlobalTransform2D) -> GlobalTransform2D {
        let t = self.transform_point(Vector2 {
            x: local.tx,
            y: local.ty,
        });
        GlobalTransform2D {
            a: self.a * local.a + self.c * local.b,
            b: self.b * local.a + self.d * local.b,
            c: self.a * local.c + self.c * local.d,
            d: self.b * local.c + self.d * local.d,
            tx: t.x,
            ty: t.y,
        }
    }

    /// Translation part.
    pub fn position(&self) -> Vector2 {
        Vector2 {
            x: self.tx,
            y: self.ty,
        }
    }

    /// Rotation of the local X axis, in degrees.
    pub fn rotation_degrees(&self) -> f32 {
        self.b.atan2(self.a).to_degrees()
    }

    /// Scale along the rotated axes. Y is signed so a mirrored transform keeps
    /// its flip; any skew is dropped.
    pub fn scale(&self) -> Vector2 {
        let sx = self.a.hypot(self.b);
        let det = self.a * self.d - self.b * self.c;
        Vector2 {
            x: sx,
            y: if sx > 0.0 { det / sx } else { self.c.hypot(self.d) },
        }
    }

    /// Axis-aligned bounding box of `rect` after transformation.
    pub fn transform_rect(&self, rect: Rectangle) -> Rectangle {
        let corners = [
            Vector2 {
                x: rect.x,
                y: rect.y,
            },
            Vector2 {
                x: rect.x + rect.width,
                y: rect.y,
            },
            Vector2 {
                x: rect.x,
                y: rect.y + rect.height,
            },
            Vector2 {
                x: rect.x + rect.width,
                y: rect.y + rect.height,
            },
        ]
        .map(|c| self.transform_point(c));

        let (mut min_x, mut min_y) = (corners[0].x, corners[0].y);
        let (mut max_x, mut max_y) = (min_x, min_y);
        for c in &corners[1..] {
            min_x = min_x.min(c.x);
            min_y = min_y.min(c.y);
            max_x = max_x.max(c.x);
            max_y = max_y.max(c.y);
        }
        Rectangle {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn v(x: f32, y: f32) -> Vector2 {
        Vector2 { x, y }
    }

    #[test]
    fn identity_leaves_points_untouched() {
        let p = GlobalTransform2D::IDENTITY.transform_point(v(3.0, -7.0));
        assert!(approx_eq(p.x, 3.0));
        assert!(approx_eq(p.y, -7.0));
    }

    #[test]
    fn local_transform_matches_rotate_helper() {
        let t = GlobalTransform2D::new(v(5.0, 5.0), 30.0, v(1.0, 1.0));
        let expected = rotate(v(4.0, 2.0), 30.0);
        let p = t.transform_point(v(4.0, 2.0));
        assert!(approx_eq(p.x, expected.x + 5.0));
        assert!(approx_eq(p.y, expected.y + 5.0));
    }

    #[test]
    fn compose_rotates_and_scales_child_offset() {
        let parent = GlobalTransform2D::new(v(100.0, 100.0), 90.0, v(2.0, 2.0));
        let local = GlobalTransform2D::new(v(10.0, 0.0), 15.0, v(0.5, 0.5));
        let world = parent.compose(&local);
        // (10, 0) * 2 => (20, 0), rotated 90deg => (0, 20)
        assert!(approx_eq(world.position().x, 100.0));
        assert!(approx_eq(world.position().y, 120.0));
        assert!(approx_eq(world.rotation_degrees(), 105.0));
        assert!(approx_eq(world.scale().x, 1.0));
        assert!(approx_eq(world.scale().y, 1.0));
    }

    #[test]
    fn non_uniform_scale_over_rotated_child_composes_exactly() {
        let parent = GlobalTransform2D::new(v(0.0, 0.0), 0.0, v(2.0, 1.0));
        let child = GlobalTransform2D::new(v(0.0, 0.0), 90.0, v(1.0, 1.0));
        let grandchild = GlobalTransform2D::new(v(1.0, 0.0), 0.0, v(1.0, 1.0));
        let world = parent.compose(&child).compose(&grandchild);
        assert!(approx_eq(world.position().x, 0.0));
        assert!(approx_eq(world.position().y, 1.0));
    }

    #[test]
    fn mirrored_scale_survives_decomposition() {
        let t = GlobalTransform2D::new(v(0.0, 0.0), 0.0, v(1.0, -3.0));
        assert!(approx_eq(t.scale().x, 1.0));
        assert!(approx_eq(t.scale().y, -3.0));
        assert!(approx_eq(t.rotation_degrees(), 0.0));
    }

    #[test]
    fn transform_rect_returns_axis_aligned_bounds() {
        let t = GlobalTransform2D::new(v(50.0, 50.0), 90.0, v(1.0, 1.0));
        let r = t.transform_rect(Rectangle {
            x: -2.0,
            y: -8.0,
            width: 4.0,
            height: 16.0,
        });
        assert!(approx_eq(r.x, 42.0));
        assert!(approx_eq(r.y, 48.0));
        assert!(approx_eq(r.width, 16.0));
        assert!(approx_eq(r.height, 4.0));
    }
}
