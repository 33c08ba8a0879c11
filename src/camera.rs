//! The 3D camera used for models embedded in the 2D layout, and the screen to world projection
//! that places them.

use macroquad::math::{Mat4, Vec3};

use crate::math::{BoundingBox, Vector2};

/// Near clip plane of the placement projection.
const NEAR_PLANE: f32 = 0.01;
/// Far clip plane of the orthographic placement projection.
const ORTHOGRAPHIC_FAR_PLANE: f32 = 1000.0;

/// Viewport size the 3D placement was tuned against.
const REFERENCE_WIDTH: f32 = 1024.0;
const REFERENCE_HEIGHT: f32 = 768.0;
const MAX_DISPLAY_SCALE: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    #[default]
    Perspective,
    Orthographic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees for [`Projection::Perspective`], the height of the view
    /// volume for [`Projection::Orthographic`].
    pub fovy: f32,
    pub projection: Projection,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: 45.0,
            projection: Projection::Perspective,
        }
    }
}

impl Camera {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Projection covering `aspect` with the far plane at `far`.
    ///
    /// The orthographic volume keeps its own fixed far plane.
    pub fn projection_matrix(&self, aspect: f32, far: f32) -> Mat4 {
        match self.projection {
            Projection::Perspective => {
                Mat4::perspective_rh_gl(self.fovy.to_radians(), aspect, NEAR_PLANE, far)
            }
            Projection::Orthographic => {
                let top = self.fovy / 2.0;
                let right = top * aspect;
                Mat4::orthographic_rh_gl(
                    -right,
                    right,
                    -top,
                    top,
                    NEAR_PLANE,
                    ORTHOGRAPHIC_FAR_PLANE,
                )
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// The far end of the ray.
    pub position: Vec3,
    /// Unit vector from the near plane towards `position`.
    pub direction: Vec3,
}

/// Casts a ray through the screen point `position` of a `screen_width` x `screen_height` viewport.
///
/// The ray starts on the far plane, `z_distance` units in front of the camera, which is where
/// models drawn at a layout position end up.
pub fn screen_to_world_ray(
    position: Vector2,
    camera: &Camera,
    screen_width: i32,
    screen_height: i32,
    z_distance: f32,
) -> Ray {
    let width = screen_width as f32;
    let height = screen_height as f32;

    // Normalized device coordinates, y up.
    let x = (2.0 * position.x) / width - 1.0;
    let y = 1.0 - (2.0 * position.y) / height;

    let view = camera.view_matrix();
    let projection = camera.projection_matrix(width / height, z_distance);
    let unproject = (projection * view).inverse();

    let near = unproject.project_point3(Vec3::new(x, y, -1.0));
    let far = unproject.project_point3(Vec3::new(x, y, 1.0));

    Ray {
        position: far,
        direction: (far - near).normalize_or_zero(),
    }
}

/// Extra scale applied to models so they keep their size relative to the layout on viewports
/// other than 1024x768.
///
/// Shrinks on viewports shorter than 768, grows on ones wider than 1024, and never exceeds 1.5.
pub fn display_scale(viewport: &BoundingBox) -> f32 {
    let shrink = (viewport.height / REFERENCE_HEIGHT).min(1.0);
    let grow = (viewport.width / REFERENCE_WIDTH).max(1.0);
    (shrink * grow).min(MAX_DISPLAY_SCALE)
}
