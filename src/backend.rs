//! Drawing primitives the [`Renderer`](crate::renderer::Renderer) needs from a rasterizer.
//!
//! Coordinates are screen pixels with y pointing down. Angles are degrees, measured clockwise
//! from the positive x axis, so 90 points down.

use std::ffi::CStr;

use macroquad::math::{Mat4, Vec3};

use crate::camera::Camera;
use crate::color::Color;
use crate::math::{BoundingBox, ClipRect, Vector2};

/// A partial annulus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub center: Vector2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub segments: u8,
}

pub trait Backend {
    type Texture;
    type Model;
    /// Whatever the backend draws text with. Metrics live in the
    /// [`FontTable`](crate::text::FontTable).
    type Font;

    fn draw_rectangle(&mut self, bounds: BoundingBox, color: Color);

    /// `roundness` is the corner radius relative to half the shorter side, in `0.0..=1.0`.
    fn draw_rectangle_rounded(
        &mut self,
        bounds: BoundingBox,
        roundness: f32,
        segments: u8,
        color: Color,
    );

    fn draw_ring(&mut self, ring: Ring, color: Color);

    fn texture_width(&self, texture: &Self::Texture) -> f32;

    fn draw_texture(
        &mut self,
        texture: &Self::Texture,
        position: Vector2,
        rotation: f32,
        scale: f32,
        tint: Color,
    );

    /// Draws `text` with its top-left corner at `position`.
    fn draw_text(
        &mut self,
        font: &Self::Font,
        text: &CStr,
        position: Vector2,
        font_size: f32,
        spacing: f32,
        color: Color,
    );

    /// Restricts drawing to `clip`, or lifts the restriction.
    fn scissor(&mut self, clip: Option<ClipRect>);

    fn begin_mode_3d(&mut self, camera: &Camera);

    fn draw_model(
        &mut self,
        model: &Self::Model,
        position: Vec3,
        rotation: Mat4,
        scale: f32,
        tint: Color,
    );

    fn end_mode_3d(&mut self);

    /// Called once after the last command of a frame.
    fn end_frame(&mut self) {}
}
