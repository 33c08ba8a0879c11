//! Walks a frame's render commands and turns each one into backend draw calls.

use macroquad::logging::{error, info, warn};

use crate::arena::Arena;
use crate::backend::{Backend, Ring};
use crate::camera::{display_scale, screen_to_world_ray, Camera};
use crate::color::Color;
use crate::math::{BoundingBox, ClipRect, Vector2};
use crate::render_commands::{
    Border, CustomElement, Image, Model3D, Rectangle, RenderCommand, RenderCommandConfig, Text,
};
use crate::text::FontTable;

/// Segments per corner of a filled rounded rectangle.
pub const ROUNDED_RECTANGLE_SEGMENTS: u8 = 8;
/// Segments per rounded border corner.
pub const BORDER_CORNER_SEGMENTS: u8 = 10;

/// Distance in front of the camera at which layout-embedded models are placed.
const MODEL_DISTANCE: f32 = 140.0;
/// Models sit this many pixels below the center of their element.
const MODEL_VERTICAL_OFFSET: f32 = 20.0;

const DEFAULT_TEXT_SCRATCH_CAPACITY: usize = 1024;

/// Interprets render commands against a [`Backend`].
///
/// ```ignore
/// let mut renderer = Renderer::new(MacroquadBackend::new());
/// loop {
///     let commands = engine.end_layout();
///     renderer.paint(&commands, &fonts);
///     next_frame().await;
/// }
/// ```
pub struct Renderer<B: Backend> {
    backend: B,
    /// Camera for 3D models embedded in the layout.
    pub camera: Camera,
    clip_stack: Vec<ClipRect>,
    text_scratch: Arena,
}

impl<B: Backend> Renderer<B> {
    pub fn new(backend: B) -> Self {
        Self::with_text_capacity(backend, DEFAULT_TEXT_SCRATCH_CAPACITY)
    }

    /// `capacity` is the initial size of the buffer text is copied into before drawing. It
    /// grows on demand.
    pub fn with_text_capacity(backend: B, capacity: usize) -> Self {
        Self {
            backend,
            camera: Camera::default(),
            clip_stack: Vec::new(),
            text_scratch: Arena::new(capacity),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Number of scissor regions currently open.
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Draws one frame.
    ///
    /// The first command's bounding box is taken as the viewport, which is what the layout
    /// engine emits for the root element.
    ///
    /// # Panics
    /// On a [`RenderCommandConfig::None`] command. It means the layout engine and this crate
    /// disagree on the command set.
    pub fn paint(
        &mut self,
        commands: &[RenderCommand<'_, B::Texture, B::Model>],
        fonts: &FontTable<B::Font>,
    ) {
        let viewport = commands
            .first()
            .map(|command| command.bounding_box)
            .unwrap_or_default();

        for command in commands {
            let bb = command.bounding_box;
            match &command.config {
                RenderCommandConfig::Text(text) => self.draw_text(&bb, text, fonts),
                RenderCommandConfig::Image(image) => self.draw_image(&bb, image),
                RenderCommandConfig::ScissorStart => self.push_clip(&bb),
                RenderCommandConfig::ScissorEnd => self.pop_clip(),
                RenderCommandConfig::Rectangle(rectangle) => self.draw_rectangle(&bb, rectangle),
                RenderCommandConfig::Border(border) => self.draw_border(&bb, border),
                RenderCommandConfig::Custom(custom) => match custom.data {
                    Some(CustomElement::Model3D(model)) => self.draw_model(&bb, model, &viewport),
                    None => {}
                },
                RenderCommandConfig::None => {
                    error!(
                        "Unhandled render command {} of kind `{}` at {:?}",
                        command.id,
                        command.kind(),
                        bb
                    );
                    panic!("Unhandled render command {}", command.id);
                }
            }
        }

        if !self.clip_stack.is_empty() {
            warn!(
                "{} scissor region(s) were still open at the end of the frame",
                self.clip_stack.len()
            );
            self.clip_stack.clear();
            self.backend.scissor(None);
        }

        self.backend.end_frame();
    }

    fn draw_text(&mut self, bb: &BoundingBox, text: &Text<'_>, fonts: &FontTable<B::Font>) {
        let needed = text.text.len() + 1;
        if !self.text_scratch.fits(needed) {
            let capacity = needed
                .next_power_of_two()
                .max(self.text_scratch.capacity() * 2);
            info!(
                "Growing text scratch buffer from {} to {} bytes",
                self.text_scratch.capacity(),
                capacity
            );
            std::mem::replace(&mut self.text_scratch, Arena::new(capacity)).release();
        }

        let font = &fonts.get(text.font_id).face;
        let cstr = self.text_scratch.alloc_cstr(text.text);
        self.backend.draw_text(
            font,
            cstr,
            Vector2::new(bb.x, bb.y),
            text.font_size as f32,
            text.letter_spacing as f32,
            text.color,
        );
        self.text_scratch.reset();
    }

    fn draw_image(&mut self, bb: &BoundingBox, image: &Image<'_, B::Texture>) {
        let texture_width = self.backend.texture_width(image.data);
        if texture_width <= 0.0 {
            warn!("Skipping image with a texture width of {}", texture_width);
            return;
        }

        let tint = if image.background_color.is_none() {
            Color::WHITE
        } else {
            image.background_color
        };
        self.backend.draw_texture(
            image.data,
            Vector2::new(bb.x, bb.y),
            0.0,
            bb.width / texture_width,
            tint,
        );
    }

    fn push_clip(&mut self, bb: &BoundingBox) {
        let clip = ClipRect::from_bounding_box(bb);
        let clip = match self.clip_stack.last() {
            Some(parent) => parent.intersect(&clip),
            None => clip,
        };
        self.clip_stack.push(clip);
        self.backend.scissor(Some(clip));
    }

    fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_none() {
            warn!("Scissor end without a matching scissor start");
        }
        self.backend.scissor(self.clip_stack.last().copied());
    }

    // Only the top left radius is looked at: the fill is drawn with one uniform radius.
    fn draw_rectangle(&mut self, bb: &BoundingBox, rectangle: &Rectangle) {
        let radius = rectangle.corner_radii.top_left;
        if radius > 0.0 && bb.min_side() > 0.0 {
            let roundness = (radius * 2.0) / bb.min_side();
            self.backend.draw_rectangle_rounded(
                *bb,
                roundness,
                ROUNDED_RECTANGLE_SEGMENTS,
                rectangle.color,
            );
        } else {
            self.backend.draw_rectangle(*bb, rectangle.color);
        }
    }

    fn draw_border(&mut self, bb: &BoundingBox, border: &Border) {
        let cr = &border.corner_radii;
        let width = &border.width;
        let color = border.color;

        // Edges, snapped to whole pixels. Widths are truncated, positions rounded.
        if width.left > 0.0 {
            self.backend.draw_rectangle(
                BoundingBox::new(
                    bb.x.round(),
                    (bb.y + cr.top_left).round(),
                    width.left.trunc(),
                    (bb.height - cr.top_left - cr.bottom_left).round(),
                ),
                color,
            );
        }
        if width.right > 0.0 {
            self.backend.draw_rectangle(
                BoundingBox::new(
                    (bb.x + bb.width - width.right).round(),
                    (bb.y + cr.top_right).round(),
                    width.right.trunc(),
                    (bb.height - cr.top_right - cr.bottom_right).round(),
                ),
                color,
            );
        }
        if width.top > 0.0 {
            self.backend.draw_rectangle(
                BoundingBox::new(
                    (bb.x + cr.top_left).round(),
                    bb.y.round(),
                    (bb.width - cr.top_left - cr.top_right).round(),
                    width.top.trunc(),
                ),
                color,
            );
        }
        if width.bottom > 0.0 {
            self.backend.draw_rectangle(
                BoundingBox::new(
                    (bb.x + cr.bottom_left).round(),
                    (bb.y + bb.height - width.bottom).round(),
                    (bb.width - cr.bottom_left - cr.bottom_right).round(),
                    width.bottom.trunc(),
                ),
                color,
            );
        }

        // Corners. Ring thickness follows the horizontal edge the corner joins.
        let corners = [
            (cr.top_left, bb.x + cr.top_left, bb.y + cr.top_left, width.top, 180.0),
            (
                cr.top_right,
                bb.x + bb.width - cr.top_right,
                bb.y + cr.top_right,
                width.top,
                270.0,
            ),
            (
                cr.bottom_left,
                bb.x + cr.bottom_left,
                bb.y + bb.height - cr.bottom_left,
                width.bottom,
                90.0,
            ),
            (
                cr.bottom_right,
                bb.x + bb.width - cr.bottom_right,
                bb.y + bb.height - cr.bottom_right,
                width.bottom,
                0.0,
            ),
        ];
        for (radius, x, y, edge_width, start_angle) in corners {
            if radius <= 0.0 {
                continue;
            }
            self.backend.draw_ring(
                Ring {
                    center: Vector2::new(x.round(), y.round()),
                    inner_radius: (radius - edge_width).round().max(0.0),
                    outer_radius: radius,
                    start_angle,
                    end_angle: start_angle + 90.0,
                    segments: BORDER_CORNER_SEGMENTS,
                },
                color,
            );
        }
    }

    fn draw_model(
        &mut self,
        bb: &BoundingBox,
        model: &Model3D<'_, B::Model>,
        viewport: &BoundingBox,
    ) {
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            warn!("Skipping 3D model: the viewport {:?} is empty", viewport);
            return;
        }

        let center = bb.center();
        let ray = screen_to_world_ray(
            Vector2::new(center.x, center.y + MODEL_VERTICAL_OFFSET),
            &self.camera,
            viewport.width.round() as i32,
            viewport.height.round() as i32,
            MODEL_DISTANCE,
        );

        self.backend.begin_mode_3d(&self.camera);
        self.backend.draw_model(
            model.model,
            ray.position + model.position,
            model.rotation,
            model.scale * display_scale(viewport),
            Color::WHITE,
        );
        self.backend.end_mode_3d();
    }
}
