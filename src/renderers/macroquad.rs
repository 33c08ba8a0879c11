use std::ffi::CStr;

use macroquad::prelude::*;
use rustc_hash::FxHashMap;

use crate::backend::{Backend, Ring};
use crate::context::{Context, FrameInput};
use crate::engine::LayoutEngine;
use crate::math::{BoundingBox, ClipRect, Dimensions};
use crate::options::RenderOptions;
use crate::renderer::Renderer;
use crate::text::{FontMetrics, FontTable, GlyphMetrics, FIRST_PRINTABLE_CHAR};

const PIXELS_PER_POINT: f32 = 2.0;

/// Glyphs measured per font: printable ASCII and Latin-1.
const GLYPH_COUNT: u32 = 224;

/// Size the built-in font is measured at when it stands in for a missing font.
const FALLBACK_BASE_SIZE: u16 = 20;

/// `None` draws with macroquad's built-in font.
pub type MacroquadFont = Option<Font>;

fn ply_to_macroquad_color(ply_color: &crate::color::Color) -> Color {
    Color {
        r: ply_color.r / 255.0,
        g: ply_color.g / 255.0,
        b: ply_color.b / 255.0,
        a: ply_color.a / 255.0,
    }
}

fn draw_good_circle(x: f32, y: f32, r: f32, min_sides: u8, color: Color) {
    let sides = ((2.0 * std::f32::consts::PI * r) / PIXELS_PER_POINT).max(min_sides as f32);
    draw_poly(x, y, sides.min(255.0) as u8, r, 0.0, color);
}

/// Rounded rectangle from two overlapping bars and four corner circles. Only correct for opaque
/// colors, translucent ones would blend twice where the pieces overlap.
fn fill_rounded_rectangle(bb: &BoundingBox, radius: f32, segments: u8, color: Color) {
    let corner_sides = segments.saturating_mul(4);
    draw_rectangle(bb.x + radius, bb.y, bb.width - 2.0 * radius, bb.height, color);
    draw_rectangle(bb.x, bb.y + radius, bb.width, bb.height - 2.0 * radius, color);

    draw_good_circle(bb.x + radius, bb.y + radius, radius, corner_sides, color);
    draw_good_circle(bb.x + bb.width - radius, bb.y + radius, radius, corner_sides, color);
    draw_good_circle(bb.x + radius, bb.y + bb.height - radius, radius, corner_sides, color);
    draw_good_circle(
        bb.x + bb.width - radius,
        bb.y + bb.height - radius,
        radius,
        corner_sides,
        color,
    );
}

/// White rounded rectangle mask, drawn tinted so translucent fills blend once.
fn rounded_rectangle_texture(
    width: f32,
    height: f32,
    radius: f32,
    segments: u8,
    clip: Option<ClipRect>,
) -> Texture2D {
    let render_target = render_target_msaa(width as u32, height as u32);
    render_target.texture.set_filter(FilterMode::Linear);
    let mut cam = Camera2D::from_display_rect(Rect::new(0.0, 0.0, width, height));
    cam.render_target = Some(render_target.clone());
    set_camera(&cam);
    unsafe {
        get_internal_gl().quad_gl.scissor(None);
    };

    fill_rounded_rectangle(
        &BoundingBox::new(0.0, 0.0, width, height),
        radius,
        segments,
        WHITE,
    );

    set_default_camera();
    unsafe {
        get_internal_gl().quad_gl.scissor(clip.map(Into::into));
    }
    render_target.texture
}

struct CachedTexture {
    texture: Texture2D,
    frames_not_used: usize,
}

/// [`Backend`] drawing through macroquad's immediate mode API.
pub struct MacroquadBackend {
    clip: Option<ClipRect>,
    /// Masks for translucent rounded rectangles, keyed by width, height and radius.
    rounded_textures: FxHashMap<(u32, u32, u32), CachedTexture>,
    /// Frames a cached mask may go unused before it is dropped.
    pub max_frames_not_used: usize,
}

impl Default for MacroquadBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MacroquadBackend {
    pub fn new() -> Self {
        Self {
            clip: None,
            rounded_textures: FxHashMap::default(),
            max_frames_not_used: 1,
        }
    }

    pub fn cached_textures(&self) -> usize {
        self.rounded_textures.len()
    }

    fn apply_clip(&self) {
        unsafe {
            get_internal_gl().quad_gl.scissor(self.clip.map(Into::into));
        }
    }
}

impl Backend for MacroquadBackend {
    type Texture = Texture2D;
    type Model = Mesh;
    type Font = MacroquadFont;

    fn draw_rectangle(&mut self, bounds: BoundingBox, color: crate::color::Color) {
        draw_rectangle(
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            ply_to_macroquad_color(&color),
        );
    }

    fn draw_rectangle_rounded(
        &mut self,
        bounds: BoundingBox,
        roundness: f32,
        segments: u8,
        color: crate::color::Color,
    ) {
        if bounds.width < 1.0 || bounds.height < 1.0 {
            return;
        }
        let radius = roundness.clamp(0.0, 1.0) * bounds.min_side() / 2.0;
        let color = ply_to_macroquad_color(&color);

        if color.a >= 1.0 {
            fill_rounded_rectangle(&bounds, radius, segments, color);
            return;
        }

        let clip = self.clip;
        let key = (bounds.width as u32, bounds.height as u32, radius.to_bits());
        let cached = self.rounded_textures.entry(key).or_insert_with(|| CachedTexture {
            texture: rounded_rectangle_texture(bounds.width, bounds.height, radius, segments, clip),
            frames_not_used: 0,
        });
        cached.frames_not_used = 0;

        draw_texture_ex(
            &cached.texture,
            bounds.x,
            bounds.y,
            color,
            DrawTextureParams {
                dest_size: Some(Vec2::new(bounds.width, bounds.height)),
                ..Default::default()
            },
        );
    }

    fn draw_ring(&mut self, ring: Ring, color: crate::color::Color) {
        draw_arc(
            ring.center.x,
            ring.center.y,
            ring.segments,
            ring.inner_radius,
            ring.start_angle,
            ring.outer_radius - ring.inner_radius,
            ring.end_angle - ring.start_angle,
            ply_to_macroquad_color(&color),
        );
    }

    fn texture_width(&self, texture: &Texture2D) -> f32 {
        texture.width()
    }

    fn draw_texture(
        &mut self,
        texture: &Texture2D,
        position: crate::math::Vector2,
        rotation: f32,
        scale: f32,
        tint: crate::color::Color,
    ) {
        draw_texture_ex(
            texture,
            position.x,
            position.y,
            ply_to_macroquad_color(&tint),
            DrawTextureParams {
                dest_size: Some(Vec2::new(texture.width() * scale, texture.height() * scale)),
                rotation: rotation.to_radians(),
                ..Default::default()
            },
        );
    }

    fn draw_text(
        &mut self,
        font: &MacroquadFont,
        text: &CStr,
        position: crate::math::Vector2,
        font_size: f32,
        spacing: f32,
        color: crate::color::Color,
    ) {
        let text = text.to_string_lossy();
        let font = font.as_ref();
        let font_size = font_size.round() as u16;

        // macroquad positions text by its baseline.
        let baseline = position.y + measure_text(&text, font, font_size, 1.0).offset_y;
        let params = TextParams {
            font,
            font_size,
            color: ply_to_macroquad_color(&color),
            ..Default::default()
        };

        if spacing <= 0.0 {
            draw_text_ex(&text, position.x, baseline, params);
            return;
        }

        let mut x = position.x;
        let mut buffer = [0u8; 4];
        for c in text.chars() {
            let glyph = c.encode_utf8(&mut buffer);
            let drawn = draw_text_ex(glyph, x, baseline, params.clone());
            x += drawn.width + spacing;
        }
    }

    fn scissor(&mut self, clip: Option<ClipRect>) {
        self.clip = clip;
        self.apply_clip();
    }

    fn begin_mode_3d(&mut self, camera: &crate::camera::Camera) {
        let (fovy, projection) = match camera.projection {
            crate::camera::Projection::Perspective => {
                (camera.fovy.to_radians(), Projection::Perspective)
            }
            crate::camera::Projection::Orthographic => (camera.fovy, Projection::Orthographics),
        };
        set_camera(&Camera3D {
            position: camera.position,
            target: camera.target,
            up: camera.up,
            fovy,
            projection,
            ..Default::default()
        });
    }

    // Meshes carry their own vertex colors, so the tint is not applied.
    fn draw_model(
        &mut self,
        model: &Mesh,
        position: Vec3,
        rotation: Mat4,
        scale: f32,
        _tint: crate::color::Color,
    ) {
        let transform =
            Mat4::from_translation(position) * rotation * Mat4::from_scale(Vec3::splat(scale));
        unsafe {
            get_internal_gl().quad_gl.push_model_matrix(transform);
        }
        draw_mesh(model);
        unsafe {
            get_internal_gl().quad_gl.pop_model_matrix();
        }
    }

    fn end_mode_3d(&mut self) {
        set_default_camera();
        self.apply_clip();
    }

    fn end_frame(&mut self) {
        let max_frames_not_used = self.max_frames_not_used;
        self.rounded_textures
            .retain(|_, cached| cached.frames_not_used <= max_frames_not_used);

        for cached in self.rounded_textures.values_mut() {
            cached.frames_not_used += 1;
        }
    }
}

/// Samples macroquad's input state for [`Context::begin_frame`].
pub fn frame_input(options: &RenderOptions) -> FrameInput {
    let (pointer_x, pointer_y) = mouse_position();
    let (wheel_x, wheel_y) = mouse_wheel();
    FrameInput {
        toggle_debug: is_key_pressed(options.debug_key),
        close_requested: is_key_pressed(options.close_key) || is_quit_requested(),
        pointer: crate::math::Vector2::new(pointer_x, pointer_y),
        pointer_down: is_mouse_button_down(MouseButton::Left),
        scroll_delta: crate::math::Vector2::new(wheel_x, wheel_y),
        dimensions: Dimensions::new(screen_width(), screen_height()),
        frame_time: get_frame_time(),
    }
}

fn measure_glyphs(font: Option<&Font>, size: u16) -> FontMetrics {
    let first = FIRST_PRINTABLE_CHAR as u32;
    let glyphs = (first..first + GLYPH_COUNT)
        .map(|code| match char::from_u32(code) {
            Some(c) if !c.is_control() => {
                let mut buffer = [0u8; 4];
                let dimensions = measure_text(c.encode_utf8(&mut buffer), font, size, 1.0);
                GlyphMetrics {
                    advance_x: dimensions.width,
                    offset_x: 0.0,
                    width: dimensions.width,
                }
            }
            _ => GlyphMetrics::default(),
        })
        .collect();
    FontMetrics::new(size, glyphs)
}

/// Loads `options.font_path` once per entry of `options.font_sizes`.
///
/// A font that fails to load is logged and left without glyphs, so lookups fall back to
/// macroquad's built-in font.
pub async fn load_fonts(options: &RenderOptions) -> FontTable<MacroquadFont> {
    let mut table = FontTable::new(crate::text::Font {
        metrics: measure_glyphs(None, FALLBACK_BASE_SIZE),
        face: None,
    });

    let loaded = match load_ttf_font(&options.font_path).await {
        Ok(mut font) => {
            font.set_filter(FilterMode::Linear);
            Some(font)
        }
        Err(error) => {
            warn!(
                "Failed to load font {}, using the built-in font instead. Error: {}",
                options.font_path, error
            );
            None
        }
    };

    for &size in &options.font_sizes {
        let metrics = match &loaded {
            Some(font) => measure_glyphs(Some(font), size),
            None => FontMetrics::empty(size),
        };
        table.push(crate::text::Font {
            metrics,
            face: loaded.clone(),
        });
    }
    table
}

/// Opens the frame loop: loads fonts, then once per frame samples input, runs
/// [`Context::begin_frame`] and hands over to `frame`, until a close is requested.
///
/// `frame` lays out the UI with `engine` and paints the result with the renderer.
pub async fn run<E, F>(options: &RenderOptions, engine: &mut E, mut frame: F)
where
    E: LayoutEngine,
    F: FnMut(&mut Context<MacroquadFont>, &mut E, &mut Renderer<MacroquadBackend>),
{
    let fonts = load_fonts(options).await;
    let mut context = Context::new(fonts, options.frame_arena_capacity);
    context.install_text_measurement(&mut *engine);
    let mut renderer =
        Renderer::with_text_capacity(MacroquadBackend::new(), options.text_scratch_capacity);

    while !context.should_close() {
        let input = frame_input(options);
        context.begin_frame(&mut *engine, &input);
        frame(&mut context, &mut *engine, &mut renderer);
        next_frame().await;
    }
}
