use macroquad::math::{Mat4, Vec3};

use crate::color::Color;
use crate::layout::{BorderWidth, CornerRadius};
use crate::math::BoundingBox;

/// Represents a rectangle with a specified color and corner radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// The fill color of the rectangle.
    pub color: Color,
    /// The corner radii for rounded edges.
    pub corner_radii: CornerRadius,
}

/// Represents a text element with styling attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Text<'a> {
    /// The text content.
    pub text: &'a str,
    /// The color of the text.
    pub color: Color,
    /// The ID of the font used.
    pub font_id: u16,
    /// The font size.
    pub font_size: u16,
    /// The spacing between letters.
    pub letter_spacing: u16,
    /// The line height.
    pub line_height: u16,
}

/// Represents a border with a specified color, width, and corner radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    /// The border color.
    pub color: Color,
    /// The corner radii for rounded border edges.
    pub corner_radii: CornerRadius,
    /// The width of the border on each side.
    pub width: BorderWidth,
}

/// An image drawn at the top-left of its bounding box.
#[derive(Debug)]
pub struct Image<'a, Texture> {
    /// Tint. All channels zero means no tint.
    pub background_color: Color,
    pub corner_radii: CornerRadius,
    pub data: &'a Texture,
}

/// A 3D model placed at the center of a layout element.
#[derive(Debug)]
pub struct Model3D<'a, Model> {
    pub model: &'a Model,
    /// Uniform scale before the viewport correction.
    pub scale: f32,
    /// World space offset from the point the element projects to.
    pub position: Vec3,
    pub rotation: Mat4,
}

/// Payloads of custom elements.
#[derive(Debug)]
pub enum CustomElement<'a, Model> {
    Model3D(Model3D<'a, Model>),
}

/// Represents a custom element with a background color, corner radii, and associated data.
#[derive(Debug)]
pub struct Custom<'a, Model> {
    /// The background color of the custom element.
    pub background_color: Color,
    /// The corner radii for rounded edges.
    pub corner_radii: CornerRadius,
    /// `None` when the element was declared without a payload.
    pub data: Option<&'a CustomElement<'a, Model>>,
}

#[derive(Debug)]
pub enum RenderCommandConfig<'a, Texture, Model> {
    /// The layout engine's "no command" tag. Never valid in a render list.
    None,
    Rectangle(Rectangle),
    Border(Border),
    Text(Text<'a>),
    Image(Image<'a, Texture>),
    ScissorStart,
    ScissorEnd,
    Custom(Custom<'a, Model>),
}

/// Represents a render command for drawing an element on the screen.
#[derive(Debug)]
pub struct RenderCommand<'a, Texture, Model> {
    /// The bounding box defining the area occupied by the element.
    pub bounding_box: BoundingBox,
    /// The specific configuration for rendering this command.
    pub config: RenderCommandConfig<'a, Texture, Model>,
    /// A unique identifier for the render command.
    pub id: u32,
}

impl<'a, Texture, Model> RenderCommand<'a, Texture, Model> {
    pub fn new(bounding_box: BoundingBox, config: RenderCommandConfig<'a, Texture, Model>) -> Self {
        Self {
            bounding_box,
            config,
            id: 0,
        }
    }

    /// Human readable command kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self.config {
            RenderCommandConfig::None => "none",
            RenderCommandConfig::Rectangle(_) => "rectangle",
            RenderCommandConfig::Border(_) => "border",
            RenderCommandConfig::Text(_) => "text",
            RenderCommandConfig::Image(_) => "image",
            RenderCommandConfig::ScissorStart => "scissor start",
            RenderCommandConfig::ScissorEnd => "scissor end",
            RenderCommandConfig::Custom(_) => "custom",
        }
    }
}
