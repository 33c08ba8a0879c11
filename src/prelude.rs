//! A single import for the common types.
//!
//! ```rust
//! use ply_compositor::prelude::*;
//! ```

// Core types
pub use crate::context::{Context, FrameInput};
pub use crate::engine::LayoutEngine;
pub use crate::id::ElementId;
pub use crate::renderer::Renderer;
pub use crate::style::{Component, Style};
pub use crate::text::{FontTable, TextConfig};
pub use crate::options::RenderOptions;

// Scrolling
pub use crate::scroll::{scroll_by_x, scroll_by_y, scroll_to_bottom, scroll_to_top};

// Macros
pub use crate::{fit, fixed, format_in, grow, percent};

// Alignment: globbed
pub use crate::align::AlignX::{self, *};
pub use crate::align::AlignY::{self, *};

// LayoutDirection: globbed
pub use crate::layout::LayoutDirection::{self, *};

// Render commands, for engine adapters
pub use crate::render_commands::{CustomElement, Model3D, RenderCommand, RenderCommandConfig};

// Macroquad backend: feature-gated
#[cfg(feature = "macroquad-renderer")]
pub use crate::renderers::{frame_input, load_fonts, run, MacroquadBackend, MacroquadFont};

pub use crate::color::Color;
