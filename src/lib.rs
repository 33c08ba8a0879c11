//! Glue between a declarative layout engine and a drawing backend.
//!
//! Two halves:
//!
//! * [`style`] compiles short style tokens (`"fit-0"`, `"t-sm"`, `"cr"`) into the
//!   [`ElementDeclaration`](layout::ElementDeclaration)s the layout engine consumes.
//! * [`renderer`] walks the render commands the engine produces and draws them through a
//!   [`Backend`](backend::Backend), with clipping, rounded corners, borders and 3D models.
//!
//! [`context`] carries the per-frame plumbing in between, and [`renderers::macroquad`] is the
//! ready made macroquad backend.

pub mod align;
pub mod arena;
pub mod backend;
pub mod camera;
pub mod color;
pub mod context;
pub mod engine;
pub mod errors;
pub mod id;
pub mod layout;
pub mod math;
pub mod options;
pub mod prelude;
pub mod render_commands;
pub mod renderer;
pub mod renderers;
pub mod scroll;
pub mod style;
pub mod text;

pub use color::Color;
pub use context::{Context, FrameInput};
pub use engine::{LayoutEngine, ScrollContainerData};
pub use errors::{Error, ErrorType, StyleError};
pub use math::{BoundingBox, Dimensions, Vector2};
pub use renderer::Renderer;
pub use style::{Component, Style};
pub use text::TextConfig;
