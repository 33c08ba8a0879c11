#[cfg(feature = "macroquad-renderer")]
pub mod macroquad;
#[cfg(feature = "macroquad-renderer")]
pub use self::macroquad::{frame_input, load_fonts, run, MacroquadBackend, MacroquadFont};
