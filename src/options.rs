use macroquad::input::KeyCode;
use macroquad::window::Conf;

/// Window and resource settings for an application.
///
/// ```
/// use ply_compositor::options::RenderOptions;
///
/// let options = RenderOptions::new("Dashboard", "assets/Inter.ttf").size(1280, 720);
/// let conf = options.window_conf();
/// assert_eq!(conf.window_title, "Dashboard");
/// assert_eq!(conf.window_width, 1280);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub window_name: String,
    /// TTF file every font size is loaded from.
    pub font_path: String,
    /// One font is loaded per size; the font id is the index in this list.
    pub font_sizes: Vec<u16>,
    /// Initial size of the per-frame scratch arena, in bytes.
    pub frame_arena_capacity: usize,
    /// Initial size of the renderer's text copy buffer, in bytes.
    pub text_scratch_capacity: usize,
    /// Toggles the layout engine's debug view.
    pub debug_key: KeyCode,
    pub close_key: KeyCode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            window_name: String::from("ply-compositor"),
            font_path: String::new(),
            font_sizes: vec![18, 20, 22, 24],
            frame_arena_capacity: 64 * 1024,
            text_scratch_capacity: 1024,
            debug_key: KeyCode::F2,
            close_key: KeyCode::Escape,
        }
    }
}

impl RenderOptions {
    pub fn new(window_name: impl Into<String>, font_path: impl Into<String>) -> Self {
        Self {
            window_name: window_name.into(),
            font_path: font_path.into(),
            ..Default::default()
        }
    }

    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn font_sizes(mut self, sizes: impl Into<Vec<u16>>) -> Self {
        self.font_sizes = sizes.into();
        self
    }

    /// Window configuration for `#[macroquad::main(...)]`: resizable, high DPI, 4x MSAA.
    pub fn window_conf(&self) -> Conf {
        Conf {
            window_title: self.window_name.clone(),
            window_width: self.width,
            window_height: self.height,
            high_dpi: true,
            window_resizable: true,
            sample_count: 4,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_four_font_sizes() {
        let options = RenderOptions::default();
        assert_eq!(options.font_sizes, vec![18, 20, 22, 24]);
        assert_eq!((options.width, options.height), (1024, 768));
        assert_eq!(options.debug_key, KeyCode::F2);
    }

    #[test]
    fn window_conf_carries_size_and_title() {
        let conf = RenderOptions::new("Demo", "font.ttf")
            .size(800, 600)
            .window_conf();
        assert_eq!(conf.window_title, "Demo");
        assert_eq!((conf.window_width, conf.window_height), (800, 600));
        assert!(conf.window_resizable);
        assert!(conf.high_dpi);
        assert_eq!(conf.sample_count, 4);
    }
}
