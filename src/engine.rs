//! The seam between this crate and the layout engine.
//!
//! The engine owns the element tree, constraint solving and scroll offsets. The compositor only
//! needs the handful of operations below to drive it once per frame and to recover from its
//! capacity errors.

use crate::id::ElementId;
use crate::math::{Dimensions, Vector2};
use crate::text::TextConfig;

/// Text measurement callback, see
/// [`create_measure_text_function`](crate::text::create_measure_text_function).
pub type MeasureTextFn = Box<dyn Fn(&str, &TextConfig) -> Dimensions>;

/// Geometry of one scroll container, as of the last layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollContainerData {
    /// Current offset of the content. Always `<= 0` on both axes once clamped.
    pub scroll_position: Vector2,
    pub scroll_container_dimensions: Dimensions,
    pub content_dimensions: Dimensions,
}

impl ScrollContainerData {
    /// Lowest vertical offset that still shows content: `-max(0, content - viewport)`.
    pub fn min_scroll_y(&self) -> f32 {
        -(self.content_dimensions.height - self.scroll_container_dimensions.height).max(0.0)
    }

    /// Horizontal counterpart of [`ScrollContainerData::min_scroll_y`].
    pub fn min_scroll_x(&self) -> f32 {
        -(self.content_dimensions.width - self.scroll_container_dimensions.width).max(0.0)
    }
}

pub trait LayoutEngine {
    /// `None` when no scroll container with this id was laid out.
    fn scroll_container_data(&self, id: &ElementId) -> Option<ScrollContainerData>;
    fn set_scroll_position(&mut self, id: &ElementId, position: Vector2);

    fn max_element_count(&self) -> i32;
    fn set_max_element_count(&mut self, count: i32);
    fn max_measure_text_cache_word_count(&self) -> i32;
    fn set_max_measure_text_cache_word_count(&mut self, count: i32);

    /// Rebuilds the engine's internal storage with the current capacities.
    fn reinitialize(&mut self);

    /// Installs the function used to size every text run during layout.
    fn set_measure_text_function(&mut self, measure: MeasureTextFn);

    fn set_debug_mode_enabled(&mut self, enabled: bool);
    fn set_layout_dimensions(&mut self, dimensions: Dimensions);
    fn set_pointer_state(&mut self, position: Vector2, is_down: bool);
    fn update_scroll_containers(
        &mut self,
        enable_drag_scrolling: bool,
        scroll_delta: Vector2,
        delta_time: f32,
    );
}
