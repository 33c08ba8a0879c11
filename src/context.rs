//! Per-application state that survives between frames, and the per-frame plumbing between the
//! host's input and the layout engine.

use std::rc::Rc;

use macroquad::logging::{error, info, warn};

use crate::arena::Arena;
use crate::engine::LayoutEngine;
use crate::errors::{Error, ErrorType};
use crate::math::{Dimensions, Vector2};
use crate::text::{create_measure_text_function, FontTable};

/// Input sampled by the host at the start of a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// The debug view toggle was pressed this frame.
    pub toggle_debug: bool,
    /// The user asked to close the window.
    pub close_requested: bool,
    pub pointer: Vector2,
    pub pointer_down: bool,
    pub scroll_delta: Vector2,
    /// Current window size.
    pub dimensions: Dimensions,
    /// Seconds since the previous frame.
    pub frame_time: f32,
}

pub struct Context<F> {
    /// Scratch memory for strings built during the frame, see [`format_in!`](crate::format_in).
    /// Reset at the start of every frame.
    pub arena: Arena,
    fonts: Rc<FontTable<F>>,
    reinitialize: bool,
    debug_enabled: bool,
    should_close: bool,
}

impl<F> Context<F> {
    pub fn new(fonts: FontTable<F>, arena_capacity: usize) -> Self {
        Self {
            arena: Arena::new(arena_capacity),
            fonts: Rc::new(fonts),
            reinitialize: false,
            debug_enabled: false,
            should_close: false,
        }
    }

    pub fn fonts(&self) -> &FontTable<F> {
        &self.fonts
    }

    /// Shared handle to the fonts, for the measurement callback.
    pub fn fonts_rc(&self) -> Rc<FontTable<F>> {
        Rc::clone(&self.fonts)
    }

    /// Whether the layout engine will be rebuilt at the start of the next frame.
    pub fn reinitialize_pending(&self) -> bool {
        self.reinitialize
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Asks the host loop to stop after this frame.
    pub fn request_close(&mut self) {
        self.should_close = true;
    }

    /// Error callback for the layout engine.
    ///
    /// Capacity errors double the exhausted capacity and schedule a rebuild of the engine for
    /// the next frame. Everything else is only logged.
    pub fn handle_error(&mut self, engine: &mut impl LayoutEngine, error: &Error<'_>) {
        match error.type_ {
            ErrorType::ElementsCapacityExceeded => {
                let count = engine.max_element_count().saturating_mul(2);
                warn!("{} Raising the element limit to {}", error.text, count);
                engine.set_max_element_count(count);
                self.reinitialize = true;
            }
            ErrorType::TextMeasurementCapacityExceeded => {
                let count = engine.max_measure_text_cache_word_count().saturating_mul(2);
                warn!("{} Raising the text cache to {} words", error.text, count);
                engine.set_max_measure_text_cache_word_count(count);
                self.reinitialize = true;
            }
            _ => error!("{:?}: {}", error.type_, error.text),
        }
    }

    /// Runs the start-of-frame work, in order: close request, pending rebuild, debug toggle,
    /// pointer, layout dimensions and scrolling.
    pub fn begin_frame(&mut self, engine: &mut impl LayoutEngine, input: &FrameInput) {
        if input.close_requested {
            self.should_close = true;
        }

        if self.reinitialize {
            info!(
                "Reinitializing layout engine with {} elements and {} cached words",
                engine.max_element_count(),
                engine.max_measure_text_cache_word_count()
            );
            engine.reinitialize();
            self.reinitialize = false;
        }

        if input.toggle_debug {
            self.debug_enabled = !self.debug_enabled;
            engine.set_debug_mode_enabled(self.debug_enabled);
        }

        engine.set_pointer_state(input.pointer, input.pointer_down);
        engine.set_layout_dimensions(input.dimensions);
        engine.update_scroll_containers(true, input.scroll_delta, input.frame_time);

        self.arena.reset();
    }
}

impl<F: 'static> Context<F> {
    /// Hands the engine a measurement callback sharing this context's fonts.
    pub fn install_text_measurement(&self, engine: &mut impl LayoutEngine) {
        let measure = create_measure_text_function(self.fonts_rc());
        engine.set_measure_text_function(Box::new(measure));
    }
}
