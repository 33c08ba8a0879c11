//! Programmatic scrolling of named scroll containers.
//!
//! Offsets follow the layout engine's convention: `0` shows the start of the content and more
//! negative values scroll towards its end.

use macroquad::logging::warn;

use crate::engine::{LayoutEngine, ScrollContainerData};
use crate::id::ElementId;
use crate::math::Vector2;

/// Clamps a scroll offset into `[min, 0]`.
#[inline]
pub fn clamp_scroll(value: f32, min: f32) -> f32 {
    value.max(min).min(0.0)
}

/// Scrolls vertically by `delta` pixels, staying within the content.
pub fn scroll_by_y(engine: &mut impl LayoutEngine, container: &str, delta: f32) {
    update(engine, container, |data| {
        let y = clamp_scroll(data.scroll_position.y + delta, data.min_scroll_y());
        Vector2::new(data.scroll_position.x, y)
    });
}

/// Scrolls horizontally by `delta` pixels, staying within the content.
pub fn scroll_by_x(engine: &mut impl LayoutEngine, container: &str, delta: f32) {
    update(engine, container, |data| {
        let x = clamp_scroll(data.scroll_position.x + delta, data.min_scroll_x());
        Vector2::new(x, data.scroll_position.y)
    });
}

pub fn scroll_to_top(engine: &mut impl LayoutEngine, container: &str) {
    update(engine, container, |data| Vector2::new(data.scroll_position.x, 0.0));
}

pub fn scroll_to_bottom(engine: &mut impl LayoutEngine, container: &str) {
    update(engine, container, |data| {
        Vector2::new(data.scroll_position.x, data.min_scroll_y())
    });
}

fn update(
    engine: &mut impl LayoutEngine,
    container: &str,
    position: impl FnOnce(&ScrollContainerData) -> Vector2,
) {
    let id = ElementId::new(container);
    match engine.scroll_container_data(&id) {
        Some(data) => engine.set_scroll_position(&id, position(&data)),
        None => warn!("Scroll container `{}` was not found, nothing to scroll", container),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::FakeEngine;
    use crate::math::Dimensions;

    fn engine() -> FakeEngine {
        FakeEngine::new().with_container(
            "feed",
            Dimensions::new(300.0, 200.0),
            Dimensions::new(800.0, 500.0),
        )
    }

    #[test]
    fn scroll_y_clamps_to_content() {
        let mut engine = engine();

        scroll_by_y(&mut engine, "feed", -1000.0);
        assert_eq!(engine.position("feed").y, -300.0);

        scroll_by_y(&mut engine, "feed", -1000.0);
        assert_eq!(engine.position("feed").y, -300.0);

        scroll_by_y(&mut engine, "feed", 120.0);
        assert_eq!(engine.position("feed").y, -180.0);

        scroll_by_y(&mut engine, "feed", 1000.0);
        assert_eq!(engine.position("feed").y, 0.0);
    }

    #[test]
    fn scroll_x_clamps_to_content() {
        let mut engine = engine();

        scroll_by_x(&mut engine, "feed", -50.0);
        assert_eq!(engine.position("feed"), Vector2::new(-50.0, 0.0));

        scroll_by_x(&mut engine, "feed", -10_000.0);
        assert_eq!(engine.position("feed").x, -500.0);
    }

    #[test]
    fn top_and_bottom() {
        let mut engine = engine();

        scroll_to_bottom(&mut engine, "feed");
        assert_eq!(engine.position("feed").y, -300.0);

        scroll_to_top(&mut engine, "feed");
        assert_eq!(engine.position("feed").y, 0.0);
    }

    #[test]
    fn content_smaller_than_viewport_never_moves() {
        let mut engine = FakeEngine::new().with_container(
            "short",
            Dimensions::new(300.0, 200.0),
            Dimensions::new(100.0, 50.0),
        );

        scroll_by_y(&mut engine, "short", -40.0);
        scroll_to_bottom(&mut engine, "short");
        assert_eq!(engine.position("short"), Vector2::default());
    }

    #[test]
    fn unknown_container_is_ignored() {
        let mut engine = engine();
        scroll_by_y(&mut engine, "missing", -10.0);
        scroll_to_bottom(&mut engine, "missing");
        assert_eq!(engine.position("feed"), Vector2::default());
        assert_eq!(engine.containers.len(), 1);
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp_scroll(5.0, -10.0), 0.0);
        assert_eq!(clamp_scroll(-5.0, -10.0), -5.0);
        assert_eq!(clamp_scroll(-15.0, -10.0), -10.0);
    }
}
