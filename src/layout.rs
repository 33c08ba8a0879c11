//! Structured element configuration handed to the layout engine.
//!
//! [`ElementDeclaration`] is what the style compiler in [`crate::style`] produces.

use crate::align::{AlignX, AlignY};
use crate::color::Color;
use crate::id::ElementId;

/// Represents different sizing strategies for layout elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sizing {
    /// Fits the element’s width/height within a min and max constraint.
    Fit(f32, f32),
    /// Expands the element to fill available space within min/max constraints.
    Grow(f32, f32),
    /// Sets a fixed width/height.
    Fixed(f32),
    /// Sets width/height as a percentage of its parent, between `0.0` and `100.0`.
    Percent(f32),
}

impl Default for Sizing {
    fn default() -> Self {
        crate::fit!()
    }
}

/// Represents padding values for each side of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Padding {
    /// Padding on the left side.
    pub left: u16,
    /// Padding on the right side.
    pub right: u16,
    /// Padding on the top side.
    pub top: u16,
    /// Padding on the bottom side.
    pub bottom: u16,
}

impl Padding {
    /// Creates a new `Padding` with individual values for each side.
    pub fn new(left: u16, right: u16, top: u16, bottom: u16) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Sets the same padding value for all sides.
    pub fn all(value: u16) -> Self {
        Self::new(value, value, value, value)
    }
}

impl From<u16> for Padding {
    /// Creates padding with the same value for all sides.
    fn from(value: u16) -> Self {
        Self::all(value)
    }
}

impl From<(u16, u16, u16, u16)> for Padding {
    /// Creates padding from a tuple in CSS order: (top, right, bottom, left).
    fn from((top, right, bottom, left): (u16, u16, u16, u16)) -> Self {
        Self { left, right, top, bottom }
    }
}

/// Defines the layout direction for arranging child elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum LayoutDirection {
    /// Arranges elements from left to right.
    #[default]
    LeftToRight,
    /// Arranges elements from top to bottom.
    TopToBottom,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizingConfig {
    pub width: Sizing,
    pub height: Sizing,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChildAlignment {
    pub x: AlignX,
    pub y: AlignY,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutConfig {
    pub sizing: SizingConfig,
    pub padding: Padding,
    pub child_gap: u16,
    pub child_alignment: ChildAlignment,
    pub layout_direction: LayoutDirection,
}

/// Defines individual corner radii for an element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_left: f32,
    pub bottom_right: f32,
}

impl CornerRadius {
    pub fn is_zero(&self) -> bool {
        self.top_left == 0.0
            && self.top_right == 0.0
            && self.bottom_left == 0.0
            && self.bottom_right == 0.0
    }
}

impl From<f32> for CornerRadius {
    /// Creates a corner radius with the same value for all corners.
    fn from(value: f32) -> Self {
        Self {
            top_left: value,
            top_right: value,
            bottom_left: value,
            bottom_right: value,
        }
    }
}

/// Border width of each edge, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BorderWidth {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl BorderWidth {
    pub fn all(value: f32) -> Self {
        Self {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.left == 0.0 && self.right == 0.0 && self.top == 0.0 && self.bottom == 0.0
    }
}

/// One color shared by every edge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BorderConfig {
    pub color: Color,
    pub width: BorderWidth,
}

/// Which axes of an element scroll its content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollConfig {
    pub horizontal: bool,
    pub vertical: bool,
}

/// The complete configuration of one layout element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementDeclaration {
    pub id: Option<ElementId>,
    pub layout: LayoutConfig,
    pub background_color: Color,
    pub corner_radius: CornerRadius,
    pub border: BorderConfig,
    pub scroll: ScrollConfig,
}

impl ElementDeclaration {
    /// A declaration with the given direction and sizing, everything else zeroed.
    pub fn with_sizing(direction: LayoutDirection, width: Sizing, height: Sizing) -> Self {
        Self {
            layout: LayoutConfig {
                sizing: SizingConfig { width, height },
                layout_direction: direction,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Shorthand macro for [`Sizing::Fit`]. Defaults max to `f32::MAX` if omitted.
#[macro_export]
macro_rules! fit {
    ($min:expr, $max:expr) => {
        $crate::layout::Sizing::Fit($min, $max)
    };
    ($min:expr) => {
        $crate::fit!($min, f32::MAX)
    };
    () => {
        $crate::fit!(0.0)
    };
}

/// Shorthand macro for [`Sizing::Grow`]. Defaults max to `f32::MAX` if omitted.
#[macro_export]
macro_rules! grow {
    ($min:expr, $max:expr) => {
        $crate::layout::Sizing::Grow($min, $max)
    };
    ($min:expr) => {
        $crate::grow!($min, f32::MAX)
    };
    () => {
        $crate::grow!(0.0)
    };
}

/// Shorthand macro for [`Sizing::Fixed`].
#[macro_export]
macro_rules! fixed {
    ($val:expr) => {
        $crate::layout::Sizing::Fixed($val)
    };
}

/// Shorthand macro for [`Sizing::Percent`].
/// The value has to be in range `0.0..=100.0`.
#[macro_export]
macro_rules! percent {
    ($percent:expr) => {{
        const _: () = assert!(
            $percent >= 0.0 && $percent <= 100.0,
            "Percent value must be between 0.0 and 100.0 inclusive!"
        );
        $crate::layout::Sizing::Percent($percent)
    }};
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fit_macro() {
        let both_args = fit!(12.0, 34.0);
        assert!(matches!(both_args, Sizing::Fit(12.0, 34.0)));

        let one_arg = fit!(12.0);
        assert!(matches!(one_arg, Sizing::Fit(12.0, f32::MAX)));

        let zero_args = fit!();
        assert!(matches!(zero_args, Sizing::Fit(0.0, f32::MAX)));
    }

    #[test]
    fn grow_macro() {
        let one_arg = grow!(12.0);
        assert!(matches!(one_arg, Sizing::Grow(12.0, f32::MAX)));

        let zero_args = grow!();
        assert!(matches!(zero_args, Sizing::Grow(0.0, f32::MAX)));
    }

    #[test]
    fn fixed_and_percent_macros() {
        assert!(matches!(fixed!(123.0), Sizing::Fixed(123.0)));
        assert!(matches!(percent!(50.0), Sizing::Percent(50.0)));
    }

    #[test]
    fn default_declaration_is_blank() {
        let declaration = ElementDeclaration::default();
        assert!(declaration.id.is_none());
        assert!(declaration.corner_radius.is_zero());
        assert!(declaration.border.width.is_zero());
        assert_eq!(declaration.layout.sizing.width, Sizing::Fit(0.0, f32::MAX));
        assert!(declaration.background_color.is_none());
    }
}
