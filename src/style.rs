//! Compact style tokens.
//!
//! A [`Style`] lets a call site describe an element in a handful of short strings:
//!
//! ```
//! use ply_compositor::style::{Component, Style};
//! use ply_compositor::layout::Sizing;
//!
//! let declaration = Component::Row.resolve(
//!     Style::new()
//!         .id("toolbar")
//!         .p(8)
//!         .gap(4)
//!         .align("cl")
//!         .radius("a-md")
//!         .w("grow-0")
//!         .h("fixed-48"),
//! );
//! assert_eq!(declaration.layout.sizing.height, Sizing::Fixed(48.0));
//! ```
//!
//! Resolution copies the component's defaults and overrides only the fields the style sets,
//! so an empty style resolves to the defaults unchanged.
//!
//! Token grammar:
//!
//! | field | form | values |
//! |---|---|---|
//! | `align` | `{vertical}{horizontal}` | `t`/`c`/`b` then `l`/`c`/`r`, `-` skips an axis |
//! | `scroll` | one character | `v`, `h`, `b` (both) |
//! | `radius` | `{direction}-{size}` | `t b l r tl tr bl br a` and `xs sm md lg xl 2xl 3xl` |
//! | `border` | `{side}-{width}` | `t b l r a` and a decimal pixel width |
//! | `w`, `h` | `{mode}-{value}` | `fit grow fixed percent` and a decimal value |

use crate::align::{AlignX, AlignY};
use crate::color::Color;
use crate::errors::{StyleError, StyleField};
use crate::id::hash_string;
use crate::layout::{
    BorderConfig, BorderWidth, ChildAlignment, CornerRadius, ElementDeclaration, LayoutDirection,
    Padding, ScrollConfig, Sizing,
};

const MAX_ALIGN_LEN: usize = 2;
const MAX_SCROLL_LEN: usize = 1;
const MAX_CORNER_RADIUS_LEN: usize = 6;
const MAX_BORDER_LEN: usize = 6;
const MAX_SIZE_VALUE_LEN: usize = 9;

/// Placeholder for "leave this axis alone" inside an alignment token.
const ALIGN_UNSET: char = '-';

/// A border request: nothing is applied unless `color` is visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle<'a> {
    pub color: Color,
    /// `{side}-{width}`, e.g. `"a-2"` or `"b-1"`.
    pub width: &'a str,
}

/// Style request for one element. `None` fields keep the component's default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Style<'a> {
    pub id: Option<&'a str>,

    pub bg: Option<Color>,
    pub gap: Option<u16>,
    pub scroll: Option<&'a str>,

    pub p: Option<u16>,
    pub px: Option<u16>,
    pub py: Option<u16>,
    pub pt: Option<u16>,
    pub pb: Option<u16>,
    pub pl: Option<u16>,
    pub pr: Option<u16>,

    pub align: Option<&'a str>,

    pub radius: Option<&'a str>,
    pub border: Option<BorderStyle<'a>>,

    pub w: Option<&'a str>,
    pub h: Option<&'a str>,
}

impl<'a> Style<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the element so it can be looked up later, e.g. by the scroll helpers.
    #[inline]
    pub fn id(&mut self, id: &'a str) -> &mut Self {
        self.id = Some(id);
        self
    }

    #[inline]
    pub fn bg(&mut self, color: impl Into<Color>) -> &mut Self {
        self.bg = Some(color.into());
        self
    }

    /// Sets the spacing between child elements.
    #[inline]
    pub fn gap(&mut self, gap: u16) -> &mut Self {
        self.gap = Some(gap);
        self
    }

    #[inline]
    pub fn scroll(&mut self, token: &'a str) -> &mut Self {
        self.scroll = Some(token);
        self
    }

    /// Padding on all four sides.
    #[inline]
    pub fn p(&mut self, value: u16) -> &mut Self {
        self.p = Some(value);
        self
    }

    /// Left and right padding.
    #[inline]
    pub fn px(&mut self, value: u16) -> &mut Self {
        self.px = Some(value);
        self
    }

    /// Top and bottom padding.
    #[inline]
    pub fn py(&mut self, value: u16) -> &mut Self {
        self.py = Some(value);
        self
    }

    #[inline]
    pub fn pt(&mut self, value: u16) -> &mut Self {
        self.pt = Some(value);
        self
    }

    #[inline]
    pub fn pb(&mut self, value: u16) -> &mut Self {
        self.pb = Some(value);
        self
    }

    #[inline]
    pub fn pl(&mut self, value: u16) -> &mut Self {
        self.pl = Some(value);
        self
    }

    #[inline]
    pub fn pr(&mut self, value: u16) -> &mut Self {
        self.pr = Some(value);
        self
    }

    #[inline]
    pub fn align(&mut self, token: &'a str) -> &mut Self {
        self.align = Some(token);
        self
    }

    #[inline]
    pub fn radius(&mut self, token: &'a str) -> &mut Self {
        self.radius = Some(token);
        self
    }

    #[inline]
    pub fn border(&mut self, color: impl Into<Color>, width: &'a str) -> &mut Self {
        self.border = Some(BorderStyle {
            color: color.into(),
            width,
        });
        self
    }

    #[inline]
    pub fn w(&mut self, token: &'a str) -> &mut Self {
        self.w = Some(token);
        self
    }

    #[inline]
    pub fn h(&mut self, token: &'a str) -> &mut Self {
        self.h = Some(token);
        self
    }
}

/// Element classes, each with its own default declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// Fit-content vertical stack.
    Box,
    /// Same as [`Component::Box`].
    Column,
    /// Fit-content horizontal stack.
    Row,
    /// Spacer that grows in both directions.
    Separator,
    /// Same as [`Component::Separator`].
    Margin,
}

impl Component {
    pub fn defaults(self) -> ElementDeclaration {
        match self {
            Component::Box | Component::Column => ElementDeclaration::with_sizing(
                LayoutDirection::TopToBottom,
                crate::fit!(0.0),
                crate::fit!(0.0),
            ),
            Component::Row => ElementDeclaration::with_sizing(
                LayoutDirection::LeftToRight,
                crate::fit!(0.0),
                crate::fit!(0.0),
            ),
            Component::Separator | Component::Margin => ElementDeclaration::with_sizing(
                LayoutDirection::default(),
                crate::grow!(0.0),
                crate::grow!(0.0),
            ),
        }
    }

    /// Resolves `style` onto this component's defaults. See [`resolve`].
    pub fn resolve(self, style: &Style<'_>) -> ElementDeclaration {
        resolve(&self.defaults(), style)
    }

    pub fn try_resolve(self, style: &Style<'_>) -> Result<ElementDeclaration, StyleError> {
        try_resolve(&self.defaults(), style)
    }
}

/// Resolves `style` onto `defaults`.
///
/// # Panics
/// On a token that breaks its grammar. Styles are written by developers, so a bad token is a
/// bug in the calling code; use [`try_resolve`] to inspect the error instead.
pub fn resolve(defaults: &ElementDeclaration, style: &Style<'_>) -> ElementDeclaration {
    match try_resolve(defaults, style) {
        Ok(declaration) => declaration,
        Err(error) => panic!("Invalid style: {error}"),
    }
}

/// Resolves `style` onto `defaults`, reporting the first malformed token.
pub fn try_resolve(
    defaults: &ElementDeclaration,
    style: &Style<'_>,
) -> Result<ElementDeclaration, StyleError> {
    let mut result = defaults.clone();

    if let Some(id) = style.id {
        result.id = Some(hash_string(id, 0));
    }
    if let Some(bg) = style.bg {
        result.background_color = bg;
    }
    if let Some(gap) = style.gap {
        result.layout.child_gap = gap;
    }

    apply_padding(&mut result.layout.padding, style);

    if let Some(token) = style.align {
        apply_align(&mut result.layout.child_alignment, token)?;
    }
    if let Some(token) = style.scroll {
        if let Some(scroll) = parse_scroll(token)? {
            result.scroll = scroll;
        }
    }
    if let Some(token) = style.radius {
        apply_corner_radius(&mut result.corner_radius, token)?;
    }
    if let Some(border) = style.border {
        if !border.color.is_transparent() {
            result.border = BorderConfig {
                color: border.color,
                width: parse_border_width(border.width)?,
            };
        }
    }
    if let Some(token) = style.w {
        result.layout.sizing.width = parse_sizing(StyleField::Width, token)?;
    }
    if let Some(token) = style.h {
        result.layout.sizing.height = parse_sizing(StyleField::Height, token)?;
    }

    Ok(result)
}

// Whole, then axis, then single edge: the most specific value always wins.
fn apply_padding(padding: &mut Padding, style: &Style<'_>) {
    if let Some(p) = style.p {
        *padding = Padding::all(p);
    }

    if let Some(px) = style.px {
        padding.left = px;
        padding.right = px;
    }
    if let Some(py) = style.py {
        padding.top = py;
        padding.bottom = py;
    }

    if let Some(pt) = style.pt {
        padding.top = pt;
    }
    if let Some(pb) = style.pb {
        padding.bottom = pb;
    }
    if let Some(pl) = style.pl {
        padding.left = pl;
    }
    if let Some(pr) = style.pr {
        padding.right = pr;
    }
}

fn apply_align(alignment: &mut ChildAlignment, token: &str) -> Result<(), StyleError> {
    let field = StyleField::Align;
    check_len(field, token, MAX_ALIGN_LEN)?;

    let mut chars = token.chars();
    if let Some(c) = chars.next().filter(|&c| c != ALIGN_UNSET) {
        alignment.y = AlignY::from_token(c)
            .ok_or_else(|| unknown(field, token, "vertical alignment", c))?;
    }
    if let Some(c) = chars.next().filter(|&c| c != ALIGN_UNSET) {
        alignment.x = AlignX::from_token(c)
            .ok_or_else(|| unknown(field, token, "horizontal alignment", c))?;
    }
    Ok(())
}

fn parse_scroll(token: &str) -> Result<Option<ScrollConfig>, StyleError> {
    let field = StyleField::Scroll;
    check_len(field, token, MAX_SCROLL_LEN)?;

    let scroll = match token.chars().next() {
        None => return Ok(None),
        Some('v') => ScrollConfig {
            vertical: true,
            horizontal: false,
        },
        Some('h') => ScrollConfig {
            vertical: false,
            horizontal: true,
        },
        Some('b') => ScrollConfig {
            vertical: true,
            horizontal: true,
        },
        Some(c) => return Err(unknown(field, token, "axis", c)),
    };
    Ok(Some(scroll))
}

fn apply_corner_radius(radius: &mut CornerRadius, token: &str) -> Result<(), StyleError> {
    let field = StyleField::CornerRadius;
    if token.is_empty() {
        return Ok(());
    }
    check_len(field, token, MAX_CORNER_RADIUS_LEN)?;

    let (direction, size) = split_token(field, token)?;
    let size = match size {
        "xs" => 2.0,
        "sm" => 4.0,
        "md" => 6.0,
        "lg" => 8.0,
        "xl" => 12.0,
        "2xl" => 16.0,
        "3xl" => 24.0,
        other => return Err(unknown(field, token, "size", other)),
    };

    // (top left, top right, bottom left, bottom right)
    let corners = match direction {
        "t" => (true, true, false, false),
        "b" => (false, false, true, true),
        "l" => (true, false, true, false),
        "r" => (false, true, false, true),
        "tl" => (true, false, false, false),
        "tr" => (false, true, false, false),
        "bl" => (false, false, true, false),
        "br" => (false, false, false, true),
        "a" => (true, true, true, true),
        other => return Err(unknown(field, token, "direction", other)),
    };

    if corners.0 {
        radius.top_left = size;
    }
    if corners.1 {
        radius.top_right = size;
    }
    if corners.2 {
        radius.bottom_left = size;
    }
    if corners.3 {
        radius.bottom_right = size;
    }
    Ok(())
}

fn parse_border_width(token: &str) -> Result<BorderWidth, StyleError> {
    let field = StyleField::Border;
    check_len(field, token, MAX_BORDER_LEN)?;

    let (side, width) = split_token(field, token)?;
    let width = parse_number(field, token, width)?;

    let mut result = BorderWidth::default();
    match side {
        "t" => result.top = width,
        "b" => result.bottom = width,
        "l" => result.left = width,
        "r" => result.right = width,
        "a" => result = BorderWidth::all(width),
        other => return Err(unknown(field, token, "side", other)),
    }
    Ok(result)
}

fn parse_sizing(field: StyleField, token: &str) -> Result<Sizing, StyleError> {
    let (mode, value) = split_token(field, token)?;
    if value.len() > MAX_SIZE_VALUE_LEN {
        return Err(StyleError::TooLong {
            field,
            token: token.to_string(),
            max: mode.len() + 1 + MAX_SIZE_VALUE_LEN,
        });
    }
    let value = parse_number(field, token, value)?;

    // The four modes have distinct lengths: 3, 4, 5 and 7.
    match mode {
        "fit" => Ok(crate::fit!(value)),
        "grow" => Ok(crate::grow!(value)),
        "fixed" => Ok(Sizing::Fixed(value)),
        "percent" if value <= 100.0 => Ok(Sizing::Percent(value)),
        "percent" => Err(StyleError::InvalidNumber {
            field,
            token: token.to_string(),
            value: value.to_string(),
        }),
        other => Err(unknown(field, token, "sizing type", other)),
    }
}

/// Splits at the last `-`.
fn split_token(field: StyleField, token: &str) -> Result<(&str, &str), StyleError> {
    token.rsplit_once('-').ok_or_else(|| StyleError::Malformed {
        field,
        token: token.to_string(),
    })
}

fn check_len(field: StyleField, token: &str, max: usize) -> Result<(), StyleError> {
    if token.len() > max {
        return Err(StyleError::TooLong {
            field,
            token: token.to_string(),
            max,
        });
    }
    Ok(())
}

/// Plain decimal literal: digits with at most one `.`.
fn parse_number(field: StyleField, token: &str, value: &str) -> Result<f32, StyleError> {
    let invalid = || StyleError::InvalidNumber {
        field,
        token: token.to_string(),
        value: value.to_string(),
    };

    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    let dots = value.chars().filter(|&c| c == '.').count();
    if digits == 0 || dots > 1 || digits + dots != value.chars().count() {
        return Err(invalid());
    }
    value.parse::<f32>().map_err(|_| invalid())
}

fn unknown(field: StyleField, token: &str, part: &'static str, value: impl ToString) -> StyleError {
    StyleError::Unknown {
        field,
        token: token.to_string(),
        part,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ElementId;

    const RED: Color = Color::rgb(239.0, 68.0, 68.0);

    #[test]
    fn empty_style_keeps_defaults() {
        for component in [
            Component::Box,
            Component::Column,
            Component::Row,
            Component::Separator,
            Component::Margin,
        ] {
            assert_eq!(component.resolve(&Style::new()), component.defaults());
        }
    }

    #[test]
    fn component_defaults() {
        let column = Component::Column.defaults();
        assert_eq!(column.layout.layout_direction, LayoutDirection::TopToBottom);
        assert_eq!(column.layout.sizing.width, Sizing::Fit(0.0, f32::MAX));
        assert_eq!(Component::Box.defaults(), column);

        let row = Component::Row.defaults();
        assert_eq!(row.layout.layout_direction, LayoutDirection::LeftToRight);
        assert_eq!(row.layout.sizing.height, Sizing::Fit(0.0, f32::MAX));

        let separator = Component::Separator.defaults();
        assert_eq!(separator.layout.sizing.width, Sizing::Grow(0.0, f32::MAX));
        assert_eq!(separator.layout.sizing.height, Sizing::Grow(0.0, f32::MAX));
        assert_eq!(Component::Margin.defaults(), separator);
    }

    #[test]
    fn unset_fields_keep_custom_defaults() {
        let mut defaults = Component::Row.defaults();
        defaults.background_color = RED;
        defaults.layout.child_gap = 12;
        defaults.layout.padding = Padding::all(3);
        defaults.corner_radius = CornerRadius::from(5.0);
        defaults.scroll.vertical = true;

        let resolved = resolve(&defaults, Style::new().w("grow-0"));
        assert_eq!(resolved.layout.sizing.width, Sizing::Grow(0.0, f32::MAX));

        let mut expected = defaults.clone();
        expected.layout.sizing.width = Sizing::Grow(0.0, f32::MAX);
        assert_eq!(resolved, expected);
    }

    #[test]
    fn misc_fields() {
        let resolved = Component::Box.resolve(Style::new().id("main").bg(RED).gap(8));
        assert_eq!(resolved.id, Some(ElementId::new("main")));
        assert_eq!(resolved.background_color, RED);
        assert_eq!(resolved.layout.child_gap, 8);
    }

    #[test]
    fn padding_specific_edge_wins() {
        // Declared from most to least specific to show declaration order does not matter.
        let resolved = Component::Box.resolve(Style::new().pt(1).pr(2).px(5).p(10));
        assert_eq!(resolved.layout.padding, Padding::new(5, 2, 1, 10));

        let resolved = Component::Box.resolve(Style::new().py(4).pb(9));
        assert_eq!(resolved.layout.padding, Padding::new(0, 0, 4, 9));
    }

    #[test]
    fn alignment_tokens() {
        let resolved = Component::Box.resolve(Style::new().align("cr"));
        assert_eq!(resolved.layout.child_alignment.y, AlignY::CenterY);
        assert_eq!(resolved.layout.child_alignment.x, AlignX::Right);

        let vertical_only = Component::Box.resolve(Style::new().align("b"));
        assert_eq!(vertical_only.layout.child_alignment.y, AlignY::Bottom);
        assert_eq!(vertical_only.layout.child_alignment.x, AlignX::Left);

        let mut defaults = Component::Box.defaults();
        defaults.layout.child_alignment.y = AlignY::Bottom;
        let horizontal_only = resolve(&defaults, Style::new().align("-c"));
        assert_eq!(horizontal_only.layout.child_alignment.y, AlignY::Bottom);
        assert_eq!(horizontal_only.layout.child_alignment.x, AlignX::CenterX);
    }

    #[test]
    fn bad_alignment_tokens() {
        let error = Component::Box.try_resolve(Style::new().align("xl")).unwrap_err();
        assert!(matches!(error, StyleError::Unknown { part: "vertical alignment", .. }));

        let error = Component::Box.try_resolve(Style::new().align("tcl")).unwrap_err();
        assert!(matches!(error, StyleError::TooLong { max: 2, .. }));
    }

    #[test]
    fn scroll_tokens() {
        let vertical = Component::Box.resolve(Style::new().scroll("v"));
        assert_eq!(vertical.scroll, ScrollConfig { horizontal: false, vertical: true });

        let horizontal = Component::Box.resolve(Style::new().scroll("h"));
        assert_eq!(horizontal.scroll, ScrollConfig { horizontal: true, vertical: false });

        let both = Component::Box.resolve(Style::new().scroll("b"));
        assert_eq!(both.scroll, ScrollConfig { horizontal: true, vertical: true });

        let none = Component::Box.resolve(Style::new().scroll(""));
        assert_eq!(none.scroll, ScrollConfig::default());

        assert!(Component::Box.try_resolve(Style::new().scroll("x")).is_err());
        assert!(Component::Box.try_resolve(Style::new().scroll("vh")).is_err());
    }

    #[test]
    fn corner_radius_all() {
        let resolved = Component::Box.resolve(Style::new().radius("a-sm"));
        assert_eq!(resolved.corner_radius, CornerRadius::from(4.0));
    }

    #[test]
    fn corner_radius_single_corner() {
        let resolved = Component::Box.resolve(Style::new().radius("tl-lg"));
        assert_eq!(
            resolved.corner_radius,
            CornerRadius {
                top_left: 8.0,
                top_right: 0.0,
                bottom_left: 0.0,
                bottom_right: 0.0,
            }
        );
    }

    #[test]
    fn corner_radius_keeps_other_corners() {
        let mut defaults = Component::Box.defaults();
        defaults.corner_radius = CornerRadius::from(1.0);

        let resolved = resolve(&defaults, Style::new().radius("r-3xl"));
        assert_eq!(
            resolved.corner_radius,
            CornerRadius {
                top_left: 1.0,
                top_right: 24.0,
                bottom_left: 1.0,
                bottom_right: 24.0,
            }
        );
    }

    #[test]
    fn corner_radius_sizes() {
        let sizes = [
            ("xs", 2.0),
            ("sm", 4.0),
            ("md", 6.0),
            ("lg", 8.0),
            ("xl", 12.0),
            ("2xl", 16.0),
            ("3xl", 24.0),
        ];
        for (size, expected) in sizes {
            let token = format!("b-{size}");
            let resolved = Component::Box.resolve(Style::new().radius(&token));
            assert_eq!(resolved.corner_radius.bottom_left, expected, "{token}");
            assert_eq!(resolved.corner_radius.bottom_right, expected, "{token}");
            assert_eq!(resolved.corner_radius.top_left, 0.0, "{token}");
        }
    }

    #[test]
    fn bad_corner_radius_tokens() {
        let error = Component::Box.try_resolve(Style::new().radius("tsm")).unwrap_err();
        assert!(matches!(error, StyleError::Malformed { field: StyleField::CornerRadius, .. }));

        let error = Component::Box.try_resolve(Style::new().radius("x-sm")).unwrap_err();
        assert!(matches!(error, StyleError::Unknown { part: "direction", .. }));

        let error = Component::Box.try_resolve(Style::new().radius("t-huge")).unwrap_err();
        assert!(matches!(error, StyleError::Unknown { part: "size", .. }));

        let error = Component::Box.try_resolve(Style::new().radius("tl-huge")).unwrap_err();
        assert!(matches!(error, StyleError::TooLong { .. }));
    }

    #[test]
    #[should_panic(expected = "corner radius token `x-sm`")]
    fn resolve_panics_on_bad_token() {
        Component::Box.resolve(Style::new().radius("x-sm"));
    }

    #[test]
    fn border_all_sides() {
        let resolved = Component::Box.resolve(Style::new().border(RED, "a-50"));
        assert_eq!(resolved.border.width, BorderWidth::all(50.0));
        assert_eq!(resolved.border.color, RED);
    }

    #[test]
    fn border_single_side_zeroes_the_rest() {
        let mut defaults = Component::Box.defaults();
        defaults.border.width = BorderWidth::all(3.0);

        let resolved = resolve(&defaults, Style::new().border(RED, "b-1.5"));
        assert_eq!(
            resolved.border.width,
            BorderWidth {
                left: 0.0,
                right: 0.0,
                top: 0.0,
                bottom: 1.5,
            }
        );
    }

    #[test]
    fn transparent_border_is_ignored() {
        let defaults = Component::Box.defaults();
        let transparent = Color::rgba(239.0, 68.0, 68.0, 0.0);

        let resolved = resolve(&defaults, Style::new().border(transparent, "a-50"));
        assert_eq!(resolved.border, defaults.border);

        // Not even parsed.
        let resolved = resolve(&defaults, Style::new().border(transparent, "nonsense"));
        assert_eq!(resolved.border, defaults.border);
    }

    #[test]
    fn bad_border_tokens() {
        let error = Component::Box.try_resolve(Style::new().border(RED, "a50")).unwrap_err();
        assert!(matches!(error, StyleError::Malformed { field: StyleField::Border, .. }));

        let error = Component::Box.try_resolve(Style::new().border(RED, "q-5")).unwrap_err();
        assert!(matches!(error, StyleError::Unknown { part: "side", .. }));

        let error = Component::Box.try_resolve(Style::new().border(RED, "a-x")).unwrap_err();
        assert!(matches!(error, StyleError::InvalidNumber { .. }));
    }

    #[test]
    fn sizing_tokens() {
        let resolved = Component::Box.resolve(Style::new().w("fixed-120").h("percent-50"));
        assert_eq!(resolved.layout.sizing.width, Sizing::Fixed(120.0));
        assert_eq!(resolved.layout.sizing.height, Sizing::Percent(50.0));

        let resolved = Component::Box.resolve(Style::new().w("percent-50").h("grow-10"));
        assert_eq!(resolved.layout.sizing.width, Sizing::Percent(50.0));
        assert_eq!(resolved.layout.sizing.height, Sizing::Grow(10.0, f32::MAX));

        let resolved = Component::Separator.resolve(Style::new().h("fit-0"));
        assert_eq!(resolved.layout.sizing.height, Sizing::Fit(0.0, f32::MAX));
        assert_eq!(resolved.layout.sizing.width, Sizing::Grow(0.0, f32::MAX));
    }

    #[test]
    fn bad_sizing_tokens() {
        let error = Component::Box.try_resolve(Style::new().w("fit0")).unwrap_err();
        assert!(matches!(error, StyleError::Malformed { field: StyleField::Width, .. }));

        let error = Component::Box.try_resolve(Style::new().h("Fixed-10")).unwrap_err();
        assert!(matches!(error, StyleError::Unknown { field: StyleField::Height, .. }));

        let error = Component::Box.try_resolve(Style::new().w("fixed-1e3")).unwrap_err();
        assert!(matches!(error, StyleError::InvalidNumber { .. }));

        let error = Component::Box.try_resolve(Style::new().w("fixed-1234567890")).unwrap_err();
        assert!(matches!(error, StyleError::TooLong { .. }));

        let error = Component::Box.try_resolve(Style::new().w("percent-150")).unwrap_err();
        assert!(matches!(error, StyleError::InvalidNumber { .. }));

        let error = Component::Box.try_resolve(Style::new().w("fixed-")).unwrap_err();
        assert!(matches!(error, StyleError::InvalidNumber { .. }));
    }
}
