//! Text measurement for the layout engine, and the font table both measurement and drawing
//! look fonts up in.

use std::rc::Rc;

use crate::color::Color;
use crate::math::Dimensions;

/// First character of the printable ASCII range, where glyph tables start by default.
pub const FIRST_PRINTABLE_CHAR: char = ' ';

/// Glyph used for characters the font does not cover.
const REPLACEMENT_CHAR: char = '?';

/// Configuration settings for measuring and drawing a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextConfig {
    /// The color of the text.
    pub color: Color,
    /// Index into the [`FontTable`].
    pub font_id: u16,
    /// The font size of the text.
    pub font_size: u16,
    /// The spacing between letters.
    pub letter_spacing: u16,
    /// The height of each line of text.
    pub line_height: u16,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            font_id: 0,
            font_size: 20,
            letter_spacing: 0,
            line_height: 0,
        }
    }
}

impl TextConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text color.
    #[inline]
    pub fn color(&mut self, color: impl Into<Color>) -> &mut Self {
        self.color = color.into();
        self
    }

    #[inline]
    pub fn font_id(&mut self, id: u16) -> &mut Self {
        self.font_id = id;
        self
    }

    /// Sets the font size.
    #[inline]
    pub fn font_size(&mut self, size: u16) -> &mut Self {
        self.font_size = size;
        self
    }

    /// Sets the letter spacing.
    #[inline]
    pub fn letter_spacing(&mut self, spacing: u16) -> &mut Self {
        self.letter_spacing = spacing;
        self
    }

    /// Sets the line height.
    #[inline]
    pub fn line_height(&mut self, height: u16) -> &mut Self {
        self.line_height = height;
        self
    }

    #[inline]
    pub fn end(&self) -> Self {
        *self
    }
}

/// Horizontal metrics of one glyph at the font's base size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlyphMetrics {
    /// Pen advance after the glyph. `0.0` when the font does not provide one.
    pub advance_x: f32,
    pub offset_x: f32,
    /// Width of the glyph's bitmap.
    pub width: f32,
}

impl GlyphMetrics {
    /// The advance, or the bitmap extent for fonts that leave the advance out.
    pub fn advance(&self) -> f32 {
        if self.advance_x != 0.0 {
            self.advance_x
        } else {
            self.width + self.offset_x
        }
    }
}

/// Glyph table of a font rasterized at `base_size`.
#[derive(Debug, Clone, PartialEq)]
pub struct FontMetrics {
    pub base_size: u16,
    /// Character of `glyphs[0]`.
    pub first_char: char,
    pub glyphs: Vec<GlyphMetrics>,
}

impl FontMetrics {
    pub fn new(base_size: u16, glyphs: Vec<GlyphMetrics>) -> Self {
        Self {
            base_size,
            first_char: FIRST_PRINTABLE_CHAR,
            glyphs,
        }
    }

    /// A font that failed to load. Lookups through a [`FontTable`] skip it.
    pub fn empty(base_size: u16) -> Self {
        Self::new(base_size, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Metrics of `c`, or of `?` when the font has no glyph for `c`.
    pub fn glyph(&self, c: char) -> GlyphMetrics {
        self.index_of(c)
            .or_else(|| self.index_of(REPLACEMENT_CHAR))
            .map(|index| self.glyphs[index])
            .unwrap_or_default()
    }

    fn index_of(&self, c: char) -> Option<usize> {
        let index = (c as u32).checked_sub(self.first_char as u32)? as usize;
        (index < self.glyphs.len()).then_some(index)
    }

    /// Width of one line at the base size.
    fn line_width(&self, line: &str) -> f32 {
        line.chars().map(|c| self.glyph(c).advance()).sum()
    }
}

/// A loaded font: its metrics plus whatever handle the backend draws with.
#[derive(Debug, Clone)]
pub struct Font<F> {
    pub metrics: FontMetrics,
    pub face: F,
}

/// Fonts indexed by [`TextConfig::font_id`].
#[derive(Debug, Clone)]
pub struct FontTable<F> {
    fonts: Vec<Font<F>>,
    fallback: Font<F>,
}

impl<F> FontTable<F> {
    /// `fallback` is used for unknown ids and for fonts without glyphs.
    pub fn new(fallback: Font<F>) -> Self {
        Self {
            fonts: Vec::new(),
            fallback,
        }
    }

    /// Adds a font and returns its id.
    pub fn push(&mut self, font: Font<F>) -> u16 {
        self.fonts.push(font);
        (self.fonts.len() - 1) as u16
    }

    pub fn get(&self, font_id: u16) -> &Font<F> {
        match self.fonts.get(font_id as usize) {
            Some(font) if !font.metrics.is_empty() => font,
            _ => &self.fallback,
        }
    }

    pub fn fallback(&self) -> &Font<F> {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

/// Size of `text` in `config`'s font.
///
/// The width is the widest `\n`-separated line. The height is the font size, also for
/// multi-line text.
pub fn measure_text<F>(text: &str, config: &TextConfig, fonts: &FontTable<F>) -> Dimensions {
    let metrics = &fonts.get(config.font_id).metrics;
    let font_size = config.font_size as f32;
    let scale = if metrics.base_size == 0 {
        1.0
    } else {
        font_size / metrics.base_size as f32
    };

    let max_width = text
        .split('\n')
        .map(|line| metrics.line_width(line))
        .fold(0.0, f32::max);

    Dimensions::new(max_width * scale, font_size)
}

/// The measurement callback the layout engine stores and calls for every text run.
pub fn create_measure_text_function<F>(
    fonts: Rc<FontTable<F>>,
) -> impl Fn(&str, &TextConfig) -> Dimensions + 'static
where
    F: 'static,
{
    move |text: &str, config: &TextConfig| measure_text(text, config, &fonts)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every printable ASCII glyph 10 wide at base size 20, except `i` which relies on
    /// its bitmap extent.
    fn metrics() -> FontMetrics {
        let glyphs = (' '..='~')
            .map(|c| match c {
                'i' => GlyphMetrics {
                    advance_x: 0.0,
                    offset_x: 1.0,
                    width: 3.0,
                },
                '?' => GlyphMetrics {
                    advance_x: 7.0,
                    ..Default::default()
                },
                _ => GlyphMetrics {
                    advance_x: 10.0,
                    ..Default::default()
                },
            })
            .collect();
        FontMetrics::new(20, glyphs)
    }

    fn table() -> FontTable<&'static str> {
        let mut table = FontTable::new(Font {
            metrics: FontMetrics::new(
                10,
                vec![
                    GlyphMetrics {
                        advance_x: 1.0,
                        ..Default::default()
                    };
                    95
                ],
            ),
            face: "fallback",
        });
        table.push(Font {
            metrics: metrics(),
            face: "regular",
        });
        table.push(Font {
            metrics: FontMetrics::empty(20),
            face: "missing",
        });
        table
    }

    fn config(font_id: u16, font_size: u16) -> TextConfig {
        TextConfig::new().font_id(font_id).font_size(font_size).end()
    }

    #[test]
    fn single_line() {
        let size = measure_text("abc", &config(0, 20), &table());
        assert_eq!(size, Dimensions::new(30.0, 20.0));
    }

    #[test]
    fn scales_with_font_size() {
        let size = measure_text("abc", &config(0, 40), &table());
        assert_eq!(size, Dimensions::new(60.0, 40.0));
    }

    #[test]
    fn widest_line_wins() {
        let size = measure_text("ab\nabcd\nc", &config(0, 20), &table());
        assert_eq!(size, Dimensions::new(40.0, 20.0));

        let trailing = measure_text("abcd\n", &config(0, 20), &table());
        assert_eq!(trailing.width, 40.0);
    }

    #[test]
    fn zero_advance_uses_bitmap_extent() {
        let size = measure_text("ii", &config(0, 20), &table());
        assert_eq!(size.width, 8.0);
    }

    #[test]
    fn unknown_characters_measure_as_question_mark() {
        let size = measure_text("é\t", &config(0, 20), &table());
        assert_eq!(size.width, 14.0);
    }

    #[test]
    fn empty_text() {
        let size = measure_text("", &config(0, 18), &table());
        assert_eq!(size, Dimensions::new(0.0, 18.0));
    }

    #[test]
    fn fallback_font() {
        let table = table();
        assert_eq!(table.get(0).face, "regular");
        assert_eq!(table.get(1).face, "fallback");
        assert_eq!(table.get(7).face, "fallback");

        // Fallback glyphs are 1 wide at base size 10.
        let size = measure_text("abc", &config(1, 20), &table);
        assert_eq!(size, Dimensions::new(6.0, 20.0));
    }

    #[test]
    fn measure_function_shares_the_table() {
        let fonts = Rc::new(table());
        let measure = create_measure_text_function(fonts.clone());
        assert_eq!(measure("ab", &config(0, 20)), Dimensions::new(20.0, 20.0));
        assert_eq!(Rc::strong_count(&fonts), 2);
    }
}
