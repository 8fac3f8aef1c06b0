// SPDX-License-Identifier: MPL-2.0
//! Text measurement boundary.
//!
//! The banner derives its height from the wrapped bounding box of its title.
//! Measurement itself is an ambient facility of the rendering environment, so
//! it is expressed as a trait: the sizing algorithm only depends on a wrapped
//! bounding box ("fit within a width, unbounded height"), not on any specific
//! text shaping backend.

use iced::Size;

/// Measures the rendered bounding box of text wrapped to a maximum width.
pub trait TextMeasurer {
    /// Returns the size of `content` rendered at `font_size`, word-wrapped to
    /// `max_width` with unbounded height.
    fn measure(&self, content: &str, font_size: f32, max_width: f32) -> Size;
}

/// Deterministic greedy word-wrap approximation.
///
/// Uses an average glyph advance proportional to the font size, so the crate
/// stays usable and testable without a font system. Applications that need
/// pixel-accurate wrapping can plug a renderer-backed [`TextMeasurer`] instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicMeasurer {
    /// Average glyph advance as a fraction of the font size.
    pub advance_ratio: f32,
    /// Line advance as a fraction of the font size.
    pub line_ratio: f32,
}

impl Default for HeuristicMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.52,
            line_ratio: 1.2,
        }
    }
}

impl TextMeasurer for HeuristicMeasurer {
    fn measure(&self, content: &str, font_size: f32, max_width: f32) -> Size {
        if content.split_whitespace().next().is_none() {
            return Size::ZERO;
        }

        let advance = font_size * self.advance_ratio;
        let max_columns = ((max_width / advance).floor().max(1.0)) as usize;

        // Greedy wrap: columns used per produced line.
        let mut lines: Vec<usize> = Vec::new();
        let mut column = 0usize;

        for word in content.split_whitespace() {
            let length = word.chars().count();

            if length > max_columns {
                // Break an overlong word across full lines.
                if column > 0 {
                    lines.push(column);
                }
                let mut rest = length;
                while rest > max_columns {
                    lines.push(max_columns);
                    rest -= max_columns;
                }
                column = rest;
                continue;
            }

            let needed = if column == 0 { length } else { column + 1 + length };
            if needed <= max_columns {
                column = needed;
            } else {
                lines.push(column);
                column = length;
            }
        }
        if column > 0 {
            lines.push(column);
        }

        let widest = lines.iter().copied().max().unwrap_or(0);
        let width = (widest as f32 * advance).min(max_width);
        let height = lines.len() as f32 * font_size * self.line_ratio;

        Size::new(width, height)
    }
}
