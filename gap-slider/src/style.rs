//! Visual style for the gap slider.
//!
//! Styles are plain values. Build one from [`GapSliderStyle::default`] and
//! adjust it with the generated setters:
//!
//! ```
//! use gap_slider::{Color, GapSliderStyle, ThumbStyle};
//!
//! let style = GapSliderStyle::default()
//!     .thumb_style(ThumbStyle::Line)
//!     .corner_radius(4.0)
//!     .tint_color(Color::BLACK.with_alpha(0.3));
//! assert_eq!(style.thumb_style, ThumbStyle::Line);
//! ```
use derive_setters::Setters;

use crate::Color;

/// Glyph drawn on each thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThumbStyle {
    /// A short vertical line through the thumb center.
    Line,
    /// A chevron pointing away from the selected range.
    #[default]
    Arrow,
    /// Plain thumb, no glyph.
    None,
}

/// Colors and shapes used when drawing the slider.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GapSliderStyle {
    /// Glyph drawn on both thumbs.
    pub thumb_style: ThumbStyle,
    /// Corner radius of the thumbs, in pixels.
    pub corner_radius: f32,
    /// Color of the dimmed overlay outside the selected range, also used for
    /// thumb glyphs.
    pub tint_color: Color,
    /// Fill color of the thumbs.
    pub foreground_color: Color,
    /// Color behind the whole control.
    pub background_color: Color,
}

impl Default for GapSliderStyle {
    fn default() -> Self {
        Self {
            thumb_style: ThumbStyle::Arrow,
            corner_radius: 2.0,
            tint_color: Color::BLACK.with_alpha(0.5),
            foreground_color: Color::gray(0.9, 0.8),
            background_color: Color::TRANSPARENT,
        }
    }
}
