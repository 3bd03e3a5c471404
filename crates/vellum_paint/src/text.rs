//! Font descriptors and single-line text placement
//!
//! Text is measured with average advance metrics rather than real glyph
//! shaping: the host renderer shapes the final string, and this module only
//! decides where the text box sits inside a widget's content area.

use crate::path::Point;
use crate::primitives::Rect;

/// Average glyph advance as a fraction of the font size
const AVERAGE_ADVANCE: f32 = 0.55;
/// Extra advance applied to bold faces
const BOLD_WIDENING: f32 = 1.06;
/// Line height as a multiple of the font size
const LINE_HEIGHT: f32 = 1.25;

/// Font weight on the CSS 100–900 scale
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const LIGHT: FontWeight = FontWeight(300);
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const SEMIBOLD: FontWeight = FontWeight(600);
    pub const BOLD: FontWeight = FontWeight(700);

    pub fn is_bold(self) -> bool {
        self.0 >= Self::SEMIBOLD.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// A font descriptor: family, size in points, weight
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
    pub weight: FontWeight,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32, weight: FontWeight) -> Self {
        Self {
            family: family.into(),
            size,
            weight,
        }
    }

    /// Same font with a different family
    pub fn with_family(&self, family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            ..self.clone()
        }
    }

    pub fn line_height(&self) -> f32 {
        self.size * LINE_HEIGHT
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("sans-serif", 14.0, FontWeight::NORMAL)
    }
}

/// Horizontal alignment inside a content area
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Vertical alignment inside a content area
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Measured placement of one line of text
#[derive(Clone, Debug, PartialEq)]
pub struct TextLayout {
    /// Top-left corner of the text box
    pub origin: Point,
    pub width: f32,
    pub height: f32,
}

impl TextLayout {
    /// Approximate width and height of `text` set in `font`
    pub fn measure(text: &str, font: &FontSpec) -> (f32, f32) {
        let mut advance = font.size * AVERAGE_ADVANCE;
        if font.weight.is_bold() {
            advance *= BOLD_WIDENING;
        }
        (text.chars().count() as f32 * advance, font.line_height())
    }

    /// Place `text` inside `area` according to the alignments
    ///
    /// Text wider than the area is anchored at the start edge so the
    /// beginning stays visible; callers clip to `area`.
    pub fn place(text: &str, font: &FontSpec, area: &Rect, h: HAlign, v: VAlign) -> Self {
        let (width, height) = Self::measure(text, font);

        let x = if width >= area.width {
            area.x
        } else {
            match h {
                HAlign::Start => area.x,
                HAlign::Center => area.x + (area.width - width) / 2.0,
                HAlign::End => area.right() - width,
            }
        };
        let y = match v {
            VAlign::Top => area.y,
            VAlign::Middle => area.y + (area.height - height) / 2.0,
            VAlign::Bottom => area.bottom() - height,
        };

        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font() -> FontSpec {
        FontSpec::new("Inter", 10.0, FontWeight::NORMAL)
    }

    #[test]
    fn test_measure_scales_with_length() {
        let (w1, h) = TextLayout::measure("ab", &font());
        let (w2, _) = TextLayout::measure("abcd", &font());
        assert_eq!(w2, w1 * 2.0);
        assert_eq!(h, 12.5);
    }

    #[test]
    fn test_bold_is_wider() {
        let bold = FontSpec::new("Inter", 10.0, FontWeight::BOLD);
        assert!(TextLayout::measure("abc", &bold).0 > TextLayout::measure("abc", &font()).0);
    }

    #[test]
    fn test_place_center_middle() {
        let area = Rect::new(0.0, 0.0, 100.0, 40.0);
        let layout = TextLayout::place("abcd", &font(), &area, HAlign::Center, VAlign::Middle);
        // 4 chars * 5.5 = 22 wide, 12.5 tall
        assert_eq!(layout.origin, Point::new(39.0, 13.75));
    }

    #[test]
    fn test_place_end_bottom() {
        let area = Rect::new(10.0, 10.0, 100.0, 40.0);
        let layout = TextLayout::place("ab", &font(), &area, HAlign::End, VAlign::Bottom);
        assert_eq!(layout.origin, Point::new(99.0, 37.5));
    }

    #[test]
    fn test_overflowing_text_starts_at_edge() {
        let area = Rect::new(5.0, 0.0, 10.0, 20.0);
        let layout = TextLayout::place("overflowing", &font(), &area, HAlign::End, VAlign::Top);
        assert_eq!(layout.origin.x, 5.0);
    }
}
