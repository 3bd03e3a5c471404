//! Gradient fills

use crate::color::Color;
use crate::path::Point;
use crate::primitives::Rect;
use smallvec::{smallvec, SmallVec};

/// A gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32, // 0.0 to 1.0
    pub color: Color,
}

/// Linear gradient between two points
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub start: Point,
    pub end: Point,
    pub stops: SmallVec<[GradientStop; 4]>,
}

impl Gradient {
    /// Create a simple linear gradient between two colors
    pub fn linear_simple(start: Point, end: Point, from: Color, to: Color) -> Self {
        Self {
            start,
            end,
            stops: smallvec![
                GradientStop {
                    offset: 0.0,
                    color: from,
                },
                GradientStop {
                    offset: 1.0,
                    color: to,
                },
            ],
        }
    }

    /// Top-to-bottom gradient spanning `rect`
    pub fn vertical(rect: &Rect, from: Color, to: Color) -> Self {
        let x = rect.center().x;
        Self::linear_simple(Point::new(x, rect.y), Point::new(x, rect.bottom()), from, to)
    }

    /// Left-to-right gradient spanning `rect`
    pub fn horizontal(rect: &Rect, from: Color, to: Color) -> Self {
        let y = rect.center().y;
        Self::linear_simple(Point::new(rect.x, y), Point::new(rect.right(), y), from, to)
    }

    /// Color at `offset` along the gradient axis
    pub fn sample(&self, offset: f32) -> Color {
        let offset = offset.clamp(0.0, 1.0);
        let Some(first) = self.stops.first() else {
            return Color::TRANSPARENT;
        };
        if offset <= first.offset {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if offset <= b.offset {
                let span = (b.offset - a.offset).max(f32::EPSILON);
                return Color::lerp(&a.color, &b.color, (offset - a.offset) / span);
            }
        }
        self.stops[self.stops.len() - 1].color
    }
}
