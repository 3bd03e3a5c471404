//! Geometric primitives

use crate::path::Point;

/// A rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle at the origin with the given size
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Shrink by `dx` on the left/right and `dy` on the top/bottom
    ///
    /// The result never has a negative size.
    pub fn inset(&self, dx: f32, dy: f32) -> Self {
        let dx = dx.min(self.width / 2.0);
        let dy = dy.min(self.height / 2.0);
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: (self.width - 2.0 * dx).max(0.0),
            height: (self.height - 2.0 * dy).max(0.0),
        }
    }

    /// Same size, placed at the origin (widget-local space)
    pub fn local(&self) -> Self {
        Self::from_size(self.width, self.height)
    }
}

/// A rounded rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub corner_radius: CornerRadius,
}

impl RoundedRect {
    /// Uniform corner radius, clamped so opposite corners never overlap
    pub fn new(rect: Rect, radius: f32) -> Self {
        Self {
            rect,
            corner_radius: CornerRadius::uniform(radius).clamped(&rect),
        }
    }
}

/// Corner radius for rounded rectangles
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Limit every corner to half the shorter side of `rect`
    pub fn clamped(self, rect: &Rect) -> Self {
        let max = (rect.width.min(rect.height) / 2.0).max(0.0);
        let clamp = |r: f32| r.clamp(0.0, max);
        Self {
            top_left: clamp(self.top_left),
            top_right: clamp(self.top_right),
            bottom_right: clamp(self.bottom_right),
            bottom_left: clamp(self.bottom_left),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.top_left == 0.0
            && self.top_right == 0.0
            && self.bottom_right == 0.0
            && self.bottom_left == 0.0
    }
}

/// An ellipse
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ellipse {
    pub center: Point,
    pub radius_x: f32,
    pub radius_y: f32,
}

impl Ellipse {
    /// The ellipse inscribed in `rect`
    pub fn inscribed(rect: &Rect) -> Self {
        Self {
            center: rect.center(),
            radius_x: rect.width / 2.0,
            radius_y: rect.height / 2.0,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        if self.radius_x <= 0.0 || self.radius_y <= 0.0 {
            return false;
        }
        let dx = (point.x - self.center.x) / self.radius_x;
        let dy = (point.y - self.center.y) / self.radius_y;
        dx * dx + dy * dy <= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_never_negative() {
        let rect = Rect::new(10.0, 10.0, 20.0, 8.0);
        let inner = rect.inset(4.0, 6.0);
        assert_eq!(inner, Rect::new(14.0, 14.0, 12.0, 0.0));
    }

    #[test]
    fn test_corner_radius_clamped() {
        let rounded = RoundedRect::new(Rect::from_size(100.0, 20.0), 50.0);
        assert_eq!(rounded.corner_radius, CornerRadius::uniform(10.0));
    }

    #[test]
    fn test_ellipse_contains() {
        let ellipse = Ellipse::inscribed(&Rect::from_size(20.0, 10.0));
        assert!(ellipse.contains(Point::new(10.0, 5.0)));
        assert!(!ellipse.contains(Point::new(0.5, 0.5)));
    }
}
