//! Path building and representation

use crate::primitives::{Ellipse, Rect, RoundedRect};
use smallvec::SmallVec;

/// Control-point distance for approximating a quarter circle with a cubic Bézier
const KAPPA: f32 = 0.552_284_8;

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Path command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    Close,
}

/// A 2D path composed of commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 16]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Closed outline of a rounded rectangle
    ///
    /// A zero radius produces a plain four-sided polygon.
    pub fn rounded_rect(shape: &RoundedRect) -> Self {
        let r = shape.rect;
        let c = shape.corner_radius;
        if c.is_zero() {
            return Self::rect(&r);
        }

        let (left, top, right, bottom) = (r.x, r.y, r.right(), r.bottom());
        PathBuilder::new()
            .move_to(left + c.top_left, top)
            .line_to(right - c.top_right, top)
            .corner_to(right, top, right, top + c.top_right)
            .line_to(right, bottom - c.bottom_right)
            .corner_to(right, bottom, right - c.bottom_right, bottom)
            .line_to(left + c.bottom_left, bottom)
            .corner_to(left, bottom, left, bottom - c.bottom_left)
            .line_to(left, top + c.top_left)
            .corner_to(left, top, left + c.top_left, top)
            .close()
            .build()
    }

    /// Closed outline of an axis-aligned rectangle
    pub fn rect(r: &Rect) -> Self {
        PathBuilder::new()
            .move_to(r.x, r.y)
            .line_to(r.right(), r.y)
            .line_to(r.right(), r.bottom())
            .line_to(r.x, r.bottom())
            .close()
            .build()
    }

    /// Closed outline of an ellipse made of four cubic segments
    pub fn ellipse(e: &Ellipse) -> Self {
        let (cx, cy) = (e.center.x, e.center.y);
        let (rx, ry) = (e.radius_x, e.radius_y);
        let (ox, oy) = (rx * KAPPA, ry * KAPPA);

        PathBuilder::new()
            .move_to(cx + rx, cy)
            .cubic_to(cx + rx, cy + oy, cx + ox, cy + ry, cx, cy + ry)
            .cubic_to(cx - ox, cy + ry, cx - rx, cy + oy, cx - rx, cy)
            .cubic_to(cx - rx, cy - oy, cx - ox, cy - ry, cx, cy - ry)
            .cubic_to(cx + ox, cy - ry, cx + rx, cy - oy, cx + rx, cy)
            .close()
            .build()
    }
}

/// Builder for constructing paths
pub struct PathBuilder {
    path: Path,
    current: Point,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            path: Path::new(),
            current: Point::ZERO,
        }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        self.path.commands.push(PathCommand::MoveTo(point));
        self.current = point;
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        self.path.commands.push(PathCommand::LineTo(point));
        self.current = point;
        self
    }

    pub fn cubic_to(mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) -> Self {
        let end = Point::new(x, y);
        self.path.commands.push(PathCommand::CubicTo {
            control1: Point::new(c1x, c1y),
            control2: Point::new(c2x, c2y),
            end,
        });
        self.current = end;
        self
    }

    /// Quarter-circle arc from the current point to `(x, y)`
    ///
    /// `(kx, ky)` is the bounding-box corner the arc bulges towards.
    pub fn corner_to(self, kx: f32, ky: f32, x: f32, y: f32) -> Self {
        let p0 = self.current;
        let c1 = (p0.x + (kx - p0.x) * KAPPA, p0.y + (ky - p0.y) * KAPPA);
        let c2 = (x + (kx - x) * KAPPA, y + (ky - y) * KAPPA);
        self.cubic_to(c1.0, c1.1, c2.0, c2.1, x, y)
    }

    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self
    }

    pub fn build(self) -> Path {
        self.path
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_rect_has_four_arcs() {
        let shape = RoundedRect::new(Rect::new(0.0, 0.0, 40.0, 20.0), 4.0);
        let path = Path::rounded_rect(&shape);
        let arcs = path
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCommand::CubicTo { .. }))
            .count();
        assert_eq!(arcs, 4);
        assert_eq!(path.commands().first(), Some(&PathCommand::MoveTo(Point::new(4.0, 0.0))));
        assert_eq!(path.commands().last(), Some(&PathCommand::Close));
    }

    #[test]
    fn test_zero_radius_is_plain_rect() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let shape = RoundedRect::new(rect, 0.0);
        assert_eq!(Path::rounded_rect(&shape), Path::rect(&rect));
        assert_eq!(Path::rect(&rect).commands().len(), 5);
    }

    #[test]
    fn test_corner_arc_ends_on_edge() {
        let shape = RoundedRect::new(Rect::new(0.0, 0.0, 40.0, 20.0), 5.0);
        let path = Path::rounded_rect(&shape);
        match path.commands()[2] {
            PathCommand::CubicTo { control1, end, .. } => {
                assert_eq!(end, Point::new(40.0, 5.0));
                // First control point stays on the top edge
                assert_eq!(control1.y, 0.0);
            }
            other => panic!("expected corner arc, got {:?}", other),
        }
    }

    #[test]
    fn test_ellipse_segments() {
        let ellipse = Ellipse::inscribed(&Rect::from_size(10.0, 10.0));
        let path = Path::ellipse(&ellipse);
        assert_eq!(path.commands().len(), 6);
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(10.0, 5.0)));
    }
}
