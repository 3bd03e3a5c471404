//! Shared paint routines
//!
//! Widgets paint only from their own [`WidgetStyle`] snapshot and render
//! state. The routines here build the chrome shape, fill it solid or with a
//! gradient, stroke the border and place text inside the padded area.

use vellum_paint::{
    Color, Ellipse, FontSpec, Gradient, HAlign, PaintContext, Path, PathBuilder, Rect,
    RoundedRect, VAlign,
};
use vellum_theme::{ColorSet, FillKind, GradientDirection, WidgetStyle};

/// Outline of a widget's chrome
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shape {
    /// Rounded rectangle using the style's corner radius
    #[default]
    RoundedRect,
    /// Ellipse inscribed in the bounds; ignores the corner radius
    Ellipse,
}

impl Shape {
    pub fn path(self, rect: &Rect, corner_radius: f32) -> Path {
        match self {
            Shape::RoundedRect => Path::rounded_rect(&RoundedRect::new(*rect, corner_radius)),
            Shape::Ellipse => Path::ellipse(&Ellipse::inscribed(rect)),
        }
    }
}

/// Area left for content once padding and border are removed
pub fn content_area(bounds: &Rect, style: &WidgetStyle) -> Rect {
    let inset = style.padding + style.border_width;
    bounds.inset(inset, inset)
}

/// Fill and stroke `rect` with the colors of the current state
pub fn paint_chrome(
    ctx: &mut PaintContext,
    rect: &Rect,
    shape: Shape,
    style: &WidgetStyle,
    colors: &ColorSet,
) {
    if rect.is_empty() {
        return;
    }
    let path = shape.path(rect, style.corner_radius);

    match style.fill_kind {
        FillKind::Solid => {
            if !colors.fill.is_transparent() {
                ctx.fill_path(path.clone(), colors.fill);
            }
        }
        FillKind::Gradient { end, direction } => {
            let gradient = match direction {
                GradientDirection::Vertical => Gradient::vertical(rect, colors.fill, end),
                GradientDirection::Horizontal => Gradient::horizontal(rect, colors.fill, end),
            };
            ctx.fill_path(path.clone(), gradient);
        }
    }

    if style.border_width > 0.0 && !colors.border.is_transparent() {
        ctx.stroke_path(path, colors.border, style.border_width);
    }
}

/// Draw one line of text aligned inside `area`
pub fn paint_text(
    ctx: &mut PaintContext,
    text: &str,
    area: Rect,
    font: &FontSpec,
    color: Color,
    h: HAlign,
    v: VAlign,
) {
    if color.is_transparent() {
        return;
    }
    ctx.draw_text(text, area, font, color, h, v);
}

/// Check mark polyline inside an indicator box
pub fn check_mark(rect: &Rect) -> Path {
    PathBuilder::new()
        .move_to(rect.x + rect.width * 0.22, rect.y + rect.height * 0.52)
        .line_to(rect.x + rect.width * 0.42, rect.y + rect.height * 0.72)
        .line_to(rect.x + rect.width * 0.78, rect.y + rect.height * 0.30)
        .build()
}
