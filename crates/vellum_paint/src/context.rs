//! Paint context - the main drawing API

use crate::color::Color;
use crate::gradient::Gradient;
use crate::path::Path;
use crate::primitives::*;
use crate::text::{FontSpec, HAlign, TextLayout, VAlign};

/// Fill style for shapes
#[derive(Clone, Debug, PartialEq)]
pub enum FillStyle {
    Color(Color),
    Gradient(Gradient),
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::Color(color)
    }
}

impl From<Gradient> for FillStyle {
    fn from(gradient: Gradient) -> Self {
        FillStyle::Gradient(gradient)
    }
}

/// Stroke style
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// A paint command for the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    FillPath {
        path: Path,
        style: FillStyle,
    },
    StrokePath {
        path: Path,
        style: StrokeStyle,
    },
    DrawText {
        text: String,
        layout: TextLayout,
        font: FontSpec,
        color: Color,
    },
    PushClip {
        rect: Rect,
    },
    PopClip,
}

/// The paint context handed to a widget's paint callback
///
/// Commands are recorded in order; the host renderer replays them.
pub struct PaintContext {
    commands: Vec<PaintCommand>,
    clip_stack: Vec<Rect>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            clip_stack: Vec::new(),
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    // === Path drawing ===

    pub fn fill_path(&mut self, path: Path, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::FillPath {
            path,
            style: style.into(),
        });
    }

    pub fn stroke_path(&mut self, path: Path, color: Color, width: f32) {
        self.commands.push(PaintCommand::StrokePath {
            path,
            style: StrokeStyle { color, width },
        });
    }

    // === Shapes ===

    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, style: impl Into<FillStyle>) {
        self.fill_path(Path::rounded_rect(&RoundedRect::new(rect, radius)), style);
    }

    pub fn fill_ellipse(&mut self, rect: Rect, style: impl Into<FillStyle>) {
        self.fill_path(Path::ellipse(&Ellipse::inscribed(&rect)), style);
    }

    // === Text ===

    /// Draw one line of text aligned inside `area`, clipped to it
    pub fn draw_text(
        &mut self,
        text: impl Into<String>,
        area: Rect,
        font: &FontSpec,
        color: Color,
        h: HAlign,
        v: VAlign,
    ) {
        let text = text.into();
        if text.is_empty() || area.is_empty() {
            return;
        }
        let layout = TextLayout::place(&text, font, &area, h, v);
        self.push_clip(area);
        self.commands.push(PaintCommand::DrawText {
            text,
            layout,
            font: font.clone(),
            color,
        });
        self.pop_clip();
    }

    // === Clipping ===

    pub fn push_clip(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
        self.commands.push(PaintCommand::PushClip { rect });
    }

    pub fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_none() {
            tracing::warn!("pop_clip called with an empty clip stack");
            return;
        }
        self.commands.push(PaintCommand::PopClip);
    }

    /// Current clip depth
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FontWeight;

    #[test]
    fn test_draw_text_is_clipped() {
        let mut ctx = PaintContext::new();
        let font = FontSpec::new("Inter", 12.0, FontWeight::NORMAL);
        ctx.draw_text(
            "Save",
            Rect::from_size(80.0, 24.0),
            &font,
            Color::BLACK,
            HAlign::Center,
            VAlign::Middle,
        );

        let commands = ctx.commands();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], PaintCommand::PushClip { .. }));
        assert!(matches!(commands[1], PaintCommand::DrawText { .. }));
        assert_eq!(commands[2], PaintCommand::PopClip);
        assert_eq!(ctx.clip_depth(), 0);
    }

    #[test]
    fn test_empty_text_draws_nothing() {
        let mut ctx = PaintContext::new();
        ctx.draw_text(
            "",
            Rect::from_size(80.0, 24.0),
            &FontSpec::default(),
            Color::BLACK,
            HAlign::Start,
            VAlign::Top,
        );
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_unbalanced_pop_is_ignored() {
        let mut ctx = PaintContext::new();
        ctx.pop_clip();
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_take_commands_drains() {
        let mut ctx = PaintContext::new();
        ctx.fill_rounded_rect(Rect::from_size(10.0, 10.0), 2.0, Color::WHITE);
        ctx.fill_ellipse(Rect::from_size(10.0, 10.0), Color::BLACK);
        assert_eq!(ctx.take_commands().len(), 2);
        assert!(ctx.commands().is_empty());
    }
}
