//! Single-line text input
//!
//! Editing itself belongs to the host's text services; this widget keeps the
//! current text, shows a placeholder while empty and draws a caret while it
//! has focus.

use crate::base::WidgetBase;
use crate::painter::{self, Shape};
use crate::render_state::Response;
use crate::themeable::Themeable;
use crate::widget::{themeable_widget, Widget};
use vellum_core::events::Event;
use vellum_paint::{HAlign, PaintContext, PathBuilder, TextLayout, VAlign};
use vellum_theme::Category;

const CARET_WIDTH: f32 = 1.0;

#[derive(Debug)]
pub struct TextInput {
    base: WidgetBase,
    text: String,
    placeholder: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(Some(Category::TextInput)),
            text: String::new(),
            placeholder: String::new(),
        }
    }

    /// Set the placeholder shown while the text is empty
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text != text {
            self.text = text;
            self.base.request_redraw();
        }
    }

    pub fn is_focused(&self) -> bool {
        self.base.machine().is_focused()
    }

    pub fn is_invalid(&self) -> bool {
        self.base.flags().invalid
    }

    /// Mark the content as invalid; the theme's error colors apply
    pub fn set_invalid(&mut self, invalid: bool) {
        let flags = self.base.flags().invalid(invalid);
        self.base.set_flags(flags);
    }

    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        self.base.set_enabled(enabled)
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for TextInput {
    fn kind(&self) -> &'static str {
        "TextInput"
    }

    fn handle_event(&mut self, event: &Event) -> Response {
        let was_focused = self.is_focused();
        let mut response = self.base.handle_event(event);

        // The caret follows focus even where the interaction state hides it
        if self.is_focused() != was_focused && !response.changed {
            self.base.request_redraw();
            response.changed = true;
        }
        response
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let style = self.base.style();
        let bounds = self.base.bounds();
        let colors = self.base.colors();
        let area = painter::content_area(&bounds, style);

        painter::paint_chrome(ctx, &bounds, Shape::RoundedRect, style, &colors);

        if self.text.is_empty() {
            let muted = colors.text.with_alpha(colors.text.a * 0.5);
            painter::paint_text(
                ctx,
                &self.placeholder,
                area,
                &style.font,
                muted,
                HAlign::Start,
                VAlign::Middle,
            );
        } else {
            painter::paint_text(
                ctx,
                &self.text,
                area,
                &style.font,
                colors.text,
                HAlign::Start,
                VAlign::Middle,
            );
        }

        if self.is_focused() {
            let layout = TextLayout::place(
                &self.text,
                &style.font,
                &area,
                HAlign::Start,
                VAlign::Middle,
            );
            let x = (layout.origin.x + layout.width).min(area.right());
            let caret = PathBuilder::new()
                .move_to(x, layout.origin.y)
                .line_to(x, layout.origin.y + layout.height)
                .build();
            ctx.stroke_path(caret, colors.text, CARET_WIDTH);
        }
    }

    themeable_widget!();
}

impl Themeable for TextInput {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}
