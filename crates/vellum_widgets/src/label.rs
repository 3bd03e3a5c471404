//! Text label widget

use crate::base::WidgetBase;
use crate::painter;
use crate::themeable::Themeable;
use crate::widget::{themeable_widget, Widget};
use vellum_paint::{HAlign, PaintContext, VAlign};
use vellum_theme::{Category, LabelKind};

/// One line of static text
#[derive(Debug)]
pub struct Label {
    base: WidgetBase,
    text: String,
    h_align: HAlign,
    v_align: VAlign,
}

impl Label {
    /// Create a body text label
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::passive(Some(Category::Body)),
            text: text.into(),
            h_align: HAlign::Start,
            v_align: VAlign::Middle,
        }
    }

    /// Set the label kind
    pub fn with_kind(mut self, kind: LabelKind) -> Self {
        self.base.set_category(Some(kind.into()));
        self
    }

    /// Set the alignment inside the bounds
    pub fn align(mut self, h: HAlign, v: VAlign) -> Self {
        self.h_align = h;
        self.v_align = v;
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

    /// Show the label in the error color
    pub fn set_invalid(&mut self, invalid: bool) {
        let flags = self.base.flags().invalid(invalid);
        self.base.set_flags(flags);
    }
}

impl Widget for Label {
    fn kind(&self) -> &'static str {
        "Label"
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let style = self.base.style();
        let bounds = self.base.bounds();
        painter::paint_text(
            ctx,
            &self.text,
            painter::content_area(&bounds, style),
            &style.font,
            self.base.colors().text,
            self.h_align,
            self.v_align,
        );
    }

    themeable_widget!();
}

impl Themeable for Label {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use vellum_theme::{EmergencyTheme, Theme, ThemeRef};

    #[test]
    fn test_heading_uses_header_font() {
        let theme: ThemeRef = Rc::new(EmergencyTheme::new());
        let mut label = Label::new("Title").with_kind(LabelKind::Heading);
        label.apply_theme(&theme);
        assert_eq!(*label.font(), theme.typography().header);
    }

    #[test]
    fn test_invalid_switches_to_error_color() {
        let theme: ThemeRef = Rc::new(EmergencyTheme::new());
        let mut label = Label::new("Required");
        label.apply_theme(&theme);
        label.set_invalid(true);
        assert_eq!(label.style().foreground(), theme.palette().error);
        label.set_invalid(false);
        assert_ne!(label.style().foreground(), theme.palette().error);
    }

    #[test]
    fn test_set_text_redraws_on_change() {
        let mut label = Label::new("a");
        label.set_text("a");
        label.set_text("b");
        assert_eq!(label.base().redraw_count(), 1);
    }
}
