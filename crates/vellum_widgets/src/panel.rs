//! Panel widget
//!
//! A passive surface behind other widgets. The panel kind selects plain,
//! card or gradient styling.

use crate::base::WidgetBase;
use crate::painter::{self, Shape};
use crate::themeable::Themeable;
use crate::widget::{themeable_widget, Widget};
use vellum_paint::PaintContext;
use vellum_theme::{Category, PanelKind};

#[derive(Debug)]
pub struct Panel {
    base: WidgetBase,
}

impl Panel {
    pub fn new(kind: PanelKind) -> Self {
        Self {
            base: WidgetBase::passive(Some(kind.into())),
        }
    }

    pub fn card() -> Self {
        Self::new(PanelKind::Card)
    }

    pub fn gradient() -> Self {
        Self::new(PanelKind::Gradient)
    }

    pub fn set_kind(&mut self, kind: PanelKind) {
        self.base.set_category(Some(kind.into()));
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(PanelKind::Plain)
    }
}

impl Widget for Panel {
    fn kind(&self) -> &'static str {
        "Panel"
    }

    fn paint(&self, ctx: &mut PaintContext) {
        painter::paint_chrome(
            ctx,
            &self.base.bounds(),
            Shape::RoundedRect,
            self.base.style(),
            &self.base.colors(),
        );
    }

    themeable_widget!();
}

impl Themeable for Panel {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}
