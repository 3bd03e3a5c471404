//! Checkbox and radio widgets
//!
//! A square or round indicator followed by an optional label. A completed
//! click toggles a checkbox and checks a radio; a checked radio is only
//! cleared through [`Checkbox::set_checked`]. The colors combine the
//! interaction and checked axes.

use crate::base::WidgetBase;
use crate::painter::{self, Shape};
use crate::render_state::Response;
use crate::themeable::Themeable;
use crate::widget::{themeable_widget, Widget};
use vellum_core::events::Event;
use vellum_paint::{HAlign, PaintContext, Rect, VAlign};
use vellum_theme::Category;

/// Stroke width of the check mark relative to the indicator size
const CHECK_STROKE_RATIO: f32 = 0.12;
/// Diameter of the radio dot relative to the indicator size
const RADIO_DOT_RATIO: f32 = 0.5;

/// Indicator shape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Indicator {
    /// Rounded square with a check mark
    #[default]
    Box,
    /// Circle with an inner dot; ignores the corner radius
    Radio,
}

type ToggleHandler = Box<dyn FnMut(bool)>;

pub struct Checkbox {
    base: WidgetBase,
    label: String,
    indicator: Indicator,
    on_toggle: Option<ToggleHandler>,
}

impl Checkbox {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::checkable(Some(Category::Checkable)),
            label: label.into(),
            indicator: Indicator::Box,
            on_toggle: None,
        }
    }

    /// Create a radio-style indicator that clicks check but never uncheck
    pub fn radio(label: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::check_only(Some(Category::Checkable)),
            indicator: Indicator::Radio,
            ..Self::new(label)
        }
    }

    /// Set the initial checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.base.set_checked(checked);
        self
    }

    /// Set the callback run when a click changes the checked state
    pub fn on_toggle(mut self, handler: impl FnMut(bool) + 'static) -> Self {
        self.on_toggle = Some(Box::new(handler));
        self
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_checked(&self) -> bool {
        self.base.is_checked()
    }

    /// Set the checked state without running the toggle callback
    pub fn set_checked(&mut self, checked: bool) -> bool {
        self.base.set_checked(checked)
    }

    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        self.base.set_enabled(enabled)
    }

    /// Square area of the indicator at the start of the bounds
    fn indicator_rect(&self) -> Rect {
        let bounds = self.base.bounds();
        let size = bounds.height.min(self.base.style().font.line_height()).min(bounds.width);
        Rect::new(
            bounds.x,
            bounds.y + (bounds.height - size) / 2.0,
            size,
            size,
        )
    }
}

impl Widget for Checkbox {
    fn kind(&self) -> &'static str {
        match self.indicator {
            Indicator::Box => "Checkbox",
            Indicator::Radio => "Radio",
        }
    }

    fn handle_event(&mut self, event: &Event) -> Response {
        let was_checked = self.base.is_checked();
        let response = self.base.handle_event(event);
        if response.clicked && self.base.is_checked() != was_checked {
            let checked = self.base.is_checked();
            tracing::trace!("{} '{}' toggled to {}", self.kind(), self.label, checked);
            if let Some(handler) = self.on_toggle.as_mut() {
                handler(checked);
            }
        }
        response
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let style = self.base.style();
        let colors = self.base.colors();
        let indicator = self.indicator_rect();

        let shape = match self.indicator {
            Indicator::Box => Shape::RoundedRect,
            Indicator::Radio => Shape::Ellipse,
        };
        painter::paint_chrome(ctx, &indicator, shape, style, &colors);

        if self.base.is_checked() {
            match self.indicator {
                Indicator::Box => {
                    ctx.stroke_path(
                        painter::check_mark(&indicator),
                        style.accent,
                        indicator.width * CHECK_STROKE_RATIO,
                    );
                }
                Indicator::Radio => {
                    let dot = indicator.width * RADIO_DOT_RATIO;
                    let inset = (indicator.width - dot) / 2.0;
                    ctx.fill_ellipse(indicator.inset(inset, inset), style.accent);
                }
            }
        }

        if !self.label.is_empty() {
            let bounds = self.base.bounds();
            let offset = indicator.width + style.padding;
            let area = Rect::new(
                bounds.x + offset,
                bounds.y,
                (bounds.width - offset).max(0.0),
                bounds.height,
            );
            painter::paint_text(
                ctx,
                &self.label,
                area,
                &style.font,
                colors.text,
                HAlign::Start,
                VAlign::Middle,
            );
        }
    }

    themeable_widget!();
}

impl Themeable for Checkbox {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}

impl std::fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checkbox")
            .field("label", &self.label)
            .field("indicator", &self.indicator)
            .field("state", &self.base.render_state())
            .finish()
    }
}
