//! Progress bar - visual indicator of completion status
//!
//! A horizontal track with an indicator covering the completed fraction.
//! The theme supplies the track and indicator colors; an invalid bar uses
//! the error color.

use crate::base::WidgetBase;
use crate::painter;
use crate::themeable::Themeable;
use crate::widget::{themeable_widget, Widget};
use vellum_paint::{HAlign, PaintContext, Rect, VAlign};
use vellum_theme::Category;

#[derive(Debug)]
pub struct ProgressBar {
    base: WidgetBase,
    /// Completed fraction from 0.0 to 1.0
    value: f32,
    show_label: bool,
}

impl ProgressBar {
    pub fn new(value: f32) -> Self {
        Self {
            base: WidgetBase::passive(Some(Category::Progress)),
            value: clamp_fraction(value),
            show_label: false,
        }
    }

    /// Show the percentage centered on the bar
    pub fn with_label(mut self, show: bool) -> Self {
        self.show_label = show;
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the completed fraction; out-of-range values are clamped, NaN is 0
    pub fn set_value(&mut self, value: f32) -> bool {
        let value = clamp_fraction(value);
        if self.value == value {
            return false;
        }
        self.value = value;
        self.base.request_redraw();
        true
    }

    /// Show the bar in the error color
    pub fn set_invalid(&mut self, invalid: bool) {
        let flags = self.base.flags().invalid(invalid);
        self.base.set_flags(flags);
    }

    pub fn label_text(&self) -> String {
        format!("{}%", (self.value * 100.0).round() as u32)
    }
}

fn clamp_fraction(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl Widget for ProgressBar {
    fn kind(&self) -> &'static str {
        "ProgressBar"
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let style = self.base.style();
        let bounds = self.base.bounds();
        if bounds.is_empty() {
            return;
        }
        let colors = self.base.colors();
        let radius = style.corner_radius.min(bounds.height / 2.0);

        if !style.track.is_transparent() {
            ctx.fill_rounded_rect(bounds, radius, style.track);
        }
        if self.value > 0.0 {
            let indicator = Rect::new(bounds.x, bounds.y, bounds.width * self.value, bounds.height);
            ctx.fill_rounded_rect(indicator, radius, colors.fill);
        }
        if self.show_label {
            painter::paint_text(
                ctx,
                &self.label_text(),
                bounds,
                &style.font,
                colors.text,
                HAlign::Center,
                VAlign::Middle,
            );
        }
    }

    themeable_widget!();
}

impl Themeable for ProgressBar {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}
