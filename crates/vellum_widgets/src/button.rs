//! Button widget with FSM-driven interactions
//!
//! The Button widget provides:
//! - Visual states: normal, hovered, pressed, focused, disabled
//! - Theme-driven colors per action role
//! - A click callback and a pollable click flag

use crate::base::WidgetBase;
use crate::painter::{self, Shape};
use crate::render_state::{RenderState, Response};
use crate::themeable::Themeable;
use crate::widget::{themeable_widget, Widget};
use vellum_core::events::Event;
use vellum_paint::{HAlign, PaintContext, VAlign};
use vellum_theme::{ActionRole, Category};

type ClickHandler = Box<dyn FnMut()>;

/// A clickable, labeled action
pub struct Button {
    base: WidgetBase,
    label: String,
    align: HAlign,
    on_click: Option<ClickHandler>,
    /// Whether the button was clicked (cleared after reading)
    clicked: bool,
}

impl Button {
    /// Create a primary action button
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(Some(Category::PrimaryAction)),
            label: label.into(),
            align: HAlign::Center,
            on_click: None,
            clicked: false,
        }
    }

    /// Set the action role
    pub fn role(mut self, role: ActionRole) -> Self {
        self.base.set_category(Some(role.into()));
        self
    }

    /// Set the label alignment
    pub fn align(mut self, align: HAlign) -> Self {
        self.align = align;
        self
    }

    /// Set the click callback
    pub fn on_click(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        let label = label.into();
        if self.label != label {
            self.label = label;
            self.base.request_redraw();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.base.is_enabled()
    }

    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        self.base.set_enabled(enabled)
    }

    pub fn render_state(&self) -> RenderState {
        self.base.render_state()
    }

    /// Check if was clicked and clear the flag
    pub fn take_clicked(&mut self) -> bool {
        std::mem::take(&mut self.clicked)
    }

    pub fn redraw_count(&self) -> u64 {
        self.base.redraw_count()
    }
}

impl Widget for Button {
    fn kind(&self) -> &'static str {
        "Button"
    }

    fn handle_event(&mut self, event: &Event) -> Response {
        let response = self.base.handle_event(event);
        if response.clicked {
            self.clicked = true;
            tracing::trace!("Button '{}' clicked", self.label);
            if let Some(handler) = self.on_click.as_mut() {
                handler();
            }
        }
        response
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let style = self.base.style();
        let bounds = self.base.bounds();
        let colors = self.base.colors();

        painter::paint_chrome(ctx, &bounds, Shape::RoundedRect, style, &colors);
        painter::paint_text(
            ctx,
            &self.label,
            painter::content_area(&bounds, style),
            &style.font,
            colors.text,
            self.align,
            VAlign::Middle,
        );
    }

    themeable_widget!();
}

impl Themeable for Button {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("state", &self.base.render_state())
            .field("has_on_click", &self.on_click.is_some())
            .finish()
    }
}
