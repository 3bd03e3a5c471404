//! State shared by every themeable widget
//!
//! [`WidgetBase`] holds the last applied theme, the widget's category and
//! style flags, the resulting [`WidgetStyle`] snapshot, the interaction
//! machine, bounds and the redraw link. Concrete widgets embed one and add
//! their content (label text, progress value, ...).

use crate::redraw::RedrawHandle;
use crate::render_state::{Input, InteractionMachine, RenderState, Response};
use vellum_core::events::Event;
use vellum_paint::Rect;
use vellum_theme::{style_for, Category, ColorSet, StyleFlags, ThemeRef, WidgetStyle};

#[derive(Debug)]
pub struct WidgetBase {
    bounds: Rect,
    category: Option<Category>,
    flags: StyleFlags,
    style: WidgetStyle,
    /// Theme the current style was computed from
    theme: Option<ThemeRef>,
    machine: InteractionMachine,
    /// Passive widgets ignore pointer and focus input
    interactive: bool,
    redraw: Option<RedrawHandle>,
    redraw_count: u64,
}

impl WidgetBase {
    /// Interactive widget state
    pub fn new(category: Option<Category>) -> Self {
        Self {
            bounds: Rect::default(),
            category,
            flags: StyleFlags::default(),
            style: WidgetStyle::unstyled(),
            theme: None,
            machine: InteractionMachine::new(),
            interactive: true,
            redraw: None,
            redraw_count: 0,
        }
    }

    /// State for widgets whose clicks toggle a checked flag
    pub fn checkable(category: Option<Category>) -> Self {
        Self {
            machine: InteractionMachine::checkable(),
            ..Self::new(category)
        }
    }

    /// State for widgets that a click checks but never unchecks
    pub fn check_only(category: Option<Category>) -> Self {
        Self {
            machine: InteractionMachine::check_only(),
            ..Self::new(category)
        }
    }

    /// State for display-only widgets
    pub fn passive(category: Option<Category>) -> Self {
        Self {
            interactive: false,
            ..Self::new(category)
        }
    }

    // ========== Geometry ==========

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    // ========== Redraw ==========

    pub fn attach(&mut self, redraw: RedrawHandle) {
        self.redraw = Some(redraw);
    }

    /// Queue a repaint of this widget
    pub fn request_redraw(&mut self) {
        self.redraw_count += 1;
        if let Some(redraw) = &self.redraw {
            redraw.request();
        }
    }

    /// Redraw requests issued by this widget so far
    pub fn redraw_count(&self) -> u64 {
        self.redraw_count
    }

    // ========== Styling ==========

    pub fn style(&self) -> &WidgetStyle {
        &self.style
    }

    /// Replace the whole style; redraws only if it differs
    pub fn set_style(&mut self, style: WidgetStyle) -> bool {
        if self.style == style {
            return false;
        }
        self.style = style;
        self.request_redraw();
        true
    }

    /// Edit a copy of the style and store it if anything changed
    pub fn update_style(&mut self, edit: impl FnOnce(&mut WidgetStyle)) -> bool {
        let mut style = self.style.clone();
        edit(&mut style);
        self.set_style(style)
    }

    pub fn theme(&self) -> Option<&ThemeRef> {
        self.theme.as_ref()
    }

    /// Recompute the style from `theme` for the current category and flags
    pub fn apply_theme(&mut self, theme: &ThemeRef) -> bool {
        self.theme = Some(ThemeRef::clone(theme));
        self.restyle()
    }

    /// Recompute the style from the last applied theme, if any
    pub fn restyle(&mut self) -> bool {
        let Some(theme) = &self.theme else {
            return false;
        };
        let style = style_for(&**theme, self.category, self.flags);
        self.set_style(style)
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        if self.category != category {
            self.category = category;
            self.restyle();
        }
    }

    pub fn flags(&self) -> StyleFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: StyleFlags) {
        if self.flags != flags {
            self.flags = flags;
            self.restyle();
        }
    }

    // ========== Interaction ==========

    pub fn render_state(&self) -> RenderState {
        self.machine.state()
    }

    /// Colors for the current render state
    pub fn colors(&self) -> ColorSet {
        self.machine.state().colors(&self.style.colors)
    }

    pub fn machine(&self) -> &InteractionMachine {
        &self.machine
    }

    pub fn is_enabled(&self) -> bool {
        self.machine.is_enabled()
    }

    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        let changed = self.machine.set_enabled(enabled);
        if changed {
            self.request_redraw();
        }
        changed
    }

    pub fn is_checked(&self) -> bool {
        self.machine.is_checked()
    }

    pub fn set_checked(&mut self, checked: bool) -> bool {
        let changed = self.machine.set_checked(checked);
        if changed {
            self.request_redraw();
        }
        changed
    }

    pub fn handle_input(&mut self, input: Input) -> Response {
        if !self.interactive {
            return Response::default();
        }
        let response = self.machine.handle(input);
        if response.changed {
            self.request_redraw();
        }
        response
    }

    pub fn handle_event(&mut self, event: &Event) -> Response {
        match Input::from_event(event, &self.bounds) {
            Some(input) => self.handle_input(input),
            None => Response::default(),
        }
    }
}
