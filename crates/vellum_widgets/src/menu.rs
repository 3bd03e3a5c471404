//! Menu surface and menu items
//!
//! A [`Menu`] is the passive surface; its entries are [`MenuItem`] children
//! in the widget tree. The active item (current page, selected entry) is
//! highlighted through the `active` style flag.

use crate::base::WidgetBase;
use crate::painter::{self, Shape};
use crate::render_state::Response;
use crate::themeable::Themeable;
use crate::widget::{themeable_widget, Widget};
use vellum_core::events::Event;
use vellum_paint::{HAlign, PaintContext, VAlign};
use vellum_theme::Category;

#[derive(Debug)]
pub struct Menu {
    base: WidgetBase,
}

impl Menu {
    pub fn new() -> Self {
        Self {
            base: WidgetBase::passive(Some(Category::Menu)),
        }
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Menu {
    fn kind(&self) -> &'static str {
        "Menu"
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

impl Themeable for Menu {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}

type SelectHandler = Box<dyn FnMut()>;

pub struct MenuItem {
    base: WidgetBase,
    label: String,
    on_select: Option<SelectHandler>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(Some(Category::MenuItem)),
            label: label.into(),
            on_select: None,
        }
    }

    /// Set the callback run when the item is clicked
    pub fn on_select(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }

    /// Set the initial active flag
    pub fn active(mut self, active: bool) -> Self {
        self.set_active(active);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_active(&self) -> bool {
        self.base.flags().active
    }

    pub fn set_active(&mut self, active: bool) {
        let flags = self.base.flags().active(active);
        self.base.set_flags(flags);
    }

    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        self.base.set_enabled(enabled)
    }
}

impl Widget for MenuItem {
    fn kind(&self) -> &'static str {
        "MenuItem"
    }

    fn handle_event(&mut self, event: &Event) -> Response {
        let response = self.base.handle_event(event);
        if response.clicked {
            if let Some(handler) = self.on_select.as_mut() {
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
            HAlign::Start,
            VAlign::Middle,
        );
    }

    themeable_widget!();
}

impl Themeable for MenuItem {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}

impl std::fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.label)
            .field("active", &self.is_active())
            .field("state", &self.base.render_state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use vellum_core::events::event_types;
    use vellum_paint::Color;
    use vellum_theme::{EmergencyTheme, Theme, ThemeRef};

    #[test]
    fn test_active_item_is_highlighted() {
        let theme: ThemeRef = Rc::new(EmergencyTheme::new());
        let mut item = MenuItem::new("Home");
        item.apply_theme(&theme);
        assert_eq!(item.fill_color(), Color::TRANSPARENT);

        item.set_active(true);
        assert!(item.is_active());
        assert_eq!(item.fill_color(), theme.palette().primary);
    }

    #[test]
    fn test_select_runs_on_click() {
        let selected = Rc::new(Cell::new(false));
        let flag = Rc::clone(&selected);
        let mut item = MenuItem::new("Open").on_select(move || flag.set(true));

        item.handle_event(&Event::simple(event_types::POINTER_ENTER));
        item.handle_event(&Event::simple(event_types::POINTER_DOWN));
        item.handle_event(&Event::simple(event_types::POINTER_UP));
        assert!(selected.get());
    }

    #[test]
    fn test_menu_surface() {
        let theme: ThemeRef = Rc::new(EmergencyTheme::new());
        let mut menu = Menu::new();
        menu.apply_theme(&theme);
        assert_eq!(menu.fill_color(), theme.palette().surface);
    }
}
