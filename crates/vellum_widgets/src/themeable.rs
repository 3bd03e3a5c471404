//! The theming capability of a widget

use crate::base::WidgetBase;
use vellum_paint::{Color, FontSpec};
use vellum_theme::{Category, ThemeRef, ThemeRegistry, WidgetStyle};

/// A widget that accepts themes
///
/// Implementors only expose their [`WidgetBase`]; everything else has a
/// default. Applying a theme replaces the whole style at once. Manual edits
/// through the setters last until the next application.
pub trait Themeable {
    fn base(&self) -> &WidgetBase;

    fn base_mut(&mut self) -> &mut WidgetBase;

    /// Style this widget with `theme`'s rule for its category
    fn apply_theme(&mut self, theme: &ThemeRef) {
        self.base_mut().apply_theme(theme);
    }

    /// Re-apply the registry's current theme
    fn reapply(&mut self, registry: &ThemeRegistry) {
        self.apply_theme(&registry.current());
    }

    fn style(&self) -> &WidgetStyle {
        self.base().style()
    }

    fn category(&self) -> Option<Category> {
        self.base().category()
    }

    fn set_category(&mut self, category: Option<Category>) {
        self.base_mut().set_category(category);
    }

    /// Set the category from its tag; unknown tags clear it
    fn set_category_tag(&mut self, tag: &str) {
        let category = Category::from_tag(tag);
        if category.is_none() && !tag.trim().is_empty() {
            tracing::debug!("Unknown category tag '{}', using the default style", tag);
        }
        self.set_category(category);
    }

    fn corner_radius(&self) -> f32 {
        self.style().corner_radius
    }

    fn set_corner_radius(&mut self, radius: f32) {
        self.base_mut()
            .update_style(|style| style.corner_radius = radius.max(0.0));
    }

    fn border_width(&self) -> f32 {
        self.style().border_width
    }

    fn set_border_width(&mut self, width: f32) {
        self.base_mut()
            .update_style(|style| style.border_width = width.max(0.0));
    }

    /// Border color of the resting state
    fn border_color(&self) -> Color {
        self.style().border_color()
    }

    fn set_border_color(&mut self, color: Color) {
        self.base_mut()
            .update_style(|style| style.colors.normal.border = color);
    }

    /// Fill color of the resting state
    fn fill_color(&self) -> Color {
        self.style().fill_color()
    }

    fn set_fill_color(&mut self, color: Color) {
        self.base_mut()
            .update_style(|style| style.colors.normal.fill = color);
    }

    fn font(&self) -> &FontSpec {
        &self.style().font
    }

    fn set_font(&mut self, font: FontSpec) {
        self.base_mut().update_style(|style| style.font = font);
    }
}
