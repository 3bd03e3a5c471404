//! The theme contract
//!
//! A [`Theme`] is an immutable descriptor: palette, typography and metric
//! tokens plus one style rule per widget category family. Rules have default
//! implementations driven by the tokens; concrete themes override the rules
//! whose look differs.

use crate::rules;
use crate::style::{ActionRole, Category, LabelKind, PanelKind, StyleFlags, WidgetStyle};
use crate::tokens::*;
use std::fmt::Debug;
use std::rc::Rc;
use vellum_paint::{Color, FontSpec};

/// Shared handle to an immutable theme
pub type ThemeRef = Rc<dyn Theme>;

/// Theme descriptor and style rules
pub trait Theme: Debug {
    /// Unique name, used as the registry key
    fn name(&self) -> &str;

    fn version(&self) -> &str;

    fn palette(&self) -> &Palette;

    fn typography(&self) -> &TypographyTokens;

    fn metrics(&self) -> &MetricTokens;

    fn color(&self, token: ColorToken) -> Color {
        self.palette().get(token)
    }

    fn font(&self, token: TypeToken) -> &FontSpec {
        self.typography().get(token)
    }

    fn spacing(&self, token: SpacingToken) -> f32 {
        self.metrics().spacing(token)
    }

    // ========== Style rules ==========

    /// Buttons and other pressable actions
    fn action_style(&self, role: ActionRole, flags: StyleFlags) -> WidgetStyle {
        rules::action(self, role, flags)
    }

    /// Panels, cards and gradient panels
    fn panel_style(&self, kind: PanelKind, flags: StyleFlags) -> WidgetStyle {
        rules::panel(self, kind, flags)
    }

    /// Text labels (never bordered)
    fn label_style(&self, kind: LabelKind, flags: StyleFlags) -> WidgetStyle {
        rules::label(self, kind, flags)
    }

    fn input_style(&self, flags: StyleFlags) -> WidgetStyle {
        rules::input(self, flags)
    }

    /// Checkboxes and radio indicators
    fn checkable_style(&self, flags: StyleFlags) -> WidgetStyle {
        rules::checkable(self, flags)
    }

    fn progress_style(&self, flags: StyleFlags) -> WidgetStyle {
        rules::progress(self, flags)
    }

    fn menu_style(&self, flags: StyleFlags) -> WidgetStyle {
        rules::menu(self, flags)
    }

    /// Menu entries; `flags.active` marks the current navigation item
    fn menu_item_style(&self, flags: StyleFlags) -> WidgetStyle {
        rules::menu_item(self, flags)
    }

    /// Fallback for widgets without a recognized category
    fn default_style(&self, flags: StyleFlags) -> WidgetStyle {
        rules::fallback(self, flags)
    }
}

/// Run the rule matching `category` and tag the result with it
pub fn style_for(theme: &dyn Theme, category: Option<Category>, flags: StyleFlags) -> WidgetStyle {
    let mut style = match category {
        Some(Category::PrimaryAction) => theme.action_style(ActionRole::Primary, flags),
        Some(Category::SecondaryAction) => theme.action_style(ActionRole::Secondary, flags),
        Some(Category::TertiaryAction) => theme.action_style(ActionRole::Tertiary, flags),
        Some(Category::DangerAction) => theme.action_style(ActionRole::Danger, flags),
        Some(Category::Panel) => theme.panel_style(PanelKind::Plain, flags),
        Some(Category::Card) => theme.panel_style(PanelKind::Card, flags),
        Some(Category::GradientPanel) => theme.panel_style(PanelKind::Gradient, flags),
        Some(Category::Body) => theme.label_style(LabelKind::Body, flags),
        Some(Category::Heading) => theme.label_style(LabelKind::Heading, flags),
        Some(Category::SubHeading) => theme.label_style(LabelKind::SubHeading, flags),
        Some(Category::Caption) => theme.label_style(LabelKind::Caption, flags),
        Some(Category::TextInput) => theme.input_style(flags),
        Some(Category::Checkable) => theme.checkable_style(flags),
        Some(Category::Progress) => theme.progress_style(flags),
        Some(Category::Menu) => theme.menu_style(flags),
        Some(Category::MenuItem) => theme.menu_item_style(flags),
        None => theme.default_style(flags),
    };
    style.category = category;
    style
}
