//! Per-widget style values derived from a theme
//!
//! A [`WidgetStyle`] is the complete set of visual values a themed widget
//! paints with. Style rules on [`Theme`](crate::Theme) produce them; widgets
//! store a copy and never read the theme while painting.

use vellum_paint::{Color, FontSpec};

/// A widget's declared styling role
///
/// The category selects which theme rule styles the widget. Widgets without
/// a category (or with an unrecognized tag) get the theme's default rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    PrimaryAction,
    SecondaryAction,
    /// Text-only action without fill or border
    TertiaryAction,
    DangerAction,
    Panel,
    Card,
    GradientPanel,
    Body,
    Heading,
    SubHeading,
    Caption,
    TextInput,
    Checkable,
    Progress,
    Menu,
    MenuItem,
}

impl Category {
    pub const ALL: [Category; 16] = [
        Category::PrimaryAction,
        Category::SecondaryAction,
        Category::TertiaryAction,
        Category::DangerAction,
        Category::Panel,
        Category::Card,
        Category::GradientPanel,
        Category::Body,
        Category::Heading,
        Category::SubHeading,
        Category::Caption,
        Category::TextInput,
        Category::Checkable,
        Category::Progress,
        Category::Menu,
        Category::MenuItem,
    ];

    /// Stable tag used by application code and configuration
    pub fn tag(self) -> &'static str {
        match self {
            Self::PrimaryAction => "primary",
            Self::SecondaryAction => "secondary",
            Self::TertiaryAction => "tertiary",
            Self::DangerAction => "danger",
            Self::Panel => "panel",
            Self::Card => "card",
            Self::GradientPanel => "gradient-panel",
            Self::Body => "body",
            Self::Heading => "heading",
            Self::SubHeading => "sub-heading",
            Self::Caption => "caption",
            Self::TextInput => "text-input",
            Self::Checkable => "checkable",
            Self::Progress => "progress",
            Self::Menu => "menu",
            Self::MenuItem => "menu-item",
        }
    }

    /// Parse a tag, case-insensitively; unknown tags yield `None`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.tag().eq_ignore_ascii_case(tag))
    }
}

/// Action (button) roles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionRole {
    Primary,
    Secondary,
    Tertiary,
    Danger,
}

/// Panel kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Plain,
    Card,
    Gradient,
}

/// Label kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelKind {
    Body,
    Heading,
    SubHeading,
    Caption,
}

impl From<ActionRole> for Category {
    fn from(role: ActionRole) -> Self {
        match role {
            ActionRole::Primary => Category::PrimaryAction,
            ActionRole::Secondary => Category::SecondaryAction,
            ActionRole::Tertiary => Category::TertiaryAction,
            ActionRole::Danger => Category::DangerAction,
        }
    }
}

impl From<PanelKind> for Category {
    fn from(kind: PanelKind) -> Self {
        match kind {
            PanelKind::Plain => Category::Panel,
            PanelKind::Card => Category::Card,
            PanelKind::Gradient => Category::GradientPanel,
        }
    }
}

impl From<LabelKind> for Category {
    fn from(kind: LabelKind) -> Self {
        match kind {
            LabelKind::Body => Category::Body,
            LabelKind::Heading => Category::Heading,
            LabelKind::SubHeading => Category::SubHeading,
            LabelKind::Caption => Category::Caption,
        }
    }
}

/// Category-specific flags passed to style rules
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleFlags {
    /// The widget is the active entry of a navigation group
    pub active: bool,
    /// The widget shows invalid input
    pub invalid: bool,
}

impl StyleFlags {
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }
}

/// Fill, border and text color for one visual state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorSet {
    pub fill: Color,
    pub border: Color,
    pub text: Color,
}

impl ColorSet {
    pub const fn new(fill: Color, border: Color, text: Color) -> Self {
        Self { fill, border, text }
    }

    /// Blend every channel towards `other`
    pub fn mix(&self, other: &ColorSet, t: f32) -> ColorSet {
        ColorSet {
            fill: Color::lerp(&self.fill, &other.fill, t),
            border: Color::lerp(&self.border, &other.border, t),
            text: Color::lerp(&self.text, &other.text, t),
        }
    }
}

/// Color sets for every interaction state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateColors {
    pub normal: ColorSet,
    pub hovered: ColorSet,
    pub pressed: ColorSet,
    pub disabled: ColorSet,
    pub focused: ColorSet,
    /// Base set for the checked axis of checkable widgets
    pub checked: ColorSet,
}

impl StateColors {
    /// The same set for every state
    pub fn uniform(set: ColorSet) -> Self {
        Self {
            normal: set,
            hovered: set,
            pressed: set,
            disabled: set,
            focused: set,
            checked: set,
        }
    }
}

/// Direction of a gradient fill
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GradientDirection {
    #[default]
    Vertical,
    Horizontal,
}

/// How the widget's shape is filled
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FillKind {
    #[default]
    Solid,
    /// Linear gradient from the state fill color to `end`
    Gradient {
        end: Color,
        direction: GradientDirection,
    },
}

/// The complete style of one widget
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetStyle {
    /// Category whose rule produced this style
    pub category: Option<Category>,
    pub corner_radius: f32,
    pub border_width: f32,
    /// Inner padding between the shape edge and content
    pub padding: f32,
    pub font: FontSpec,
    pub fill_kind: FillKind,
    pub colors: StateColors,
    /// Check marks, progress indicators, focus accents
    pub accent: Color,
    /// Background track of progress indicators
    pub track: Color,
}

impl WidgetStyle {
    /// Style of a widget that has never been themed
    pub fn unstyled() -> Self {
        let set = ColorSet::new(Color::TRANSPARENT, Color::TRANSPARENT, Color::BLACK);
        Self {
            category: None,
            corner_radius: 0.0,
            border_width: 0.0,
            padding: 0.0,
            font: FontSpec::default(),
            fill_kind: FillKind::Solid,
            colors: StateColors::uniform(set),
            accent: Color::BLACK,
            track: Color::TRANSPARENT,
        }
    }

    pub fn fill_color(&self) -> Color {
        self.colors.normal.fill
    }

    pub fn border_color(&self) -> Color {
        self.colors.normal.border
    }

    pub fn foreground(&self) -> Color {
        self.colors.normal.text
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self.fill_kind, FillKind::Gradient { .. })
    }
}

impl Default for WidgetStyle {
    fn default() -> Self {
        Self::unstyled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tags_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_tag(category.tag()), Some(category));
        }
        assert_eq!(Category::from_tag(" Menu-Item "), Some(Category::MenuItem));
        assert_eq!(Category::from_tag("hyperdrive"), None);
        assert_eq!(Category::from_tag(""), None);
    }

    #[test]
    fn test_mix_endpoints() {
        let a = ColorSet::new(Color::BLACK, Color::BLACK, Color::BLACK);
        let b = ColorSet::new(Color::WHITE, Color::WHITE, Color::WHITE);
        assert_eq!(a.mix(&b, 0.0), a);
        assert_eq!(a.mix(&b, 1.0), b);
    }

    #[test]
    fn test_unstyled_accessors() {
        let style = WidgetStyle::unstyled();
        assert_eq!(style.fill_color(), Color::TRANSPARENT);
        assert_eq!(style.foreground(), Color::BLACK);
        assert!(!style.is_gradient());
    }
}
