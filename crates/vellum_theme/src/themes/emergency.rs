//! Hard-coded fallback theme
//!
//! Used when the default theme cannot be built. It needs no fonts and no
//! configuration, so construction cannot fail.

use crate::style::{FillKind, PanelKind, StyleFlags, WidgetStyle};
use crate::theme::Theme;
use crate::tokens::*;
use vellum_paint::Color;

#[derive(Clone, Debug)]
pub struct EmergencyTheme {
    palette: Palette,
    typography: TypographyTokens,
    metrics: MetricTokens,
}

impl EmergencyTheme {
    pub const NAME: &'static str = "Emergency";

    pub fn new() -> Self {
        Self {
            palette: Palette {
                primary: Color::gray(0.2),
                secondary: Color::gray(0.4),
                accent: Color::rgb(0.0, 0.0, 0.8),
                background: Color::WHITE,
                surface: Color::gray(0.95),
                success: Color::rgb(0.0, 0.5, 0.0),
                warning: Color::rgb(0.8, 0.5, 0.0),
                error: Color::rgb(0.8, 0.0, 0.0),
                text_on_light: Color::BLACK,
                text_on_dark: Color::WHITE,
                text_muted: Color::gray(0.5),
                border: Color::gray(0.6),
            },
            typography: TypographyTokens::default(),
            metrics: MetricTokens {
                corner_radius: 0.0,
                ..MetricTokens::default()
            },
        }
    }
}

impl Default for EmergencyTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for EmergencyTheme {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn version(&self) -> &str {
        "0"
    }

    fn palette(&self) -> &Palette {
        &self.palette
    }

    fn typography(&self) -> &TypographyTokens {
        &self.typography
    }

    fn metrics(&self) -> &MetricTokens {
        &self.metrics
    }

    /// No gradients
    fn panel_style(&self, kind: PanelKind, flags: StyleFlags) -> WidgetStyle {
        let mut style = crate::rules::panel(self, kind, flags);
        style.fill_kind = FillKind::Solid;
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_and_solid() {
        let theme = EmergencyTheme::new();
        let style = theme.panel_style(PanelKind::Gradient, StyleFlags::default());
        assert!(!style.is_gradient());
        assert_eq!(style.corner_radius, 0.0);
    }
}
