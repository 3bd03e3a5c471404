//! Dark theme
//!
//! Light-on-dark palette with outlined panels so surfaces stay separated
//! against the near-black background.

use super::validate;
use crate::error::Result;
use crate::fonts::FontCatalog;
use crate::style::{PanelKind, StyleFlags, WidgetStyle};
use crate::theme::Theme;
use crate::tokens::*;
use vellum_paint::Color;

#[derive(Clone, Debug)]
pub struct DarkTheme {
    palette: Palette,
    typography: TypographyTokens,
    metrics: MetricTokens,
}

impl DarkTheme {
    pub const NAME: &'static str = "Dark";
    pub const FAMILY: &'static str = "Inter";

    pub fn new(fonts: &dyn FontCatalog) -> Result<Self> {
        let theme = Self {
            palette: Self::base_palette(),
            typography: fonts.resolve_typography(TypographyTokens::with_family(Self::FAMILY)),
            metrics: MetricTokens {
                corner_radius: 8.0,
                ..MetricTokens::default()
            },
        };
        validate(Self::NAME, &theme.typography, &theme.metrics)?;
        Ok(theme)
    }

    pub fn base_palette() -> Palette {
        Palette {
            primary: Color::from_hex(0x8AB4F8),
            secondary: Color::from_hex(0x5C6BC0),
            accent: Color::from_hex(0xFFB74D),

            background: Color::from_hex(0x121417),
            surface: Color::from_hex(0x1E2227),

            success: Color::from_hex(0x66BB6A),
            warning: Color::from_hex(0xFFCA28),
            error: Color::from_hex(0xEF5350),

            text_on_light: Color::from_hex(0x121417),
            text_on_dark: Color::from_hex(0xE8EAED),
            text_muted: Color::from_hex(0x8A9099),

            border: Color::from_hex(0x3A3F47),
        }
    }
}

impl Theme for DarkTheme {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn version(&self) -> &str {
        "1.0"
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

    fn panel_style(&self, kind: PanelKind, flags: StyleFlags) -> WidgetStyle {
        let mut style = crate::rules::panel(self, kind, flags);
        if kind == PanelKind::Plain {
            style.border_width = self.metrics.border_width;
        }
        style
    }
}
