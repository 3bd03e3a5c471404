//! Corporate theme, the default
//!
//! A light theme with a restrained blue brand color:
//! - Primary: #1F5AA6 on an off-white background
//! - Typography: Segoe UI, falling back to sans-serif
//! - Corner radius 6px, hairline borders

use super::validate;
use crate::error::Result;
use crate::fonts::FontCatalog;
use crate::style::{FillKind, GradientDirection, PanelKind, StyleFlags, WidgetStyle};
use crate::theme::Theme;
use crate::tokens::*;
use vellum_paint::Color;

#[derive(Clone, Debug)]
pub struct CorporateTheme {
    palette: Palette,
    typography: TypographyTokens,
    metrics: MetricTokens,
}

impl CorporateTheme {
    pub const NAME: &'static str = "Corporate";
    pub const FAMILY: &'static str = "Segoe UI";

    pub fn new(fonts: &dyn FontCatalog) -> Result<Self> {
        let theme = Self {
            palette: Self::base_palette(),
            typography: fonts.resolve_typography(TypographyTokens::with_family(Self::FAMILY)),
            metrics: MetricTokens::default(),
        };
        validate(Self::NAME, &theme.typography, &theme.metrics)?;
        Ok(theme)
    }

    pub fn base_palette() -> Palette {
        Palette {
            // Brand
            primary: Color::from_hex(0x1F5AA6),
            secondary: Color::from_hex(0x2E7D9A),
            accent: Color::from_hex(0xF28C28),

            // Surfaces
            background: Color::from_hex(0xF4F6F9),
            surface: Color::WHITE,

            // Status
            success: Color::from_hex(0x2E8540),
            warning: Color::from_hex(0xE0A800),
            error: Color::from_hex(0xC62828),

            // Text
            text_on_light: Color::from_hex(0x1C2430),
            text_on_dark: Color::WHITE,
            text_muted: Color::from_hex(0x6B7785),

            border: Color::from_hex(0xC9D1DB),
        }
    }
}

impl Theme for CorporateTheme {
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

    /// Gradient panels stay within the brand blue instead of blending to secondary
    fn panel_style(&self, kind: PanelKind, flags: StyleFlags) -> WidgetStyle {
        let mut style = crate::rules::panel(self, kind, flags);
        if kind == PanelKind::Gradient {
            style.fill_kind = FillKind::Gradient {
                end: self.palette.primary.darken(0.2),
                direction: GradientDirection::Vertical,
            };
        }
        style
    }
}
