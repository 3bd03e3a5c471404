//! Themes assembled at runtime from token values

use super::validate;
use crate::error::Result;
use crate::theme::Theme;
use crate::tokens::*;

/// A theme whose tokens come from configuration or application code
///
/// All style rules use the shared defaults.
#[derive(Clone, Debug)]
pub struct ConfiguredTheme {
    name: String,
    version: String,
    palette: Palette,
    typography: TypographyTokens,
    metrics: MetricTokens,
}

impl ConfiguredTheme {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        palette: Palette,
        typography: TypographyTokens,
        metrics: MetricTokens,
    ) -> Result<Self> {
        let name = name.into().trim().to_string();
        validate(&name, &typography, &metrics)?;
        Ok(Self {
            name,
            version: version.into(),
            palette,
            typography,
            metrics,
        })
    }

    /// Copy of `theme`'s tokens under a new name
    pub fn derive(theme: &dyn Theme, name: impl Into<String>) -> Result<Self> {
        Self::new(
            name,
            theme.version(),
            theme.palette().clone(),
            theme.typography().clone(),
            theme.metrics().clone(),
        )
    }

    /// Same theme with one palette color replaced
    pub fn with_color(mut self, token: ColorToken, color: vellum_paint::Color) -> Self {
        let slot = match token {
            ColorToken::Primary => &mut self.palette.primary,
            ColorToken::Secondary => &mut self.palette.secondary,
            ColorToken::Accent => &mut self.palette.accent,
            ColorToken::Background => &mut self.palette.background,
            ColorToken::Surface => &mut self.palette.surface,
            ColorToken::Success => &mut self.palette.success,
            ColorToken::Warning => &mut self.palette.warning,
            ColorToken::Error => &mut self.palette.error,
            ColorToken::TextOnLight => &mut self.palette.text_on_light,
            ColorToken::TextOnDark => &mut self.palette.text_on_dark,
            ColorToken::TextMuted => &mut self.palette.text_muted,
            ColorToken::Border => &mut self.palette.border,
        };
        *slot = color;
        self
    }
}

impl Theme for ConfiguredTheme {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
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
}
