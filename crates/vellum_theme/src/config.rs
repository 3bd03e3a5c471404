//! TOML theme definitions
//!
//! A configuration document lists any number of `[[theme]]` tables and an
//! optional `default` theme name:
//!
//! ```toml
//! default = "Ocean"
//!
//! [[theme]]
//! name = "Ocean"
//! version = "1.0"
//!
//! [theme.palette]
//! primary = "#0A66C2"
//! # ... every palette color
//!
//! [theme.typography.header]
//! family = "Inter"
//! size = 24.0
//! weight = 700
//! # ... sub_header, body, button, small
//!
//! [theme.metrics]
//! corner_radius = 6.0
//! border_width = 1.0
//! spacing_small = 4.0
//! spacing_medium = 8.0
//! spacing_large = 16.0
//! ```
//!
//! Every field is required. Each theme table is parsed on its own so one
//! broken definition does not hide the others.

use crate::error::{Result, ThemeError};
use crate::fonts::FontCatalog;
use crate::theme::Theme;
use crate::themes::ConfiguredTheme;
use crate::tokens::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use vellum_paint::{Color, FontSpec, FontWeight};

/// A color written as `#RRGGBB` or `#RRGGBBAA`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub Color);

impl TryFrom<String> for HexColor {
    type Error = ThemeError;

    fn try_from(text: String) -> Result<Self> {
        Color::parse_hex(&text)
            .map(HexColor)
            .ok_or(ThemeError::InvalidColor(text))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        let [r, g, b, a] = color.0.to_rgba8();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

/// Palette section of a theme definition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteDefinition {
    pub primary: HexColor,
    pub secondary: HexColor,
    pub accent: HexColor,
    pub background: HexColor,
    pub surface: HexColor,
    pub success: HexColor,
    pub warning: HexColor,
    pub error: HexColor,
    pub text_on_light: HexColor,
    pub text_on_dark: HexColor,
    pub text_muted: HexColor,
    pub border: HexColor,
}

impl From<&Palette> for PaletteDefinition {
    fn from(p: &Palette) -> Self {
        Self {
            primary: HexColor(p.primary),
            secondary: HexColor(p.secondary),
            accent: HexColor(p.accent),
            background: HexColor(p.background),
            surface: HexColor(p.surface),
            success: HexColor(p.success),
            warning: HexColor(p.warning),
            error: HexColor(p.error),
            text_on_light: HexColor(p.text_on_light),
            text_on_dark: HexColor(p.text_on_dark),
            text_muted: HexColor(p.text_muted),
            border: HexColor(p.border),
        }
    }
}

impl From<&PaletteDefinition> for Palette {
    fn from(p: &PaletteDefinition) -> Self {
        Self {
            primary: p.primary.0,
            secondary: p.secondary.0,
            accent: p.accent.0,
            background: p.background.0,
            surface: p.surface.0,
            success: p.success.0,
            warning: p.warning.0,
            error: p.error.0,
            text_on_light: p.text_on_light.0,
            text_on_dark: p.text_on_dark.0,
            text_muted: p.text_muted.0,
            border: p.border.0,
        }
    }
}

/// One font descriptor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontDefinition {
    pub family: String,
    pub size: f32,
    pub weight: u16,
}

impl From<&FontSpec> for FontDefinition {
    fn from(font: &FontSpec) -> Self {
        Self {
            family: font.family.clone(),
            size: font.size,
            weight: font.weight.0,
        }
    }
}

impl From<&FontDefinition> for FontSpec {
    fn from(font: &FontDefinition) -> Self {
        FontSpec::new(font.family.clone(), font.size, FontWeight(font.weight))
    }
}

/// Typography section of a theme definition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypographyDefinition {
    pub header: FontDefinition,
    pub sub_header: FontDefinition,
    pub body: FontDefinition,
    pub button: FontDefinition,
    pub small: FontDefinition,
}

impl From<&TypographyTokens> for TypographyDefinition {
    fn from(t: &TypographyTokens) -> Self {
        Self {
            header: (&t.header).into(),
            sub_header: (&t.sub_header).into(),
            body: (&t.body).into(),
            button: (&t.button).into(),
            small: (&t.small).into(),
        }
    }
}

impl From<&TypographyDefinition> for TypographyTokens {
    fn from(t: &TypographyDefinition) -> Self {
        Self {
            header: (&t.header).into(),
            sub_header: (&t.sub_header).into(),
            body: (&t.body).into(),
            button: (&t.button).into(),
            small: (&t.small).into(),
        }
    }
}

/// A complete theme described in TOML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeDefinition {
    pub name: String,
    pub version: String,
    pub palette: PaletteDefinition,
    pub typography: TypographyDefinition,
    pub metrics: MetricTokens,
}

impl ThemeDefinition {
    /// Parse a single definition (the contents of one `[[theme]]` table)
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Capture the tokens of an existing theme
    pub fn from_theme(theme: &dyn Theme) -> Self {
        Self {
            name: theme.name().to_string(),
            version: theme.version().to_string(),
            palette: theme.palette().into(),
            typography: theme.typography().into(),
            metrics: theme.metrics().clone(),
        }
    }

    /// Build the theme, substituting unavailable typefaces
    pub fn build(&self, fonts: &dyn FontCatalog) -> Result<ConfiguredTheme> {
        let typography = fonts.resolve_typography((&self.typography).into());
        ConfiguredTheme::new(
            self.name.as_str(),
            self.version.as_str(),
            (&self.palette).into(),
            typography,
            self.metrics.clone(),
        )
    }
}

/// A theme configuration document
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme to activate once the definitions are registered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Raw `[[theme]]` tables, parsed individually by [`ThemeConfig::definitions`]
    #[serde(default, rename = "theme")]
    pub themes: Vec<toml::Table>,
}

impl ThemeConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Reading theme configuration from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Parse every theme table, in document order
    pub fn definitions(&self) -> impl Iterator<Item = Result<ThemeDefinition>> + '_ {
        self.themes.iter().map(|table| {
            toml::Value::Table(table.clone())
                .try_into::<ThemeDefinition>()
                .map_err(ThemeError::from)
        })
    }

    /// Append a definition as a new `[[theme]]` table
    pub fn push(&mut self, definition: &ThemeDefinition) -> Result<()> {
        let table = toml::Table::try_from(definition)?;
        self.themes.push(table);
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}
