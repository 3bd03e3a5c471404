//! Built-in and configuration-defined themes

mod configured;
mod corporate;
mod dark;
mod emergency;

pub use configured::ConfiguredTheme;
pub use corporate::CorporateTheme;
pub use dark::DarkTheme;
pub use emergency::EmergencyTheme;

use crate::error::{Result, ThemeError};
use crate::fonts::FontCatalog;
use crate::theme::ThemeRef;
use crate::tokens::{MetricTokens, TypeToken, TypographyTokens};
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Built-in theme catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinTheme {
    /// Light corporate look, the default
    Corporate,
    Dark,
    /// Minimal hard-coded fallback
    Emergency,
}

impl BuiltinTheme {
    /// Registry name of the theme
    pub fn name(self) -> &'static str {
        match self {
            Self::Corporate => CorporateTheme::NAME,
            Self::Dark => DarkTheme::NAME,
            Self::Emergency => EmergencyTheme::NAME,
        }
    }

    pub fn all() -> &'static [BuiltinTheme] {
        const THEMES: [BuiltinTheme; 3] = [
            BuiltinTheme::Corporate,
            BuiltinTheme::Dark,
            BuiltinTheme::Emergency,
        ];
        &THEMES
    }

    /// Look up a built-in by registry name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|theme| theme.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Construct the theme, resolving its typefaces against `fonts`
    pub fn build(self, fonts: &dyn FontCatalog) -> Result<ThemeRef> {
        Ok(match self {
            Self::Corporate => Rc::new(CorporateTheme::new(fonts)?),
            Self::Dark => Rc::new(DarkTheme::new(fonts)?),
            Self::Emergency => Rc::new(EmergencyTheme::new()),
        })
    }
}

impl Display for BuiltinTheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reject partial or nonsensical token sets
pub(crate) fn validate(
    name: &str,
    typography: &TypographyTokens,
    metrics: &MetricTokens,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ThemeError::EmptyName);
    }
    if let Some(field) = metrics.invalid_field() {
        return Err(ThemeError::InvalidMetric {
            theme: name.to_string(),
            field,
        });
    }
    for token in TypeToken::ALL {
        let font = typography.get(token);
        let detail = if font.family.trim().is_empty() {
            Some(format!("{:?} has an empty family", token))
        } else if !font.size.is_finite() || font.size <= 0.0 {
            Some(format!("{:?} has size {}", token, font.size))
        } else if !(1..=1000).contains(&font.weight.0) {
            Some(format!("{:?} has weight {}", token, font.weight.0))
        } else {
            None
        };
        if let Some(detail) = detail {
            return Err(ThemeError::InvalidFont {
                theme: name.to_string(),
                detail,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::StaticFonts;

    #[test]
    fn test_builtins_build_with_their_names() {
        let fonts = StaticFonts::generic();
        for builtin in BuiltinTheme::all() {
            let theme = builtin.build(&fonts).unwrap();
            assert_eq!(theme.name(), builtin.name());
            assert_eq!(BuiltinTheme::from_name(theme.name()), Some(*builtin));
        }
    }

    #[test]
    fn test_validate_rejects_bad_tokens() {
        let typography = TypographyTokens::default();
        let metrics = MetricTokens::default();
        assert!(validate("Ok", &typography, &metrics).is_ok());
        assert!(matches!(
            validate("  ", &typography, &metrics),
            Err(ThemeError::EmptyName)
        ));

        let negative = MetricTokens {
            border_width: -1.0,
            ..MetricTokens::default()
        };
        assert!(matches!(
            validate("Bad", &typography, &negative),
            Err(ThemeError::InvalidMetric {
                field: "border_width",
                ..
            })
        ));

        let mut tiny = TypographyTokens::default();
        tiny.body.size = 0.0;
        assert!(matches!(
            validate("Bad", &tiny, &metrics),
            Err(ThemeError::InvalidFont { .. })
        ));
    }
}
