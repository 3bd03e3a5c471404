//! Shape and spacing metric tokens

use serde::{Deserialize, Serialize};

/// Spacing unit keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Small,
    Medium,
    Large,
}

/// Corner radius, border width and the three spacing units
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricTokens {
    pub corner_radius: f32,
    pub border_width: f32,
    pub spacing_small: f32,
    pub spacing_medium: f32,
    pub spacing_large: f32,
}

impl MetricTokens {
    pub fn spacing(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Small => self.spacing_small,
            SpacingToken::Medium => self.spacing_medium,
            SpacingToken::Large => self.spacing_large,
        }
    }

    /// Name of the first field that is negative or not finite, if any
    pub fn invalid_field(&self) -> Option<&'static str> {
        [
            ("corner_radius", self.corner_radius),
            ("border_width", self.border_width),
            ("spacing_small", self.spacing_small),
            ("spacing_medium", self.spacing_medium),
            ("spacing_large", self.spacing_large),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite() || *value < 0.0)
        .map(|(name, _)| name)
    }
}

impl Default for MetricTokens {
    fn default() -> Self {
        Self {
            corner_radius: 6.0,
            border_width: 1.0,
            spacing_small: 4.0,
            spacing_medium: 8.0,
            spacing_large: 16.0,
        }
    }
}
