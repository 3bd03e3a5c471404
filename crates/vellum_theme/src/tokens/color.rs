//! Palette tokens for theming

use vellum_paint::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Brand colors
    Primary,
    Secondary,
    Accent,

    // Surfaces
    Background,
    Surface,

    // Status colors
    Success,
    Warning,
    Error,

    // Text colors
    TextOnLight,
    TextOnDark,
    TextMuted,

    Border,
}

impl ColorToken {
    pub const ALL: [ColorToken; 12] = [
        ColorToken::Primary,
        ColorToken::Secondary,
        ColorToken::Accent,
        ColorToken::Background,
        ColorToken::Surface,
        ColorToken::Success,
        ColorToken::Warning,
        ColorToken::Error,
        ColorToken::TextOnLight,
        ColorToken::TextOnDark,
        ColorToken::TextMuted,
        ColorToken::Border,
    ];
}

/// Complete set of palette colors for one theme
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    // Brand colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,

    // Surfaces
    pub background: Color,
    pub surface: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Text colors
    pub text_on_light: Color,
    pub text_on_dark: Color,
    /// Secondary text, placeholders and disabled labels
    pub text_muted: Color,

    pub border: Color,
}

impl Palette {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::Secondary => self.secondary,
            ColorToken::Accent => self.accent,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::Error => self.error,
            ColorToken::TextOnLight => self.text_on_light,
            ColorToken::TextOnDark => self.text_on_dark,
            ColorToken::TextMuted => self.text_muted,
            ColorToken::Border => self.border,
        }
    }

    /// Readable text color for content drawn on `background`
    pub fn text_on(&self, background: Color) -> Color {
        if background.is_transparent() {
            return self.text_on(self.background);
        }
        if background.luminance() > 0.5 {
            self.text_on_light
        } else {
            self.text_on_dark
        }
    }
}
