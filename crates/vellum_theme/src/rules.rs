//! Default style rules shared by all themes
//!
//! Every rule derives its colors from the palette, so a new palette gets a
//! consistent look without overriding anything.

use crate::style::*;
use crate::theme::Theme;
use vellum_paint::Color;

/// Fill shift applied on hover
const HOVER_SHIFT: f32 = 0.06;
/// Fill shift applied while pressed
const PRESS_SHIFT: f32 = 0.12;
/// Overlay alpha for hover on transparent surfaces
const HOVER_OVERLAY: f32 = 0.10;
/// Overlay alpha for press on transparent surfaces
const PRESS_OVERLAY: f32 = 0.18;

/// Move a color away from its own brightness: light colors darken, dark ones lighten
pub(crate) fn shift(color: Color, amount: f32) -> Color {
    if color.luminance() > 0.5 {
        color.darken(amount)
    } else {
        color.lighten(amount)
    }
}

fn base_style<T: Theme + ?Sized>(theme: &T, colors: StateColors) -> WidgetStyle {
    let m = theme.metrics();
    WidgetStyle {
        category: None,
        corner_radius: m.corner_radius,
        border_width: m.border_width,
        padding: m.spacing_medium,
        font: theme.typography().body.clone(),
        fill_kind: FillKind::Solid,
        colors,
        accent: theme.palette().accent,
        track: Color::TRANSPARENT,
    }
}

/// States for widgets that do not react to the pointer
fn static_colors<T: Theme + ?Sized>(theme: &T, normal: ColorSet) -> StateColors {
    let disabled = ColorSet::new(normal.fill, normal.border, theme.palette().text_muted);
    StateColors {
        disabled,
        ..StateColors::uniform(normal)
    }
}

pub(crate) fn action<T: Theme + ?Sized>(
    theme: &T,
    role: ActionRole,
    flags: StyleFlags,
) -> WidgetStyle {
    let p = theme.palette();
    let m = theme.metrics();

    let normal = match role {
        ActionRole::Primary => ColorSet::new(p.primary, p.primary, p.text_on(p.primary)),
        ActionRole::Secondary => ColorSet::new(p.surface, p.primary, p.primary),
        ActionRole::Tertiary => ColorSet::new(Color::TRANSPARENT, Color::TRANSPARENT, p.primary),
        ActionRole::Danger => ColorSet::new(p.error, p.error, p.text_on(p.error)),
    };

    let (hovered, pressed) = if role == ActionRole::Tertiary {
        (
            ColorSet {
                fill: p.primary.with_alpha(HOVER_OVERLAY),
                ..normal
            },
            ColorSet {
                fill: p.primary.with_alpha(PRESS_OVERLAY),
                ..normal
            },
        )
    } else {
        let border_follows_fill = normal.border == normal.fill;
        let state = |amount: f32| {
            let fill = shift(normal.fill, amount);
            ColorSet {
                fill,
                border: if border_follows_fill {
                    fill
                } else {
                    shift(normal.border, amount)
                },
                text: normal.text,
            }
        };
        (state(HOVER_SHIFT), state(PRESS_SHIFT))
    };

    let disabled = if role == ActionRole::Tertiary {
        ColorSet {
            text: p.text_muted,
            ..normal
        }
    } else {
        ColorSet::new(p.border, p.border, p.text_muted)
    };

    let colors = StateColors {
        normal: if flags.active { pressed } else { normal },
        hovered,
        pressed,
        disabled,
        focused: ColorSet {
            border: p.accent,
            ..normal
        },
        checked: pressed,
    };

    WidgetStyle {
        border_width: if role == ActionRole::Tertiary {
            0.0
        } else {
            m.border_width
        },
        font: theme.typography().button.clone(),
        ..base_style(theme, colors)
    }
}

pub(crate) fn panel<T: Theme + ?Sized>(
    theme: &T,
    kind: PanelKind,
    _flags: StyleFlags,
) -> WidgetStyle {
    let p = theme.palette();
    let m = theme.metrics();

    match kind {
        PanelKind::Plain => WidgetStyle {
            border_width: 0.0,
            ..base_style(
                theme,
                static_colors(theme, ColorSet::new(p.surface, p.border, p.text_on(p.surface))),
            )
        },
        PanelKind::Card => WidgetStyle {
            padding: m.spacing_large,
            ..base_style(
                theme,
                static_colors(theme, ColorSet::new(p.surface, p.border, p.text_on(p.surface))),
            )
        },
        PanelKind::Gradient => WidgetStyle {
            border_width: 0.0,
            fill_kind: FillKind::Gradient {
                end: p.secondary,
                direction: GradientDirection::Vertical,
            },
            ..base_style(
                theme,
                static_colors(theme, ColorSet::new(p.primary, p.primary, p.text_on(p.primary))),
            )
        },
    }
}

pub(crate) fn label<T: Theme + ?Sized>(
    theme: &T,
    kind: LabelKind,
    flags: StyleFlags,
) -> WidgetStyle {
    let p = theme.palette();
    let t = theme.typography();

    let (font, text) = match kind {
        LabelKind::Body => (&t.body, p.text_on(p.background)),
        LabelKind::Heading => (&t.header, p.text_on(p.background)),
        LabelKind::SubHeading => (&t.sub_header, p.text_on(p.background)),
        LabelKind::Caption => (&t.small, p.text_muted),
    };
    let text = if flags.invalid { p.error } else { text };

    WidgetStyle {
        corner_radius: 0.0,
        border_width: 0.0,
        padding: 0.0,
        font: font.clone(),
        ..base_style(
            theme,
            static_colors(theme, ColorSet::new(Color::TRANSPARENT, Color::TRANSPARENT, text)),
        )
    }
}

pub(crate) fn input<T: Theme + ?Sized>(theme: &T, flags: StyleFlags) -> WidgetStyle {
    let p = theme.palette();
    let m = theme.metrics();

    let border = if flags.invalid { p.error } else { p.border };
    let normal = ColorSet::new(p.surface, border, p.text_on(p.surface));
    let focus_border = if flags.invalid { p.error } else { p.accent };
    let focused = ColorSet {
        border: focus_border,
        ..normal
    };

    let colors = StateColors {
        normal,
        hovered: ColorSet {
            border: shift(border, PRESS_SHIFT),
            ..normal
        },
        pressed: focused,
        disabled: ColorSet::new(p.background, p.border, p.text_muted),
        focused,
        checked: normal,
    };

    WidgetStyle {
        padding: m.spacing_small,
        ..base_style(theme, colors)
    }
}

pub(crate) fn checkable<T: Theme + ?Sized>(theme: &T, _flags: StyleFlags) -> WidgetStyle {
    let p = theme.palette();
    let m = theme.metrics();

    let label = p.text_on(p.background);
    let normal = ColorSet::new(p.surface, p.border, label);

    let colors = StateColors {
        normal,
        hovered: ColorSet {
            border: p.primary,
            ..normal
        },
        pressed: ColorSet {
            fill: shift(p.surface, PRESS_SHIFT),
            border: p.primary,
            ..normal
        },
        disabled: ColorSet::new(p.background, p.border, p.text_muted),
        focused: ColorSet {
            border: p.accent,
            ..normal
        },
        checked: ColorSet::new(p.primary, p.primary, label),
    };

    WidgetStyle {
        corner_radius: m.corner_radius / 2.0,
        padding: m.spacing_small,
        accent: p.text_on(p.primary),
        ..base_style(theme, colors)
    }
}

pub(crate) fn progress<T: Theme + ?Sized>(theme: &T, flags: StyleFlags) -> WidgetStyle {
    let p = theme.palette();

    let indicator = if flags.invalid { p.error } else { p.primary };
    let normal = ColorSet::new(indicator, p.border, p.text_on(p.background));
    let disabled = ColorSet::new(p.text_muted, p.border, p.text_muted);

    WidgetStyle {
        border_width: 0.0,
        font: theme.typography().small.clone(),
        accent: indicator,
        track: p.border,
        ..base_style(
            theme,
            StateColors {
                disabled,
                ..StateColors::uniform(normal)
            },
        )
    }
}

pub(crate) fn menu<T: Theme + ?Sized>(theme: &T, _flags: StyleFlags) -> WidgetStyle {
    let p = theme.palette();
    let m = theme.metrics();

    WidgetStyle {
        padding: m.spacing_small,
        ..base_style(
            theme,
            static_colors(theme, ColorSet::new(p.surface, p.border, p.text_on(p.surface))),
        )
    }
}

pub(crate) fn menu_item<T: Theme + ?Sized>(theme: &T, flags: StyleFlags) -> WidgetStyle {
    let p = theme.palette();
    let m = theme.metrics();

    let (normal, hovered, pressed) = if flags.active {
        let normal = ColorSet::new(p.primary, p.primary, p.text_on(p.primary));
        let hovered = ColorSet {
            fill: shift(p.primary, HOVER_SHIFT),
            ..normal
        };
        let pressed = ColorSet {
            fill: shift(p.primary, PRESS_SHIFT),
            ..normal
        };
        (normal, hovered, pressed)
    } else {
        let normal = ColorSet::new(Color::TRANSPARENT, Color::TRANSPARENT, p.text_on(p.surface));
        let hovered = ColorSet {
            fill: p.primary.with_alpha(HOVER_OVERLAY),
            ..normal
        };
        let pressed = ColorSet {
            fill: p.primary.with_alpha(PRESS_OVERLAY),
            ..normal
        };
        (normal, hovered, pressed)
    };

    let colors = StateColors {
        normal,
        hovered,
        pressed,
        disabled: ColorSet {
            text: p.text_muted,
            ..normal
        },
        focused: hovered,
        checked: pressed,
    };

    WidgetStyle {
        corner_radius: m.corner_radius / 2.0,
        border_width: 0.0,
        padding: m.spacing_small,
        ..base_style(theme, colors)
    }
}

pub(crate) fn fallback<T: Theme + ?Sized>(theme: &T, _flags: StyleFlags) -> WidgetStyle {
    let p = theme.palette();
    let m = theme.metrics();

    WidgetStyle {
        border_width: 0.0,
        padding: m.spacing_small,
        ..base_style(
            theme,
            static_colors(
                theme,
                ColorSet::new(p.background, p.border, p.text_on(p.background)),
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_moves_away_from_extremes() {
        assert!(shift(Color::WHITE, 0.1).luminance() < Color::WHITE.luminance());
        assert!(shift(Color::BLACK, 0.1).luminance() > Color::BLACK.luminance());
    }
}
