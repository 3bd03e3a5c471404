//! Vellum Theme System
//!
//! Swappable themes for self-drawn widgets.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Design tokens**: Palette colors, typography, corner radius, border width, spacing
//! - **Style rules**: One rule per widget category family, producing a [`WidgetStyle`]
//! - **Built-in themes**: Corporate (default), Dark, and a hard-coded Emergency fallback
//! - **Configured themes**: Complete theme definitions loaded from TOML
//! - **Registry**: Named themes, one active theme, change notification
//!
//! # Quick Start
//!
//! ```rust
//! use vellum_theme::{ColorToken, StaticFonts, ThemeRegistry};
//!
//! let registry = ThemeRegistry::with_fonts(&StaticFonts::generic());
//!
//! registry.subscribe(|_, theme| {
//!     println!("now using {}", theme.name());
//! });
//!
//! assert!(registry.activate("Dark"));
//! let primary = registry.current().color(ColorToken::Primary);
//! # let _ = primary;
//! ```
//!
//! # Style rules
//!
//! Widgets declare a [`Category`]. [`style_for`] runs the matching rule of a
//! theme; widgets without a category get [`Theme::default_style`]. Rules have
//! shared defaults, so a theme only overrides the rules whose look differs.
//!
//! # Fonts
//!
//! Themes name preferred typefaces. A [`FontCatalog`] reports which families
//! are installed and unavailable ones are replaced by the fallback family.

pub mod config;
pub mod error;
pub mod fonts;
pub mod registry;
mod rules;
pub mod style;
pub mod theme;
pub mod themes;
pub mod tokens;

// Re-export commonly used types
pub use config::{HexColor, ThemeConfig, ThemeDefinition};
pub use error::{Result, ThemeError};
pub use fonts::{FontCatalog, StaticFonts, SystemFonts};
pub use registry::{ListenerId, ThemeRegistry};
pub use style::*;
pub use theme::{style_for, Theme, ThemeRef};
pub use themes::{BuiltinTheme, ConfiguredTheme, CorporateTheme, DarkTheme, EmergencyTheme};
pub use tokens::*;
