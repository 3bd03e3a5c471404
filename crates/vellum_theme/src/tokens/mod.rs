//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a theme:
//! - Palette colors
//! - Typography (font family, size, weight per text role)
//! - Metrics (corner radius, border width, spacing units)

mod color;
mod metrics;
mod typography;

pub use color::*;
pub use metrics::*;
pub use typography::*;
