//! Vellum Paint API
//!
//! A recording 2D drawing API used by themed widgets to describe their
//! appearance. The host renderer replays the recorded [`PaintCommand`]s.
//!
//! # Features
//!
//! - Shape primitives (rect, rounded rect, ellipse)
//! - Path construction with cubic Bézier corners
//! - Solid and linear-gradient fills, strokes
//! - Font descriptors and aligned text placement
//! - Clipping

pub mod color;
pub mod context;
pub mod gradient;
pub mod path;
pub mod primitives;
pub mod text;

pub use color::Color;
pub use context::{FillStyle, PaintCommand, PaintContext, StrokeStyle};
pub use gradient::{Gradient, GradientStop};
pub use path::{Path, PathBuilder, PathCommand, Point};
pub use primitives::*;
pub use text::{FontSpec, FontWeight, HAlign, TextLayout, VAlign};
