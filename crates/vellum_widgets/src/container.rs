//! Grouping widget without appearance
//!
//! Containers exist only to structure the tree. They have no theming
//! capability; theme application passes through them to their children.

use crate::widget::Widget;
use std::any::Any;
use vellum_paint::{PaintContext, Rect};

#[derive(Debug, Default)]
pub struct Container {
    bounds: Rect,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for Container {
    fn kind(&self) -> &'static str {
        "Container"
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn paint(&self, _ctx: &mut PaintContext) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
