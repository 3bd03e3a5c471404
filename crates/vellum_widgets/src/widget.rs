//! Base widget trait and types

use crate::redraw::RedrawHandle;
use crate::render_state::Response;
use crate::themeable::Themeable;
use slotmap::new_key_type;
use std::any::Any;
use vellum_core::events::Event;
use vellum_paint::{PaintContext, Rect};

new_key_type! {
    pub struct WidgetId;
}

/// Base trait for all widgets
pub trait Widget: Any {
    /// Short type name used in logs
    fn kind(&self) -> &'static str;

    /// Layout-assigned bounds in window coordinates
    fn bounds(&self) -> Rect;

    /// Store new bounds; painting picks them up on the next redraw
    fn set_bounds(&mut self, bounds: Rect);

    /// Handle a host event with widget-local pointer coordinates
    fn handle_event(&mut self, _event: &Event) -> Response {
        Response::default()
    }

    /// Record the widget's appearance
    fn paint(&self, ctx: &mut PaintContext);

    /// Connect the widget to its tree's redraw queue
    fn attach(&mut self, _redraw: RedrawHandle) {}

    /// The theming capability, if the widget has one
    fn as_themeable(&self) -> Option<&dyn Themeable> {
        None
    }

    fn as_themeable_mut(&mut self) -> Option<&mut dyn Themeable> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Implements the boilerplate [`Widget`] methods of a themeable widget whose
/// state lives in a `base: WidgetBase` field
macro_rules! themeable_widget {
    () => {
        fn bounds(&self) -> vellum_paint::Rect {
            self.base.bounds()
        }

        fn set_bounds(&mut self, bounds: vellum_paint::Rect) {
            self.base.set_bounds(bounds);
        }

        fn attach(&mut self, redraw: $crate::redraw::RedrawHandle) {
            self.base.attach(redraw);
        }

        fn as_themeable(&self) -> Option<&dyn $crate::themeable::Themeable> {
            Some(self)
        }

        fn as_themeable_mut(&mut self) -> Option<&mut dyn $crate::themeable::Themeable> {
            Some(self)
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    };
}

pub(crate) use themeable_widget;
