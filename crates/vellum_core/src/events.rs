//! Host input events
//!
//! The host windowing system delivers pointer and focus events to widgets.
//! Pointer coordinates are always widget-local: `(0, 0)` is the top-left
//! corner of the widget's layout rectangle.

/// Event type identifier
pub type EventType = u32;

/// Event types understood by themed widgets
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    pub const POINTER_ENTER: EventType = 4;
    pub const POINTER_LEAVE: EventType = 5;
    /// The host aborted the pointer interaction (capture lost, window deactivated)
    pub const POINTER_CANCEL: EventType = 6;
    pub const FOCUS: EventType = 10;
    pub const BLUR: EventType = 11;
}

/// A UI event with associated data
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
    pub timestamp: u64,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    Pointer {
        /// Widget-local x coordinate
        x: f32,
        /// Widget-local y coordinate
        y: f32,
        button: u8,
    },
    None,
}

impl Event {
    /// Create a pointer event at a widget-local position
    pub fn pointer(event_type: EventType, x: f32, y: f32) -> Self {
        Self {
            event_type,
            data: EventData::Pointer { x, y, button: 0 },
            timestamp: 0,
        }
    }

    /// Create an event without payload (focus, blur, cancel)
    pub fn simple(event_type: EventType) -> Self {
        Self {
            event_type,
            data: EventData::None,
            timestamp: 0,
        }
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Widget-local pointer position, if this is a pointer event
    pub fn position(&self) -> Option<(f32, f32)> {
        match self.data {
            EventData::Pointer { x, y, .. } => Some((x, y)),
            EventData::None => None,
        }
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self.data, EventData::Pointer { .. })
    }
}
