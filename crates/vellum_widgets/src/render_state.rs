//! Interaction states of self-drawn widgets
//!
//! Every interactive widget owns an [`InteractionMachine`]. It combines:
//! - A pointer FSM: normal, hovered, pressed (with pointer capture)
//! - A focus flag: the resting state shows focus when nothing else does
//! - An enabled flag: disabled overrides everything and clears focus
//! - For checkable widgets, a checked flag toggled by a completed click
//!
//! The machine reports whether the visible [`RenderState`] changed so the
//! owner can request exactly one redraw per change.

use vellum_core::events::{event_types, Event};
use vellum_core::StateMachine;
use vellum_paint::{Point, Rect};
use vellum_theme::{ColorSet, StateColors};

/// Interaction axis of the render state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interaction {
    #[default]
    Normal,
    Hovered,
    Pressed,
    Focused,
    Disabled,
}

/// Inputs the machine reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    PointerEnter,
    PointerLeave,
    PointerDown,
    /// Release over the widget
    PointerUpInside,
    /// Release after the pointer left while captured
    PointerUpOutside,
    PointerCancel,
    FocusGained,
    FocusLost,
}

impl Input {
    /// Translate a host event
    ///
    /// Pointer-up is inside when its widget-local position lies within
    /// `bounds`; events without a position count as inside. Pointer moves
    /// carry no state change and yield `None`.
    pub fn from_event(event: &Event, bounds: &Rect) -> Option<Self> {
        match event.event_type {
            event_types::POINTER_ENTER => Some(Self::PointerEnter),
            event_types::POINTER_LEAVE => Some(Self::PointerLeave),
            event_types::POINTER_DOWN => Some(Self::PointerDown),
            event_types::POINTER_UP => {
                let inside = event
                    .position()
                    .map_or(true, |(x, y)| bounds.local().contains(Point::new(x, y)));
                Some(if inside {
                    Self::PointerUpInside
                } else {
                    Self::PointerUpOutside
                })
            }
            event_types::POINTER_CANCEL => Some(Self::PointerCancel),
            event_types::FOCUS => Some(Self::FocusGained),
            event_types::BLUR => Some(Self::FocusLost),
            _ => None,
        }
    }
}

/// What a widget currently looks like
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderState {
    pub interaction: Interaction,
    /// Only meaningful for checkable widgets
    pub checked: bool,
}

impl RenderState {
    /// Color set for this state, combining the interaction and checked axes
    pub fn colors(&self, colors: &StateColors) -> ColorSet {
        let set = match self.interaction {
            Interaction::Normal => colors.normal,
            Interaction::Hovered => colors.hovered,
            Interaction::Pressed => colors.pressed,
            Interaction::Focused => colors.focused,
            Interaction::Disabled => colors.disabled,
        };
        if !self.checked {
            return set;
        }
        match self.interaction {
            Interaction::Normal => colors.checked,
            Interaction::Pressed => colors.checked.mix(&set, 0.5),
            Interaction::Disabled => colors.checked.mix(&set, 0.6),
            Interaction::Hovered | Interaction::Focused => ColorSet {
                fill: colors.checked.fill,
                ..set
            },
        }
    }
}

/// Result of feeding an input to a widget
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// The render state changed and a redraw was requested
    pub changed: bool,
    /// A press was released over the widget
    pub clicked: bool,
}

fn pointer_fsm() -> StateMachine<Interaction, Input> {
    use Input::*;
    use Interaction::*;

    StateMachine::builder(Normal)
        .on(Normal, PointerEnter, Hovered)
        .on(Focused, PointerEnter, Hovered)
        .on(Hovered, PointerLeave, Normal)
        .on(Hovered, PointerDown, Pressed)
        .on(Pressed, PointerUpInside, Hovered)
        .on(Pressed, PointerUpOutside, Normal)
        .on(Pressed, PointerCancel, Normal)
        .on(Normal, FocusGained, Focused)
        .on(Focused, FocusLost, Normal)
        .build()
}

/// Per-widget render/interaction state machine
#[derive(Clone, Debug)]
pub struct InteractionMachine {
    fsm: StateMachine<Interaction, Input>,
    focused: bool,
    checkable: bool,
    check_only: bool,
    checked: bool,
}

impl InteractionMachine {
    pub fn new() -> Self {
        Self {
            fsm: pointer_fsm(),
            focused: false,
            checkable: false,
            check_only: false,
            checked: false,
        }
    }

    /// A machine whose completed clicks toggle the checked axis
    pub fn checkable() -> Self {
        Self {
            checkable: true,
            ..Self::new()
        }
    }

    /// A checkable machine whose clicks only ever check
    ///
    /// Unchecking is left to the owner, as in a radio group.
    pub fn check_only() -> Self {
        Self {
            check_only: true,
            ..Self::checkable()
        }
    }

    pub fn state(&self) -> RenderState {
        RenderState {
            interaction: self.fsm.current_state(),
            checked: self.checkable && self.checked,
        }
    }

    pub fn interaction(&self) -> Interaction {
        self.fsm.current_state()
    }

    pub fn is_enabled(&self) -> bool {
        !self.fsm.is_in(Interaction::Disabled)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_checkable(&self) -> bool {
        self.checkable
    }

    pub fn is_checked(&self) -> bool {
        self.checkable && self.checked
    }

    /// Feed one input; disabled machines ignore everything
    pub fn handle(&mut self, input: Input) -> Response {
        if !self.is_enabled() {
            return Response::default();
        }
        let before = self.state();

        match input {
            Input::FocusGained => self.focused = true,
            Input::FocusLost => self.focused = false,
            _ => {}
        }

        let from = self.fsm.current_state();
        let clicked = match self.fsm.send(input) {
            Some(to) => {
                from == Interaction::Pressed
                    && input == Input::PointerUpInside
                    && to == Interaction::Hovered
            }
            None => false,
        };

        // The resting state shows focus
        if self.focused && self.fsm.is_in(Interaction::Normal) {
            self.fsm.force(Interaction::Focused);
        }
        if clicked && self.checkable {
            self.checked = self.check_only || !self.checked;
        }

        Response {
            changed: self.state() != before,
            clicked,
        }
    }

    /// Enable or disable; returns whether the render state changed
    ///
    /// Disabling clears focus. Re-enabling always returns to normal.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if enabled == self.is_enabled() {
            return false;
        }
        if enabled {
            self.fsm.force(Interaction::Normal)
        } else {
            self.focused = false;
            self.fsm.force(Interaction::Disabled)
        }
    }

    /// Set the checked axis programmatically; returns whether it changed
    pub fn set_checked(&mut self, checked: bool) -> bool {
        if !self.checkable || self.checked == checked {
            return false;
        }
        self.checked = checked;
        true
    }
}

impl Default for InteractionMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_paint::Color;

    fn press(machine: &mut InteractionMachine) {
        machine.handle(Input::PointerEnter);
        machine.handle(Input::PointerDown);
    }

    #[test]
    fn test_hover_press_release() {
        let mut machine = InteractionMachine::new();
        assert!(machine.handle(Input::PointerEnter).changed);
        assert_eq!(machine.interaction(), Interaction::Hovered);
        assert!(machine.handle(Input::PointerDown).changed);
        assert_eq!(machine.interaction(), Interaction::Pressed);

        let response = machine.handle(Input::PointerUpInside);
        assert_eq!(
            response,
            Response {
                changed: true,
                clicked: true
            }
        );
        assert_eq!(machine.interaction(), Interaction::Hovered);
    }

    #[test]
    fn test_pressed_keeps_capture_on_leave() {
        let mut machine = InteractionMachine::new();
        press(&mut machine);
        assert!(!machine.handle(Input::PointerLeave).changed);
        assert_eq!(machine.interaction(), Interaction::Pressed);

        let response = machine.handle(Input::PointerUpOutside);
        assert!(response.changed);
        assert!(!response.clicked);
        assert_eq!(machine.interaction(), Interaction::Normal);
    }

    #[test]
    fn test_cancel_returns_to_normal() {
        let mut machine = InteractionMachine::new();
        press(&mut machine);
        assert!(machine.handle(Input::PointerCancel).changed);
        assert_eq!(machine.interaction(), Interaction::Normal);
    }

    #[test]
    fn test_focus_is_the_resting_state() {
        let mut machine = InteractionMachine::new();
        assert!(machine.handle(Input::FocusGained).changed);
        assert_eq!(machine.interaction(), Interaction::Focused);

        machine.handle(Input::PointerEnter);
        assert_eq!(machine.interaction(), Interaction::Hovered);
        machine.handle(Input::PointerLeave);
        assert_eq!(machine.interaction(), Interaction::Focused);

        // Losing focus under the pointer changes nothing visible
        machine.handle(Input::PointerEnter);
        assert!(!machine.handle(Input::FocusLost).changed);
        machine.handle(Input::PointerLeave);
        assert_eq!(machine.interaction(), Interaction::Normal);
    }

    #[test]
    fn test_disable_clears_focus_and_ignores_input() {
        let mut machine = InteractionMachine::new();
        machine.handle(Input::FocusGained);
        assert!(machine.set_enabled(false));
        assert!(!machine.set_enabled(false));
        assert!(!machine.is_focused());
        assert_eq!(machine.handle(Input::PointerEnter), Response::default());

        assert!(machine.set_enabled(true));
        assert_eq!(machine.interaction(), Interaction::Normal);
    }

    #[test]
    fn test_click_toggles_checkable() {
        let mut machine = InteractionMachine::checkable();
        press(&mut machine);
        machine.handle(Input::PointerUpInside);
        assert!(machine.is_checked());

        press(&mut machine);
        machine.handle(Input::PointerUpOutside);
        assert!(machine.is_checked());

        machine.handle(Input::PointerEnter);
        machine.handle(Input::PointerDown);
        machine.handle(Input::PointerUpInside);
        assert!(!machine.is_checked());
    }

    #[test]
    fn test_check_only_click_keeps_checked() {
        let mut machine = InteractionMachine::check_only();
        press(&mut machine);
        assert!(machine.handle(Input::PointerUpInside).clicked);
        assert!(machine.is_checked());

        machine.handle(Input::PointerDown);
        let response = machine.handle(Input::PointerUpInside);
        assert!(response.clicked);
        assert!(machine.is_checked());

        assert!(machine.set_checked(false));
        assert!(!machine.is_checked());
    }

    #[test]
    fn test_plain_machine_ignores_checked() {
        let mut machine = InteractionMachine::new();
        assert!(!machine.set_checked(true));
        press(&mut machine);
        machine.handle(Input::PointerUpInside);
        assert!(!machine.state().checked);
    }

    #[test]
    fn test_from_event_inside_outside() {
        let bounds = Rect::new(100.0, 50.0, 80.0, 30.0);
        let inside = Event::pointer(event_types::POINTER_UP, 10.0, 10.0);
        let outside = Event::pointer(event_types::POINTER_UP, 120.0, 10.0);
        assert_eq!(
            Input::from_event(&inside, &bounds),
            Some(Input::PointerUpInside)
        );
        assert_eq!(
            Input::from_event(&outside, &bounds),
            Some(Input::PointerUpOutside)
        );
        assert_eq!(
            Input::from_event(&Event::simple(event_types::POINTER_UP), &bounds),
            Some(Input::PointerUpInside)
        );
        assert_eq!(
            Input::from_event(&Event::pointer(event_types::POINTER_MOVE, 1.0, 1.0), &bounds),
            None
        );
    }

    #[test]
    fn test_checked_colors_combine_axes() {
        let white = ColorSet::new(Color::WHITE, Color::WHITE, Color::WHITE);
        let black = ColorSet::new(Color::BLACK, Color::BLACK, Color::BLACK);
        let colors = StateColors {
            hovered: ColorSet::new(Color::WHITE, Color::BLACK, Color::BLACK),
            checked: black,
            ..StateColors::uniform(white)
        };

        let checked_normal = RenderState {
            interaction: Interaction::Normal,
            checked: true,
        };
        assert_eq!(checked_normal.colors(&colors), black);

        let checked_hover = RenderState {
            interaction: Interaction::Hovered,
            checked: true,
        };
        assert_eq!(checked_hover.colors(&colors).fill, Color::BLACK);

        let unchecked_hover = RenderState {
            interaction: Interaction::Hovered,
            checked: false,
        };
        assert_eq!(unchecked_hover.colors(&colors), colors.hovered);
    }
}
