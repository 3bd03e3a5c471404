//! Property-based invariant tests for widget interaction states.
//!
//! For any sequence of host events and programmatic changes:
//!
//! 1. Each visible state change queues exactly one redraw; no-op inputs queue none.
//! 2. A disabled widget never holds focus and never reports a click.
//! 3. Pressed is only entered from Hovered.
//! 4. The checked axis flips exactly once per reported click.

use proptest::prelude::*;
use vellum_core::events::{event_types, Event};
use vellum_paint::Rect;
use vellum_widgets::{Checkbox, Interaction, Themeable, Widget, WidgetTree};

const BOUNDS: Rect = Rect::new(20.0, 20.0, 100.0, 24.0);

#[derive(Clone, Debug)]
enum Op {
    Event { event_type: u32, inside: bool },
    Enable(bool),
    Check(bool),
}

fn op() -> impl Strategy<Value = Op> {
    let event_type = prop::sample::select(vec![
        event_types::POINTER_ENTER,
        event_types::POINTER_LEAVE,
        event_types::POINTER_DOWN,
        event_types::POINTER_UP,
        event_types::POINTER_MOVE,
        event_types::POINTER_CANCEL,
        event_types::FOCUS,
        event_types::BLUR,
    ]);
    prop_oneof![
        6 => (event_type, any::<bool>())
            .prop_map(|(event_type, inside)| Op::Event { event_type, inside }),
        1 => any::<bool>().prop_map(Op::Enable),
        1 => any::<bool>().prop_map(Op::Check),
    ]
}

fn event(event_type: u32, inside: bool) -> Event {
    let x = if inside { 5.0 } else { BOUNDS.width + 50.0 };
    Event::pointer(event_type, x, 5.0)
}

proptest! {
    #[test]
    fn redraws_match_state_changes(ops in proptest::collection::vec(op(), 0..64)) {
        let mut tree = WidgetTree::new();
        let id = tree.insert(Checkbox::new("Option"));
        tree.widget_mut(id).unwrap().set_bounds(BOUNDS);

        let mut changes = 0u64;
        for op in &ops {
            let before = tree.get::<Checkbox>(id).unwrap().base().render_state();
            let mut clicked = false;
            match op {
                Op::Event { event_type, inside } => {
                    clicked = tree.dispatch(id, &event(*event_type, *inside)).clicked;
                }
                Op::Enable(enabled) => {
                    tree.get_mut::<Checkbox>(id).unwrap().set_enabled(*enabled);
                }
                Op::Check(checked) => {
                    tree.get_mut::<Checkbox>(id).unwrap().set_checked(*checked);
                }
            }

            let checkbox = tree.get::<Checkbox>(id).unwrap();
            let after = checkbox.base().render_state();
            if after != before {
                changes += 1;
            }

            if after.interaction == Interaction::Disabled {
                prop_assert!(!checkbox.base().machine().is_focused());
                prop_assert!(!clicked);
            }
            if after.interaction == Interaction::Pressed
                && before.interaction != Interaction::Pressed
            {
                prop_assert_eq!(before.interaction, Interaction::Hovered);
            }
            if clicked {
                prop_assert_ne!(after.checked, before.checked);
            }
        }

        prop_assert_eq!(tree.redraw_queue().total_requests(), changes);
        prop_assert_eq!(tree.get::<Checkbox>(id).unwrap().base().redraw_count(), changes);
    }
}
