use std::cell::{Cell, RefCell};
use std::rc::Rc;

use vellum_core::events::{event_types, Event};
use vellum_paint::{Color, Rect};
use vellum_theme::{ColorToken, ConfiguredTheme, EmergencyTheme, Theme, ThemeRef, ThemeRegistry};
use vellum_widgets::{
    Button, Container, Interaction, Label, Panel, StyleApplicator, Themeable, WidgetId, WidgetTree,
};

const BLUE: u32 = 0x1E66F5;
const BLACK: u32 = 0x000000;

fn named(name: &str, primary: u32) -> ThemeRef {
    Rc::new(
        ConfiguredTheme::derive(&EmergencyTheme::new(), name)
            .unwrap()
            .with_color(ColorToken::Primary, Color::from_hex(primary)),
    )
}

fn registry() -> ThemeRegistry {
    let registry = ThemeRegistry::new(named("Light", BLUE));
    registry.register(named("Dark", BLACK));
    registry
}

/// root -> (panel -> (ok, cancel), label)
struct Scene {
    tree: WidgetTree,
    root: WidgetId,
    panel: WidgetId,
    ok: WidgetId,
    cancel: WidgetId,
    label: WidgetId,
}

fn scene() -> Scene {
    let mut tree = WidgetTree::new();
    let root = tree.insert(Container::new());
    let panel = tree.insert_child(root, Panel::card()).unwrap();
    let ok = tree.insert_child(panel, Button::new("OK")).unwrap();
    let cancel = tree.insert_child(panel, Button::new("Cancel")).unwrap();
    let label = tree.insert_child(root, Label::new("Ready")).unwrap();
    Scene {
        tree,
        root,
        panel,
        ok,
        cancel,
        label,
    }
}

fn fill(tree: &WidgetTree, id: WidgetId) -> Color {
    tree.widget(id)
        .and_then(|widget| widget.as_themeable())
        .map(|themeable| themeable.fill_color())
        .unwrap()
}

#[test]
fn test_one_apply_restyles_nested_buttons() {
    let registry = registry();
    let mut scene = scene();
    StyleApplicator::apply_current(&mut scene.tree, scene.root, &registry);
    assert_eq!(fill(&scene.tree, scene.ok), Color::from_hex(BLUE));

    assert!(registry.activate("Dark"));
    let report = StyleApplicator::apply_current(&mut scene.tree, scene.root, &registry);

    assert_eq!(report.visited, 5);
    assert_eq!(report.styled, 4);
    assert_eq!(fill(&scene.tree, scene.ok), Color::from_hex(BLACK));
    assert_eq!(fill(&scene.tree, scene.cancel), Color::from_hex(BLACK));
}

#[test]
fn test_apply_twice_is_idempotent() {
    let registry = registry();
    let mut scene = scene();
    let theme = registry.current();

    StyleApplicator::apply(&mut scene.tree, scene.root, &theme);
    let styles: Vec<_> = [scene.panel, scene.ok, scene.cancel, scene.label]
        .iter()
        .map(|id| scene.tree.widget(*id).unwrap().as_themeable().unwrap().style().clone())
        .collect();
    let requests = scene.tree.redraw_queue().total_requests();

    StyleApplicator::apply(&mut scene.tree, scene.root, &theme);
    let again: Vec<_> = [scene.panel, scene.ok, scene.cancel, scene.label]
        .iter()
        .map(|id| scene.tree.widget(*id).unwrap().as_themeable().unwrap().style().clone())
        .collect();

    assert_eq!(styles, again);
    assert_eq!(scene.tree.redraw_queue().total_requests(), requests);
}

#[test]
fn test_unknown_theme_keeps_styles() {
    let registry = registry();
    let mut scene = scene();
    StyleApplicator::apply_current(&mut scene.tree, scene.root, &registry);

    assert!(!registry.activate("Nonexistent"));
    assert_eq!(registry.current().name(), "Light");
    StyleApplicator::apply_current(&mut scene.tree, scene.root, &registry);
    assert_eq!(fill(&scene.tree, scene.ok), Color::from_hex(BLUE));
}

#[test]
fn test_manual_edits_last_until_next_apply() {
    let registry = registry();
    let mut scene = scene();
    StyleApplicator::apply_current(&mut scene.tree, scene.root, &registry);

    let button = scene.tree.get_mut::<Button>(scene.ok).unwrap();
    button.set_corner_radius(12.0);
    button.set_fill_color(Color::WHITE);
    assert_eq!(button.corner_radius(), 12.0);

    StyleApplicator::apply_current(&mut scene.tree, scene.root, &registry);
    let button = scene.tree.get::<Button>(scene.ok).unwrap();
    assert_eq!(button.corner_radius(), registry.current().metrics().corner_radius);
    assert_eq!(button.fill_color(), Color::from_hex(BLUE));
}

#[test]
fn test_unknown_category_tag_uses_default_rule() {
    let registry = registry();
    let theme = registry.current();
    let mut button = Button::new("Odd");
    button.set_category_tag("sparkly");
    button.apply_theme(&theme);

    assert_eq!(button.category(), None);
    assert_eq!(*button.style(), {
        let mut expected = theme.default_style(Default::default());
        expected.category = None;
        expected
    });
}

#[test]
fn test_bound_tree_follows_activation() {
    let registry = registry();
    let Scene { tree, root, ok, .. } = scene();
    let tree = Rc::new(RefCell::new(tree));
    StyleApplicator::apply_current(&mut tree.borrow_mut(), root, &registry);
    StyleApplicator::bind(&registry, Rc::clone(&tree), root);

    assert!(registry.activate("Dark"));
    assert_eq!(fill(&tree.borrow(), ok), Color::from_hex(BLACK));
}

#[test]
fn test_reentrant_activation_from_listener() {
    let registry = registry();
    registry.register(named("Contrast", 0xFFFF00));
    let Scene { tree, root, ok, .. } = scene();
    let tree = Rc::new(RefCell::new(tree));
    StyleApplicator::bind(&registry, Rc::clone(&tree), root);

    // Redirect the first switch to Dark onward to Contrast
    let redirected = Rc::new(Cell::new(false));
    let flag = Rc::clone(&redirected);
    registry.subscribe(move |registry, theme| {
        if theme.name() == "Dark" && !flag.get() {
            flag.set(true);
            registry.activate("Contrast");
        }
    });

    assert!(registry.activate("Dark"));
    assert!(redirected.get());
    assert_eq!(registry.current().name(), "Contrast");
    assert_eq!(fill(&tree.borrow(), ok), Color::from_hex(0xFFFF00));
}

#[test]
fn test_busy_tree_skips_notification() {
    let registry = registry();
    let Scene { tree, root, ok, .. } = scene();
    let tree = Rc::new(RefCell::new(tree));
    StyleApplicator::apply_current(&mut tree.borrow_mut(), root, &registry);
    StyleApplicator::bind(&registry, Rc::clone(&tree), root);

    {
        let _held = tree.borrow();
        assert!(registry.activate("Dark"));
    }
    assert_eq!(fill(&tree.borrow(), ok), Color::from_hex(BLUE));

    StyleApplicator::apply_current(&mut tree.borrow_mut(), root, &registry);
    assert_eq!(fill(&tree.borrow(), ok), Color::from_hex(BLACK));
}

#[test]
fn test_disable_while_hovered() {
    let mut scene = scene();
    let ok = scene.ok;
    scene.tree.widget_mut(ok).unwrap().set_bounds(Rect::new(10.0, 10.0, 80.0, 24.0));
    scene.tree.redraw_queue().drain();

    scene.tree.dispatch(ok, &Event::simple(event_types::POINTER_ENTER));
    assert_eq!(scene.tree.redraw_queue().drain(), vec![ok]);

    let button = scene.tree.get_mut::<Button>(ok).unwrap();
    assert!(button.set_enabled(false));
    assert_eq!(button.render_state().interaction, Interaction::Disabled);
    assert_eq!(scene.tree.redraw_queue().drain(), vec![ok]);

    // Disabled widgets ignore the pointer
    let response = scene.tree.dispatch(ok, &Event::simple(event_types::POINTER_LEAVE));
    assert!(!response.changed);
    assert!(scene.tree.redraw_queue().is_empty());

    let button = scene.tree.get_mut::<Button>(ok).unwrap();
    assert!(button.set_enabled(true));
    assert_eq!(button.render_state().interaction, Interaction::Normal);
    assert_eq!(scene.tree.redraw_queue().drain(), vec![ok]);
}

#[test]
fn test_press_then_release_outside() {
    let mut scene = scene();
    let ok = scene.ok;
    scene.tree.widget_mut(ok).unwrap().set_bounds(Rect::new(10.0, 10.0, 80.0, 24.0));

    scene.tree.dispatch(ok, &Event::simple(event_types::POINTER_ENTER));
    scene.tree.dispatch(ok, &Event::pointer(event_types::POINTER_DOWN, 4.0, 4.0));
    let response = scene
        .tree
        .dispatch(ok, &Event::pointer(event_types::POINTER_UP, 300.0, 4.0));

    assert!(response.changed);
    assert!(!response.clicked);
    let button = scene.tree.get_mut::<Button>(ok).unwrap();
    assert_eq!(button.render_state().interaction, Interaction::Normal);
    assert!(!button.take_clicked());
}

/// Collects the level and message of every event
#[derive(Clone, Default)]
struct Capture {
    events: std::sync::Arc<std::sync::Mutex<Vec<(tracing::Level, String)>>>,
}

struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for Capture {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.events
            .lock()
            .unwrap()
            .push((*event.metadata().level(), visitor.0));
    }
}

#[test]
fn test_broken_links_are_logged_and_skipped() {
    use tracing_subscriber::layer::SubscriberExt;

    let registry = registry();
    let mut scene = scene();
    let orphan = scene.tree.insert_child(scene.panel, Button::new("Gone")).unwrap();
    scene.tree.remove(orphan);
    scene.tree.link(scene.panel, orphan);
    scene.tree.link(scene.ok, scene.root);

    let capture = Capture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    let report = tracing::subscriber::with_default(subscriber, || {
        StyleApplicator::apply_current(&mut scene.tree, scene.root, &registry)
    });

    assert_eq!(report.visited, 5);
    assert_eq!(report.skipped, 2);
    let warnings: Vec<_> = capture
        .events
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == tracing::Level::WARN)
        .map(|(_, message)| message.clone())
        .collect();
    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().any(|message| message.contains("dangling")));
    assert!(warnings.iter().any(|message| message.contains("cycle")));
}
