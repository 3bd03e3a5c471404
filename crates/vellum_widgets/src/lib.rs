//! Vellum Widget Library
//!
//! Self-drawn widgets with FSM-driven interactions and swappable themes.
//!
//! # Overview
//!
//! - **Widget tree**: widgets live in a [`WidgetTree`] arena keyed by [`WidgetId`]
//! - **Theming**: widgets with the [`Themeable`] capability store a
//!   [`WidgetStyle`](vellum_theme::WidgetStyle) snapshot computed from a theme
//! - **Style application**: [`StyleApplicator`] pushes a theme into a subtree,
//!   parents first, passing through widgets without the capability
//! - **Interaction**: every interactive widget owns an [`InteractionMachine`]
//! - **Redraw**: visible changes queue one deferred request in the tree's
//!   [`RedrawQueue`]
//!
//! # Quick Start
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use vellum_theme::{StaticFonts, ThemeRegistry};
//! use vellum_widgets::{Button, Container, StyleApplicator, Themeable, WidgetTree};
//!
//! let registry = ThemeRegistry::with_fonts(&StaticFonts::generic());
//! let tree = Rc::new(RefCell::new(WidgetTree::new()));
//!
//! let (root, ok) = {
//!     let mut tree = tree.borrow_mut();
//!     let root = tree.insert(Container::new());
//!     let ok = tree.insert_child(root, Button::new("OK")).unwrap();
//!     StyleApplicator::apply_current(&mut tree, root, &registry);
//!     (root, ok)
//! };
//!
//! // Restyle the tree whenever the active theme changes
//! StyleApplicator::bind(&registry, Rc::clone(&tree), root);
//! registry.activate("Dark");
//!
//! let tree = tree.borrow();
//! let button = tree.get::<Button>(ok).unwrap();
//! assert_eq!(button.fill_color(), registry.current().palette().primary);
//! ```

pub mod applicator;
pub mod base;
pub mod button;
pub mod checkbox;
pub mod container;
pub mod label;
pub mod menu;
pub mod painter;
pub mod panel;
pub mod progress;
pub mod redraw;
pub mod render_state;
pub mod text_input;
pub mod themeable;
pub mod tree;
pub mod widget;

pub use applicator::{ApplyReport, StyleApplicator};
pub use base::WidgetBase;
pub use button::Button;
pub use checkbox::{Checkbox, Indicator};
pub use container::Container;
pub use label::Label;
pub use menu::{Menu, MenuItem};
pub use panel::Panel;
pub use progress::ProgressBar;
pub use redraw::{RedrawHandle, RedrawQueue};
pub use render_state::{Input, Interaction, InteractionMachine, RenderState, Response};
pub use text_input::TextInput;
pub use themeable::Themeable;
pub use tree::WidgetTree;
pub use widget::{Widget, WidgetId};
