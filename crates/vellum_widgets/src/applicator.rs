//! Pushing a theme into a widget tree
//!
//! [`StyleApplicator`] walks a subtree parent-first and hands the theme to
//! every widget that exposes the [`Themeable`](crate::Themeable)
//! capability. Widgets without it are passed through; their children are
//! still visited.

use crate::tree::WidgetTree;
use crate::widget::WidgetId;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use vellum_theme::{ListenerId, ThemeRef, ThemeRegistry};

/// Counts gathered during one walk
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Widgets reached, themeable or not
    pub visited: usize,
    /// Widgets that received the theme
    pub styled: usize,
    /// Dangling or already visited ids that were skipped
    pub skipped: usize,
}

/// Stateless tree walker
pub struct StyleApplicator;

impl StyleApplicator {
    /// Apply `theme` to `root` and everything below it
    pub fn apply(tree: &mut WidgetTree, root: WidgetId, theme: &ThemeRef) -> ApplyReport {
        let mut report = ApplyReport::default();
        let mut visited = FxHashSet::default();
        let mut stack: SmallVec<[WidgetId; 16]> = SmallVec::new();
        stack.push(root);

        while let Some(id) = stack.pop() {
            if !tree.contains(id) {
                tracing::warn!("Skipping dangling widget {:?}", id);
                report.skipped += 1;
                continue;
            }
            if !visited.insert(id) {
                tracing::warn!("Widget {:?} reached twice, tree has a cycle", id);
                report.skipped += 1;
                continue;
            }
            report.visited += 1;

            if let Some(widget) = tree.widget_mut(id) {
                let kind = widget.kind();
                if let Some(themeable) = widget.as_themeable_mut() {
                    themeable.apply_theme(theme);
                    report.styled += 1;
                    tracing::trace!("Styled {} {:?} with '{}'", kind, id, theme.name());
                }
            }

            // Reversed so the first child is handled first
            stack.extend(tree.children(id).iter().rev().copied());
        }

        tracing::debug!(
            "Applied theme '{}': {} visited, {} styled, {} skipped",
            theme.name(),
            report.visited,
            report.styled,
            report.skipped
        );
        report
    }

    /// Apply the registry's active theme
    pub fn apply_current(
        tree: &mut WidgetTree,
        root: WidgetId,
        registry: &ThemeRegistry,
    ) -> ApplyReport {
        Self::apply(tree, root, &registry.current())
    }

    /// Re-apply every theme `registry` activates to the subtree at `root`
    ///
    /// If the tree is borrowed elsewhere when a change arrives, that change
    /// is skipped with a warning.
    pub fn bind(
        registry: &ThemeRegistry,
        tree: Rc<RefCell<WidgetTree>>,
        root: WidgetId,
    ) -> ListenerId {
        registry.subscribe(move |_, theme| match tree.try_borrow_mut() {
            Ok(mut tree) => {
                Self::apply(&mut tree, root, theme);
            }
            Err(_) => {
                tracing::warn!(
                    "Widget tree busy, theme '{}' not applied to {:?}",
                    theme.name(),
                    root
                );
            }
        })
    }
}
