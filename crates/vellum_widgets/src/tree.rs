//! Widget tree arena
//!
//! Widgets live in a slotmap keyed by [`WidgetId`]; nodes hold child id
//! lists. Links are not validated: a child id may point at a removed widget
//! and a parent may be linked below its own descendant. Walks over the tree
//! guard against both.

use crate::redraw::RedrawQueue;
use crate::render_state::Response;
use crate::widget::{Widget, WidgetId};
use rustc_hash::FxHashSet;
use slotmap::SlotMap;
use smallvec::SmallVec;
use std::rc::Rc;
use vellum_core::events::Event;
use vellum_paint::PaintContext;

pub(crate) type ChildList = SmallVec<[WidgetId; 4]>;

struct Node {
    widget: Box<dyn Widget>,
    parent: Option<WidgetId>,
    children: ChildList,
}

/// Owner of all widgets of one window
pub struct WidgetTree {
    nodes: SlotMap<WidgetId, Node>,
    redraw: Rc<RedrawQueue>,
}

impl WidgetTree {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            redraw: RedrawQueue::new(),
        }
    }

    /// Queue receiving the redraw requests of every widget in this tree
    pub fn redraw_queue(&self) -> &Rc<RedrawQueue> {
        &self.redraw
    }

    /// Add a parentless widget
    pub fn insert(&mut self, widget: impl Widget) -> WidgetId {
        self.insert_boxed(Box::new(widget))
    }

    pub fn insert_boxed(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        let id = self.nodes.insert(Node {
            widget,
            parent: None,
            children: ChildList::new(),
        });
        let handle = self.redraw.handle(id);
        if let Some(node) = self.nodes.get_mut(id) {
            node.widget.attach(handle);
        }
        id
    }

    /// Add a widget as the last child of `parent`
    ///
    /// Returns `None` (and drops the widget) if `parent` does not exist.
    pub fn insert_child(&mut self, parent: WidgetId, widget: impl Widget) -> Option<WidgetId> {
        if !self.nodes.contains_key(parent) {
            tracing::warn!("insert_child: parent {:?} does not exist", parent);
            return None;
        }
        let id = self.insert(widget);
        self.link(parent, id);
        Some(id)
    }

    /// Append `child` to `parent`'s children without any validation
    ///
    /// Returns false only if `parent` does not exist.
    pub fn link(&mut self, parent: WidgetId, child: WidgetId) -> bool {
        let Some(node) = self.nodes.get_mut(parent) else {
            return false;
        };
        node.children.push(child);
        if let Some(child_node) = self.nodes.get_mut(child) {
            child_node.parent = Some(parent);
        }
        true
    }

    /// Remove a widget, detaching it from its parent
    ///
    /// Its children stay in the tree without a parent.
    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let node = self.nodes.remove(id)?;
        if let Some(parent) = node.parent.and_then(|p| self.nodes.get_mut(p)) {
            parent.children.retain(|child| *child != id);
        }
        for child in &node.children {
            if let Some(child_node) = self.nodes.get_mut(*child) {
                if child_node.parent == Some(id) {
                    child_node.parent = None;
                }
            }
        }
        Some(node.widget)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.nodes.get(id)?.parent
    }

    /// Child ids in order; may include dangling ids
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.nodes.get(id).map(|node| node.widget.as_ref())
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        match self.nodes.get_mut(id) {
            Some(node) => Some(node.widget.as_mut()),
            None => None,
        }
    }

    /// Typed access to a widget
    pub fn get<T: Widget>(&self, id: WidgetId) -> Option<&T> {
        self.widget(id)?.as_any().downcast_ref::<T>()
    }

    pub fn get_mut<T: Widget>(&mut self, id: WidgetId) -> Option<&mut T> {
        self.widget_mut(id)?.as_any_mut().downcast_mut::<T>()
    }

    /// Deliver a host event to one widget
    pub fn dispatch(&mut self, id: WidgetId, event: &Event) -> Response {
        match self.widget_mut(id) {
            Some(widget) => widget.handle_event(event),
            None => Response::default(),
        }
    }

    /// Ids reachable from `root` in pre-order, each once
    ///
    /// Dangling ids and already visited ids are skipped.
    pub fn descendants(&self, root: WidgetId) -> Vec<WidgetId> {
        let mut order = Vec::new();
        let mut visited = FxHashSet::default();
        let mut stack: SmallVec<[WidgetId; 16]> = SmallVec::new();
        stack.push(root);

        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            if !visited.insert(id) {
                continue;
            }
            order.push(id);
            stack.extend(node.children.iter().rev().copied());
        }
        order
    }

    /// Paint `root` and everything below it, parents first
    pub fn paint(&self, root: WidgetId, ctx: &mut PaintContext) {
        for id in self.descendants(root) {
            if let Some(widget) = self.widget(id) {
                widget.paint(ctx);
            }
        }
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WidgetTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetTree")
            .field("widgets", &self.nodes.len())
            .field("pending_redraws", &self.redraw.pending_len())
            .finish()
    }
}
