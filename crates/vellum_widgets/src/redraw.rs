//! Deferred redraw requests
//!
//! Widgets never paint synchronously. A visible change records a request in
//! the shared [`RedrawQueue`]; the host drains the queue and repaints the
//! listed widgets on its next frame.

use crate::widget::WidgetId;
use rustc_hash::FxHashSet;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Redraw requests collected between two host frames
#[derive(Debug, Default)]
pub struct RedrawQueue {
    pending: RefCell<Vec<WidgetId>>,
    /// Requests since creation, including drained ones
    total: Cell<u64>,
}

impl RedrawQueue {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Handle a widget uses to request its own redraws
    pub fn handle(self: &Rc<Self>, id: WidgetId) -> RedrawHandle {
        RedrawHandle {
            id,
            queue: Rc::clone(self),
        }
    }

    pub fn request(&self, id: WidgetId) {
        self.pending.borrow_mut().push(id);
        self.total.set(self.total.get() + 1);
    }

    /// Widgets to repaint, each once, in first-request order
    pub fn drain(&self) -> Vec<WidgetId> {
        let pending = std::mem::take(&mut *self.pending.borrow_mut());
        let mut seen = FxHashSet::default();
        pending.into_iter().filter(|id| seen.insert(*id)).collect()
    }

    /// Requests recorded since the last drain
    pub fn pending_len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    pub fn total_requests(&self) -> u64 {
        self.total.get()
    }
}

/// A widget's link to the redraw queue
#[derive(Clone, Debug)]
pub struct RedrawHandle {
    id: WidgetId,
    queue: Rc<RedrawQueue>,
}

impl RedrawHandle {
    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn request(&self) {
        tracing::trace!("redraw requested for {:?}", self.id);
        self.queue.request(self.id);
    }
}
