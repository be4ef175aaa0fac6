use std::cell::{Cell, RefCell};
use std::fmt;

use super::WidgetTree;

/// One deferred setup step for a `T`.
pub type InitStep<T> = Box<dyn FnOnce(&T, &mut WidgetTree)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    NotStarted,
    Running,
    Done,
}

/// Run-exactly-once guard over an ordered list of setup steps.
///
/// Composite widgets register their build steps at construction and call
/// [`MultiOnce::run`] at the top of every public operation. The first call
/// runs every step in append order; later calls, and calls made from inside
/// a running step, return immediately.
pub struct MultiOnce<T> {
    state: Cell<InitState>,
    steps: RefCell<Vec<InitStep<T>>>,
}

impl<T> Default for MultiOnce<T> {
    fn default() -> Self {
        Self {
            state: Cell::new(InitState::NotStarted),
            steps: RefCell::new(Vec::new()),
        }
    }
}

impl<T> MultiOnce<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InitState {
        self.state.get()
    }

    pub fn is_done(&self) -> bool {
        self.state.get() == InitState::Done
    }

    /// Queue a step. Steps queued while running execute after the steps that
    /// were already queued. Steps queued after completion never run.
    pub fn append(&self, step: impl FnOnce(&T, &mut WidgetTree) + 'static) {
        if self.state.get() == InitState::Done {
            log::warn!("init step appended after initialization completed; dropped");
            return;
        }
        self.steps.borrow_mut().push(Box::new(step));
    }

    /// Run all queued steps if this is the first call. Returns true if this
    /// call performed the initialization.
    pub fn run(&self, target: &T, tree: &mut WidgetTree) -> bool {
        match self.state.get() {
            InitState::Done => return false,
            InitState::Running => {
                log::trace!("reentrant init ignored");
                return false;
            }
            InitState::NotStarted => {}
        }

        self.state.set(InitState::Running);
        loop {
            let pending = std::mem::take(&mut *self.steps.borrow_mut());
            if pending.is_empty() {
                break;
            }
            for step in pending {
                step(target, tree);
            }
        }
        self.state.set(InitState::Done);
        true
    }
}

impl<T> fmt::Debug for MultiOnce<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiOnce")
            .field("state", &self.state.get())
            .field("pending", &self.steps.borrow().len())
            .finish()
    }
}
