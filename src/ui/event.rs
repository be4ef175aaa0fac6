use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use super::{WidgetId, WidgetTree};

/// Callback registered on an [`Event`]. Receives the tree so handlers can
/// mutate other widgets while the event is being fired.
pub type Handler<A> = Rc<dyn Fn(&mut WidgetTree, &A)>;

/// Typed observer list.
///
/// Handlers run synchronously, in registration order, before `fire` returns.
/// There is no queue and no reentrancy guard: a handler that fires another
/// event sees that event's handlers run immediately.
pub struct Event<A> {
    handlers: Vec<Handler<A>>,
}

impl<A> Default for Event<A> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl<A> Event<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Handlers are never removed; they live as long as
    /// the widget that owns the event.
    pub fn add_handler(&mut self, handler: impl Fn(&mut WidgetTree, &A) + 'static) {
        self.handlers.push(Rc::new(handler));
    }

    /// Register an already shared handler.
    pub fn add_shared(&mut self, handler: Handler<A>) {
        self.handlers.push(handler);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Snapshot the current handlers.
    ///
    /// Events stored on widgets inside the tree cannot be fired while the
    /// tree is borrowed, so callers take a snapshot, release the borrow, then
    /// fire the snapshot with `&mut WidgetTree`. Handlers added during firing
    /// are not part of the snapshot.
    pub fn dispatcher(&self) -> Dispatcher<A> {
        Dispatcher {
            handlers: self.handlers.iter().cloned().collect(),
        }
    }

    /// Fire an event that does not live inside `tree`.
    pub fn fire(&self, tree: &mut WidgetTree, args: &A) {
        self.dispatcher().fire(tree, args);
    }
}

impl<A> fmt::Debug for Event<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// Handlers captured from an [`Event`], ready to fire.
pub struct Dispatcher<A> {
    handlers: SmallVec<[Handler<A>; 4]>,
}

impl<A> Dispatcher<A> {
    pub fn fire(self, tree: &mut WidgetTree, args: &A) {
        for handler in &self.handlers {
            handler(tree, args);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Event payloads
// ---------------------------------------------------------------------------

/// Fired by a Button on press + release over the same button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonClicked {
    pub button: WidgetId,
}

/// Fired by a Slider whenever its current value changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderChanged {
    pub slider: WidgetId,
    pub current: i32,
    /// True while the value is being changed by dragging the handle.
    pub dragging: bool,
}

/// Fired by a ScrollContainer on wheel input.
/// Positive `y` = wheel rolled away from the user (towards the top).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetScrolled {
    pub widget: WidgetId,
    pub x: f32,
    pub y: f32,
}
