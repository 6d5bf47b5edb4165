//! Completion handlers that escape the function that received them.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::deferred::{Callback, with_non_escaping};

/// Completion handlers stored outside the functions that registered them.
#[derive(Debug, Default)]
pub struct HandlerRegistry {
    handlers: Vec<Callback<'static, ()>>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `handler` without calling it.
    pub fn register(&mut self, handler: impl FnMut() + 'static) {
        self.handlers.push(Callback::new(handler));
        debug!(registered = self.handlers.len(), "completion handler registered");
    }

    /// Calls the first registered handler, leaving it registered.
    ///
    /// Returns `false` when nothing has been registered.
    pub fn call_first(&mut self) -> bool {
        match self.handlers.first_mut() {
            Some(handler) => {
                handler.call();
                true
            }
            None => false,
        }
    }

    /// Calls every handler in registration order.
    pub fn call_all(&mut self) {
        for handler in &mut self.handlers {
            handler.call();
        }
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// An object whose state is changed by both kinds of closure.
#[derive(Debug, Clone)]
pub struct Target {
    x: Rc<Cell<i32>>,
}

impl Default for Target {
    fn default() -> Self {
        Self::new()
    }
}

impl Target {
    /// Value of `x` on construction.
    pub const INITIAL_X: i32 = 10;

    /// Creates a target with `x` set to [`Self::INITIAL_X`].
    pub fn new() -> Self {
        Self {
            x: Rc::new(Cell::new(Self::INITIAL_X)),
        }
    }

    /// Current value of `x`.
    pub fn x(&self) -> i32 {
        self.x.get()
    }

    /// Registers an escaping handler that sets `x` to 100, then runs a
    /// non-escaping closure that sets `x` to 200.
    ///
    /// The escaping handler needs its own handle to `x`; the non-escaping
    /// closure borrows `self` directly.
    pub fn do_something(&self, registry: &mut HandlerRegistry) {
        let x = Rc::clone(&self.x);
        registry.register(move || x.set(100));
        with_non_escaping(|| self.x.set(200));
    }
}
