//! Deferred callables and the escaping contract.
//!
//! A callable that must outlive the call that received it has to own
//! everything it captures, which is what the `'static` bound on
//! [`Escaping`] expresses. A callable that is only run before its receiver
//! returns can borrow instead; [`with_non_escaping`] takes one of those.
//!
//! [`deferred!`](crate::deferred!) wraps an expression in a [`Deferred`]
//! without evaluating it, standing in for automatic argument-to-closure
//! conversion.

use std::fmt;

/// A zero-argument callable evaluated at most once.
pub struct Deferred<'a, T> {
    thunk: Box<dyn FnOnce() -> T + 'a>,
}

/// A deferred value that may be stored beyond the current call.
pub type Escaping<T> = Deferred<'static, T>;

impl<'a, T> Deferred<'a, T> {
    /// Wraps `thunk` without calling it.
    pub fn new(thunk: impl FnOnce() -> T + 'a) -> Self {
        Self {
            thunk: Box::new(thunk),
        }
    }

    /// Runs the wrapped expression, consuming the callable.
    pub fn evaluate(self) -> T {
        (self.thunk)()
    }
}

impl<T> fmt::Debug for Deferred<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Deferred(..)")
    }
}

/// A zero-argument callable that can be invoked repeatedly.
pub struct Callback<'a, T> {
    body: Box<dyn FnMut() -> T + 'a>,
}

impl<'a, T> Callback<'a, T> {
    /// Wraps `body` without calling it.
    pub fn new(body: impl FnMut() -> T + 'a) -> Self {
        Self {
            body: Box::new(body),
        }
    }

    /// Invokes the callable.
    pub fn call(&mut self) -> T {
        (self.body)()
    }
}

impl<T> fmt::Debug for Callback<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Runs `closure` before returning. It never outlives this call.
pub fn with_non_escaping<F, T>(closure: F) -> T
where
    F: FnOnce() -> T,
{
    closure()
}

/// Wraps an expression in a [`Deferred`] without evaluating it.
///
/// `deferred!(expr)` borrows what `expr` mentions; `deferred!(move expr)`
/// moves it in, which is what an [`Escaping`] value needs.
///
/// ```
/// use closure_study::deferred;
///
/// let mut log = Vec::new();
/// let pending = deferred!(log.push("ran"));
/// pending.evaluate();
/// assert_eq!(log, ["ran"]);
/// ```
#[macro_export]
macro_rules! deferred {
    (move $expr:expr) => {
        $crate::deferred::Deferred::new(move || $expr)
    };
    ($expr:expr) => {
        $crate::deferred::Deferred::new(|| $expr)
    };
}
