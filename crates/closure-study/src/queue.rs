//! The customer line, served through deferred providers.
//!
//! Creating a provider never touches the line. A name is removed only when
//! a provider is invoked, one name per invocation, first in first out.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tracing::debug;

use crate::deferred::{Callback, Deferred, Escaping};
use crate::error::StudyError;

/// A shared first-in-first-out line of customer names.
///
/// Cloning yields another handle to the same line.
#[derive(Debug, Clone, Default)]
pub struct CustomerLine {
    names: Rc<RefCell<VecDeque<String>>>,
}

impl CustomerLine {
    /// Creates a line holding `names` in order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: Rc::new(RefCell::new(names.into_iter().map(Into::into).collect())),
        }
    }

    /// Number of customers still waiting.
    pub fn len(&self) -> usize {
        self.names.borrow().len()
    }

    /// Returns true if nobody is waiting.
    pub fn is_empty(&self) -> bool {
        self.names.borrow().is_empty()
    }

    /// Snapshot of the waiting names, front first.
    pub fn names(&self) -> Vec<String> {
        self.names.borrow().iter().cloned().collect()
    }

    /// Adds a customer to the back of the line.
    pub fn push(&self, name: impl Into<String>) {
        self.names.borrow_mut().push_back(name.into());
    }

    /// Removes and returns the customer at the front.
    pub fn remove_first(&self) -> Result<String, StudyError> {
        let name = self
            .names
            .borrow_mut()
            .pop_front()
            .ok_or(StudyError::EmptyQueue)?;
        debug!(customer = %name, remaining = self.len(), "customer removed from line");
        Ok(name)
    }

    /// A stored callable that removes the front customer each time it is
    /// called.
    pub fn provider(&self) -> Callback<'static, Result<String, StudyError>> {
        let line = self.clone();
        Callback::new(move || line.remove_first())
    }
}

/// Formats the greeting for a served customer.
fn now_serving(name: &str) -> String {
    format!("Now serving {name}!")
}

/// Serves the customer produced by an explicit closure.
pub fn serve_customer<F>(customer_provider: F) -> Result<String, StudyError>
where
    F: FnOnce() -> Result<String, StudyError>,
{
    let name = customer_provider()?;
    Ok(now_serving(&name))
}

/// Serves the customer produced by a wrapped expression.
///
/// Call sites pass `deferred!(line.remove_first())`; the removal happens
/// here, not at the call site.
pub fn serve_deferred(
    customer_provider: Deferred<'_, Result<String, StudyError>>,
) -> Result<String, StudyError> {
    let name = customer_provider.evaluate()?;
    Ok(now_serving(&name))
}

/// Providers collected now and served later.
#[derive(Debug, Default)]
pub struct ProviderCollection {
    providers: Vec<Escaping<Result<String, StudyError>>>,
}

impl ProviderCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `customer_provider` without evaluating it.
    pub fn collect(&mut self, customer_provider: Escaping<Result<String, StudyError>>) {
        self.providers.push(customer_provider);
        debug!(collected = self.providers.len(), "customer provider collected");
    }

    /// Number of providers waiting to be served.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns true if no providers are waiting.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Evaluates every provider in collection order and drains the
    /// collection.
    pub fn serve_all(&mut self) -> Vec<Result<String, StudyError>> {
        self.providers
            .drain(..)
            .map(serve_deferred)
            .collect()
    }
}
