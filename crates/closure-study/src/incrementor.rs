//! Capturing values, and closures as reference types.
//!
//! A closure returned from [`make_incrementor`] keeps the running total it
//! captured alive after the constructor returns. Each constructed closure
//! owns a fresh total; cloning the handle aliases the same closure rather
//! than copying it.
//!
//! A call that would overflow the total fails with
//! [`StudyError::Overflow`] and leaves the total where it was.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::error::StudyError;

/// A shared handle to an incrementing closure.
///
/// Clones alias the same captured state. Two handles obtained from separate
/// [`make_incrementor`] calls never observe each other.
#[derive(Clone)]
pub struct Incrementor {
    amount: i64,
    running_total: Rc<Cell<i64>>,
    step: Rc<dyn Fn() -> Result<i64, StudyError>>,
}

/// Builds an incrementor that adds `amount` to its running total per call.
pub fn make_incrementor(amount: i64) -> Incrementor {
    let running_total = Rc::new(Cell::new(0));

    let total = Rc::clone(&running_total);
    let incrementor = move || {
        let next = advance(total.get(), amount)?;
        total.set(next);
        Ok(next)
    };

    Incrementor {
        amount,
        running_total,
        step: Rc::new(incrementor),
    }
}

/// Builds a uniquely owned incrementor.
///
/// The running total is moved into the closure, so the only way to share
/// it is to move the closure itself.
pub fn make_owned_incrementor(amount: i64) -> impl FnMut() -> Result<i64, StudyError> {
    let mut running_total = 0;
    move || {
        running_total = advance(running_total, amount)?;
        Ok(running_total)
    }
}

fn advance(total: i64, amount: i64) -> Result<i64, StudyError> {
    total
        .checked_add(amount)
        .ok_or(StudyError::Overflow { total, amount })
}

impl Incrementor {
    /// Advances the running total and returns it.
    pub fn call(&self) -> Result<i64, StudyError> {
        let total = (self.step)()?;
        trace!(amount = self.amount, total, "incrementor called");
        Ok(total)
    }

    /// The amount added per call.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// The current running total without advancing it.
    pub fn running_total(&self) -> i64 {
        self.running_total.get()
    }

    /// Returns true if both handles refer to the same closure.
    pub fn shares_state_with(&self, other: &Incrementor) -> bool {
        Rc::ptr_eq(&self.running_total, &other.running_total)
    }
}

impl fmt::Debug for Incrementor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Incrementor")
            .field("amount", &self.amount)
            .field("running_total", &self.running_total.get())
            .field("aliases", &Rc::strong_count(&self.step))
            .finish()
    }
}
