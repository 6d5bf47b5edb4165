//! # closure-study: closure semantics, one demonstration at a time
//!
//! Each module isolates a single rule about how closures capture, own and
//! defer work. The [`walkthrough`] module strings them together in
//! a fixed order and records what each step prints.
//!
//! ## Modules
//!
//! - [`sorting`]: the same comparison written in every closure form
//! - [`digits`]: `map` with a closure that spells numbers
//! - [`incrementor`]: captured running totals and aliasing
//! - [`deferred`]: escaping and non-escaping callables, `deferred!`
//! - [`escaping`]: completion handlers stored outside their creator
//! - [`queue`]: the customer line consumed by deferred providers
//! - [`walkthrough`]: the full transcript
//!
//! ## Example
//!
//! ```
//! use closure_study::incrementor::make_incrementor;
//!
//! let by_ten = make_incrementor(10);
//! let also_by_ten = by_ten.clone();
//!
//! assert_eq!(by_ten.call(), Ok(10));
//! assert_eq!(also_by_ten.call(), Ok(20));
//! ```

pub mod deferred;
pub mod digits;
pub mod error;
pub mod escaping;
pub mod incrementor;
pub mod queue;
pub mod sorting;
pub mod walkthrough;

#[cfg(test)]
mod tests;

pub use deferred::{Callback, Deferred, Escaping, with_non_escaping};
pub use error::StudyError;
pub use escaping::{HandlerRegistry, Target};
pub use incrementor::{Incrementor, make_incrementor, make_owned_incrementor};
pub use queue::{CustomerLine, ProviderCollection, serve_customer, serve_deferred};
pub use sorting::{ComparatorForm, backwards, sort_descending, sorted_by};
pub use walkthrough::{DemoInput, Entry, Section, Transcript, Walkthrough};
