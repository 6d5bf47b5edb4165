//! Error types for the demonstrations.

/// Errors raised by the demonstrations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StudyError {
    /// A customer was requested from a line with nobody left in it.
    #[error("customer line is empty")]
    EmptyQueue,

    /// A digit lookup outside `0..=9`.
    #[error("no name for digit {0}")]
    UnknownDigit(i64),

    /// An incrementor whose next running total does not fit in an `i64`.
    #[error("running total {total} overflows when adding {amount}")]
    Overflow { total: i64, amount: i64 },

    /// A section name that does not match any walkthrough section.
    #[error("unknown section: {0}")]
    UnknownSection(String),
}
