//! One comparison, many spellings.
//!
//! `sorted_by` takes an "are these in increasing order" predicate as its
//! final argument, so a long closure can trail the call. Every
//! [`ComparatorForm`] hands it the same `a > b` comparison written a
//! different way, and every form produces the same ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// The named-function form of the descending comparison.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn backwards(s1: &i64, s2: &i64) -> bool {
    s1 > s2
}

/// Returns a sorted copy of `items`.
///
/// `are_in_increasing_order(a, b)` must return `true` when `a` belongs
/// before `b`. Elements for which it holds neither way keep their relative
/// order.
///
/// The predicate must be a strict weak ordering, like `<` or `>`: it is
/// never true for an element against itself, and never true both ways for
/// a pair. A non-strict predicate such as `>=` reports `Less` in both
/// directions, and the resulting order (or a panic) is left to `sort_by`.
pub fn sorted_by<T, F>(items: &[T], mut are_in_increasing_order: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        if are_in_increasing_order(a, b) {
            Ordering::Less
        } else if are_in_increasing_order(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    sorted
}

/// Syntactic forms of the same comparison closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComparatorForm {
    /// A free function passed by name.
    NamedFunction,
    /// Parameter and return types spelled out, explicit `return`.
    FullyAnnotated,
    /// Types inferred from `sorted_by`'s signature.
    InferredTypes,
    /// Single-expression body, no braces or `return`.
    ImplicitReturn,
    /// Arguments destructured in the parameter list.
    Shorthand,
    /// The `>` operator's trait method referenced directly.
    OperatorReference,
    /// A multi-line closure trailing the call.
    Trailing,
}

impl ComparatorForm {
    /// All forms, from most to least explicit.
    pub const ALL: [ComparatorForm; 7] = [
        ComparatorForm::NamedFunction,
        ComparatorForm::FullyAnnotated,
        ComparatorForm::InferredTypes,
        ComparatorForm::ImplicitReturn,
        ComparatorForm::Shorthand,
        ComparatorForm::OperatorReference,
        ComparatorForm::Trailing,
    ];

    /// Short label used in transcripts.
    pub fn label(self) -> &'static str {
        match self {
            ComparatorForm::NamedFunction => "named function",
            ComparatorForm::FullyAnnotated => "fully annotated closure",
            ComparatorForm::InferredTypes => "inferred types",
            ComparatorForm::ImplicitReturn => "implicit return",
            ComparatorForm::Shorthand => "shorthand arguments",
            ComparatorForm::OperatorReference => "operator reference",
            ComparatorForm::Trailing => "trailing closure",
        }
    }
}

/// Sorts `items` in descending order using the requested closure form.
pub fn sort_descending(items: &[i64], form: ComparatorForm) -> Vec<i64> {
    match form {
        ComparatorForm::NamedFunction => sorted_by(items, backwards),
        ComparatorForm::FullyAnnotated => {
            #[allow(clippy::needless_return)]
            let comparison = |s1: &i64, s2: &i64| -> bool {
                return s1 > s2;
            };
            sorted_by(items, comparison)
        }
        ComparatorForm::InferredTypes => sorted_by(items, |s1, s2| { s1 > s2 }),
        ComparatorForm::ImplicitReturn => sorted_by(items, |s1, s2| s1 > s2),
        ComparatorForm::Shorthand => sorted_by(items, |&a, &b| a > b),
        ComparatorForm::OperatorReference => sorted_by(items, i64::gt),
        ComparatorForm::Trailing => sorted_by(items, |s1, s2| {
            match s1.cmp(s2) {
                Ordering::Greater => true,
                Ordering::Less | Ordering::Equal => false,
            }
        }),
    }
}
