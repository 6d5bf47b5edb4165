//! The demonstrations, section by section.
//!
//! [`Walkthrough::run`] executes the selected sections in walkthrough order
//! and records every line they would print. The capturing and reference
//! sections share one incrementor, and the autoclosure section consumes a
//! single customer line across all of its steps, so the transcript shows
//! state carried from one step to the next.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::deferred;
use crate::digits::spell_all;
use crate::error::StudyError;
use crate::escaping::{HandlerRegistry, Target};
use crate::incrementor::{Incrementor, make_incrementor};
use crate::queue::{CustomerLine, ProviderCollection, serve_customer, serve_deferred};
use crate::sorting::{ComparatorForm, sort_descending};

// ============================================================================
// Sections
// ============================================================================

/// A section of the walkthrough.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    /// Closure expressions passed to a sort.
    Sorting,
    /// Closures trailing the call, and `map`.
    TrailingClosures,
    /// Nested functions capturing a running total.
    CapturingValues,
    /// Assigning a closure to a second name.
    ReferenceTypes,
    /// Escaping and non-escaping handlers.
    Escaping,
    /// Deferred evaluation over the customer line.
    Autoclosures,
}

impl Section {
    /// Every section, in walkthrough order.
    pub const ALL: [Section; 6] = [
        Section::Sorting,
        Section::TrailingClosures,
        Section::CapturingValues,
        Section::ReferenceTypes,
        Section::Escaping,
        Section::Autoclosures,
    ];

    /// Kebab-case name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Section::Sorting => "sorting",
            Section::TrailingClosures => "trailing-closures",
            Section::CapturingValues => "capturing-values",
            Section::ReferenceTypes => "reference-types",
            Section::Escaping => "escaping",
            Section::Autoclosures => "autoclosures",
        }
    }

    /// Human readable heading.
    pub fn title(self) -> &'static str {
        match self {
            Section::Sorting => "Closure expressions",
            Section::TrailingClosures => "Trailing closures",
            Section::CapturingValues => "Capturing values",
            Section::ReferenceTypes => "Closures are reference types",
            Section::Escaping => "Escaping closures",
            Section::Autoclosures => "Autoclosures",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StudyError::UnknownSection(s.to_string()))
    }
}

// ============================================================================
// Input
// ============================================================================

/// Values the walkthrough operates on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoInput {
    /// Numbers to sort and spell.
    pub numbers: Vec<i64>,
    /// Customers waiting in line, front first.
    pub customers: Vec<String>,
    /// Increment of the first incrementor.
    pub first_increment: i64,
    /// Increment of the independently constructed second incrementor.
    pub second_increment: i64,
}

impl Default for DemoInput {
    fn default() -> Self {
        Self {
            numbers: vec![23, 5, 11, 8, 2, 21, 13],
            customers: ["Chris", "Alex", "Ewa", "Barry", "Daniella"]
                .into_iter()
                .map(String::from)
                .collect(),
            first_increment: 10,
            second_increment: 7,
        }
    }
}

// ============================================================================
// Transcript
// ============================================================================

/// One printed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The section that printed the line.
    pub section: Section,
    /// The printed text.
    pub text: String,
}

/// Everything a walkthrough printed, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line.
    pub fn push(&mut self, section: Section, text: impl Into<String>) {
        self.entries.push(Entry {
            section,
            text: text.into(),
        });
    }

    /// All entries in print order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The lines printed by `section`.
    pub fn lines_for(&self, section: Section) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.section == section)
            .map(|entry| entry.text.as_str())
            .collect()
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Walkthrough
// ============================================================================

/// Runs the demonstrations against a [`DemoInput`].
#[derive(Debug, Clone, Default)]
pub struct Walkthrough {
    input: DemoInput,
}

/// State that crosses section boundaries.
#[derive(Default)]
struct Carried {
    incrementor: Option<Incrementor>,
}

impl Walkthrough {
    /// Creates a walkthrough over `input`.
    pub fn new(input: DemoInput) -> Self {
        Self { input }
    }

    /// The input this walkthrough runs on.
    pub fn input(&self) -> &DemoInput {
        &self.input
    }

    /// Runs every section.
    pub fn run_all(&self) -> Result<Transcript, StudyError> {
        self.run(&Section::ALL)
    }

    /// Runs the selected sections in walkthrough order.
    ///
    /// Duplicates in `sections` run once.
    pub fn run(&self, sections: &[Section]) -> Result<Transcript, StudyError> {
        let mut transcript = Transcript::new();
        let mut carried = Carried::default();

        for section in Section::ALL
            .into_iter()
            .filter(|section| sections.contains(section))
        {
            debug!(%section, "running section");
            match section {
                Section::Sorting => self.sorting(&mut transcript),
                Section::TrailingClosures => self.trailing_closures(&mut transcript)?,
                Section::CapturingValues => self.capturing_values(&mut transcript, &mut carried)?,
                Section::ReferenceTypes => self.reference_types(&mut transcript, &mut carried)?,
                Section::Escaping => Self::escaping(&mut transcript),
                Section::Autoclosures => self.autoclosures(&mut transcript)?,
            }
        }

        Ok(transcript)
    }

    fn sorting(&self, out: &mut Transcript) {
        let numbers = &self.input.numbers;
        out.push(Section::Sorting, format!("numbers: {numbers:?}"));

        for form in ComparatorForm::ALL
            .into_iter()
            .filter(|form| *form != ComparatorForm::Trailing)
        {
            let sorted = sort_descending(numbers, form);
            out.push(Section::Sorting, format!("{}: {sorted:?}", form.label()));
        }
    }

    fn trailing_closures(&self, out: &mut Transcript) -> Result<(), StudyError> {
        let numbers = &self.input.numbers;

        let sorted = sort_descending(numbers, ComparatorForm::Trailing);
        out.push(
            Section::TrailingClosures,
            format!("{}: {sorted:?}", ComparatorForm::Trailing.label()),
        );

        let spelled = spell_all(numbers)?;
        out.push(Section::TrailingClosures, format!("digit names: {spelled:?}"));
        Ok(())
    }

    fn capturing_values(
        &self,
        out: &mut Transcript,
        carried: &mut Carried,
    ) -> Result<(), StudyError> {
        let first = make_incrementor(self.input.first_increment);
        for _ in 0..3 {
            out.push(Section::CapturingValues, first.call()?.to_string());
        }

        let second = make_incrementor(self.input.second_increment);
        out.push(Section::CapturingValues, second.call()?.to_string());

        out.push(Section::CapturingValues, first.call()?.to_string());
        carried.incrementor = Some(first);
        Ok(())
    }

    fn reference_types(
        &self,
        out: &mut Transcript,
        carried: &mut Carried,
    ) -> Result<(), StudyError> {
        let original = if let Some(incrementor) = carried.incrementor.take() {
            incrementor
        } else {
            // Bring a fresh incrementor to where the capturing section leaves it.
            let fresh = make_incrementor(self.input.first_increment);
            for _ in 0..4 {
                fresh.call()?;
            }
            fresh
        };

        let alias = original.clone();
        out.push(Section::ReferenceTypes, alias.call()?.to_string());
        carried.incrementor = Some(original);
        Ok(())
    }

    fn escaping(out: &mut Transcript) {
        let mut registry = HandlerRegistry::new();
        let instance = Target::new();

        instance.do_something(&mut registry);
        out.push(Section::Escaping, instance.x().to_string());

        registry.call_first();
        out.push(Section::Escaping, instance.x().to_string());
    }

    fn autoclosures(&self, out: &mut Transcript) -> Result<(), StudyError> {
        let line = CustomerLine::new(self.input.customers.iter().cloned());
        out.push(Section::Autoclosures, line.len().to_string());

        let mut customer_provider = line.provider();
        out.push(Section::Autoclosures, line.len().to_string());

        out.push(
            Section::Autoclosures,
            serve_customer(|| customer_provider.call())?,
        );
        out.push(Section::Autoclosures, line.len().to_string());

        out.push(Section::Autoclosures, serve_customer(|| line.remove_first())?);
        out.push(
            Section::Autoclosures,
            serve_deferred(deferred!(line.remove_first()))?,
        );

        let mut collection = ProviderCollection::new();
        for _ in 0..2 {
            let line = line.clone();
            collection.collect(deferred!(move line.remove_first()));
        }
        out.push(
            Section::Autoclosures,
            format!("Collected {} closures.", collection.len()),
        );

        for served in collection.serve_all() {
            out.push(Section::Autoclosures, served?);
        }
        Ok(())
    }
}
