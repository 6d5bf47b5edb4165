//! Walkthrough and property tests for closure-study.

use proptest::prelude::*;

use crate::deferred;
use crate::error::StudyError;
use crate::incrementor::make_incrementor;
use crate::queue::{CustomerLine, ProviderCollection};
use crate::sorting::{ComparatorForm, sort_descending};
use crate::walkthrough::{DemoInput, Section, Walkthrough};

// ============================================================================
// Walkthrough Transcript
// ============================================================================

#[test]
fn sorting_section_prints_every_form() {
    let transcript = Walkthrough::default().run(&[Section::Sorting]).unwrap();
    let lines = transcript.lines_for(Section::Sorting);

    assert_eq!(lines[0], "numbers: [23, 5, 11, 8, 2, 21, 13]");
    assert_eq!(lines.len(), ComparatorForm::ALL.len());
    for line in &lines[1..] {
        assert!(line.ends_with("[23, 21, 13, 11, 8, 5, 2]"), "{line}");
    }
}

#[test]
fn trailing_section_spells_numbers() {
    let transcript = Walkthrough::default()
        .run(&[Section::TrailingClosures])
        .unwrap();

    assert_eq!(
        transcript.lines_for(Section::TrailingClosures),
        [
            "trailing closure: [23, 21, 13, 11, 8, 5, 2]",
            r#"digit names: ["TwoThree", "Five", "OneOne", "Eight", "Two", "TwoOne", "OneThree"]"#,
        ]
    );
}

#[test]
fn capturing_and_reference_sections_share_an_incrementor() {
    let transcript = Walkthrough::default()
        .run(&[Section::CapturingValues, Section::ReferenceTypes])
        .unwrap();

    assert_eq!(
        transcript.lines_for(Section::CapturingValues),
        ["10", "20", "30", "7", "40"]
    );
    assert_eq!(transcript.lines_for(Section::ReferenceTypes), ["50"]);
}

#[test]
fn reference_section_alone_matches_full_run() {
    let transcript = Walkthrough::default()
        .run(&[Section::ReferenceTypes])
        .unwrap();
    assert_eq!(transcript.lines_for(Section::ReferenceTypes), ["50"]);
}

#[test]
fn escaping_section_prints_200_then_100() {
    let transcript = Walkthrough::default().run(&[Section::Escaping]).unwrap();
    assert_eq!(transcript.lines_for(Section::Escaping), ["200", "100"]);
}

#[test]
fn autoclosure_section_serves_the_whole_line() {
    let transcript = Walkthrough::default()
        .run(&[Section::Autoclosures])
        .unwrap();

    assert_eq!(
        transcript.lines_for(Section::Autoclosures),
        [
            "5",
            "5",
            "Now serving Chris!",
            "4",
            "Now serving Alex!",
            "Now serving Ewa!",
            "Collected 2 closures.",
            "Now serving Barry!",
            "Now serving Daniella!",
        ]
    );
}

#[test]
fn sections_run_in_walkthrough_order_once() {
    let transcript = Walkthrough::default()
        .run(&[Section::Escaping, Section::Sorting, Section::Escaping])
        .unwrap();

    let sections: Vec<Section> = transcript.entries().iter().map(|e| e.section).collect();
    let first_escaping = sections
        .iter()
        .position(|s| *s == Section::Escaping)
        .unwrap();
    assert!(sections[..first_escaping].iter().all(|s| *s == Section::Sorting));
    assert_eq!(transcript.lines_for(Section::Escaping).len(), 2);
}

#[test]
fn full_run_covers_every_section() {
    let transcript = Walkthrough::default().run_all().unwrap();
    for section in Section::ALL {
        assert!(
            !transcript.lines_for(section).is_empty(),
            "{section} printed nothing"
        );
    }
}

#[test]
fn short_line_reports_empty_queue() {
    let input = DemoInput {
        customers: vec!["Chris".to_string(), "Alex".to_string()],
        ..DemoInput::default()
    };
    let result = Walkthrough::new(input).run(&[Section::Autoclosures]);
    assert_eq!(result, Err(StudyError::EmptyQueue));
}

#[test]
fn custom_increments_flow_through() {
    let input = DemoInput {
        first_increment: 3,
        second_increment: -2,
        ..DemoInput::default()
    };
    let transcript = Walkthrough::new(input)
        .run(&[Section::CapturingValues, Section::ReferenceTypes])
        .unwrap();

    assert_eq!(
        transcript.lines_for(Section::CapturingValues),
        ["3", "6", "9", "-2", "12"]
    );
    assert_eq!(transcript.lines_for(Section::ReferenceTypes), ["15"]);
}

#[test]
fn overflowing_increment_fails_the_run() {
    let input = DemoInput {
        first_increment: i64::MAX / 2,
        ..DemoInput::default()
    };
    let result = Walkthrough::new(input).run(&[Section::CapturingValues]);
    assert!(matches!(result, Err(StudyError::Overflow { .. })), "{result:?}");
}

#[test]
fn overflow_in_reference_section_alone_is_reported() {
    let input = DemoInput {
        first_increment: i64::MAX / 4,
        ..DemoInput::default()
    };
    let result = Walkthrough::new(input).run(&[Section::ReferenceTypes]);
    assert!(matches!(result, Err(StudyError::Overflow { .. })), "{result:?}");
}

#[test]
fn every_comparator_form_prints_exactly_once() {
    let transcript = Walkthrough::default().run_all().unwrap();
    let numbers = DemoInput::default().numbers;

    for form in ComparatorForm::ALL {
        let expected = format!("{}: {:?}", form.label(), sort_descending(&numbers, form));
        let printed = transcript
            .entries()
            .iter()
            .filter(|entry| entry.text == expected)
            .count();
        assert_eq!(printed, 1, "{}", form.label());
    }
    assert_eq!(
        transcript.lines_for(Section::TrailingClosures)[0],
        format!(
            "{}: {:?}",
            ComparatorForm::Trailing.label(),
            sort_descending(&numbers, ComparatorForm::Trailing)
        )
    );
}

#[test]
fn section_names_round_trip_through_from_str() {
    for section in Section::ALL {
        assert_eq!(section.name().parse::<Section>(), Ok(section));
    }
    assert_eq!(
        "closures".parse::<Section>(),
        Err(StudyError::UnknownSection("closures".to_string()))
    );
}

#[test]
fn transcript_serializes_with_kebab_case_sections() {
    let transcript = Walkthrough::default().run(&[Section::Escaping]).unwrap();
    let json = serde_json::to_value(&transcript).unwrap();

    assert_eq!(json["entries"][0]["section"], "escaping");
    assert_eq!(json["entries"][0]["text"], "200");
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Separately constructed incrementors never see each other's calls.
    #[test]
    fn incrementors_are_independent(
        first in -1_000i64..1_000,
        second in -1_000i64..1_000,
        n in 0usize..50,
        m in 0usize..50,
    ) {
        let a = make_incrementor(first);
        let b = make_incrementor(second);

        for _ in 0..n {
            a.call().unwrap();
        }
        for _ in 0..m {
            b.call().unwrap();
        }

        prop_assert_eq!(a.running_total(), n as i64 * first);
        prop_assert_eq!(b.running_total(), m as i64 * second);
    }

    /// Calls through an alias advance the original's total.
    #[test]
    fn aliases_share_one_total(amount in -1_000i64..1_000, calls in prop::collection::vec(any::<bool>(), 0..40)) {
        let original = make_incrementor(amount);
        let alias = original.clone();

        for through_alias in &calls {
            if *through_alias {
                alias.call().unwrap();
            } else {
                original.call().unwrap();
            }
        }

        let expected = calls.len() as i64 * amount;
        prop_assert_eq!(original.running_total(), expected);
        prop_assert_eq!(alias.running_total(), expected);
    }

    /// A stored provider removes exactly one name per call, front first.
    #[test]
    fn provider_serves_in_fifo_order(names in prop::collection::vec("[A-Za-z]{1,8}", 0..10)) {
        let line = CustomerLine::new(names.clone());
        let mut customer_provider = line.provider();
        prop_assert_eq!(line.len(), names.len());

        for (served, name) in names.iter().enumerate() {
            prop_assert_eq!(customer_provider.call(), Ok(name.clone()));
            prop_assert_eq!(line.len(), names.len() - served - 1);
        }
        prop_assert_eq!(customer_provider.call(), Err(StudyError::EmptyQueue));
    }

    /// Collected providers touch nothing until served.
    #[test]
    fn collected_providers_are_lazy(names in prop::collection::vec("[a-z]{1,6}", 1..8)) {
        let line = CustomerLine::new(names.clone());
        let mut collection = ProviderCollection::new();
        for _ in 0..names.len() {
            let line = line.clone();
            collection.collect(deferred!(move line.remove_first()));
        }
        prop_assert_eq!(line.len(), names.len());

        let served: Vec<String> = collection
            .serve_all()
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();
        let expected: Vec<String> = names.iter().map(|n| format!("Now serving {n}!")).collect();
        prop_assert_eq!(served, expected);
        prop_assert!(line.is_empty());
    }

    /// Every comparator form agrees with a reverse sort.
    #[test]
    fn comparator_forms_agree(numbers in prop::collection::vec(any::<i64>(), 0..30)) {
        let mut expected = numbers.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));

        for form in ComparatorForm::ALL {
            prop_assert_eq!(sort_descending(&numbers, form), expected.clone());
        }
    }
}
