//! Spelling numbers digit by digit with `map`.

use std::collections::BTreeMap;

use crate::error::StudyError;

/// English names of the decimal digits, indexed by digit.
pub const DIGIT_NAMES: [&str; 10] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

/// The digit-to-name table as a map.
pub fn digit_names() -> BTreeMap<i64, &'static str> {
    (0..).zip(DIGIT_NAMES).collect()
}

/// Looks up the name of a single digit.
pub fn digit_name(digit: i64) -> Result<&'static str, StudyError> {
    usize::try_from(digit)
        .ok()
        .and_then(|index| DIGIT_NAMES.get(index).copied())
        .ok_or(StudyError::UnknownDigit(digit))
}

/// Spells `number` as concatenated digit names, most significant first.
///
/// Only positive values produce digits; zero and negatives spell as the
/// empty string.
pub fn spell_number(number: i64) -> Result<String, StudyError> {
    let mut number = number;
    let mut spelled = String::new();
    while number > 0 {
        spelled.insert_str(0, digit_name(number % 10)?);
        number /= 10;
    }
    Ok(spelled)
}

/// Spells every number in `numbers`.
pub fn spell_all(numbers: &[i64]) -> Result<Vec<String>, StudyError> {
    numbers.iter().map(|&number| spell_number(number)).collect()
}
