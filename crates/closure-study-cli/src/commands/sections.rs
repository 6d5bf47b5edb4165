//! Sections command implementation.

use closure_study::Section;

use crate::style::colors::SemanticStyle;

/// Lists every section in the order `run` prints them.
pub fn run() {
    for section in Section::ALL {
        let name = format!("{:<20}", section.name());
        println!("{} {}", name.code(), section.title());
    }
}
