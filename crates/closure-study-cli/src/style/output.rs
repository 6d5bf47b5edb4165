//! Output helpers: transcripts, labeled values and status lines.

use std::fmt::Display;

use closure_study::{Section, Transcript};

use super::colors::SemanticStyle;

/// Column the values in labeled listings start at.
const LABEL_WIDTH: usize = 18;

/// Prints a success message with a checkmark.
pub fn print_success(msg: &str) {
    println!("{} {msg}", "✓".success());
}

/// Prints a hint with an arrow.
pub fn print_hint(msg: &str) {
    println!("{} {}", "→".muted(), msg.muted());
}

/// Prints `key: value`, indented, with values aligned in one column.
pub fn print_labeled(key: &str, value: impl Display) {
    let label = format!("{key}:");
    println!("  {} {value}", format!("{label:<width$}", width = LABEL_WIDTH).muted());
}

/// Prints the `== Title` line that opens a section.
pub fn print_section_heading(section: Section) {
    println!("{} {}", "==".muted(), section.title().header());
}

/// Prints one line a section produced.
pub fn print_transcript_line(text: &str) {
    println!("  {text}");
}

/// Prints a transcript, one heading per run of lines from the same section
/// and a blank line between sections.
pub fn print_transcript(transcript: &Transcript) {
    let mut current = None;
    for entry in transcript.entries() {
        if current != Some(entry.section) {
            if current.is_some() {
                println!();
            }
            print_section_heading(entry.section);
            current = Some(entry.section);
        }
        print_transcript_line(&entry.text);
    }
}
