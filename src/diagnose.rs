//! Per-entry diagnostic records and the document-level summary.

use log::debug;

use crate::bibliography::{extract_entries, BibliographyEntry};
use crate::citation::Archetype;
use crate::common::Config;
use crate::document::Document;
use crate::issue::Issue;

/// What to show the reader after an entry's errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// Worked example of the detected archetype
    Example(Archetype),
    /// Reminder of the six archetypes, for unrecognized entries
    Generic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub index: usize,
    pub archetype: Option<Archetype>,
    pub text: String,
    pub errors: Vec<Issue>,
    pub hint: Hint,
}

impl Diagnostic {
    pub fn from_entry(entry: &BibliographyEntry) -> Self {
        Self {
            index: entry.index,
            archetype: entry.detected,
            text: entry.raw_text.clone(),
            errors: entry.errors.clone(),
            hint: entry.detected.map_or(Hint::Generic, Hint::Example),
        }
    }

    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub entries: usize,
    pub entries_with_errors: usize,
}

impl Summary {
    pub fn all_clear(&self) -> bool {
        self.entries_with_errors == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentReport {
    /// One record per entry, in document order, passing entries included
    pub diagnostics: Vec<Diagnostic>,
    pub in_alphabetical_order: bool,
    pub summary: Summary,
}

impl DocumentReport {
    pub fn failures(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.passed())
    }
}

/// Lowercased text before the first comma
pub fn surname_key(text: &str) -> String {
    text.split(',').next().unwrap_or("").to_lowercase()
}

pub fn is_alphabetical<S: AsRef<str>>(texts: &[S]) -> bool {
    let keys: Vec<String> = texts.iter().map(|t| surname_key(t.as_ref())).collect();
    keys.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Validate every entry of the document's bibliography
pub fn diagnose_document(document: &Document, config: &Config) -> DocumentReport {
    let mut entries = extract_entries(document, config);
    let texts: Vec<&str> = entries.iter().map(|e| e.raw_text.as_str()).collect();
    let in_alphabetical_order = is_alphabetical(&texts);

    let diagnostics: Vec<Diagnostic> = entries
        .iter_mut()
        .map(|entry| {
            entry.validate(config);
            debug!(
                "Entry {} ({:?}): {} error(s)",
                entry.index,
                entry.detected,
                entry.errors.len()
            );
            Diagnostic::from_entry(entry)
        })
        .collect();

    let summary = Summary {
        entries: diagnostics.len(),
        entries_with_errors: diagnostics.iter().filter(|d| !d.passed()).count(),
    };

    DocumentReport {
        diagnostics,
        in_alphabetical_order,
        summary,
    }
}
