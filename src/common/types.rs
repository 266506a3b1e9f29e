use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::diagnose::{Diagnostic, Hint, Summary};
use crate::i18n::Catalog;
use crate::issue::Issue;

/// One extracted bibliography line, as written by `extract`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRecord {
    pub index: usize,
    pub text: String,
}

/// A rendered finding: canonical key, placeholder values, and the localized message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRecord {
    pub key: String,
    pub params: BTreeMap<String, String>,
    pub message: String,
}

impl IssueRecord {
    pub fn new(issue: &Issue, catalog: &Catalog) -> Self {
        Self {
            key: issue.template().to_string(),
            params: issue
                .params()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            message: catalog.issue(issue),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    pub index: usize,
    pub archetype: Option<String>,
    pub text: String,
    pub errors: Vec<IssueRecord>,
    pub hint: String,
}

impl DiagnosticRecord {
    pub fn new(diagnostic: &Diagnostic, catalog: &Catalog) -> Self {
        let hint = match diagnostic.hint {
            Hint::Example(archetype) => archetype
                .example()
                .iter()
                .map(|span| span.text)
                .collect::<String>(),
            Hint::Generic => catalog.translate(crate::citation::GENERIC_HINT).to_string(),
        };
        Self {
            index: diagnostic.index,
            archetype: diagnostic
                .archetype
                .map(|a| catalog.translate(a.name()).to_string()),
            text: diagnostic.text.clone(),
            errors: diagnostic
                .errors
                .iter()
                .map(|issue| IssueRecord::new(issue, catalog))
                .collect(),
            hint,
        }
    }
}

/// Tagged line of the JSON report stream
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportLine {
    Entry(DiagnosticRecord),
    Ordering { alphabetical: bool },
    Summary { entries: usize, entries_with_errors: usize },
}

impl From<&Summary> for ReportLine {
    fn from(summary: &Summary) -> Self {
        ReportLine::Summary {
            entries: summary.entries,
            entries_with_errors: summary.entries_with_errors,
        }
    }
}
