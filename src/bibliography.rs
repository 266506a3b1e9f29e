//! Locating the bibliography section and the entries in it.

use log::debug;

use crate::citation::{classify, Archetype};
use crate::common::Config;
use crate::document::{Document, Paragraph};
use crate::fields;
use crate::inspect::is_section_title;
use crate::issue::Issue;

/// One reference line and the paragraph it came from
#[derive(Debug, Clone)]
pub struct BibliographyEntry<'a> {
    /// 1-based position within the bibliography
    pub index: usize,
    pub raw_text: String,
    pub paragraph: &'a Paragraph,
    pub detected: Option<Archetype>,
    pub errors: Vec<Issue>,
}

impl<'a> BibliographyEntry<'a> {
    pub fn new(index: usize, raw_text: &str, paragraph: &'a Paragraph) -> Self {
        Self {
            index,
            raw_text: raw_text.to_string(),
            paragraph,
            detected: None,
            errors: Vec::new(),
        }
    }

    /// Run every check in order: authors, year, title, archetype, trailing
    /// period, paragraph formatting. Replaces any earlier results.
    pub fn validate(&mut self, config: &Config) {
        let text = self.raw_text.as_str();
        let mut errors = Vec::new();

        errors.extend(fields::check_authors(text));
        errors.extend(fields::check_year(text));
        errors.extend(fields::check_title(text));

        self.detected = classify(text);
        match self.detected {
            Some(archetype) => errors.extend(archetype.validate(text, self.paragraph)),
            None => errors.push(Issue::Unrecognized),
        }

        errors.extend(fields::check_trailing_period(text));
        errors.extend(fields::check_paragraph_format(self.paragraph, config));

        self.errors = errors;
    }

    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Entries between the bibliography heading and the blank-page marker, in
/// document order. No heading means no entries.
pub fn extract_entries<'a>(document: &'a Document, config: &Config) -> Vec<BibliographyEntry<'a>> {
    let mut paragraphs = document.paragraphs.iter();

    let heading = paragraphs
        .by_ref()
        .position(|p| p.text.trim().to_lowercase() == config.heading.to_lowercase());
    if heading.is_none() {
        debug!("No '{}' heading found", config.heading);
        return Vec::new();
    }

    let mut entries = Vec::new();
    for paragraph in paragraphs {
        let text = paragraph.text.trim();
        if text == config.blank_page_marker {
            debug!("Bibliography ends at blank-page marker");
            break;
        }
        if config.stop_at_heading && is_section_title(paragraph, &document.styles, config) {
            debug!("Bibliography ends at section title {:?}", text);
            break;
        }
        if !text.is_empty() {
            entries.push(BibliographyEntry::new(entries.len() + 1, text, paragraph));
        }
    }

    debug!("Extracted {} bibliography entries", entries.len());
    entries
}
