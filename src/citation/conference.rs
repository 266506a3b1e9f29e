use super::patterns::{CONFERENCE_DETECT, SENTENCE_SPLIT, YEAR_BLOCK};
use crate::document::Paragraph;
use crate::inspect::is_snippet_italic;
use crate::issue::Issue;

pub fn detect(text: &str) -> bool {
    CONFERENCE_DETECT.is_match(text)
}

/// Authors (YYYY[, Month D–D]). Title. Conference Name, Location.
pub fn validate(text: &str, paragraph: &Paragraph) -> Vec<Issue> {
    let Some(year) = YEAR_BLOCK.find(text) else {
        return vec![Issue::YearBlockMissing];
    };
    let mut issues = Vec::new();

    if year.as_str().contains('-') {
        issues.push(Issue::HyphenInDateRange);
    }

    let remainder = text[year.end()..].trim();
    let Some(split) = SENTENCE_SPLIT.captures(remainder) else {
        issues.push(Issue::ConferenceSplit);
        return issues;
    };

    let title = split[1].trim_end_matches(['.', '!', '?']);
    if !is_snippet_italic(paragraph, title) {
        issues.push(Issue::ConferenceTitleNotItalic);
    }

    let info = &split[2];
    if !info.contains(',') || !info.ends_with('.') {
        issues.push(Issue::ConferenceInfoShape);
    }

    issues
}
