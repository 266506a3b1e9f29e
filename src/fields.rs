//! Checks that apply to every entry regardless of its archetype.

use crate::citation::is_title_start;
use crate::citation::patterns::{
    AUTHORS_HEAD, AUTHOR_SEPARATOR, BRACKETED, CJK, COMMA_AMPERSAND, TITLE_AFTER_YEAR, YEAR_BLOCK,
};
use crate::common::Config;
use crate::document::{Length, Paragraph};
use crate::issue::Issue;

/// Longest author list written out in full before APA-7 requires an ellipsis
const MAX_LISTED_AUTHORS: usize = 20;

/// Split an author list on commas that are followed by a capitalized name
/// (an uppercase then a lowercase ASCII letter). Initials like ", J." do not split.
pub fn split_authors(authors: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut start = 0;

    for sep in AUTHOR_SEPARATOR.find_iter(authors) {
        let mut next = authors[sep.end()..].chars();
        let boundary = matches!(
            (next.next(), next.next()),
            (Some(a), Some(b)) if a.is_ascii_uppercase() && b.is_ascii_lowercase()
        );
        if boundary {
            names.push(authors[start..sep.start()].trim());
            start = sep.end();
        }
    }
    names.push(authors[start..].trim());
    names
}

pub fn check_authors(text: &str) -> Vec<Issue> {
    let Some(caps) = AUTHORS_HEAD.captures(text) else {
        return vec![Issue::AuthorsUnparseable];
    };
    let authors = caps[1].trim();
    let count = split_authors(authors)
        .iter()
        .filter(|a| a.chars().any(char::is_alphanumeric))
        .count();

    let mut issues = Vec::new();
    if count == 0 {
        issues.push(Issue::NoAuthors);
        return issues;
    }
    if count > 1 {
        if !authors.contains('&') {
            issues.push(Issue::MissingAmpersand);
        }
        if count <= MAX_LISTED_AUTHORS && !COMMA_AMPERSAND.is_match(authors) {
            issues.push(Issue::MissingCommaBeforeAmpersand);
        }
        if count > MAX_LISTED_AUTHORS && !authors.contains('…') {
            issues.push(Issue::MissingEllipsis);
        }
    }
    issues
}

pub fn check_year(text: &str) -> Vec<Issue> {
    if YEAR_BLOCK.is_match(text) {
        Vec::new()
    } else {
        vec![Issue::BadYearBlock]
    }
}

pub fn check_title(text: &str) -> Vec<Issue> {
    let Some(caps) = TITLE_AFTER_YEAR.captures(text) else {
        return vec![Issue::TitleUnparseable];
    };
    let title = caps[1].trim();

    let mut issues = Vec::new();
    if !title.chars().next().is_some_and(is_title_start) {
        issues.push(Issue::TitleNotCapitalized);
    }
    if CJK.is_match(title) && !BRACKETED.is_match(title) {
        issues.push(Issue::MissingTranslation);
    }
    issues
}

pub fn check_trailing_period(text: &str) -> Vec<Issue> {
    if text.ends_with('.') {
        Vec::new()
    } else {
        vec![Issue::MissingPeriod]
    }
}

/// Single spacing, hanging indent, and the reference font on every run that sets one
pub fn check_paragraph_format(paragraph: &Paragraph, config: &Config) -> Vec<Issue> {
    let mut issues = Vec::new();
    let format = &paragraph.format;

    if format.line_spacing.is_some_and(|s| !s.is_single()) {
        issues.push(Issue::LineSpacing);
    }

    let hundredths = |length: Option<Length>| (length.unwrap_or_default().cm() * 100.0).round() as i64;
    let expected = (config.hanging_indent_cm * 100.0).round() as i64;
    if hundredths(format.left_indent) != expected
        || hundredths(format.first_line_indent) != -expected
    {
        issues.push(Issue::HangingIndent {
            indent_cm: config.hanging_indent_cm,
        });
    }

    for run in &paragraph.runs {
        if run.font.name.as_ref().is_some_and(|n| *n != config.reference_font) {
            issues.push(Issue::FontName {
                font: config.reference_font.clone(),
            });
            break;
        }
        if run.font.size_pt.is_some_and(|s| s != config.reference_size_pt) {
            issues.push(Issue::FontSize {
                size_pt: config.reference_size_pt,
            });
            break;
        }
    }

    issues
}
