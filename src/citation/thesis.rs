use super::patterns::{THESIS_BRACKET_CLOSE, THESIS_DETECT, YEAR_BLOCK};
use crate::document::Paragraph;
use crate::inspect::is_snippet_italic;
use crate::issue::Issue;

pub fn detect(text: &str) -> bool {
    THESIS_DETECT.is_match(text)
}

/// Title [Doctoral dissertation]. Institution.
pub fn validate(text: &str, paragraph: &Paragraph) -> Vec<Issue> {
    let mut issues = Vec::new();

    if !THESIS_BRACKET_CLOSE.is_match(text) {
        issues.push(Issue::ThesisBracketPunctuation);
    }

    // The title sits between the year block (when present) and the bracket
    if let Some(bracket) = text.find('[') {
        let head = &text[..bracket];
        let title = match YEAR_BLOCK.find(head) {
            Some(year) => &head[year.end()..],
            None => head,
        }
        .trim();

        if !is_snippet_italic(paragraph, title) {
            issues.push(Issue::ThesisTitleNotItalic {
                title: title.to_string(),
            });
        }
    }

    issues
}
