use super::patterns::{MONOGRAPH_DETECT, MONOGRAPH_SHAPE};
use super::strip_annotation;
use crate::document::Paragraph;
use crate::inspect::is_snippet_italic;
use crate::issue::Issue;

pub fn detect(text: &str) -> bool {
    MONOGRAPH_DETECT.is_match(text)
}

/// Author. (YYYY). Title. Publisher.
pub fn validate(text: &str, paragraph: &Paragraph) -> Vec<Issue> {
    let Some(caps) = MONOGRAPH_SHAPE.captures(text) else {
        return vec![Issue::MonographShape];
    };
    let mut issues = Vec::new();

    let publisher = &caps["publisher"];
    if !publisher.is_empty() && publisher.chars().all(|c| c.is_ascii_digit()) {
        issues.push(Issue::NumericPublisher);
    }

    let title = strip_annotation(&caps["title"]);
    if !is_snippet_italic(paragraph, &title) {
        issues.push(Issue::MonographTitleNotItalic { title });
    }

    issues
}
