use super::patterns::{CHAPTER_DETECT, CHAPTER_SHAPE};
use super::{normalize_dash, parse_range, strip_annotation};
use crate::document::Paragraph;
use crate::inspect::is_snippet_italic;
use crate::issue::Issue;

pub fn detect(text: &str) -> bool {
    CHAPTER_DETECT.is_match(text)
}

/// In Editors (Eds.), Book Title (pp. N–N). Publisher.
pub fn validate(text: &str, paragraph: &Paragraph) -> Vec<Issue> {
    let Some(caps) = CHAPTER_SHAPE.captures(text) else {
        return vec![Issue::ChapterShape];
    };
    let mut issues = Vec::new();

    if !caps["editors"].contains('&') {
        issues.push(Issue::EditorsMissingAmpersand);
    }

    let title = &caps["title"];
    if !title.chars().next().is_some_and(char::is_uppercase) {
        issues.push(Issue::BookTitleNotCapitalized {
            title: title.to_string(),
        });
    }
    if !is_snippet_italic(paragraph, &strip_annotation(title)) {
        issues.push(Issue::ChapterTitleNotItalic);
    }

    let (pages, hyphenated) = normalize_dash(&caps["pages"]);
    if hyphenated {
        issues.push(Issue::HyphenInPageRange);
    }
    match parse_range(&pages) {
        Some((start, end)) if start >= end => {
            issues.push(Issue::ChapterPageOrder { start, end });
        }
        Some(_) => {}
        None => issues.push(Issue::PagesNotInteger),
    }

    if caps["publisher"].trim().is_empty() {
        issues.push(Issue::PublisherMissing);
    }

    issues
}
