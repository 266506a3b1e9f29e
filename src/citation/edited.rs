use super::patterns::{EDITED_DETECT, EDITED_SHAPE};
use super::strip_annotation;
use crate::document::Paragraph;
use crate::inspect::is_snippet_italic;
use crate::issue::Issue;

pub fn detect(text: &str) -> bool {
    EDITED_DETECT.is_match(text)
}

/// Author. (Ed.). (YYYY). Title. Publisher.
pub fn validate(text: &str, paragraph: &Paragraph) -> Vec<Issue> {
    let Some(caps) = EDITED_SHAPE.captures(text) else {
        return vec![Issue::EditedBookShape];
    };

    if is_snippet_italic(paragraph, &strip_annotation(&caps["title"])) {
        Vec::new()
    } else {
        vec![Issue::EditedTitleNotItalic]
    }
}
