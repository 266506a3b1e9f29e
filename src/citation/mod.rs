//! APA-7 reference archetypes: detection, structural validation, and hints.

pub mod patterns;

mod chapter;
mod conference;
mod edited;
mod journal;
mod monograph;
mod thesis;

use log::debug;
use std::fmt;

use crate::document::Paragraph;
use crate::issue::Issue;
use patterns::BRACKET_ANNOTATION;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    Thesis,
    BookChapter,
    EditedBook,
    JournalArticle,
    Conference,
    Monograph,
}

/// One piece of a worked example; italic pieces are rendered italic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub text: &'static str,
    pub italic: bool,
}

const fn plain(text: &'static str) -> Span {
    Span { text, italic: false }
}

const fn italic(text: &'static str) -> Span {
    Span { text, italic: true }
}

const THESIS_EXAMPLE: &[Span] = &[
    plain("Doe, J. (2018). "),
    italic("The Effects of X on Y"),
    plain(" [Doctoral dissertation]. University of Example."),
];

const CHAPTER_EXAMPLE: &[Span] = &[
    plain("Smith, A. B. (2019). Chapter Title. In C. D. Editor & E. F. Editor (Eds.), "),
    italic("Book Title"),
    plain(" (pp. 12–34). Publisher."),
];

const EDITED_EXAMPLE: &[Span] = &[
    plain("Jones, R. (Ed.). (2020). "),
    italic("Edited Book Title"),
    plain(". Publisher."),
];

const JOURNAL_EXAMPLE: &[Span] = &[
    plain("Smith, J. A., & Doe, J. B. (2020). Understanding AI. "),
    italic("Journal of Research"),
    plain(", "),
    italic("15"),
    plain("(3), 123–145."),
];

const CONFERENCE_EXAMPLE: &[Span] = &[
    plain("Lee, S. (2021). "),
    italic("Conference Paper Title"),
    plain(". Conference on Examples, City."),
];

const MONOGRAPH_EXAMPLE: &[Span] = &[
    plain("Brown, C. (2017). "),
    italic("Fundamentals of Example Studies"),
    plain(". Publisher Name."),
];

impl Archetype {
    /// Detection order. Detection patterns overlap, so the first match wins.
    pub const PRIORITY: [Archetype; 6] = [
        Archetype::Thesis,
        Archetype::BookChapter,
        Archetype::EditedBook,
        Archetype::JournalArticle,
        Archetype::Conference,
        Archetype::Monograph,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Thesis => "Thesis/Dissertation",
            Archetype::BookChapter => "Book Chapter",
            Archetype::EditedBook => "Edited Book",
            Archetype::JournalArticle => "Journal Article",
            Archetype::Conference => "Conference Article",
            Archetype::Monograph => "Monograph/Book",
        }
    }

    /// Does the raw entry text loosely resemble this archetype?
    pub fn detect(&self, text: &str) -> bool {
        match self {
            Archetype::Thesis => thesis::detect(text),
            Archetype::BookChapter => chapter::detect(text),
            Archetype::EditedBook => edited::detect(text),
            Archetype::JournalArticle => journal::detect(text),
            Archetype::Conference => conference::detect(text),
            Archetype::Monograph => monograph::detect(text),
        }
    }

    /// Parse the entry against this archetype's canonical shape and check its fields
    pub fn validate(&self, text: &str, paragraph: &Paragraph) -> Vec<Issue> {
        match self {
            Archetype::Thesis => thesis::validate(text, paragraph),
            Archetype::BookChapter => chapter::validate(text, paragraph),
            Archetype::EditedBook => edited::validate(text, paragraph),
            Archetype::JournalArticle => journal::validate(text, paragraph),
            Archetype::Conference => conference::validate(text, paragraph),
            Archetype::Monograph => monograph::validate(text, paragraph),
        }
    }

    /// Worked example of a correct entry
    pub fn example(&self) -> &'static [Span] {
        match self {
            Archetype::Thesis => THESIS_EXAMPLE,
            Archetype::BookChapter => CHAPTER_EXAMPLE,
            Archetype::EditedBook => EDITED_EXAMPLE,
            Archetype::JournalArticle => JOURNAL_EXAMPLE,
            Archetype::Conference => CONFERENCE_EXAMPLE,
            Archetype::Monograph => MONOGRAPH_EXAMPLE,
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Archetype::Thesis => {
                "Ensure the thesis title is italicized and you have ‘]. ’ before the institution name."
            }
            Archetype::BookChapter => {
                "Use ‘In Editor(s) (Ed.), Book Title (pp. xx–xx). Publisher.’ with italics on the book title."
            }
            Archetype::EditedBook => {
                "Format as 'Author. (Ed.). (YYYY). Title. Publisher.' and italicize the title."
            }
            Archetype::JournalArticle => {
                "Italicize the journal title & volume, capitalize only the first word of the article title, and check page numbers."
            }
            Archetype::Conference => {
                "Italicize the conference paper title and format 'Conference Name, Location.'"
            }
            Archetype::Monograph => "Use 'Author. (YYYY). Title. Publisher.' with the title italicized.",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Shown when an entry matches none of the archetypes
pub const GENERIC_HINT: &str =
    "Make sure this entry matches one of the six APA-7 reference types exactly.";

/// First archetype, in priority order, whose detection pattern matches
pub fn classify(text: &str) -> Option<Archetype> {
    let found = Archetype::PRIORITY.into_iter().find(|a| a.detect(text));
    debug!("Classified {:?} as {:?}", text, found);
    found
}

/// Title text with any bracketed annotation (e.g. a translation) removed
fn strip_annotation(title: &str) -> String {
    BRACKET_ANNOTATION.replace_all(title, "").trim().to_string()
}

/// Replace hyphens with en-dashes; the flag reports whether any were found
fn normalize_dash(range: &str) -> (String, bool) {
    if range.contains('-') {
        (range.replace('-', "–"), true)
    } else {
        (range.to_string(), false)
    }
}

/// Bounds of an en-dash range; a single number is its own start and end.
/// `None` when either bound is not a base-10 integer.
fn parse_range(range: &str) -> Option<(i64, i64)> {
    let (start, end) = range.split_once('–').unwrap_or((range, range));
    Some((start.parse().ok()?, end.parse().ok()?))
}

pub(crate) fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// Allowed first character of a title or title segment
pub(crate) fn is_title_start(c: char) -> bool {
    c.is_uppercase() || c.is_ascii_digit() || is_cjk(c)
}

/// Word has cased letters and all of them are uppercase
fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn example_paragraph(archetype: Archetype) -> (String, Paragraph) {
        let pieces: Vec<(&str, bool)> =
            archetype.example().iter().map(|s| (s.text, s.italic)).collect();
        let para = test_support::para(&pieces);
        (para.text.clone(), para)
    }

    #[test]
    fn test_examples_classify_as_their_archetype() {
        for archetype in Archetype::PRIORITY {
            let (text, _) = example_paragraph(archetype);
            assert_eq!(classify(&text), Some(archetype), "{}", text);
        }
    }

    #[test]
    fn test_examples_validate_cleanly() {
        for archetype in Archetype::PRIORITY {
            let (text, para) = example_paragraph(archetype);
            assert_eq!(archetype.validate(&text, &para), Vec::<Issue>::new(), "{}", text);
        }
    }

    #[test]
    fn test_unrecognized_text() {
        assert_eq!(classify("Just some notes without structure"), None);
    }

    #[test]
    fn test_priority_breaks_ties() {
        // Both the thesis and the conference patterns match; thesis comes first
        let text = "Doe, J. (2018). A Study [Master's thesis]. University, City.";
        assert!(Archetype::Conference.detect(text));
        assert_eq!(classify(text), Some(Archetype::Thesis));
    }

    #[test]
    fn test_normalize_dash_and_parse_range() {
        assert_eq!(normalize_dash("123-145"), ("123–145".to_string(), true));
        assert_eq!(normalize_dash("123–145"), ("123–145".to_string(), false));
        assert_eq!(parse_range("123–145"), Some((123, 145)));
        assert_eq!(parse_range("42"), Some((42, 42)));
        assert_eq!(parse_range("12–x"), None);
    }

    #[test]
    fn test_strip_annotation() {
        assert_eq!(strip_annotation("人工智能 [Artificial Intelligence]"), "人工智能");
        assert_eq!(strip_annotation("Plain Title"), "Plain Title");
    }

    #[test]
    fn test_case_helpers() {
        assert!(is_all_caps("AI"));
        assert!(is_all_caps("COVID-19"));
        assert!(!is_all_caps("Ai"));
        assert!(!is_all_caps("2020"));
        assert!(is_title_start('人'));
        assert!(is_title_start('7'));
        assert!(!is_title_start('u'));
    }
}
