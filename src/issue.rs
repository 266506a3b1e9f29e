//! Every finding the validators can report.
//!
//! Each variant renders from a canonical English template with `{name}`
//! placeholders. The template doubles as the lookup key for translations.

use std::fmt;

use crate::i18n::fill;

#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    // Authors
    AuthorsUnparseable,
    NoAuthors,
    MissingAmpersand,
    MissingCommaBeforeAmpersand,
    MissingEllipsis,

    // Year and title
    BadYearBlock,
    TitleUnparseable,
    TitleNotCapitalized,
    MissingTranslation,

    Unrecognized,

    // Thesis/Dissertation
    ThesisBracketPunctuation,
    ThesisTitleNotItalic { title: String },

    // Book Chapter
    ChapterShape,
    EditorsMissingAmpersand,
    BookTitleNotCapitalized { title: String },
    ChapterTitleNotItalic,
    ChapterPageOrder { start: i64, end: i64 },
    PublisherMissing,

    // Edited Book
    EditedBookShape,
    EditedTitleNotItalic,

    // Journal Article
    YearBlockMissing,
    TitleSourceSplit,
    SourceShape,
    JournalNotItalic { journal: String },
    JournalWordsNotCapitalized { words: Vec<String> },
    VolumeNotItalic { volume: String },
    PagesNotPositive,
    PageOrder { start: i64, end: i64 },
    PagesNotInteger,
    TitleSegmentStart { word: String },
    TitleWordCase { word: String },

    // Conference Article
    ConferenceSplit,
    ConferenceTitleNotItalic,
    ConferenceInfoShape,

    // Monograph/Book
    MonographShape,
    NumericPublisher,
    MonographTitleNotItalic { title: String },

    // Shared by ranges in several archetypes
    HyphenInPageRange,
    HyphenInIssueRange,
    HyphenInDateRange,

    // Paragraph formatting
    LineSpacing,
    HangingIndent { indent_cm: f64 },
    FontName { font: String },
    FontSize { size_pt: f64 },

    MissingPeriod,
}

impl Issue {
    /// Canonical message template, also used as the translation key
    pub fn template(&self) -> &'static str {
        use Issue::*;
        match self {
            AuthorsUnparseable => "Cannot parse authors list.",
            NoAuthors => "No authors found.",
            MissingAmpersand => "Multiple authors need '&' before last author.",
            MissingCommaBeforeAmpersand => "Use comma before '&' for 2-20 authors.",
            MissingEllipsis => "Use ellipsis after 19 authors when >20 authors.",
            BadYearBlock => "Year block must be '(YYYY).' or '(YYYY, Month D–D).'",
            TitleUnparseable => "Cannot parse title (no sentence-ending punctuation).",
            TitleNotCapitalized => "Title must start with a capital letter or digit/CJK.",
            MissingTranslation => "Chinese title needs English translation in [ ] immediately after.",
            Unrecognized => {
                "Couldn't recognize as any of the six APA-7 types: Thesis/Dissertation, \
                 Book Chapter, Edited Book, Journal Article, Conference Article, Monograph/Book."
            }
            ThesisBracketPunctuation => "After thesis-type bracket you need ']. ' before institution.",
            ThesisTitleNotItalic { .. } => "Thesis title must be italicized: '{title}'",
            ChapterShape => {
                "Book chapter must be \"In Editor(s) (Ed.), Book Title (pp. xx–xx). Publisher.\""
            }
            EditorsMissingAmpersand => "Editors list must include '&' before last editor.",
            BookTitleNotCapitalized { .. } => "Book title must start with a capital: '{title}'",
            ChapterTitleNotItalic => "Book title must be italicized.",
            ChapterPageOrder { .. } => "Page start ({start}) must be less than end ({end}).",
            PublisherMissing => "Publisher missing.",
            EditedBookShape => "Edited book must be \"Author. (Ed.). (YYYY). Title. Publisher.\"",
            EditedTitleNotItalic => "Edited-book title must be italicized.",
            YearBlockMissing => "Missing '(YYYY).' block.",
            TitleSourceSplit => "Cannot split title and source on punctuation.",
            SourceShape => "Source must be 'Journal, Volume(Issue), pp–pp.'",
            JournalNotItalic { .. } => "Journal title must be italicized: '{journal}'",
            JournalWordsNotCapitalized { .. } => "Journal title word not capitalized: {words}",
            VolumeNotItalic { .. } => "Volume must be italicized: '{volume}'",
            PagesNotPositive => "Page numbers must be positive.",
            PageOrder { .. } => "Start page ({start}) > end page ({end}).",
            PagesNotInteger => "Page numbers must be integers.",
            TitleSegmentStart { .. } => {
                "Article title segment must start uppercase, digit, or CJK: '{word}'"
            }
            TitleWordCase { .. } => "Article title word must be lowercase (or ALL-CAPS): '{word}'",
            ConferenceSplit => "Cannot split title and conference info.",
            ConferenceTitleNotItalic => "Conference title must be italicized.",
            ConferenceInfoShape => "Conference info must be 'Name, Location.'",
            MonographShape => "Monograph must be 'Author. (YYYY). Title. Publisher.'",
            NumericPublisher => "Publisher looks numeric, not valid for a book.",
            MonographTitleNotItalic { .. } => "Book title must be italicized: '{title}'",
            HyphenInPageRange => {
                "Use en-dash (–)[U+2013], not hyphen (-)[U+002d], in page ranges."
            }
            HyphenInIssueRange => {
                "Use en-dash (–)[U+2013], not hyphen (-)[U+002d], in issue ranges."
            }
            HyphenInDateRange => {
                "Use en-dash (–)[U+2013], not hyphen (-)[U+002d], in date ranges."
            }
            LineSpacing => "Line spacing must be single.",
            HangingIndent { .. } => "Paragraph must have hanging indent of {indent} cm.",
            FontName { .. } => "Font must be {font}.",
            FontSize { .. } => "Font size must be {size} pt.",
            MissingPeriod => "Reference must end with a period.",
        }
    }

    /// Placeholder values for [`Issue::template`], in template order
    pub fn params(&self) -> Vec<(&'static str, String)> {
        use Issue::*;
        match self {
            ThesisTitleNotItalic { title }
            | BookTitleNotCapitalized { title }
            | MonographTitleNotItalic { title } => vec![("title", title.clone())],
            JournalNotItalic { journal } => vec![("journal", journal.clone())],
            JournalWordsNotCapitalized { words } => {
                let quoted: Vec<String> = words.iter().map(|w| format!("'{}'", w)).collect();
                vec![("words", quoted.join(", "))]
            }
            VolumeNotItalic { volume } => vec![("volume", volume.clone())],
            ChapterPageOrder { start, end } | PageOrder { start, end } => {
                vec![("start", start.to_string()), ("end", end.to_string())]
            }
            TitleSegmentStart { word } | TitleWordCase { word } => vec![("word", word.clone())],
            HangingIndent { indent_cm } => vec![("indent", indent_cm.to_string())],
            FontName { font } => vec![("font", font.clone())],
            FontSize { size_pt } => vec![("size", size_pt.to_string())],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", fill(self.template(), &self.params()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_issue_renders_template() {
        assert_eq!(Issue::MissingPeriod.to_string(), "Reference must end with a period.");
        assert!(Issue::MissingPeriod.params().is_empty());
    }

    #[test]
    fn test_issue_with_params_renders_values() {
        let issue = Issue::PageOrder { start: 145, end: 123 };
        assert_eq!(issue.to_string(), "Start page (145) > end page (123).");

        let issue = Issue::JournalWordsNotCapitalized {
            words: vec!["research".to_string(), "letters".to_string()],
        };
        assert_eq!(
            issue.to_string(),
            "Journal title word not capitalized: 'research', 'letters'"
        );
    }

    #[test]
    fn test_formatting_issues_render_numbers() {
        assert_eq!(
            Issue::HangingIndent { indent_cm: 0.7 }.to_string(),
            "Paragraph must have hanging indent of 0.7 cm."
        );
        assert_eq!(Issue::FontSize { size_pt: 12.0 }.to_string(), "Font size must be 12 pt.");
    }

    #[test]
    fn test_unrecognized_names_all_six_types() {
        let message = Issue::Unrecognized.to_string();
        for name in [
            "Thesis/Dissertation",
            "Book Chapter",
            "Edited Book",
            "Journal Article",
            "Conference Article",
            "Monograph/Book",
        ] {
            assert!(message.contains(name), "missing {}", name);
        }
    }
}
