use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Year block: (2020). or (2020, June 3–5).
    pub static ref YEAR_BLOCK: Regex = Regex::new(
        r"\(\d{4}(?:,\s*[A-Za-z]+ \d{1,2}(?:[-–]\d{1,2})?)?\)\."
    ).unwrap();

    // Bare year block with trailing whitespace, as used by journal and monograph sources
    pub static ref PLAIN_YEAR: Regex = Regex::new(r"\(\d{4}\)\.\s*").unwrap();

    // Title after the year block, up to the first sentence terminator
    pub static ref TITLE_AFTER_YEAR: Regex = Regex::new(
        r"\(\d{4}(?:,\s*[A-Za-z]+ \d{1,2}(?:[-–]\d{1,2})?)?\)\.\s*(.[^.?!]*)[.?!]"
    ).unwrap();

    // Everything before the first opening parenthesis is the author list
    pub static ref AUTHORS_HEAD: Regex = Regex::new(r"^(.+?)\s*\(").unwrap();

    // Candidate author separator; a real boundary also needs a capitalized name after it
    pub static ref AUTHOR_SEPARATOR: Regex = Regex::new(r",\s*").unwrap();

    pub static ref COMMA_AMPERSAND: Regex = Regex::new(r",\s*&\s*").unwrap();

    pub static ref CJK: Regex = Regex::new(r"[\x{4E00}-\x{9FFF}]").unwrap();

    pub static ref BRACKETED: Regex = Regex::new(r"\[.+?\]").unwrap();

    // Bracketed annotation with surrounding whitespace, stripped before italic checks
    pub static ref BRACKET_ANNOTATION: Regex = Regex::new(r"\s*\[.*?\]\s*").unwrap();

    // "Title. Rest" split on the first sentence terminator
    pub static ref SENTENCE_SPLIT: Regex = Regex::new(r"^(.+?[.!?])\s*(.+)$").unwrap();

    pub static ref TITLE_SEGMENT_SPLIT: Regex = Regex::new(r":\s*").unwrap();
}

// Detection patterns, evaluated in archetype priority order
lazy_static! {
    pub static ref THESIS_DETECT: Regex = Regex::new(
        r"(?i)\[(Doctoral dissertation|Master[’']s thesis)\]"
    ).unwrap();

    pub static ref CHAPTER_DETECT: Regex = Regex::new(
        r"(?i)\bIn\s+.+?\(Eds?\.\),.*pp\.\s*\d+"
    ).unwrap();

    pub static ref EDITED_DETECT: Regex = Regex::new(
        r"(?i)\(Eds?\.\)\.\s*\(\d{4}\)\."
    ).unwrap();

    // Authors (YYYY). Title. Journal, Vol(Issue), pp–pp.
    pub static ref JOURNAL_DETECT: Regex = Regex::new(
        r"^\s*.+?\(\d{4}\)\.\s*.+?,\s*\d+(?:\(\d+(?:[-–]\d+)?\))?,\s*\d+(?:[-–]\d+)?\.\s*$"
    ).unwrap();

    // Year block close followed by a comma-bearing segment ending in a period
    pub static ref CONFERENCE_DETECT: Regex = Regex::new(r"\)\.\s*.+?,\s*.+\.$").unwrap();

    // (YYYY). Title. Publisher. with no commas after the year
    pub static ref MONOGRAPH_DETECT: Regex = Regex::new(
        r"\(\d{4}\)\.\s*[^,]+?\.\s*[^,]+?\.$"
    ).unwrap();
}

// Structural shapes, one per archetype
lazy_static! {
    pub static ref THESIS_BRACKET_CLOSE: Regex = Regex::new(r"\]\.\s+").unwrap();

    // In Editors (Eds.), Book Title (pp. 12–34). Publisher.
    pub static ref CHAPTER_SHAPE: Regex = Regex::new(
        r"\bIn\s+(?P<editors>.+?)\s*\(Eds?\.\),\s*(?P<title>.+?)\s*\(pp\.\s*(?P<pages>\d+[-–]\d+)\)\.\s*(?P<publisher>.+)\.$"
    ).unwrap();

    // Author. (Ed.). (YYYY). Title. Publisher.
    pub static ref EDITED_SHAPE: Regex = Regex::new(
        r"^.+?\(Eds?\.\)\.\s*\(\d{4}\)\.\s*(?P<title>.+?)\.\s*(?P<publisher>.+?)\.$"
    ).unwrap();

    // Journal, Volume(Issue), pages.
    pub static ref JOURNAL_SOURCE: Regex = Regex::new(
        r"^(?P<journal>.+?),\s*(?P<volume>\d+)(?:\((?P<issue>\d+(?:[-–]\d+)?)\))?,\s*(?P<pages>\d+(?:[-–]\d+)?)\.$"
    ).unwrap();

    // Author. (YYYY). Title. Publisher.
    pub static ref MONOGRAPH_SHAPE: Regex = Regex::new(
        r"^(?P<authors>.+?)\s*\(\d{4}\)\.\s*(?P<title>.+?)\.\s*(?P<publisher>.+?)\.$"
    ).unwrap();
}
