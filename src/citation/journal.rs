use super::patterns::{JOURNAL_DETECT, JOURNAL_SOURCE, PLAIN_YEAR, SENTENCE_SPLIT, TITLE_SEGMENT_SPLIT};
use super::{is_all_caps, is_title_start, normalize_dash, parse_range, strip_annotation};
use crate::document::Paragraph;
use crate::inspect::is_snippet_italic;
use crate::issue::Issue;

/// Words that stay lowercase in a journal name
const JOURNAL_STOP_WORDS: [&str; 8] = ["of", "by", "between", "and", "or", "on", "&", "in"];

pub fn detect(text: &str) -> bool {
    JOURNAL_DETECT.is_match(text)
}

/// Authors (YYYY). Title. Journal, Volume(Issue), pages.
pub fn validate(text: &str, paragraph: &Paragraph) -> Vec<Issue> {
    let Some(year) = PLAIN_YEAR.find(text) else {
        return vec![Issue::YearBlockMissing];
    };
    let remainder = text[year.end()..].trim();

    let Some(split) = SENTENCE_SPLIT.captures(remainder) else {
        return vec![Issue::TitleSourceSplit];
    };
    let (title_part, source) = (&split[1], &split[2]);

    let Some(caps) = JOURNAL_SOURCE.captures(source) else {
        return vec![Issue::SourceShape];
    };
    let mut issues = Vec::new();

    let journal = &caps["journal"];
    let journal_main = strip_annotation(journal);
    if !is_snippet_italic(paragraph, &journal_main) {
        issues.push(Issue::JournalNotItalic {
            journal: journal_main,
        });
    }

    let lowercase_words: Vec<String> = journal
        .split_whitespace()
        .filter(|w| !JOURNAL_STOP_WORDS.contains(w))
        .filter(|w| !w.chars().next().is_some_and(char::is_uppercase))
        .map(str::to_string)
        .collect();
    if !lowercase_words.is_empty() {
        issues.push(Issue::JournalWordsNotCapitalized {
            words: lowercase_words,
        });
    }

    let volume = &caps["volume"];
    if !is_snippet_italic(paragraph, volume) {
        issues.push(Issue::VolumeNotItalic {
            volume: volume.to_string(),
        });
    }

    let (pages, hyphenated) = normalize_dash(&caps["pages"]);
    if hyphenated {
        issues.push(Issue::HyphenInPageRange);
    }
    if caps.name("issue").is_some_and(|m| m.as_str().contains('-')) {
        issues.push(Issue::HyphenInIssueRange);
    }

    match parse_range(&pages) {
        Some((start, end)) => {
            if start <= 0 || end <= 0 {
                issues.push(Issue::PagesNotPositive);
            }
            if start > end {
                issues.push(Issue::PageOrder { start, end });
            }
        }
        None => issues.push(Issue::PagesNotInteger),
    }

    issues.extend(check_title_case(title_part));
    issues
}

/// Sentence case per colon-separated segment: the first word starts uppercase
/// (or with a digit or CJK), later words are lowercase or all caps. Only the
/// first offending later word of a segment is reported.
fn check_title_case(title: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    let title = title.trim_end_matches(['.', '!', '?']);

    for segment in TITLE_SEGMENT_SPLIT.split(title) {
        let words: Vec<&str> = segment.split_whitespace().collect();
        let Some((first, rest)) = words.split_first() else {
            continue;
        };

        if !first.chars().next().is_some_and(is_title_start) {
            issues.push(Issue::TitleSegmentStart {
                word: first.to_string(),
            });
        }

        let offending = rest.iter().find(|w| {
            w.chars().next().is_some_and(char::is_uppercase) && !is_all_caps(w)
        });
        if let Some(word) = offending {
            issues.push(Issue::TitleWordCase {
                word: word.to_string(),
            });
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citation::test_support::para;

    fn article(title: &str, journal: &str, volume: &str, tail: &str) -> Paragraph {
        let head = format!("Smith, J. A., & Doe, J. B. (2020). {} ", title);
        para(&[
            (head.as_str(), false),
            (journal, true),
            (", ", false),
            (volume, true),
            (tail, false),
        ])
    }

    #[test]
    fn test_detect_journal_shape() {
        assert!(detect("Smith, J. (2020). Title. Journal, 15(3), 123–145."));
        assert!(detect("Smith, J. (2020). Title. Journal, 15, 123-145."));
        assert!(detect("Smith, J. (2020). Title. Journal, 15(3-4), 7."));
        assert!(!detect("Smith, J. (2020). Title. Journal, vol. 15, 123–145."));
    }

    #[test]
    fn test_valid_article() {
        let p = article("Understanding AI.", "Journal of Research", "15", "(3), 123–145.");
        assert!(validate(&p.text, &p).is_empty());
    }

    #[test]
    fn test_hyphen_pages_in_order() {
        let p = article("Understanding AI.", "Journal of Research", "15", "(3), 123-145.");
        assert_eq!(validate(&p.text, &p), vec![Issue::HyphenInPageRange]);
    }

    #[test]
    fn test_hyphen_pages_reversed() {
        let p = article("Understanding AI.", "Journal of Research", "15", "(3), 145-123.");
        assert_eq!(
            validate(&p.text, &p),
            vec![Issue::HyphenInPageRange, Issue::PageOrder { start: 145, end: 123 }]
        );
    }

    #[test]
    fn test_zero_page_and_issue_hyphen() {
        let p = article("Understanding AI.", "Journal of Research", "15", "(3-4), 0.");
        assert_eq!(
            validate(&p.text, &p),
            vec![Issue::HyphenInIssueRange, Issue::PagesNotPositive]
        );
    }

    #[test]
    fn test_journal_capitalization_and_italics() {
        let p = para(&[(
            "Smith, J. (2020). Understanding AI. journal of research, 15(3), 1–9.",
            false,
        )]);
        assert_eq!(
            validate(&p.text, &p),
            vec![
                Issue::JournalNotItalic {
                    journal: "journal of research".to_string()
                },
                Issue::JournalWordsNotCapitalized {
                    words: vec!["journal".to_string(), "research".to_string()]
                },
                Issue::VolumeNotItalic {
                    volume: "15".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_title_case_per_segment() {
        assert_eq!(
            check_title_case("Deep Learning: a Survey Of Methods."),
            vec![
                Issue::TitleWordCase {
                    word: "Learning".to_string()
                },
                Issue::TitleSegmentStart {
                    word: "a".to_string()
                },
                Issue::TitleWordCase {
                    word: "Survey".to_string()
                },
            ]
        );
        assert!(check_title_case("Understanding AI: A review of GPU use.").is_empty());
        assert!(check_title_case("人工智能 [Artificial intelligence].").is_empty());
    }
}
