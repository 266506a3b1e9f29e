//! Read-only questions about run and paragraph formatting.

use log::debug;
use std::collections::HashSet;

use crate::common::Config;
use crate::document::{Paragraph, Run, Style, StyleSheet};

/// Upper bound on style inheritance depth, on top of the cycle check
const MAX_STYLE_DEPTH: usize = 64;

/// Font name and size resolved through style inheritance
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveFont {
    pub name: String,
    pub size_pt: f64,
}

/// True if any italic signal is set on the run: the direct toggle, the
/// character-style toggle, or the raw emphasis markup.
pub fn run_is_italic(run: &Run) -> bool {
    run.italic == Some(true)
        || run.font_italic == Some(true)
        || run.markup.italic
        || run.markup.italic_complex_script
}

/// True if the first occurrence of `snippet` in the paragraph is italic across
/// every run it touches. A snippet that is not present is never italic.
pub fn is_snippet_italic(paragraph: &Paragraph, snippet: &str) -> bool {
    let full_text: String = paragraph.runs.iter().map(|r| r.text.as_str()).collect();
    let Some(start) = full_text.find(snippet) else {
        return false;
    };
    let end = start + snippet.len();

    let mut pos = 0;
    for run in &paragraph.runs {
        let (run_start, run_end) = (pos, pos + run.text.len());
        if run_end > start && run_start < end && !run_is_italic(run) {
            return false;
        }
        pos = run_end;
    }
    true
}

/// The style followed by its base styles, stopping at a missing id, a repeated
/// id, or [`MAX_STYLE_DEPTH`].
pub fn style_chain<'a>(styles: &'a StyleSheet, id: &str) -> Vec<&'a Style> {
    let mut chain = Vec::new();
    let mut seen = HashSet::new();
    let mut next = Some(id);

    while let Some(current) = next {
        if !seen.insert(current) {
            debug!("Style inheritance cycle at '{}'", current);
            break;
        }
        if chain.len() == MAX_STYLE_DEPTH {
            debug!("Style inheritance deeper than {} at '{}'", MAX_STYLE_DEPTH, current);
            break;
        }
        let Some(style) = styles.get(current) else {
            break;
        };
        chain.push(style);
        next = style.base.as_deref();
    }
    chain
}

/// First style in the inheritance chain that sets both font name and size.
/// `None` when the chain ends (or cycles) before that happens.
pub fn effective_font(styles: &StyleSheet, style_id: &str) -> Option<EffectiveFont> {
    style_chain(styles, style_id)
        .into_iter()
        .find_map(|style| match (&style.font.name, style.font.size_pt) {
            (Some(name), Some(size_pt)) => Some(EffectiveFont {
                name: name.clone(),
                size_pt,
            }),
            _ => None,
        })
}

/// Heading-styled paragraph, or one with a bold run in the section-title font
pub fn is_section_title(paragraph: &Paragraph, styles: &StyleSheet, config: &Config) -> bool {
    let style = paragraph.style.as_deref().and_then(|id| styles.get(id));

    let heading_styled = style
        .and_then(|s| s.name.as_deref())
        .is_some_and(|name| name.to_lowercase().contains("heading"));
    if heading_styled {
        return true;
    }

    let inherited = style.and_then(|s| effective_font(styles, &s.id));
    paragraph.runs.iter().any(|run| {
        let name = run
            .font
            .name
            .as_deref()
            .or(inherited.as_ref().map(|f| f.name.as_str()));
        let size = run.font.size_pt.or(inherited.as_ref().map(|f| f.size_pt));

        run.font.bold == Some(true)
            && name == Some(config.title_font.as_str())
            && size == Some(config.title_size_pt)
    })
}
