pub mod docx;

pub use docx::{load_docx, parse_docx_parts};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while turning a file into a [`Document`]
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a valid .docx archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("document part '{0}' is missing")]
    MissingPart(&'static str),

    #[error("malformed XML in '{part}': {source}")]
    Xml {
        part: &'static str,
        #[source]
        source: roxmltree::Error,
    },

    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Length stored in English Metric Units (914400 per inch, 360000 per cm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Length(pub i64);

impl Length {
    pub const EMU_PER_CM: i64 = 360_000;
    const EMU_PER_TWIP: i64 = 635;

    pub fn from_twips(twips: i64) -> Self {
        Length(twips * Self::EMU_PER_TWIP)
    }

    pub fn from_cm(cm: f64) -> Self {
        Length((cm * Self::EMU_PER_CM as f64).round() as i64)
    }

    pub fn cm(&self) -> f64 {
        self.0 as f64 / Self::EMU_PER_CM as f64
    }
}

/// Line spacing as Word stores it: a multiple of single spacing, or a fixed height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineSpacing {
    Multiple(f64),
    Fixed(Length),
}

impl LineSpacing {
    pub fn is_single(&self) -> bool {
        match self {
            LineSpacing::Multiple(m) => (m - 1.0).abs() < 1e-6,
            LineSpacing::Fixed(_) => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphFormat {
    pub line_spacing: Option<LineSpacing>,
    pub left_indent: Option<Length>,
    pub first_line_indent: Option<Length>,
}

/// Font attributes set directly on a run or a style; `None` means inherited
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    pub name: Option<String>,
    pub size_pt: Option<f64>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
}

/// Raw emphasis elements seen in the run properties, independent of the toggles above
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmphasisMarkup {
    pub italic: bool,
    pub italic_complex_script: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Run {
    pub text: String,
    /// Italic toggle set directly on the run
    pub italic: Option<bool>,
    /// Italic inherited from the run's character style
    pub font_italic: Option<bool>,
    pub markup: EmphasisMarkup,
    pub font: Font,
}

impl Run {
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn italic(text: &str) -> Self {
        Self {
            text: text.to_string(),
            italic: Some(true),
            ..Default::default()
        }
    }

    pub fn with_font(mut self, name: &str, size_pt: f64) -> Self {
        self.font.name = Some(name.to_string());
        self.font.size_pt = Some(size_pt);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paragraph {
    pub text: String,
    /// Style id into the document's [`StyleSheet`]
    pub style: Option<String>,
    pub runs: Vec<Run>,
    pub format: ParagraphFormat,
}

impl Paragraph {
    /// Build a paragraph whose text is the concatenation of its runs
    pub fn from_runs(runs: Vec<Run>) -> Self {
        let text = runs.iter().map(|r| r.text.as_str()).collect();
        Self {
            text,
            runs,
            ..Default::default()
        }
    }

    pub fn with_format(mut self, format: ParagraphFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_style(mut self, style_id: &str) -> Self {
        self.style = Some(style_id.to_string());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub id: String,
    pub name: Option<String>,
    pub font: Font,
    /// Id of the style this one is based on
    pub base: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet {
    styles: HashMap<String, Style>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, style: Style) {
        self.styles.insert(style.id.clone(), style);
    }

    pub fn get(&self, id: &str) -> Option<&Style> {
        self.styles.get(id)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
    pub styles: StyleSheet,
}

impl Document {
    /// Load a document, choosing the reader by file extension (`.json` or `.docx`)
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            load_docx(path)
        }
    }

    pub fn style_of(&self, paragraph: &Paragraph) -> Option<&Style> {
        paragraph.style.as_deref().and_then(|id| self.styles.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversions() {
        assert_eq!(Length::from_twips(397).0, 252_095);
        assert_eq!(Length::from_cm(0.7).0, 252_000);
        assert!((Length::from_cm(-0.7).cm() + 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_line_spacing_single() {
        assert!(LineSpacing::Multiple(1.0).is_single());
        assert!(!LineSpacing::Multiple(1.5).is_single());
        assert!(!LineSpacing::Fixed(Length::from_twips(240)).is_single());
    }

    #[test]
    fn test_paragraph_text_from_runs() {
        let para = Paragraph::from_runs(vec![Run::plain("Smith, J. "), Run::italic("Title")]);
        assert_eq!(para.text, "Smith, J. Title");
        assert_eq!(para.runs.len(), 2);
    }

    #[test]
    fn test_document_json_roundtrip_defaults() {
        let json = r#"{
            "paragraphs": [
                {"text": "Bibliography", "style": "Heading1"},
                {"text": "Entry.", "runs": [{"text": "Entry.", "italic": true}],
                 "format": {"line_spacing": {"multiple": 1.0}, "left_indent": 252000}}
            ],
            "styles": {"Heading1": {"id": "Heading1", "name": "heading 1"}}
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.paragraphs.len(), 2);
        assert_eq!(doc.style_of(&doc.paragraphs[0]).unwrap().name.as_deref(), Some("heading 1"));
        let entry = &doc.paragraphs[1];
        assert_eq!(entry.runs[0].italic, Some(true));
        assert_eq!(entry.format.left_indent, Some(Length(252_000)));
        assert_eq!(entry.format.first_line_indent, None);
    }
}
