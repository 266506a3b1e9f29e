use log::debug;
use roxmltree::Node;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use super::{
    Document, DocumentError, EmphasisMarkup, Font, Length, LineSpacing, Paragraph,
    ParagraphFormat, Run, Style, StyleSheet,
};
use crate::inspect::style_chain;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";

/// Read a .docx file from disk into the in-memory document model
pub fn load_docx<P: AsRef<Path>>(path: P) -> Result<Document, DocumentError> {
    let file = File::open(path.as_ref())?;
    read_docx(file)
}

/// Read a .docx archive from any seekable reader
pub fn read_docx<R: Read + Seek>(reader: R) -> Result<Document, DocumentError> {
    let mut archive = zip::ZipArchive::new(reader)?;

    let document_xml = read_part(&mut archive, DOCUMENT_PART)?
        .ok_or(DocumentError::MissingPart(DOCUMENT_PART))?;
    let styles_xml = read_part(&mut archive, STYLES_PART)?;

    parse_docx_parts(&document_xml, styles_xml.as_deref())
}

fn read_part<R: Read + Seek>(
    archive: &mut zip::ZipArchive<R>,
    name: &str,
) -> Result<Option<String>, DocumentError> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut content = String::new();
    entry.read_to_string(&mut content)?;
    Ok(Some(content))
}

/// Build a [`Document`] from the raw XML of the main document part and the styles part
pub fn parse_docx_parts(
    document_xml: &str,
    styles_xml: Option<&str>,
) -> Result<Document, DocumentError> {
    let styles = match styles_xml {
        Some(xml) => parse_styles(xml)?,
        None => StyleSheet::new(),
    };

    let xml = roxmltree::Document::parse(document_xml).map_err(|source| DocumentError::Xml {
        part: DOCUMENT_PART,
        source,
    })?;

    let body = xml
        .root_element()
        .children()
        .find(|n| n.has_tag_name((W_NS, "body")));

    let paragraphs = match body {
        Some(body) => body
            .children()
            .filter(|n| n.has_tag_name((W_NS, "p")))
            .map(|p| parse_paragraph(p, &styles))
            .collect(),
        None => Vec::new(),
    };

    debug!(
        "Parsed {} paragraphs and {} styles",
        paragraphs.len(),
        styles.len()
    );

    Ok(Document { paragraphs, styles })
}

fn parse_styles(xml: &str) -> Result<StyleSheet, DocumentError> {
    let doc = roxmltree::Document::parse(xml).map_err(|source| DocumentError::Xml {
        part: STYLES_PART,
        source,
    })?;

    let mut sheet = StyleSheet::new();
    for node in doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name((W_NS, "style")))
    {
        let Some(id) = node.attribute((W_NS, "styleId")) else {
            continue;
        };
        let name = child(node, "name").and_then(val).map(str::to_string);
        let base = child(node, "basedOn").and_then(val).map(str::to_string);
        let font = child(node, "rPr").map(parse_font).unwrap_or_default();

        sheet.insert(Style {
            id: id.to_string(),
            name,
            font,
            base,
        });
    }
    Ok(sheet)
}

fn parse_paragraph(p: Node, styles: &StyleSheet) -> Paragraph {
    let ppr = child(p, "pPr");
    let style = ppr
        .and_then(|n| child(n, "pStyle"))
        .and_then(val)
        .map(str::to_string);
    let format = ppr.map(parse_paragraph_format).unwrap_or_default();

    let mut runs = Vec::new();
    for node in p.children() {
        if node.has_tag_name((W_NS, "r")) {
            runs.push(parse_run(node, styles));
        } else if node.has_tag_name((W_NS, "hyperlink")) {
            runs.extend(
                node.children()
                    .filter(|n| n.has_tag_name((W_NS, "r")))
                    .map(|r| parse_run(r, styles)),
            );
        }
    }

    let text = runs.iter().map(|r| r.text.as_str()).collect();
    Paragraph {
        text,
        style,
        runs,
        format,
    }
}

fn parse_paragraph_format(ppr: Node) -> ParagraphFormat {
    let mut format = ParagraphFormat::default();

    if let Some(spacing) = child(ppr, "spacing") {
        if let Some(line) = int_attr(spacing, "line") {
            let rule = spacing.attribute((W_NS, "lineRule")).unwrap_or("auto");
            format.line_spacing = Some(match rule {
                "auto" => LineSpacing::Multiple(line as f64 / 240.0),
                _ => LineSpacing::Fixed(Length::from_twips(line)),
            });
        }
    }

    if let Some(ind) = child(ppr, "ind") {
        format.left_indent = int_attr(ind, "left")
            .or_else(|| int_attr(ind, "start"))
            .map(Length::from_twips);
        format.first_line_indent = match (int_attr(ind, "hanging"), int_attr(ind, "firstLine")) {
            (Some(hanging), _) => Some(Length::from_twips(-hanging)),
            (None, Some(first)) => Some(Length::from_twips(first)),
            (None, None) => None,
        };
    }

    format
}

fn parse_run(r: Node, styles: &StyleSheet) -> Run {
    let mut text = String::new();
    for node in r.children() {
        match node.tag_name().name() {
            "t" => text.push_str(node.text().unwrap_or("")),
            "tab" => text.push('\t'),
            "br" | "cr" => text.push('\n'),
            "noBreakHyphen" => text.push('-'),
            _ => {}
        }
    }

    let rpr = child(r, "rPr");
    let font = rpr.map(parse_font).unwrap_or_default();
    let markup = rpr
        .map(|n| EmphasisMarkup {
            italic: child(n, "i").is_some_and(toggle),
            italic_complex_script: child(n, "iCs").is_some_and(toggle),
        })
        .unwrap_or_default();
    let font_italic = rpr
        .and_then(|n| child(n, "rStyle"))
        .and_then(val)
        .and_then(|id| style_chain(styles, id).iter().find_map(|s| s.font.italic));

    Run {
        text,
        italic: font.italic,
        font_italic,
        markup,
        font,
    }
}

fn parse_font(rpr: Node) -> Font {
    let name = child(rpr, "rFonts").and_then(|f| {
        f.attribute((W_NS, "ascii"))
            .or_else(|| f.attribute((W_NS, "hAnsi")))
            .map(str::to_string)
    });
    let size_pt = child(rpr, "sz")
        .and_then(val)
        .and_then(|v| v.parse::<f64>().ok())
        .map(|half_points| half_points / 2.0);

    Font {
        name,
        size_pt,
        bold: child(rpr, "b").map(toggle),
        italic: child(rpr, "i").map(toggle),
    }
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name((W_NS, name)))
}

fn val<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attribute((W_NS, "val"))
}

fn int_attr(node: Node, name: &str) -> Option<i64> {
    node.attribute((W_NS, name)).and_then(|v| v.parse().ok())
}

/// OOXML on/off property: present without `w:val` means on
fn toggle(node: Node) -> bool {
    !matches!(val(node), Some("0" | "false" | "off" | "none"))
}
