use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::tempdir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use apa7_bib_validator::citation::Archetype;
use apa7_bib_validator::common::Config;
use apa7_bib_validator::diagnose::diagnose_document;
use apa7_bib_validator::document::Document;
use apa7_bib_validator::issue::Issue;

const BIN: &str = env!("CARGO_BIN_EXE_apa7-bib-validator");

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// A paragraph as (text, italic) runs, with or without the house hanging indent
struct Para<'a> {
    runs: &'a [(&'a str, bool)],
    hanging: bool,
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn paragraph_xml(para: &Para) -> String {
    let mut xml = String::from("<w:p>");
    if para.hanging {
        xml.push_str(
            r#"<w:pPr><w:spacing w:line="240" w:lineRule="auto"/><w:ind w:left="397" w:hanging="397"/></w:pPr>"#,
        );
    }
    for (text, italic) in para.runs {
        xml.push_str("<w:r>");
        if *italic {
            xml.push_str("<w:rPr><w:i/></w:rPr>");
        }
        xml.push_str(&format!(r#"<w:t xml:space="preserve">{}</w:t></w:r>"#, escape(text)));
    }
    xml.push_str("</w:p>");
    xml
}

/// Write a minimal .docx holding only the main document part
fn create_test_docx(dir: &Path, paragraphs: &[Para]) -> PathBuf {
    let body: String = paragraphs.iter().map(paragraph_xml).collect();
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
        W_NS, body
    );

    let path = dir.join("thesis.docx");
    let mut zip = ZipWriter::new(File::create(&path).unwrap());
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(document.as_bytes()).unwrap();
    zip.finish().unwrap();
    path
}

fn sample_docx(dir: &Path) -> PathBuf {
    create_test_docx(
        dir,
        &[
            Para { runs: &[("Introduction", false)], hanging: false },
            Para { runs: &[("Bibliography", false)], hanging: false },
            Para {
                runs: &[
                    ("Smith, J. A., & Doe, J. B. (2020). Understanding AI. ", false),
                    ("Journal of Research", true),
                    (", ", false),
                    ("15", true),
                    ("(3), 123–145.", false),
                ],
                hanging: true,
            },
            Para {
                runs: &[
                    ("Brown, C. (2017). ", false),
                    ("Fundamentals of Example Studies", true),
                    (". Publisher Name.", false),
                ],
                hanging: true,
            },
            Para {
                runs: &[("Adams, K. (2019). Learning Rust. Systems Journal, 4(1), 10-20.", false)],
                hanging: true,
            },
            Para { runs: &[("[This page is deliberately left blank.]", false)], hanging: false },
            Para { runs: &[("Zed, A. (2000). After the end.", false)], hanging: false },
        ],
    )
}

fn run(args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .output()
        .expect("Failed to run apa7-bib-validator")
}

#[test]
fn test_check_help() {
    let output = run(&["check", "--help"]);
    assert!(output.status.success(), "check --help should succeed");
    assert!(String::from_utf8_lossy(&output.stdout).contains("--docx"));
}

#[test]
fn test_library_diagnoses_docx() {
    let dir = tempdir().unwrap();
    let path = sample_docx(dir.path());

    let document = Document::open(&path).unwrap();
    let report = diagnose_document(&document, &Config::default());

    assert_eq!(report.summary.entries, 3);
    assert!(!report.in_alphabetical_order);

    let journal = &report.diagnostics[0];
    assert_eq!(journal.archetype, Some(Archetype::JournalArticle));
    assert!(journal.errors.is_empty(), "{:?}", journal.errors);

    let monograph = &report.diagnostics[1];
    assert_eq!(monograph.archetype, Some(Archetype::Monograph));
    assert!(monograph.errors.is_empty(), "{:?}", monograph.errors);

    let adams = &report.diagnostics[2];
    assert_eq!(adams.archetype, Some(Archetype::JournalArticle));
    assert!(adams.errors.contains(&Issue::HyphenInPageRange));
    assert!(adams.errors.contains(&Issue::JournalNotItalic {
        journal: "Systems Journal".to_string()
    }));
    assert_eq!(report.summary.entries_with_errors, 1);
}

#[test]
fn test_json_document_dump() {
    let dir = tempdir().unwrap();
    let document = Document::open(sample_docx(dir.path())).unwrap();

    let json_path = dir.path().join("thesis.json");
    fs::write(&json_path, serde_json::to_string(&document).unwrap()).unwrap();

    let reloaded = Document::open(&json_path).unwrap();
    assert_eq!(reloaded, document);
}

#[test]
fn test_check_text_report() {
    let dir = tempdir().unwrap();
    let path = sample_docx(dir.path());

    let output = run(&["check", "--docx", path.to_str().unwrap(), "--log-level", "ERROR"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Entries are not in alphabetical order by surname."));
    assert!(stdout.contains("Entry 3 (Journal Article): "));
    assert!(!stdout.contains("Entry 1 "));
    assert!(stdout.contains("Use en-dash (–)[U+2013], not hyphen (-)[U+002d], in page ranges."));
    assert!(stdout.contains("Total entries with errors: 1"));
    assert!(!stdout.contains("Zed, A."));
}

#[test]
fn test_check_json_report() {
    let dir = tempdir().unwrap();
    let path = sample_docx(dir.path());

    let output = run(&["check", "--docx", path.to_str().unwrap(), "--format", "json", "--log-level", "ERROR"]);
    assert!(output.status.success());

    let lines: Vec<serde_json::Value> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0]["kind"], "entry");
    assert_eq!(lines[0]["archetype"], "Journal Article");
    assert_eq!(lines[1]["archetype"], "Monograph/Book");
    assert!(!lines[2]["errors"].as_array().unwrap().is_empty());
    assert_eq!(lines[3]["kind"], "ordering");
    assert_eq!(lines[4]["kind"], "summary");
    assert_eq!(lines[4]["entries"], 3);
}

#[test]
fn test_check_with_catalog() {
    let dir = tempdir().unwrap();
    let path = sample_docx(dir.path());
    let locales = dir.path().join("locales");
    fs::create_dir(&locales).unwrap();
    fs::write(
        locales.join("zh_CN.json"),
        r#"{"Total entries with errors: {errors}": "有错误的条目总数：{errors}", "Journal Article": "期刊文章"}"#,
    )
    .unwrap();

    let output = run(&[
        "check",
        "--docx",
        path.to_str().unwrap(),
        "--lang",
        "zh_CN",
        "--locale-dir",
        locales.to_str().unwrap(),
        "--log-level",
        "ERROR",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("有错误的条目总数：1"));
    assert!(stdout.contains("Entry 3 (期刊文章): "));
}

#[test]
fn test_check_with_config_file() {
    let dir = tempdir().unwrap();
    let path = create_test_docx(
        dir.path(),
        &[
            Para { runs: &[("References", false)], hanging: false },
            Para {
                runs: &[("Brown, C. (2017). ", false), ("Fundamentals", true), (". Publisher Name.", false)],
                hanging: true,
            },
        ],
    );
    let config = dir.path().join("rules.json");
    fs::write(&config, r#"{"heading": "References"}"#).unwrap();

    let output = run(&[
        "check",
        "--docx",
        path.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--log-level",
        "ERROR",
    ]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("All entries look good!"));
}

#[test]
fn test_extract_command() {
    let dir = tempdir().unwrap();
    let path = sample_docx(dir.path());

    let output = run(&["extract", "--docx", path.to_str().unwrap(), "--log-level", "ERROR"]);
    assert!(output.status.success());

    let records: Vec<serde_json::Value> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["index"], 1);
    assert_eq!(records[1]["text"], "Brown, C. (2017). Fundamentals of Example Studies. Publisher Name.");
}

#[test]
fn test_classify_command() {
    let output = run(&[
        "classify",
        "Doe, J. (2018). The Effects of X on Y [Doctoral dissertation]. University of Example.",
        "just some words",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let labels: Vec<&str> = stdout.lines().map(|l| l.split('\t').next().unwrap()).collect();
    assert_eq!(labels, vec!["Thesis/Dissertation", "unknown"]);
}

#[test]
fn test_missing_document_fails() {
    let output = run(&["check", "--docx", "/nonexistent/thesis.docx", "--log-level", "ERROR"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to open document"));
}
