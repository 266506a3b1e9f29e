use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// House rules the bibliography is checked against
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Font every entry run must use
    pub reference_font: String,
    pub reference_size_pt: f64,
    /// Hanging indent in cm (left indent +x, first line -x)
    pub hanging_indent_cm: f64,
    /// Paragraph text that opens the bibliography section
    pub heading: String,
    /// Paragraph text that closes the bibliography section
    pub blank_page_marker: String,
    pub title_font: String,
    pub title_size_pt: f64,
    /// Also end the section at the next section title
    pub stop_at_heading: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_font: "Times New Roman".to_string(),
            reference_size_pt: 12.0,
            hanging_indent_cm: 0.7,
            heading: "Bibliography".to_string(),
            blank_page_marker: "[This page is deliberately left blank.]".to_string(),
            title_font: "Times New Roman".to_string(),
            title_size_pt: 14.0,
            stop_at_heading: false,
        }
    }
}

impl Config {
    /// Load a JSON config file; absent keys keep their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
