//! Message catalogs keyed by canonical English templates.

use anyhow::{Context, Result};
use log::{info, warn};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::issue::Issue;

/// Replace each `{name}` in `template` with its value from `params`
pub fn fill(template: &str, params: &[(&str, String)]) -> String {
    params.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{}}}", name), value)
    })
}

/// Translation table; an empty catalog renders every template as-is
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Load `<dir>/<lang>.json`, a flat object of template -> translation
    pub fn load<P: AsRef<Path>>(dir: P, lang: &str) -> Result<Self> {
        let path = dir.as_ref().join(format!("{}.json", lang));
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read message catalog: {}", path.display()))?;
        let entries: HashMap<String, String> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse message catalog: {}", path.display()))?;
        info!("Loaded {} messages for '{}'", entries.len(), lang);
        Ok(Self { entries })
    }

    /// Like [`Catalog::load`], but falls back to the identity catalog when the
    /// language has no catalog file.
    pub fn load_or_identity<P: AsRef<Path>>(dir: P, lang: &str) -> Result<Self> {
        let path = dir.as_ref().join(format!("{}.json", lang));
        if !path.exists() {
            if lang != "en" {
                warn!("No message catalog at {}, using English", path.display());
            }
            return Ok(Self::identity());
        }
        Self::load(dir, lang)
    }

    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn render(&self, template: &str, params: &[(&str, String)]) -> String {
        fill(self.translate(template), params)
    }

    pub fn issue(&self, issue: &Issue) -> String {
        self.render(issue.template(), &issue.params())
    }
}
