use anyhow::{Context, Result};
use log::{info, warn};
use std::io::{self, BufWriter, Write};

use apa7_bib_validator::bibliography::extract_entries;
use apa7_bib_validator::common::{setup_logging, EntryRecord};
use apa7_bib_validator::document::Document;

use super::load_config;
use crate::cli::ExtractArgs;

pub fn run_extract(args: ExtractArgs) -> Result<()> {
    setup_logging(&args.log_level)?;

    let config = load_config(args.config.as_deref(), args.stop_at_heading)?;
    let document = Document::open(&args.docx)
        .with_context(|| format!("Failed to open document: {}", args.docx))?;

    let entries = extract_entries(&document, &config);
    if entries.is_empty() {
        warn!("No entries found under a '{}' heading", config.heading);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for entry in &entries {
        let record = EntryRecord {
            index: entry.index,
            text: entry.raw_text.clone(),
        };
        serde_json::to_writer(&mut out, &record)?;
        writeln!(out)?;
    }
    out.flush()?;

    info!("Extracted {} entries from {}", entries.len(), args.docx);
    Ok(())
}
