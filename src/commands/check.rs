use anyhow::{Context, Result};
use log::info;
use std::io::{self, BufWriter};
use std::time::Instant;

use apa7_bib_validator::common::{format_elapsed, setup_logging};
use apa7_bib_validator::diagnose::diagnose_document;
use apa7_bib_validator::document::Document;
use apa7_bib_validator::i18n::Catalog;
use apa7_bib_validator::report::{emit, ConsoleReporter, JsonReporter, Reporter};

use super::load_config;
use crate::cli::{CheckArgs, OutputFormat};

pub fn run_check(args: CheckArgs) -> Result<()> {
    setup_logging(&args.log_level)?;
    let start = Instant::now();

    let config = load_config(args.config.as_deref(), args.stop_at_heading)?;
    let catalog = Catalog::load_or_identity(&args.locale_dir, &args.lang)?;

    info!("Checking bibliography of {}", args.docx);
    let document = Document::open(&args.docx)
        .with_context(|| format!("Failed to open document: {}", args.docx))?;
    info!(
        "Loaded {} paragraphs and {} styles",
        document.paragraphs.len(),
        document.styles.len()
    );

    let report = diagnose_document(&document, &config);

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    let mut reporter: Box<dyn Reporter + '_> = match args.format {
        OutputFormat::Text => Box::new(ConsoleReporter::new(out, &catalog)),
        OutputFormat::Json => Box::new(JsonReporter::new(out, &catalog)),
    };
    emit(&report, reporter.as_mut())?;

    info!(
        "Checked {} entries, {} with errors, in {}",
        report.summary.entries,
        report.summary.entries_with_errors,
        format_elapsed(start.elapsed())
    );

    Ok(())
}
