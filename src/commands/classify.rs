use anyhow::Result;
use std::io::{self, Write};

use apa7_bib_validator::citation::classify;
use apa7_bib_validator::common::setup_logging;

use crate::cli::ClassifyArgs;

pub fn run_classify(args: ClassifyArgs) -> Result<()> {
    setup_logging(&args.log_level)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for text in &args.texts {
        let label = classify(text.trim()).map_or("unknown", |a| a.name());
        writeln!(out, "{}\t{}", label, text.trim())?;
    }
    Ok(())
}
