//! Rendering a [`DocumentReport`] for people (coloured text) or for tools (JSON lines).

use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use crate::citation::GENERIC_HINT;
use crate::common::{DiagnosticRecord, ReportLine};
use crate::diagnose::{Diagnostic, DocumentReport, Hint, Summary};
use crate::i18n::Catalog;

pub const ENTRY_HEADER: &str = "Entry {idx} ({typ}): ";
pub const UNKNOWN_TYPE: &str = "Unknown";
pub const ORDER_WARNING: &str = "⚠️ Entries are not in alphabetical order by surname.";
pub const ERROR_TOTAL: &str = "Total entries with errors: {errors}";
pub const ALL_CLEAR: &str = "✅ All entries look good!";
pub const HINT_PREFIX: &str = "Hint: ";

pub trait Reporter {
    /// Called once, before any entry
    fn ordering(&mut self, in_alphabetical_order: bool) -> Result<()>;
    fn entry(&mut self, diagnostic: &Diagnostic) -> Result<()>;
    fn summary(&mut self, summary: &Summary) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

/// Feed a whole report through `reporter` in display order
pub fn emit<R: Reporter + ?Sized>(report: &DocumentReport, reporter: &mut R) -> Result<()> {
    reporter.ordering(report.in_alphabetical_order)?;
    for diagnostic in &report.diagnostics {
        reporter.entry(diagnostic)?;
    }
    reporter.summary(&report.summary)?;
    reporter.finish()
}

/// Human-readable report. Only entries with errors are shown.
pub struct ConsoleReporter<'c, W: Write> {
    out: W,
    catalog: &'c Catalog,
}

impl<'c, W: Write> ConsoleReporter<'c, W> {
    pub fn new(out: W, catalog: &'c Catalog) -> Self {
        Self { out, catalog }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn hint(&mut self, hint: Hint) -> Result<()> {
        match hint {
            Hint::Example(archetype) => {
                let mut line = String::new();
                for span in archetype.example() {
                    let piece = if span.italic {
                        span.text.magenta().italic()
                    } else {
                        span.text.magenta()
                    };
                    line.push_str(&piece.to_string());
                }
                writeln!(self.out, "{}", line)?;
                writeln!(self.out, "{}", self.catalog.translate(archetype.advice()).magenta())?;
            }
            Hint::Generic => {
                let text = format!(
                    "{}{}",
                    self.catalog.translate(HINT_PREFIX),
                    self.catalog.translate(GENERIC_HINT)
                );
                writeln!(self.out, "{}", text.magenta().italic())?;
            }
        }
        Ok(())
    }
}

impl<W: Write> Reporter for ConsoleReporter<'_, W> {
    fn ordering(&mut self, in_alphabetical_order: bool) -> Result<()> {
        if !in_alphabetical_order {
            writeln!(self.out, "{}\n", self.catalog.translate(ORDER_WARNING).yellow())?;
        }
        Ok(())
    }

    fn entry(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        if diagnostic.passed() {
            return Ok(());
        }

        let typ = diagnostic.archetype.map_or(UNKNOWN_TYPE, |a| a.name());
        let header = self.catalog.render(
            ENTRY_HEADER,
            &[
                ("idx", diagnostic.index.to_string()),
                ("typ", self.catalog.translate(typ).to_string()),
            ],
        );
        writeln!(self.out, "{}{}", header.cyan().bold(), diagnostic.text)?;

        for issue in &diagnostic.errors {
            writeln!(self.out, "{}", format!("  • {}", self.catalog.issue(issue)).red())?;
        }

        self.hint(diagnostic.hint)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn summary(&mut self, summary: &Summary) -> Result<()> {
        if summary.all_clear() {
            writeln!(self.out, "{}", self.catalog.translate(ALL_CLEAR).green().bold())?;
        } else {
            let line = self
                .catalog
                .render(ERROR_TOTAL, &[("errors", summary.entries_with_errors.to_string())]);
            writeln!(self.out, "{}", line.red().bold())?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// One JSON object per line: every entry, then the ordering signal, then the summary
pub struct JsonReporter<'c, W: Write> {
    out: W,
    catalog: &'c Catalog,
    ordering: Option<bool>,
}

impl<'c, W: Write> JsonReporter<'c, W> {
    pub fn new(out: W, catalog: &'c Catalog) -> Self {
        Self {
            out,
            catalog,
            ordering: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &ReportLine) -> Result<()> {
        serde_json::to_writer(&mut self.out, line)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Reporter for JsonReporter<'_, W> {
    fn ordering(&mut self, in_alphabetical_order: bool) -> Result<()> {
        self.ordering = Some(in_alphabetical_order);
        Ok(())
    }

    fn entry(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        let record = DiagnosticRecord::new(diagnostic, self.catalog);
        self.write_line(&ReportLine::Entry(record))
    }

    fn summary(&mut self, summary: &Summary) -> Result<()> {
        if let Some(alphabetical) = self.ordering.take() {
            self.write_line(&ReportLine::Ordering { alphabetical })?;
        }
        self.write_line(&ReportLine::from(summary))
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
