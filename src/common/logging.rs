use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use time::macros::format_description;

const CRATE_MODULE: &str = "apa7_bib_validator";

/// Parse a `--log-level` value; unknown names fall back to INFO
pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_uppercase().as_str() {
        "TRACE" => LevelFilter::Trace,
        "DEBUG" => LevelFilter::Debug,
        "INFO" => LevelFilter::Info,
        "WARN" | "WARNING" => LevelFilter::Warn,
        "ERROR" => LevelFilter::Error,
        "OFF" => LevelFilter::Off,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to INFO.", level);
            LevelFilter::Info
        }
    }
}

/// Log to stderr. Our modules log at `log_level`; dependencies stay at WARN or quieter.
pub fn setup_logging(log_level: &str) -> Result<()> {
    let level = parse_log_level(log_level);
    SimpleLogger::new()
        .with_level(level.min(LevelFilter::Warn))
        .with_module_level(CRATE_MODULE, level)
        .with_timestamp_format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
        .init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_log_level("INFO"), LevelFilter::Info);
        assert_eq!(parse_log_level("Warning"), LevelFilter::Warn);
        assert_eq!(parse_log_level("error"), LevelFilter::Error);
        assert_eq!(parse_log_level("off"), LevelFilter::Off);
        assert_eq!(parse_log_level("chatty"), LevelFilter::Info);
    }
}
