pub mod check;
pub mod classify;
pub mod extract;

pub use check::run_check;
pub use classify::run_classify;
pub use extract::run_extract;

use anyhow::Result;
use log::info;

use apa7_bib_validator::common::Config;

/// House rules from `--config` (or the defaults), with CLI flags applied on top
pub(crate) fn load_config(path: Option<&str>, stop_at_heading: bool) -> Result<Config> {
    let mut config = match path {
        Some(path) => {
            info!("Loading config from {}", path);
            Config::load(path)?
        }
        None => Config::default(),
    };
    if stop_at_heading {
        config.stop_at_heading = true;
    }
    Ok(config)
}
