pub mod config;
pub mod logging;
pub mod types;
pub mod utils;

pub use config::Config;
pub use logging::*;
pub use types::*;
pub use utils::*;
