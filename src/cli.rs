use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "apa7-bib-validator")]
#[command(about = "Check the bibliography of a Word document against APA-7 reference formats")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate every bibliography entry and report what needs fixing
    Check(CheckArgs),

    /// Print the bibliography entries found in the document as JSON lines
    Extract(ExtractArgs),

    /// Print the detected reference type of each given entry text
    Classify(ClassifyArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Clone)]
pub struct CheckArgs {
    /// Path to the .docx file (or a JSON document dump)
    #[arg(short, long, required = true)]
    pub docx: String,

    /// Language of the report messages
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Directory holding <lang>.json message catalogs
    #[arg(long, default_value = "locales")]
    pub locale_dir: String,

    /// JSON file overriding the default house rules
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// End the bibliography at the next section title
    #[arg(long, default_value = "false")]
    pub stop_at_heading: bool,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[derive(Parser, Clone)]
pub struct ExtractArgs {
    /// Path to the .docx file (or a JSON document dump)
    #[arg(short, long, required = true)]
    pub docx: String,

    /// JSON file overriding the default house rules
    #[arg(short, long)]
    pub config: Option<String>,

    /// End the bibliography at the next section title
    #[arg(long, default_value = "false")]
    pub stop_at_heading: bool,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[derive(Parser, Clone)]
pub struct ClassifyArgs {
    /// Raw entry texts
    #[arg(required = true)]
    pub texts: Vec<String>,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}
