use std::path::PathBuf;

use clap::Parser;

// Define command-line arguments
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Clean and enrich a batch of scraped news articles", long_about = None)]
pub struct Args {
    /// The path to the dirty data (CSV or Parquet)
    pub filename: PathBuf,

    /// Path to the cleaning configuration YAML file. Built-in defaults are used when omitted.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Source identifier stamped on every row. Derived from the input file name when omitted.
    #[arg(short = 'n', long)]
    pub newspaper_uid: Option<String>,

    /// Where to write the cleaned table. Defaults to `<output_prefix><input file name>` next to the input.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Validate the cleaning configuration and exit
    #[arg(long)]
    pub validate_config: bool,
}
