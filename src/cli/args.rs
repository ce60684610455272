use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "polytl")]
#[command(about = "Translate sentences into several languages at once with an LLM")]
#[command(version)]
pub struct Args {
    /// File with one sentence per line (reads from stdin if not provided)
    pub file: Option<String>,

    /// Source language code (ISO 639-1, e.g., fr)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language codes, comma-separated (ISO 639-1, e.g., en,es,it)
    #[arg(short = 't', long = "to", value_delimiter = ',')]
    pub to: Vec<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// OpenAI-compatible API base URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Write the JSON result to this file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure polytl defaults
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported language codes
    Languages,
    /// List known models and their prices
    Models,
}
