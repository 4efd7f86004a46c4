use std::path::PathBuf;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cyberquiz", version, about = "Compliance questionnaire service with PDF recommendation reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the questionnaire HTTP server
    Serve(ServeArgs),
    /// Render the latest submission to a PDF file
    Report(ReportArgs),
    /// Check the configuration and question bank
    Validate(ValidateArgs),
}

/// Options shared by every subcommand that touches the data files.
#[derive(Args, Clone)]
pub struct StorageArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Question bank JSON file
    #[arg(long)]
    pub questions: Option<PathBuf>,

    /// Response store CSV file
    #[arg(long)]
    pub responses: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub storage: StorageArgs,

    /// Listen address
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory holding index.html and quiz.html
    #[arg(long)]
    pub pages: Option<PathBuf>,

    /// Directory served under /static
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub storage: StorageArgs,

    /// Where to write the PDF
    #[arg(short, long, default_value = "cybersecurity_report.pdf")]
    pub output: PathBuf,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub storage: StorageArgs,
}
