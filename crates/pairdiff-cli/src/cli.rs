use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pairdiff_types::DiffMode;

#[derive(Parser)]
#[command(
    name = "pairdiff",
    about = "Compare two JSON resources named by one {a,b} URL",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Fetch and compare the two resources in a {a,b} path
    Compare(CompareArgs),
    /// Compare two local JSON files
    Files(FilesArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub bind: Option<String>,
    /// Scheme used for resolved document URLs
    #[arg(long)]
    pub scheme: Option<String>,
    #[arg(long)]
    pub public_url: Option<String>,
}

#[derive(Args)]
pub struct CompareArgs {
    /// `[mode/]host/path/{a,b}`
    pub path: String,
    #[arg(long, default_value = "https")]
    pub scheme: String,
    #[arg(long, default_value = "30")]
    pub timeout: u64,
}

#[derive(Args)]
pub struct FilesArgs {
    pub original: PathBuf,
    pub target: PathBuf,
    #[arg(short, long, default_value = "detailed")]
    pub mode: DiffMode,
}
