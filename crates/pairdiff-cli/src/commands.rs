use std::fmt::Write as _;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use colored::Colorize;
use serde_json::Value;

use pairdiff_sdk::{ComparisonReport, Comparer, DiffMode, FetchConfig};
use pairdiff_server::{PairdiffServer, ServerConfig};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Compare(args) => cmd_compare(args, &cli.format).await,
        Command::Files(args) => cmd_files(args, &cli.format),
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind.parse().with_context(|| format!("invalid bind address {bind}"))?;
    }
    if let Some(scheme) = args.scheme {
        config.scheme = scheme;
    }
    if let Some(public_url) = args.public_url {
        config.public_url = public_url;
    }
    PairdiffServer::new(config).serve().await?;
    Ok(())
}

async fn cmd_compare(args: CompareArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let fetch = FetchConfig {
        timeout: Duration::from_secs(args.timeout),
        ..FetchConfig::default()
    };
    let comparer = Comparer::http(&fetch)?.with_scheme(args.scheme);
    let report = comparer.compare(&args.path).await?;
    print_report(report, format)
}

fn cmd_files(args: FilesArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let original = load_document(&args.original)?;
    let target = load_document(&args.target)?;
    let sources = [args.original.display().to_string(), args.target.display().to_string()];
    let report = ComparisonReport::from_documents(args.mode, sources, &original, &target);
    print_report(report, format)
}

fn load_document(path: &Path) -> anyhow::Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn print_report(report: ComparisonReport, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report.into_payload())?);
        }
        OutputFormat::Text => print!("{}", render_text(&report)?),
    }
    Ok(())
}

fn render_text(report: &ComparisonReport) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(out, "{} {}", "original:".dimmed(), report.sources[0])?;
    writeln!(out, "{} {}", "target:  ".dimmed(), report.sources[1])?;
    writeln!(out, "{} {}", "mode:    ".dimmed(), report.mode.to_string().cyan())?;

    match report.mode {
        DiffMode::Detailed => {
            for name in ["added", "deleted", "updated"] {
                let label = match name {
                    "added" => name.green(),
                    "deleted" => name.red(),
                    _ => name.yellow(),
                };
                let tree = report.diff.get(name).unwrap_or(&Value::Null);
                write_tree(&mut out, &label, tree)?;
            }
        }
        mode => write_tree(&mut out, &mode.to_string().bold(), &report.diff)?,
    }

    if report.matching_fields.is_empty() {
        writeln!(out, "\nNo matching fields.")?;
    } else {
        writeln!(out, "\n{} matching field(s):", report.matching_fields.len().to_string().bold())?;
        for field in &report.matching_fields {
            writeln!(out, "  {} = {}", field.path.green(), field.value)?;
        }
    }
    Ok(out)
}

fn write_tree(out: &mut String, label: &impl std::fmt::Display, tree: &Value) -> anyhow::Result<()> {
    let empty = tree.as_object().is_some_and(|m| m.is_empty());
    if empty {
        writeln!(out, "\n{label}: (none)")?;
    } else {
        writeln!(out, "\n{label}:\n{}", serde_json::to_string_pretty(tree)?)?;
    }
    Ok(())
}
