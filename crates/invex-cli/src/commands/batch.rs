//! Batch command - extract from many OCR output files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, warn};

use invex_core::ExtractionResult;

use super::extract::{self, DateOrderArg, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Day/month order for ambiguous dates
    #[arg(long, value_enum)]
    date_order: Option<DateOrderArg>,

    /// Fail on empty OCR responses instead of producing placeholder results
    #[arg(long)]
    strict: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct FileOutcome {
    path: PathBuf,
    result: Option<ExtractionResult>,
    error: Option<String>,
}

#[derive(Serialize)]
struct SummaryRow<'a> {
    filename: &'a str,
    status: &'a str,
    vendor: &'a str,
    invoice_number: &'a str,
    date: String,
    amount: String,
    currency: &'a str,
    category: &'a str,
    department: &'a str,
    line_items: usize,
    error: &'a str,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let extractor = extract::build_extractor(args.date_order, config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "json" | "md" | "markdown" | "txt")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut outcomes = Vec::with_capacity(files.len());

    for path in files {
        match extract::extract_file(&path, &extractor, args.strict) {
            Ok(result) => outcomes.push(FileOutcome {
                path,
                result: Some(result),
                error: None,
            }),
            Err(e) => {
                let msg = e.to_string();
                if args.continue_on_error {
                    warn!("failed to process {}: {}", path.display(), msg);
                    outcomes.push(FileOutcome {
                        path,
                        result: None,
                        error: Some(msg),
                    });
                } else {
                    anyhow::bail!("processing {} failed: {}", path.display(), msg);
                }
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    // Per-file outputs
    for outcome in &outcomes {
        let (Some(result), Some(output_dir)) = (&outcome.result, &args.output_dir) else {
            continue;
        };

        let stem = outcome
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("invoice");

        let extension = match args.format {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        };

        let output_path = output_dir.join(format!("{stem}.{extension}"));
        let content = match args.format {
            OutputFormat::Json => serde_json::to_string_pretty(result)?,
            OutputFormat::Csv => extract::format_csv(std::slice::from_ref(result))?,
            OutputFormat::Text => extract::format_text(result),
        };

        fs::write(&output_path, content)?;
        debug!("wrote {}", output_path.display());
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &outcomes)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let succeeded = outcomes.iter().filter(|o| o.result.is_some()).count();
    let failed = outcomes.len() - succeeded;

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        outcomes.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(succeeded).green(),
        style(failed).red()
    );

    if failed > 0 {
        println!();
        println!("{}", style("Failed files:").red());
        for outcome in outcomes.iter().filter(|o| o.error.is_some()) {
            println!(
                "  - {}: {}",
                outcome.path.display(),
                outcome.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn write_summary(path: &PathBuf, outcomes: &[FileOutcome]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for outcome in outcomes {
        let filename = outcome
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        let row = match &outcome.result {
            Some(result) => SummaryRow {
                filename,
                status: "success",
                vendor: result.vendor.as_deref().unwrap_or(""),
                invoice_number: result.invoice_number.as_deref().unwrap_or(""),
                date: result.date.to_string(),
                amount: result.amount.to_string(),
                currency: result.currency.as_deref().unwrap_or(""),
                category: result.category.as_deref().unwrap_or(""),
                department: result.department.as_deref().unwrap_or(""),
                line_items: result.line_items.len(),
                error: "",
            },
            None => SummaryRow {
                filename,
                status: "error",
                vendor: "",
                invoice_number: "",
                date: String::new(),
                amount: String::new(),
                currency: "",
                category: "",
                department: "",
                line_items: 0,
                error: outcome.error.as_deref().unwrap_or(""),
            },
        };

        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
