//! Extract command - pull structured fields from a single OCR output file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, ValueEnum};
use console::style;

use invex_core::{
    DateOrder, ExtractionResult, ExtractorConfig, InvoiceExtractor, MarkdownExtractor,
    OcrResponse,
};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file: OCR response JSON or raw markdown/text
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Day/month order for ambiguous dates
    #[arg(long, value_enum)]
    date_order: Option<DateOrderArg>,

    /// Fail on empty OCR responses instead of producing a placeholder result
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DateOrderArg {
    /// Day before month
    DayFirst,
    /// Month before day
    MonthFirst,
}

impl From<DateOrderArg> for DateOrder {
    fn from(arg: DateOrderArg) -> Self {
        match arg {
            DateOrderArg::DayFirst => DateOrder::DayFirst,
            DateOrderArg::MonthFirst => DateOrder::MonthFirst,
        }
    }
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let extractor = build_extractor(args.date_order, config_path)?;
    let result = extract_file(&args.input, &extractor, args.strict)?;

    let content = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Csv => format_csv(std::slice::from_ref(&result))?,
        OutputFormat::Text => format_text(&result),
    };

    match args.output {
        Some(path) => {
            fs::write(&path, content)?;
            println!("{} Wrote {}", style("✓").green(), path.display());
        }
        None => println!("{content}"),
    }

    Ok(())
}

/// Build an extractor from the config file plus command-line overrides.
pub fn build_extractor(
    date_order: Option<DateOrderArg>,
    config_path: Option<&str>,
) -> anyhow::Result<MarkdownExtractor> {
    let config = match config_path {
        Some(path) => ExtractorConfig::from_file(Path::new(path))
            .with_context(|| format!("failed to load config from {path}"))?,
        None => ExtractorConfig::default(),
    };

    let mut extractor = MarkdownExtractor::from_config(&config);
    if let Some(order) = date_order {
        extractor = extractor.with_date_order(order.into());
    }
    Ok(extractor)
}

/// Extract from a single file. JSON files are treated as OCR responses,
/// anything else as raw OCR markdown.
pub fn extract_file(
    path: &Path,
    extractor: &MarkdownExtractor,
    strict: bool,
) -> anyhow::Result<ExtractionResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        let response = OcrResponse::from_json(&content)
            .with_context(|| format!("failed to parse OCR response {}", path.display()))?;
        if strict {
            Ok(extractor.extract(&response)?)
        } else {
            Ok(extractor.extract_lenient(&response))
        }
    } else {
        Ok(extractor.extract_from_text(&content))
    }
}

pub fn format_text(result: &ExtractionResult) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Vendor:      {}\n",
        result.vendor.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Invoice:     {}\n",
        result.invoice_number.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!("Date:        {}\n", result.date));
    output.push_str(&format!(
        "Amount:      {} {}\n",
        result.amount,
        result.currency.as_deref().unwrap_or("")
    ));
    output.push_str(&format!(
        "Category:    {}\n",
        result.category.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Department:  {}\n",
        result.department.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!("Description: {}\n", result.description));

    if !result.line_items.is_empty() {
        output.push_str("\nLine items:\n");
        for item in &result.line_items {
            output.push_str(&format!(
                "  - {} x{} @ {} = {}\n",
                item.description.as_deref().unwrap_or("?"),
                item.quantity
                    .map(|q| q.to_string())
                    .unwrap_or_else(|| "?".to_string()),
                item.unit_price
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "?".to_string()),
                item.total
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "?".to_string()),
            ));
        }
    }

    output
}

pub fn format_csv(results: &[ExtractionResult]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "vendor",
        "invoice_number",
        "date",
        "amount",
        "currency",
        "category",
        "department",
        "line_items",
        "description",
    ])?;

    for result in results {
        wtr.write_record([
            result.vendor.clone().unwrap_or_default(),
            result.invoice_number.clone().unwrap_or_default(),
            result.date.to_string(),
            result.amount.to_string(),
            result.currency.clone().unwrap_or_default(),
            result.category.clone().unwrap_or_default(),
            result.department.clone().unwrap_or_default(),
            result.line_items.len().to_string(),
            result.description.clone(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
