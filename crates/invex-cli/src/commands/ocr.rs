//! Ocr command - send a document to the OCR service and save the response.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use base64::Engine;
use clap::Args;
use console::style;
use tracing::debug;

use invex_core::OcrResponse;

use super::extract::{self, DateOrderArg};

const DEFAULT_ENDPOINT: &str = "https://api.mistral.ai/v1/ocr";
const DEFAULT_MODEL: &str = "mistral-ocr-latest";

/// Arguments for the ocr command.
#[derive(Args)]
pub struct OcrArgs {
    /// Input document (PDF or image)
    #[arg(required = true)]
    input: PathBuf,

    /// Where to write the OCR response JSON (default: <input>.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// OCR service endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// OCR model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// API key (falls back to the INVEX_OCR_API_KEY environment variable)
    #[arg(long)]
    api_key: Option<String>,

    /// Run extraction on the response and print the result
    #[arg(long)]
    extract: bool,

    /// Day/month order for ambiguous dates (with --extract)
    #[arg(long, value_enum)]
    date_order: Option<DateOrderArg>,
}

pub async fn run(args: OcrArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let api_key = args
        .api_key
        .clone()
        .or_else(|| std::env::var("INVEX_OCR_API_KEY").ok())
        .context("no API key: pass --api-key or set INVEX_OCR_API_KEY")?;

    let data = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let mime = guess_mime(&args.input)?;

    let encoded = base64::engine::general_purpose::STANDARD.encode(&data);
    let data_url = format!("data:{mime};base64,{encoded}");

    // PDFs go as documents, everything else as images.
    let document = if mime == "application/pdf" {
        serde_json::json!({
            "type": "document_url",
            "document_url": data_url,
            "document_name": args.input.file_name().and_then(|n| n.to_str()),
        })
    } else {
        serde_json::json!({
            "type": "image_url",
            "image_url": data_url,
        })
    };

    let request = serde_json::json!({
        "model": args.model,
        "document": document,
    });

    debug!("sending {} bytes to {}", data.len(), args.endpoint);

    let client = reqwest::Client::new();
    let response = client
        .post(&args.endpoint)
        .bearer_auth(&api_key)
        .json(&request)
        .send()
        .await
        .context("OCR request failed")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("OCR service returned {status}: {body}");
    }

    let body = response.text().await?;
    let ocr = OcrResponse::from_json(&body).context("failed to parse OCR response")?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("json"));
    fs::write(&output, &body)?;

    println!(
        "{} OCR response ({} pages) written to {}",
        style("✓").green(),
        ocr.pages.len(),
        output.display()
    );

    if args.extract {
        let extractor = extract::build_extractor(args.date_order, config_path)?;
        let result = extractor.extract_lenient(&ocr);
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}

fn guess_mime(path: &Path) -> anyhow::Result<&'static str> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "pdf" => Ok("application/pdf"),
        "png" => Ok("image/png"),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "webp" => Ok("image/webp"),
        "tif" | "tiff" => Ok("image/tiff"),
        _ => anyhow::bail!("unsupported file type: {ext}"),
    }
}
