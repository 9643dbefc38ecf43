//! End-to-end tests for the invex binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn invex() -> Command {
    Command::cargo_bin("invex").unwrap()
}

#[test]
fn extracts_fields_from_a_markdown_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invoice.md");
    std::fs::write(
        &path,
        "Acme Supplies Inc.\nInvoice No: INV-42\nDate: 2024-03-15\nTotal: 99.50\n",
    )
    .unwrap();

    invex()
        .arg("extract")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("INV-42"))
        .stdout(predicate::str::contains("Acme Supplies Inc."))
        .stdout(predicate::str::contains("2024-03-15"))
        .stdout(predicate::str::contains("99.5"));
}

#[test]
fn empty_ocr_response_degrades_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("response.json");
    std::fs::write(&path, r#"{"pages": []}"#).unwrap();

    invex()
        .arg("extract")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Error extracting data"));
}

#[test]
fn strict_mode_fails_on_empty_responses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("response.json");
    std::fs::write(&path, r#"{"pages": []}"#).unwrap();

    invex()
        .arg("extract")
        .arg("--strict")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no pages"));
}

#[test]
fn text_format_prints_a_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invoice.txt");
    std::fs::write(&path, "Invoice No: 77\nCurrency: EUR\nTotal: 12.00\n").unwrap();

    invex()
        .args(["extract", "--format", "text"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invoice:     77"))
        .stdout(predicate::str::contains("EUR"));
}
