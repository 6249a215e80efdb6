//! # Salesboard Report CLI
//!
//! Thin runner around `salesboard-core`.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         report-cli                                      │
//! │                                                                         │
//! │  dataset.json ───► SalesData ───► analyze_sales_data ───► stdout (JSON)│
//! │                                                                         │
//! │  logs ───► stderr (RUST_LOG, default "info")                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! report-cli ./data/sales.json
//! SALESBOARD_DATA_PATH=./data/sales.json SALESBOARD_SUMMARY=true report-cli
//! ```

mod config;

use std::fs;

use anyhow::Context;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use salesboard_core::{analyze_sales_data, summarize_report, SalesData, Strategies};

use crate::config::ReportConfig;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = ReportConfig::load()?;
    info!(
        data_path = %config.data_path.display(),
        pretty = config.pretty,
        include_summary = config.include_summary,
        "Configuration loaded"
    );

    let text = fs::read_to_string(&config.data_path)
        .with_context(|| format!("Failed to read {}", config.data_path.display()))?;
    let data = SalesData::from_json_str(&text)
        .with_context(|| format!("Failed to load {}", config.data_path.display()))?;
    info!(
        sellers = data.sellers.len(),
        products = data.products.len(),
        purchase_records = data.purchase_records.len(),
        "Dataset loaded"
    );

    let report = analyze_sales_data(&data, &Strategies::default())?;

    let output = if config.include_summary {
        json!({
            "report": report,
            "summary": summarize_report(&report),
        })
    } else {
        serde_json::to_value(&report)?
    };

    let rendered = if config.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(())
}
