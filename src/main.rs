// src/main.rs
mod config;
mod edgar;
mod statements;
mod storage;
mod utils;

use clap::Parser;
use config::AppConfig;
use edgar::client::{self, EdgarClient};
use statements::{extract_statement, ALL_STATEMENTS};
use storage::StorageManager;
use utils::AppError;

/// Command Line Interface for the SEC annual-report statement extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Ticker symbol of the company (defaults to the configured ticker)
    ticker: Option<String>,

    /// Output directory for the statement tables
    #[arg(short, long, default_value = ".")]
    output_dir: String,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments and load configuration
    let args = Args::parse();
    let app_config = AppConfig::from_env();
    let ticker = args
        .ticker
        .unwrap_or_else(|| app_config.default_ticker.clone());
    tracing::info!("Starting processing for ticker: {}", ticker);

    // 3. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 4. Resolve the ticker and locate the latest annual filing
    let edgar = EdgarClient::new(&app_config)?;
    let cik = edgar.cik_for_ticker(&ticker).await?;
    tracing::info!("Resolved {} to CIK {}", ticker, cik);

    let submission = edgar.company_submissions(&cik).await?;
    let filing = client::latest_annual_filing(&submission)?;

    // 5. Fetch the facts repository and project the three statements.
    // Projection cannot fail; a failure past this point is storage only,
    // so an acquisition error never leaves partial output behind.
    let company_facts = edgar.company_facts(&cik).await?;

    let mut reports = Vec::new();
    for definition in &ALL_STATEMENTS {
        let row = extract_statement(&company_facts.facts, definition, &filing.accession_number);
        tracing::info!(
            "{}: {} of {} line items present",
            definition.name,
            row.len(),
            definition.line_items.len()
        );
        reports.push((definition, row));
    }

    // 6. Serialize the tables and the filing metadata
    for (definition, row) in &reports {
        storage.save_statement(&ticker, definition.name, row)?;
    }
    storage.save_filing_metadata(&ticker, &submission.name, &cik, &filing)?;

    tracing::info!("Financial statements saved as CSV files for {}", ticker);

    Ok(())
}
