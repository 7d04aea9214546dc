// src/edgar/client.rs
use crate::config::AppConfig;
use crate::edgar::models::{AnnualFiling, CompanyFacts, CompanySubmission};
use crate::utils::error::EdgarError;
use reqwest::header;
use serde::de::DeserializeOwned;
use std::time::Duration;

const TICKER_INDEX_URL: &str = "https://www.sec.gov/files/company_tickers.json";
const SUBMISSIONS_BASE_URL: &str = "https://data.sec.gov/submissions";
const COMPANY_FACTS_BASE_URL: &str = "https://data.sec.gov/api/xbrl/companyfacts";
// SEC asks for 10 requests/second max. Be conservative. >100ms delay.
const EDGAR_REQUEST_DELAY_MS: u64 = 150;

/// HTTP client for the EDGAR JSON APIs. Holds a reqwest client configured
/// with the User-Agent the SEC requires for fair access.
pub struct EdgarClient {
    client: reqwest::Client,
}

impl EdgarClient {
    pub fn new(config: &AppConfig) -> Result<Self, EdgarError> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches a URL and deserializes the JSON body.
    /// Includes the mandatory User-Agent and basic rate limiting.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, EdgarError> {
        // --- Basic Rate Limiting ---
        // In a real app, use a more sophisticated approach like `governor`
        // especially if making concurrent requests.
        tokio::time::sleep(Duration::from_millis(EDGAR_REQUEST_DELAY_MS)).await;
        // --------------------------

        tracing::debug!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?; // Propagates reqwest::Error as EdgarError::Network

        let status = response.status();
        if !status.is_success() {
            tracing::error!("HTTP error status: {} for URL: {}", status, url);
            if status == reqwest::StatusCode::FORBIDDEN {
                tracing::warn!("Received 403 Forbidden - check User-Agent and rate limits.");
                return Err(EdgarError::RateLimited);
            }
            return Err(EdgarError::Http(status));
        }

        let body = response.json::<T>().await?;
        Ok(body)
    }

    /// Gets the CIK (Central Index Key) for a ticker symbol, zero-padded to
    /// the 10 digits the other EDGAR endpoints expect.
    pub async fn cik_for_ticker(&self, ticker: &str) -> Result<String, EdgarError> {
        let wanted = ticker.to_uppercase();
        let index: serde_json::Value = self.get_json(TICKER_INDEX_URL).await?;

        // The index is a map of row number -> {cik_str, ticker, title}
        let rows = index
            .as_object()
            .ok_or_else(|| EdgarError::Parse("Invalid ticker index structure".to_string()))?;

        for company in rows.values() {
            let matches = company
                .get("ticker")
                .and_then(|t| t.as_str())
                .is_some_and(|t| t.to_uppercase() == wanted);
            if matches {
                let cik = company
                    .get("cik_str")
                    .and_then(|c| c.as_u64())
                    .ok_or_else(|| EdgarError::Parse("Invalid CIK format".to_string()))?;
                return Ok(format!("{:010}", cik));
            }
        }

        Err(EdgarError::TickerNotFound(ticker.to_string()))
    }

    /// Fetches the company submission index for a given CIK.
    pub async fn company_submissions(&self, cik: &str) -> Result<CompanySubmission, EdgarError> {
        let url = format!("{}/CIK{}.json", SUBMISSIONS_BASE_URL, cik);
        self.get_json(&url).await
    }

    /// Fetches the complete XBRL facts repository for a given CIK.
    pub async fn company_facts(&self, cik: &str) -> Result<CompanyFacts, EdgarError> {
        let url = format!("{}/CIK{}.json", COMPANY_FACTS_BASE_URL, cik);
        self.get_json(&url).await
    }
}

/// Picks the most recent 10-K from a company's submission index.
///
/// EDGAR lists recent filings newest first, so the first entry whose form is
/// exactly "10-K" is the latest annual report. Amendments (10-K/A) are not
/// annual reports and are skipped.
pub fn latest_annual_filing(submission: &CompanySubmission) -> Result<AnnualFiling, EdgarError> {
    let recent = &submission.filings.recent;

    for (i, form) in recent.form.iter().enumerate() {
        if form != "10-K" {
            continue;
        }
        let accession_number = recent
            .accessionNumber
            .get(i)
            .ok_or_else(|| EdgarError::Parse("Missing accession number".to_string()))?
            .clone();
        let filing_date = recent
            .filingDate
            .get(i)
            .ok_or_else(|| EdgarError::Parse("Missing filing date".to_string()))?
            .clone();

        tracing::info!("Latest 10-K filing date: {}", filing_date);
        tracing::info!("Accession number: {}", accession_number);

        return Ok(AnnualFiling {
            accession_number,
            filing_date,
        });
    }

    Err(EdgarError::NoAnnualFiling(submission.name.clone()))
}
