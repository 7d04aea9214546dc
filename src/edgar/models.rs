// src/edgar/models.rs
#![allow(dead_code, non_snake_case)]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Subset of the EDGAR company submission index this tool consumes.
/// Example: https://data.sec.gov/submissions/CIK0000320193.json
#[derive(Debug, Deserialize)]
pub struct CompanySubmission {
    pub cik: String,
    pub name: String,
    pub filings: Filings,
}

#[derive(Debug, Deserialize)]
pub struct Filings {
    pub recent: RecentFilings,
}

/// EDGAR serves the recent-filings index as parallel columnar arrays:
/// entry i of each vector describes the same filing, newest first.
#[derive(Debug, Deserialize)]
pub struct RecentFilings {
    pub accessionNumber: Vec<String>,
    pub filingDate: Vec<String>,
    pub form: Vec<String>,
}

/// The one filing selected for extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualFiling {
    pub accession_number: String,
    pub filing_date: String,
}

/// Envelope of the XBRL companyfacts API.
/// Example: https://data.sec.gov/api/xbrl/companyfacts/CIK0000320193.json
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFacts {
    pub cik: u64,
    pub entity_name: String,
    pub facts: FactsData,
}

/// taxonomy -> concept -> per-unit observations. The repository accumulates
/// every historical reporting of a concept across all of the company's
/// filings, including later restatements of the same period.
pub type FactsData = HashMap<String, HashMap<String, ConceptFacts>>;

#[derive(Debug, Default, Deserialize)]
pub struct ConceptFacts {
    #[serde(default)]
    pub units: HashMap<String, Vec<FactEntry>>,
}

/// One reported value of a concept, tagged with the accession number of the
/// filing that reported it and the unit it is denominated in.
#[derive(Debug, Clone, Deserialize)]
pub struct FactEntry {
    pub accn: String,
    pub val: f64,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub fy: Option<i32>,
    #[serde(default)]
    pub fp: Option<String>,
    #[serde(default)]
    pub form: Option<String>,
    #[serde(default)]
    pub filed: Option<String>,
}
