// src/statements/extract.rs
use crate::edgar::models::{ConceptFacts, FactsData};
use crate::statements::definitions::StatementDefinition;

/// Currency unit consumed by the reports. Facts in other units are ignored.
const REPORT_UNIT: &str = "USD";

/// One projected report: display label -> value, in definition order,
/// holding only the labels a value was found for. Labels with no matching
/// observation are omitted rather than written as null/zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatementRow {
    pub values: Vec<(&'static str, f64)>,
}

impl StatementRow {
    pub fn get(&self, label: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Extracts the value reported under the target accession number from one
/// concept's facts.
///
/// Only the USD unit is consulted. The first observation whose accession
/// matches wins; observations from other filings are never returned, even
/// when they cover the same period or are more recent.
pub fn value_for_accession(concept: &ConceptFacts, accession: &str) -> Option<f64> {
    concept
        .units
        .get(REPORT_UNIT)?
        .iter()
        .find(|entry| entry.accn == accession)
        .map(|entry| entry.val)
}

/// Projects one statement definition against the facts repository for a
/// single filing.
///
/// Absence of data is expressed by omission: a line item whose taxonomy,
/// concept, or accession-matched observation is missing is logged and
/// skipped, never an error.
pub fn extract_statement(
    facts: &FactsData,
    definition: &StatementDefinition,
    accession: &str,
) -> StatementRow {
    let mut row = StatementRow::default();

    for &(label, item_key) in definition.line_items {
        let Some((taxonomy, concept_name)) = item_key.split_once(':') else {
            tracing::warn!("Malformed item key {} for {}", item_key, label);
            continue;
        };

        let Some(concept) = facts.get(taxonomy).and_then(|t| t.get(concept_name)) else {
            tracing::info!("Item {} not found in the data", label);
            continue;
        };

        match value_for_accession(concept, accession) {
            Some(value) => row.values.push((label, value)),
            None => tracing::info!(
                "No value found for {} with accession number {}",
                label,
                accession
            ),
        }
    }

    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edgar::models::FactEntry;
    use std::collections::HashMap;

    fn entry(accn: &str, val: f64) -> FactEntry {
        FactEntry {
            accn: accn.to_string(),
            val,
            end: None,
            start: None,
            fy: None,
            fp: None,
            form: None,
            filed: None,
        }
    }

    fn concept(unit: &str, entries: Vec<FactEntry>) -> ConceptFacts {
        let mut units = HashMap::new();
        units.insert(unit.to_string(), entries);
        ConceptFacts { units }
    }

    fn repository(concepts: &[(&str, ConceptFacts)]) -> FactsData {
        let mut taxonomy = HashMap::new();
        for (name, facts) in concepts {
            taxonomy.insert(name.to_string(), ConceptFacts {
                units: facts.units.clone(),
            });
        }
        let mut repo = HashMap::new();
        repo.insert("us-gaap".to_string(), taxonomy);
        repo
    }

    #[test]
    fn lookup_matches_on_accession_number() {
        let concept = concept("USD", vec![entry("A", 10.0), entry("B", 20.0)]);

        assert_eq!(value_for_accession(&concept, "A"), Some(10.0));
        assert_eq!(value_for_accession(&concept, "B"), Some(20.0));
        assert_eq!(value_for_accession(&concept, "C"), None);
    }

    #[test]
    fn lookup_without_usd_unit_finds_nothing() {
        let concept = concept("EUR", vec![entry("A", 10.0)]);
        assert_eq!(value_for_accession(&concept, "A"), None);

        let no_units = ConceptFacts::default();
        assert_eq!(value_for_accession(&no_units, "A"), None);
    }

    #[test]
    fn lookup_treats_empty_unit_list_as_absent() {
        let concept = concept("USD", vec![]);
        assert_eq!(value_for_accession(&concept, "A"), None);
    }

    #[test]
    fn lookup_value_does_not_depend_on_observation_order() {
        // With exactly one match, the surrounding entries' order is irrelevant
        let forward = concept("USD", vec![entry("A", 10.0), entry("B", 20.0)]);
        let reversed = concept("USD", vec![entry("B", 20.0), entry("A", 10.0)]);

        assert_eq!(value_for_accession(&forward, "A"), Some(10.0));
        assert_eq!(value_for_accession(&reversed, "A"), Some(10.0));
    }

    #[test]
    fn lookup_takes_first_entry_on_duplicate_accessions() {
        let concept = concept("USD", vec![entry("A", 10.0), entry("A", 99.0)]);
        assert_eq!(value_for_accession(&concept, "A"), Some(10.0));
    }

    const TWO_ITEM_DEFINITION: StatementDefinition = StatementDefinition {
        name: "income_statement",
        line_items: &[
            ("Revenue", "us-gaap:Revenues"),
            ("Net Income", "us-gaap:NetIncomeLoss"),
        ],
    };

    #[test]
    fn missing_concepts_are_omitted_not_null() {
        let facts = repository(&[("Revenues", concept("USD", vec![entry("X1", 1000.0)]))]);

        let row = extract_statement(&facts, &TWO_ITEM_DEFINITION, "X1");

        assert_eq!(row.get("Revenue"), Some(1000.0));
        assert_eq!(row.get("Net Income"), None);
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn projects_all_present_line_items() {
        let facts = repository(&[
            ("Revenues", concept("USD", vec![entry("X1", 1000.0)])),
            ("NetIncomeLoss", concept("USD", vec![entry("X1", 200.0)])),
        ]);

        let row = extract_statement(&facts, &TWO_ITEM_DEFINITION, "X1");

        assert_eq!(row.get("Revenue"), Some(1000.0));
        assert_eq!(row.get("Net Income"), Some(200.0));
    }

    #[test]
    fn other_filings_never_leak_into_the_row() {
        let facts = repository(&[
            ("Revenues", concept("USD", vec![entry("X1", 1000.0)])),
            ("NetIncomeLoss", concept("USD", vec![entry("X1", 200.0)])),
        ]);

        // Both concepts exist, but neither was reported under X2
        let row = extract_statement(&facts, &TWO_ITEM_DEFINITION, "X2");
        assert!(row.is_empty());
    }

    #[test]
    fn unknown_taxonomy_yields_empty_row() {
        let mut repo: FactsData = HashMap::new();
        repo.insert("ifrs-full".to_string(), HashMap::new());

        let row = extract_statement(&repo, &TWO_ITEM_DEFINITION, "X1");
        assert!(row.is_empty());
    }

    #[test]
    fn row_preserves_definition_order() {
        let facts = repository(&[
            ("NetIncomeLoss", concept("USD", vec![entry("X1", 200.0)])),
            ("Revenues", concept("USD", vec![entry("X1", 1000.0)])),
        ]);

        let row = extract_statement(&facts, &TWO_ITEM_DEFINITION, "X1");
        assert_eq!(row.values, vec![("Revenue", 1000.0), ("Net Income", 200.0)]);
    }

    #[test]
    fn projects_facts_parsed_from_companyfacts_json() {
        let json = r#"{
            "us-gaap": {
                "Revenues": {
                    "units": {
                        "USD": [
                            {"accn": "X0", "val": 900,
                             "end": "2022-09-24", "fy": 2022, "fp": "FY", "form": "10-K"},
                            {"accn": "X1", "val": 1000,
                             "end": "2023-09-30", "fy": 2023, "fp": "FY", "form": "10-K"}
                        ]
                    }
                },
                "NetIncomeLoss": {
                    "units": {
                        "USD": [{"accn": "X1", "val": 200, "end": "2023-09-30"}],
                        "EUR": [{"accn": "X1", "val": 185, "end": "2023-09-30"}]
                    }
                }
            }
        }"#;

        let facts: FactsData = serde_json::from_str(json).unwrap();
        let row = extract_statement(&facts, &TWO_ITEM_DEFINITION, "X1");

        assert_eq!(row.get("Revenue"), Some(1000.0));
        assert_eq!(row.get("Net Income"), Some(200.0));
        assert_eq!(row.len(), 2);
    }
}
