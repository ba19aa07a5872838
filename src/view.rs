//! JSON projections of loaded records.

use serde::{Deserialize, Serialize};

use crate::domain::{Fact, FactSummary};
use crate::parser::render::{self, TextStyle};

/// Message returned for lookups without data
pub const NOT_FOUND_MESSAGE: &str = "Błędne zapytanie lub brak danych";

/// Source as exposed in JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceJson {
    pub value: String,
    pub url: String,
}

/// Fact as exposed in JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactJson {
    /// "DD-MM-YYYY"
    pub date: String,
    pub title: String,
    /// Plain-styled content without citation markers
    pub content: String,
    pub location: String,
    pub geo: String,
    pub people: String,
    pub keywords: String,
    pub sources: Vec<SourceJson>,
}

impl From<&Fact> for FactJson {
    fn from(fact: &Fact) -> Self {
        Self {
            date: format!("{:02}-{:02}-{:04}", fact.day, fact.month, fact.year),
            title: fact.title.clone(),
            content: render::fact_content(&fact.content, &fact.sources, TextStyle::Plain),
            location: fact.location.clone(),
            geo: fact.geo.clone(),
            people: fact.people.clone(),
            keywords: fact.keywords.clone(),
            sources: fact
                .sources
                .iter()
                .map(|s| SourceJson {
                    value: s.value.clone(),
                    url: s.url.clone(),
                })
                .collect(),
        }
    }
}

/// Short-form fact as exposed in JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactShortJson {
    pub date: String,
    pub content: String,
}

impl From<FactSummary> for FactShortJson {
    fn from(summary: FactSummary) -> Self {
        Self {
            date: summary.date,
            content: summary.content,
        }
    }
}

/// Error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageJson {
    pub message: String,
}

impl MessageJson {
    pub fn not_found() -> Self {
        Self {
            message: NOT_FOUND_MESSAGE.to_string(),
        }
    }
}

/// Project a day's facts for JSON output
pub fn facts_json(facts: &[Fact]) -> Vec<FactJson> {
    facts.iter().map(FactJson::from).collect()
}
