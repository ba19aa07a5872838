//! Historical fact records and their citations.

use serde::{Deserialize, Serialize};

use super::day::DayKey;
use super::null_as_default;

/// A citation referenced from a fact's content by an inline `[id]` marker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Source {
    /// Marker identifier, matched against `[id]` in the fact content
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Display name
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,

    /// Label for the external link
    #[serde(deserialize_with = "null_as_default")]
    pub url_name: String,

    /// External URL (may be empty)
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// One historical event tied to a day, month and year.
///
/// The `*_html` fields are derived at parse time and never read from the
/// serialized record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Fact {
    /// Identifier, unique within its day-file
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub day: u32,

    #[serde(deserialize_with = "null_as_default")]
    pub month: u32,

    #[serde(deserialize_with = "null_as_default")]
    pub year: i32,

    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    /// Raw content, possibly containing `[sourceID]` markers
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,

    /// Short-form content for compact display
    #[serde(deserialize_with = "null_as_default")]
    pub content_twitter: String,

    #[serde(deserialize_with = "null_as_default")]
    pub location: String,

    /// Geo coordinates as a "lat,lon" string
    #[serde(deserialize_with = "null_as_default")]
    pub geo: String,

    /// Semicolon-separated list of names
    #[serde(deserialize_with = "null_as_default")]
    pub people: String,

    #[serde(deserialize_with = "null_as_default")]
    pub keywords: String,

    /// Image file reference
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,

    /// Image caption
    #[serde(deserialize_with = "null_as_default")]
    pub image_info: String,

    #[serde(deserialize_with = "null_as_default")]
    pub sources: Vec<Source>,

    /// Styled content with citation markers removed
    #[serde(skip)]
    pub content_html: String,

    /// Image block, empty without an image
    #[serde(skip)]
    pub image_html: String,

    /// Map link block, empty without a geo string
    #[serde(skip)]
    pub geo_html: String,
}

impl Fact {
    /// Zero-padded "YYYY-MM-DD" date, sortable lexicographically
    pub fn date(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// The day key of this fact, if its month/day form a real calendar day
    pub fn day_key(&self) -> Option<DayKey> {
        DayKey::new(self.month, self.day)
    }

    /// Names listed in `people`, trimmed, empty entries dropped
    pub fn people_names(&self) -> impl Iterator<Item = &str> {
        self.people
            .split(';')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Date and short-form content of a single fact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactSummary {
    /// "DD-MM-YYYY"
    pub date: String,

    pub content: String,
}

impl From<&Fact> for FactSummary {
    fn from(fact: &Fact) -> Self {
        Self {
            date: format!("{:02}-{:02}-{:04}", fact.day, fact.month, fact.year),
            content: fact.content_twitter.clone(),
        }
    }
}

/// Year index entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearFact {
    /// "YYYY-MM-DD"
    pub date: String,

    /// Human label, e.g. "3 maja"
    pub date_month: String,

    pub title: String,

    /// Link to the fact on its day page
    pub url_html: String,
}

/// People index entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeopleFact {
    /// "YYYY-MM-DD"
    pub date: String,

    /// Human label including the year, e.g. "3 maja 1568"
    pub date_month: String,

    pub title: String,

    /// Link to the fact on its day page
    pub url_html: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_is_zero_padded() {
        let fact = Fact {
            day: 3,
            month: 5,
            year: 968,
            ..Default::default()
        };
        assert_eq!(fact.date(), "0968-05-03");
    }

    #[test]
    fn test_people_names_trimmed() {
        let fact = Fact {
            people: " Jan Kochanowski ; Zygmunt August;;".to_string(),
            ..Default::default()
        };
        let names: Vec<_> = fact.people_names().collect();
        assert_eq!(names, vec!["Jan Kochanowski", "Zygmunt August"]);
    }

    #[test]
    fn test_summary_uses_short_content() {
        let fact = Fact {
            day: 3,
            month: 5,
            year: 1568,
            content: "long".to_string(),
            content_twitter: "short".to_string(),
            ..Default::default()
        };
        let summary = FactSummary::from(&fact);
        assert_eq!(summary.date, "03-05-1568");
        assert_eq!(summary.content, "short");
    }
}
