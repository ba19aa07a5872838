//! Derived indexes over loaded facts.
//!
//! An [`IndexBuilder`] is fed facts in file-processing order and owned
//! exclusively by the loader. [`IndexBuilder::finish`] applies the final
//! ordering and hands back an immutable [`Indexes`] value.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{month_name, DayKey, Fact, PeopleFact, YearFact};
use crate::parser::render;

/// Year, people and day-presence indexes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indexes {
    by_year: BTreeMap<i32, Vec<YearFact>>,
    by_person: BTreeMap<String, Vec<PeopleFact>>,
    days: BTreeSet<DayKey>,
}

impl Indexes {
    /// Facts of a year in file-processing order
    pub fn year(&self, year: i32) -> Option<&[YearFact]> {
        self.by_year.get(&year).map(Vec::as_slice)
    }

    /// Facts naming a person, ascending by date
    pub fn person(&self, name: &str) -> Option<&[PeopleFact]> {
        self.by_person.get(name).map(Vec::as_slice)
    }

    /// Whether a data file existed for the day
    pub fn day_has_facts(&self, day: DayKey) -> bool {
        self.days.contains(&day)
    }

    /// Indexed years, ascending
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.by_year.keys().copied()
    }

    /// Indexed person names, sorted
    pub fn people(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_person.keys().map(String::as_str)
    }

    /// Days with a data file, in calendar order
    pub fn days(&self) -> impl Iterator<Item = DayKey> + '_ {
        self.days.iter().copied()
    }

    pub fn year_index(&self) -> &BTreeMap<i32, Vec<YearFact>> {
        &self.by_year
    }

    pub fn people_index(&self) -> &BTreeMap<String, Vec<PeopleFact>> {
        &self.by_person
    }
}

/// Incremental builder for [`Indexes`]
#[derive(Debug, Default)]
pub struct IndexBuilder {
    indexes: Indexes,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a data file exists for the day, regardless of its contents
    pub fn mark_day(&mut self, day: DayKey) {
        self.indexes.days.insert(day);
    }

    /// Add one fact to the year and people indexes
    pub fn add_fact(&mut self, fact: &Fact) {
        let date = fact.date();
        let link = render::fact_link(fact.month, fact.day, &fact.id, &fact.title);

        self.indexes
            .by_year
            .entry(fact.year)
            .or_default()
            .push(YearFact {
                date: date.clone(),
                date_month: format!("{} {}", fact.day, month_name(fact.month)),
                title: fact.title.clone(),
                url_html: link.clone(),
            });

        let entry = PeopleFact {
            date,
            date_month: format!("{} {} {}", fact.day, month_name(fact.month), fact.year),
            title: fact.title.clone(),
            url_html: link,
        };

        for name in fact.people_names() {
            self.indexes
                .by_person
                .entry(name.to_string())
                .or_default()
                .push(entry.clone());
        }
    }

    /// Add every fact of a day-file
    pub fn add_facts<'a>(&mut self, facts: impl IntoIterator<Item = &'a Fact>) {
        for fact in facts {
            self.add_fact(fact);
        }
    }

    /// Sort each person's entries by date and return the finished indexes
    pub fn finish(mut self) -> Indexes {
        for entries in self.indexes.by_person.values_mut() {
            entries.sort_by(|a, b| a.date.cmp(&b.date));
        }
        self.indexes
    }
}
