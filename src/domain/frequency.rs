use std::collections::{hash_map, HashMap};

use itertools::Itertools;

use super::{record::Record, section::SectionName};

/// Stem to occurrence count for a single block of text.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u32>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable::default()
    }

    pub fn add(&mut self, stem: String) {
        *self.counts.entry(stem).or_insert(0) += 1;
    }

    pub fn get(&self, stem: &str) -> Option<u32> {
        self.counts.get(stem).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of tokens that went into the table.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, u32> {
        self.counts.iter()
    }

    /// Highest count first, ties broken alphabetically.
    pub fn into_sorted_entries(self) -> Vec<(String, u32)> {
        self.counts
            .into_iter()
            .sorted_by(|(a_stem, a_count), (b_stem, b_count)| {
                b_count.cmp(a_count).then_with(|| a_stem.cmp(b_stem))
            })
            .collect()
    }

    pub fn into_records(self, section: SectionName, url: &str) -> Vec<Record> {
        self.into_sorted_entries()
            .into_iter()
            .map(|(keyword, count)| Record {
                section,
                url: url.to_string(),
                keyword,
                count,
            })
            .collect()
    }
}

impl FromIterator<String> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for stem in iter {
            table.add(stem);
        }
        table
    }
}
