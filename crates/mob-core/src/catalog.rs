//! The loaded catalog: merged records built once, then only read

use crate::error::Result;
use crate::filter::{filter_records, FilterQuery};
use crate::merger::merge_records;
use crate::parser::parse_records;
use crate::record::MergedRecord;
use crate::source::DataSource;
use crate::stat::{hp_per_exp, DerivedStat};
use serde::{Serialize, Serializer};

/// Immutable set of merged creature records
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<MergedRecord>,
    /// Number of data lines accepted by the parser
    raw_count: usize,
}

impl Catalog {
    /// Parse and merge drop table text
    pub fn from_text(content: &str) -> Result<Self> {
        let raw = parse_records(content)?;
        let records = merge_records(&raw);

        log::info!(
            "loaded {} rows into {} creature records",
            raw.len(),
            records.len()
        );

        Ok(Self {
            records,
            raw_count: raw.len(),
        })
    }

    /// Fetch `resource` from `source`, then parse and merge it
    pub fn load(source: &dyn DataSource, resource: &str) -> Result<Self> {
        let content = source.fetch(resource)?;
        Self::from_text(&content)
    }

    /// Build a catalog from records that are already merged
    pub fn from_records(records: Vec<MergedRecord>) -> Self {
        Self {
            raw_count: records.len(),
            records,
        }
    }

    pub fn records(&self) -> &[MergedRecord] {
        &self.records
    }

    pub fn raw_count(&self) -> usize {
        self.raw_count
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching `query`, in catalog order
    pub fn filter(&self, query: &FilterQuery) -> Vec<&MergedRecord> {
        filter_records(&self.records, query)
    }

    /// Matching records paired with their derived stat, ready for display
    pub fn cards(&self, query: &FilterQuery) -> Vec<Card<'_>> {
        self.filter(query).into_iter().map(Card::new).collect()
    }
}

/// A record plus its health-per-experience stat
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Card<'a> {
    #[serde(flatten)]
    pub record: &'a MergedRecord,
    #[serde(serialize_with = "serialize_display")]
    pub hp_per_exp: DerivedStat,
}

impl<'a> Card<'a> {
    pub fn new(record: &'a MergedRecord) -> Self {
        Self {
            record,
            hp_per_exp: hp_per_exp(&record.health, &record.base_experience),
        }
    }
}

fn serialize_display<S: Serializer>(stat: &DerivedStat, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(stat)
}
