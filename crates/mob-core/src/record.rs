//! Record types for creature drop tables

use serde::{Deserialize, Serialize};

/// Header names of the drop table, in column order
pub const EXPECTED_HEADERS: [&str; 5] = ["怪物名稱", "等級", "生命值", "基礎經驗", "掉落物品"];

/// A column of the drop table
///
/// Columns are addressed by position, so a file may label its header
/// differently as long as the column count matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Level,
    Health,
    Experience,
    Drop,
}

impl Field {
    /// All columns in file order
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Level,
        Field::Health,
        Field::Experience,
        Field::Drop,
    ];

    /// Column index (0-based)
    pub fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Level => 1,
            Field::Health => 2,
            Field::Experience => 3,
            Field::Drop => 4,
        }
    }

    /// Expected header label for this column
    pub fn header(self) -> &'static str {
        EXPECTED_HEADERS[self.index()]
    }
}

/// One data line: header name -> trimmed value, in header order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<(String, String)>,
}

impl RawRecord {
    /// Pair header names with values; both must have the same length
    pub(crate) fn new(headers: &[String], values: Vec<String>) -> Self {
        debug_assert_eq!(headers.len(), values.len());
        Self {
            fields: headers.iter().cloned().zip(values).collect(),
        }
    }

    /// Look up a value by header name
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v.as_str())
    }

    /// Value of a schema column, or "" if the record is short
    pub fn value(&self, field: Field) -> &str {
        self.fields
            .get(field.index())
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Header names, in order
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(h, _)| h.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One creature after merging all of its rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRecord {
    /// Creature name, verbatim (e.g. "Snail (蝸牛)")
    pub name: String,
    /// Level literal, or a sentinel such as "none"
    pub level: String,
    /// Health literal, or a sentinel
    pub health: String,
    /// Base experience literal, or a sentinel
    pub base_experience: String,
    /// Unique drop items in first-seen order
    pub drops: Vec<String>,
}

impl MergedRecord {
    /// Snapshot the scalar fields of a raw record, with no drops yet
    pub fn from_raw(raw: &RawRecord) -> Self {
        Self {
            name: raw.value(Field::Name).to_string(),
            level: raw.value(Field::Level).to_string(),
            health: raw.value(Field::Health).to_string(),
            base_experience: raw.value(Field::Experience).to_string(),
            drops: Vec::new(),
        }
    }

    /// Level as an integer, if the field holds one
    pub fn level_number(&self) -> Option<i64> {
        self.level.trim().parse().ok()
    }

    /// Append a drop unless it is empty or already listed
    ///
    /// Returns true when the drop was added.
    pub fn add_drop(&mut self, drop: &str) -> bool {
        let drop = drop.trim();
        if drop.is_empty() || self.drops.iter().any(|d| d == drop) {
            return false;
        }
        self.drops.push(drop.to_string());
        true
    }
}
