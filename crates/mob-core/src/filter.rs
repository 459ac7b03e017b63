//! Filter engine: level range, then free-text search
//!
//! Records whose level is not an integer (such as the "none" sentinel) never
//! pass the range stage, whatever the bounds are.

use crate::record::MergedRecord;

/// Lower bound used when the minimum is absent or invalid
pub const DEFAULT_MIN_LEVEL: i64 = 1;
/// Upper bound used when the maximum is absent or invalid
pub const DEFAULT_MAX_LEVEL: i64 = 999;

/// Inclusive level range used by the range stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelBounds {
    pub min: i64,
    pub max: i64,
}

impl Default for LevelBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_LEVEL,
            max: DEFAULT_MAX_LEVEL,
        }
    }
}

impl LevelBounds {
    /// Normalize optional bounds: absent or non-positive values fall back
    /// to [`DEFAULT_MIN_LEVEL`] / [`DEFAULT_MAX_LEVEL`]
    pub fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self {
            min: min.filter(|m| *m >= 1).unwrap_or(DEFAULT_MIN_LEVEL),
            max: max.filter(|m| *m >= 1).unwrap_or(DEFAULT_MAX_LEVEL),
        }
    }

    /// Normalize bounds as typed by a user; non-numeric text counts as absent
    pub fn from_inputs(min: Option<&str>, max: Option<&str>) -> Self {
        Self::new(min.and_then(parse_level), max.and_then(parse_level))
    }

    /// Bounds with min and max swapped if they are inverted
    ///
    /// The flag is true when a swap happened, so a caller can reflect the
    /// corrected values back into its own inputs.
    pub fn ordered(self) -> (Self, bool) {
        if self.min > self.max {
            (
                Self {
                    min: self.max,
                    max: self.min,
                },
                true,
            )
        } else {
            (self, false)
        }
    }

    /// Whether `level` falls inside the range (inclusive)
    pub fn contains(&self, level: i64) -> bool {
        self.min <= level && level <= self.max
    }
}

fn parse_level(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// A snapshot of the user's filter inputs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterQuery {
    pub bounds: LevelBounds,
    /// Trimmed, lowercased search text; empty matches everything
    needle: String,
}

impl FilterQuery {
    pub fn new(bounds: LevelBounds, query: &str) -> Self {
        Self {
            bounds,
            needle: query.trim().to_lowercase(),
        }
    }

    /// The normalized search text
    pub fn text(&self) -> &str {
        &self.needle
    }

    /// Range stage
    pub fn matches_level(&self, record: &MergedRecord) -> bool {
        record
            .level_number()
            .is_some_and(|level| self.bounds.contains(level))
    }

    /// Text stage: name or any drop contains the query, ignoring case
    pub fn matches_text(&self, record: &MergedRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        record.name.to_lowercase().contains(&self.needle)
            || record
                .drops
                .iter()
                .any(|drop| drop.to_lowercase().contains(&self.needle))
    }

    pub fn matches(&self, record: &MergedRecord) -> bool {
        self.matches_level(record) && self.matches_text(record)
    }
}

/// Select the records passing both stages, in their original order
pub fn filter_records<'a>(records: &'a [MergedRecord], query: &FilterQuery) -> Vec<&'a MergedRecord> {
    records.iter().filter(|r| query.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, level: &str, drops: &[&str]) -> MergedRecord {
        MergedRecord {
            name: name.to_string(),
            level: level.to_string(),
            health: "10".to_string(),
            base_experience: "2".to_string(),
            drops: drops.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn sample() -> Vec<MergedRecord> {
        vec![
            record("Snail (蝸牛)", "1", &["Red Potion", "Green Apple"]),
            record("Blue Snail (藍蝸牛)", "2", &["Blue Shell"]),
            record("Stump (木妖)", "10", &["Branch"]),
            record("Training Dummy", "none", &["Red Potion"]),
        ]
    }

    fn names<'a>(records: &[&'a MergedRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_bounds_defaults() {
        assert_eq!(LevelBounds::new(None, None), LevelBounds { min: 1, max: 999 });
        assert_eq!(LevelBounds::new(Some(0), Some(-4)), LevelBounds::default());
        assert_eq!(
            LevelBounds::from_inputs(Some("abc"), Some("")),
            LevelBounds::default()
        );
        assert_eq!(
            LevelBounds::from_inputs(Some(" 5 "), Some("20")),
            LevelBounds { min: 5, max: 20 }
        );
    }

    #[test]
    fn test_bounds_parse_whole_integers_only() {
        assert_eq!(
            LevelBounds::from_inputs(Some("5.5"), Some("20abc")),
            LevelBounds::default()
        );
    }

    #[test]
    fn test_bounds_ordered() {
        let (bounds, swapped) = LevelBounds::new(Some(30), Some(10)).ordered();
        assert!(swapped);
        assert_eq!(bounds, LevelBounds { min: 10, max: 30 });

        let (bounds, swapped) = LevelBounds::new(Some(3), Some(3)).ordered();
        assert!(!swapped);
        assert_eq!(bounds, LevelBounds { min: 3, max: 3 });
    }

    #[test]
    fn test_range_is_inclusive() {
        let records = sample();

        let exact = FilterQuery::new(LevelBounds::new(Some(10), Some(10)), "");
        assert_eq!(names(&filter_records(&records, &exact)), vec!["Stump (木妖)"]);

        let below = FilterQuery::new(LevelBounds::new(Some(10), Some(9)), "");
        assert!(filter_records(&records, &below).is_empty());
    }

    #[test]
    fn test_inverted_bounds_not_swapped() {
        let records = sample();
        let query = FilterQuery::new(LevelBounds::new(Some(10), Some(1)), "");

        assert!(filter_records(&records, &query).is_empty());
    }

    #[test]
    fn test_default_bounds_keep_numeric_levels() {
        let records = sample();
        let query = FilterQuery::new(LevelBounds::from_inputs(None, Some("x")), "");

        assert_eq!(
            names(&filter_records(&records, &query)),
            vec!["Snail (蝸牛)", "Blue Snail (藍蝸牛)", "Stump (木妖)"]
        );
    }

    #[test]
    fn test_non_numeric_level_always_excluded() {
        let records = sample();
        let query = FilterQuery::new(LevelBounds::default(), "potion");

        // The dummy drops a potion but has no level.
        assert_eq!(names(&filter_records(&records, &query)), vec!["Snail (蝸牛)"]);
    }

    #[test]
    fn test_name_match_ignores_case() {
        let records = sample();

        let hit = FilterQuery::new(LevelBounds::new(Some(1), Some(1)), "SNAIL");
        assert_eq!(names(&filter_records(&records, &hit)), vec!["Snail (蝸牛)"]);

        let local = FilterQuery::new(LevelBounds::default(), "藍蝸牛");
        assert_eq!(names(&filter_records(&records, &local)), vec!["Blue Snail (藍蝸牛)"]);

        let miss = FilterQuery::new(LevelBounds::default(), "xyz123");
        assert!(filter_records(&records, &miss).is_empty());
    }

    #[test]
    fn test_drop_match() {
        let records = sample();
        let query = FilterQuery::new(LevelBounds::default(), "shell");

        assert_eq!(names(&filter_records(&records, &query)), vec!["Blue Snail (藍蝸牛)"]);
    }

    #[test]
    fn test_query_is_trimmed() {
        let query = FilterQuery::new(LevelBounds::default(), "  Branch ");
        assert_eq!(query.text(), "branch");

        let blank = FilterQuery::new(LevelBounds::default(), "   ");
        assert_eq!(filter_records(&sample(), &blank).len(), 3);
    }

    #[test]
    fn test_order_preserved() {
        let records = sample();
        let query = FilterQuery::new(LevelBounds::default(), "snail");

        assert_eq!(
            names(&filter_records(&records, &query)),
            vec!["Snail (蝸牛)", "Blue Snail (藍蝸牛)"]
        );
    }
}
