//! Merge engine: one record per creature, drops accumulated across rows

use crate::record::{Field, MergedRecord, RawRecord};
use std::collections::HashMap;

/// Merge raw rows into one record per creature name
///
/// Level, health and experience come from the first row seen for a name;
/// later rows only contribute drops. Output keeps first-occurrence order.
pub fn merge_records(raw: &[RawRecord]) -> Vec<MergedRecord> {
    let mut merged: Vec<MergedRecord> = Vec::new();
    // name -> index into `merged`
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();

    for row in raw {
        let name = row.value(Field::Name);

        let idx = *index_by_name.entry(name).or_insert_with(|| {
            merged.push(MergedRecord::from_raw(row));
            merged.len() - 1
        });

        merged[idx].add_drop(row.value(Field::Drop));
    }

    log::debug!("merged {} rows into {} creatures", raw.len(), merged.len());
    merged
}
