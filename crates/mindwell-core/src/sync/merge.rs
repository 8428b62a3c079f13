//! Last-write-wins merge of local and remote result histories.

use std::collections::HashMap;

use uuid::Uuid;

use crate::results::TestResult;

/// Merge two result sets keyed by record id.
///
/// The cloud record is kept unless a local record with the same id has a
/// strictly later timestamp. The output is the union of ids, deduplicated,
/// sorted by date descending (id as a tie-break so equal dates order
/// deterministically).
pub fn merge_results(local: Vec<TestResult>, cloud: Vec<TestResult>) -> Vec<TestResult> {
    let mut by_id: HashMap<Uuid, TestResult> = HashMap::new();

    // Cloud first, then local: a record only displaces an existing entry
    // with a strictly later timestamp, so on an exact tie the cloud copy
    // is kept.
    for record in cloud.into_iter().chain(local) {
        match by_id.get(&record.id) {
            Some(existing) if record.date <= existing.date => {}
            _ => {
                by_id.insert(record.id, record);
            }
        }
    }

    let mut merged: Vec<TestResult> = by_id.into_values().collect();
    merged.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
    merged
}
