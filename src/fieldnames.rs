use std::collections::HashSet;

use crate::record::Record;

/// Every key seen across `records`, deduplicated, in first-seen order.
pub fn collect_fieldnames(records: &[Record]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut fieldnames = Vec::new();
    for record in records {
        for key in record.keys() {
            if seen.insert(key.as_str()) {
                fieldnames.push(key.clone());
            }
        }
    }
    fieldnames
}
