//! Label/value tables: definition-list-like blocks where every row pairs a
//! short label with its value text.

use crate::node::{Node, Query};
use crate::ExtractError;
use std::collections::BTreeMap;
use tracing::debug;

/// Where the table, its rows, and the two halves of a row live.
#[derive(Debug, Clone, Copy)]
pub struct TableShape {
    pub table: Query,
    pub row: Query,
    pub label: Query,
    pub value: Query,
}

/// Parses the table described by `shape` into a map keyed by the
/// vocabulary entry each label matches exactly.
///
/// Rows with an empty or missing label or value, and rows whose label is
/// not part of `vocabulary`, are skipped. When a label repeats, the first
/// row wins. Fails only when the table itself is absent.
pub fn parse_table<N, K>(
    root: &N,
    shape: &TableShape,
    vocabulary: &[(&str, K)],
) -> Result<BTreeMap<K, String>, ExtractError>
where
    N: Node,
    K: Copy + Ord,
{
    let table = root
        .first(&shape.table)
        .ok_or(ExtractError::Absent(shape.table.name()))?;

    let mut entries = BTreeMap::new();
    for row in table.all(&shape.row) {
        let Some(label) = row.first(&shape.label).map(|n| n.text_content()) else {
            continue;
        };
        let Some(value) = row.first(&shape.value).map(|n| n.text_content()) else {
            continue;
        };
        if label.is_empty() || value.is_empty() {
            continue;
        }
        match lookup(vocabulary, &label) {
            Some(key) => {
                entries.entry(key).or_insert(value);
            }
            None => debug!("Ignore unknown {} {:?}", shape.label.name(), label),
        }
    }

    Ok(entries)
}

/// The vocabulary key whose label is exactly `label`.
pub fn lookup<K: Copy>(vocabulary: &[(&str, K)], label: &str) -> Option<K> {
    vocabulary
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, key)| *key)
}

/// Value node of the first row whose label text is exactly `label`.
///
/// `None` when the table, such a row, or its value is missing. The value
/// node is returned as-is so callers can look inside it.
pub fn find_value<N: Node>(root: &N, shape: &TableShape, label: &str) -> Option<N> {
    let table = root.first(&shape.table)?;
    table
        .all(&shape.row)
        .into_iter()
        .find(|row| {
            row.first(&shape.label)
                .map_or(false, |l| l.text_content() == label)
        })?
        .first(&shape.value)
}
