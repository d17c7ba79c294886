use std::collections::HashSet;

use crate::frame::Frame;

use super::types::{ComparatorKind, LineStyle, PreparedRow, Role};
use super::{indicator_index, PrepareError};

/// Extract series for explicitly named peer entities.
///
/// Sources the entity-level dataset and follows the same null-dropping and
/// early-exit rules as the other extractors. Unlike group aggregates, peers
/// keep the region and income tier of their source rows.
pub fn extract_peers(
    data: &Frame,
    peer_ids: Option<&[String]>,
    indicator: &str,
) -> Result<Vec<PreparedRow>, PrepareError> {
    let value_col = indicator_index(data, indicator)?;

    let selected: HashSet<&str> = match peer_ids {
        Some(ids) if !ids.is_empty() => ids.iter().map(String::as_str).collect(),
        _ => return Ok(Vec::new()),
    };

    let mut out = Vec::new();
    for row in 0..data.len() {
        let entity_id = match data.cell(row, "entity_id") {
            Some(id) if selected.contains(id) => id,
            _ => continue,
        };
        let value = match data.number_at(row, value_col) {
            Some(v) => v,
            None => continue,
        };
        let period = match data.integer(row, "period") {
            Some(p) => p,
            None => continue,
        };

        out.push(PreparedRow {
            entity_key: entity_id.to_string(),
            period,
            value,
            region: data.cell(row, "region").map(str::to_string),
            income_tier: data.cell(row, "income_tier").map(str::to_string),
            role: Role::Comparator,
            display_name: entity_id.to_string(),
            line_style: LineStyle::Dashed,
            comparator_kind: Some(ComparatorKind::Peer),
        });
    }
    Ok(out)
}
