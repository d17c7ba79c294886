use std::collections::HashSet;

use crate::frame::Frame;

use super::types::{ComparatorKind, LineStyle, PreparedRow, Role};
use super::{indicator_index, PrepareError};

/// Extract pre-aggregated comparator series for the selected groups.
///
/// One implementation serves both region and income-tier call sites; the
/// kind decides which semantic column carries the group name, so downstream
/// consumers can facet by geography vs income without ambiguity.
///
/// An empty or absent selection is the normal "no comparator chosen" path:
/// it returns an empty list the caller can concatenate as-is, with no null
/// checks anywhere downstream.
pub fn extract_group(
    group_data: &Frame,
    selected_groups: Option<&[String]>,
    indicator: &str,
    comparator_kind: ComparatorKind,
) -> Result<Vec<PreparedRow>, PrepareError> {
    let value_col = indicator_index(group_data, indicator)?;

    let selected: HashSet<&str> = match selected_groups {
        Some(groups) if !groups.is_empty() => groups.iter().map(String::as_str).collect(),
        _ => return Ok(Vec::new()),
    };

    let mut out = Vec::new();
    for row in 0..group_data.len() {
        let group_id = match group_data.cell(row, "group_id") {
            Some(id) if selected.contains(id) => id,
            _ => continue,
        };
        let value = match group_data.number_at(row, value_col) {
            Some(v) => v,
            None => continue,
        };
        let period = match group_data.integer(row, "period") {
            Some(p) => p,
            None => continue,
        };

        // The group name lands in exactly one semantic column.
        let (region, income_tier) = match comparator_kind {
            ComparatorKind::Region => (Some(group_id.to_string()), None),
            ComparatorKind::IncomeTier => (None, Some(group_id.to_string())),
            // Peers go through the entity-level extractor and carry their
            // own geography; a group row has none to offer.
            ComparatorKind::Peer => (None, None),
        };

        out.push(PreparedRow {
            entity_key: group_id.to_string(),
            period,
            value,
            region,
            income_tier,
            role: Role::Comparator,
            display_name: group_id.to_string(),
            line_style: LineStyle::Dashed,
            comparator_kind: Some(comparator_kind),
        });
    }
    Ok(out)
}
