use tracing::debug;

use crate::frame::Frame;

use super::types::{LineStyle, PreparedRow, Role};
use super::{indicator_index, PrepareError};

/// Extract the focal entity's series for one indicator.
///
/// Rows whose value cell is empty are dropped here and never carried
/// forward; so are rows without a usable period, since a time-indexed
/// observation with no time index cannot be plotted. An entity with no
/// matching rows yields an empty list, not an error.
pub fn extract_entity(
    data: &Frame,
    entity_id: &str,
    indicator: &str,
) -> Result<Vec<PreparedRow>, PrepareError> {
    let value_col = indicator_index(data, indicator)?;

    let mut out = Vec::new();
    for row in 0..data.len() {
        if data.cell(row, "entity_id") != Some(entity_id) {
            continue;
        }
        let value = match data.number_at(row, value_col) {
            Some(v) => v,
            None => continue,
        };
        let period = match data.integer(row, "period") {
            Some(p) => p,
            None => {
                debug!(row, entity = entity_id, "dropping row without usable period");
                continue;
            }
        };

        out.push(PreparedRow {
            entity_key: entity_id.to_string(),
            period,
            value,
            region: data.cell(row, "region").map(str::to_string),
            income_tier: data.cell(row, "income_tier").map(str::to_string),
            role: Role::Focal,
            display_name: entity_id.to_string(),
            line_style: LineStyle::Solid,
            comparator_kind: None,
        });
    }
    Ok(out)
}
