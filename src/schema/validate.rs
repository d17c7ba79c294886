use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::frame::Frame;

use super::error::SchemaError;
use super::indicators;

/// How many of the actually-present columns a diagnostic carries.
const FOUND_SAMPLE: usize = 10;

/// Which structural contract a source dataset must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DatasetKind {
    /// One row per entity per period, with geography attached.
    EntityLevel,
    /// Pre-aggregated rows keyed by comparator group.
    GroupLevel,
}

impl DatasetKind {
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            DatasetKind::EntityLevel => &["entity_id", "period", "region", "income_tier"],
            DatasetKind::GroupLevel => &["group_id", "period", "group_kind"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DatasetKind::EntityLevel => "entity-level",
            DatasetKind::GroupLevel => "group-level",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check that `frame` has the shape the pipeline needs for `kind`.
///
/// Runs once per dataset at startup, not per query. Checks in order,
/// failing on the first violation, never coercing:
/// 1) the frame is actually a table (at least one named column);
/// 2) the required key columns for `kind` are all present;
/// 3) at least one indicator column exists.
pub fn validate(frame: &Frame, kind: DatasetKind) -> Result<(), SchemaError> {
    if frame.columns().is_empty() {
        return Err(SchemaError::NotTabular {
            found: "a table with no columns".to_string(),
        });
    }

    let expected = kind.required_columns();
    let missing: Vec<String> = expected
        .iter()
        .filter(|c| frame.column_index(c).is_none())
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError::MissingColumns {
            kind,
            missing,
            expected: expected.iter().map(|c| c.to_string()).collect(),
            found: found_sample(frame),
        });
    }

    if indicators::indicator_columns(frame).is_empty() {
        return Err(SchemaError::NoIndicatorColumns {
            kind,
            found: found_sample(frame),
        });
    }

    debug!(kind = %kind, columns = frame.columns().len(), rows = frame.len(), "schema ok");
    Ok(())
}

fn found_sample(frame: &Frame) -> Vec<String> {
    frame.columns().iter().take(FOUND_SAMPLE).cloned().collect()
}
