use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::frame::Frame;
use crate::schema::{validate, DatasetKind, SchemaError};

/// The four source tables the host supplies at startup: entity-level scores
/// for the latest assessment wave plus the full history, and the matching
/// group-level aggregates.
///
/// Tables are immutable after load; every query composes over them without
/// touching them, so concurrent readers need no coordination.
#[derive(Debug)]
pub struct Sources {
    pub scores: Frame,
    pub scores_history: Frame,
    pub group_scores: Frame,
    pub group_scores_history: Frame,
}

impl Sources {
    /// Load the four CSVs from `dir`.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let load = |name: &str| -> Result<Frame> {
            let path = dir.join(name);
            Frame::from_csv_path(&path).with_context(|| format!("loading {}", path.display()))
        };
        let sources = Self {
            scores: load("scores.csv")?,
            scores_history: load("scores_history.csv")?,
            group_scores: load("group_scores.csv")?,
            group_scores_history: load("group_scores_history.csv")?,
        };
        info!(dir = %dir.display(), "loaded source tables");
        Ok(sources)
    }

    /// Validate all four tables, failing on the first violation.
    ///
    /// A failure here must abort startup; the pipeline never re-checks
    /// schemas per query.
    pub fn validate(&self) -> Result<(), SchemaError> {
        validate(&self.scores, DatasetKind::EntityLevel)?;
        validate(&self.scores_history, DatasetKind::EntityLevel)?;
        validate(&self.group_scores, DatasetKind::GroupLevel)?;
        validate(&self.group_scores_history, DatasetKind::GroupLevel)?;
        Ok(())
    }
}
