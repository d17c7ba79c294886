use thiserror::Error;

use super::validate::DatasetKind;

/// A source dataset failed structural validation. Fatal at startup.
///
/// The `Display` output is the user-facing diagnostic, so each variant
/// names what is wrong and samples what was actually there; no backtraces.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("dataset is not tabular: expected rows of named columns, got {found}")]
    NotTabular { found: String },

    #[error(
        "{kind} dataset is missing required column(s) {missing:?}; expected all of {expected:?}; first columns found: {found:?}"
    )]
    MissingColumns {
        kind: DatasetKind,
        missing: Vec<String>,
        expected: Vec<String>,
        /// First few columns actually present, to aid debugging without
        /// dumping a huge schema.
        found: Vec<String>,
    },

    #[error(
        "{kind} dataset has no indicator columns (names like `q12` or `q12a`); first columns found: {found:?}"
    )]
    NoIndicatorColumns { kind: DatasetKind, found: Vec<String> },
}
