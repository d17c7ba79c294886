use thiserror::Error;

/// Query-time failures. Recoverable by the caller; the `Display` output is
/// the inline diagnostic a user sees.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrepareError {
    /// The requested indicator column does not exist in the dataset being
    /// queried. Enumerates the dynamically discovered alternatives; never
    /// substitutes a default indicator.
    #[error("unknown indicator `{requested}`; valid indicators: {}", .available.join(", "))]
    UnknownIndicator {
        requested: String,
        available: Vec<String>,
    },
}
