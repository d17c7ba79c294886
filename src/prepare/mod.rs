pub mod compose;
pub mod entity;
pub mod error;
pub mod group;
pub mod peers;
pub mod types;
pub mod wide;

pub use compose::compose;
pub use entity::extract_entity;
pub use error::PrepareError;
pub use group::extract_group;
pub use peers::extract_peers;
pub use types::{ComparatorKind, LineStyle, PreparedRow, Role, WideRow, WideTable};
pub use wide::to_wide;

use crate::frame::Frame;
use crate::schema::indicators;

/// Resolve `indicator` to its column index, or report the valid set.
///
/// Only columns matching the indicator pattern are queryable, so asking for
/// a key column ("region") fails the same way as a typo. The valid set is
/// discovered from the frame at call time, never from a static list.
pub(crate) fn indicator_index(frame: &Frame, indicator: &str) -> Result<usize, PrepareError> {
    match frame.column_index(indicator) {
        Some(idx) if indicators::is_indicator_column(indicator) => Ok(idx),
        _ => Err(PrepareError::UnknownIndicator {
            requested: indicator.to_string(),
            available: indicators::indicator_columns(frame),
        }),
    }
}
