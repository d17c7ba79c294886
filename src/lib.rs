//! Prepares time-indexed indicator records into validated, plot-ready
//! tables: one focal entity plus optional region, income-tier, and peer
//! comparators. Emits data for a display layer; draws nothing itself.

pub mod frame;
pub mod prepare;
pub mod schema;
pub mod sources;

pub use frame::Frame;
pub use prepare::{
    compose, extract_entity, extract_group, extract_peers, to_wide, ComparatorKind, LineStyle,
    PrepareError, PreparedRow, Role, WideRow, WideTable,
};
pub use schema::{validate, DatasetKind, SchemaError};
pub use sources::Sources;
