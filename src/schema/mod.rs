pub mod error;
pub mod indicators;
pub mod validate;

pub use error::SchemaError;
pub use indicators::{indicator_columns, is_indicator_column};
pub use validate::{validate, DatasetKind};
