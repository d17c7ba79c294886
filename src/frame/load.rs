use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::schema::SchemaError;

use super::Frame;

impl Frame {
    /// Read a CSV file with a header row into a frame.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Frame> {
        let path = path.as_ref();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("opening {}", path.display()))?;

        let columns: Vec<String> = rdr
            .headers()
            .with_context(|| format!("reading header row of {}", path.display()))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result.with_context(|| {
                format!("CSV parse error in {} at record {}", path.display(), idx)
            })?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        debug!(path = %path.display(), columns = columns.len(), rows = rows.len(), "loaded csv");
        Ok(Frame::new(columns, rows))
    }

    /// Build a frame from a JSON value that must be an array of records.
    ///
    /// Anything else (a scalar, `null`, a bare object, an array of
    /// non-records) is rejected here, at the load boundary, so no
    /// half-shaped table reaches the pipeline.
    pub fn from_json_value(value: &Value) -> Result<Frame, SchemaError> {
        let records = value.as_array().ok_or_else(|| SchemaError::NotTabular {
            found: json_shape(value).to_string(),
        })?;

        // 1) union of keys, in first-seen order, so the header is stable
        let mut columns: Vec<String> = Vec::new();
        for record in records {
            let object = record.as_object().ok_or_else(|| SchemaError::NotTabular {
                found: format!("an array containing {}", json_shape(record)),
            })?;
            for key in object.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        // 2) one string row per record; absent keys become empty cells
        let rows = records
            .iter()
            .map(|record| {
                let object = record.as_object().expect("records checked above");
                columns
                    .iter()
                    .map(|c| object.get(c).map(json_cell).unwrap_or_default())
                    .collect()
            })
            .collect();

        Ok(Frame::new(columns, rows))
    }
}

fn json_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a nested array",
        Value::Object(_) => "a single object",
    }
}

fn json_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn csv_reads_headers_and_nulls() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        writeln!(tmp, "entity_id,period,region,income_tier,q1")?;
        writeln!(tmp, "Kenya,2020,Africa,\"Lower middle\",3.5")?;
        writeln!(tmp, "Ghana,2020,Africa,,")?;
        tmp.flush()?;

        let frame = Frame::from_csv_path(tmp.path())?;
        assert_eq!(
            frame.columns(),
            &["entity_id", "period", "region", "income_tier", "q1"]
        );
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.cell(0, "income_tier"), Some("Lower middle"));
        assert_eq!(frame.number(0, "q1"), Some(3.5));
        assert_eq!(frame.cell(1, "income_tier"), None);
        assert_eq!(frame.number(1, "q1"), None);
        Ok(())
    }

    #[test]
    fn csv_missing_file_is_an_error() {
        assert!(Frame::from_csv_path("definitely/not/here.csv").is_err());
    }

    #[test]
    fn json_records_become_rows() {
        let value = json!([
            {"entity_id": "Kenya", "period": 2020, "q1": 3.5},
            {"entity_id": "Ghana", "period": 2020, "q2": null},
        ]);
        let frame = Frame::from_json_value(&value).unwrap();
        // union of keys across records, nulls as empty cells
        assert_eq!(frame.columns().len(), 4);
        assert_eq!(frame.cell(0, "entity_id"), Some("Kenya"));
        assert_eq!(frame.number(0, "q1"), Some(3.5));
        assert_eq!(frame.cell(1, "q1"), None);
        assert_eq!(frame.cell(1, "q2"), None);
        assert_eq!(frame.integer(1, "period"), Some(2020));
    }

    #[test]
    fn json_non_tabular_shapes_are_rejected() {
        for value in [
            json!(42),
            json!(null),
            json!("scores"),
            json!({"entity_id": "Kenya"}),
            json!([1, 2, 3]),
        ] {
            let err = Frame::from_json_value(&value).unwrap_err();
            assert!(matches!(err, SchemaError::NotTabular { .. }), "{value}");
        }
    }
}
