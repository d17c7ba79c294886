use scoreprep::frame::Frame;
use scoreprep::schema::{indicator_columns, validate, DatasetKind};
use serde::Serialize;
use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// One line of the report: how a single CSV fared against its schema.
#[derive(Serialize)]
struct FileReport {
    file: String,
    kind: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    indicator_columns: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1) Read the directory from the first CLI argument
    let dir = env::args()
        .nth(1)
        .expect("Usage: cargo run --bin validate_sources -- <CSV_DIR_PATH>");
    let csv_dir = Path::new(&dir);
    if !csv_dir.is_dir() {
        panic!("{} is not a directory.", dir);
    }

    // 2) Validate every CSV in that directory against its inferred kind
    let mut reports: Vec<FileReport> = Vec::new();
    for entry in fs::read_dir(csv_dir)? {
        let entry = entry?;
        let path: PathBuf = entry.path();
        if path.is_dir() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }

        let filename = path.file_name().unwrap().to_string_lossy().into_owned();
        let frame = Frame::from_csv_path(&path)?;
        let kind = infer_kind(&frame);
        let verdict = validate(&frame, kind);

        println!(
            "{} {} ({}): {}",
            if verdict.is_ok() { "✔" } else { "✘" },
            filename,
            kind,
            match &verdict {
                Ok(()) => "ok".to_string(),
                Err(e) => e.to_string(),
            }
        );

        reports.push(FileReport {
            file: filename,
            kind: kind.as_str().to_string(),
            valid: verdict.is_ok(),
            error: verdict.err().map(|e| e.to_string()),
            indicator_columns: indicator_columns(&frame),
        });
    }

    // 3) Emit everything into YAML
    let yaml_string = serde_yaml::to_string(&reports)?;
    let mut out = File::create("validation_report.yaml")?;
    out.write_all(yaml_string.as_bytes())?;

    let failures = reports.iter().filter(|r| !r.valid).count();
    println!(
        "→ wrote validation_report.yaml ({} files, {} failing)",
        reports.len(),
        failures
    );
    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Guess which contract a file is meant to satisfy from its key columns.
/// A file with `group_id` and no `entity_id` is group-level; everything
/// else is held to the entity-level schema, whose diagnostic will say
/// exactly what is missing.
fn infer_kind(frame: &Frame) -> DatasetKind {
    if frame.column_index("group_id").is_some() && frame.column_index("entity_id").is_none() {
        DatasetKind::GroupLevel
    } else {
        DatasetKind::EntityLevel
    }
}
