use anyhow::Result;
use scoreprep::prepare::{compose, to_wide};
use scoreprep::Sources;
use std::{env, path::PathBuf, process};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn usage() -> ! {
    eprintln!(
        "usage: scoreprep <FOCAL_ENTITY> <INDICATOR> \
         [--regions a,b] [--income-tiers a,b] [--peers a,b]\n\
         data directory: $SCOREPREP_DATA_DIR (default ./data)"
    );
    process::exit(2);
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    // ─── 2) resolve the data directory ───────────────────────────────
    let data_dir = env::var("SCOREPREP_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"));

    // ─── 3) load + validate sources; a schema failure blocks startup ─
    let sources = Sources::load(&data_dir)?;
    if let Err(e) = sources.validate() {
        error!("source validation failed: {e}");
        process::exit(1);
    }
    info!("sources validated");

    // ─── 4) parse the query ──────────────────────────────────────────
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        usage();
    }
    let focal = &args[0];
    let indicator = &args[1];

    let mut regions: Option<Vec<String>> = None;
    let mut income_tiers: Option<Vec<String>> = None;
    let mut peers: Option<Vec<String>> = None;
    let mut i = 2;
    while i < args.len() {
        let list = args
            .get(i + 1)
            .map(|v| v.split(',').map(str::to_string).collect::<Vec<_>>());
        match (args[i].as_str(), list) {
            ("--regions", Some(l)) => regions = Some(l),
            ("--income-tiers", Some(l)) => income_tiers = Some(l),
            ("--peers", Some(l)) => peers = Some(l),
            _ => usage(),
        }
        i += 2;
    }

    // ─── 5) compose + reshape, emit JSON for the display layer ───────
    let rows = match compose(
        &sources.scores_history,
        &sources.group_scores_history,
        focal,
        indicator,
        regions.as_deref(),
        income_tiers.as_deref(),
        peers.as_deref(),
    ) {
        Ok(rows) => rows,
        Err(e) => {
            // the message already enumerates the valid indicators
            error!("{e}");
            process::exit(1);
        }
    };
    if rows.is_empty() {
        info!(focal = %focal, indicator = %indicator, "no data for this selection");
    }

    let table = to_wide(&rows);
    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}
