use std::collections::{BTreeMap, BTreeSet};

use super::types::{PreparedRow, WideRow, WideTable};

/// Pivot composed long-format rows into a period-by-series matrix for
/// tabular display, values rounded to one decimal place.
///
/// Duplicate `(period, display_name)` cells should not occur given the
/// composer's invariants; if one does slip through, its values are averaged
/// rather than rejected.
///
/// Empty input yields zero data rows but a defined single `period` column;
/// substituting a user-facing "no data" placeholder is the caller's job.
pub fn to_wide(rows: &[PreparedRow]) -> WideTable {
    // 1) accumulate cells and the distinct periods/series
    let mut cells: BTreeMap<(i64, &str), (f64, u32)> = BTreeMap::new();
    let mut series: BTreeSet<&str> = BTreeSet::new();
    let mut periods: BTreeSet<i64> = BTreeSet::new();
    for row in rows {
        series.insert(&row.display_name);
        periods.insert(row.period);
        let cell = cells.entry((row.period, &row.display_name)).or_insert((0.0, 0));
        cell.0 += row.value;
        cell.1 += 1;
    }

    // 2) header: period first, then series names in lexicographic order
    let mut columns = Vec::with_capacity(series.len() + 1);
    columns.push("period".to_string());
    columns.extend(series.iter().map(|s| s.to_string()));

    // 3) one row per period, ascending
    let out_rows = periods
        .iter()
        .map(|&period| WideRow {
            period,
            values: series
                .iter()
                .map(|&name| {
                    cells
                        .get(&(period, name))
                        .map(|&(sum, n)| round1(sum / n as f64))
                })
                .collect(),
        })
        .collect();

    WideTable {
        columns,
        rows: out_rows,
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
