use tracing::debug;

use crate::frame::Frame;

use super::entity::extract_entity;
use super::group::extract_group;
use super::peers::extract_peers;
use super::types::{ComparatorKind, PreparedRow};
use super::PrepareError;

/// Combine the focal entity's series with every requested comparator series
/// into one normalized table.
///
/// Runs the entity extractor once, the group extractor once per comparator
/// kind, and the peer extractor once, then concatenates and sorts by
/// `(period, display_name)` ascending. Period is the primary key so a
/// single indicator renders chronologically, with stable tie-breaking by
/// name. No deduplication happens here: region, income-tier, and peer
/// identifiers live in disjoint namespaces, so display names cannot
/// collide across categories.
///
/// With no comparators requested, the result is exactly the focal series.
#[allow(clippy::too_many_arguments)]
pub fn compose(
    data: &Frame,
    group_data: &Frame,
    focal_entity: &str,
    indicator: &str,
    regions: Option<&[String]>,
    income_tiers: Option<&[String]>,
    peers: Option<&[String]>,
) -> Result<Vec<PreparedRow>, PrepareError> {
    let mut rows = extract_entity(data, focal_entity, indicator)?;
    let focal_rows = rows.len();

    rows.extend(extract_group(
        group_data,
        regions,
        indicator,
        ComparatorKind::Region,
    )?);
    rows.extend(extract_group(
        group_data,
        income_tiers,
        indicator,
        ComparatorKind::IncomeTier,
    )?);
    rows.extend(extract_peers(data, peers, indicator)?);

    rows.sort_by(|a, b| {
        a.period
            .cmp(&b.period)
            .then_with(|| a.display_name.cmp(&b.display_name))
    });

    debug!(
        indicator,
        focal = focal_entity,
        focal_rows,
        total_rows = rows.len(),
        "composed plot data"
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prepare::types::Role;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn entity_frame() -> Frame {
        Frame::new(
            row(&["entity_id", "period", "region", "income_tier", "q12a"]),
            vec![
                row(&["Kenya", "2020", "Africa", "Lower middle", "3.5"]),
                row(&["Kenya", "2021", "Africa", "Lower middle", "3.6"]),
                row(&["Ghana", "2020", "Africa", "Lower middle", "2.8"]),
                row(&["Ghana", "2021", "Africa", "Lower middle", "2.9"]),
            ],
        )
    }

    fn group_frame() -> Frame {
        Frame::new(
            row(&["group_id", "period", "group_kind", "q12a"]),
            vec![
                row(&["Africa", "2020", "Region", "3.1"]),
                row(&["Africa", "2021", "Region", "3.2"]),
                row(&["High income", "2020", "Income Group", "4.4"]),
                row(&["High income", "2021", "Income Group", "4.5"]),
            ],
        )
    }

    #[test]
    fn no_comparators_means_focal_only() {
        let composed = compose(
            &entity_frame(),
            &group_frame(),
            "Kenya",
            "q12a",
            None,
            None,
            None,
        )
        .unwrap();
        let focal_only = extract_entity(&entity_frame(), "Kenya", "q12a").unwrap();
        assert_eq!(composed, focal_only);
    }

    #[test]
    fn all_comparator_kinds_concatenate() {
        let regions = vec!["Africa".to_string()];
        let tiers = vec!["High income".to_string()];
        let peers = vec!["Ghana".to_string()];
        let rows = compose(
            &entity_frame(),
            &group_frame(),
            "Kenya",
            "q12a",
            Some(&regions),
            Some(&tiers),
            Some(&peers),
        )
        .unwrap();

        // 2 focal + 2 region + 2 income tier + 2 peer
        assert_eq!(rows.len(), 8);
        assert_eq!(
            rows.iter().filter(|r| r.role == Role::Focal).count(),
            2,
            "exactly one focal series"
        );
        assert_eq!(
            rows.iter()
                .filter(|r| r.role == Role::Focal)
                .filter(|r| r.entity_key != "Kenya")
                .count(),
            0
        );
    }

    #[test]
    fn output_is_sorted_by_period_then_name() {
        let regions = vec!["Africa".to_string()];
        let peers = vec!["Ghana".to_string()];
        let rows = compose(
            &entity_frame(),
            &group_frame(),
            "Kenya",
            "q12a",
            Some(&regions),
            None,
            Some(&peers),
        )
        .unwrap();

        let keys: Vec<(i64, &str)> = rows
            .iter()
            .map(|r| (r.period, r.display_name.as_str()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        // chronological first: every 2020 row comes before every 2021 row
        assert_eq!(keys[0].0, 2020);
        assert_eq!(keys.last().unwrap().0, 2021);
    }

    #[test]
    fn identical_calls_yield_identical_output() {
        let regions = vec!["Africa".to_string()];
        let call = || {
            compose(
                &entity_frame(),
                &group_frame(),
                "Kenya",
                "q12a",
                Some(&regions),
                None,
                None,
            )
            .unwrap()
        };
        assert_eq!(call(), call());
    }

    #[test]
    fn unknown_indicator_fails_the_whole_composition() {
        let err = compose(
            &entity_frame(),
            &group_frame(),
            "Kenya",
            "q99z",
            None,
            None,
            None,
        )
        .unwrap_err();
        match err {
            PrepareError::UnknownIndicator { available, .. } => {
                assert_eq!(available, &["q12a"]);
            }
        }
    }
}
