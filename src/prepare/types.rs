use serde::Serialize;

/// Whether a series is the query's primary subject or context alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Focal,
    Comparator,
}

/// Styling hint for the display layer: the focal series draws solid,
/// every comparator draws dashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComparatorKind {
    Region,
    IncomeTier,
    Peer,
}

/// One observation of one series, in the unified shape every extractor
/// emits and the composer concatenates. `value` is always present; rows
/// whose source cell was empty never get this far.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedRow {
    pub entity_key: String,
    pub period: i64,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_tier: Option<String>,
    pub role: Role,
    /// Unique per series within one composed table; reused downstream as a
    /// pivot column header, so it must not collide.
    pub display_name: String,
    pub line_style: LineStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparator_kind: Option<ComparatorKind>,
}

/// A period-by-series matrix for tabular display. `columns[0]` is always
/// "period"; the rest are display names in lexicographic order, one entry
/// in each row's `values` per name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WideTable {
    pub columns: Vec<String>,
    pub rows: Vec<WideRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WideRow {
    pub period: i64,
    pub values: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_in_wire_case() {
        assert_eq!(serde_json::to_string(&Role::Focal).unwrap(), "\"FOCAL\"");
        assert_eq!(
            serde_json::to_string(&LineStyle::Dashed).unwrap(),
            "\"DASHED\""
        );
        assert_eq!(
            serde_json::to_string(&ComparatorKind::IncomeTier).unwrap(),
            "\"INCOME_TIER\""
        );
    }

    #[test]
    fn absent_fields_stay_off_the_wire() {
        let row = PreparedRow {
            entity_key: "Kenya".to_string(),
            period: 2020,
            value: 3.5,
            region: Some("Africa".to_string()),
            income_tier: None,
            role: Role::Focal,
            display_name: "Kenya".to_string(),
            line_style: LineStyle::Solid,
            comparator_kind: None,
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"region\""));
        assert!(!json.contains("income_tier"));
        assert!(!json.contains("comparator_kind"));
    }
}
