use once_cell::sync::Lazy;
use regex::Regex;

use crate::frame::Frame;

// Indicator columns are discovered from the data, never hard-coded: any
// column named like `q12` or `q12a` is one. Deployments gain and lose
// indicators without a code change.
static INDICATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^q\d+[a-z]?$").unwrap());

pub fn is_indicator_column(name: &str) -> bool {
    INDICATOR.is_match(name)
}

/// All indicator columns present in `frame`, in header order.
pub fn indicator_columns(frame: &Frame) -> Vec<String> {
    frame
        .columns()
        .iter()
        .filter(|c| is_indicator_column(c))
        .cloned()
        .collect()
}
