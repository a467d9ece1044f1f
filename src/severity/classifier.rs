use crate::models::Severity;
use crate::severity::thresholds::SeverityThresholds;

/// Classify an exposed-record count with the default thresholds.
///
/// `None` is `Unknown`. Negative counts are not rejected and land in `Low`.
pub fn classify(records_exposed: Option<i64>) -> Severity {
    classify_with(&SeverityThresholds::default(), records_exposed)
}

/// Classify against caller-supplied thresholds. Bounds are checked in
/// ascending order and the first match wins.
pub fn classify_with(thresholds: &SeverityThresholds, records_exposed: Option<i64>) -> Severity {
    let r = match records_exposed {
        Some(r) => r,
        None => return Severity::Unknown,
    };

    if r < thresholds.medium {
        Severity::Low
    } else if r < thresholds.high {
        Severity::Medium
    } else if r < thresholds.critical {
        Severity::High
    } else {
        Severity::Critical
    }
}
