use serde::Deserialize;

/// Lower bounds (inclusive) of the `Medium`, `High` and `Critical` labels.
///
/// Anything below `medium` is `Low`. Callers that keep their own settings can
/// deserialize this from any serde format; omitted fields use the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeverityThresholds {
    pub medium: i64,
    pub high: i64,
    pub critical: i64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        SeverityThresholds {
            medium: 10_000,
            high: 100_000,
            critical: 1_000_000,
        }
    }
}
