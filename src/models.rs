use serde::{Deserialize, Serialize};

/// A single raw or coerced cell.
///
/// Raw tables may hold any mix of variants per column; after normalization the
/// numeric columns hold only `Int`/`Missing` and the text columns only
/// `Text`/`Missing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Missing,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Missing => write!(f, "<missing>"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Missing)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Missing,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Missing),
            },
            serde_json::Value::String(s) => Value::Text(s),
            // Nested structures are kept as their JSON text
            other => Value::Text(other.to_string()),
        }
    }
}

/// Ordinal severity of a breach, derived from its exposed-record count.
///
/// `Unknown` sorts below `Low` so that sorting a report ascending puts
/// unclassifiable rows first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Unknown,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Unknown => "Unknown",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of a normalized breach table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BreachRecord {
    pub year: Option<i64>,
    pub industry: Option<String>,
    pub attack_vector: Option<String>,
    pub records_exposed: Option<i64>,
    pub org_size: Option<String>,
    pub country: Option<String>,
}

impl BreachRecord {
    /// Severity label for this record's exposed-record count.
    pub fn severity(&self) -> Severity {
        crate::severity::classifier::classify(self.records_exposed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_value() {
        assert_eq!(Value::from(serde_json::json!(null)), Value::Missing);
        assert_eq!(Value::from(serde_json::json!(2021)), Value::Int(2021));
        assert_eq!(Value::from(serde_json::json!(1.5)), Value::Float(1.5));
        assert_eq!(Value::from(serde_json::json!("x")), Value::Text("x".into()));
        assert_eq!(Value::from(serde_json::json!(true)), Value::Bool(true));
        assert_eq!(
            Value::from(serde_json::json!([1, 2])),
            Value::Text("[1,2]".into())
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Missing);
        assert_eq!(Value::from(Some("Finance")), Value::Text("Finance".into()));
    }

    #[test]
    fn test_severity_labels_and_order() {
        assert_eq!(Severity::Critical.to_string(), "Critical");
        assert_eq!(Severity::Unknown.as_str(), "Unknown");
        assert!(Severity::Unknown < Severity::Low);
        assert!(Severity::High < Severity::Critical);
        assert_eq!(
            serde_json::to_string(&Severity::Medium).unwrap(),
            "\"Medium\""
        );
    }

    #[test]
    fn test_record_severity() {
        let record = BreachRecord {
            records_exposed: Some(150_000),
            ..Default::default()
        };
        assert_eq!(record.severity(), Severity::High);
        assert_eq!(BreachRecord::default().severity(), Severity::Unknown);
    }
}
