use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Loosely-typed metric value as delivered by the data service.
///
/// Statement payloads mix JSON numbers, numeric strings, sentinel strings
/// (`"None"`), and nulls; consumers decide how strict to be.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
    Null,
}

impl MetricValue {
    /// Numeric reading used by chart projection. Numeric strings are
    /// accepted; anything else maps to `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
            Self::Null => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// One reporting period of a financial statement: metric key → value.
///
/// Records arrive newest-first within a report; the record itself carries
/// no ordering. Missing keys are not an error (§ permissive parsing) —
/// lookups simply return `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportRecord(BTreeMap<String, MetricValue>);

impl ReportRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&MetricValue> {
        self.0.get(key)
    }

    /// Period identifier text for this record, when present.
    pub fn period(&self, period_key: &str) -> Option<&str> {
        self.get(period_key).and_then(MetricValue::as_text)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: MetricValue) {
        self.0.insert(key.into(), value);
    }

    pub fn with(mut self, key: impl Into<String>, value: MetricValue) -> Self {
        self.insert(key, value);
        self
    }
}

/// One point of the price-history series.
///
/// The service delivers these oldest-first, ready for left-to-right
/// charting without reversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

/// Flat key/value company summary.
///
/// Values stay as raw JSON: the overview mixes strings, numbers, dates and
/// the occasional nested object, and the formatter decides per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverviewRecord(serde_json::Map<String, serde_json::Value>);

impl OverviewRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderable entries. The `description` field is prose, not a metric,
    /// and is excluded here before any formatting happens.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.0.iter().filter(|(key, _)| key.as_str() != "description")
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.0.insert(key.into(), value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_value_parses_numeric_strings() {
        assert_eq!(MetricValue::Text(String::from("1.5")).as_f64(), Some(1.5));
        assert_eq!(MetricValue::Number(-3.0).as_f64(), Some(-3.0));
        assert_eq!(MetricValue::Text(String::from("None")).as_f64(), None);
        assert_eq!(MetricValue::Null.as_f64(), None);
    }

    #[test]
    fn report_record_round_trips_mixed_values() {
        let json = r#"{"fiscalDateEnding":"2023-09-30","netIncome":96995000000,"ebitda":"125820000000","depreciation":null}"#;
        let record: ReportRecord = serde_json::from_str(json).expect("record should parse");

        assert_eq!(record.period("fiscalDateEnding"), Some("2023-09-30"));
        assert_eq!(record.get("netIncome").and_then(MetricValue::as_f64), Some(96_995_000_000.0));
        assert_eq!(record.get("ebitda").and_then(MetricValue::as_f64), Some(125_820_000_000.0));
        assert!(record.get("depreciation").expect("key present").is_null());
        assert!(record.get("grossProfit").is_none());
    }

    #[test]
    fn overview_entries_exclude_description() {
        let mut overview = OverviewRecord::new();
        overview.insert("name", serde_json::json!("Apple Inc"));
        overview.insert("description", serde_json::json!("long prose"));
        overview.insert("peRatio", serde_json::json!(28.1));

        let keys: Vec<&str> = overview.entries().map(|(key, _)| key.as_str()).collect();
        assert!(!keys.contains(&"description"));
        assert_eq!(keys.len(), 2);
    }
}
