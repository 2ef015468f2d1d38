//! Chart projection and chart-instance lifecycle.
//!
//! A [`ChartSlot`] stands in for one drawing target supplied by the
//! hosting view and owns at most one [`ChartInstance`] at a time.
//! Attaching a new instance releases the prior one first, so a target is
//! never bound twice — re-selection replaces the series, it does not
//! accumulate datasets.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use tickerdash_core::{MetricSchema, MetricValue, PricePoint, ReportRecord};

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// Visual style of a series, carried so the render surface can style
/// without inspecting the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
}

/// Time-ordered label/value series ready for plotting.
///
/// Derived and ephemeral: recomputed whenever the source records or the
/// selected metric change, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
    pub series_name: String,
}

impl ChartSeries {
    /// Project report records into a series for one metric.
    ///
    /// A `selected_key` that is not a selectable schema column falls back
    /// to the schema's first selectable key. Records arrive newest-first;
    /// labels and values are reversed so the chart reads left-to-right
    /// oldest-first. Empty input projects to `None`.
    pub fn from_report(
        records: &[ReportRecord],
        schema: &MetricSchema,
        selected_key: &str,
    ) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let key = if schema.is_selectable(selected_key) {
            selected_key
        } else {
            schema.selectable().first()?.key
        };

        let period_key = schema.period_key();
        let mut labels: Vec<String> = records
            .iter()
            .map(|record| record.period(period_key).unwrap_or_default().to_owned())
            .collect();
        let mut values: Vec<Option<f64>> = records
            .iter()
            .map(|record| record.get(key).and_then(MetricValue::as_f64))
            .collect();

        labels.reverse();
        values.reverse();

        Some(Self {
            labels,
            values,
            series_name: schema.label_for(key).to_owned(),
        })
    }

    /// Project the price history into a line series. Points already arrive
    /// oldest-first, so no reversal happens here.
    pub fn from_prices(points: &[PricePoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        Some(Self {
            labels: points.iter().map(|point| point.date.clone()).collect(),
            values: points.iter().map(|point| Some(point.price)).collect(),
            series_name: String::from("Price (USD)"),
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// One chart bound to a render target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartInstance {
    id: u64,
    target_id: String,
    pub kind: ChartKind,
    pub series: ChartSeries,
}

impl ChartInstance {
    fn new(target_id: &str, kind: ChartKind, series: ChartSeries) -> Self {
        Self {
            id: NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed),
            target_id: target_id.to_owned(),
            kind,
            series,
        }
    }

    /// Identity of this instance; a replacement always gets a fresh id.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }
}

/// Owner of the single chart instance allowed on one render target.
#[derive(Debug)]
pub struct ChartSlot {
    target_id: String,
    active: Option<ChartInstance>,
}

impl ChartSlot {
    /// `target_id` is the stable id of the drawing target supplied by the
    /// hosting view.
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            active: None,
        }
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn active(&self) -> Option<&ChartInstance> {
        self.active.as_ref()
    }

    pub fn instance_count(&self) -> usize {
        usize::from(self.active.is_some())
    }

    /// Bind a freshly projected series, releasing any prior instance
    /// before the new one is attached.
    pub fn attach(&mut self, kind: ChartKind, series: ChartSeries) -> &ChartInstance {
        self.active = None;
        self.active
            .insert(ChartInstance::new(&self.target_id, kind, series))
    }

    /// Project and attach a report series. Empty records are a no-op: the
    /// currently attached instance (if any) stays untouched.
    pub fn render_report(
        &mut self,
        records: &[ReportRecord],
        schema: &MetricSchema,
        selected_key: &str,
    ) -> bool {
        match ChartSeries::from_report(records, schema, selected_key) {
            Some(series) => {
                self.attach(ChartKind::Bar, series);
                true
            }
            None => false,
        }
    }

    /// Project and attach the price-history line. Empty input is a no-op.
    pub fn render_prices(&mut self, points: &[PricePoint]) -> bool {
        match ChartSeries::from_prices(points) {
            Some(series) => {
                self.attach(ChartKind::Line, series);
                true
            }
            None => false,
        }
    }

    /// Explicitly release the bound instance, leaving the target empty.
    pub fn release(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickerdash_core::ReportType;

    fn record(period: &str, net_income: f64) -> ReportRecord {
        ReportRecord::new()
            .with("fiscalDateEnding", MetricValue::Text(period.to_owned()))
            .with("netIncome", MetricValue::Number(net_income))
            .with("grossProfit", MetricValue::Number(net_income * 2.0))
    }

    fn newest_first() -> Vec<ReportRecord> {
        vec![
            record("2023-09-30", 97.0),
            record("2022-09-30", 99.8),
            record("2021-09-30", 94.7),
        ]
    }

    #[test]
    fn report_series_reverses_to_oldest_first() {
        let schema = ReportType::IncomeStatement.schema();
        let series = ChartSeries::from_report(&newest_first(), schema, "netIncome")
            .expect("non-empty records project");

        assert_eq!(series.labels, vec!["2021-09-30", "2022-09-30", "2023-09-30"]);
        assert_eq!(series.values, vec![Some(94.7), Some(99.8), Some(97.0)]);
        assert_eq!(series.labels.len(), series.values.len());
        assert_eq!(series.series_name, "Net Income");
    }

    #[test]
    fn unknown_metric_falls_back_to_first_selectable() {
        let schema = ReportType::IncomeStatement.schema();
        let series = ChartSeries::from_report(&newest_first(), schema, "noSuchMetric")
            .expect("non-empty records project");
        assert_eq!(series.series_name, "Gross Profit");
    }

    #[test]
    fn empty_records_project_to_none_and_keep_the_slot() {
        let schema = ReportType::IncomeStatement.schema();
        let mut slot = ChartSlot::new("incomeStatementChart");

        assert!(slot.render_report(&newest_first(), schema, "netIncome"));
        let bound = slot.active().expect("instance bound").id();

        assert!(!slot.render_report(&[], schema, "netIncome"));
        assert_eq!(slot.active().expect("instance kept").id(), bound);
        assert_eq!(slot.instance_count(), 1);
    }

    #[test]
    fn reattaching_replaces_the_single_instance() {
        let schema = ReportType::IncomeStatement.schema();
        let mut slot = ChartSlot::new("incomeStatementChart");

        slot.render_report(&newest_first(), schema, "netIncome");
        let first = slot.active().expect("bound").id();

        slot.render_report(&newest_first(), schema, "grossProfit");
        let second = slot.active().expect("bound").id();

        assert_ne!(first, second, "replacement must be a fresh instance");
        assert_eq!(slot.instance_count(), 1);
        assert_eq!(
            slot.active().expect("bound").series.series_name,
            "Gross Profit"
        );
    }

    #[test]
    fn price_series_keeps_source_order() {
        let points = vec![
            PricePoint {
                date: String::from("2024-01-02"),
                price: 185.6,
            },
            PricePoint {
                date: String::from("2024-01-03"),
                price: 184.2,
            },
        ];

        let series = ChartSeries::from_prices(&points).expect("non-empty points project");
        assert_eq!(series.labels, vec!["2024-01-02", "2024-01-03"]);
        assert_eq!(series.values, vec![Some(185.6), Some(184.2)]);
        assert_eq!(series.series_name, "Price (USD)");
    }
}
