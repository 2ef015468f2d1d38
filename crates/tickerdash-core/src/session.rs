//! Per-symbol dashboard session and fetch coordination.
//!
//! One [`DashboardSession`] owns the load state of every report slot for
//! the currently displayed company. Slots transition independently —
//! statement fetches may be in flight concurrently and each publishes only
//! to its own slot. Fetch failures are absorbed here: they are logged and
//! become a `Failed` slot state, never an error in the rendering layer.
//!
//! Changing the symbol bumps an internal generation counter; a response
//! that lands after the symbol moved on is discarded instead of
//! overwriting the new symbol's state. In-flight requests are not
//! cancelled, merely ignored on arrival.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::load_state::LoadState;
use crate::service::{DashboardService, ServiceError};
use crate::{GrowthRateVector, OverviewRecord, PricePoint, ReportRecord, ReportType, Symbol};

#[derive(Debug, Default)]
struct SessionState {
    symbol: Option<Symbol>,
    generation: u64,
    prices: LoadState<Vec<PricePoint>>,
    overview: LoadState<OverviewRecord>,
    statements: HashMap<ReportType, LoadState<Vec<ReportRecord>>>,
    selected: HashMap<ReportType, String>,
    dcf_result: Option<f64>,
}

/// Coordinates all per-symbol fetches and owns their load state.
pub struct DashboardSession {
    service: DashboardService,
    state: Mutex<SessionState>,
}

impl DashboardSession {
    pub fn new(service: DashboardService) -> Self {
        Self {
            service,
            state: Mutex::new(SessionState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state
            .lock()
            .expect("session state should not be poisoned")
    }

    /// Switch the session to a new symbol.
    ///
    /// Every slot resets to `Idle`, prior payloads, metric selections and
    /// the DCF result are discarded, and responses still in flight for the
    /// previous symbol become stale.
    pub fn set_symbol(&self, symbol: Symbol) {
        let mut state = self.lock();
        state.symbol = Some(symbol);
        state.generation += 1;
        state.prices = LoadState::Idle;
        state.overview = LoadState::Idle;
        state.statements.clear();
        state.selected.clear();
        state.dcf_result = None;
    }

    pub fn symbol(&self) -> Option<Symbol> {
        self.lock().symbol.clone()
    }

    /// Set the symbol and run the two automatic fetches (price history and
    /// overview) concurrently. Statement fetches stay on explicit demand.
    pub async fn activate(&self, symbol: Symbol) {
        self.set_symbol(symbol);
        tokio::join!(self.load_prices(), self.load_overview());
    }

    pub async fn load_prices(&self) {
        let Some((symbol, generation)) = self.begin(|state| {
            state.prices = LoadState::Loading;
        }) else {
            return;
        };

        let outcome = self.service.price_history(&symbol).await;
        self.finish(generation, "stocks", |state, result| {
            state.prices = result.into();
        }, outcome);
    }

    pub async fn load_overview(&self) {
        let Some((symbol, generation)) = self.begin(|state| {
            state.overview = LoadState::Loading;
        }) else {
            return;
        };

        let outcome = self.service.overview(&symbol).await;
        self.finish(generation, "overview", |state, result| {
            state.overview = result.into();
        }, outcome);
    }

    /// Fetch one annual report. Concurrent re-invocation for the same
    /// report type is not de-duplicated; the host is expected to disable
    /// the triggering control while [`is_report_loading`](Self::is_report_loading)
    /// holds.
    pub async fn load_report(&self, report_type: ReportType) {
        let Some((symbol, generation)) = self.begin(|state| {
            state.statements.insert(report_type, LoadState::Loading);
        }) else {
            return;
        };

        let outcome = self.service.report(&symbol, report_type).await;
        self.finish(generation, report_type.as_str(), |state, result| {
            state.statements.insert(report_type, result.into());
        }, outcome);
    }

    /// Mark a slot as loading and capture the fetch context. Returns `None`
    /// (and leaves every slot untouched) when no symbol is active.
    fn begin(&self, mark: impl FnOnce(&mut SessionState)) -> Option<(Symbol, u64)> {
        let mut state = self.lock();
        let Some(symbol) = state.symbol.clone() else {
            tracing::warn!("fetch requested with no active symbol");
            return None;
        };
        mark(&mut state);
        Some((symbol, state.generation))
    }

    /// Publish a fetch outcome unless the session moved to another symbol
    /// while the request was in flight.
    fn finish<T>(
        &self,
        generation: u64,
        resource: &str,
        store: impl FnOnce(&mut SessionState, Result<T, ServiceError>),
        outcome: Result<T, ServiceError>,
    ) {
        if let Err(error) = &outcome {
            tracing::warn!(code = error.code(), "{resource} fetch failed: {}", error.message());
        }

        let mut state = self.lock();
        if state.generation != generation {
            tracing::debug!("discarding stale {resource} response");
            return;
        }
        store(&mut state, outcome);
    }

    pub fn prices(&self) -> LoadState<Vec<PricePoint>> {
        self.lock().prices.clone()
    }

    pub fn overview(&self) -> LoadState<OverviewRecord> {
        self.lock().overview.clone()
    }

    pub fn report(&self, report_type: ReportType) -> LoadState<Vec<ReportRecord>> {
        self.lock()
            .statements
            .get(&report_type)
            .cloned()
            .unwrap_or_default()
    }

    pub fn is_report_loading(&self, report_type: ReportType) -> bool {
        self.report(report_type).is_loading()
    }

    /// Record the chart metric selection for one report type. Selections
    /// are scoped per report type and never leak across reports.
    pub fn select_metric(&self, report_type: ReportType, key: impl Into<String>) {
        self.lock().selected.insert(report_type, key.into());
    }

    /// Effective chart metric for a report type: the stored selection when
    /// it names a selectable schema column, otherwise the schema's first
    /// selectable key.
    pub fn selected_metric(&self, report_type: ReportType) -> String {
        let schema = report_type.schema();
        let state = self.lock();
        state
            .selected
            .get(&report_type)
            .filter(|key| schema.is_selectable(key.as_str()))
            .cloned()
            .unwrap_or_else(|| {
                schema
                    .selectable()
                    .first()
                    .map_or_else(String::new, |column| column.key.to_owned())
            })
    }

    /// Submit a growth-rate vector to the DCF service.
    ///
    /// The stored result is cleared before the attempt, so a failed
    /// submission leaves "no result yet" rather than flashing the prior
    /// value. The outcome is also returned so the caller can surface a
    /// rejection message directly.
    pub async fn submit_growth_rates(
        &self,
        growth_rates: &GrowthRateVector,
    ) -> Result<f64, ServiceError> {
        let generation = {
            let mut state = self.lock();
            state.dcf_result = None;
            state.generation
        };

        let outcome = self.service.dcf_value(growth_rates).await;
        match &outcome {
            Ok(value) => {
                let mut state = self.lock();
                if state.generation == generation {
                    state.dcf_result = Some(*value);
                } else {
                    tracing::debug!("discarding stale dcf result");
                }
            }
            Err(error) => {
                tracing::warn!(code = error.code(), "dcf submission failed: {}", error.message());
            }
        }
        outcome
    }

    pub fn dcf_result(&self) -> Option<f64> {
        self.lock().dcf_result
    }
}
