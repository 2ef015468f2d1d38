//! Canonical domain types for the dashboard pipeline.

mod growth;
mod records;
mod symbol;

pub use growth::{GrowthRateVector, GROWTH_SLOTS, TERMINAL_SLOT};
pub use records::{MetricValue, OverviewRecord, PricePoint, ReportRecord};
pub use symbol::Symbol;
