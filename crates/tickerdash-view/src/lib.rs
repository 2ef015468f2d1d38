//! # Tickerdash View
//!
//! Schema-driven projections for the tickerdash dashboard: report records
//! become renderable grids and chart series, overview payloads become
//! formatted Metric/Value rows, and the growth-rate form manages the DCF
//! input fields. Everything here is synchronous and side-effect free apart
//! from chart-slot ownership.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`chart`] | Chart projection and chart-instance lifecycle |
//! | [`form`] | Growth-rate input form |
//! | [`overview`] | Overview key/value formatting |
//! | [`table`] | Tabular projection |

pub mod chart;
pub mod form;
pub mod overview;
pub mod table;

pub use chart::{ChartInstance, ChartKind, ChartSeries, ChartSlot};
pub use form::{parse_rate, slot_label, FocusDirection, GrowthRateForm};
pub use overview::{format_key, format_value};
pub use table::{CellAlign, Grid, GridColumn, PLACEHOLDER};
