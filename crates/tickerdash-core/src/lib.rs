//! # Tickerdash Core
//!
//! Core contracts and the report pipeline for the tickerdash company
//! dashboard.
//!
//! ## Overview
//!
//! This crate provides the foundational components for tickerdash:
//!
//! - **Canonical domain types** for symbols, report records, price points,
//!   overview payloads, and growth-rate vectors
//! - **Metric schema registry** mapping each report type to its ordered
//!   column list
//! - **Load-state machine** owned independently by every report slot
//! - **Dashboard service client** over the remote data and DCF endpoints
//! - **Dashboard session** coordinating per-symbol fetches with a
//!   stale-response guard
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Domain types (Symbol, ReportRecord, PricePoint, ...) |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP client abstraction |
//! | [`load_state`] | Per-slot fetch lifecycle |
//! | [`schema`] | Report types and metric schemas |
//! | [`service`] | Remote data/DCF service client |
//! | [`session`] | Per-symbol fetch coordination |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickerdash_core::{
//!     DashboardConfig, DashboardService, DashboardSession, ReportType,
//!     ReqwestHttpClient, Symbol,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Arc::new(ReqwestHttpClient::new());
//!     let service = DashboardService::new(client, DashboardConfig::default());
//!     let session = DashboardSession::new(service);
//!
//!     session.activate(Symbol::parse("AAPL").unwrap()).await;
//!     session.load_report(ReportType::IncomeStatement).await;
//!
//!     if let Some(records) = session.report(ReportType::IncomeStatement).loaded() {
//!         println!("{} reporting periods", records.len());
//!     }
//! }
//! ```
//!
//! ## Error Handling
//!
//! Service calls return [`ServiceError`] with a stable code per kind;
//! fetch failures are absorbed by the session into a `Failed` slot state
//! and never reach the rendering layer as errors.

pub mod domain;
pub mod error;
pub mod http_client;
pub mod load_state;
pub mod schema;
pub mod service;
pub mod session;

// Re-export commonly used types at crate root for convenience

// Domain types
pub use domain::{
    GrowthRateVector, MetricValue, OverviewRecord, PricePoint, ReportRecord, Symbol, GROWTH_SLOTS,
    TERMINAL_SLOT,
};

// Error types
pub use error::{CoreError, ValidationError};

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient,
};

// Load state
pub use load_state::LoadState;

// Schema registry
pub use schema::{
    schema_for, MetricColumn, MetricSchema, ReportType, BALANCE_SHEET_SCHEMA, CASH_FLOW_SCHEMA,
    EMPTY_SCHEMA, INCOME_STATEMENT_SCHEMA,
};

// Service types
pub use service::{DashboardConfig, DashboardService, ServiceError, ServiceErrorKind};

// Session
pub use session::DashboardSession;
