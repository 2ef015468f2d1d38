//! Dashboard data service client.
//!
//! Thin boundary over the remote data and DCF services: builds the
//! deterministic resource paths, executes one request per call (no retries,
//! no backoff), and parses responses permissively into domain records.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_client::{HttpClient, HttpRequest};
use crate::{GrowthRateVector, OverviewRecord, PricePoint, ReportRecord, ReportType, Symbol};

/// Service-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    /// Transport rejection or non-2xx status.
    Network,
    /// Response body did not match the expected shape.
    Parse,
    /// Operation issued against the service contract (e.g. no active symbol).
    InvalidRequest,
    /// Structured rejection from the DCF service; message is user-facing.
    Rejection,
}

/// Structured error returned by all service calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    kind: ServiceErrorKind,
    message: String,
}

impl ServiceError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: ServiceErrorKind::Network,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: ServiceErrorKind::Parse,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: ServiceErrorKind::InvalidRequest,
            message: message.into(),
        }
    }

    pub fn rejection(message: impl Into<String>) -> Self {
        Self {
            kind: ServiceErrorKind::Rejection,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> ServiceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            ServiceErrorKind::Network => "service.network",
            ServiceErrorKind::Parse => "service.parse",
            ServiceErrorKind::InvalidRequest => "service.invalid_request",
            ServiceErrorKind::Rejection => "service.rejection",
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for ServiceError {}

/// Service endpoints and transport settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Base URL of the per-symbol data endpoints.
    pub data_base_url: String,
    /// URL of the DCF compute endpoint.
    pub dcf_url: String,
    pub timeout_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_base_url: String::from("http://localhost:8080/api/stockDashboard"),
            dcf_url: String::from("http://localhost:8080/api/dcfData"),
            timeout_ms: 5_000,
        }
    }
}

#[derive(Debug, Serialize)]
struct DcfRequestBody<'a> {
    #[serde(rename = "growthRates")]
    growth_rates: &'a GrowthRateVector,
}

#[derive(Debug, Deserialize)]
struct DcfResponseBody {
    value: f64,
}

#[derive(Debug, Deserialize)]
struct DcfErrorBody {
    error: String,
}

/// Client for the remote data and DCF services.
#[derive(Clone)]
pub struct DashboardService {
    config: DashboardConfig,
    http_client: Arc<dyn HttpClient>,
}

impl DashboardService {
    pub fn new(http_client: Arc<dyn HttpClient>, config: DashboardConfig) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// `{base}/{symbol}/{resource}` with a percent-encoded symbol segment.
    fn resource_url(&self, symbol: &Symbol, resource: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.data_base_url,
            urlencoding::encode(symbol.as_str()),
            resource
        )
    }

    async fn fetch_body(&self, url: String) -> Result<String, ServiceError> {
        let request = HttpRequest::get(url).with_timeout_ms(self.config.timeout_ms);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| ServiceError::network(format!("transport error: {}", e.message())))?;

        if !response.is_success() {
            return Err(ServiceError::network(format!(
                "data service returned status {}",
                response.status
            )));
        }

        Ok(response.body)
    }

    /// Price history for the symbol, oldest-first as delivered.
    pub async fn price_history(&self, symbol: &Symbol) -> Result<Vec<PricePoint>, ServiceError> {
        let body = self.fetch_body(self.resource_url(symbol, "stocks")).await?;
        serde_json::from_str(&body)
            .map_err(|e| ServiceError::parse(format!("failed to parse price history: {}", e)))
    }

    /// Annual report records for the symbol, newest-first as delivered.
    pub async fn report(
        &self,
        symbol: &Symbol,
        report_type: ReportType,
    ) -> Result<Vec<ReportRecord>, ServiceError> {
        let body = self
            .fetch_body(self.resource_url(symbol, report_type.as_str()))
            .await?;
        serde_json::from_str(&body).map_err(|e| {
            ServiceError::parse(format!("failed to parse {report_type} response: {}", e))
        })
    }

    /// Flat company summary for the symbol.
    pub async fn overview(&self, symbol: &Symbol) -> Result<OverviewRecord, ServiceError> {
        let body = self
            .fetch_body(self.resource_url(symbol, "overview"))
            .await?;
        serde_json::from_str(&body)
            .map_err(|e| ServiceError::parse(format!("failed to parse overview: {}", e)))
    }

    /// Submit a growth-rate vector and return the computed DCF value.
    ///
    /// A structured `{"error": ..}` response surfaces its message verbatim
    /// as a [`ServiceErrorKind::Rejection`]; anything else non-2xx is a
    /// generic network failure.
    pub async fn dcf_value(&self, growth_rates: &GrowthRateVector) -> Result<f64, ServiceError> {
        let payload = serde_json::to_string(&DcfRequestBody { growth_rates })
            .map_err(|e| ServiceError::invalid_request(format!("unserializable vector: {}", e)))?;

        let request = HttpRequest::post(self.config.dcf_url.clone())
            .with_json_body(payload)
            .with_timeout_ms(self.config.timeout_ms);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| ServiceError::network(format!("transport error: {}", e.message())))?;

        if !response.is_success() {
            if let Ok(rejection) = serde_json::from_str::<DcfErrorBody>(&response.body) {
                return Err(ServiceError::rejection(rejection.error));
            }
            return Err(ServiceError::network(format!(
                "dcf service returned status {}",
                response.status
            )));
        }

        let parsed: DcfResponseBody = serde_json::from_str(&response.body)
            .map_err(|e| ServiceError::parse(format!("failed to parse dcf response: {}", e)))?;

        Ok(parsed.value)
    }
}
